use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::Map;
use dvote_rs::{
    core::ContractError,
    list::{get_at, set_at, swap_remove_at},
    types::EntityId,
};

const ADDRS: Map<&[u8], Addr> = Map::new("addrs_v1");
const TEXTS: Map<(&[u8], &str), String> = Map::new("texts_v1");
const LISTS: Map<(&[u8], &str), Vec<String>> = Map::new("lists_v1");

pub fn get_addr(store: &dyn Storage, node: &EntityId) -> StdResult<Option<Addr>> {
    ADDRS.may_load(store, node.as_slice())
}

pub fn set_addr(store: &mut dyn Storage, node: &EntityId, address: &Addr) -> StdResult<()> {
    ADDRS.save(store, node.as_slice(), address)
}

pub fn get_text(store: &dyn Storage, entity_id: &EntityId, key: &str) -> StdResult<String> {
    Ok(TEXTS
        .may_load(store, (entity_id.as_slice(), key))?
        .unwrap_or_default())
}

pub fn set_text(
    store: &mut dyn Storage,
    entity_id: &EntityId,
    key: &str,
    value: &str,
) -> StdResult<()> {
    TEXTS.save(store, (entity_id.as_slice(), key), &value.to_string())
}

pub fn get_list(store: &dyn Storage, entity_id: &EntityId, key: &str) -> StdResult<Vec<String>> {
    Ok(LISTS
        .may_load(store, (entity_id.as_slice(), key))?
        .unwrap_or_default())
}

pub fn get_list_text(
    store: &dyn Storage,
    entity_id: &EntityId,
    key: &str,
    index: u32,
) -> Result<String, ContractError> {
    let list = get_list(store, entity_id, key)?;
    Ok(get_at(&list, index)?.clone())
}

pub fn set_list_text(
    store: &mut dyn Storage,
    entity_id: &EntityId,
    key: &str,
    index: u32,
    value: &str,
) -> Result<(), ContractError> {
    let mut list = get_list(store, entity_id, key)?;
    set_at(&mut list, index, value.to_string())?;
    Ok(LISTS.save(store, (entity_id.as_slice(), key), &list)?)
}

/// Appends the value and returns its index
pub fn push_list_text(
    store: &mut dyn Storage,
    entity_id: &EntityId,
    key: &str,
    value: &str,
) -> StdResult<u32> {
    let mut list = get_list(store, entity_id, key)?;
    list.push(value.to_string());
    LISTS.save(store, (entity_id.as_slice(), key), &list)?;
    Ok(list.len() as u32 - 1)
}

pub fn remove_list_index(
    store: &mut dyn Storage,
    entity_id: &EntityId,
    key: &str,
    index: u32,
) -> Result<(), ContractError> {
    let mut list = get_list(store, entity_id, key)?;
    swap_remove_at(&mut list, index, None)?;

    if list.is_empty() {
        LISTS.remove(store, (entity_id.as_slice(), key));
    } else {
        LISTS.save(store, (entity_id.as_slice(), key), &list)?;
    }

    Ok(())
}
