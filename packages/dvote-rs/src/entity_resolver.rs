use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, HexBinary, QuerierWrapper, StdResult};

use crate::{core::Contract, types::EntityId};

#[cw_serde]
pub struct EntityResolverInstantiateMsg {}

#[cw_serde]
pub struct EntityResolverMigrateMsg {}

#[cw_serde]
pub enum EntityResolverExecuteMsg {
    /// Sets the address for the given node
    SetAddr { node: EntityId, address: Addr },
    /// Sets the text of the entity and key. Only the owner of the entity id.
    SetText {
        entity_id: EntityId,
        key: String,
        value: String,
    },
    /// Overwrites the list entry at `index`. Only the owner of the entity id.
    SetListText {
        entity_id: EntityId,
        key: String,
        index: u32,
        value: String,
    },
    /// Appends a value to the list. Only the owner of the entity id.
    PushListText {
        entity_id: EntityId,
        key: String,
        value: String,
    },
    /// Removes the list entry at `index`, moving the last entry into its
    /// place. Only the owner of the entity id.
    RemoveListIndex {
        entity_id: EntityId,
        key: String,
        index: u32,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum EntityResolverQueryMsg {
    #[returns(bool)]
    SupportsInterface { interface_id: HexBinary },
    #[returns(EntityId)]
    GetEntityId { entity_address: Addr },
    #[returns(Option<Addr>)]
    Addr { node: EntityId },
    #[returns(String)]
    Text { entity_id: EntityId, key: String },
    #[returns(Vec<String>)]
    List { entity_id: EntityId, key: String },
    #[returns(String)]
    ListText {
        entity_id: EntityId,
        key: String,
        index: u32,
    },
}

/// Typed handle on a deployed entity resolver.
pub struct EntityResolver(pub Addr);

impl EntityResolver {
    pub fn address(&self) -> Addr {
        self.0.clone()
    }

    fn call(&self, msg: &EntityResolverExecuteMsg) -> StdResult<CosmosMsg> {
        Ok(Contract(self.address()).call(to_json_binary(msg)?, vec![]))
    }

    pub fn set_addr(&self, node: &EntityId, address: &Addr) -> StdResult<CosmosMsg> {
        self.call(&EntityResolverExecuteMsg::SetAddr {
            node: node.clone(),
            address: address.clone(),
        })
    }

    pub fn set_text(&self, entity_id: &EntityId, key: &str, value: &str) -> StdResult<CosmosMsg> {
        self.call(&EntityResolverExecuteMsg::SetText {
            entity_id: entity_id.clone(),
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    pub fn set_list_text(
        &self,
        entity_id: &EntityId,
        key: &str,
        index: u32,
        value: &str,
    ) -> StdResult<CosmosMsg> {
        self.call(&EntityResolverExecuteMsg::SetListText {
            entity_id: entity_id.clone(),
            key: key.to_string(),
            index,
            value: value.to_string(),
        })
    }

    pub fn push_list_text(
        &self,
        entity_id: &EntityId,
        key: &str,
        value: &str,
    ) -> StdResult<CosmosMsg> {
        self.call(&EntityResolverExecuteMsg::PushListText {
            entity_id: entity_id.clone(),
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    pub fn remove_list_index(
        &self,
        entity_id: &EntityId,
        key: &str,
        index: u32,
    ) -> StdResult<CosmosMsg> {
        self.call(&EntityResolverExecuteMsg::RemoveListIndex {
            entity_id: entity_id.clone(),
            key: key.to_string(),
            index,
        })
    }

    fn query<T: serde::de::DeserializeOwned>(
        &self,
        querier: &QuerierWrapper,
        msg: &EntityResolverQueryMsg,
    ) -> StdResult<T> {
        querier.query_wasm_smart(&self.0, msg)
    }

    pub fn supports_interface(
        &self,
        querier: &QuerierWrapper,
        interface_id: &HexBinary,
    ) -> StdResult<bool> {
        self.query(
            querier,
            &EntityResolverQueryMsg::SupportsInterface {
                interface_id: interface_id.clone(),
            },
        )
    }

    pub fn get_entity_id(
        &self,
        querier: &QuerierWrapper,
        entity_address: &Addr,
    ) -> StdResult<EntityId> {
        self.query(
            querier,
            &EntityResolverQueryMsg::GetEntityId {
                entity_address: entity_address.clone(),
            },
        )
    }

    pub fn addr(&self, querier: &QuerierWrapper, node: &EntityId) -> StdResult<Option<Addr>> {
        self.query(
            querier,
            &EntityResolverQueryMsg::Addr { node: node.clone() },
        )
    }

    pub fn text(&self, querier: &QuerierWrapper, entity_id: &EntityId, key: &str) -> StdResult<String> {
        self.query(
            querier,
            &EntityResolverQueryMsg::Text {
                entity_id: entity_id.clone(),
                key: key.to_string(),
            },
        )
    }

    pub fn list(
        &self,
        querier: &QuerierWrapper,
        entity_id: &EntityId,
        key: &str,
    ) -> StdResult<Vec<String>> {
        self.query(
            querier,
            &EntityResolverQueryMsg::List {
                entity_id: entity_id.clone(),
                key: key.to_string(),
            },
        )
    }

    pub fn list_text(
        &self,
        querier: &QuerierWrapper,
        entity_id: &EntityId,
        key: &str,
        index: u32,
    ) -> StdResult<String> {
        self.query(
            querier,
            &EntityResolverQueryMsg::ListText {
                entity_id: entity_id.clone(),
                key: key.to_string(),
                index,
            },
        )
    }
}
