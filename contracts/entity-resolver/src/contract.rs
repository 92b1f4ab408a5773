#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response};
use cw2::set_contract_version;
use cw_utils::nonpayable;
use dvote_rs::{
    constants::SUPPORTED_INTERFACES,
    core::{ContractError, ContractResult},
    entity_resolver::{
        EntityResolverExecuteMsg, EntityResolverInstantiateMsg, EntityResolverMigrateMsg,
        EntityResolverQueryMsg,
    },
    events::DomainEvent,
    types::EntityId,
};

use crate::state;

const CONTRACT_NAME: &str = "crates.io:entity-resolver";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    _msg: EntityResolverInstantiateMsg,
) -> ContractResult {
    nonpayable(&info)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default().add_attribute("initialized", "true"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: EntityResolverMigrateMsg) -> ContractResult {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default().add_attribute("migrated", "true"))
}

/// Only the address an entity id was derived from may write its records
fn assert_owner(deps: Deps, info: &MessageInfo, entity_id: &EntityId) -> Result<(), ContractError> {
    if EntityId::from_address(deps.api, &info.sender)? != *entity_id {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: EntityResolverExecuteMsg,
) -> ContractResult {
    nonpayable(&info)?;

    let event = match msg {
        EntityResolverExecuteMsg::SetAddr { node, address } => {
            assert_owner(deps.as_ref(), &info, &node)?;
            let address = deps.api.addr_validate(address.as_str())?;
            state::set_addr(deps.storage, &node, &address)?;

            DomainEvent::AddrChanged {
                contract_address: env.contract.address,
                node,
                address,
            }
        }
        EntityResolverExecuteMsg::SetText {
            entity_id,
            key,
            value,
        } => {
            assert_owner(deps.as_ref(), &info, &entity_id)?;
            state::set_text(deps.storage, &entity_id, &key, &value)?;

            DomainEvent::TextChanged {
                contract_address: env.contract.address,
                entity_id,
                key,
            }
        }
        EntityResolverExecuteMsg::SetListText {
            entity_id,
            key,
            index,
            value,
        } => {
            assert_owner(deps.as_ref(), &info, &entity_id)?;
            state::set_list_text(deps.storage, &entity_id, &key, index, &value)?;

            DomainEvent::ListItemChanged {
                contract_address: env.contract.address,
                entity_id,
                key,
                index,
            }
        }
        EntityResolverExecuteMsg::PushListText {
            entity_id,
            key,
            value,
        } => {
            assert_owner(deps.as_ref(), &info, &entity_id)?;
            let index = state::push_list_text(deps.storage, &entity_id, &key, &value)?;

            DomainEvent::ListItemChanged {
                contract_address: env.contract.address,
                entity_id,
                key,
                index,
            }
        }
        EntityResolverExecuteMsg::RemoveListIndex {
            entity_id,
            key,
            index,
        } => {
            assert_owner(deps.as_ref(), &info, &entity_id)?;
            state::remove_list_index(deps.storage, &entity_id, &key, index)?;

            DomainEvent::ListItemRemoved {
                contract_address: env.contract.address,
                entity_id,
                key,
                index,
            }
        }
    };

    Ok(Response::default().add_event(event))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: EntityResolverQueryMsg) -> Result<Binary, ContractError> {
    Ok(match msg {
        EntityResolverQueryMsg::SupportsInterface { interface_id } => to_json_binary(
            &SUPPORTED_INTERFACES
                .iter()
                .any(|id| id.as_slice() == interface_id.as_slice()),
        )?,
        EntityResolverQueryMsg::GetEntityId { entity_address } => {
            to_json_binary(&EntityId::from_address(deps.api, &entity_address)?)?
        }
        EntityResolverQueryMsg::Addr { node } => {
            to_json_binary(&state::get_addr(deps.storage, &node)?)?
        }
        EntityResolverQueryMsg::Text { entity_id, key } => {
            to_json_binary(&state::get_text(deps.storage, &entity_id, &key)?)?
        }
        EntityResolverQueryMsg::List { entity_id, key } => {
            to_json_binary(&state::get_list(deps.storage, &entity_id, &key)?)?
        }
        EntityResolverQueryMsg::ListText {
            entity_id,
            key,
            index,
        } => to_json_binary(&state::get_list_text(
            deps.storage,
            &entity_id,
            &key,
            index,
        )?)?,
    })
}

#[cfg(test)]
fn query_json<T: serde::de::DeserializeOwned>(
    deps: Deps,
    env: Env,
    msg: EntityResolverQueryMsg,
) -> T {
    cosmwasm_std::from_json(query(deps, env, msg).unwrap()).unwrap()
}

#[cfg(test)]
mod execute_tests {
    use super::*;
    use cosmwasm_std::{
        testing::{message_info, mock_dependencies, mock_env},
        Addr, Coin, Event,
    };
    use cw_utils::PaymentError;

    #[test]
    fn owner_can_set_text() {
        let mut deps = mock_dependencies();
        let env = mock_env();
        let entity = deps.api.addr_make("entity");
        let entity_id = EntityId::from_address(&deps.api, &entity).unwrap();

        let response = execute(
            deps.as_mut(),
            env.clone(),
            message_info(&entity, &[]),
            EntityResolverExecuteMsg::SetText {
                entity_id: entity_id.clone(),
                key: "name".to_string(),
                value: "Entity".to_string(),
            },
        )
        .unwrap();

        assert_eq!(
            response.events,
            vec![Event::from(DomainEvent::TextChanged {
                contract_address: env.contract.address.clone(),
                entity_id: entity_id.clone(),
                key: "name".to_string(),
            })]
        );

        let text: String = query_json(
            deps.as_ref(),
            env,
            EntityResolverQueryMsg::Text {
                entity_id,
                key: "name".to_string(),
            },
        );

        assert_eq!(text, "Entity");
    }

    #[test]
    fn other_address_cannot_write_records() {
        let mut deps = mock_dependencies();
        let env = mock_env();
        let entity = deps.api.addr_make("entity");
        let intruder = deps.api.addr_make("intruder");
        let entity_id = EntityId::from_address(&deps.api, &entity).unwrap();

        let msgs = vec![
            EntityResolverExecuteMsg::SetAddr {
                node: entity_id.clone(),
                address: intruder.clone(),
            },
            EntityResolverExecuteMsg::SetText {
                entity_id: entity_id.clone(),
                key: "name".to_string(),
                value: "Evil corp".to_string(),
            },
            EntityResolverExecuteMsg::PushListText {
                entity_id: entity_id.clone(),
                key: "list".to_string(),
                value: "value".to_string(),
            },
            EntityResolverExecuteMsg::SetListText {
                entity_id: entity_id.clone(),
                key: "list".to_string(),
                index: 0,
                value: "value".to_string(),
            },
            EntityResolverExecuteMsg::RemoveListIndex {
                entity_id,
                key: "list".to_string(),
                index: 0,
            },
        ];

        for msg in msgs {
            assert_eq!(
                execute(
                    deps.as_mut(),
                    env.clone(),
                    message_info(&intruder, &[]),
                    msg
                )
                .unwrap_err(),
                ContractError::Unauthorized {}
            );
        }
    }

    #[test]
    fn rejects_funds() {
        let mut deps = mock_dependencies();
        let entity = deps.api.addr_make("entity");
        let entity_id = EntityId::from_address(&deps.api, &entity).unwrap();

        assert_eq!(
            execute(
                deps.as_mut(),
                mock_env(),
                message_info(&entity, &[Coin::new(1_u128, "uatom")]),
                EntityResolverExecuteMsg::SetText {
                    entity_id,
                    key: "name".to_string(),
                    value: "Entity".to_string(),
                },
            )
            .unwrap_err(),
            ContractError::Payment(PaymentError::NonPayable {})
        );
    }

    #[test]
    fn set_list_text_out_of_range_fails() {
        let mut deps = mock_dependencies();
        let entity = deps.api.addr_make("entity");
        let entity_id = EntityId::from_address(&deps.api, &entity).unwrap();

        assert_eq!(
            execute(
                deps.as_mut(),
                mock_env(),
                message_info(&entity, &[]),
                EntityResolverExecuteMsg::SetListText {
                    entity_id,
                    key: "list".to_string(),
                    index: 0,
                    value: "value".to_string(),
                },
            )
            .unwrap_err(),
            ContractError::generic_err("Index 0 is out of range for a list of 0 items")
        );
    }

    #[test]
    fn set_addr_validates_address() {
        let mut deps = mock_dependencies();
        let entity = deps.api.addr_make("entity");
        let entity_id = EntityId::from_address(&deps.api, &entity).unwrap();

        assert!(execute(
            deps.as_mut(),
            mock_env(),
            message_info(&entity, &[]),
            EntityResolverExecuteMsg::SetAddr {
                node: entity_id,
                address: Addr::unchecked("invalid"),
            },
        )
        .is_err());
    }
}

#[cfg(test)]
mod query_tests {
    use super::*;
    use cosmwasm_std::{testing::mock_dependencies, testing::mock_env, HexBinary};
    use dvote_rs::constants::{
        ADDR_INTERFACE_ID, INTERFACE_META_ID, LIST_INTERFACE_ID, TEXT_INTERFACE_ID,
    };
    use rstest::rstest;

    #[rstest]
    #[case(INTERFACE_META_ID.to_vec(), true)]
    #[case(ADDR_INTERFACE_ID.to_vec(), true)]
    #[case(TEXT_INTERFACE_ID.to_vec(), true)]
    #[case(LIST_INTERFACE_ID.to_vec(), true)]
    #[case(vec![0xff, 0xff, 0xff, 0xff], false)]
    #[case(vec![], false)]
    fn supports_interface(#[case] interface_id: Vec<u8>, #[case] expected: bool) {
        let deps = mock_dependencies();

        let supported: bool = query_json(
            deps.as_ref(),
            mock_env(),
            EntityResolverQueryMsg::SupportsInterface {
                interface_id: HexBinary::from(interface_id),
            },
        );

        assert_eq!(supported, expected);
    }

    #[test]
    fn get_entity_id_matches_derivation() {
        let deps = mock_dependencies();
        let entity = deps.api.addr_make("entity");

        let entity_id: EntityId = query_json(
            deps.as_ref(),
            mock_env(),
            EntityResolverQueryMsg::GetEntityId {
                entity_address: entity.clone(),
            },
        );

        assert_eq!(
            entity_id,
            EntityId::from_address(&deps.api, &entity).unwrap()
        );
    }

    #[test]
    fn list_text_out_of_range_fails() {
        let deps = mock_dependencies();
        let entity = deps.api.addr_make("entity");

        assert!(query(
            deps.as_ref(),
            mock_env(),
            EntityResolverQueryMsg::ListText {
                entity_id: EntityId::from_address(&deps.api, &entity).unwrap(),
                key: "list".to_string(),
                index: 3,
            },
        )
        .is_err());
    }
}
