#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Empty, Env, Event, MessageInfo, Response, StdResult,
    Storage,
};
use cw2::set_contract_version;
use cw_utils::nonpayable;
use dvote_rs::{
    core::{ContractError, ContractResult},
    events::DomainEvent,
    list::swap_remove_at,
    types::{ProcessEnvelopeType, ProcessId, ProcessMode, ProcessStatus},
    voting_process::{
        Process, Relay, ResultsResponse, VotingProcessConfig, VotingProcessExecuteMsg,
        VotingProcessInstantiateMsg, VotingProcessMigrateMsg, VotingProcessQueryMsg,
    },
};

use crate::{
    state::{
        get_config, get_entity_process_count, increment_entity_process_count, is_active_relay,
        is_oracle, push_vote_batch, save_relay, update_config, ENVELOPE_TYPES, MODES, ORACLES,
        PRIVATE_KEYS, PROCESSES, RELAYS, RELAY_INDEX, VALIDATORS, VOTE_BATCHES, VOTE_BATCH_COUNT,
    },
    validation::{validate_status_change, Validate},
};

const CONTRACT_NAME: &str = "crates.io:voting-process";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: VotingProcessInstantiateMsg,
) -> ContractResult {
    nonpayable(&info)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    update_config(
        deps.storage,
        VotingProcessConfig {
            owner: info.sender,
            chain_id: msg.chain_id,
            genesis: msg.genesis,
        },
    )?;

    let envelope_types = msg
        .envelope_types
        .map(|types| types.into_iter().map(u8::from).collect::<Vec<_>>())
        .unwrap_or_else(|| ProcessEnvelopeType::VALUES.to_vec());

    for envelope_type in envelope_types {
        ENVELOPE_TYPES.save(deps.storage, envelope_type, &Empty {})?;
    }

    let modes = msg
        .modes
        .map(|modes| modes.into_iter().map(u8::from).collect::<Vec<_>>())
        .unwrap_or_else(|| ProcessMode::VALUES.to_vec());

    for mode in modes {
        MODES.save(deps.storage, mode, &Empty {})?;
    }

    let mut oracles = vec![];
    for oracle in msg.oracles {
        let oracle = deps.api.addr_validate(oracle.as_str())?;
        if oracles.contains(&oracle) {
            return Err(ContractError::generic_err(format!(
                "Oracle {oracle} is listed more than once"
            )));
        }
        oracles.push(oracle);
    }
    ORACLES.save(deps.storage, &oracles)?;

    let mut validators: Vec<String> = vec![];
    for validator in msg.validators {
        if validator.is_empty() {
            return Err(ContractError::generic_err("Validator public key cannot be empty"));
        }
        if validators.contains(&validator) {
            return Err(ContractError::generic_err(format!(
                "Validator {validator} is listed more than once"
            )));
        }
        validators.push(validator);
    }
    VALIDATORS.save(deps.storage, &validators)?;

    Ok(Response::default().add_attribute("initialized", "true"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: VotingProcessMigrateMsg) -> ContractResult {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default().add_attribute("migrated", "true"))
}

fn assert_owner(storage: &dyn Storage, info: &MessageInfo) -> Result<VotingProcessConfig, ContractError> {
    let config = get_config(storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }
    Ok(config)
}

fn assert_creator(process: &Process, info: &MessageInfo) -> Result<(), ContractError> {
    if info.sender != process.entity_address {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: VotingProcessExecuteMsg,
) -> ContractResult {
    nonpayable(&info)?;

    let contract_address = env.contract.address;
    let mut events: Vec<DomainEvent> = Vec::new();

    match msg {
        VotingProcessExecuteMsg::SetGenesis { genesis_data } => {
            let config = assert_owner(deps.storage, &info)?;

            update_config(
                deps.storage,
                VotingProcessConfig {
                    genesis: genesis_data.clone(),
                    ..config
                },
            )?;

            events.push(DomainEvent::GenesisChanged {
                contract_address,
                genesis: genesis_data,
            });
        }
        VotingProcessExecuteMsg::SetChainId { new_chain_id } => {
            let config = assert_owner(deps.storage, &info)?;

            if config.chain_id == new_chain_id {
                return Err(ContractError::generic_err(format!(
                    "Chain id is already {new_chain_id}"
                )));
            }

            update_config(
                deps.storage,
                VotingProcessConfig {
                    chain_id: new_chain_id,
                    ..config
                },
            )?;

            events.push(DomainEvent::ChainIdChanged {
                contract_address,
                chain_id: new_chain_id,
            });
        }
        VotingProcessExecuteMsg::Create(create_msg) => {
            create_msg.validate(deps.as_ref())?;

            let entity_address = info.sender;
            let entity_index = get_entity_process_count(deps.storage, &entity_address)?;

            let process = PROCESSES.add(
                deps.storage,
                Process {
                    id: ProcessId::derive(deps.api, &entity_address, entity_index)?,
                    index: 0,
                    entity_address: entity_address.clone(),
                    envelope_type: create_msg.envelope_type,
                    mode: create_msg.mode,
                    metadata: create_msg.metadata,
                    census_merkle_root: create_msg.census_merkle_root,
                    census_merkle_tree: create_msg.census_merkle_tree,
                    start_block: create_msg.start_block,
                    number_of_blocks: create_msg.number_of_blocks,
                    status: ProcessStatus::Open,
                    question_index: 0,
                    results: None,
                },
            )?;

            increment_entity_process_count(deps.storage, &entity_address)?;

            events.push(DomainEvent::ProcessCreated {
                contract_address,
                entity_address,
                process_id: process.id,
                census_merkle_tree: process.census_merkle_tree,
            });
        }
        VotingProcessExecuteMsg::SetProcessStatus { process_id, status } => {
            let mut process = PROCESSES.load(deps.storage, &process_id)?;

            validate_status_change(
                &process,
                &info.sender,
                is_oracle(deps.storage, &info.sender)?,
                status,
            )?;

            process.status = status;
            PROCESSES.save(deps.storage, &process)?;

            events.push(DomainEvent::StatusUpdated {
                contract_address,
                process_id,
                status,
            });
        }
        VotingProcessExecuteMsg::AddEnvelopeType { envelope_type } => {
            assert_owner(deps.storage, &info)?;
            ProcessEnvelopeType::try_from(envelope_type)?;

            ENVELOPE_TYPES.save(deps.storage, envelope_type, &Empty {})?;

            events.push(DomainEvent::EnvelopeTypeAdded {
                contract_address,
                envelope_type,
            });
        }
        VotingProcessExecuteMsg::RemoveEnvelopeType { envelope_type } => {
            assert_owner(deps.storage, &info)?;
            ProcessEnvelopeType::try_from(envelope_type)?;

            ENVELOPE_TYPES.remove(deps.storage, envelope_type);

            events.push(DomainEvent::EnvelopeTypeRemoved {
                contract_address,
                envelope_type,
            });
        }
        VotingProcessExecuteMsg::AddMode { mode } => {
            assert_owner(deps.storage, &info)?;
            ProcessMode::try_from(mode)?;

            MODES.save(deps.storage, mode, &Empty {})?;

            events.push(DomainEvent::ModeAdded {
                contract_address,
                mode,
            });
        }
        VotingProcessExecuteMsg::RemoveMode { mode } => {
            assert_owner(deps.storage, &info)?;
            ProcessMode::try_from(mode)?;

            MODES.remove(deps.storage, mode);

            events.push(DomainEvent::ModeRemoved {
                contract_address,
                mode,
            });
        }
        VotingProcessExecuteMsg::AddValidator {
            validator_public_key,
        } => {
            assert_owner(deps.storage, &info)?;

            if validator_public_key.is_empty() {
                return Err(ContractError::generic_err(
                    "Validator public key cannot be empty",
                ));
            }

            let mut validators = VALIDATORS.may_load(deps.storage)?.unwrap_or_default();

            if validators.contains(&validator_public_key) {
                return Err(ContractError::generic_err(format!(
                    "Validator {validator_public_key} already exists"
                )));
            }

            validators.push(validator_public_key.clone());
            VALIDATORS.save(deps.storage, &validators)?;

            events.push(DomainEvent::ValidatorAdded {
                contract_address,
                validator_public_key,
            });
        }
        VotingProcessExecuteMsg::RemoveValidator {
            idx,
            validator_public_key,
        } => {
            assert_owner(deps.storage, &info)?;

            let mut validators = VALIDATORS.may_load(deps.storage)?.unwrap_or_default();
            swap_remove_at(&mut validators, idx, Some(&validator_public_key))?;
            VALIDATORS.save(deps.storage, &validators)?;

            events.push(DomainEvent::ValidatorRemoved {
                contract_address,
                validator_public_key,
            });
        }
        VotingProcessExecuteMsg::AddOracle { oracle_addr } => {
            assert_owner(deps.storage, &info)?;

            let oracle_addr = deps.api.addr_validate(oracle_addr.as_str())?;
            let mut oracles = ORACLES.may_load(deps.storage)?.unwrap_or_default();

            if oracles.contains(&oracle_addr) {
                return Err(ContractError::generic_err(format!(
                    "Oracle {oracle_addr} already exists"
                )));
            }

            oracles.push(oracle_addr.clone());
            ORACLES.save(deps.storage, &oracles)?;

            events.push(DomainEvent::OracleAdded {
                contract_address,
                oracle_address: oracle_addr,
            });
        }
        VotingProcessExecuteMsg::RemoveOracle { idx, oracle_addr } => {
            assert_owner(deps.storage, &info)?;

            let mut oracles = ORACLES.may_load(deps.storage)?.unwrap_or_default();
            swap_remove_at(&mut oracles, idx, Some(&oracle_addr))?;
            ORACLES.save(deps.storage, &oracles)?;

            events.push(DomainEvent::OracleRemoved {
                contract_address,
                oracle_address: oracle_addr,
            });
        }
        VotingProcessExecuteMsg::IncrementQuestionIndex { process_id } => {
            let mut process = PROCESSES.load(deps.storage, &process_id)?;
            assert_creator(&process, &info)?;

            if !process.mode.is_assembly() {
                return Err(ContractError::generic_err(
                    "Only assembly processes have several questions",
                ));
            }

            if !process.status.is_open() {
                return Err(ContractError::generic_err(format!(
                    "Process {process_id} is not open"
                )));
            }

            process.question_index = process
                .question_index
                .checked_add(1)
                .ok_or_else(|| ContractError::generic_err("Question index overflow"))?;
            PROCESSES.save(deps.storage, &process)?;

            events.push(DomainEvent::QuestionIndexIncremented {
                contract_address,
                process_id,
                question_index: process.question_index,
            });
        }
        VotingProcessExecuteMsg::PublishResults {
            process_id,
            results,
        } => {
            if !is_oracle(deps.storage, &info.sender)? {
                return Err(ContractError::Unauthorized {});
            }

            let mut process = PROCESSES.load(deps.storage, &process_id)?;

            if process.status.is_canceled() {
                return Err(ContractError::generic_err(format!(
                    "Process {process_id} is canceled"
                )));
            }

            if process.results.is_some() {
                return Err(ContractError::generic_err(format!(
                    "Results of process {process_id} are already published"
                )));
            }

            if results.is_empty() {
                return Err(ContractError::generic_err("Results cannot be empty"));
            }

            let ended_now = !process.status.is_ended();

            process.results = Some(results.clone());
            process.status = ProcessStatus::Ended;
            PROCESSES.save(deps.storage, &process)?;

            events.push(DomainEvent::ResultsPublished {
                contract_address: contract_address.clone(),
                process_id: process_id.clone(),
                results,
            });

            if ended_now {
                events.push(DomainEvent::StatusUpdated {
                    contract_address,
                    process_id,
                    status: ProcessStatus::Ended,
                });
            }
        }
        VotingProcessExecuteMsg::AddRelay {
            process_id,
            relay_address,
            public_key,
            messaging_uri,
        } => {
            let process = PROCESSES.load(deps.storage, &process_id)?;
            assert_creator(&process, &info)?;

            let relay_address = deps.api.addr_validate(relay_address.as_str())?;

            if is_active_relay(deps.storage, &process_id, &relay_address)? {
                return Err(ContractError::generic_err(format!(
                    "Relay {relay_address} is already active"
                )));
            }

            save_relay(
                deps.storage,
                &process_id,
                &Relay {
                    address: relay_address.clone(),
                    public_key,
                    messaging_uri,
                    active: true,
                },
            )?;

            events.push(DomainEvent::RelayAdded {
                contract_address,
                process_id,
                relay_address,
            });
        }
        VotingProcessExecuteMsg::DisableRelay {
            process_id,
            relay_address,
        } => {
            let process = PROCESSES.load(deps.storage, &process_id)?;
            assert_creator(&process, &info)?;

            let relay = RELAYS
                .may_load(deps.storage, (process_id.as_slice(), &relay_address))?
                .filter(|relay| relay.active)
                .ok_or_else(|| {
                    ContractError::generic_err(format!("Relay {relay_address} is not active"))
                })?;

            save_relay(
                deps.storage,
                &process_id,
                &Relay {
                    active: false,
                    ..relay
                },
            )?;

            events.push(DomainEvent::RelayDisabled {
                contract_address,
                process_id,
                relay_address,
            });
        }
        VotingProcessExecuteMsg::RegisterVoteBatch {
            process_id,
            data_content_uri,
        } => {
            if !is_active_relay(deps.storage, &process_id, &info.sender)? {
                return Err(ContractError::Unauthorized {});
            }

            let process = PROCESSES.load(deps.storage, &process_id)?;

            if !process.status.is_open() {
                return Err(ContractError::generic_err(format!(
                    "Process {process_id} is not open"
                )));
            }

            if data_content_uri.is_empty() {
                return Err(ContractError::generic_err("Data content URI cannot be empty"));
            }

            let batch_number = push_vote_batch(deps.storage, &process_id, &data_content_uri)?;

            events.push(DomainEvent::BatchRegistered {
                contract_address,
                process_id,
                batch_number,
            });
        }
        VotingProcessExecuteMsg::RevealPrivateKey {
            process_id,
            private_key,
        } => {
            let process = PROCESSES.load(deps.storage, &process_id)?;
            assert_creator(&process, &info)?;

            if !process.status.is_ended() && !process.status.is_canceled() {
                return Err(ContractError::generic_err(format!(
                    "Process {process_id} has not finished"
                )));
            }

            if PRIVATE_KEYS.has(deps.storage, process_id.as_slice()) {
                return Err(ContractError::generic_err(format!(
                    "Private key of process {process_id} is already revealed"
                )));
            }

            if private_key.is_empty() {
                return Err(ContractError::generic_err("Private key cannot be empty"));
            }

            PRIVATE_KEYS.save(deps.storage, process_id.as_slice(), &private_key)?;

            events.push(DomainEvent::PrivateKeyRevealed {
                contract_address,
                process_id,
                private_key,
            });
        }
    }

    Ok(Response::default().add_events(events.into_iter().map(Event::from)))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: VotingProcessQueryMsg) -> StdResult<Binary> {
    match msg {
        VotingProcessQueryMsg::Config {} => to_json_binary(&get_config(deps.storage)?),
        VotingProcessQueryMsg::GetEntityProcessCount { entity_address } => {
            to_json_binary(&get_entity_process_count(deps.storage, &entity_address)?)
        }
        VotingProcessQueryMsg::GetNextProcessId { entity_address } => {
            let count = get_entity_process_count(deps.storage, &entity_address)?;
            to_json_binary(&ProcessId::derive(deps.api, &entity_address, count)?)
        }
        VotingProcessQueryMsg::GetProcessId {
            entity_address,
            process_count_index,
        } => to_json_binary(&ProcessId::derive(
            deps.api,
            &entity_address,
            process_count_index,
        )?),
        VotingProcessQueryMsg::GetProcessIndex { process_id } => {
            to_json_binary(&PROCESSES.index_of(deps.storage, &process_id)?)
        }
        VotingProcessQueryMsg::GetGenesis {} => to_json_binary(&get_config(deps.storage)?.genesis),
        VotingProcessQueryMsg::GetChainId {} => {
            to_json_binary(&get_config(deps.storage)?.chain_id)
        }
        VotingProcessQueryMsg::Get { process_id } => {
            to_json_binary(&PROCESSES.load(deps.storage, &process_id)?)
        }
        VotingProcessQueryMsg::Processes {
            entity_address,
            status,
            start_after,
            limit,
        } => to_json_binary(&PROCESSES.filtered(
            deps.storage,
            entity_address,
            status,
            start_after,
            limit,
        )?),
        VotingProcessQueryMsg::IsEnvelopeTypeSupported { envelope_type } => {
            to_json_binary(&ENVELOPE_TYPES.has(deps.storage, envelope_type))
        }
        VotingProcessQueryMsg::IsModeSupported { mode } => {
            to_json_binary(&MODES.has(deps.storage, mode))
        }
        VotingProcessQueryMsg::GetValidators {} => {
            to_json_binary(&VALIDATORS.may_load(deps.storage)?.unwrap_or_default())
        }
        VotingProcessQueryMsg::GetOracles {} => {
            to_json_binary(&ORACLES.may_load(deps.storage)?.unwrap_or_default())
        }
        VotingProcessQueryMsg::GetQuestionIndex { process_id } => {
            to_json_binary(&PROCESSES.load(deps.storage, &process_id)?.question_index)
        }
        VotingProcessQueryMsg::GetResults { process_id } => to_json_binary(&ResultsResponse {
            results: PROCESSES
                .load(deps.storage, &process_id)?
                .results
                .unwrap_or_default(),
        }),
        VotingProcessQueryMsg::GetRelayIndex { process_id } => to_json_binary(
            &RELAY_INDEX
                .may_load(deps.storage, process_id.as_slice())?
                .unwrap_or_default(),
        ),
        VotingProcessQueryMsg::IsActiveRelay {
            process_id,
            relay_address,
        } => to_json_binary(&is_active_relay(deps.storage, &process_id, &relay_address)?),
        VotingProcessQueryMsg::GetRelay {
            process_id,
            relay_address,
        } => to_json_binary(&RELAYS.load(deps.storage, (process_id.as_slice(), &relay_address))?),
        VotingProcessQueryMsg::GetVoteBatchCount { process_id } => to_json_binary(
            &VOTE_BATCH_COUNT
                .may_load(deps.storage, process_id.as_slice())?
                .unwrap_or_default(),
        ),
        VotingProcessQueryMsg::GetBatch {
            process_id,
            batch_number,
        } => to_json_binary(&VOTE_BATCHES.load(deps.storage, (process_id.as_slice(), batch_number))?),
        VotingProcessQueryMsg::GetPrivateKey { process_id } => {
            PROCESSES.index_of(deps.storage, &process_id)?;
            to_json_binary(
                &PRIVATE_KEYS
                    .may_load(deps.storage, process_id.as_slice())?
                    .unwrap_or_default(),
            )
        }
    }
}
