use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, QuerierWrapper, StdResult};

use crate::{
    core::Contract,
    types::{ProcessEnvelopeType, ProcessId, ProcessMode, ProcessStatus},
};

#[cw_serde]
pub struct VotingProcessConfig {
    pub owner: Addr,
    pub chain_id: u64,
    pub genesis: String,
}

#[cw_serde]
pub struct VotingProcessInstantiateMsg {
    pub chain_id: u64,
    pub genesis: String,
    /// Every valid envelope type when omitted
    pub envelope_types: Option<Vec<ProcessEnvelopeType>>,
    /// Every valid mode when omitted
    pub modes: Option<Vec<ProcessMode>>,
    pub oracles: Vec<Addr>,
    pub validators: Vec<String>,
}

#[cw_serde]
pub struct VotingProcessMigrateMsg {}

#[cw_serde]
pub struct CreateProcessMsg {
    pub envelope_type: ProcessEnvelopeType,
    pub mode: ProcessMode,
    pub metadata: String,
    pub census_merkle_root: String,
    pub census_merkle_tree: String,
    pub start_block: u64,
    pub number_of_blocks: u64,
}

#[cw_serde]
pub struct Process {
    pub id: ProcessId,
    /// Position within the global list of processes
    pub index: u64,
    pub entity_address: Addr,
    pub envelope_type: ProcessEnvelopeType,
    pub mode: ProcessMode,
    pub metadata: String,
    pub census_merkle_root: String,
    pub census_merkle_tree: String,
    pub start_block: u64,
    pub number_of_blocks: u64,
    pub status: ProcessStatus,
    pub question_index: u32,
    pub results: Option<String>,
}

#[cw_serde]
pub struct Relay {
    pub address: Addr,
    pub public_key: String,
    pub messaging_uri: String,
    pub active: bool,
}

#[cw_serde]
pub struct ResultsResponse {
    pub results: String,
}

#[cw_serde]
pub enum VotingProcessExecuteMsg {
    /// Update the genesis link and hash
    SetGenesis { genesis_data: String },
    SetChainId { new_chain_id: u64 },
    /// Publish a new voting process owned by the sender
    Create(CreateProcessMsg),
    SetProcessStatus {
        process_id: ProcessId,
        status: ProcessStatus,
    },
    AddEnvelopeType { envelope_type: u8 },
    RemoveEnvelopeType { envelope_type: u8 },
    AddMode { mode: u8 },
    RemoveMode { mode: u8 },
    /// Registers the public key of a new validator
    AddValidator { validator_public_key: String },
    /// Removes the public key at the given index
    RemoveValidator {
        idx: u32,
        validator_public_key: String,
    },
    AddOracle { oracle_addr: Addr },
    RemoveOracle { idx: u32, oracle_addr: Addr },
    /// Moves an assembly process to its next question
    IncrementQuestionIndex { process_id: ProcessId },
    PublishResults {
        process_id: ProcessId,
        results: String,
    },
    AddRelay {
        process_id: ProcessId,
        relay_address: Addr,
        public_key: String,
        messaging_uri: String,
    },
    DisableRelay {
        process_id: ProcessId,
        relay_address: Addr,
    },
    RegisterVoteBatch {
        process_id: ProcessId,
        data_content_uri: String,
    },
    /// Discloses the key that decrypts the votes of a finished process
    RevealPrivateKey {
        process_id: ProcessId,
        private_key: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum VotingProcessQueryMsg {
    #[returns(VotingProcessConfig)]
    Config {},
    /// Amount of processes the entity has created
    #[returns(u64)]
    GetEntityProcessCount { entity_address: Addr },
    /// Id that the entity's next process will get
    #[returns(ProcessId)]
    GetNextProcessId { entity_address: Addr },
    #[returns(ProcessId)]
    GetProcessId {
        entity_address: Addr,
        process_count_index: u64,
    },
    #[returns(u64)]
    GetProcessIndex { process_id: ProcessId },
    #[returns(String)]
    GetGenesis {},
    #[returns(u64)]
    GetChainId {},
    #[returns(Process)]
    Get { process_id: ProcessId },
    #[returns(Vec<Process>)]
    Processes {
        entity_address: Option<Addr>,
        status: Option<ProcessStatus>,
        start_after: Option<ProcessId>,
        limit: Option<u16>,
    },
    #[returns(bool)]
    IsEnvelopeTypeSupported { envelope_type: u8 },
    #[returns(bool)]
    IsModeSupported { mode: u8 },
    #[returns(Vec<String>)]
    GetValidators {},
    #[returns(Vec<Addr>)]
    GetOracles {},
    #[returns(u32)]
    GetQuestionIndex { process_id: ProcessId },
    #[returns(ResultsResponse)]
    GetResults { process_id: ProcessId },
    #[returns(Vec<Addr>)]
    GetRelayIndex { process_id: ProcessId },
    #[returns(bool)]
    IsActiveRelay {
        process_id: ProcessId,
        relay_address: Addr,
    },
    #[returns(Relay)]
    GetRelay {
        process_id: ProcessId,
        relay_address: Addr,
    },
    #[returns(u64)]
    GetVoteBatchCount { process_id: ProcessId },
    #[returns(String)]
    GetBatch {
        process_id: ProcessId,
        batch_number: u64,
    },
    /// Empty until the creator reveals it
    #[returns(String)]
    GetPrivateKey { process_id: ProcessId },
}

/// Typed handle on a deployed voting process contract.
pub struct VotingProcess(pub Addr);

impl VotingProcess {
    pub fn address(&self) -> Addr {
        self.0.clone()
    }

    pub fn call(&self, msg: &VotingProcessExecuteMsg) -> StdResult<CosmosMsg> {
        Ok(Contract(self.address()).call(to_json_binary(msg)?, vec![]))
    }

    fn query<T: serde::de::DeserializeOwned>(
        &self,
        querier: &QuerierWrapper,
        msg: &VotingProcessQueryMsg,
    ) -> StdResult<T> {
        querier.query_wasm_smart(&self.0, msg)
    }

    pub fn set_genesis(&self, genesis_data: &str) -> StdResult<CosmosMsg> {
        self.call(&VotingProcessExecuteMsg::SetGenesis {
            genesis_data: genesis_data.to_string(),
        })
    }

    pub fn set_chain_id(&self, new_chain_id: u64) -> StdResult<CosmosMsg> {
        self.call(&VotingProcessExecuteMsg::SetChainId { new_chain_id })
    }

    pub fn create(&self, msg: CreateProcessMsg) -> StdResult<CosmosMsg> {
        self.call(&VotingProcessExecuteMsg::Create(msg))
    }

    pub fn set_process_status(
        &self,
        process_id: &ProcessId,
        status: ProcessStatus,
    ) -> StdResult<CosmosMsg> {
        self.call(&VotingProcessExecuteMsg::SetProcessStatus {
            process_id: process_id.clone(),
            status,
        })
    }

    pub fn add_envelope_type(&self, envelope_type: u8) -> StdResult<CosmosMsg> {
        self.call(&VotingProcessExecuteMsg::AddEnvelopeType { envelope_type })
    }

    pub fn remove_envelope_type(&self, envelope_type: u8) -> StdResult<CosmosMsg> {
        self.call(&VotingProcessExecuteMsg::RemoveEnvelopeType { envelope_type })
    }

    pub fn add_mode(&self, mode: u8) -> StdResult<CosmosMsg> {
        self.call(&VotingProcessExecuteMsg::AddMode { mode })
    }

    pub fn remove_mode(&self, mode: u8) -> StdResult<CosmosMsg> {
        self.call(&VotingProcessExecuteMsg::RemoveMode { mode })
    }

    pub fn add_validator(&self, validator_public_key: &str) -> StdResult<CosmosMsg> {
        self.call(&VotingProcessExecuteMsg::AddValidator {
            validator_public_key: validator_public_key.to_string(),
        })
    }

    pub fn remove_validator(&self, idx: u32, validator_public_key: &str) -> StdResult<CosmosMsg> {
        self.call(&VotingProcessExecuteMsg::RemoveValidator {
            idx,
            validator_public_key: validator_public_key.to_string(),
        })
    }

    pub fn add_oracle(&self, oracle_addr: &Addr) -> StdResult<CosmosMsg> {
        self.call(&VotingProcessExecuteMsg::AddOracle {
            oracle_addr: oracle_addr.clone(),
        })
    }

    pub fn remove_oracle(&self, idx: u32, oracle_addr: &Addr) -> StdResult<CosmosMsg> {
        self.call(&VotingProcessExecuteMsg::RemoveOracle {
            idx,
            oracle_addr: oracle_addr.clone(),
        })
    }

    pub fn increment_question_index(&self, process_id: &ProcessId) -> StdResult<CosmosMsg> {
        self.call(&VotingProcessExecuteMsg::IncrementQuestionIndex {
            process_id: process_id.clone(),
        })
    }

    pub fn publish_results(&self, process_id: &ProcessId, results: &str) -> StdResult<CosmosMsg> {
        self.call(&VotingProcessExecuteMsg::PublishResults {
            process_id: process_id.clone(),
            results: results.to_string(),
        })
    }

    pub fn add_relay(
        &self,
        process_id: &ProcessId,
        relay_address: &Addr,
        public_key: &str,
        messaging_uri: &str,
    ) -> StdResult<CosmosMsg> {
        self.call(&VotingProcessExecuteMsg::AddRelay {
            process_id: process_id.clone(),
            relay_address: relay_address.clone(),
            public_key: public_key.to_string(),
            messaging_uri: messaging_uri.to_string(),
        })
    }

    pub fn disable_relay(&self, process_id: &ProcessId, relay_address: &Addr) -> StdResult<CosmosMsg> {
        self.call(&VotingProcessExecuteMsg::DisableRelay {
            process_id: process_id.clone(),
            relay_address: relay_address.clone(),
        })
    }

    pub fn register_vote_batch(
        &self,
        process_id: &ProcessId,
        data_content_uri: &str,
    ) -> StdResult<CosmosMsg> {
        self.call(&VotingProcessExecuteMsg::RegisterVoteBatch {
            process_id: process_id.clone(),
            data_content_uri: data_content_uri.to_string(),
        })
    }

    pub fn reveal_private_key(
        &self,
        process_id: &ProcessId,
        private_key: &str,
    ) -> StdResult<CosmosMsg> {
        self.call(&VotingProcessExecuteMsg::RevealPrivateKey {
            process_id: process_id.clone(),
            private_key: private_key.to_string(),
        })
    }

    pub fn config(&self, querier: &QuerierWrapper) -> StdResult<VotingProcessConfig> {
        self.query(querier, &VotingProcessQueryMsg::Config {})
    }

    pub fn get_entity_process_count(
        &self,
        querier: &QuerierWrapper,
        entity_address: &Addr,
    ) -> StdResult<u64> {
        self.query(
            querier,
            &VotingProcessQueryMsg::GetEntityProcessCount {
                entity_address: entity_address.clone(),
            },
        )
    }

    pub fn get_next_process_id(
        &self,
        querier: &QuerierWrapper,
        entity_address: &Addr,
    ) -> StdResult<ProcessId> {
        self.query(
            querier,
            &VotingProcessQueryMsg::GetNextProcessId {
                entity_address: entity_address.clone(),
            },
        )
    }

    pub fn get_process_id(
        &self,
        querier: &QuerierWrapper,
        entity_address: &Addr,
        process_count_index: u64,
    ) -> StdResult<ProcessId> {
        self.query(
            querier,
            &VotingProcessQueryMsg::GetProcessId {
                entity_address: entity_address.clone(),
                process_count_index,
            },
        )
    }

    pub fn get_process_index(
        &self,
        querier: &QuerierWrapper,
        process_id: &ProcessId,
    ) -> StdResult<u64> {
        self.query(
            querier,
            &VotingProcessQueryMsg::GetProcessIndex {
                process_id: process_id.clone(),
            },
        )
    }

    pub fn get_genesis(&self, querier: &QuerierWrapper) -> StdResult<String> {
        self.query(querier, &VotingProcessQueryMsg::GetGenesis {})
    }

    pub fn get_chain_id(&self, querier: &QuerierWrapper) -> StdResult<u64> {
        self.query(querier, &VotingProcessQueryMsg::GetChainId {})
    }

    pub fn get(&self, querier: &QuerierWrapper, process_id: &ProcessId) -> StdResult<Process> {
        self.query(
            querier,
            &VotingProcessQueryMsg::Get {
                process_id: process_id.clone(),
            },
        )
    }

    pub fn processes(
        &self,
        querier: &QuerierWrapper,
        entity_address: Option<Addr>,
        status: Option<ProcessStatus>,
        start_after: Option<ProcessId>,
        limit: Option<u16>,
    ) -> StdResult<Vec<Process>> {
        self.query(
            querier,
            &VotingProcessQueryMsg::Processes {
                entity_address,
                status,
                start_after,
                limit,
            },
        )
    }

    pub fn is_envelope_type_supported(
        &self,
        querier: &QuerierWrapper,
        envelope_type: u8,
    ) -> StdResult<bool> {
        self.query(
            querier,
            &VotingProcessQueryMsg::IsEnvelopeTypeSupported { envelope_type },
        )
    }

    pub fn is_mode_supported(&self, querier: &QuerierWrapper, mode: u8) -> StdResult<bool> {
        self.query(querier, &VotingProcessQueryMsg::IsModeSupported { mode })
    }

    pub fn get_validators(&self, querier: &QuerierWrapper) -> StdResult<Vec<String>> {
        self.query(querier, &VotingProcessQueryMsg::GetValidators {})
    }

    pub fn get_oracles(&self, querier: &QuerierWrapper) -> StdResult<Vec<Addr>> {
        self.query(querier, &VotingProcessQueryMsg::GetOracles {})
    }

    pub fn get_question_index(
        &self,
        querier: &QuerierWrapper,
        process_id: &ProcessId,
    ) -> StdResult<u32> {
        self.query(
            querier,
            &VotingProcessQueryMsg::GetQuestionIndex {
                process_id: process_id.clone(),
            },
        )
    }

    pub fn get_results(
        &self,
        querier: &QuerierWrapper,
        process_id: &ProcessId,
    ) -> StdResult<ResultsResponse> {
        self.query(
            querier,
            &VotingProcessQueryMsg::GetResults {
                process_id: process_id.clone(),
            },
        )
    }

    pub fn get_relay_index(
        &self,
        querier: &QuerierWrapper,
        process_id: &ProcessId,
    ) -> StdResult<Vec<Addr>> {
        self.query(
            querier,
            &VotingProcessQueryMsg::GetRelayIndex {
                process_id: process_id.clone(),
            },
        )
    }

    pub fn is_active_relay(
        &self,
        querier: &QuerierWrapper,
        process_id: &ProcessId,
        relay_address: &Addr,
    ) -> StdResult<bool> {
        self.query(
            querier,
            &VotingProcessQueryMsg::IsActiveRelay {
                process_id: process_id.clone(),
                relay_address: relay_address.clone(),
            },
        )
    }

    pub fn get_relay(
        &self,
        querier: &QuerierWrapper,
        process_id: &ProcessId,
        relay_address: &Addr,
    ) -> StdResult<Relay> {
        self.query(
            querier,
            &VotingProcessQueryMsg::GetRelay {
                process_id: process_id.clone(),
                relay_address: relay_address.clone(),
            },
        )
    }

    pub fn get_vote_batch_count(
        &self,
        querier: &QuerierWrapper,
        process_id: &ProcessId,
    ) -> StdResult<u64> {
        self.query(
            querier,
            &VotingProcessQueryMsg::GetVoteBatchCount {
                process_id: process_id.clone(),
            },
        )
    }

    pub fn get_batch(
        &self,
        querier: &QuerierWrapper,
        process_id: &ProcessId,
        batch_number: u64,
    ) -> StdResult<String> {
        self.query(
            querier,
            &VotingProcessQueryMsg::GetBatch {
                process_id: process_id.clone(),
                batch_number,
            },
        )
    }

    pub fn get_private_key(
        &self,
        querier: &QuerierWrapper,
        process_id: &ProcessId,
    ) -> StdResult<String> {
        self.query(
            querier,
            &VotingProcessQueryMsg::GetPrivateKey {
                process_id: process_id.clone(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_msg_keeps_argument_order() {
        let msg = VotingProcessExecuteMsg::Create(CreateProcessMsg {
            envelope_type: ProcessEnvelopeType::Election,
            mode: ProcessMode::Assembly,
            metadata: "ipfs://meta".to_string(),
            census_merkle_root: "0x12".to_string(),
            census_merkle_tree: "ipfs://tree".to_string(),
            start_block: 10,
            number_of_blocks: 20,
        });

        assert_eq!(
            cosmwasm_std::to_json_string(&msg).unwrap(),
            r#"{"create":{"envelope_type":12,"mode":3,"metadata":"ipfs://meta","census_merkle_root":"0x12","census_merkle_tree":"ipfs://tree","start_block":10,"number_of_blocks":20}}"#
        );
    }

    #[test]
    fn rejects_invalid_status_on_the_wire() {
        let json = r#"{"set_process_status":{"process_id":"00","status":7}}"#;
        assert!(cosmwasm_std::from_json::<VotingProcessExecuteMsg>(json).is_err());
    }
}
