use cosmwasm_std::Addr;
use cw_multi_test::error::AnyResult;
use dvote_rs::{
    types::{ProcessEnvelopeType, ProcessMode},
    voting_process::{CreateProcessMsg, VotingProcess, VotingProcessInstantiateMsg},
};

use crate::{harness::DvoteTestApp, process_handler::ProcessHandler};

pub const DEFAULT_CHAIN_ID: u64 = 0;
pub const DEFAULT_GENESIS: &str = "ipfs://1234,https://server/genesis!0987654321";
pub const DEFAULT_PROCESS_MODE: ProcessMode = ProcessMode::ScheduledSingle;
pub const DEFAULT_ENVELOPE_TYPE: ProcessEnvelopeType = ProcessEnvelopeType::RealtimePoll;
pub const DEFAULT_METADATA_CONTENT_HASHED_URI: &str = "ipfs://1234,https://server/uri!0987654321";
pub const DEFAULT_MERKLE_ROOT: &str = "0x123456789";
pub const DEFAULT_MERKLE_TREE_CONTENT_HASHED_URI: &str =
    "ipfs://1234,https://server/uri!1234567812345678";
pub const DEFAULT_START_BLOCK: u64 = 12341234;
pub const DEFAULT_BLOCK_COUNT: u64 = 500000;

pub fn default_create_process_msg() -> CreateProcessMsg {
    CreateProcessMsg {
        envelope_type: DEFAULT_ENVELOPE_TYPE,
        mode: DEFAULT_PROCESS_MODE,
        metadata: DEFAULT_METADATA_CONTENT_HASHED_URI.to_string(),
        census_merkle_root: DEFAULT_MERKLE_ROOT.to_string(),
        census_merkle_tree: DEFAULT_MERKLE_TREE_CONTENT_HASHED_URI.to_string(),
        start_block: DEFAULT_START_BLOCK,
        number_of_blocks: DEFAULT_BLOCK_COUNT,
    }
}

pub struct ProcessBuilder<'a> {
    app: &'a mut DvoteTestApp,
    deployer: Addr,
    entity: Addr,
    chain_id: u64,
    genesis: String,
    envelope_types: Option<Vec<ProcessEnvelopeType>>,
    modes: Option<Vec<ProcessMode>>,
    oracles: Vec<Addr>,
    validators: Vec<String>,
    process: CreateProcessMsg,
}

impl<'a> ProcessBuilder<'a> {
    pub fn new(app: &'a mut DvoteTestApp) -> Self {
        let deployer = app.deployer();
        let entity = app.entity();

        Self {
            app,
            deployer,
            entity,
            chain_id: DEFAULT_CHAIN_ID,
            genesis: DEFAULT_GENESIS.to_string(),
            envelope_types: None,
            modes: None,
            oracles: vec![],
            validators: vec![],
            process: default_create_process_msg(),
        }
    }

    pub fn with_entity_account(mut self, entity: Addr) -> Self {
        self.entity = entity;
        self
    }

    pub fn with_metadata(mut self, metadata: &str) -> Self {
        self.process.metadata = metadata.to_string();
        self
    }

    pub fn with_mode(mut self, mode: ProcessMode) -> Self {
        self.process.mode = mode;
        self
    }

    pub fn with_process_envelope_type(mut self, envelope_type: ProcessEnvelopeType) -> Self {
        self.process.envelope_type = envelope_type;
        self
    }

    pub fn with_start_block(mut self, start_block: u64) -> Self {
        self.process.start_block = start_block;
        self
    }

    pub fn with_block_count(mut self, number_of_blocks: u64) -> Self {
        self.process.number_of_blocks = number_of_blocks;
        self
    }

    pub fn with_merkle_root(mut self, census_merkle_root: &str) -> Self {
        self.process.census_merkle_root = census_merkle_root.to_string();
        self
    }

    pub fn with_merkle_tree(mut self, census_merkle_tree: &str) -> Self {
        self.process.census_merkle_tree = census_merkle_tree.to_string();
        self
    }

    pub fn with_oracle(mut self, oracle: &Addr) -> Self {
        self.oracles.push(oracle.clone());
        self
    }

    pub fn with_validators(mut self, validators: &[&str]) -> Self {
        self.validators = validators.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    pub fn with_genesis(mut self, genesis: &str) -> Self {
        self.genesis = genesis.to_string();
        self
    }

    /// Restricts the envelope types the contract accepts at deployment
    pub fn with_envelope_types(mut self, envelope_types: Vec<ProcessEnvelopeType>) -> Self {
        self.envelope_types = Some(envelope_types);
        self
    }

    /// Restricts the modes the contract accepts at deployment
    pub fn with_modes(mut self, modes: Vec<ProcessMode>) -> Self {
        self.modes = Some(modes);
        self
    }

    /// Deploys a fresh contract and creates `process_count` processes from the entity account
    pub fn build(self, process_count: usize) -> ProcessHandler<'a> {
        self.try_build(process_count).unwrap()
    }

    pub fn try_build(self, process_count: usize) -> AnyResult<ProcessHandler<'a>> {
        let contract_addr = self.app.instantiate_voting_process(
            &self.deployer,
            &VotingProcessInstantiateMsg {
                chain_id: self.chain_id,
                genesis: self.genesis,
                envelope_types: self.envelope_types,
                modes: self.modes,
                oracles: self.oracles,
                validators: self.validators,
            },
        )?;

        let mut handler = ProcessHandler {
            contract: VotingProcess(contract_addr),
            deployer: self.deployer,
            entity: self.entity,
            process_ids: vec![],
            harness: self.app,
        };

        for _ in 0..process_count {
            let entity = handler.entity.clone();
            handler.try_create(&entity, self.process.clone())?;
        }

        Ok(handler)
    }
}
