use std::fmt::Debug;

use cosmwasm_std::{Addr, HexBinary};
use cw_multi_test::{error::AnyResult, AppResponse};
use dvote_rs::{
    types::{ProcessId, ProcessStatus},
    voting_process::{CreateProcessMsg, Process, VotingProcess},
};

use crate::harness::{find_event_attribute, DvoteTestApp};

pub struct ProcessHandler<'a> {
    pub contract: VotingProcess,
    pub deployer: Addr,
    pub entity: Addr,
    /// Processes created through this handler, oldest first
    pub process_ids: Vec<ProcessId>,
    pub harness: &'a mut DvoteTestApp,
}

impl Debug for ProcessHandler<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessHandler")
            .field("contract", &self.contract.address())
            .field("deployer", &self.deployer)
            .field("entity", &self.entity)
            .field("process_ids", &self.process_ids)
            .finish()
    }
}

impl<'a> ProcessHandler<'a> {
    pub fn process_id(&self, index: usize) -> ProcessId {
        self.process_ids[index].clone()
    }

    // Raw calls

    /// Creates a process from `sender` and returns its id, read from the emitted event
    pub fn try_create(&mut self, sender: &Addr, msg: CreateProcessMsg) -> AnyResult<ProcessId> {
        let response = self.harness.execute(sender, self.contract.create(msg)?)?;
        let process_id = find_event_attribute(&response, "process_created", "process_id")?;

        let process_id = ProcessId(HexBinary::from_hex(
            process_id.trim_start_matches("0x"),
        )?);

        println!("[ProcessHandler] Created process {process_id} from {sender}");
        self.process_ids.push(process_id.clone());

        Ok(process_id)
    }

    pub fn try_set_process_status(
        &mut self,
        sender: &Addr,
        process_id: &ProcessId,
        status: ProcessStatus,
    ) -> AnyResult<AppResponse> {
        let msg = self.contract.set_process_status(process_id, status)?;
        self.harness.execute(sender, msg)
    }

    pub fn try_set_genesis(&mut self, sender: &Addr, genesis_data: &str) -> AnyResult<AppResponse> {
        let msg = self.contract.set_genesis(genesis_data)?;
        self.harness.execute(sender, msg)
    }

    pub fn try_set_chain_id(&mut self, sender: &Addr, new_chain_id: u64) -> AnyResult<AppResponse> {
        let msg = self.contract.set_chain_id(new_chain_id)?;
        self.harness.execute(sender, msg)
    }

    pub fn try_add_envelope_type(&mut self, sender: &Addr, envelope_type: u8) -> AnyResult<AppResponse> {
        let msg = self.contract.add_envelope_type(envelope_type)?;
        self.harness.execute(sender, msg)
    }

    pub fn try_remove_envelope_type(
        &mut self,
        sender: &Addr,
        envelope_type: u8,
    ) -> AnyResult<AppResponse> {
        let msg = self.contract.remove_envelope_type(envelope_type)?;
        self.harness.execute(sender, msg)
    }

    pub fn try_add_mode(&mut self, sender: &Addr, mode: u8) -> AnyResult<AppResponse> {
        let msg = self.contract.add_mode(mode)?;
        self.harness.execute(sender, msg)
    }

    pub fn try_remove_mode(&mut self, sender: &Addr, mode: u8) -> AnyResult<AppResponse> {
        let msg = self.contract.remove_mode(mode)?;
        self.harness.execute(sender, msg)
    }

    pub fn try_add_validator(&mut self, sender: &Addr, public_key: &str) -> AnyResult<AppResponse> {
        let msg = self.contract.add_validator(public_key)?;
        self.harness.execute(sender, msg)
    }

    pub fn try_remove_validator(
        &mut self,
        sender: &Addr,
        idx: u32,
        public_key: &str,
    ) -> AnyResult<AppResponse> {
        let msg = self.contract.remove_validator(idx, public_key)?;
        self.harness.execute(sender, msg)
    }

    pub fn try_add_oracle(&mut self, sender: &Addr, oracle: &Addr) -> AnyResult<AppResponse> {
        let msg = self.contract.add_oracle(oracle)?;
        self.harness.execute(sender, msg)
    }

    pub fn try_remove_oracle(
        &mut self,
        sender: &Addr,
        idx: u32,
        oracle: &Addr,
    ) -> AnyResult<AppResponse> {
        let msg = self.contract.remove_oracle(idx, oracle)?;
        self.harness.execute(sender, msg)
    }

    pub fn try_increment_question_index(
        &mut self,
        sender: &Addr,
        process_id: &ProcessId,
    ) -> AnyResult<AppResponse> {
        let msg = self.contract.increment_question_index(process_id)?;
        self.harness.execute(sender, msg)
    }

    pub fn try_publish_results(
        &mut self,
        sender: &Addr,
        process_id: &ProcessId,
        results: &str,
    ) -> AnyResult<AppResponse> {
        let msg = self.contract.publish_results(process_id, results)?;
        self.harness.execute(sender, msg)
    }

    pub fn try_add_relay(
        &mut self,
        sender: &Addr,
        process_id: &ProcessId,
        relay: &Addr,
        public_key: &str,
        messaging_uri: &str,
    ) -> AnyResult<AppResponse> {
        let msg = self
            .contract
            .add_relay(process_id, relay, public_key, messaging_uri)?;
        self.harness.execute(sender, msg)
    }

    pub fn try_disable_relay(
        &mut self,
        sender: &Addr,
        process_id: &ProcessId,
        relay: &Addr,
    ) -> AnyResult<AppResponse> {
        let msg = self.contract.disable_relay(process_id, relay)?;
        self.harness.execute(sender, msg)
    }

    pub fn try_register_vote_batch(
        &mut self,
        sender: &Addr,
        process_id: &ProcessId,
        data_content_uri: &str,
    ) -> AnyResult<AppResponse> {
        let msg = self
            .contract
            .register_vote_batch(process_id, data_content_uri)?;
        self.harness.execute(sender, msg)
    }

    pub fn try_reveal_private_key(
        &mut self,
        sender: &Addr,
        process_id: &ProcessId,
        private_key: &str,
    ) -> AnyResult<AppResponse> {
        let msg = self.contract.reveal_private_key(process_id, private_key)?;
        self.harness.execute(sender, msg)
    }

    // Entity and owner helpers

    pub fn create(&mut self, msg: CreateProcessMsg) -> ProcessId {
        let entity = self.entity.clone();
        self.try_create(&entity, msg).unwrap()
    }

    pub fn set_status(&mut self, process_id: &ProcessId, status: ProcessStatus) -> &mut Self {
        println!("[ProcessHandler] Setting status of {process_id} to {status:?}");
        let entity = self.entity.clone();
        self.try_set_process_status(&entity, process_id, status)
            .unwrap();
        self
    }

    pub fn add_oracle(&mut self, oracle: &Addr) -> &mut Self {
        println!("[ProcessHandler] Adding oracle {oracle}");
        let deployer = self.deployer.clone();
        self.try_add_oracle(&deployer, oracle).unwrap();
        self
    }

    pub fn add_validator(&mut self, public_key: &str) -> &mut Self {
        println!("[ProcessHandler] Adding validator {public_key}");
        let deployer = self.deployer.clone();
        self.try_add_validator(&deployer, public_key).unwrap();
        self
    }

    pub fn add_relay(&mut self, process_id: &ProcessId, relay: &Addr) -> &mut Self {
        println!("[ProcessHandler] Adding relay {relay} to {process_id}");
        let entity = self.entity.clone();
        self.try_add_relay(
            &entity,
            process_id,
            relay,
            &format!("{relay}-public-key"),
            &format!("pss://{relay}"),
        )
        .unwrap();
        self
    }

    pub fn reveal_private_key(&mut self, process_id: &ProcessId, private_key: &str) -> &mut Self {
        println!("[ProcessHandler] Revealing private key of {process_id}");
        let entity = self.entity.clone();
        self.try_reveal_private_key(&entity, process_id, private_key)
            .unwrap();
        self
    }

    pub fn advance_blocks(&mut self, blocks: u64) -> &mut Self {
        println!("[ProcessHandler] Advancing {blocks} blocks");
        self.harness.advance_blocks(blocks);
        self
    }

    // Queries

    pub fn get(&self, process_id: &ProcessId) -> Process {
        self.contract
            .get(&self.harness.app.wrap(), process_id)
            .unwrap()
    }

    pub fn entity_process_count(&self, entity: &Addr) -> u64 {
        self.contract
            .get_entity_process_count(&self.harness.app.wrap(), entity)
            .unwrap()
    }

    pub fn next_process_id(&self, entity: &Addr) -> ProcessId {
        self.contract
            .get_next_process_id(&self.harness.app.wrap(), entity)
            .unwrap()
    }

    pub fn processes(
        &self,
        entity_address: Option<Addr>,
        status: Option<ProcessStatus>,
        start_after: Option<ProcessId>,
        limit: Option<u16>,
    ) -> Vec<Process> {
        self.contract
            .processes(
                &self.harness.app.wrap(),
                entity_address,
                status,
                start_after,
                limit,
            )
            .unwrap()
    }

    pub fn private_key(&self, process_id: &ProcessId) -> String {
        self.contract
            .get_private_key(&self.harness.app.wrap(), process_id)
            .unwrap()
    }

    pub fn validators(&self) -> Vec<String> {
        self.contract
            .get_validators(&self.harness.app.wrap())
            .unwrap()
    }

    pub fn oracles(&self) -> Vec<Addr> {
        self.contract.get_oracles(&self.harness.app.wrap()).unwrap()
    }

    // Assertion helpers

    pub fn assert_status(&mut self, process_id: &ProcessId, expected: ProcessStatus) -> &mut Self {
        println!("[ProcessHandler] Asserting status of {process_id} is {expected:?}");
        let process = self.get(process_id);
        assert_eq!(
            process.status, expected,
            "Expected status does not match current status: expected {expected:?}, got {:?}",
            process.status
        );
        self
    }

    pub fn assert_process_count(&mut self, entity: &Addr, expected: u64) -> &mut Self {
        println!("[ProcessHandler] Asserting {entity} created {expected} processes");
        let count = self.entity_process_count(entity);
        assert_eq!(
            count, expected,
            "Expected process count does not match: expected {expected}, got {count}"
        );
        self
    }

    pub fn assert_results(&mut self, process_id: &ProcessId, expected: &str) -> &mut Self {
        println!("[ProcessHandler] Asserting results of {process_id} are {expected:?}");
        let results = self
            .contract
            .get_results(&self.harness.app.wrap(), process_id)
            .unwrap()
            .results;
        assert_eq!(
            results, expected,
            "Expected results do not match: expected {expected:?}, got {results:?}"
        );
        self
    }

    pub fn assert_question_index(&mut self, process_id: &ProcessId, expected: u32) -> &mut Self {
        println!("[ProcessHandler] Asserting question index of {process_id} is {expected}");
        let question_index = self
            .contract
            .get_question_index(&self.harness.app.wrap(), process_id)
            .unwrap();
        assert_eq!(
            question_index, expected,
            "Expected question index does not match: expected {expected}, got {question_index}"
        );
        self
    }

    pub fn assert_private_key(&mut self, process_id: &ProcessId, expected: &str) -> &mut Self {
        println!("[ProcessHandler] Asserting private key of {process_id} is {expected:?}");
        let private_key = self.private_key(process_id);
        assert_eq!(
            private_key, expected,
            "Expected private key does not match: expected {expected:?}, got {private_key:?}"
        );
        self
    }

    pub fn assert_validators(&mut self, expected: &[&str]) -> &mut Self {
        println!("[ProcessHandler] Asserting validators are {expected:?}");
        let validators = self.validators();
        assert_eq!(
            validators, expected,
            "Expected validators do not match: expected {expected:?}, got {validators:?}"
        );
        self
    }

    pub fn assert_oracles(&mut self, expected: &[Addr]) -> &mut Self {
        println!("[ProcessHandler] Asserting oracles are {expected:?}");
        let oracles = self.oracles();
        assert_eq!(
            oracles, expected,
            "Expected oracles do not match: expected {expected:?}, got {oracles:?}"
        );
        self
    }

    pub fn assert_active_relay(
        &mut self,
        process_id: &ProcessId,
        relay: &Addr,
        expected: bool,
    ) -> &mut Self {
        println!("[ProcessHandler] Asserting relay {relay} active is {expected}");
        let active = self
            .contract
            .is_active_relay(&self.harness.app.wrap(), process_id, relay)
            .unwrap();
        assert_eq!(
            active, expected,
            "Expected relay {relay} active to be {expected}, got {active}"
        );
        self
    }
}
