use cosmwasm_std::{Addr, CosmosMsg, StdError};
use cw2::{query_contract_info, ContractVersion};
use cw_multi_test::{error::AnyResult, App, AppResponse, Executor};
use dvote_rs::{
    entity_resolver::{EntityResolverInstantiateMsg, EntityResolverMigrateMsg},
    voting_process::{VotingProcessInstantiateMsg, VotingProcessMigrateMsg},
};

use crate::contracts::{entity_resolver_contract, voting_process_contract};

pub const ACCOUNT_COUNT: usize = 10;

pub struct DvoteTestApp {
    pub app: App,
    pub entity_resolver_code_id: u64,
    pub voting_process_code_id: u64,
    pub accounts: Vec<Addr>,
}

impl DvoteTestApp {
    pub fn setup() -> Self {
        let mut app = App::default();

        let entity_resolver_code_id = app.store_code(entity_resolver_contract());
        let voting_process_code_id = app.store_code(voting_process_contract());

        let accounts = (0..ACCOUNT_COUNT)
            .map(|i| app.api().addr_make(&format!("account-{i}")))
            .collect();

        Self {
            app,
            entity_resolver_code_id,
            voting_process_code_id,
            accounts,
        }
    }

    /// Deploys every contract in the tests
    pub fn deployer(&self) -> Addr {
        self.accounts[0].clone()
    }

    /// Creates processes and owns resolver records by default
    pub fn entity(&self) -> Addr {
        self.accounts[1].clone()
    }

    pub fn account(&self, index: usize) -> Addr {
        self.accounts[index].clone()
    }

    pub fn instantiate_entity_resolver(&mut self, sender: &Addr) -> AnyResult<Addr> {
        println!("[DvoteTestApp] Deploying entity resolver from {sender}");
        self.app.instantiate_contract(
            self.entity_resolver_code_id,
            sender.clone(),
            &EntityResolverInstantiateMsg {},
            &[],
            "dvote-entity-resolver",
            Some(sender.to_string()),
        )
    }

    pub fn instantiate_voting_process(
        &mut self,
        sender: &Addr,
        msg: &VotingProcessInstantiateMsg,
    ) -> AnyResult<Addr> {
        println!("[DvoteTestApp] Deploying voting process from {sender}");
        self.app.instantiate_contract(
            self.voting_process_code_id,
            sender.clone(),
            msg,
            &[],
            "dvote-voting-process",
            Some(sender.to_string()),
        )
    }

    /// Migrates a deployed resolver to the stored resolver code
    pub fn migrate_entity_resolver(
        &mut self,
        sender: &Addr,
        contract: &Addr,
    ) -> AnyResult<AppResponse> {
        println!("[DvoteTestApp] Migrating entity resolver {contract} from {sender}");
        self.app.migrate_contract(
            sender.clone(),
            contract.clone(),
            &EntityResolverMigrateMsg {},
            self.entity_resolver_code_id,
        )
    }

    pub fn migrate_voting_process(
        &mut self,
        sender: &Addr,
        contract: &Addr,
    ) -> AnyResult<AppResponse> {
        println!("[DvoteTestApp] Migrating voting process {contract} from {sender}");
        self.app.migrate_contract(
            sender.clone(),
            contract.clone(),
            &VotingProcessMigrateMsg {},
            self.voting_process_code_id,
        )
    }

    pub fn contract_version(&self, contract: &Addr) -> AnyResult<ContractVersion> {
        Ok(query_contract_info(&self.app.wrap(), contract.to_string())?)
    }

    pub fn execute(&mut self, sender: &Addr, msg: CosmosMsg) -> AnyResult<AppResponse> {
        self.app.execute(sender.clone(), msg)
    }

    pub fn block_height(&self) -> u64 {
        self.app.block_info().height
    }

    pub fn advance_blocks(&mut self, count: u64) {
        self.app.update_block(|block| {
            block.height += count;
            block.time = block.time.plus_seconds(count * 5);
        });
    }
}

/// Value of the first `key` attribute of the contract event `event`.
pub fn find_event_attribute(response: &AppResponse, event: &str, key: &str) -> AnyResult<String> {
    let ty = format!("wasm-{event}");

    let event = response
        .events
        .iter()
        .find(|ev| ev.ty == ty)
        .ok_or_else(|| StdError::generic_err(format!("Could not find {ty} event")))?;

    Ok(event
        .attributes
        .iter()
        .find(|attr| attr.key == key)
        .ok_or_else(|| StdError::generic_err(format!("Could not find {key} attribute")))?
        .value
        .clone())
}
