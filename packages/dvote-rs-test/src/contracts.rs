use cosmwasm_std::Empty;
use cw_multi_test::{Contract, ContractWrapper};

/// Code of the entity resolver, ready to be stored in a test app.
pub fn entity_resolver_contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        entity_resolver::contract::execute,
        entity_resolver::contract::instantiate,
        entity_resolver::contract::query,
    )
    .with_migrate(entity_resolver::contract::migrate))
}

/// Code of the voting process registry, ready to be stored in a test app.
pub fn voting_process_contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        voting_process::contract::execute,
        voting_process::contract::instantiate,
        voting_process::contract::query,
    )
    .with_migrate(voting_process::contract::migrate))
}
