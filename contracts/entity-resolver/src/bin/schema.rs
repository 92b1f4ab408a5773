use cosmwasm_schema::write_api;
use dvote_rs::entity_resolver::{
    EntityResolverExecuteMsg, EntityResolverInstantiateMsg, EntityResolverMigrateMsg,
    EntityResolverQueryMsg,
};

fn main() {
    write_api! {
        instantiate: EntityResolverInstantiateMsg,
        execute: EntityResolverExecuteMsg,
        query: EntityResolverQueryMsg,
        migrate: EntityResolverMigrateMsg,
    }
}
