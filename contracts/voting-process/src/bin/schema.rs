use cosmwasm_schema::write_api;
use dvote_rs::voting_process::{
    VotingProcessExecuteMsg, VotingProcessInstantiateMsg, VotingProcessMigrateMsg,
    VotingProcessQueryMsg,
};

fn main() {
    write_api! {
        instantiate: VotingProcessInstantiateMsg,
        execute: VotingProcessExecuteMsg,
        query: VotingProcessQueryMsg,
        migrate: VotingProcessMigrateMsg,
    }
}
