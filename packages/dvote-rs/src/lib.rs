pub mod constants;
pub mod core;
pub mod entity_resolver;
pub mod events;
pub mod list;
pub mod types;
pub mod voting_process;
