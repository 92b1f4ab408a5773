pub mod contracts;
pub mod harness;
pub mod process_builder;
pub mod process_handler;
pub mod resolver_builder;
pub mod resolver_handler;

mod integration;
