pub mod contract;
pub mod state;
pub mod validation;
