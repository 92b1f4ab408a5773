use cosmwasm_std::{Addr, Event};

use crate::types::{EntityId, ProcessId, ProcessStatus};

pub enum DomainEvent {
    AddrChanged {
        contract_address: Addr,
        node: EntityId,
        address: Addr,
    },
    TextChanged {
        contract_address: Addr,
        entity_id: EntityId,
        key: String,
    },
    ListItemChanged {
        contract_address: Addr,
        entity_id: EntityId,
        key: String,
        index: u32,
    },
    ListItemRemoved {
        contract_address: Addr,
        entity_id: EntityId,
        key: String,
        index: u32,
    },
    GenesisChanged {
        contract_address: Addr,
        genesis: String,
    },
    ChainIdChanged {
        contract_address: Addr,
        chain_id: u64,
    },
    ProcessCreated {
        contract_address: Addr,
        entity_address: Addr,
        process_id: ProcessId,
        census_merkle_tree: String,
    },
    StatusUpdated {
        contract_address: Addr,
        process_id: ProcessId,
        status: ProcessStatus,
    },
    EnvelopeTypeAdded {
        contract_address: Addr,
        envelope_type: u8,
    },
    EnvelopeTypeRemoved {
        contract_address: Addr,
        envelope_type: u8,
    },
    ModeAdded {
        contract_address: Addr,
        mode: u8,
    },
    ModeRemoved {
        contract_address: Addr,
        mode: u8,
    },
    ValidatorAdded {
        contract_address: Addr,
        validator_public_key: String,
    },
    ValidatorRemoved {
        contract_address: Addr,
        validator_public_key: String,
    },
    OracleAdded {
        contract_address: Addr,
        oracle_address: Addr,
    },
    OracleRemoved {
        contract_address: Addr,
        oracle_address: Addr,
    },
    QuestionIndexIncremented {
        contract_address: Addr,
        process_id: ProcessId,
        question_index: u32,
    },
    ResultsPublished {
        contract_address: Addr,
        process_id: ProcessId,
        results: String,
    },
    RelayAdded {
        contract_address: Addr,
        process_id: ProcessId,
        relay_address: Addr,
    },
    RelayDisabled {
        contract_address: Addr,
        process_id: ProcessId,
        relay_address: Addr,
    },
    BatchRegistered {
        contract_address: Addr,
        process_id: ProcessId,
        batch_number: u64,
    },
    PrivateKeyRevealed {
        contract_address: Addr,
        process_id: ProcessId,
        private_key: String,
    },
}

impl From<DomainEvent> for Event {
    fn from(event: DomainEvent) -> Self {
        match event {
            DomainEvent::AddrChanged {
                contract_address,
                node,
                address,
            } => Event::new("addr_changed")
                .add_attribute("contract_address", contract_address.as_str())
                .add_attribute("node", node.to_string())
                .add_attribute("address", address.as_str()),
            DomainEvent::TextChanged {
                contract_address,
                entity_id,
                key,
            } => Event::new("text_changed")
                .add_attribute("contract_address", contract_address.as_str())
                .add_attribute("entity_id", entity_id.to_string())
                .add_attribute("key", key),
            DomainEvent::ListItemChanged {
                contract_address,
                entity_id,
                key,
                index,
            } => Event::new("list_item_changed")
                .add_attribute("contract_address", contract_address.as_str())
                .add_attribute("entity_id", entity_id.to_string())
                .add_attribute("key", key)
                .add_attribute("index", index.to_string()),
            DomainEvent::ListItemRemoved {
                contract_address,
                entity_id,
                key,
                index,
            } => Event::new("list_item_removed")
                .add_attribute("contract_address", contract_address.as_str())
                .add_attribute("entity_id", entity_id.to_string())
                .add_attribute("key", key)
                .add_attribute("index", index.to_string()),
            DomainEvent::GenesisChanged {
                contract_address,
                genesis,
            } => Event::new("genesis_changed")
                .add_attribute("contract_address", contract_address.as_str())
                .add_attribute("genesis", genesis),
            DomainEvent::ChainIdChanged {
                contract_address,
                chain_id,
            } => Event::new("chain_id_changed")
                .add_attribute("contract_address", contract_address.as_str())
                .add_attribute("chain_id", chain_id.to_string()),
            DomainEvent::ProcessCreated {
                contract_address,
                entity_address,
                process_id,
                census_merkle_tree,
            } => Event::new("process_created")
                .add_attribute("contract_address", contract_address.as_str())
                .add_attribute("entity_address", entity_address.as_str())
                .add_attribute("process_id", process_id.to_string())
                .add_attribute("census_merkle_tree", census_merkle_tree),
            DomainEvent::StatusUpdated {
                contract_address,
                process_id,
                status,
            } => Event::new("status_updated")
                .add_attribute("contract_address", contract_address.as_str())
                .add_attribute("process_id", process_id.to_string())
                .add_attribute("status", status.to_string()),
            DomainEvent::EnvelopeTypeAdded {
                contract_address,
                envelope_type,
            } => Event::new("envelope_type_added")
                .add_attribute("contract_address", contract_address.as_str())
                .add_attribute("envelope_type", envelope_type.to_string()),
            DomainEvent::EnvelopeTypeRemoved {
                contract_address,
                envelope_type,
            } => Event::new("envelope_type_removed")
                .add_attribute("contract_address", contract_address.as_str())
                .add_attribute("envelope_type", envelope_type.to_string()),
            DomainEvent::ModeAdded {
                contract_address,
                mode,
            } => Event::new("mode_added")
                .add_attribute("contract_address", contract_address.as_str())
                .add_attribute("mode", mode.to_string()),
            DomainEvent::ModeRemoved {
                contract_address,
                mode,
            } => Event::new("mode_removed")
                .add_attribute("contract_address", contract_address.as_str())
                .add_attribute("mode", mode.to_string()),
            DomainEvent::ValidatorAdded {
                contract_address,
                validator_public_key,
            } => Event::new("validator_added")
                .add_attribute("contract_address", contract_address.as_str())
                .add_attribute("validator_public_key", validator_public_key),
            DomainEvent::ValidatorRemoved {
                contract_address,
                validator_public_key,
            } => Event::new("validator_removed")
                .add_attribute("contract_address", contract_address.as_str())
                .add_attribute("validator_public_key", validator_public_key),
            DomainEvent::OracleAdded {
                contract_address,
                oracle_address,
            } => Event::new("oracle_added")
                .add_attribute("contract_address", contract_address.as_str())
                .add_attribute("oracle_address", oracle_address.as_str()),
            DomainEvent::OracleRemoved {
                contract_address,
                oracle_address,
            } => Event::new("oracle_removed")
                .add_attribute("contract_address", contract_address.as_str())
                .add_attribute("oracle_address", oracle_address.as_str()),
            DomainEvent::QuestionIndexIncremented {
                contract_address,
                process_id,
                question_index,
            } => Event::new("question_index_incremented")
                .add_attribute("contract_address", contract_address.as_str())
                .add_attribute("process_id", process_id.to_string())
                .add_attribute("question_index", question_index.to_string()),
            DomainEvent::ResultsPublished {
                contract_address,
                process_id,
                results,
            } => Event::new("results_published")
                .add_attribute("contract_address", contract_address.as_str())
                .add_attribute("process_id", process_id.to_string())
                .add_attribute("results", results),
            DomainEvent::RelayAdded {
                contract_address,
                process_id,
                relay_address,
            } => Event::new("relay_added")
                .add_attribute("contract_address", contract_address.as_str())
                .add_attribute("process_id", process_id.to_string())
                .add_attribute("relay_address", relay_address.as_str()),
            DomainEvent::RelayDisabled {
                contract_address,
                process_id,
                relay_address,
            } => Event::new("relay_disabled")
                .add_attribute("contract_address", contract_address.as_str())
                .add_attribute("process_id", process_id.to_string())
                .add_attribute("relay_address", relay_address.as_str()),
            DomainEvent::BatchRegistered {
                contract_address,
                process_id,
                batch_number,
            } => Event::new("batch_registered")
                .add_attribute("contract_address", contract_address.as_str())
                .add_attribute("process_id", process_id.to_string())
                .add_attribute("batch_number", batch_number.to_string()),
            DomainEvent::PrivateKeyRevealed {
                contract_address,
                process_id,
                private_key,
            } => Event::new("private_key_revealed")
                .add_attribute("contract_address", contract_address.as_str())
                .add_attribute("process_id", process_id.to_string())
                .add_attribute("private_key", private_key),
        }
    }
}
