use cosmwasm_std::{Addr, Deps};
use dvote_rs::{
    core::ContractError,
    types::ProcessStatus,
    voting_process::{CreateProcessMsg, Process},
};

use crate::state::{ENVELOPE_TYPES, MODES};

pub trait Validate {
    fn validate(&self, deps: Deps) -> Result<(), ContractError>;
}

impl Validate for CreateProcessMsg {
    fn validate(&self, deps: Deps) -> Result<(), ContractError> {
        if !ENVELOPE_TYPES.has(deps.storage, self.envelope_type.into()) {
            return Err(ContractError::generic_err(format!(
                "Envelope type {} is not supported",
                self.envelope_type
            )));
        }

        if !MODES.has(deps.storage, self.mode.into()) {
            return Err(ContractError::generic_err(format!(
                "Process mode {} is not supported",
                self.mode
            )));
        }

        if self.metadata.is_empty() {
            return Err(ContractError::generic_err("Metadata cannot be empty"));
        }

        if self.census_merkle_root.is_empty() {
            return Err(ContractError::generic_err("Census merkle root cannot be empty"));
        }

        if self.census_merkle_tree.is_empty() {
            return Err(ContractError::generic_err("Census merkle tree cannot be empty"));
        }

        if self.mode.is_scheduled() && self.number_of_blocks == 0 {
            return Err(ContractError::generic_err(
                "Scheduled processes must last at least one block",
            ));
        }

        Ok(())
    }
}

/// Checks that `sender` may move `process` into `status`.
///
/// The creator may make any valid transition. Oracles may only end a process.
pub fn validate_status_change(
    process: &Process,
    sender: &Addr,
    sender_is_oracle: bool,
    status: ProcessStatus,
) -> Result<(), ContractError> {
    let is_creator = *sender == process.entity_address;

    if !is_creator && !(sender_is_oracle && status.is_ended()) {
        return Err(ContractError::Unauthorized {});
    }

    if process.status.is_final() {
        return Err(ContractError::generic_err(format!(
            "Process {} can no longer change its status",
            process.id
        )));
    }

    if process.status == status {
        return Err(ContractError::generic_err(format!(
            "Process {} already has status {}",
            process.id, status
        )));
    }

    if (status.is_paused() || process.status.is_paused()) && !process.mode.is_on_demand() {
        return Err(ContractError::generic_err(
            "Only on demand processes can be paused or resumed",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::{testing::mock_dependencies, Empty, HexBinary};
    use dvote_rs::types::{ProcessEnvelopeType, ProcessId, ProcessMode};
    use rstest::rstest;

    fn create_msg() -> CreateProcessMsg {
        CreateProcessMsg {
            envelope_type: ProcessEnvelopeType::RealtimePoll,
            mode: ProcessMode::ScheduledSingle,
            metadata: "ipfs://metadata".to_string(),
            census_merkle_root: "0x1234".to_string(),
            census_merkle_tree: "ipfs://tree".to_string(),
            start_block: 100,
            number_of_blocks: 10,
        }
    }

    fn process(mode: ProcessMode, status: ProcessStatus) -> Process {
        Process {
            id: ProcessId(HexBinary::from(vec![1; 32])),
            index: 0,
            entity_address: Addr::unchecked("entity"),
            envelope_type: ProcessEnvelopeType::RealtimePoll,
            mode,
            metadata: "ipfs://metadata".to_string(),
            census_merkle_root: "0x1234".to_string(),
            census_merkle_tree: "ipfs://tree".to_string(),
            start_block: 0,
            number_of_blocks: 0,
            status,
            question_index: 0,
            results: None,
        }
    }

    #[test]
    fn create_requires_supported_envelope_type_and_mode() {
        let mut deps = mock_dependencies();

        assert_eq!(
            create_msg().validate(deps.as_ref()).unwrap_err(),
            ContractError::generic_err("Envelope type 0 is not supported")
        );

        ENVELOPE_TYPES
            .save(deps.as_mut().storage, 0, &Empty {})
            .unwrap();

        assert_eq!(
            create_msg().validate(deps.as_ref()).unwrap_err(),
            ContractError::generic_err("Process mode 0 is not supported")
        );

        MODES.save(deps.as_mut().storage, 0, &Empty {}).unwrap();

        assert!(create_msg().validate(deps.as_ref()).is_ok());
    }

    #[rstest]
    #[case(CreateProcessMsg { metadata: "".to_string(), ..create_msg() }, "Metadata cannot be empty")]
    #[case(CreateProcessMsg { census_merkle_root: "".to_string(), ..create_msg() }, "Census merkle root cannot be empty")]
    #[case(CreateProcessMsg { census_merkle_tree: "".to_string(), ..create_msg() }, "Census merkle tree cannot be empty")]
    #[case(CreateProcessMsg { number_of_blocks: 0, ..create_msg() }, "Scheduled processes must last at least one block")]
    fn create_rejects_incomplete_processes(#[case] msg: CreateProcessMsg, #[case] error: &str) {
        let mut deps = mock_dependencies();

        ENVELOPE_TYPES
            .save(deps.as_mut().storage, 0, &Empty {})
            .unwrap();
        MODES.save(deps.as_mut().storage, 0, &Empty {}).unwrap();

        assert_eq!(
            msg.validate(deps.as_ref()).unwrap_err(),
            ContractError::generic_err(error)
        );
    }

    #[test]
    fn on_demand_process_may_last_zero_blocks() {
        let mut deps = mock_dependencies();

        ENVELOPE_TYPES
            .save(deps.as_mut().storage, 0, &Empty {})
            .unwrap();
        MODES.save(deps.as_mut().storage, 1, &Empty {}).unwrap();

        assert!(CreateProcessMsg {
            mode: ProcessMode::OnDemandSingle,
            number_of_blocks: 0,
            ..create_msg()
        }
        .validate(deps.as_ref())
        .is_ok());
    }

    #[rstest]
    #[case(ProcessMode::OnDemandSingle, ProcessStatus::Open, ProcessStatus::Paused, true)]
    #[case(ProcessMode::OnDemandSingle, ProcessStatus::Paused, ProcessStatus::Open, true)]
    #[case(ProcessMode::Assembly, ProcessStatus::Open, ProcessStatus::Paused, true)]
    #[case(ProcessMode::ScheduledSingle, ProcessStatus::Open, ProcessStatus::Paused, false)]
    #[case(ProcessMode::ScheduledSingle, ProcessStatus::Open, ProcessStatus::Ended, true)]
    #[case(ProcessMode::ScheduledSingle, ProcessStatus::Open, ProcessStatus::Canceled, true)]
    #[case(ProcessMode::OnDemandSingle, ProcessStatus::Paused, ProcessStatus::Canceled, true)]
    #[case(ProcessMode::OnDemandSingle, ProcessStatus::Open, ProcessStatus::Open, false)]
    #[case(ProcessMode::OnDemandSingle, ProcessStatus::Ended, ProcessStatus::Open, false)]
    #[case(ProcessMode::OnDemandSingle, ProcessStatus::Canceled, ProcessStatus::Open, false)]
    #[case(ProcessMode::Assembly, ProcessStatus::Ended, ProcessStatus::Canceled, false)]
    fn creator_status_transitions(
        #[case] mode: ProcessMode,
        #[case] from: ProcessStatus,
        #[case] to: ProcessStatus,
        #[case] allowed: bool,
    ) {
        assert_eq!(
            validate_status_change(&process(mode, from), &Addr::unchecked("entity"), false, to)
                .is_ok(),
            allowed
        );
    }

    #[rstest]
    #[case(ProcessStatus::Ended, true)]
    #[case(ProcessStatus::Canceled, false)]
    #[case(ProcessStatus::Paused, false)]
    fn oracle_may_only_end(#[case] status: ProcessStatus, #[case] allowed: bool) {
        let result = validate_status_change(
            &process(ProcessMode::OnDemandSingle, ProcessStatus::Open),
            &Addr::unchecked("oracle"),
            true,
            status,
        );

        if allowed {
            assert!(result.is_ok());
        } else {
            assert_eq!(result.unwrap_err(), ContractError::Unauthorized {});
        }
    }

    #[test]
    fn stranger_cannot_change_status() {
        assert_eq!(
            validate_status_change(
                &process(ProcessMode::OnDemandSingle, ProcessStatus::Open),
                &Addr::unchecked("stranger"),
                false,
                ProcessStatus::Ended,
            )
            .unwrap_err(),
            ContractError::Unauthorized {}
        );
    }
}
