use std::fmt::{self, Display};

use cosmwasm_schema::{
    cw_serde,
    schemars::{gen::SchemaGenerator, schema::Schema, JsonSchema},
};
use cosmwasm_std::{Addr, Api, HexBinary, StdResult};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidValue {
    #[error("Invalid envelope type: {0}")]
    EnvelopeType(u8),

    #[error("Invalid process mode: {0}")]
    Mode(u8),

    #[error("Invalid process status: {0}")]
    Status(u8),
}

/// Voting semantics of a process: who can see the votes, when, and whether
/// the voter identity is verified.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum ProcessEnvelopeType {
    /// Votes are visible and voter public keys can be recovered.
    #[default]
    RealtimePoll = 0,
    /// Voters can only support the cause. Signatures are visible.
    PetitionSigning = 1,
    /// Votes stay encrypted until the process ends.
    EncryptedPoll = 4,
    /// Encrypted votes and encrypted metadata.
    EncryptedPrivatePoll = 6,
    /// Anonymous voters, votes visible as soon as they are computed.
    RealtimeElection = 8,
    /// Anonymous voters, encrypted metadata and votes.
    PrivateElection = 10,
    /// Anonymous voters, votes encrypted until the process ends.
    Election = 12,
    /// Anonymous voters, encrypted metadata, visible votes.
    RealtimePrivateElection = 14,
}

impl ProcessEnvelopeType {
    pub const VALUES: [u8; 8] = [0, 1, 4, 6, 8, 10, 12, 14];

    pub fn is_realtime_poll(&self) -> bool {
        *self == ProcessEnvelopeType::RealtimePoll
    }

    pub fn is_petition_signing(&self) -> bool {
        *self == ProcessEnvelopeType::PetitionSigning
    }

    pub fn is_encrypted_poll(&self) -> bool {
        *self == ProcessEnvelopeType::EncryptedPoll
    }

    pub fn is_encrypted_private_poll(&self) -> bool {
        *self == ProcessEnvelopeType::EncryptedPrivatePoll
    }

    pub fn is_realtime_election(&self) -> bool {
        *self == ProcessEnvelopeType::RealtimeElection
    }

    pub fn is_private_election(&self) -> bool {
        *self == ProcessEnvelopeType::PrivateElection
    }

    pub fn is_election(&self) -> bool {
        *self == ProcessEnvelopeType::Election
    }

    pub fn is_realtime_private_election(&self) -> bool {
        *self == ProcessEnvelopeType::RealtimePrivateElection
    }

    pub fn is_realtime(&self) -> bool {
        matches!(
            self,
            ProcessEnvelopeType::RealtimePoll
                | ProcessEnvelopeType::RealtimeElection
                | ProcessEnvelopeType::RealtimePrivateElection
        )
    }
}

impl TryFrom<u8> for ProcessEnvelopeType {
    type Error = InvalidValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ProcessEnvelopeType::RealtimePoll),
            1 => Ok(ProcessEnvelopeType::PetitionSigning),
            4 => Ok(ProcessEnvelopeType::EncryptedPoll),
            6 => Ok(ProcessEnvelopeType::EncryptedPrivatePoll),
            8 => Ok(ProcessEnvelopeType::RealtimeElection),
            10 => Ok(ProcessEnvelopeType::PrivateElection),
            12 => Ok(ProcessEnvelopeType::Election),
            14 => Ok(ProcessEnvelopeType::RealtimePrivateElection),
            _ => Err(InvalidValue::EnvelopeType(value)),
        }
    }
}

impl From<ProcessEnvelopeType> for u8 {
    fn from(envelope_type: ProcessEnvelopeType) -> Self {
        envelope_type as u8
    }
}

impl Display for ProcessEnvelopeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

impl JsonSchema for ProcessEnvelopeType {
    fn schema_name() -> String {
        "ProcessEnvelopeType".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        u8::json_schema(gen)
    }
}

/// How a process is driven over time.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum ProcessMode {
    /// Votes are accepted between `start_block` and `start_block + number_of_blocks`.
    /// One envelope per voter.
    #[default]
    ScheduledSingle = 0,
    /// Started and stopped by the creator. One envelope per voter.
    OnDemandSingle = 1,
    /// On demand, one question at a time. The active question is the
    /// process `question_index`.
    Assembly = 3,
}

impl ProcessMode {
    pub const VALUES: [u8; 3] = [0, 1, 3];

    /// Relies on `start_block` and `number_of_blocks`
    pub fn is_scheduled(&self) -> bool {
        *self == ProcessMode::ScheduledSingle
    }

    /// Relies on the creator to be started, paused and ended
    pub fn is_on_demand(&self) -> bool {
        matches!(self, ProcessMode::OnDemandSingle | ProcessMode::Assembly)
    }

    pub fn is_single_envelope(&self) -> bool {
        matches!(self, ProcessMode::ScheduledSingle | ProcessMode::OnDemandSingle)
    }

    pub fn is_assembly(&self) -> bool {
        *self == ProcessMode::Assembly
    }
}

impl TryFrom<u8> for ProcessMode {
    type Error = InvalidValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ProcessMode::ScheduledSingle),
            1 => Ok(ProcessMode::OnDemandSingle),
            3 => Ok(ProcessMode::Assembly),
            _ => Err(InvalidValue::Mode(value)),
        }
    }
}

impl From<ProcessMode> for u8 {
    fn from(mode: ProcessMode) -> Self {
        mode as u8
    }
}

impl Display for ProcessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

impl JsonSchema for ProcessMode {
    fn schema_name() -> String {
        "ProcessMode".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        u8::json_schema(gen)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum ProcessStatus {
    /// Accepting votes
    #[default]
    Open = 0,
    /// Finished, results will be available soon
    Ended = 1,
    /// Canceled, results will never be available
    Canceled = 2,
    /// Temporarily not accepting votes, may be resumed
    Paused = 3,
}

impl ProcessStatus {
    pub const VALUES: [u8; 4] = [0, 1, 2, 3];

    pub fn is_open(&self) -> bool {
        *self == ProcessStatus::Open
    }

    pub fn is_ended(&self) -> bool {
        *self == ProcessStatus::Ended
    }

    pub fn is_canceled(&self) -> bool {
        *self == ProcessStatus::Canceled
    }

    pub fn is_paused(&self) -> bool {
        *self == ProcessStatus::Paused
    }

    pub fn is_final(&self) -> bool {
        self.is_ended() || self.is_canceled()
    }
}

impl TryFrom<u8> for ProcessStatus {
    type Error = InvalidValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ProcessStatus::Open),
            1 => Ok(ProcessStatus::Ended),
            2 => Ok(ProcessStatus::Canceled),
            3 => Ok(ProcessStatus::Paused),
            _ => Err(InvalidValue::Status(value)),
        }
    }
}

impl From<ProcessStatus> for u8 {
    fn from(status: ProcessStatus) -> Self {
        status as u8
    }
}

impl Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

impl JsonSchema for ProcessStatus {
    fn schema_name() -> String {
        "ProcessStatus".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        u8::json_schema(gen)
    }
}

fn sha256(chunks: &[&[u8]]) -> HexBinary {
    let mut hasher = Sha256::new();
    for chunk in chunks {
        hasher.update(chunk);
    }
    HexBinary::from(hasher.finalize().to_vec())
}

/// Key of an entity's record namespace in the resolver.
#[cw_serde]
#[derive(Eq, Hash)]
pub struct EntityId(pub HexBinary);

impl EntityId {
    pub fn from_address(api: &dyn Api, address: &Addr) -> StdResult<Self> {
        let canonical = api.addr_canonicalize(address.as_str())?;
        Ok(EntityId(sha256(&[canonical.as_slice()])))
    }

    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.0.to_hex())
    }
}

#[cw_serde]
#[derive(Eq, Hash)]
pub struct ProcessId(pub HexBinary);

impl ProcessId {
    /// Id of the `index`-th process created by `entity_address`
    pub fn derive(api: &dyn Api, entity_address: &Addr, index: u64) -> StdResult<Self> {
        let canonical = api.addr_canonicalize(entity_address.as_str())?;
        Ok(ProcessId(sha256(&[
            canonical.as_slice(),
            &index.to_be_bytes(),
        ])))
    }

    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.0.to_hex())
    }
}
