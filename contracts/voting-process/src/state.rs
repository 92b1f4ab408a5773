use cosmwasm_std::{Addr, Empty, Order, StdError, StdResult, Storage};
use cw_storage_plus::{Bound, Index, IndexList, IndexedMap, Item, Map, MultiIndex};
use dvote_rs::{
    constants::MAX_QUERY_LIMIT,
    types::{ProcessId, ProcessStatus},
    voting_process::{Process, Relay, VotingProcessConfig},
};

pub const CONFIG: Item<VotingProcessConfig> = Item::new("config_v1");

pub const ENVELOPE_TYPES: Map<u8, Empty> = Map::new("envelope_types_v1");
pub const MODES: Map<u8, Empty> = Map::new("modes_v1");

pub const VALIDATORS: Item<Vec<String>> = Item::new("validators_v1");
pub const ORACLES: Item<Vec<Addr>> = Item::new("oracles_v1");

const ENTITY_PROCESS_COUNT: Map<&Addr, u64> = Map::new("entity_process_count_v1");

pub const RELAYS: Map<(&[u8], &Addr), Relay> = Map::new("relays_v1");
pub const RELAY_INDEX: Map<&[u8], Vec<Addr>> = Map::new("relay_index_v1");

pub const VOTE_BATCHES: Map<(&[u8], u64), String> = Map::new("vote_batches_v1");
pub const VOTE_BATCH_COUNT: Map<&[u8], u64> = Map::new("vote_batch_count_v1");

pub const PRIVATE_KEYS: Map<&[u8], String> = Map::new("private_keys_v1");

pub fn get_config(storage: &dyn Storage) -> StdResult<VotingProcessConfig> {
    CONFIG.load(storage)
}

pub fn update_config(
    storage: &mut dyn Storage,
    config: VotingProcessConfig,
) -> StdResult<VotingProcessConfig> {
    CONFIG.save(storage, &config)?;
    Ok(config)
}

pub fn get_entity_process_count(storage: &dyn Storage, entity_address: &Addr) -> StdResult<u64> {
    Ok(ENTITY_PROCESS_COUNT
        .may_load(storage, entity_address)?
        .unwrap_or_default())
}

pub fn increment_entity_process_count(
    storage: &mut dyn Storage,
    entity_address: &Addr,
) -> StdResult<u64> {
    ENTITY_PROCESS_COUNT.update(storage, entity_address, |count| -> StdResult<_> {
        Ok(count.unwrap_or_default() + 1)
    })
}

pub fn is_oracle(storage: &dyn Storage, address: &Addr) -> StdResult<bool> {
    Ok(ORACLES
        .may_load(storage)?
        .unwrap_or_default()
        .contains(address))
}

pub fn is_active_relay(
    storage: &dyn Storage,
    process_id: &ProcessId,
    relay_address: &Addr,
) -> StdResult<bool> {
    Ok(RELAYS
        .may_load(storage, (process_id.as_slice(), relay_address))?
        .is_some_and(|relay| relay.active))
}

/// Stores the relay and records it in the relay index the first time it is seen
pub fn save_relay(storage: &mut dyn Storage, process_id: &ProcessId, relay: &Relay) -> StdResult<()> {
    let key = (process_id.as_slice(), &relay.address);

    if !RELAYS.has(storage, key) {
        RELAY_INDEX.update(storage, process_id.as_slice(), |index| -> StdResult<_> {
            let mut index = index.unwrap_or_default();
            index.push(relay.address.clone());
            Ok(index)
        })?;
    }

    RELAYS.save(storage, key, relay)
}

/// Stores the batch under the next batch number and returns that number
pub fn push_vote_batch(
    storage: &mut dyn Storage,
    process_id: &ProcessId,
    data_content_uri: &str,
) -> StdResult<u64> {
    let batch_number = VOTE_BATCH_COUNT
        .may_load(storage, process_id.as_slice())?
        .unwrap_or_default();

    VOTE_BATCHES.save(
        storage,
        (process_id.as_slice(), batch_number),
        &data_content_uri.to_string(),
    )?;
    VOTE_BATCH_COUNT.save(storage, process_id.as_slice(), &(batch_number + 1))?;

    Ok(batch_number)
}

pub struct ProcessIndexes<'a> {
    pub entity: MultiIndex<'a, Addr, Process, u64>,
    pub status: MultiIndex<'a, u8, Process, u64>,
    pub entity_status: MultiIndex<'a, (Addr, u8), Process, u64>,
}

impl<'a> IndexList<Process> for ProcessIndexes<'a> {
    fn get_indexes(&'_ self) -> Box<dyn Iterator<Item = &'_ dyn Index<Process>> + '_> {
        let v: Vec<&dyn Index<Process>> = vec![&self.entity, &self.status, &self.entity_status];
        Box::new(v.into_iter())
    }
}

/// Processes keyed by their position in the registry, with a lookup from
/// process id to position.
pub struct ProcessStore<'a> {
    count: Item<u64>,
    ids: Map<&'a [u8], u64>,
    processes: IndexedMap<u64, Process, ProcessIndexes<'a>>,
}

impl ProcessStore<'_> {
    pub fn count(&self, storage: &dyn Storage) -> StdResult<u64> {
        Ok(self.count.may_load(storage)?.unwrap_or_default())
    }

    /// Appends a new process. Its `index` is overwritten with the next free position.
    pub fn add(&self, storage: &mut dyn Storage, mut process: Process) -> StdResult<Process> {
        let index = self.count(storage)?;

        if self.ids.has(storage, process.id.as_slice()) {
            return Err(StdError::generic_err(format!(
                "Process {} already exists",
                process.id
            )));
        }

        process.index = index;

        self.ids.save(storage, process.id.as_slice(), &index)?;
        self.processes.save(storage, index, &process)?;
        self.count.save(storage, &(index + 1))?;

        Ok(process)
    }

    pub fn save(&self, storage: &mut dyn Storage, process: &Process) -> StdResult<()> {
        self.processes.save(storage, process.index, process)
    }

    pub fn index_of(&self, storage: &dyn Storage, process_id: &ProcessId) -> StdResult<u64> {
        self.ids
            .may_load(storage, process_id.as_slice())?
            .ok_or_else(|| StdError::generic_err(format!("Process {process_id} not found")))
    }

    pub fn load(&self, storage: &dyn Storage, process_id: &ProcessId) -> StdResult<Process> {
        let index = self.index_of(storage, process_id)?;
        self.processes.load(storage, index)
    }

    pub fn filtered(
        &self,
        storage: &dyn Storage,
        entity_address: Option<Addr>,
        status: Option<ProcessStatus>,
        start_after: Option<ProcessId>,
        limit: Option<u16>,
    ) -> StdResult<Vec<Process>> {
        let start = start_after
            .map(|id| self.index_of(storage, &id))
            .transpose()?
            .map(Bound::exclusive);

        let limit = limit.unwrap_or(MAX_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;

        let processes = match (entity_address, status) {
            (Some(entity_address), Some(status)) => self
                .processes
                .idx
                .entity_status
                .prefix((entity_address, status.into()))
                .range(storage, start, None, Order::Ascending),
            (Some(entity_address), None) => self.processes.idx.entity.prefix(entity_address).range(
                storage,
                start,
                None,
                Order::Ascending,
            ),
            (None, Some(status)) => self.processes.idx.status.prefix(status.into()).range(
                storage,
                start,
                None,
                Order::Ascending,
            ),
            (None, None) => self
                .processes
                .range(storage, start, None, Order::Ascending),
        }
        .take(limit)
        .map(|r| r.map(|(_, process)| process))
        .collect::<StdResult<Vec<_>>>()?;

        Ok(processes)
    }
}

pub const PROCESSES: ProcessStore<'static> = ProcessStore {
    count: Item::new("process_count_v1"),
    ids: Map::new("process_ids_v1"),
    processes: IndexedMap::new(
        "processes_v1",
        ProcessIndexes {
            entity: MultiIndex::new(
                |_, p| p.entity_address.clone(),
                "processes_v1",
                "processes_v1__entity",
            ),
            status: MultiIndex::new(|_, p| p.status.into(), "processes_v1", "processes_v1__status"),
            entity_status: MultiIndex::new(
                |_, p| (p.entity_address.clone(), p.status.into()),
                "processes_v1",
                "processes_v1__entity_status",
            ),
        },
    ),
};
