// Path: crates/api/src/test_utils/mod.rs
//! In-memory state view for testing

use crate::state::{Record, StateView};
use omni_types::app::{StateAction, StateChange};
use omni_types::error::StateError;
use std::collections::BTreeMap;
use tracing::debug;

/// A `StateView` backed by an ordered map, with just enough of an applier to
/// turn state changes into records.
#[derive(Debug, Clone, Default)]
pub struct MemoryStateView {
    records: BTreeMap<Vec<u8>, Record>,
}

impl MemoryStateView {
    /// Creates an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a record verbatim, replacing any previous one.
    pub fn insert_record(&mut self, key: Vec<u8>, record: Record) {
        self.records.insert(key, record);
    }

    /// Applies a list of state changes in order. Stops at the first change that
    /// does not fit the current contents; earlier changes stay applied.
    pub fn apply(&mut self, changes: &[StateChange]) -> Result<(), StateError> {
        for sc in changes {
            let exists = self.records.contains_key(&sc.instance_id);
            debug!(
                target: "state",
                action = %sc.state_action,
                exists,
                "applying state change"
            );
            match sc.state_action {
                StateAction::Create if exists => {
                    return Err(StateError::InvalidValue(
                        "cannot create an existing instance".into(),
                    ))
                }
                StateAction::Update | StateAction::Remove if !exists => {
                    return Err(StateError::KeyNotFound)
                }
                StateAction::Create | StateAction::Update => {
                    self.records
                        .insert(sc.instance_id.clone(), Record::from_state_change(sc));
                }
                StateAction::Remove => {
                    self.records.remove(&sc.instance_id);
                }
            }
        }
        Ok(())
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl StateView for MemoryStateView {
    fn get(&self, key: &[u8]) -> Result<Option<Record>, StateError> {
        Ok(self.records.get(key).cloned())
    }
}
