// Mock implementations for testing - no side effects outside RefCells

use anyhow::{anyhow, Result};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use super::executor::TransitionRecord;
use super::state::Domain;
use super::traits::*;

/// Scriptable capability provider backed by in-memory grant tables.
#[derive(Debug, Default)]
pub struct StaticCapabilityProvider {
    pub super_admins: RefCell<HashSet<u64>>,
    pub grants: RefCell<HashMap<u64, HashSet<String>>>,
    pub checked: RefCell<Vec<(u64, String)>>,
}

impl StaticCapabilityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(&self, actor_id: u64, capability: &str) {
        self.grants
            .borrow_mut()
            .entry(actor_id)
            .or_default()
            .insert(capability.to_string());
    }

    pub fn make_super_admin(&self, actor_id: u64) {
        self.super_admins.borrow_mut().insert(actor_id);
    }

    pub fn checked_capabilities(&self) -> Vec<(u64, String)> {
        self.checked.borrow().clone()
    }
}

impl CapabilityProvider for StaticCapabilityProvider {
    fn actor_has_capability(&self, actor_id: u64, capability: &str) -> Result<bool> {
        self.checked
            .borrow_mut()
            .push((actor_id, capability.to_string()));
        Ok(self
            .grants
            .borrow()
            .get(&actor_id)
            .is_some_and(|caps| caps.contains(capability)))
    }

    fn actor_is_super_admin(&self, actor_id: u64) -> Result<bool> {
        Ok(self.super_admins.borrow().contains(&actor_id))
    }
}

/// In-memory content store with a faithful compare-and-swap.
#[derive(Debug, Default)]
pub struct InMemoryContentStore {
    pub states: RefCell<HashMap<(Domain, u64), String>>,
    pub swap_attempts: RefCell<Vec<(Domain, u64, String, String)>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_state(&self, domain: Domain, object_id: u64, state: &str) {
        self.states
            .borrow_mut()
            .insert((domain, object_id), state.to_string());
    }

    pub fn state_of(&self, domain: Domain, object_id: u64) -> Option<String> {
        self.states.borrow().get(&(domain, object_id)).cloned()
    }
}

impl ContentStore for InMemoryContentStore {
    fn current_state(&self, domain: Domain, object_id: u64) -> Result<String> {
        self.states
            .borrow()
            .get(&(domain, object_id))
            .cloned()
            .ok_or_else(|| anyhow!("no state stored for {domain}/{object_id}"))
    }

    fn compare_and_swap(
        &self,
        domain: Domain,
        object_id: u64,
        expected: &str,
        next: &str,
    ) -> Result<CasOutcome> {
        self.swap_attempts.borrow_mut().push((
            domain,
            object_id,
            expected.to_string(),
            next.to_string(),
        ));
        let mut states = self.states.borrow_mut();
        let current = states
            .get(&(domain, object_id))
            .cloned()
            .ok_or_else(|| anyhow!("no state stored for {domain}/{object_id}"))?;
        if current != expected {
            return Ok(CasOutcome::Mismatch { actual: current });
        }
        states.insert((domain, object_id), next.to_string());
        Ok(CasOutcome::Swapped)
    }
}

/// Audit sink that appends records in memory; optionally fails every call.
#[derive(Debug, Default)]
pub struct RecordingAuditSink {
    pub records: RefCell<Vec<(String, TransitionRecord)>>,
    pub fail: RefCell<bool>,
}

impl RecordingAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, fail: bool) {
        *self.fail.borrow_mut() = fail;
    }

    pub fn recorded(&self) -> Vec<(String, TransitionRecord)> {
        self.records.borrow().clone()
    }
}

impl AuditSink for RecordingAuditSink {
    fn record(&self, category: &str, record: &TransitionRecord) -> Result<()> {
        if *self.fail.borrow() {
            return Err(anyhow!("audit sink unavailable"));
        }
        self.records
            .borrow_mut()
            .push((category.to_string(), record.clone()));
        Ok(())
    }
}

/// Event bus that collects published topics in order; optionally fails.
#[derive(Debug, Default)]
pub struct RecordingEventBus {
    pub published: RefCell<Vec<(String, serde_json::Value)>>,
    pub fail: RefCell<bool>,
}

impl RecordingEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, fail: bool) {
        *self.fail.borrow_mut() = fail;
    }

    pub fn topics(&self) -> Vec<String> {
        self.published
            .borrow()
            .iter()
            .map(|(topic, _)| topic.clone())
            .collect()
    }

    pub fn published_payloads(&self) -> Vec<(String, serde_json::Value)> {
        self.published.borrow().clone()
    }
}

impl EventBus for RecordingEventBus {
    fn publish(&self, topic: &str, payload: serde_json::Value) -> Result<()> {
        if *self.fail.borrow() {
            return Err(anyhow!("event bus unavailable"));
        }
        self.published
            .borrow_mut()
            .push((topic.to_string(), payload));
        Ok(())
    }
}
