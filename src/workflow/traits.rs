// Collaborator traits - the dependency-injection seams between the engine
// and the embedding system. The engine owns none of these concerns.

use anyhow::Result;
use serde_json::Value;

use super::executor::TransitionRecord;
use super::state::Domain;

/// Authorization/capability provider interface.
///
/// Capability tokens are opaque strings owned by the embedding system; the
/// engine only declares which token a transition requires.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait CapabilityProvider {
    /// Whether the actor holds the given capability token.
    fn actor_has_capability(&self, actor_id: u64, capability: &str) -> Result<bool>;

    /// Whether the actor bypasses all capability checks.
    fn actor_is_super_admin(&self, actor_id: u64) -> Result<bool>;
}

/// Outcome of a compare-and-swap against the owning content store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CasOutcome {
    /// Stored state matched the expected value and was replaced.
    Swapped,
    /// Stored state diverged from the expected value; nothing was written.
    Mismatch { actual: String },
}

/// Owning content store interface.
///
/// The store keeps the actual per-object state field; the engine never
/// persists anything itself. `compare_and_swap` must be atomic on the store
/// side - it is the lost-update guard for concurrent transition requests.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ContentStore {
    /// Read the current domain-local state for an object.
    fn current_state(&self, domain: Domain, object_id: u64) -> Result<String>;

    /// Set the local state to `next` only if the stored state equals
    /// `expected`. Atomic; returns `Mismatch` with the actual stored value
    /// when the guard fails.
    fn compare_and_swap(
        &self,
        domain: Domain,
        object_id: u64,
        expected: &str,
        next: &str,
    ) -> Result<CasOutcome>;
}

/// Append-only audit trail interface. Fire-and-forget from the engine's
/// perspective: a failing sink is logged, never rolls back a transition.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait AuditSink {
    /// Append one transition record under the given category.
    fn record(&self, category: &str, record: &TransitionRecord) -> Result<()>;
}

/// Event/notification bus interface. At-least-once delivery is not
/// guaranteed by the engine; subscribers are external.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait EventBus {
    /// Publish one payload to a topic, best-effort.
    fn publish(&self, topic: &str, payload: Value) -> Result<()>;
}
