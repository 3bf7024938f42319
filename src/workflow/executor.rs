// Transition executor - the orchestrating entry point. Validates against
// the registry, authorizes via the gate, commits through the content
// store's compare-and-swap, then records and notifies.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use super::authorize;
use super::mapper;
use super::state::{self, Domain};
use super::traits::{AuditSink, CapabilityProvider, CasOutcome, ContentStore, EventBus};

// Fallback when configuration cannot be loaded; same value as the config
// default.
const DEFAULT_AUDIT_CATEGORY: &str = "workflow";

/// Generic topic published for every successful transition.
pub const TRANSITION_TOPIC: &str = "workflow_transition";

#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The requested move does not exist in the canonical matrix, after
    /// domain mapping. UI response: hide or disable the affordance.
    #[error("invalid transition from '{from}' to '{to}'")]
    InvalidTransition { from: String, to: String },
    /// Actor lacks the required capability and no ownership exception
    /// applies. UI response: show an authorization error.
    #[error("actor {actor_id} may not move {domain} content to '{to}'")]
    PermissionDenied {
        domain: Domain,
        to: String,
        actor_id: u64,
    },
    /// The object's stored state no longer matches the caller-supplied
    /// `from`. Retryable: re-read the current state and re-decide.
    #[error("stored state '{actual}' no longer matches expected '{expected}'")]
    ConcurrentModification { expected: String, actual: String },
    /// A collaborator failed while the engine still needed its answer
    /// (capability lookups, store reads/writes).
    #[error(transparent)]
    Provider(#[from] anyhow::Error),
}

/// Caller-supplied context for one transition request.
#[derive(Debug, Clone, Default)]
pub struct TransitionContext {
    /// The actor requesting the transition.
    pub actor_id: u64,
    /// The object's author; 0 means unknown (the ownership exception never
    /// matches an unknown author).
    pub author_id: u64,
    /// Optional human-readable reason, carried into the audit record.
    pub reason: Option<String>,
}

impl TransitionContext {
    pub fn for_actor(actor_id: u64) -> Self {
        Self {
            actor_id,
            ..Default::default()
        }
    }

    pub fn with_author(mut self, author_id: u64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Append-only record of one successful transition, owned by the audit sink
/// after `record` returns.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionRecord {
    pub id: Uuid,
    pub domain: Domain,
    pub object_id: u64,
    pub from_canonical: String,
    pub to_canonical: String,
    pub actor_id: u64,
    pub timestamp: DateTime<Utc>,
    pub reason: Option<String>,
}

/// The workflow engine: stateless orchestration over four injected
/// collaborators. Static tables only, safe to share across threads.
pub struct WorkflowEngine<P, S, A, B>
where
    P: CapabilityProvider,
    S: ContentStore,
    A: AuditSink,
    B: EventBus,
{
    provider: P,
    store: S,
    audit: A,
    bus: B,
}

impl<P, S, A, B> WorkflowEngine<P, S, A, B>
where
    P: CapabilityProvider,
    S: ContentStore,
    A: AuditSink,
    B: EventBus,
{
    pub fn new(provider: P, store: S, audit: A, bus: B) -> Self {
        Self {
            provider,
            store,
            audit,
            bus,
        }
    }

    /// Read-only affordance check: would `transition` with these inputs get
    /// past the authorization gate? Calls the same gate with the same
    /// inputs, so the two can never diverge.
    pub fn check(
        &self,
        from: &str,
        to: &str,
        domain: Domain,
        actor_id: u64,
        author_id: u64,
    ) -> Result<bool, WorkflowError> {
        let from_canonical = mapper::to_canonical(domain, from);
        let to_canonical = mapper::to_canonical(domain, to);
        let allowed = authorize::user_can_transition(
            &self.provider,
            &from_canonical,
            &to_canonical,
            domain,
            actor_id,
            author_id,
        )?;
        Ok(allowed)
    }

    /// Execute one transition: validate, authorize, commit via
    /// compare-and-swap, record, notify.
    ///
    /// Audit and notification are best-effort: once the store has swapped,
    /// the transition has logically occurred and sink or bus failures are
    /// logged, never returned.
    pub fn transition(
        &self,
        from: &str,
        to: &str,
        domain: Domain,
        object_id: u64,
        context: &TransitionContext,
    ) -> Result<(), WorkflowError> {
        let span = crate::telemetry::create_workflow_span(
            "transition",
            Some(domain.name()),
            Some(object_id),
            None,
        );
        let _enter = span.enter();

        let from_canonical = mapper::to_canonical(domain, from);
        let to_canonical = mapper::to_canonical(domain, to);

        if !state::is_valid_transition(&from_canonical, &to_canonical) {
            return Err(WorkflowError::InvalidTransition {
                from: from_canonical.name().to_string(),
                to: to_canonical.name().to_string(),
            });
        }

        let allowed = authorize::user_can_transition(
            &self.provider,
            &from_canonical,
            &to_canonical,
            domain,
            context.actor_id,
            context.author_id,
        )?;
        if !allowed {
            return Err(WorkflowError::PermissionDenied {
                domain,
                to: to_canonical.name().to_string(),
                actor_id: context.actor_id,
            });
        }

        match self.store.compare_and_swap(domain, object_id, from, to)? {
            CasOutcome::Swapped => {}
            CasOutcome::Mismatch { actual } => {
                tracing::warn!(
                    domain = %domain,
                    object_id = %object_id,
                    expected = %from,
                    actual = %actual,
                    "concurrent modification detected, transition aborted"
                );
                return Err(WorkflowError::ConcurrentModification {
                    expected: from.to_string(),
                    actual,
                });
            }
        }

        let record = TransitionRecord {
            id: Uuid::new_v4(),
            domain,
            object_id,
            from_canonical: from_canonical.name().to_string(),
            to_canonical: to_canonical.name().to_string(),
            actor_id: context.actor_id,
            timestamp: Utc::now(),
            reason: context.reason.clone(),
        };

        let category = crate::config::config()
            .map(|c| c.audit.category.as_str())
            .unwrap_or(DEFAULT_AUDIT_CATEGORY);
        if let Err(e) = self.audit.record(category, &record) {
            tracing::warn!(
                record_id = %record.id,
                error = %e,
                "audit sink failed, transition already committed"
            );
        }

        self.notify(&record, from, to, object_id);

        tracing::info!(
            domain = %domain,
            object_id = %object_id,
            from = %record.from_canonical,
            to = %record.to_canonical,
            actor_id = %context.actor_id,
            "transition committed"
        );
        Ok(())
    }

    // Generic topic first, then the domain-qualified one. Both best-effort.
    fn notify(&self, record: &TransitionRecord, from: &str, to: &str, object_id: u64) {
        let generic = json!({
            "from": from,
            "to": to,
            "domain": record.domain,
            "object_id": object_id,
            "actor_id": record.actor_id,
            "reason": record.reason,
        });
        if let Err(e) = self.bus.publish(TRANSITION_TOPIC, generic) {
            tracing::warn!(record_id = %record.id, error = %e, "generic event publish failed");
        }

        let qualified_topic = format!("{}_{}", TRANSITION_TOPIC, record.domain);
        let qualified = json!({
            "from": from,
            "to": to,
            "object_id": object_id,
            "actor_id": record.actor_id,
            "reason": record.reason,
        });
        if let Err(e) = self.bus.publish(&qualified_topic, qualified) {
            tracing::warn!(record_id = %record.id, error = %e, "domain event publish failed");
        }
    }

    /// The injected capability provider.
    pub fn capability_provider(&self) -> &P {
        &self.provider
    }

    /// The injected content store.
    pub fn content_store(&self) -> &S {
        &self.store
    }

    /// The injected audit sink.
    pub fn audit_sink(&self) -> &A {
        &self.audit
    }

    /// The injected event bus.
    pub fn event_bus(&self) -> &B {
        &self.bus
    }

    /// Allowed canonical targets from a domain-local state, for UI
    /// enumeration. Identity is implicit and not listed.
    pub fn allowed_from(&self, domain: Domain, from: &str) -> &'static [super::state::State] {
        state::allowed_transitions(&mapper::to_canonical(domain, from))
    }
}

impl WorkflowError {
    /// Whether the caller can retry after refreshing the current state.
    pub fn is_retryable(&self) -> bool {
        matches!(self, WorkflowError::ConcurrentModification { .. })
    }
}
