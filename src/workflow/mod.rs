// Workflow Module - Unified Content-Lifecycle Engine
//
// One state-machine abstraction shared by every content domain: documents,
// groups, classified ads, and user accounts. Each domain keeps its own
// state vocabulary; all of them obey one lifecycle, one authorization
// policy, and one audit trail.

pub mod authorize;
pub mod executor;
pub mod mapper;
pub mod presentation;
pub mod state;
pub mod traits;

#[cfg(test)]
pub mod mocks;


pub use executor::{
    TransitionContext, TransitionRecord, WorkflowEngine, WorkflowError, TRANSITION_TOPIC,
};
pub use state::{Domain, ResolvedState, State};
pub use traits::{AuditSink, CapabilityProvider, CasOutcome, ContentStore, EventBus};
