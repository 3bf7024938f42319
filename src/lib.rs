// Apollo Workflow Library - Unified Content-Lifecycle Engine
// This exposes the engine surface for embedding and integration testing

pub mod config;
pub mod telemetry;
pub mod workflow;

// Re-export key types for easy access
pub use config::{config, init_config, ApolloWorkflowConfig};
pub use telemetry::{
    create_workflow_span, generate_correlation_id, init_telemetry, shutdown_telemetry,
};
pub use workflow::authorize::{
    capability_prefix, capability_requirement, domain_qualified, required_capability,
    user_can_transition,
};
pub use workflow::mapper::{from_canonical, to_canonical};
pub use workflow::presentation::{badge_class, domain_states, label};
pub use workflow::state::{allowed_transitions, is_valid_transition};
pub use workflow::{
    AuditSink, CapabilityProvider, CasOutcome, ContentStore, Domain, EventBus, ResolvedState,
    State, TransitionContext, TransitionRecord, WorkflowEngine, WorkflowError, TRANSITION_TOPIC,
};
