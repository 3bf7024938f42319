// Authorization gate - decides whether an actor may execute a canonical
// transition. Capability lookups go through the injected provider; the gate
// itself has no side effects and is safe to call repeatedly, so UI
// affordance checks and the executor's real gate can never diverge.

use anyhow::Result;

use super::state::{self, Domain, ResolvedState, State};
use super::traits::CapabilityProvider;

// Fallback when configuration cannot be loaded; same value as the config
// default.
const DEFAULT_CAPABILITY: &str = "apollo_moderate";

/// Base capability required to transition *into* a canonical state.
///
/// `None` means "no explicit entry": the gate substitutes the conservative
/// default. Entering `Draft` is gated at read level (or author ownership),
/// never free.
pub fn capability_requirement(target: State) -> Option<&'static str> {
    match target {
        State::Draft | State::PendingReview => Some("read"),
        State::Approved
        | State::Rejected
        | State::Suspended
        | State::Expired
        | State::Cancelled
        | State::Archived => Some("apollo_moderate"),
        State::Published => Some("apollo_publish"),
    }
}

/// Capability-prefix override declared by a domain, if any.
///
/// Users declares none: its transitions are gated on the base tokens only.
pub fn capability_prefix(domain: Domain) -> Option<&'static str> {
    match domain {
        Domain::Documents => Some("documents"),
        Domain::Groups => Some("groups"),
        Domain::Ads => Some("ads"),
        Domain::Users => None,
    }
}

/// The capability the gate will check for a transition target, before any
/// domain qualification.
pub fn required_capability(target: &ResolvedState) -> String {
    let explicit = target.canonical().and_then(capability_requirement);
    match explicit {
        Some(token) => token.to_string(),
        None => crate::config::config()
            .map(|c| c.authorization.default_capability.clone())
            .unwrap_or_else(|_| DEFAULT_CAPABILITY.to_string()),
    }
}

/// Domain-qualified form of a capability token.
///
/// `apollo_publish` + ads -> `apollo_ads_publish`; bare tokens gain the
/// full prefix: `read` + ads -> `apollo_ads_read`.
pub fn domain_qualified(prefix: &str, capability: &str) -> String {
    match capability.strip_prefix("apollo_") {
        Some(verb) => format!("apollo_{prefix}_{verb}"),
        None => format!("apollo_{prefix}_{capability}"),
    }
}

/// Whether `actor_id` may move an object owned by `author_id` from `from`
/// to `to` within `domain`.
///
/// First match wins: super-admin bypass, matrix validity, domain-qualified
/// capability, base capability, then the author-ownership exception - an
/// author may always retreat their own work to `Draft`, and only to
/// `Draft`. An unknown author (id 0) never matches the ownership exception.
pub fn user_can_transition<P: CapabilityProvider>(
    provider: &P,
    from: &ResolvedState,
    to: &ResolvedState,
    domain: Domain,
    actor_id: u64,
    author_id: u64,
) -> Result<bool> {
    if provider.actor_is_super_admin(actor_id)? {
        return Ok(true);
    }

    if !state::is_valid_transition(from, to) {
        tracing::debug!(
            domain = %domain,
            from = %from,
            to = %to,
            "transition not in matrix, denying"
        );
        return Ok(false);
    }

    let required = required_capability(to);

    if let Some(prefix) = capability_prefix(domain) {
        let qualified = domain_qualified(prefix, &required);
        if provider.actor_has_capability(actor_id, &qualified)? {
            return Ok(true);
        }
    }

    if provider.actor_has_capability(actor_id, &required)? {
        return Ok(true);
    }

    if to.canonical() == Some(State::Draft) && author_id != 0 && actor_id == author_id {
        return Ok(true);
    }

    tracing::debug!(
        domain = %domain,
        from = %from,
        to = %to,
        actor_id = %actor_id,
        required = %required,
        "actor lacks required capability, denying"
    );
    Ok(false)
}
