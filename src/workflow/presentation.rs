// Query/presentation helpers consumed by external rendering code. Pure
// value lookups, not part of the workflow's correctness surface.

use super::mapper;
use super::state::{Domain, State};

/// Human-readable label for a canonical state.
pub fn label(state: State) -> &'static str {
    match state {
        State::Draft => "Draft",
        State::PendingReview => "Pending Review",
        State::Approved => "Approved",
        State::Rejected => "Rejected",
        State::Suspended => "Suspended",
        State::Expired => "Expired",
        State::Cancelled => "Cancelled",
        State::Archived => "Archived",
        State::Published => "Published",
    }
}

/// CSS badge class for a canonical state.
pub fn badge_class(state: State) -> &'static str {
    match state {
        State::Draft => "badge-draft",
        State::PendingReview => "badge-pending",
        State::Approved | State::Published => "badge-active",
        State::Rejected => "badge-rejected",
        State::Suspended => "badge-warning",
        State::Expired | State::Cancelled | State::Archived => "badge-muted",
    }
}

/// A domain's local state names, in declared order.
pub fn domain_states(domain: Domain) -> Vec<&'static str> {
    mapper::mapping_table(domain)
        .iter()
        .map(|(local, _)| *local)
        .collect()
}
