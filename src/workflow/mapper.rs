// Domain state mapper - bidirectional translation between a domain's local
// state vocabulary and the canonical one. Static configuration, built once.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::state::{Domain, ResolvedState, State};

/// Ordered local-to-canonical mapping table for one domain.
///
/// Order matters: when several local states collapse onto one canonical
/// state (Documents' `signing`/`signed` are both sub-phases of `Approved`),
/// the reverse direction resolves to the first-declared local name. That
/// direction is lossy by design, not a defect.
pub fn mapping_table(domain: Domain) -> &'static [(&'static str, State)] {
    match domain {
        Domain::Documents => &[
            ("draft", State::Draft),
            ("pending", State::PendingReview),
            ("signing", State::Approved),
            ("signed", State::Approved),
            ("rejected", State::Rejected),
            ("on_hold", State::Suspended),
            ("expired", State::Expired),
            ("withdrawn", State::Cancelled),
            ("archived", State::Archived),
            ("published", State::Published),
        ],
        Domain::Groups => &[
            ("forming", State::Draft),
            ("pending", State::PendingReview),
            ("approved", State::Approved),
            ("rejected", State::Rejected),
            ("suspended", State::Suspended),
            ("dormant", State::Expired),
            ("disbanded", State::Cancelled),
            ("closed", State::Archived),
            ("open", State::Published),
        ],
        Domain::Ads => &[
            ("draft", State::Draft),
            ("pending_review", State::PendingReview),
            ("approved", State::Approved),
            ("rejected", State::Rejected),
            ("paused", State::Suspended),
            ("expired", State::Expired),
            ("withdrawn", State::Cancelled),
            ("sold", State::Archived),
            ("active", State::Published),
        ],
        Domain::Users => &[
            ("pending", State::PendingReview),
            ("active", State::Approved),
            ("banned", State::Suspended),
            ("deactivated", State::Cancelled),
            ("deleted", State::Archived),
        ],
    }
}

// Inverted maps, first-declared local wins for many-to-one entries.
static REVERSE: LazyLock<HashMap<(Domain, State), &'static str>> = LazyLock::new(|| {
    let mut reverse = HashMap::new();
    for domain in Domain::ALL {
        for (local, canonical) in mapping_table(domain) {
            reverse.entry((domain, *canonical)).or_insert(*local);
        }
    }
    reverse
});

/// Resolve a domain-local state name to the canonical vocabulary.
///
/// Lookup order: the domain's table, then a canonical-name parse (a caller
/// passing an already-canonical string for an unmapped slot gets correct
/// behavior for free), then pass-through unchanged.
pub fn to_canonical(domain: Domain, local: &str) -> ResolvedState {
    if let Some((_, canonical)) = mapping_table(domain)
        .iter()
        .find(|(name, _)| *name == local)
    {
        return ResolvedState::Canonical(*canonical);
    }
    match State::parse(local) {
        Some(canonical) => ResolvedState::Canonical(canonical),
        None => ResolvedState::Passthrough(local.to_string()),
    }
}

/// The domain-local representative of a canonical state.
///
/// Falls back to the canonical wire name when the domain declares no local
/// name for the state (Users has no notion of `draft`, it just gets
/// "draft").
pub fn from_canonical(domain: Domain, state: State) -> &'static str {
    REVERSE
        .get(&(domain, state))
        .copied()
        .unwrap_or_else(|| state.name())
}
