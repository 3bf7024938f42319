// Canonical state registry - the shared lifecycle vocabulary and its
// transition graph. Pure data and pure lookups, no I/O.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The nine canonical lifecycle states shared by every content domain.
///
/// The vocabulary is closed: domains translate their own local state names
/// onto these via the mapper, they never extend this enum at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    Draft,
    PendingReview,
    Approved,
    Rejected,
    Suspended,
    Expired,
    Cancelled,
    Archived,
    Published,
}

impl State {
    /// All canonical states, in declaration order.
    pub const ALL: [State; 9] = [
        State::Draft,
        State::PendingReview,
        State::Approved,
        State::Rejected,
        State::Suspended,
        State::Expired,
        State::Cancelled,
        State::Archived,
        State::Published,
    ];

    /// Wire name of this state (matches the serde representation).
    pub fn name(self) -> &'static str {
        match self {
            State::Draft => "draft",
            State::PendingReview => "pending_review",
            State::Approved => "approved",
            State::Rejected => "rejected",
            State::Suspended => "suspended",
            State::Expired => "expired",
            State::Cancelled => "cancelled",
            State::Archived => "archived",
            State::Published => "published",
        }
    }

    /// Parse a wire name back into a canonical state.
    pub fn parse(name: &str) -> Option<State> {
        State::ALL.iter().copied().find(|s| s.name() == name)
    }

    /// States reachable from this one in a single step.
    ///
    /// The identity transition is always legal and is handled by
    /// [`is_valid_transition`], not encoded here. The matrix is total: every
    /// canonical state has a row, even if it is a single escape hatch
    /// (`Archived` can only go back to `Published`).
    pub fn allowed_transitions(self) -> &'static [State] {
        match self {
            State::Draft => &[State::PendingReview, State::Published, State::Cancelled],
            State::PendingReview => &[State::Approved, State::Rejected, State::Draft],
            State::Approved => &[
                State::Published,
                State::Suspended,
                State::Expired,
                State::Draft,
            ],
            State::Rejected => &[State::Draft, State::PendingReview, State::Archived],
            State::Suspended => &[State::Published, State::Cancelled, State::Archived],
            State::Expired => &[State::Draft, State::Archived],
            State::Cancelled => &[State::Draft],
            State::Archived => &[State::Published],
            State::Published => &[
                State::Suspended,
                State::Expired,
                State::Archived,
                State::Draft,
            ],
        }
    }

    /// Whether no further action is typically required for content in this
    /// state.
    ///
    /// Terminal does NOT mean matrix dead-end: `Archived -> Published` and
    /// `Expired -> Draft` stay legal as escape hatches. This predicate is a
    /// presentation/workflow hint, not a reachability claim.
    pub fn is_terminal(self) -> bool {
        matches!(self, State::Archived | State::Cancelled | State::Expired)
    }

    /// Whether content in this state is live from a consumer's perspective.
    pub fn is_active(self) -> bool {
        matches!(self, State::Approved | State::Published)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The content subsystems sharing the canonical lifecycle.
///
/// Each domain owns a private vocabulary of local state names plus an
/// optional capability-prefix override; both live in the mapper and the
/// authorization gate. Adding a domain means adding a variant here and one
/// mapping table there, nothing else changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Documents,
    Groups,
    Ads,
    Users,
}

impl Domain {
    /// All known domains, in declaration order.
    pub const ALL: [Domain; 4] = [Domain::Documents, Domain::Groups, Domain::Ads, Domain::Users];

    /// Wire name of this domain (matches the serde representation).
    pub fn name(self) -> &'static str {
        match self {
            Domain::Documents => "documents",
            Domain::Groups => "groups",
            Domain::Ads => "ads",
            Domain::Users => "users",
        }
    }

    /// Parse a wire name back into a domain.
    pub fn parse(name: &str) -> Option<Domain> {
        Domain::ALL.iter().copied().find(|d| d.name() == name)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A domain-local state after resolution through the mapper.
///
/// Local names with a mapping entry (or that already parse as canonical)
/// resolve to `Canonical`; anything else passes through unchanged. The
/// pass-through is deliberate: unmapped vocabularies keep working, they just
/// get the closed-world treatment (no outgoing transitions besides
/// identity).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolvedState {
    Canonical(State),
    Passthrough(String),
}

impl ResolvedState {
    /// The canonical state, if this resolved to one.
    pub fn canonical(&self) -> Option<State> {
        match self {
            ResolvedState::Canonical(s) => Some(*s),
            ResolvedState::Passthrough(_) => None,
        }
    }

    /// Wire name: the canonical name or the pass-through token verbatim.
    pub fn name(&self) -> &str {
        match self {
            ResolvedState::Canonical(s) => s.name(),
            ResolvedState::Passthrough(raw) => raw,
        }
    }
}

impl fmt::Display for ResolvedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<State> for ResolvedState {
    fn from(state: State) -> Self {
        ResolvedState::Canonical(state)
    }
}

/// Whether a one-step move between two resolved states is legal.
///
/// True iff `from == to` (identity is always legal, for pass-through states
/// too) or both are canonical and `to` appears in the matrix row for `from`.
pub fn is_valid_transition(from: &ResolvedState, to: &ResolvedState) -> bool {
    if from == to {
        return true;
    }
    match (from, to) {
        (ResolvedState::Canonical(f), ResolvedState::Canonical(t)) => {
            f.allowed_transitions().contains(t)
        }
        _ => false,
    }
}

/// Matrix row for a resolved state.
///
/// Pass-through states have no legal outgoing transitions - a closed-world
/// policy for vocabulary this registry does not know.
pub fn allowed_transitions(from: &ResolvedState) -> &'static [State] {
    match from {
        ResolvedState::Canonical(s) => s.allowed_transitions(),
        ResolvedState::Passthrough(_) => &[],
    }
}
