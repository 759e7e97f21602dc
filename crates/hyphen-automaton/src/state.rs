// State and transition records for the pattern automaton.

/// Index of a state in the automaton's state table. The root is index 0.
pub type StateId = u32;

/// The root state, representing the empty string.
pub const ROOT: StateId = 0;

/// A single byte-keyed transition to a longer-string state.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub byte: u8,
    pub target: StateId,
}

/// One automaton state.
///
/// The state's identity is a pattern-prefix string; `match_weights` is set
/// when a whole pattern word ends here, and `fallback` points at the state
/// of the longest proper suffix of this state's string (`None` only for the
/// root). Transitions are a sparse list: states rarely branch more than a
/// handful of ways, so a linear scan beats a per-state map.
#[derive(Debug, Default)]
pub struct State {
    pub(crate) match_weights: Option<Box<[u8]>>,
    pub(crate) fallback: Option<StateId>,
    pub(crate) transitions: Vec<Transition>,
}

impl State {
    /// Look up the direct transition for an input byte, if any.
    pub fn transition(&self, byte: u8) -> Option<StateId> {
        self.transitions
            .iter()
            .find(|t| t.byte == byte)
            .map(|t| t.target)
    }

    /// The weight digits attached to this state, if a pattern ends here.
    pub fn match_weights(&self) -> Option<&[u8]> {
        self.match_weights.as_deref()
    }

    /// The fallback (failure) state, or `None` for the root.
    pub fn fallback(&self) -> Option<StateId> {
        self.fallback
    }
}
