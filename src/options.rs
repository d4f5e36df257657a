const DEFAULT_UNIT_PRODUCTIONS: UnitProductions = UnitProductions::Epsilon;
const DEFAULT_MAX_DFA_STATES: Option<usize> = None;

/// How productions whose body is a single nonterminal (`A -> B`) are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitProductions {
    /// Add an epsilon transition from `A` to `B`.
    Epsilon,
    /// Fail the construction with a malformed-grammar error.
    Reject,
}

#[derive(Debug, Clone)]
pub struct Options {
    /// How unit productions are turned into transitions.
    pub unit_productions: UnitProductions,
    /// The maximum number of states the subset construction may create.
    /// If the limit is reached, the construction fails instead of producing a DFA.
    /// If `None`, the number of states is only bounded by 2^n, where n is the number of NFA states.
    pub max_dfa_states: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            unit_productions: DEFAULT_UNIT_PRODUCTIONS,
            max_dfa_states: DEFAULT_MAX_DFA_STATES,
        }
    }
}

impl Options {
    pub fn set_max_dfa_states(&mut self, max: usize) {
        self.max_dfa_states = Some(max);
    }

    pub fn reject_unit_productions(&mut self) {
        self.unit_productions = UnitProductions::Reject;
    }
}
