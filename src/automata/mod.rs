//! Finite automata derived from regular grammars.
//!
//! The pipeline is: [build_nfa] turns a grammar into an [Nfa], [determinize] turns the NFA into a [Dfa] using subset construction, and [Dfa::accepts] decides membership.

use std::fmt::Display;

mod build;
mod closure;
mod dfa;
mod dot;
mod nfa;
mod subset;

pub use build::{build_nfa, build_nfa_with};
pub use closure::{epsilon_closure, epsilon_closure_of_set};
pub use dfa::{Dfa, DfaState};
pub use nfa::Nfa;
pub use subset::{determinize, determinize_with, step};

/// An opaque identifier of an NFA state.
/// Identifiers are allocated by the automaton they belong to and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(u32);

impl StateId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The role a state plays in the automaton.
/// Determines the name under which the state is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    /// The state corresponding to a nonterminal of the grammar.
    Nonterminal(char),
    /// The synthetic final state of the right-linear construction.
    Accept,
    /// A state in the chain that reads a body with more than one terminal.
    Intermediate,
    /// The fresh initial state introduced by reversing an automaton.
    Entry,
}

/// The label of an NFA transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    Epsilon,
    Symbol(char),
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Epsilon => write!(f, "ε"),
            Label::Symbol(c) => write!(f, "{}", c),
        }
    }
}
