use thiserror::Error;

use crate::grammar::{Classification, GrammarError, Production};

/// The reason why a production cannot be turned into transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("the body is empty")]
    EmptyBody,

    #[error("nonterminal '{0}' occurs in a position not allowed in a linear grammar")]
    MisplacedNonterminal(char),

    #[error("unit productions are not allowed (body is the single nonterminal '{0}')")]
    UnitProduction(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The grammar violates its own invariants.
    #[error("invalid grammar: {0}")]
    Grammar(#[from] GrammarError),

    /// A production does not have the shape required by the construction.
    #[error("malformed production #{index} ({production}): {reason}")]
    MalformedGrammar {
        index: usize,
        production: Production,
        reason: Malformed,
    },

    /// The grammar is neither right-linear nor left-linear.
    #[error("unsupported grammar: {0} grammars cannot be converted into a finite automaton")]
    UnsupportedGrammar(Classification),

    #[error("subset construction exceeded the limit of {0} states")]
    StateLimitExceeded(usize),
}
