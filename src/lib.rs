//! Conversion of regular grammars into finite automata.
//!
//! A right-linear or left-linear [Grammar] is converted into an [Nfa] with epsilon transitions, which is then determinized into a [Dfa] by subset construction.
//! The DFA decides membership of input strings.
//!
//! ```
//! use regram::{compile, Grammar, Options};
//!
//! let grammar = Grammar::new(['S', 'A'], ['a', 'b'], 'S', [('S', "aA"), ('A', "b"), ('A', "aA")]).unwrap();
//! let dfa = compile(&grammar, &Options::default()).unwrap();
//! assert!(dfa.accepts("aab"));
//! assert!(!dfa.accepts("ba"));
//! ```

mod automata;
mod error;
mod grammar;
mod options;

pub use automata::{
    build_nfa, build_nfa_with, determinize, determinize_with, epsilon_closure,
    epsilon_closure_of_set, step, Dfa, DfaState, Label, Nfa, StateId, StateKind,
};
pub use error::{Error, Malformed};
pub use grammar::{
    classify, is_context_free, is_left_linear, is_regular, is_right_linear, Body, Classification,
    Grammar, GrammarError, Production,
};
pub use options::{Options, UnitProductions};

/// Converts the grammar into a DFA.
/// Fails if the grammar cannot be converted into an NFA, or if the DFA exceeds the state limit set in the options.
pub fn compile(grammar: &Grammar, options: &Options) -> Result<Dfa, Error> {
    let nfa = build_nfa_with(grammar, options)?;
    determinize_with(&nfa, options)
}
