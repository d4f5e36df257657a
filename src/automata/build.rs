//! Construction of NFAs from right-linear and left-linear grammars.
//!
//! A right-linear grammar is turned into an NFA directly: every nonterminal becomes a state, a fresh state is the only final state, and each production `A -> a1...ak B` becomes a path from `A` to `B` reading `a1...ak`.
//! A production without a trailing nonterminal leads to the final state instead.
//!
//! A left-linear grammar generates the reverse of the language of its mirrored (right-linear) grammar.
//! It is thus converted by building the NFA of the mirrored grammar and reversing it.

use std::{collections::BTreeMap, time::Instant};

use crate::{
    error::{Error, Malformed},
    grammar::{classify, Classification, Grammar},
    options::{Options, UnitProductions},
};

use super::{Label, Nfa, StateId, StateKind};

/// Builds an NFA for the given grammar using the default [Options].
pub fn build_nfa(grammar: &Grammar) -> Result<Nfa, Error> {
    build_nfa_with(grammar, &Options::default())
}

/// Builds an NFA for the given grammar.
/// Fails with [Error::UnsupportedGrammar] if the grammar is neither right-linear nor left-linear, and with [Error::MalformedGrammar] if a production cannot be converted.
pub fn build_nfa_with(grammar: &Grammar, options: &Options) -> Result<Nfa, Error> {
    let t = Instant::now();
    let nfa = match classify(grammar) {
        Classification::RightLinear | Classification::Regular => {
            from_right_linear(grammar, options)?
        }
        Classification::LeftLinear => from_left_linear(grammar, options)?,
        other => return Err(Error::UnsupportedGrammar(other)),
    };
    log::debug!(
        "Built NFA with {} states and {} transitions ({:?})",
        nfa.num_states(),
        nfa.num_transitions(),
        t.elapsed()
    );
    Ok(nfa)
}

fn from_left_linear(grammar: &Grammar, options: &Options) -> Result<Nfa, Error> {
    let nfa = from_right_linear(&grammar.mirrored(), options).map_err(|err| match err {
        // Report the production as the caller wrote it
        Error::MalformedGrammar { index, reason, .. } => Error::MalformedGrammar {
            index,
            production: grammar.productions()[index].clone(),
            reason,
        },
        err => err,
    })?;
    Ok(nfa.reverse())
}

fn from_right_linear(grammar: &Grammar, options: &Options) -> Result<Nfa, Error> {
    let start = grammar.start();
    let mut nfa = Nfa::new(
        grammar.terminals().clone(),
        StateKind::Nonterminal(start),
    );

    let mut states: BTreeMap<char, StateId> = BTreeMap::new();
    states.insert(start, nfa.initial());
    for nt in grammar.nonterminals().iter().filter(|nt| **nt != start) {
        states.insert(*nt, nfa.add_state(StateKind::Nonterminal(*nt)));
    }
    let accept = nfa.add_state(StateKind::Accept);
    nfa.add_final(accept);

    for (index, production) in grammar.productions().iter().enumerate() {
        log::trace!("Converting production #{}: {}", index, production);
        let malformed = |reason: Malformed| Error::MalformedGrammar {
            index,
            production: production.clone(),
            reason,
        };

        let from = states[&production.lhs()];
        let body = production.body();
        let (terminals, to) = match body.split_last() {
            None => return Err(malformed(Malformed::EmptyBody)),
            Some((last, init)) if grammar.is_nonterminal(*last) => (init, states[last]),
            Some(_) => (body, accept),
        };
        if let Some(nt) = terminals.iter().find(|c| grammar.is_nonterminal(**c)) {
            return Err(malformed(Malformed::MisplacedNonterminal(*nt)));
        }

        if terminals.is_empty() {
            match options.unit_productions {
                UnitProductions::Epsilon => nfa.add_transition(from, Label::Epsilon, to),
                UnitProductions::Reject => {
                    return Err(malformed(Malformed::UnitProduction(body[0])))
                }
            }
        } else {
            add_path(&mut nfa, from, terminals, to);
        }
    }
    Ok(nfa)
}

/// Adds a path from `from` to `to` that reads the given non-empty sequence of terminals.
/// All states on the path except for the endpoints are fresh.
fn add_path(nfa: &mut Nfa, from: StateId, terminals: &[char], to: StateId) {
    let (last, init) = terminals
        .split_last()
        .expect("path must read at least one terminal");
    let mut current = from;
    for t in init {
        let next = nfa.add_state(StateKind::Intermediate);
        nfa.add_transition(current, Label::Symbol(*t), next);
        current = next;
    }
    nfa.add_transition(current, Label::Symbol(*last), to);
}
