//! Subset construction: NFA → DFA conversion.
//!
//! Every DFA state stands for the set of NFA states the NFA can be in after reading some input.
//! Subsets are discovered breadth-first starting from the epsilon closure of the initial NFA state.
//! Each distinct subset is assigned an index in an arena the first time it is seen, so equal subsets reached along different paths become the same DFA state.
//! The empty subset is a regular (rejecting) DFA state, which makes the transition function total.

use std::{
    collections::{BTreeMap, BTreeSet, VecDeque},
    time::Instant,
};

use indexmap::IndexSet;
use itertools::Itertools;

use crate::{error::Error, options::Options};

use super::{
    closure::{epsilon_closure, epsilon_closure_of_set},
    Dfa, DfaState, Label, Nfa, StateId,
};

/// Converts the NFA into an equivalent DFA.
pub fn determinize(nfa: &Nfa) -> Dfa {
    match subset_construction(nfa, None) {
        Ok(dfa) => dfa,
        Err(_) => unreachable!("subset construction without a state limit cannot fail"),
    }
}

/// Converts the NFA into an equivalent DFA.
/// Fails with [Error::StateLimitExceeded] if the DFA would have more than [Options::max_dfa_states] states.
pub fn determinize_with(nfa: &Nfa, options: &Options) -> Result<Dfa, Error> {
    subset_construction(nfa, options.max_dfa_states)
}

/// Returns the set of states the NFA can be in after reading `symbol` from any of the states in `subset`.
/// This is the union of the epsilon closures of all direct `symbol`-successors.
pub fn step(nfa: &Nfa, subset: &BTreeSet<StateId>, symbol: char) -> BTreeSet<StateId> {
    let successors = subset
        .iter()
        .filter_map(|s| nfa.targets(*s, Label::Symbol(symbol)))
        .flatten();
    epsilon_closure_of_set(nfa, successors)
}

/// The canonical name of a subset: the sorted names of its members, comma-separated and enclosed in brackets.
fn canonical_name(nfa: &Nfa, subset: &BTreeSet<StateId>) -> String {
    format!(
        "[{}]",
        subset.iter().map(|s| nfa.name(*s)).sorted().join(",")
    )
}

/// Returns the arena index of the subset, adding it to the arena and the work queue if it is new.
fn discover(
    subsets: &mut IndexSet<BTreeSet<StateId>>,
    queue: &mut VecDeque<usize>,
    subset: BTreeSet<StateId>,
    limit: Option<usize>,
) -> Result<usize, Error> {
    if let Some(index) = subsets.get_index_of(&subset) {
        return Ok(index);
    }
    if let Some(limit) = limit {
        if subsets.len() >= limit {
            return Err(Error::StateLimitExceeded(limit));
        }
    }
    let (index, _) = subsets.insert_full(subset);
    queue.push_back(index);
    Ok(index)
}

fn subset_construction(nfa: &Nfa, limit: Option<usize>) -> Result<Dfa, Error> {
    let t = Instant::now();

    // Arena of discovered subsets, the position of a subset is its DFA state
    let mut subsets: IndexSet<BTreeSet<StateId>> = IndexSet::new();
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut states: Vec<DfaState> = Vec::new();

    discover(
        &mut subsets,
        &mut queue,
        epsilon_closure(nfa, nfa.initial()),
        limit,
    )?;

    while let Some(index) = queue.pop_front() {
        let subset = subsets[index].clone();
        let name = canonical_name(nfa, &subset);
        log::trace!("Processing DFA state {} = {}", index, name);

        let mut next = BTreeMap::new();
        for symbol in nfa.alphabet() {
            let target = step(nfa, &subset, *symbol);
            next.insert(*symbol, discover(&mut subsets, &mut queue, target, limit)?);
        }

        let accepting = !subset.is_disjoint(nfa.finals());
        states.push(DfaState::new(name, subset, accepting, next));
    }

    log::debug!(
        "Determinized NFA with {} states into DFA with {} states ({:?})",
        nfa.num_states(),
        states.len(),
        t.elapsed()
    );
    Ok(Dfa::new(states, nfa.alphabet().clone()))
}
