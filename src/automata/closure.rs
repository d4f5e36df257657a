use std::collections::BTreeSet;

use super::{Label, Nfa, StateId};

/// Computes the set of states reachable from `state` using only epsilon transitions, including `state` itself.
/// Cycles of epsilon transitions are allowed.
pub fn epsilon_closure(nfa: &Nfa, state: StateId) -> BTreeSet<StateId> {
    let mut closure = BTreeSet::new();
    let mut stack = vec![state];

    while let Some(s) = stack.pop() {
        if closure.insert(s) {
            if let Some(dests) = nfa.targets(s, Label::Epsilon) {
                stack.extend(dests.iter().filter(|d| !closure.contains(*d)));
            }
        }
    }
    closure
}

/// Computes the union of the epsilon closures of the given states.
pub fn epsilon_closure_of_set<'a, I>(nfa: &Nfa, states: I) -> BTreeSet<StateId>
where
    I: IntoIterator<Item = &'a StateId>,
{
    let mut closure = BTreeSet::new();
    for s in states {
        if !closure.contains(s) {
            closure.extend(epsilon_closure(nfa, *s));
        }
    }
    closure
}
