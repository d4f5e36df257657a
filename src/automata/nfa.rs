use std::collections::{BTreeMap, BTreeSet};

use super::{Label, StateId, StateKind};

/// A nondeterministic finite automaton with epsilon transitions.
///
/// States are identified by [StateId]s allocated in increasing order.
/// The transition relation maps a state and a label to a non-empty set of destination states, a missing entry means that there is no transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    kinds: Vec<StateKind>,
    transitions: Vec<BTreeMap<Label, BTreeSet<StateId>>>,
    alphabet: BTreeSet<char>,
    initial: StateId,
    finals: BTreeSet<StateId>,
}

impl Nfa {
    /// Creates an automaton over the given alphabet with a single state, which is the initial state.
    pub(crate) fn new(alphabet: BTreeSet<char>, initial: StateKind) -> Self {
        Self {
            kinds: vec![initial],
            transitions: vec![BTreeMap::new()],
            alphabet,
            initial: StateId(0),
            finals: BTreeSet::new(),
        }
    }

    pub(crate) fn add_state(&mut self, kind: StateKind) -> StateId {
        let id = StateId(self.kinds.len() as u32);
        self.kinds.push(kind);
        self.transitions.push(BTreeMap::new());
        id
    }

    pub(crate) fn add_transition(&mut self, from: StateId, label: Label, to: StateId) {
        debug_assert!(to.index() < self.kinds.len());
        self.transitions[from.index()]
            .entry(label)
            .or_default()
            .insert(to);
    }

    pub(crate) fn set_initial(&mut self, state: StateId) {
        self.initial = state;
    }

    pub(crate) fn add_final(&mut self, state: StateId) {
        self.finals.insert(state);
    }

    /// Iterates over all states in the order they were created.
    pub fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        (0..self.kinds.len()).map(|i| StateId(i as u32))
    }

    pub fn num_states(&self) -> usize {
        self.kinds.len()
    }

    /// The number of (source, label, destination) triples in the transition relation.
    pub fn num_transitions(&self) -> usize {
        self.transitions
            .iter()
            .flat_map(|ts| ts.values())
            .map(|dests| dests.len())
            .sum()
    }

    pub fn kind(&self, state: StateId) -> StateKind {
        self.kinds[state.index()]
    }

    /// Returns the display name of the state.
    /// States of nonterminals are named after the nonterminal, synthetic states carry a prefix and their identifier.
    /// Since nonterminals are single characters, names are unique within the automaton.
    pub fn name(&self, state: StateId) -> String {
        match self.kind(state) {
            StateKind::Nonterminal(c) => c.to_string(),
            StateKind::Accept => format!("F{}", state),
            StateKind::Intermediate => format!("W{}", state),
            StateKind::Entry => format!("I{}", state),
        }
    }

    /// Looks up a state by its display name.
    pub fn state_by_name(&self, name: &str) -> Option<StateId> {
        self.states().find(|s| self.name(*s) == name)
    }

    /// The input symbols, excluding epsilon.
    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    pub fn initial(&self) -> StateId {
        self.initial
    }

    pub fn finals(&self) -> &BTreeSet<StateId> {
        &self.finals
    }

    pub fn is_final(&self, state: StateId) -> bool {
        self.finals.contains(&state)
    }

    /// Returns the states reachable from `state` by a single transition with the given label, if any.
    pub fn targets(&self, state: StateId, label: Label) -> Option<&BTreeSet<StateId>> {
        self.transitions[state.index()].get(&label)
    }

    /// Iterates over the outgoing transitions of `state`, grouped by label.
    pub fn transitions_from(
        &self,
        state: StateId,
    ) -> impl Iterator<Item = (Label, &BTreeSet<StateId>)> + '_ {
        self.transitions[state.index()]
            .iter()
            .map(|(label, dests)| (*label, dests))
    }

    /// Returns an automaton that accepts the reverse of the language of this automaton.
    ///
    /// Every transition is flipped, the former initial state becomes the only final state, and a fresh initial state is added that has an epsilon transition to every former final state.
    pub fn reverse(&self) -> Nfa {
        let mut reversed = Nfa {
            kinds: self.kinds.clone(),
            transitions: vec![BTreeMap::new(); self.kinds.len()],
            alphabet: self.alphabet.clone(),
            initial: self.initial,
            finals: BTreeSet::new(),
        };
        for from in self.states() {
            for (label, dests) in self.transitions_from(from) {
                for to in dests {
                    reversed.add_transition(*to, label, from);
                }
            }
        }

        let entry = reversed.add_state(StateKind::Entry);
        for f in &self.finals {
            reversed.add_transition(entry, Label::Epsilon, *f);
        }
        reversed.set_initial(entry);
        reversed.add_final(self.initial);
        reversed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// S --a--> A --b--> F, A --a--> A
    fn sample() -> (Nfa, StateId, StateId, StateId) {
        let mut nfa = Nfa::new(BTreeSet::from(['a', 'b']), StateKind::Nonterminal('S'));
        let s = nfa.initial();
        let a = nfa.add_state(StateKind::Nonterminal('A'));
        let f = nfa.add_state(StateKind::Accept);
        nfa.add_final(f);
        nfa.add_transition(s, Label::Symbol('a'), a);
        nfa.add_transition(a, Label::Symbol('a'), a);
        nfa.add_transition(a, Label::Symbol('b'), f);
        (nfa, s, a, f)
    }

    #[test]
    fn test_names() {
        let (nfa, s, a, f) = sample();
        assert_eq!(nfa.name(s), "S");
        assert_eq!(nfa.name(a), "A");
        assert_eq!(nfa.name(f), "F2");
        assert_eq!(nfa.state_by_name("F2"), Some(f));
        assert_eq!(nfa.state_by_name("B"), None);
    }

    #[test]
    fn test_num_transitions() {
        let (nfa, _, _, _) = sample();
        assert_eq!(nfa.num_states(), 3);
        assert_eq!(nfa.num_transitions(), 3);
    }

    #[test]
    fn test_duplicate_transition_is_ignored() {
        let (mut nfa, s, a, _) = sample();
        nfa.add_transition(s, Label::Symbol('a'), a);
        assert_eq!(nfa.num_transitions(), 3);
    }

    #[test]
    fn test_reverse() {
        let (nfa, s, a, f) = sample();
        let rev = nfa.reverse();

        assert_eq!(rev.num_states(), 4);
        let entry = rev.initial();
        assert_eq!(rev.kind(entry), StateKind::Entry);
        assert!(!nfa.states().any(|st| st == entry));

        assert_eq!(rev.finals(), &BTreeSet::from([s]));
        assert_eq!(
            rev.targets(entry, Label::Epsilon),
            Some(&BTreeSet::from([f]))
        );
        assert_eq!(
            rev.targets(f, Label::Symbol('b')),
            Some(&BTreeSet::from([a]))
        );
        assert_eq!(
            rev.targets(a, Label::Symbol('a')),
            Some(&BTreeSet::from([s, a]))
        );
        assert_eq!(rev.targets(s, Label::Symbol('a')), None);
        assert_eq!(rev.num_transitions(), nfa.num_transitions() + 1);
        assert_eq!(rev.alphabet(), nfa.alphabet());
    }

    #[test]
    fn test_reverse_twice_adds_distinct_entries() {
        let (nfa, _, _, _) = sample();
        let twice = nfa.reverse().reverse();
        assert_eq!(twice.num_states(), 5);
        assert_ne!(twice.name(StateId(3)), twice.name(StateId(4)));
    }
}
