use std::collections::{BTreeMap, BTreeSet, VecDeque};

use super::StateId;

/// A state of a [Dfa], standing for a set of NFA states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfaState {
    name: String,
    subset: BTreeSet<StateId>,
    accepting: bool,
    next: BTreeMap<char, usize>,
}

impl DfaState {
    pub(crate) fn new(
        name: String,
        subset: BTreeSet<StateId>,
        accepting: bool,
        next: BTreeMap<char, usize>,
    ) -> Self {
        Self {
            name,
            subset,
            accepting,
            next,
        }
    }

    /// The canonical name of the state, derived from the NFA states it stands for, e.g., `[A,S]`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The NFA states this state stands for.
    pub fn subset(&self) -> &BTreeSet<StateId> {
        &self.subset
    }

    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// The outgoing transitions, one per input symbol.
    pub fn transitions(&self) -> &BTreeMap<char, usize> {
        &self.next
    }
}

/// A deterministic finite automaton as produced by subset construction.
///
/// States are stored in an arena and referred to by their index, the initial state has index 0.
/// The transition function is total: every state has exactly one transition for every symbol of the alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    states: Vec<DfaState>,
    alphabet: BTreeSet<char>,
}

impl Dfa {
    pub(crate) fn new(states: Vec<DfaState>, alphabet: BTreeSet<char>) -> Self {
        debug_assert!(!states.is_empty());
        Self { states, alphabet }
    }

    pub fn states(&self) -> &[DfaState] {
        &self.states
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    pub fn state(&self, state: usize) -> &DfaState {
        &self.states[state]
    }

    pub fn initial(&self) -> usize {
        0
    }

    pub fn initial_state(&self) -> &DfaState {
        &self.states[self.initial()]
    }

    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    pub fn is_final(&self, state: usize) -> bool {
        self.states[state].accepting
    }

    /// Iterates over the indices of all accepting states.
    pub fn finals(&self) -> impl Iterator<Item = usize> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, s)| s.accepting)
            .map(|(i, _)| i)
    }

    /// Returns the state reached from `state` by reading `symbol`.
    /// Returns `None` iff the symbol is not in the alphabet.
    pub fn next(&self, state: usize, symbol: char) -> Option<usize> {
        self.states[state].next.get(&symbol).copied()
    }

    pub fn state_by_name(&self, name: &str) -> Option<usize> {
        self.states.iter().position(|s| s.name == name)
    }

    /// Checks whether the automaton accepts the input.
    /// Inputs containing a symbol outside of the alphabet are rejected.
    pub fn accepts(&self, input: &str) -> bool {
        if !input.chars().all(|c| self.alphabet.contains(&c)) {
            return false;
        }
        input
            .chars()
            .try_fold(self.initial(), |state, c| self.next(state, c))
            .map_or(false, |state| self.is_final(state))
    }

    /// Returns the set of states reachable from the initial state.
    pub fn reachable_states(&self) -> BTreeSet<usize> {
        let mut reached = BTreeSet::from([self.initial()]);
        let mut queue = VecDeque::from([self.initial()]);
        while let Some(state) = queue.pop_front() {
            for next in self.states[state].next.values() {
                if reached.insert(*next) {
                    queue.push_back(*next);
                }
            }
        }
        reached
    }

    /// Returns all accepted words of length at most `max_len`.
    pub fn words_up_to(&self, max_len: usize) -> BTreeSet<String> {
        let mut words = BTreeSet::new();
        let mut frontier = vec![(self.initial(), String::new())];
        for len in 0..=max_len {
            for (state, word) in &frontier {
                if self.is_final(*state) {
                    words.insert(word.clone());
                }
            }
            if len == max_len {
                break;
            }
            frontier = frontier
                .into_iter()
                .flat_map(|(state, word)| {
                    self.states[state].next.iter().map(move |(c, next)| {
                        let mut w = word.clone();
                        w.push(*c);
                        (*next, w)
                    })
                })
                .collect();
        }
        words
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    /// Accepts words over {a, b} that end with `ab`.
    fn ends_with_ab() -> Dfa {
        let state = |name: &str, accepting: bool, a: usize, b: usize| {
            DfaState::new(
                name.to_string(),
                BTreeSet::new(),
                accepting,
                BTreeMap::from([('a', a), ('b', b)]),
            )
        };
        Dfa::new(
            vec![
                state("q0", false, 1, 0),
                state("q1", false, 1, 2),
                state("q2", true, 1, 0),
            ],
            BTreeSet::from(['a', 'b']),
        )
    }

    #[test]
    fn test_accepts() {
        let dfa = ends_with_ab();
        assert!(dfa.accepts("ab"));
        assert!(dfa.accepts("bbab"));
        assert!(dfa.accepts("abab"));
        assert!(!dfa.accepts("aba"));
        assert!(!dfa.accepts("b"));
    }

    #[test]
    fn test_empty_word() {
        let dfa = ends_with_ab();
        assert!(!dfa.accepts(""));

        let dfa = Dfa::new(
            vec![DfaState::new(
                "[S]".to_string(),
                BTreeSet::new(),
                true,
                BTreeMap::new(),
            )],
            BTreeSet::new(),
        );
        assert!(dfa.accepts(""));
        assert!(!dfa.accepts("a"));
    }

    #[test]
    fn test_out_of_alphabet() {
        let dfa = ends_with_ab();
        assert!(!dfa.accepts("abc"));
        assert!(!dfa.accepts("c"));
        assert!(!dfa.accepts("a b"));
    }

    #[test]
    fn test_finals() {
        let dfa = ends_with_ab();
        assert_eq!(dfa.finals().collect::<Vec<_>>(), vec![2]);
        assert_eq!(dfa.state_by_name("q1"), Some(1));
        assert_eq!(dfa.state_by_name("q3"), None);
    }

    #[test]
    fn test_reachable_states() {
        let mut dfa = ends_with_ab();
        assert_eq!(dfa.reachable_states(), BTreeSet::from([0, 1, 2]));
        dfa.states.push(DfaState::new(
            "dead".to_string(),
            BTreeSet::new(),
            false,
            BTreeMap::from([('a', 3), ('b', 3)]),
        ));
        assert_eq!(dfa.reachable_states(), BTreeSet::from([0, 1, 2]));
    }

    #[test]
    fn test_words_up_to() {
        let dfa = ends_with_ab();
        let words: Vec<String> = dfa.words_up_to(3).into_iter().collect();
        assert_eq!(words, vec!["aab", "ab", "bab"]);
        assert!(dfa.words_up_to(1).is_empty());
    }

    #[quickcheck]
    fn accepts_is_pure(input: String) -> bool {
        let dfa = ends_with_ab();
        dfa.accepts(&input) == dfa.accepts(&input)
    }

    #[quickcheck]
    fn accepts_matches_suffix(input: Vec<bool>) -> bool {
        let word: String = input.iter().map(|b| if *b { 'a' } else { 'b' }).collect();
        ends_with_ab().accepts(&word) == word.ends_with("ab")
    }
}
