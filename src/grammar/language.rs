use std::collections::{BTreeSet, HashSet, VecDeque};

use super::Grammar;

impl Grammar {
    /// Returns all words of length at most `max_len` that the grammar generates.
    ///
    /// Words are generated by a breadth-first search over leftmost derivations.
    /// Productions with an empty body are ignored.
    /// Since all other bodies are non-empty, a sentential form never shrinks, and forms longer than `max_len` are pruned.
    pub fn words_up_to(&self, max_len: usize) -> BTreeSet<String> {
        let mut words = BTreeSet::new();

        let start = vec![self.start];
        let mut seen = HashSet::new();
        seen.insert(start.clone());
        let mut queue = VecDeque::from([start]);

        while let Some(form) = queue.pop_front() {
            match form.iter().position(|c| self.is_nonterminal(*c)) {
                None => {
                    words.insert(form.iter().collect());
                }
                Some(i) => {
                    let nt = form[i];
                    for p in self
                        .productions
                        .iter()
                        .filter(|p| p.lhs() == nt && !p.body().is_empty())
                    {
                        let next: Vec<char> = form[..i]
                            .iter()
                            .chain(p.body())
                            .chain(&form[i + 1..])
                            .copied()
                            .collect();
                        if next.len() <= max_len && seen.insert(next.clone()) {
                            queue.push_back(next);
                        }
                    }
                }
            }
        }
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_right_linear() {
        let g = Grammar::new(
            ['S', 'A'],
            ['a', 'b'],
            'S',
            [('S', "aA"), ('A', "b"), ('A', "aA")],
        )
        .unwrap();
        let words = g.words_up_to(4);
        let expected: BTreeSet<String> = ["ab", "aab", "aaab"].iter().map(|s| s.to_string()).collect();
        assert_eq!(words, expected);
    }

    #[test]
    fn test_words_unit_cycle_terminates() {
        let g = Grammar::new(['S', 'A'], ['a'], 'S', [('S', "A"), ('A', "S"), ('A', "a")]).unwrap();
        let words = g.words_up_to(3);
        assert_eq!(words.len(), 1);
        assert!(words.contains("a"));
    }

    #[test]
    fn test_words_context_free() {
        let g = Grammar::new(['S'], ['a', 'b'], 'S', [('S', "aSb"), ('S', "ab")]).unwrap();
        let words = g.words_up_to(6);
        let expected: BTreeSet<String> = ["ab", "aabb", "aaabbb"].iter().map(|s| s.to_string()).collect();
        assert_eq!(words, expected);
    }

    #[test]
    fn test_words_zero_length() {
        let g = Grammar::new(['S'], ['a'], 'S', [('S', "a"), ('S', "")]).unwrap();
        assert!(g.words_up_to(0).is_empty());
    }
}
