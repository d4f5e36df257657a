use std::fmt::Display;

use super::Grammar;

/// The class of a grammar, as far as the conversion into finite automata is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Both right-linear and left-linear.
    /// This happens only if no body contains a nonterminal next to a terminal.
    Regular,
    /// Right-linear but not left-linear.
    RightLinear,
    /// Left-linear but not right-linear.
    LeftLinear,
    /// Not linear, but every left-hand side is a single nonterminal.
    ContextFree,
    Unrecognized,
}

impl Classification {
    /// Returns true iff the grammar generates a regular language by construction, i.e., it is right-linear or left-linear.
    pub fn is_regular(&self) -> bool {
        matches!(
            self,
            Classification::Regular | Classification::RightLinear | Classification::LeftLinear
        )
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Regular => write!(f, "regular"),
            Classification::RightLinear => write!(f, "right-linear"),
            Classification::LeftLinear => write!(f, "left-linear"),
            Classification::ContextFree => write!(f, "context-free"),
            Classification::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Classifies the grammar.
pub fn classify(grammar: &Grammar) -> Classification {
    let class = match (is_right_linear(grammar), is_left_linear(grammar)) {
        (true, true) => Classification::Regular,
        (true, false) => Classification::RightLinear,
        (false, true) => Classification::LeftLinear,
        (false, false) if is_context_free(grammar) => Classification::ContextFree,
        (false, false) => Classification::Unrecognized,
    };
    log::debug!("Classified grammar as {}", class);
    class
}

fn lhs_are_nonterminals(grammar: &Grammar) -> bool {
    grammar
        .productions()
        .iter()
        .all(|p| grammar.is_nonterminal(p.lhs()))
}

/// Checks whether the grammar is right-linear.
/// A grammar is right-linear if every body consists only of terminals, or of terminals followed by a single nonterminal.
pub fn is_right_linear(grammar: &Grammar) -> bool {
    lhs_are_nonterminals(grammar)
        && grammar.productions().iter().all(|p| {
            let body = p.body();
            grammar.all_terminals(body)
                || match body.split_last() {
                    Some((last, init)) => {
                        grammar.is_nonterminal(*last) && grammar.all_terminals(init)
                    }
                    None => false,
                }
        })
}

/// Checks whether the grammar is left-linear.
/// A grammar is left-linear if every body consists only of terminals, or of a single nonterminal followed by terminals.
pub fn is_left_linear(grammar: &Grammar) -> bool {
    lhs_are_nonterminals(grammar)
        && grammar.productions().iter().all(|p| {
            let body = p.body();
            grammar.all_terminals(body)
                || match body.split_first() {
                    Some((first, tail)) => {
                        grammar.is_nonterminal(*first) && grammar.all_terminals(tail)
                    }
                    None => false,
                }
        })
}

/// Checks whether the grammar is right-linear or left-linear.
pub fn is_regular(grammar: &Grammar) -> bool {
    is_right_linear(grammar) || is_left_linear(grammar)
}

/// Checks whether every left-hand side is a nonterminal.
pub fn is_context_free(grammar: &Grammar) -> bool {
    lhs_are_nonterminals(grammar)
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn grammar(productions: &[(char, &str)]) -> Grammar {
        Grammar::new(['S', 'A'], ['a', 'b'], 'S', productions.iter().copied()).unwrap()
    }

    #[test]
    fn test_right_linear() {
        let g = grammar(&[('S', "aA"), ('A', "b"), ('A', "aA")]);
        assert!(is_right_linear(&g));
        assert!(!is_left_linear(&g));
        assert!(is_regular(&g));
        assert_eq!(classify(&g), Classification::RightLinear);
    }

    #[test]
    fn test_left_linear() {
        let g = grammar(&[('S', "Ab"), ('A', "Aa"), ('A', "a")]);
        assert!(!is_right_linear(&g));
        assert!(is_left_linear(&g));
        assert_eq!(classify(&g), Classification::LeftLinear);
    }

    #[test]
    fn test_long_bodies() {
        let g = grammar(&[('S', "abbA"), ('A', "ab")]);
        assert_eq!(classify(&g), Classification::RightLinear);
        let g = grammar(&[('S', "Aabb"), ('A', "ab")]);
        assert_eq!(classify(&g), Classification::LeftLinear);
    }

    #[test]
    fn test_both_linear() {
        let g = grammar(&[('S', "ab"), ('S', "A"), ('A', "a")]);
        assert!(is_right_linear(&g));
        assert!(is_left_linear(&g));
        assert_eq!(classify(&g), Classification::Regular);
        assert!(classify(&g).is_regular());
    }

    #[test]
    fn test_mixed_is_context_free() {
        // Each production on its own is linear, but not in the same direction
        let g = grammar(&[('S', "aA"), ('A', "Ab"), ('A', "a")]);
        assert!(!is_regular(&g));
        assert_eq!(classify(&g), Classification::ContextFree);
    }

    #[test]
    fn test_context_free() {
        let g = grammar(&[('S', "aSb"), ('S', "ab")]);
        assert!(!is_right_linear(&g));
        assert!(!is_left_linear(&g));
        assert!(is_context_free(&g));
        assert_eq!(classify(&g), Classification::ContextFree);
        assert!(!classify(&g).is_regular());
    }

    #[test]
    fn test_two_nonterminals() {
        let g = grammar(&[('S', "AA"), ('A', "a")]);
        assert_eq!(classify(&g), Classification::ContextFree);
    }

    #[test]
    fn test_empty_body_is_terminal_only() {
        let g = grammar(&[('S', "")]);
        assert_eq!(classify(&g), Classification::Regular);
    }

    #[test]
    fn test_display() {
        assert_eq!(Classification::RightLinear.to_string(), "right-linear");
        assert_eq!(Classification::ContextFree.to_string(), "context-free");
    }

    #[quickcheck]
    fn arbitrary_grammars_are_right_linear(g: Grammar) -> bool {
        is_right_linear(&g)
    }

    #[quickcheck]
    fn mirrored_right_linear_is_left_linear(g: Grammar) -> bool {
        is_left_linear(&g.mirrored())
    }
}
