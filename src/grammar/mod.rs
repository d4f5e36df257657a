//! Grammars whose productions have a single nonterminal on the left-hand side.
//!
//! A [Grammar] is validated once on construction and immutable afterwards.
//! Symbols are characters; a body is the sequence of symbols on the right-hand side of a production.

use std::{collections::BTreeSet, fmt::Display};

use quickcheck::Arbitrary;
use smallvec::SmallVec;

mod classify;
mod error;
mod language;

pub use classify::{
    classify, is_context_free, is_left_linear, is_regular, is_right_linear, Classification,
};
pub use error::GrammarError;

/// The right-hand side of a production.
pub type Body = SmallVec<[char; 4]>;

/// A production `lhs -> body`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Production {
    lhs: char,
    body: Body,
}

impl Production {
    pub fn new(lhs: char, body: impl IntoIterator<Item = char>) -> Self {
        Self {
            lhs,
            body: body.into_iter().collect(),
        }
    }

    pub fn lhs(&self) -> char {
        self.lhs
    }

    pub fn body(&self) -> &[char] {
        &self.body
    }

    /// Returns the production with its body reversed.
    pub fn mirrored(&self) -> Self {
        Self {
            lhs: self.lhs,
            body: self.body.iter().rev().copied().collect(),
        }
    }
}

impl From<(char, &str)> for Production {
    fn from((lhs, body): (char, &str)) -> Self {
        Production::new(lhs, body.chars())
    }
}

impl Display for Production {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ", self.lhs)?;
        if self.body.is_empty() {
            write!(f, "ε")
        } else {
            self.body.iter().try_for_each(|c| write!(f, "{}", c))
        }
    }
}

/// A grammar given by its productions, its nonterminal and terminal symbols, and a start symbol.
///
/// Every left-hand side is a nonterminal, every symbol in a body is either a terminal or a nonterminal (but not both), and the start symbol is a nonterminal.
/// The order of the productions is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    productions: Vec<Production>,
    nonterminals: BTreeSet<char>,
    terminals: BTreeSet<char>,
    start: char,
}

impl Grammar {
    /// Creates a new grammar and checks that it is well-formed.
    /// Bodies may be empty, it is up to the consumers of the grammar to decide whether they accept empty bodies.
    pub fn new<N, T, P, R>(
        nonterminals: N,
        terminals: T,
        start: char,
        productions: P,
    ) -> Result<Self, GrammarError>
    where
        N: IntoIterator<Item = char>,
        T: IntoIterator<Item = char>,
        P: IntoIterator<Item = R>,
        R: Into<Production>,
    {
        let grammar = Self {
            productions: productions.into_iter().map(Into::into).collect(),
            nonterminals: nonterminals.into_iter().collect(),
            terminals: terminals.into_iter().collect(),
            start,
        };
        grammar.validate()?;
        Ok(grammar)
    }

    fn validate(&self) -> Result<(), GrammarError> {
        if let Some(c) = self.terminals.intersection(&self.nonterminals).next() {
            return Err(GrammarError::AmbiguousSymbol(*c));
        }
        if !self.is_nonterminal(self.start) {
            return Err(GrammarError::StartNotNonterminal(self.start));
        }
        for (i, production) in self.productions.iter().enumerate() {
            if !self.is_nonterminal(production.lhs) {
                return Err(GrammarError::LhsNotNonterminal(i, production.lhs));
            }
            if let Some(c) = production
                .body
                .iter()
                .find(|c| !self.is_terminal(**c) && !self.is_nonterminal(**c))
            {
                return Err(GrammarError::UndeclaredSymbol(i, *c));
            }
        }
        Ok(())
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    pub fn nonterminals(&self) -> &BTreeSet<char> {
        &self.nonterminals
    }

    pub fn terminals(&self) -> &BTreeSet<char> {
        &self.terminals
    }

    pub fn start(&self) -> char {
        self.start
    }

    pub fn is_terminal(&self, c: char) -> bool {
        self.terminals.contains(&c)
    }

    pub fn is_nonterminal(&self, c: char) -> bool {
        self.nonterminals.contains(&c)
    }

    /// Returns true iff every symbol in the given sequence is a terminal.
    /// This is vacuously true for the empty sequence.
    pub fn all_terminals(&self, symbols: &[char]) -> bool {
        symbols.iter().all(|c| self.is_terminal(*c))
    }

    /// Returns the grammar obtained by reversing the body of every production.
    /// Mirroring a left-linear grammar yields a right-linear grammar and vice versa.
    pub fn mirrored(&self) -> Self {
        Self {
            productions: self.productions.iter().map(Production::mirrored).collect(),
            nonterminals: self.nonterminals.clone(),
            terminals: self.terminals.clone(),
            start: self.start,
        }
    }
}

impl Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "start: {}", self.start)?;
        for p in &self.productions {
            writeln!(f, "{}", p)?;
        }
        Ok(())
    }
}

/// Generates small right-linear grammars over the nonterminals `S, A, B, C` and the terminals `a, b, c`.
/// Bodies consist of up to three terminals, optionally followed by a nonterminal, and are never empty.
impl Arbitrary for Grammar {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        const NONTERMINALS: [char; 4] = ['S', 'A', 'B', 'C'];
        const TERMINALS: [char; 3] = ['a', 'b', 'c'];

        let num_productions = 1 + usize::arbitrary(g) % 6;
        let mut productions = Vec::with_capacity(num_productions);
        for _ in 0..num_productions {
            let lhs = *g.choose(&NONTERMINALS).unwrap();
            let num_terminals = usize::arbitrary(g) % 4;
            let mut body = Body::new();
            for _ in 0..num_terminals {
                body.push(*g.choose(&TERMINALS).unwrap());
            }
            if body.is_empty() || bool::arbitrary(g) {
                body.push(*g.choose(&NONTERMINALS).unwrap());
            }
            productions.push(Production { lhs, body });
        }

        Grammar::new(NONTERMINALS, TERMINALS, 'S', productions)
            .expect("generated grammar is well-formed")
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn test_new_valid() {
        let g = Grammar::new(['S', 'A'], ['a', 'b'], 'S', [('S', "aA"), ('A', "b")]).unwrap();
        assert_eq!(g.productions().len(), 2);
        assert_eq!(g.start(), 'S');
        assert!(g.is_terminal('a'));
        assert!(g.is_nonterminal('A'));
        assert!(!g.is_terminal('A'));
    }

    #[test]
    fn test_new_start_not_nonterminal() {
        let g = Grammar::new(['S'], ['a'], 'X', [('S', "a")]);
        assert_eq!(g, Err(GrammarError::StartNotNonterminal('X')));
    }

    #[test]
    fn test_new_ambiguous_symbol() {
        let g = Grammar::new(['S', 'a'], ['a'], 'S', [('S', "a")]);
        assert_eq!(g, Err(GrammarError::AmbiguousSymbol('a')));
    }

    #[test]
    fn test_new_lhs_not_nonterminal() {
        let g = Grammar::new(['S'], ['a'], 'S', [('S', "a"), ('a', "a")]);
        assert_eq!(g, Err(GrammarError::LhsNotNonterminal(1, 'a')));
    }

    #[test]
    fn test_new_undeclared_symbol() {
        let g = Grammar::new(['S'], ['a'], 'S', [('S', "aX")]);
        assert_eq!(g, Err(GrammarError::UndeclaredSymbol(0, 'X')));
    }

    #[test]
    fn test_new_allows_empty_body() {
        let g = Grammar::new(['S'], ['a'], 'S', [('S', "")]).unwrap();
        assert!(g.productions()[0].body().is_empty());
    }

    #[test]
    fn test_mirrored() {
        let g = Grammar::new(['S', 'A'], ['a', 'b'], 'S', [('S', "abA"), ('A', "b")]).unwrap();
        let m = g.mirrored();
        assert_eq!(m.productions()[0].body(), &['A', 'b', 'a']);
        assert_eq!(m.productions()[1].body(), &['b']);
        assert_eq!(m.start(), 'S');
    }

    #[test]
    fn test_display_production() {
        assert_eq!(Production::from(('S', "aA")).to_string(), "S -> aA");
        assert_eq!(Production::new('S', std::iter::empty()).to_string(), "S -> ε");
    }

    #[quickcheck]
    fn mirrored_twice_is_identity(g: Grammar) -> bool {
        g.mirrored().mirrored() == g
    }

    #[quickcheck]
    fn arbitrary_bodies_are_non_empty(g: Grammar) -> bool {
        g.productions().iter().all(|p| !p.body().is_empty())
    }
}
