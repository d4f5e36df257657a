/// The errors that can occur when constructing a [Grammar](super::Grammar).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("Start symbol '{0}' is not a nonterminal")]
    StartNotNonterminal(char),

    #[error("Symbol '{0}' is declared both as a terminal and as a nonterminal")]
    AmbiguousSymbol(char),

    #[error("Left-hand side '{1}' of production #{0} is not a nonterminal")]
    LhsNotNonterminal(usize, char),

    #[error("Symbol '{1}' in production #{0} is neither a terminal nor a nonterminal")]
    UndeclaredSymbol(usize, char),
}
