//! Token and syntax tree model for Lean editor tooling.
//!
//! This crate defines the lexical vocabulary ([`TokenKind`]), source spans
//! ([`InputSpan`]) and a lightweight arena syntax tree ([`SyntaxTree`]) that
//! the editor-support classifiers navigate. Lexing and parsing themselves are
//! external collaborators; this crate only models their output.

pub mod span;
pub mod token;
pub mod tree;

pub use span::InputSpan;
pub use token::TokenKind;
pub use tree::{NodeId, NonTerminalKind, SyntaxNode, SyntaxTree};
