//! Heuristic identifier styling from local syntactic context.
//!
//! The annotator runs when no semantic tokens are available yet and guesses
//! identifier roles from what immediately surrounds a node: its parent kind,
//! its previous sibling, and its own text. Every node is classified
//! independently with no cross-node state; evaluation order across nodes
//! does not matter and results are idempotent.

use lean_syntax::{InputSpan, NodeId, NonTerminalKind, SyntaxNode, SyntaxTree, TokenKind};

use crate::config::HighlightSettings;
use crate::highlight::HighlightClass;
use crate::symbols::is_all_symbols;
use crate::tactics::TacticIndex;

/// A silent, information-severity styling over a node's exact text range.
///
/// Silent means rendering-only: an annotation must never surface as a
/// diagnostic or warning to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation {
    pub span: InputSpan,
    pub class: HighlightClass,
}

impl Annotation {
    pub fn new(span: InputSpan, class: HighlightClass) -> Self {
        Self { span, class }
    }
}

/// Rule-based identifier classifier.
///
/// The tactic index is supplied at construction and read-only thereafter;
/// settings are passed on every call so a session can flip flags between
/// calls without rebuilding the annotator.
pub struct HeuristicAnnotator<'t> {
    tactics: &'t TacticIndex,
}

impl<'t> HeuristicAnnotator<'t> {
    pub fn new(tactics: &'t TacticIndex) -> Self {
        Self { tactics }
    }

    /// Classifies a single node; the first matching branch wins.
    ///
    /// Branch gating is asymmetric: the two parent-context branches
    /// (definition, attributes) produce nothing when their flag is off,
    /// while the field and type rules fall through to the later identifier
    /// rules when theirs is off. The all-symbols rule is not flag-gated.
    pub fn annotate(
        &self,
        tree: &SyntaxTree,
        input: &str,
        node: NodeId,
        settings: &HighlightSettings,
    ) -> Option<Annotation> {
        let SyntaxNode::Terminal { kind, span } = tree.node_data(node)? else {
            return None;
        };

        match self.parent_kind(tree, node) {
            Some(NonTerminalKind::Definition) => {
                if !settings.enable_heuristic_definition {
                    return None;
                }
                if matches!(kind, TokenKind::Identifier | TokenKind::Dot) {
                    return Some(Annotation::new(span, HighlightClass::FunctionDeclaration));
                }
                None
            }
            Some(NonTerminalKind::Attributes) => {
                if !settings.enable_heuristic_attributes {
                    return None;
                }
                match kind {
                    TokenKind::Identifier => {
                        Some(Annotation::new(span, HighlightClass::Metadata))
                    }
                    TokenKind::Attribute => Some(Annotation::new(span, HighlightClass::Keyword)),
                    _ => None,
                }
            }
            _ => {
                if kind != TokenKind::Identifier {
                    return None;
                }
                let text = span.as_str(input);
                if self.is_field(tree, input, node) && settings.enable_heuristic_field {
                    Some(Annotation::new(span, HighlightClass::InstanceField))
                } else if starts_with_uppercase(text) && settings.enable_heuristic_type {
                    Some(Annotation::new(span, HighlightClass::ClassName))
                } else if is_all_symbols(text) {
                    Some(Annotation::new(span, HighlightClass::Operator))
                } else if settings.enable_heuristic_tactic && self.tactics.contains(text) {
                    Some(Annotation::new(span, HighlightClass::FunctionCall))
                } else {
                    None
                }
            }
        }
    }

    /// Annotates every node of the tree, in document order.
    pub fn annotate_file(
        &self,
        tree: &SyntaxTree,
        input: &str,
        settings: &HighlightSettings,
    ) -> Vec<Annotation> {
        let mut annotations: Vec<Annotation> = tree
            .node_ids()
            .into_iter()
            .filter_map(|node| self.annotate(tree, input, node, settings))
            .collect();
        annotations.sort_by_key(|a| a.span.start);
        annotations
    }

    fn parent_kind(&self, tree: &SyntaxTree, node: NodeId) -> Option<NonTerminalKind> {
        match tree.node_data(tree.parent(node)?)? {
            SyntaxNode::NonTerminal { kind } => Some(kind),
            SyntaxNode::Terminal { .. } => None,
        }
    }

    /// Loose field check: the identifier starts a new line, i.e. its
    /// previous sibling is whitespace containing a newline.
    fn is_field(&self, tree: &SyntaxTree, input: &str, node: NodeId) -> bool {
        let Some(prev) = tree.prev_sibling(node) else {
            return false;
        };
        match tree.node_data(prev) {
            Some(SyntaxNode::Terminal {
                kind: TokenKind::Whitespace,
                span,
            }) => span.as_str(input).contains('\n'),
            _ => false,
        }
    }
}

/// Whether the text starts with an uppercase Latin (`A`-`Z`) or uppercase
/// Greek (U+0391-U+03A9) letter.
fn starts_with_uppercase(text: &str) -> bool {
    match text.chars().next() {
        Some(c) => c.is_ascii_uppercase() || ('\u{0391}'..='\u{03A9}').contains(&c),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_latin_and_greek() {
        assert!(starts_with_uppercase("Foo"));
        assert!(starts_with_uppercase("Zeta"));
        assert!(starts_with_uppercase("Γ"));
        assert!(starts_with_uppercase("Ωmega"));
        assert!(!starts_with_uppercase("foo"));
        assert!(!starts_with_uppercase("γ"));
        assert!(!starts_with_uppercase(""));
    }
}
