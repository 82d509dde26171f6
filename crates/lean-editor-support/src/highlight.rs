//! Lexical highlighting: the token-kind to style table.

use lean_syntax::{InputSpan, SyntaxNode, SyntaxTree, TokenKind};

/// Visual styling buckets consumed by the rendering layer.
///
/// A class is an abstract bucket (keyword, operator, ...) independent of
/// actual colors; the editor's color scheme decides how each bucket renders.
/// [`HighlightClass::None`] means "apply no styling".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightClass {
    Keyword,
    KeywordModifier,
    KeywordInProof,
    Comment,
    BlockComment,
    DocComment,
    String,
    Number,
    Identifier,
    Operator,
    Parentheses,
    Brackets,
    Braces,
    Comma,
    Dot,
    Semicolon,
    Sorry,
    Type,
    FunctionDeclaration,
    FunctionCall,
    ClassName,
    ClassReference,
    LocalVariable,
    InstanceField,
    StaticField,
    Metadata,
    Parameter,
    None,
}

/// Maps a token kind to its visual class.
///
/// Total over the closed [`TokenKind`] vocabulary; kinds without a style
/// (whitespace, semicolons) map to [`HighlightClass::None`] rather than an
/// error.
pub fn classify(kind: TokenKind) -> HighlightClass {
    match kind {
        // Keywords
        TokenKind::KeywordCommand1
        | TokenKind::KeywordCommand2
        | TokenKind::KeywordCommand3
        | TokenKind::KeywordCommand4
        | TokenKind::KeywordCommand5
        | TokenKind::KeywordCommandPrefix => HighlightClass::Keyword,

        TokenKind::KeywordModifier => HighlightClass::KeywordModifier,
        TokenKind::KeywordCommand6 => HighlightClass::KeywordInProof,
        TokenKind::KeywordSorry => HighlightClass::Sorry,

        // Types
        TokenKind::DefaultType => HighlightClass::Type,

        // Comments
        TokenKind::LineComment => HighlightClass::Comment,
        TokenKind::BlockComment => HighlightClass::BlockComment,
        TokenKind::DocComment => HighlightClass::DocComment,

        // Literals
        TokenKind::String => HighlightClass::String,
        TokenKind::Number | TokenKind::NegativeNumber => HighlightClass::Number,

        // Identifiers
        TokenKind::Identifier => HighlightClass::Identifier,

        // Operators and symbols
        TokenKind::Assign
        | TokenKind::Equal
        | TokenKind::Colon
        | TokenKind::At
        | TokenKind::Star
        | TokenKind::ForAll
        | TokenKind::MiscComparisonSym
        | TokenKind::MiscPlusSym
        | TokenKind::MiscMultiplySym
        | TokenKind::MiscExponentSym
        | TokenKind::MiscArrowSym => HighlightClass::Operator,

        // Delimiters
        TokenKind::LeftParen | TokenKind::RightParen => HighlightClass::Parentheses,
        TokenKind::LeftBracket
        | TokenKind::RightBracket
        | TokenKind::LeftUniBracket
        | TokenKind::RightUniBracket => HighlightClass::Brackets,
        TokenKind::LeftBrace | TokenKind::RightBrace => HighlightClass::Braces,

        // Punctuation. Semicolons have a declared style bucket but the
        // lexical table leaves them unstyled.
        TokenKind::Comma => HighlightClass::Comma,
        TokenKind::Dot => HighlightClass::Dot,
        TokenKind::Semicolon => HighlightClass::None,

        // Attributes
        TokenKind::AttributeStart | TokenKind::Attribute => HighlightClass::Keyword,

        TokenKind::Placeholder => HighlightClass::Identifier,
        TokenKind::TemplateTrigger => HighlightClass::Keyword,
        TokenKind::Other => HighlightClass::Identifier,

        TokenKind::Whitespace => HighlightClass::None,
    }
}

/// Lexical styles for every terminal in the tree, in document order.
///
/// Terminals classified as [`HighlightClass::None`] are omitted; the
/// rendering layer leaves unlisted ranges unstyled.
pub fn highlight(tree: &SyntaxTree) -> Vec<(InputSpan, HighlightClass)> {
    let mut styles: Vec<(InputSpan, HighlightClass)> = tree
        .node_ids()
        .into_iter()
        .filter_map(|id| match tree.node_data(id) {
            Some(SyntaxNode::Terminal { kind, span }) => {
                let class = classify(kind);
                (class != HighlightClass::None).then_some((span, class))
            }
            _ => None,
        })
        .collect();
    styles.sort_by_key(|(span, _)| span.start);
    styles
}

#[cfg(test)]
mod tests {
    use super::*;
    use lean_syntax::NonTerminalKind;

    #[test]
    fn classify_is_total_and_stable() {
        for &kind in TokenKind::all() {
            assert_eq!(classify(kind), classify(kind));
        }
    }

    #[test]
    fn only_whitespace_and_semicolon_are_unstyled() {
        for &kind in TokenKind::all() {
            let unstyled = classify(kind) == HighlightClass::None;
            let expected = matches!(kind, TokenKind::Whitespace | TokenKind::Semicolon);
            assert_eq!(unstyled, expected, "{kind:?}");
        }
    }

    #[test]
    fn semicolons_are_left_unstyled() {
        assert_eq!(classify(TokenKind::Semicolon), HighlightClass::None);
    }

    #[test]
    fn command_keywords_share_a_class() {
        assert_eq!(classify(TokenKind::KeywordCommand1), HighlightClass::Keyword);
        assert_eq!(classify(TokenKind::KeywordCommandPrefix), HighlightClass::Keyword);
        assert_eq!(classify(TokenKind::KeywordCommand6), HighlightClass::KeywordInProof);
        assert_eq!(classify(TokenKind::KeywordSorry), HighlightClass::Sorry);
    }

    #[test]
    fn highlight_walk_skips_whitespace_and_sorts() {
        // "def foo"
        let input = "def foo";
        let mut tree = SyntaxTree::default();
        let root = tree.root();
        let def = tree.add_non_terminal(root, NonTerminalKind::Definition);
        tree.add_terminal(def, TokenKind::KeywordCommand1, InputSpan::new(0, 3));
        tree.add_terminal(def, TokenKind::Whitespace, InputSpan::new(3, 4));
        tree.add_terminal(def, TokenKind::Identifier, InputSpan::new(4, 7));

        let styles = highlight(&tree);
        assert_eq!(
            styles,
            vec![
                (InputSpan::new(0, 3), HighlightClass::Keyword),
                (InputSpan::new(4, 7), HighlightClass::Identifier),
            ]
        );
        assert_eq!(styles[1].0.as_str(input), "foo");
    }
}
