/// Lexical token kinds produced by the Lean lexer.
///
/// This is a closed vocabulary: the lexer is an external collaborator and
/// every kind it can emit is listed here. Keyword commands are grouped the
/// way the lexer groups them (several command groups sharing one visual
/// style, a prefix group, and the in-proof group `KeywordCommand6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    KeywordCommand1,
    KeywordCommand2,
    KeywordCommand3,
    KeywordCommand4,
    KeywordCommand5,
    KeywordCommandPrefix,
    KeywordModifier,
    /// Keywords that only occur inside proofs (`by`, `calc`, ...).
    KeywordCommand6,
    KeywordSorry,
    /// Built-in type names (`Prop`, `Type`, `Sort`, ...).
    DefaultType,
    LineComment,
    BlockComment,
    DocComment,
    String,
    Number,
    NegativeNumber,
    Identifier,
    Assign,
    Equal,
    Colon,
    At,
    Star,
    ForAll,
    MiscComparisonSym,
    MiscPlusSym,
    MiscMultiplySym,
    MiscExponentSym,
    MiscArrowSym,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftUniBracket,
    RightUniBracket,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Semicolon,
    /// The `@[` opening an attribute list.
    AttributeStart,
    /// A known attribute literal inside an attribute list.
    Attribute,
    /// The `_` placeholder.
    Placeholder,
    TemplateTrigger,
    Other,
    Whitespace,
}

impl TokenKind {
    /// Returns every token kind in its defined order.
    pub fn all() -> &'static [TokenKind] {
        use TokenKind::*;
        &[
            KeywordCommand1,
            KeywordCommand2,
            KeywordCommand3,
            KeywordCommand4,
            KeywordCommand5,
            KeywordCommandPrefix,
            KeywordModifier,
            KeywordCommand6,
            KeywordSorry,
            DefaultType,
            LineComment,
            BlockComment,
            DocComment,
            String,
            Number,
            NegativeNumber,
            Identifier,
            Assign,
            Equal,
            Colon,
            At,
            Star,
            ForAll,
            MiscComparisonSym,
            MiscPlusSym,
            MiscMultiplySym,
            MiscExponentSym,
            MiscArrowSym,
            LeftParen,
            RightParen,
            LeftBracket,
            RightBracket,
            LeftUniBracket,
            RightUniBracket,
            LeftBrace,
            RightBrace,
            Comma,
            Dot,
            Semicolon,
            AttributeStart,
            Attribute,
            Placeholder,
            TemplateTrigger,
            Other,
            Whitespace,
        ]
    }
}
