//! Symbol character classes used by the heuristic operator check.
//!
//! These sets mirror the lexer's operator token classes (comparison,
//! additive, multiplicative, exponent and arrow symbols) plus common ASCII
//! punctuation. An identifier made up entirely of these characters is
//! treated as an operator by the annotator.

use std::sync::LazyLock;

use ahash::HashSet;

/// Comparison and relation symbols.
pub const COMPARISON_SYMBOLS: &[char] = &[
    '∉', '∋', '∌', '⊆', '⊈', '⊂', '⊄', '⊊', '∝', '∊', '∍', '∥', '∦', '∷', '∺', '∻', '∽',
    '∾', '≁', '≃', '≄', '≅', '≆', '≇', '≈', '≉', '≊', '≋', '≌', '≍', '≎', '≐', '≑', '≒',
    '≓', '≔', '≕', '≖', '≗', '≘', '≙', '≚', '≛', '≜', '≝', '≞', '≟', '≣', '≦', '≧', '≨',
    '≩', '≪', '≫', '≬', '≭', '≮', '≯', '≰', '≱', '≲', '≳', '≴', '≵', '≶', '≷', '≸', '≹',
    '≺', '≻', '≼', '≽', '≾', '≿', '⊀', '⊁', '⊃', '⊅', '⊇', '⊉', '⊋', '⊏', '⊐', '⊑', '⊒',
    '⊜', '⊩', '⊬', '⊮', '⊰', '⊱', '⊲', '⊳', '⊴', '⊵', '⊶', '⊷', '⋍', '⋐', '⋑', '⋕', '⋖',
    '⋗', '⋘', '⋙', '⋚', '⋛', '⋜', '⋝', '⋞', '⋟', '⋠', '⋡', '⋢', '⋣', '⋤', '⋥', '⋦', '⋧',
    '⋨', '⋩', '⋪', '⋫', '⋬', '⋭', '⋲', '⋳', '⋴', '⋵', '⋶', '⋷', '⋸', '⋹', '⋺', '⋻', '⋼',
    '⋽', '⋾', '⋿', '⟈', '⟉', '⟒', '⦷', '⧀', '⧁', '⧡', '⧣', '⧤', '⧥', '⩦', '⩧', '⩪', '⩫',
    '⩬', '⩭', '⩮', '⩯', '⩰', '⩱', '⩲', '⩳', '⩴', '⩵', '⩶', '⩷', '⩸', '⩹', '⩺', '⩻', '⩼',
    '⩽', '⩾', '⩿', '⪀', '⪁', '⪂', '⪃', '⪄', '⪅', '⪆', '⪇', '⪈', '⪉', '⪊', '⪋', '⪌', '⪍',
    '⪎', '⪏', '⪐', '⪑', '⪒', '⪓', '⪔', '⪕', '⪖', '⪗', '⪘', '⪙', '⪚', '⪛', '⪜', '⪝', '⪞',
    '⪟', '⪠', '⪡', '⪢', '⪣', '⪤', '⪥', '⪦', '⪧', '⪨', '⪩', '⪪', '⪫', '⪬', '⪭', '⪮', '⪯',
    '⪰', '⪱', '⪲', '⪳', '⪴', '⪵', '⪶', '⪷', '⪸', '⪹', '⪺', '⪻', '⪼', '⪽', '⪾', '⪿', '⫀',
    '⫁', '⫂', '⫃', '⫄', '⫅', '⫆', '⫇', '⫈', '⫉', '⫊', '⫋', '⫌', '⫍', '⫎', '⫏', '⫐', '⫑',
    '⫒', '⫓', '⫔', '⫕', '⫖', '⫗', '⫘', '⫙', '⫷', '⫸', '⫹', '⫺', '⊢', '⊣', '⟂',
];

/// Additive symbols.
pub const ADDITIVE_SYMBOLS: &[char] = &[
    '⊕', '⊖', '⊞', '⊟', '∪', '∨', '⊔', '±', '∓', '∔', '∸', '≂', '≏', '⊎', '⊽', '⋎', '⋓',
    '⧺', '⧻', '⨈', '⨢', '⨣', '⨤', '⨥', '⨦', '⨧', '⨨', '⨩', '⨪', '⨫', '⨬', '⨭', '⨮', '⨹',
    '⨺', '⩁', '⩂', '⩅', '⩊', '⩌', '⩏', '⩐', '⩒', '⩔', '⩖', '⩗', '⩛', '⩝', '⩡', '⩢', '⩣',
];

/// Multiplicative symbols.
pub const MULTIPLICATIVE_SYMBOLS: &[char] = &[
    '∘', '∩', '∧', '⊗', '⊘', '⊙', '⊚', '⊛', '⊠', '⊡', '⊓', '∗', '∙', '∤', '⅋', '≀', '⊼',
    '⋄', '⋆', '⋇', '⋉', '⋊', '⋋', '⋌', '⋏', '⋒', '⟑', '⦸', '⦼', '⦾', '⦿', '⧶', '⧷', '⨇',
    '⨰', '⨱', '⨲', '⨳', '⨴', '⨵', '⨶', '⨷', '⨸', '⨻', '⨼', '⨽', '⩀', '⩃', '⩄', '⩋', '⩍',
    '⩎', '⩑', '⩓', '⩕', '⩘', '⩚', '⩜', '⩞', '⩟', '⩠', '⫛', '⊍', '▷', '⨝', '⟕', '⟖', '⟗',
];

/// Exponent and vertical-arrow symbols.
pub const EXPONENT_SYMBOLS: &[char] = &[
    '↑', '↓', '⇵', '⟰', '⟱', '⤈', '⤉', '⤊', '⤋', '⤒', '⤓', '⥉', '⥌', '⥍', '⥏', '⥑', '⥔',
    '⥕', '⥘', '⥙', '⥜', '⥝', '⥠', '⥡', '⥣', '⥥', '⥮', '⥯', '￪', '￬',
];

/// Arrow symbols.
pub const ARROW_SYMBOLS: &[char] = &[
    '←', '→', '↔', '↚', '↛', '↞', '↠', '↢', '↣', '↦', '↤', '↮', '⇎', '⇍', '⇏', '⇐', '⇒',
    '⇔', '⇴', '⇶', '⇷', '⇸', '⇹', '⇺', '⇻', '⇼', '⇽', '⇾', '⇿', '⟵', '⟶', '⟷', '⟹', '⟺',
    '⟻', '⟼', '⟽', '⟾', '⟿', '⤀', '⤁', '⤂', '⤃', '⤄', '⤅', '⤆', '⤇', '⤌', '⤍', '⤎', '⤏',
    '⤐', '⤑', '⤔', '⤕', '⤖', '⤗', '⤘', '⤝', '⤞', '⤟', '⤠', '⥄', '⥅', '⥆', '⥇', '⥈', '⥊',
    '⥋', '⥎', '⥐', '⥒', '⥓', '⥖', '⥗', '⥚', '⥛', '⥞', '⥟', '⥢', '⥤', '⥦', '⥧', '⥨', '⥩',
    '⥪', '⥫', '⥬', '⥭', '⥰', '⧴', '⬱', '⬰', '⬲', '⬳', '⬴', '⬵', '⬶', '⬷', '⬸', '⬹', '⬺',
    '⬻', '⬼', '⬽', '⬾', '⬿', '⭀', '⭁', '⭂', '⭃', '⭄', '⭇', '⭈', '⭉', '⭊', '⭋', '⭌', '￩',
    '￫', '⇜', '⇝', '↜', '↝', '↩', '↪', '↫', '↬', '↼', '↽', '⇀', '⇁', '⇄', '⇆', '⇇', '⇉',
    '⇋', '⇌', '⇚', '⇛', '⇠', '⇢',
];

/// Common ASCII punctuation.
pub const ASCII_SYMBOLS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '-', '+', '=', '[', ']', '{', '}',
    '\\', '|', ';', ':', '\'', '"', '<', '>', ',', '.', '/', '?', '~', '`',
];

static SYMBOL_CHARS: LazyLock<HashSet<char>> = LazyLock::new(|| {
    COMPARISON_SYMBOLS
        .iter()
        .chain(ADDITIVE_SYMBOLS)
        .chain(MULTIPLICATIVE_SYMBOLS)
        .chain(EXPONENT_SYMBOLS)
        .chain(ARROW_SYMBOLS)
        .chain(ASCII_SYMBOLS)
        .copied()
        .collect()
});

/// Whether `c` belongs to one of the operator symbol classes.
pub fn is_symbol_char(c: char) -> bool {
    SYMBOL_CHARS.contains(&c)
}

/// Whether `text` is non-empty and consists solely of operator symbols.
pub fn is_all_symbols(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_symbol_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_are_symbols() {
        assert!(is_all_symbols("\u{21a6}"));
        assert!(is_all_symbols("<|>"));
        assert!(is_all_symbols("\u{2295}\u{2295}"));
    }

    #[test]
    fn words_are_not_symbols() {
        assert!(!is_all_symbols("foo"));
        assert!(!is_all_symbols("x+y"));
        assert!(!is_all_symbols(""));
    }
}
