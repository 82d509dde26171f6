//! Tests for the language-server semantic token mapping.

use lean_editor_support::config::HighlightSettings;
use lean_editor_support::highlight::HighlightClass;
use lean_editor_support::semantic_tokens::{SemanticToken, file_styles, token_style};
use lean_syntax::InputSpan;

fn mods(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn declaration_modifier_uses_the_declaration_table() {
    let declaration = mods(&["declaration"]);
    let definition = mods(&["definition"]);

    assert_eq!(
        token_style("function", &definition),
        Some(HighlightClass::FunctionDeclaration)
    );
    assert_eq!(
        token_style("method", &declaration),
        Some(HighlightClass::FunctionDeclaration)
    );
    assert_eq!(
        token_style("struct", &definition),
        Some(HighlightClass::ClassName)
    );
    assert_eq!(
        token_style("parameter", &declaration),
        Some(HighlightClass::LocalVariable)
    );
    assert_eq!(
        token_style("variable", &definition),
        Some(HighlightClass::LocalVariable)
    );
}

#[test]
fn unknown_type_under_declaration_does_not_fall_through() {
    // `namespace` is in the bare-type table, but under the declaration
    // branch it is unrecognized and must stay unstyled.
    assert_eq!(token_style("namespace", &mods(&["definition"])), None);
    assert_eq!(token_style("property", &mods(&["declaration"])), None);
}

#[test]
fn bare_type_table_mappings() {
    let none = mods(&[]);
    assert_eq!(token_style("namespace", &none), Some(HighlightClass::ClassReference));
    assert_eq!(token_style("type", &none), Some(HighlightClass::ClassReference));
    assert_eq!(token_style("interface", &none), Some(HighlightClass::ClassReference));
    assert_eq!(token_style("typeParameter", &none), Some(HighlightClass::Parameter));
    assert_eq!(token_style("parameter", &none), Some(HighlightClass::Parameter));
    assert_eq!(token_style("variable", &none), Some(HighlightClass::LocalVariable));
    assert_eq!(token_style("property", &none), Some(HighlightClass::InstanceField));
    assert_eq!(token_style("enumMember", &none), Some(HighlightClass::StaticField));
    assert_eq!(token_style("function", &none), Some(HighlightClass::FunctionCall));
    assert_eq!(token_style("method", &none), Some(HighlightClass::FunctionCall));
    assert_eq!(token_style("macro", &none), Some(HighlightClass::Metadata));
    assert_eq!(token_style("keyword", &none), Some(HighlightClass::Keyword));
    assert_eq!(token_style("modifier", &none), Some(HighlightClass::Keyword));
    assert_eq!(token_style("comment", &none), Some(HighlightClass::Comment));
    assert_eq!(token_style("string", &none), Some(HighlightClass::String));
    assert_eq!(token_style("number", &none), Some(HighlightClass::Number));
    assert_eq!(token_style("operator", &none), Some(HighlightClass::Operator));
}

#[test]
fn unrecognized_types_are_left_unstyled() {
    assert_eq!(token_style("regexp", &mods(&[])), None);
    assert_eq!(token_style("event", &mods(&[])), None);
    assert_eq!(token_style("", &mods(&[])), None);
    // Unrelated modifiers do not select the declaration table.
    assert_eq!(
        token_style("function", &mods(&["readonly"])),
        Some(HighlightClass::FunctionCall)
    );
}

#[test]
fn file_styles_respects_the_semantic_gate() {
    let tokens = vec![
        SemanticToken::new(InputSpan::new(0, 3), "function", ["definition"]),
        SemanticToken::new(InputSpan::new(4, 7), "regexp", Vec::<String>::new()),
        SemanticToken::new(InputSpan::new(8, 9), "number", Vec::<String>::new()),
    ];

    let on = HighlightSettings::default();
    let styles = file_styles(&on, &tokens);
    assert_eq!(
        styles,
        vec![
            (InputSpan::new(0, 3), HighlightClass::FunctionDeclaration),
            (InputSpan::new(8, 9), HighlightClass::Number),
        ]
    );

    let off = HighlightSettings {
        enable_semantic_highlighting: false,
        ..HighlightSettings::default()
    };
    assert!(file_styles(&off, &tokens).is_empty());
}
