//! Mapping of language-server semantic tokens to highlight classes.
//!
//! The Lean language server reports, per token, a type name and a list of
//! modifier names (see `Lean.Server.FileWorker.RequestHandling`). This
//! module maps those onto [`HighlightClass`] buckets. Unrecognized names
//! are reported through `tracing` and left unstyled; the token vocabulary
//! of the server evolves independently of this table and must never make
//! classification fail.

use lean_syntax::InputSpan;
use lsp_types::{SemanticTokenModifier, SemanticTokensLegend};
use tracing::warn;

use crate::config::HighlightSettings;
use crate::highlight::HighlightClass;

/// A semantic token as reported by the language server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticToken {
    pub span: InputSpan,
    pub token_type: String,
    pub modifiers: Vec<String>,
}

impl SemanticToken {
    pub fn new(
        span: InputSpan,
        token_type: impl Into<String>,
        modifiers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            span,
            token_type: token_type.into(),
            modifiers: modifiers.into_iter().map(Into::into).collect(),
        }
    }
}

/// Maps a token type and its modifiers to a highlight class.
///
/// Tokens carrying a `definition` or `declaration` modifier consult a
/// dedicated declaration table; an unrecognized type under that branch is
/// reported and left unstyled without falling through to the bare-type
/// table. `None` always means "leave unstyled".
pub fn token_style(token_type: &str, modifiers: &[String]) -> Option<HighlightClass> {
    let declares = modifiers
        .iter()
        .any(|m| m == "definition" || m == "declaration");
    if declares {
        return match token_type {
            "function" | "method" => Some(HighlightClass::FunctionDeclaration),
            "class" | "struct" | "type" => Some(HighlightClass::ClassName),
            "variable" | "parameter" => Some(HighlightClass::LocalVariable),
            _ => {
                warn!("unknown semantic token type {token_type:?} with modifiers {modifiers:?}");
                None
            }
        };
    }

    match token_type {
        "namespace" | "type" | "class" | "struct" | "enum" | "interface" => {
            Some(HighlightClass::ClassReference)
        }
        "typeParameter" | "parameter" => Some(HighlightClass::Parameter),
        "variable" => Some(HighlightClass::LocalVariable),
        "property" => Some(HighlightClass::InstanceField),
        "enumMember" => Some(HighlightClass::StaticField),
        "function" | "method" => Some(HighlightClass::FunctionCall),
        "macro" => Some(HighlightClass::Metadata),
        "keyword" | "modifier" => Some(HighlightClass::Keyword),
        "comment" => Some(HighlightClass::Comment),
        "string" => Some(HighlightClass::String),
        "number" => Some(HighlightClass::Number),
        "operator" => Some(HighlightClass::Operator),
        _ => {
            warn!("unknown semantic token type {token_type:?} with modifiers {modifiers:?}");
            None
        }
    }
}

/// Styles for a file's worth of semantic tokens, in reported order.
///
/// Returns an empty vector without consulting the mapper when semantic
/// highlighting is disabled. A token that maps to nothing is skipped and
/// never prevents mapping of the remaining tokens.
pub fn file_styles(
    settings: &HighlightSettings,
    tokens: &[SemanticToken],
) -> Vec<(InputSpan, HighlightClass)> {
    if !settings.enable_semantic_highlighting {
        return Vec::new();
    }
    tokens
        .iter()
        .filter_map(|token| {
            token_style(&token.token_type, &token.modifiers).map(|class| (token.span, class))
        })
        .collect()
}

/// The token types and modifiers this mapper understands, for
/// server-capability registration.
pub fn legend() -> SemanticTokensLegend {
    use lsp_types::SemanticTokenType as T;
    SemanticTokensLegend {
        token_types: vec![
            T::NAMESPACE,
            T::TYPE,
            T::CLASS,
            T::STRUCT,
            T::ENUM,
            T::INTERFACE,
            T::TYPE_PARAMETER,
            T::PARAMETER,
            T::VARIABLE,
            T::PROPERTY,
            T::ENUM_MEMBER,
            T::FUNCTION,
            T::METHOD,
            T::MACRO,
            T::KEYWORD,
            T::MODIFIER,
            T::COMMENT,
            T::STRING,
            T::NUMBER,
            T::OPERATOR,
        ],
        token_modifiers: vec![
            SemanticTokenModifier::DECLARATION,
            SemanticTokenModifier::DEFINITION,
        ],
    }
}
