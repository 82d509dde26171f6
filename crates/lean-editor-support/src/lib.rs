//! Editor support utilities for the Lean language.
//!
//! Two independent, stateless classification pipelines feed an editor's
//! rendering layer:
//!
//! - the lexical pipeline: [`highlight::classify`] maps every token kind to
//!   a [`highlight::HighlightClass`], and [`annotator::HeuristicAnnotator`]
//!   refines identifier styling from local syntactic context (definition and
//!   attribute parents, leading-uppercase names, operator-only names, known
//!   tactic names);
//! - the semantic pipeline: [`semantic_tokens::token_style`] maps token
//!   type/modifier names reported by the Lean language server to the same
//!   highlight classes.
//!
//! Both pipelines produce `(InputSpan, HighlightClass)` pairs; producing
//! nothing for a node means "leave it unstyled". Neither pipeline holds
//! mutable state: the tactic index is built once and read-only, and the
//! [`config::HighlightSettings`] toggles are read on every call.

pub mod annotator;
pub mod config;
pub mod highlight;
pub mod semantic_tokens;
pub mod symbols;
pub mod tactics;

pub use annotator::{Annotation, HeuristicAnnotator};
pub use config::HighlightSettings;
pub use highlight::HighlightClass;
pub use tactics::TacticIndex;
