//! Per-session highlighting toggles.

use serde::{Deserialize, Serialize};

/// Feature toggles for the two highlighting pipelines.
///
/// Each flag independently gates one classification rule. The settings are
/// owned by the editor session: classifiers only ever read them, and no
/// cross-call consistency is assumed if a settings UI flips a flag between
/// calls. Field names serialize in camelCase, matching the option names
/// editor clients send (`enableHeuristicDefinition`, ...).
///
/// All six flags default to enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HighlightSettings {
    /// Style names inside a definition header as function declarations.
    pub enable_heuristic_definition: bool,
    /// Style identifiers and attribute literals inside `@[..]` lists.
    pub enable_heuristic_attributes: bool,
    /// Style identifiers that start a new line as instance fields.
    pub enable_heuristic_field: bool,
    /// Style identifiers starting with an uppercase letter as type names.
    pub enable_heuristic_type: bool,
    /// Style known tactic names as function calls.
    pub enable_heuristic_tactic: bool,
    /// Use language-server semantic tokens when available.
    pub enable_semantic_highlighting: bool,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            enable_heuristic_definition: true,
            enable_heuristic_attributes: true,
            enable_heuristic_field: true,
            enable_heuristic_type: true,
            enable_heuristic_tactic: true,
            enable_semantic_highlighting: true,
        }
    }
}

impl HighlightSettings {
    /// Settings with every flag disabled, useful as a test baseline.
    pub fn disabled() -> Self {
        Self {
            enable_heuristic_definition: false,
            enable_heuristic_attributes: false,
            enable_heuristic_field: false,
            enable_heuristic_type: false,
            enable_heuristic_tactic: false,
            enable_semantic_highlighting: false,
        }
    }
}
