//! The tactic name index backing the heuristic tactic rule.

use std::path::Path;
use std::sync::LazyLock;

use indexmap::IndexMap;
use tracing::warn;

/// Error raised while parsing a tactic index resource.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TacticIndexError {
    /// A non-comment line did not split into exactly `name descriptor`.
    #[error("line {line}: expected `name descriptor`, found {found:?}")]
    MalformedLine { line: usize, found: String },
}

/// A read-only map from tactic name to its descriptor.
///
/// Built once from a line-oriented resource file: lines starting with `--`
/// are comments, blank lines are skipped, and every other line must hold
/// exactly two whitespace-separated fields. Parsing is fail-fast: a
/// malformed line is an error at load time, never a silently skipped entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TacticIndex {
    entries: IndexMap<String, String>,
}

impl TacticIndex {
    /// Parses the line-oriented resource format.
    pub fn parse(text: &str) -> Result<Self, TacticIndexError> {
        let mut entries = IndexMap::new();
        for (index, line) in text.lines().enumerate() {
            if line.is_empty() || line.starts_with("--") {
                continue;
            }
            let mut fields = line.split_whitespace();
            let (Some(name), Some(descriptor), None) =
                (fields.next(), fields.next(), fields.next())
            else {
                return Err(TacticIndexError::MalformedLine {
                    line: index + 1,
                    found: line.to_owned(),
                });
            };
            entries.insert(name.to_owned(), descriptor.to_owned());
        }
        Ok(Self { entries })
    }

    /// Loads an index from a file.
    ///
    /// A missing or unreadable file degrades to an empty index (the
    /// annotator then simply never matches the tactic rule); a malformed
    /// file is still an error.
    pub fn load(path: &Path) -> Result<Self, TacticIndexError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(error) => {
                warn!("tactic index {} unreadable, using empty index: {error}", path.display());
                Ok(Self::default())
            }
        }
    }

    /// The index bundled with the crate, built on first use.
    pub fn bundled() -> &'static TacticIndex {
        static BUNDLED: LazyLock<TacticIndex> = LazyLock::new(|| {
            TacticIndex::parse(include_str!("../assets/tactics.txt"))
                .expect("bundled tactics.txt is well-formed")
        });
        &BUNDLED
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in resource-file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blank_lines() {
        let index = TacticIndex::parse("--comment\nfoo bar\nbaz qux").unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("foo"), Some("bar"));
        assert_eq!(index.get("baz"), Some("qux"));

        let with_blank = TacticIndex::parse("foo bar\n\nbaz qux\n").unwrap();
        assert_eq!(with_blank.len(), 2);
    }

    #[test]
    fn malformed_line_fails_fast() {
        let err = TacticIndex::parse("foo bar\nonly-one-field\n").unwrap_err();
        assert_eq!(
            err,
            TacticIndexError::MalformedLine {
                line: 2,
                found: "only-one-field".to_owned(),
            }
        );

        let err = TacticIndex::parse("a b c").unwrap_err();
        assert!(matches!(err, TacticIndexError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn preserves_file_order() {
        let index = TacticIndex::parse("zeta a\nalpha b").unwrap();
        let names: Vec<_> = index.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn missing_file_degrades_to_empty() {
        let index = TacticIndex::load(Path::new("/nonexistent/tactics.txt")).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn bundled_index_is_well_formed() {
        let bundled = TacticIndex::bundled();
        assert!(!bundled.is_empty());
        assert!(bundled.contains("intro"));
        assert!(bundled.contains("simp"));
    }
}
