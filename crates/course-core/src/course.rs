use serde::{Deserialize, Serialize};

pub const NO_PREREQUISITES: &str = "No prerequisites";

/// A single catalog entry. Never mutated once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    /// Short identifier, unique within a catalog.
    pub code: String,
    pub credit_hours: u32,
    pub description: String,
    #[serde(default = "default_prerequisites")]
    pub prerequisites: String,
}

/// Lowercases one char at a time, so folding never depends on neighbouring
/// chars (`str::to_lowercase` turns a word-final `Σ` into `ς`).
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

fn default_prerequisites() -> String {
    NO_PREREQUISITES.to_string()
}

impl Course {
    pub fn new(
        title: impl Into<String>,
        code: impl Into<String>,
        credit_hours: u32,
        description: impl Into<String>,
        prerequisites: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            code: code.into(),
            credit_hours,
            description: description.into(),
            prerequisites: prerequisites.into(),
        }
    }

    /// Case-insensitive substring match against title or code.
    ///
    /// `needle` must already be folded with [`fold_case`].
    pub fn matches_folded(&self, needle: &str) -> bool {
        fold_case(&self.title).contains(needle) || fold_case(&self.code).contains(needle)
    }

    pub fn has_prerequisites(&self) -> bool {
        self.prerequisites != NO_PREREQUISITES
    }
}
