use crate::{ManifestError, ManifestResult, PuzzleDefinition};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::{debug, info};

/// The puzzle manifest: loaded once, read-only for the whole session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Puzzles in play order.
    pub puzzles: Vec<PuzzleDefinition>,
    /// Static content pages keyed by page key.
    #[serde(default)]
    pub static_pages: BTreeMap<String, StaticPage>,
    /// Names accepted by `name` puzzles.
    #[serde(default)]
    pub valid_names: ValidNameSet,
}

impl Manifest {
    /// Parses and validates a manifest from JSON text.
    pub fn from_json(json: &str) -> ManifestResult<Self> {
        let manifest: Self = serde_json::from_str(json)?;
        manifest.validate()?;
        debug!(
            puzzles = manifest.puzzles.len(),
            pages = manifest.static_pages.len(),
            names = manifest.valid_names.len(),
            "parsed manifest"
        );
        Ok(manifest)
    }

    /// Reads, parses and validates a manifest file.
    pub async fn load(path: impl AsRef<Path>) -> ManifestResult<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ManifestError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let manifest = Self::from_json(&json)?;
        info!("Loaded {} puzzles from {}", manifest.len(), path.display());
        Ok(manifest)
    }

    /// Checks every puzzle's structural invariants.
    pub fn validate(&self) -> ManifestResult<()> {
        for (index, puzzle) in self.puzzles.iter().enumerate() {
            puzzle
                .kind
                .validate()
                .map_err(|reason| ManifestError::InvalidPuzzle { index, reason })?;
        }
        Ok(())
    }

    /// Number of puzzles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// The puzzle at `index`, if any.
    #[must_use]
    pub fn puzzle(&self, index: usize) -> Option<&PuzzleDefinition> {
        self.puzzles.get(index)
    }

    /// The static page for `key`, if any.
    #[must_use]
    pub fn static_page(&self, key: &str) -> Option<&StaticPage> {
        self.static_pages.get(key)
    }
}

/// A static content page (rules, about, help).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticPage {
    pub title: String,
    /// Body text; newlines are paragraph breaks.
    pub text: String,
    pub icon: String,
    /// Thumbnail image, clickable to show `full`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full: Option<String>,
}

/// Case-insensitive set of names accepted by `name` puzzles.
///
/// Entries are trimmed and lowercased on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ValidNameSet(BTreeSet<String>);

impl ValidNameSet {
    /// Builds a set from raw names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            names
                .into_iter()
                .map(|n| n.as_ref().trim().to_lowercase())
                .filter(|n| !n.is_empty())
                .collect(),
        )
    }

    /// Returns true if `name` is in the set, ignoring case and padding.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(&name.trim().to_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for ValidNameSet {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<ValidNameSet> for Vec<String> {
    fn from(set: ValidNameSet) -> Self {
        set.0.into_iter().collect()
    }
}
