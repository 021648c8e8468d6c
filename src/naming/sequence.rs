//! Default `<seq>-<a>-<b>-<label>.<ext>` naming strategy

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use regex::Regex;

use super::{NamingError, NamingStrategy, Result};

const ORDER_KEY_PATTERN: &str = r"^(?P<key>[0-9]+)-";
const LABELED_NAME_PATTERN: &str =
    r"^(?P<prefix>[0-9]+-[0-9]+-[0-9]+-)(?P<label>.*)(?P<ext>\.[^.]+)$";

/// Leading sequence number of a file name, compared by numeric value
///
/// Kept as a digit string so numbers of any length order correctly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderKey(String);

impl OrderKey {
    fn from_digits(digits: &str) -> Self {
        Self(digits.trim_start_matches('0').to_string())
    }

    /// Significant digits, without leading zeros (`""` for zero)
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// The key as a number, if it fits in a `u64`
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        if self.0.is_empty() {
            Some(0)
        } else {
            self.0.parse().ok()
        }
    }
}

impl Ord for OrderKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for OrderKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Naming strategy for `<seq>-<a>-<b>-<label>.<ext>` file names
///
/// Files are ordered by the numeric value of `<seq>`, ties broken by file name.
#[derive(Debug, Clone)]
pub struct SequenceNaming {
    order_key: Regex,
    labeled_name: Regex,
    extensions: Vec<String>,
}

impl SequenceNaming {
    /// Create the strategy with no extension filter
    ///
    /// # Errors
    ///
    /// Returns `NamingError::InvalidRegex` if the built-in patterns fail to
    /// compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            order_key: compile(ORDER_KEY_PATTERN)?,
            labeled_name: compile(LABELED_NAME_PATTERN)?,
            extensions: Vec::new(),
        })
    }

    /// Only list files with one of the given extensions (case-insensitive)
    ///
    /// Leading dots are ignored, so `"jpeg"` and `".jpeg"` are equivalent.
    /// An empty list disables filtering.
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        self
    }

    /// Extensions accepted by the listing filter
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Parse the ordering key of a file name
    #[must_use]
    pub fn order_key(&self, filename: &str) -> Option<OrderKey> {
        self.order_key
            .captures(filename)
            .and_then(|caps| caps.name("key"))
            .map(|key| OrderKey::from_digits(key.as_str()))
    }

    fn accepts_extension(&self, filename: &str) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| NamingError::regex_compile(pattern, &e.to_string()))
}

fn unreadable(folder: &Path, source: std::io::Error) -> NamingError {
    NamingError::FolderUnreadable {
        folder: folder.display().to_string(),
        source,
    }
}

impl NamingStrategy for SequenceNaming {
    fn list_images(&self, folder: &Path) -> Result<Vec<String>> {
        let entries = fs::read_dir(folder).map_err(|e| unreadable(folder, e))?;

        let mut keyed = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| unreadable(folder, e))?;
            if !entry.path().is_file() {
                continue;
            }

            let name = entry.file_name().into_string().map_err(|raw| NamingError::NonUtf8Name {
                name: raw.to_string_lossy().into_owned(),
            })?;
            if !self.accepts_extension(&name) {
                tracing::debug!(file = %name, "skipping file with unlisted extension");
                continue;
            }

            let key = self
                .order_key(&name)
                .ok_or_else(|| NamingError::Unorderable { filename: name.clone() })?;
            keyed.push((key, name));
        }

        keyed.sort();
        tracing::debug!(folder = %folder.display(), count = keyed.len(), "listed images");

        Ok(keyed.into_iter().map(|(_, name)| name).collect())
    }

    fn extract_label(&self, filename: &str) -> Result<String> {
        self.labeled_name
            .captures(filename)
            .and_then(|caps| caps.name("label"))
            .map(|label| label.as_str().to_string())
            .ok_or_else(|| NamingError::Parse {
                filename: filename.to_string(),
            })
    }

    fn compute_renamed(&self, label: &str, original: &str) -> Result<String> {
        let caps = self
            .labeled_name
            .captures(original)
            .ok_or_else(|| NamingError::PatternMismatch {
                filename: original.to_string(),
            })?;

        // Captures are guaranteed by a successful match of the pattern
        let prefix = caps.name("prefix").map_or("", |m| m.as_str());
        let ext = caps.name("ext").map_or("", |m| m.as_str());

        Ok(format!("{prefix}{label}{ext}"))
    }
}
