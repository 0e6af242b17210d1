//! Fence tag aliases
//!
//! Maps the short tags people write after a fence (`js`, `py`) to canonical
//! language identifiers (`javascript`, `python`) and back.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Short tag to canonical identifier, in registration order.
///
/// When several tags share a canonical name the first one listed is the
/// abbreviation used on write-back.
const ALIASES: &[(&str, &str)] = &[
    ("bat", "batch"),
    ("c++", "cpp"),
    ("js", "javascript"),
    ("ts", "typescript"),
    ("cs", "csharp"),
    ("py", "python"),
    ("py2", "python"),
    ("py3", "python"),
];

static DEFAULT_TABLE: LazyLock<LanguageTable> =
    LazyLock::new(|| LanguageTable::from_aliases(ALIASES));

/// Bidirectional mapping between fence tags and canonical languages
#[derive(Debug, Clone, Default)]
pub struct LanguageTable {
    canonical: HashMap<String, String>,
    abbrev: HashMap<String, String>,
}

impl LanguageTable {
    /// Build a table from `(tag, canonical)` pairs
    pub fn from_aliases(aliases: &[(&str, &str)]) -> Self {
        let mut canonical = HashMap::with_capacity(aliases.len());
        let mut abbrev = HashMap::with_capacity(aliases.len());

        for (tag, language) in aliases {
            canonical.insert(tag.to_string(), language.to_string());
            abbrev
                .entry(language.to_string())
                .or_insert_with(|| tag.to_string());
        }

        Self { canonical, abbrev }
    }

    /// The shared built-in table
    pub fn builtin() -> &'static LanguageTable {
        &DEFAULT_TABLE
    }

    /// Canonical identifier for a fence tag, or the tag itself when unknown
    pub fn canonical_of<'a>(&'a self, tag: &'a str) -> &'a str {
        self.canonical.get(tag).map(String::as_str).unwrap_or(tag)
    }

    /// Fence tag for a canonical identifier, or the identifier itself
    pub fn abbrev_of<'a>(&'a self, language: &'a str) -> &'a str {
        self.abbrev.get(language).map(String::as_str).unwrap_or(language)
    }
}

/// [`LanguageTable::canonical_of`] on the built-in table
pub fn canonical_of(tag: &str) -> &str {
    DEFAULT_TABLE.canonical_of(tag)
}

/// [`LanguageTable::abbrev_of`] on the built-in table
pub fn abbrev_of(language: &str) -> &str {
    DEFAULT_TABLE.abbrev_of(language)
}
