//! Case styles and the casing seam used by the line transformer.
//!
//! Each style maps onto one `convert_case::Case`; word boundary detection
//! (casing transitions, digits, `_`, `-` and spaces) is left entirely to
//! that crate.
//!
//! Style names are matched case-insensitively and ignore `-`, `_` and
//! spaces, so `kebab`, `KebabCase` and `KEBAB_CASE` all select the same
//! style. A name may also be abbreviated to any prefix that selects exactly
//! one style (`sn` is snake, `s` is ambiguous).

use std::fmt;
use std::str::FromStr;

use convert_case::{Case, Casing};

use crate::error::{CaseError, FieldcaseError};

/// Something that can rewrite one field.
///
/// The line transformer only depends on this trait, which keeps the
/// failure path testable even though every `CaseStyle` conversion succeeds.
pub trait FieldCaser {
    /// Rewrite a single field.
    fn apply(&self, field: &str) -> Result<String, CaseError>;

    /// The display name used in diagnostics.
    fn name(&self) -> &str;
}

/// A supported casing convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStyle {
    Camel,
    Pascal,
    Snake,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
    Train,
    Title,
    Lower,
    Upper,
}

/// One row of the name table: style, display name, accepted spellings.
///
/// Spellings are stored already normalized (see [`normalize`]).
struct NameEntry {
    style: CaseStyle,
    display: &'static str,
    spellings: &'static [&'static str],
}

const NAME_TABLE: &[NameEntry] = &[
    NameEntry {
        style: CaseStyle::Camel,
        display: "CamelCase",
        spellings: &["camelcase", "camel"],
    },
    NameEntry {
        style: CaseStyle::Pascal,
        display: "PascalCase",
        spellings: &["pascalcase", "pascal"],
    },
    NameEntry {
        style: CaseStyle::Snake,
        display: "SnakeCase",
        spellings: &["snakecase", "snake"],
    },
    NameEntry {
        style: CaseStyle::ScreamingSnake,
        display: "ScreamingSnakeCase",
        spellings: &["screamingsnakecase", "screamingsnake"],
    },
    NameEntry {
        style: CaseStyle::Kebab,
        display: "KebabCase",
        spellings: &["kebabcase", "kebab"],
    },
    NameEntry {
        style: CaseStyle::ScreamingKebab,
        display: "ScreamingKebabCase",
        spellings: &["screamingkebabcase", "screamingkebab"],
    },
    NameEntry {
        style: CaseStyle::Train,
        display: "TrainCase",
        spellings: &["traincase", "train"],
    },
    NameEntry {
        style: CaseStyle::Title,
        display: "TitleCase",
        spellings: &["titlecase", "title"],
    },
    NameEntry {
        style: CaseStyle::Lower,
        display: "LowerCase",
        spellings: &["lowercase", "lower"],
    },
    NameEntry {
        style: CaseStyle::Upper,
        display: "UpperCase",
        spellings: &["uppercase", "upper"],
    },
];

/// Spelling of the unset marker. Prefixes of it never select a style, so
/// `u` is rejected instead of picking `UpperCase`.
const UNSET_MARKER: &str = "unknown";

/// Lowercase and drop the separators people put between name words.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl CaseStyle {
    /// Every style, in name table order.
    pub fn all() -> impl Iterator<Item = CaseStyle> {
        NAME_TABLE.iter().map(|entry| entry.style)
    }

    /// Resolve a user supplied style name.
    ///
    /// An exact spelling always wins. A prefix of `unknown` is rejected.
    /// Otherwise the name must be a prefix of the spellings of exactly one
    /// style.
    pub fn resolve(name: &str) -> Result<CaseStyle, FieldcaseError> {
        let wanted = normalize(name);
        if wanted.is_empty() {
            return Err(FieldcaseError::UnknownCase(name.to_string()));
        }

        if let Some(entry) = NAME_TABLE
            .iter()
            .find(|entry| entry.spellings.contains(&wanted.as_str()))
        {
            return Ok(entry.style);
        }

        if UNSET_MARKER.starts_with(&wanted) {
            return Err(FieldcaseError::UnknownCase(name.to_string()));
        }

        let candidates: Vec<&NameEntry> = NAME_TABLE
            .iter()
            .filter(|entry| entry.spellings.iter().any(|s| s.starts_with(&wanted)))
            .collect();

        match candidates.as_slice() {
            [] => Err(FieldcaseError::UnknownCase(name.to_string())),
            [only] => Ok(only.style),
            many => Err(FieldcaseError::AmbiguousCase {
                name: name.to_string(),
                candidates: many.iter().map(|entry| entry.display).collect(),
            }),
        }
    }

    /// The display name, e.g. `KebabCase`.
    pub fn display_name(self) -> &'static str {
        NAME_TABLE
            .iter()
            .find(|entry| entry.style == self)
            .map(|entry| entry.display)
            .unwrap_or("unknown")
    }

    fn as_convert_case(self) -> Case {
        match self {
            CaseStyle::Camel => Case::Camel,
            CaseStyle::Pascal => Case::Pascal,
            CaseStyle::Snake => Case::Snake,
            CaseStyle::ScreamingSnake => Case::ScreamingSnake,
            CaseStyle::Kebab => Case::Kebab,
            CaseStyle::ScreamingKebab => Case::Cobol,
            CaseStyle::Train => Case::Train,
            CaseStyle::Title => Case::Title,
            CaseStyle::Lower => Case::Lower,
            CaseStyle::Upper => Case::Upper,
        }
    }

    /// Convert `text` into this style.
    pub fn convert(self, text: &str) -> String {
        text.to_case(self.as_convert_case())
    }
}

impl FieldCaser for CaseStyle {
    fn apply(&self, field: &str) -> Result<String, CaseError> {
        Ok(self.convert(field))
    }

    fn name(&self) -> &str {
        self.display_name()
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for CaseStyle {
    type Err = FieldcaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseStyle::resolve(s)
    }
}
