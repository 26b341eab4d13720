//! Per-line field selection and casing.

use std::collections::BTreeSet;

use crate::case_style::{CaseStyle, FieldCaser};
use crate::config::Config;
use crate::error::{CaseError, FieldcaseError};

/// Splits a line on the delimiter, cases the targeted fields and rejoins.
///
/// Holds only borrowed, read-only state, so one transformer serves every
/// line of a run.
pub struct LineTransformer<'a, C: ?Sized = CaseStyle> {
    delimiter: &'a str,
    targets: &'a BTreeSet<usize>,
    caser: &'a C,
}

impl<'a> LineTransformer<'a> {
    /// A transformer using the style chosen in `config`.
    pub fn new(config: &'a Config) -> Self {
        Self::with_caser(config, &config.style)
    }
}

impl<'a, C: FieldCaser + ?Sized> LineTransformer<'a, C> {
    /// A transformer using the delimiter and targets of `config` with a
    /// different caser.
    pub fn with_caser(config: &'a Config, caser: &'a C) -> Self {
        Self {
            delimiter: &config.delimiter,
            targets: &config.targets,
            caser,
        }
    }

    /// The caser's display name.
    pub fn style_name(&self) -> &str {
        self.caser.name()
    }

    /// Transform one line. `line_number` is 1-based and only used for
    /// diagnostics.
    ///
    /// Targets past the end of the line are ignored. The result always has
    /// as many fields as the input.
    pub fn transform(&self, line_number: usize, line: &str) -> Result<String, FieldcaseError> {
        let bytes = self.transform_bytes(line_number, line.as_bytes())?;
        // Fields of a str split on a str delimiter are whole UTF-8 sequences.
        Ok(String::from_utf8(bytes)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
    }

    /// Transform one raw line.
    ///
    /// Only targeted fields need to be UTF-8; every other field is copied
    /// through byte for byte. A targeted field that is not UTF-8 fails like
    /// any other casing error.
    pub fn transform_bytes(
        &self,
        line_number: usize,
        line: &[u8],
    ) -> Result<Vec<u8>, FieldcaseError> {
        let delimiter = self.delimiter.as_bytes();
        let mut out = Vec::with_capacity(line.len());

        for (index, field) in split_fields(line, delimiter).into_iter().enumerate() {
            if index > 0 {
                out.extend_from_slice(delimiter);
            }

            let column = index + 1;
            if !self.targets.contains(&column) {
                out.extend_from_slice(field);
                continue;
            }

            let cased = match std::str::from_utf8(field) {
                Ok(text) => self.caser.apply(text),
                Err(_) => Err(CaseError::InvalidUtf8),
            }
            .map_err(|source| FieldcaseError::Transform {
                line: line_number,
                column,
                word: String::from_utf8_lossy(field).into_owned(),
                style: self.caser.name().to_string(),
                source,
            })?;
            out.extend_from_slice(cased.as_bytes());
        }

        Ok(out)
    }
}

/// Split on every non-overlapping occurrence of `delimiter`, left to right,
/// the way `str::split` does. `delimiter` must not be empty.
fn split_fields<'l>(line: &'l [u8], delimiter: &[u8]) -> Vec<&'l [u8]> {
    let mut fields = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while pos + delimiter.len() <= line.len() {
        if line[pos..].starts_with(delimiter) {
            fields.push(&line[start..pos]);
            pos += delimiter.len();
            start = pos;
        } else {
            pos += 1;
        }
    }

    fields.push(&line[start..]);
    fields
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Uppercases every field except those equal to `poison`.
    pub(crate) struct PoisonCaser {
        pub poison: &'static str,
    }

    impl FieldCaser for PoisonCaser {
        fn apply(&self, field: &str) -> Result<String, CaseError> {
            if field == self.poison {
                Err(CaseError::Unsupported {
                    word: field.to_string(),
                    style: "PoisonCase".to_string(),
                })
            } else {
                Ok(field.to_uppercase())
            }
        }

        fn name(&self) -> &str {
            "PoisonCase"
        }
    }

    fn config(delimiter: &str, targets: &[usize], style: CaseStyle) -> Config {
        Config::new(delimiter, targets.iter().copied(), style).unwrap()
    }

    #[test]
    fn test_kebab_second_field() {
        let config = config(":", &[2], CaseStyle::Kebab);
        let out = LineTransformer::new(&config)
            .transform(1, "user:FirstName:42")
            .unwrap();
        assert_eq!(out, "user:first-name:42");
    }

    #[test]
    fn test_upper_first_and_third() {
        let config = config(",", &[1, 3], CaseStyle::Upper);
        let out = LineTransformer::new(&config)
            .transform(1, "alpha,beta,gamma")
            .unwrap();
        assert_eq!(out, "ALPHA,beta,GAMMA");
    }

    #[test]
    fn test_target_past_end_is_ignored() {
        let config = config(":", &[5], CaseStyle::Snake);
        let out = LineTransformer::new(&config).transform(1, "a:b").unwrap();
        assert_eq!(out, "a:b");
    }

    #[test]
    fn test_line_without_delimiter_is_one_field() {
        let config = config(":", &[1], CaseStyle::Snake);
        let out = LineTransformer::new(&config)
            .transform(1, "HelloWorld")
            .unwrap();
        assert_eq!(out, "hello_world");
    }

    #[test]
    fn test_empty_line() {
        let config = config(":", &[1, 2], CaseStyle::Pascal);
        let out = LineTransformer::new(&config).transform(1, "").unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn test_empty_fields_preserved() {
        let config = config(":", &[1, 2, 3], CaseStyle::Camel);
        let out = LineTransformer::new(&config)
            .transform(1, "::some_name:")
            .unwrap();
        assert_eq!(out, "::someName:");
    }

    #[test]
    fn test_multi_char_delimiter() {
        let config = config("::", &[2], CaseStyle::ScreamingSnake);
        let out = LineTransformer::new(&config)
            .transform(1, "a::userId::c:d")
            .unwrap();
        assert_eq!(out, "a::USER_ID::c:d");
    }

    #[test]
    fn test_failure_reports_location() {
        let config = config(",", &[1, 3], CaseStyle::Upper);
        let caser = PoisonCaser { poison: "bad" };
        let transformer = LineTransformer::with_caser(&config, &caser);
        assert_eq!(transformer.style_name(), "PoisonCase");

        match transformer.transform(7, "ok,skip,bad") {
            Err(FieldcaseError::Transform {
                line,
                column,
                word,
                style,
                ..
            }) => {
                assert_eq!(line, 7);
                assert_eq!(column, 3);
                assert_eq!(word, "bad");
                assert_eq!(style, "PoisonCase");
            }
            other => panic!("Expected Transform error, got {other:?}"),
        }
    }

    #[test]
    fn test_untargeted_poison_is_not_touched() {
        let config = config(",", &[1], CaseStyle::Upper);
        let caser = PoisonCaser { poison: "bad" };
        let out = LineTransformer::with_caser(&config, &caser)
            .transform(1, "ok,bad")
            .unwrap();
        assert_eq!(out, "OK,bad");
    }

    // --- Raw bytes ---

    #[test]
    fn test_split_fields_matches_str_split() {
        let cases = [
            ("a::b:::c", "::"),
            ("", ":"),
            (":", ":"),
            ("abc", ","),
            ("a,b,", ","),
        ];
        for (line, delimiter) in cases {
            let expected: Vec<&[u8]> = line.split(delimiter).map(|f| f.as_bytes()).collect();
            assert_eq!(split_fields(line.as_bytes(), delimiter.as_bytes()), expected);
        }
    }

    #[test]
    fn test_untargeted_non_utf8_passes_through() {
        let config = config(":", &[1], CaseStyle::Upper);
        let out = LineTransformer::new(&config)
            .transform_bytes(1, b"abc:caf\xe9")
            .unwrap();
        assert_eq!(out, b"ABC:caf\xe9");
    }

    #[test]
    fn test_targeted_non_utf8_is_transform_error() {
        let config = config(":", &[2], CaseStyle::Upper);
        match LineTransformer::new(&config).transform_bytes(4, b"abc:caf\xe9") {
            Err(FieldcaseError::Transform {
                line,
                column,
                word,
                style,
                source: CaseError::InvalidUtf8,
            }) => {
                assert_eq!(line, 4);
                assert_eq!(column, 2);
                assert_eq!(word, "caf\u{FFFD}");
                assert_eq!(style, "UpperCase");
            }
            other => panic!("Expected Transform error, got {other:?}"),
        }
    }

    #[test]
    fn test_multi_byte_delimiter_in_bytes() {
        let config = config("\u{2192}", &[2], CaseStyle::Snake);
        let out = LineTransformer::new(&config)
            .transform(1, "a\u{2192}SomeName\u{2192}\u{e9}t\u{e9}")
            .unwrap();
        assert_eq!(out, "a\u{2192}some_name\u{2192}\u{e9}t\u{e9}");
    }

    fn any_style() -> impl Strategy<Value = CaseStyle> {
        proptest::sample::select(CaseStyle::all().collect::<Vec<_>>())
    }

    proptest! {
        #[test]
        fn prop_field_count_preserved(
            delimiter in prop::sample::select(vec![":", ",", "|", "::"]),
            fields in prop::collection::vec("[a-zA-Z0-9_ -]{0,12}", 1..8),
            targets in prop::collection::btree_set(1usize..10, 1..5),
            style in any_style(),
        ) {
            let line = fields.join(delimiter);
            let config = Config::new(delimiter, targets, style).unwrap();
            let out = LineTransformer::new(&config).transform(1, &line).unwrap();
            prop_assert_eq!(
                out.split(delimiter).count(),
                line.split(delimiter).count()
            );
        }

        #[test]
        fn prop_untargeted_fields_unchanged(
            fields in prop::collection::vec("[a-zA-Z_]{0,12}", 2..6),
            style in any_style(),
        ) {
            let line = fields.join(",");
            let config = Config::new(",", [1usize], style).unwrap();
            let out = LineTransformer::new(&config).transform(1, &line).unwrap();
            let before: Vec<&str> = line.split(',').skip(1).collect();
            let after: Vec<&str> = out.split(',').skip(1).collect();
            prop_assert_eq!(before, after);
        }
    }
}
