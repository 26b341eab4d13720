//! Command-line parsing and the immutable run configuration.
//!
//! Flags may be written Go style with a single dash (`-delim , -targets 2
//! -case kebab`) or with the usual double dash. Single-dash long flags are
//! rewritten by [`normalize_args`] before clap sees them.

use std::collections::BTreeSet;
use std::ffi::OsString;

use clap::{CommandFactory, Parser};

use crate::case_style::CaseStyle;
use crate::error::FieldcaseError;

/// Delimiter used when `-delim` is not given.
pub const DEFAULT_DELIMITER: &str = ":";

/// Long flags that take a value.
const VALUE_FLAGS: &[&str] = &["delim", "targets", "case"];

/// Long flags that stand alone.
const SWITCH_FLAGS: &[&str] = &["verbose", "list-cases", "help", "version"];

/// Rewrite selected delimited fields of each stdin line into a case style.
#[derive(Parser, Debug)]
#[command(name = "fieldcase", version)]
pub struct Cli {
    /// Delimiter used to split and rejoin each line
    #[arg(long, default_value = DEFAULT_DELIMITER, allow_hyphen_values = true)]
    pub delim: String,

    /// 1-based field positions to transform (repeatable, or comma-separated)
    #[arg(
        long,
        value_name = "N",
        value_delimiter = ',',
        allow_negative_numbers = true
    )]
    pub targets: Vec<i64>,

    /// Case style (e.g. camel, snake, kebab); prefixes are accepted
    #[arg(long = "case", value_name = "STYLE")]
    pub case: Option<String>,

    /// Print the number of processed lines on stderr when done
    #[arg(short, long)]
    pub verbose: bool,

    /// List the available case styles and exit
    #[arg(long)]
    pub list_cases: bool,
}

/// Rewrite single-dash long flags (`-case`, `-targets=2`) as double-dash.
///
/// The argument following a value flag is left alone, so `-delim -case`
/// still uses `-case` as the delimiter. Everything after `--` is untouched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut iter = args.into_iter();

    if let Some(program) = iter.next() {
        out.push(program);
    }

    let mut expecting_value = false;
    let mut passthrough = false;

    for arg in iter {
        if passthrough || expecting_value {
            expecting_value = false;
            out.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };

        if text == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let Some(body) = text.strip_prefix("--").or_else(|| text.strip_prefix('-')) else {
            out.push(arg);
            continue;
        };
        let (flag, inline_value) = match body.split_once('=') {
            Some((flag, _)) => (flag, true),
            None => (body, false),
        };

        if VALUE_FLAGS.contains(&flag) {
            expecting_value = !inline_value;
        } else if !SWITCH_FLAGS.contains(&flag) {
            out.push(arg);
            continue;
        }

        if text.starts_with("--") {
            out.push(arg);
        } else {
            out.push(OsString::from(format!("-{text}")));
        }
    }

    out
}

/// The usage text printed on configuration errors.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

/// The list of style names printed when `-case` cannot be resolved.
pub fn case_list() -> String {
    let mut text = String::from("Available case styles:\n");
    for style in CaseStyle::all() {
        text.push('\t');
        text.push_str(style.display_name());
        text.push('\n');
    }
    text
}

/// Validated settings for one run. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub delimiter: String,
    pub targets: BTreeSet<usize>,
    pub style: CaseStyle,
}

impl Config {
    /// Build a config from already typed values.
    pub fn new<T>(
        delimiter: impl Into<String>,
        targets: T,
        style: CaseStyle,
    ) -> Result<Self, FieldcaseError>
    where
        T: IntoIterator<Item = usize>,
    {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return Err(FieldcaseError::EmptyDelimiter);
        }

        let mut set = BTreeSet::new();
        for target in targets {
            if target == 0 {
                return Err(FieldcaseError::InvalidTarget(0));
            }
            set.insert(target);
        }
        if set.is_empty() {
            return Err(FieldcaseError::NoTargets);
        }

        Ok(Self {
            delimiter,
            targets: set,
            style,
        })
    }

    /// Validate parsed flags.
    ///
    /// The case style is checked first so that a bad style name is always
    /// reported together with the list of styles.
    pub fn from_cli(cli: &Cli) -> Result<Self, FieldcaseError> {
        let style = match cli.case.as_deref() {
            Some(name) => CaseStyle::resolve(name)?,
            None => return Err(FieldcaseError::MissingCase),
        };

        if cli.delim.is_empty() {
            return Err(FieldcaseError::EmptyDelimiter);
        }

        let mut targets = Vec::with_capacity(cli.targets.len());
        for &target in &cli.targets {
            if target < 1 {
                return Err(FieldcaseError::InvalidTarget(target));
            }
            let target =
                usize::try_from(target).map_err(|_| FieldcaseError::InvalidTarget(target))?;
            targets.push(target);
        }

        Self::new(cli.delim.clone(), targets, style)
    }

    /// Whether the 1-based `column` is selected for casing.
    pub fn is_target(&self, column: usize) -> bool {
        self.targets.contains(&column)
    }
}
