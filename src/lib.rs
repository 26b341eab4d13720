//! # fieldcase
//!
//! A line-oriented filter that rewrites selected fields of delimited text
//! into a casing style.
//!
//! ## Overview
//!
//! Every input line is handled on its own:
//! - **Split** on a literal delimiter (default `:`)
//! - **Case** the fields whose 1-based position is in the target set
//! - **Rejoin** with the same delimiter, keeping field count and order
//!
//! Targets past the end of a line are ignored for that line. Any error stops
//! the run; lines written before it stay written.
//!
//! ## Example
//!
//! ```
//! use fieldcase::{CaseStyle, Config, LineTransformer};
//!
//! let config = Config::new(":", [2], CaseStyle::Kebab).unwrap();
//! let transformer = LineTransformer::new(&config);
//!
//! let line = transformer.transform(1, "user:FirstName:42").unwrap();
//! assert_eq!(line, "user:first-name:42");
//! ```

pub mod case_style;
pub mod config;
pub mod error;
pub mod executor;
pub mod line;

pub use case_style::{CaseStyle, FieldCaser};
pub use config::{Cli, Config, DEFAULT_DELIMITER, case_list, normalize_args, usage};
pub use error::{CaseError, FieldcaseError};
pub use executor::execute;
pub use line::LineTransformer;
