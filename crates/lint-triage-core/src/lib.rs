//! # lint-triage-core
//!
//! Groups the files named in a linter's text output by issue category.
//!
//! A report is read top to bottom. A line ending in `.ts`, `.tsx`, `.js` or
//! `.jsx` becomes the current file; later lines mentioning one of the tracked
//! rule ids attribute that file to the rule's [`Category`]. This crate
//! provides:
//!
//! - [`Category`] for the tracked rules and their markers
//! - [`Classifier`] for feeding a report line by line
//! - [`Classification`] for the sorted, de-duplicated result
//!
//! ## Example
//!
//! ```
//! use lint_triage_core::{classify_str, Category};
//!
//! let result = classify_str("src/App.tsx\nreact/no-unescaped-entities error\n");
//! assert_eq!(
//!     result.files(Category::UnescapedEntities).collect::<Vec<_>>(),
//!     ["src/App.tsx"]
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod category;
mod classifier;
mod types;

pub use category::{is_path_line, Category, PATH_SUFFIXES};
pub use classifier::{classify_file, classify_reader, classify_str, ClassifyError, Classifier};
pub use types::{Classification, LineKind};
