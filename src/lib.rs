//! Character-level code maps for C-family and Java sources.
//!
//! Every character of a file is tagged as code, blank, comment, doc comment
//! or commented-out code; the tags feed line-of-code metrics over an optional
//! line window.
//!
//! ```
//! use locmap::loc::{LineWindow, measure};
//! use locmap::map::{Dialect, scan};
//!
//! let lines = ["int a;", "", "// a++;"];
//! let map = scan(Dialect::C, lines);
//! let result = measure(&map, &lines, LineWindow::all());
//! assert_eq!(result.loc, 1);
//! assert_eq!(result.blank, 1);
//! assert_eq!(result.commented_out_lines, 1);
//! ```

pub mod config;
pub mod error;
pub mod loc;
pub mod map;
pub mod source;
pub mod walk;

mod report_helpers;

pub use error::{Error, Result};
