// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Non-owning, read-only views over contiguous runs of character data.
//!
//! A [`View`] is a pointer/length pair: it records where a run of character
//! units starts and how many units it covers, without copying or owning the
//! underlying buffer. Views let you slice, compare and search character data
//! with zero allocation; the borrow checker guarantees a view never outlives
//! the buffer it looks into.
//!
//! The unit type is generic over [`CodeUnit`], with aliases for the common
//! widths: [`StrView`] (`u8`), [`U16View`] and [`U32View`]. Units are opaque
//! values - there is no encoding awareness and no collation; a unit with
//! value zero is ordinary content unless you explicitly construct a view by
//! terminator scan.
//!
//! # Slicing
//!
//! [`substr()`][View::substr] carves out a sub-view and
//! [`remove_prefix()`][View::remove_prefix] /
//! [`remove_suffix()`][View::remove_suffix] shrink a view in place. None of
//! them touch the referenced data.
//!
//! ```
//! use charview::{NPOS, sv};
//!
//! let line = sv("  temperature = 23.5  ");
//!
//! // Trim the padding without copying anything.
//! let start = line.find_first_not_of(" ", 0);
//! let end = line.find_last_not_of(" ", NPOS);
//! let trimmed = line.substr(start, end - start + 1).unwrap();
//!
//! assert_eq!(trimmed, "temperature = 23.5");
//! ```
//!
//! # Searching
//!
//! Four search families operate on views: substring search
//! ([`find()`][View::find], [`rfind()`][View::rfind]) and character-set
//! search ([`find_first_of()`][View::find_first_of],
//! [`find_last_of()`][View::find_last_of] and their `not_of` counterparts),
//! each with
//! single-unit convenience forms. All of them report "no match" through the
//! reserved [`NPOS`] sentinel rather than an error:
//!
//! ```
//! use charview::{NPOS, StrView};
//!
//! let haystack = StrView::from("hello world");
//!
//! assert_eq!(haystack.find("world", 0), 6);
//! assert_eq!(haystack.rfind("o", NPOS), 7);
//! assert_eq!(haystack.find("planet", 0), NPOS);
//! ```
//!
//! # Comparison and affix tests
//!
//! Views order lexicographically, with length as the tiebreak when one is a
//! prefix of the other. Anything convertible to a view (slices, arrays, and
//! `&str` for byte views) can stand on either side of a comparison, and
//! [`starts_with()`][View::starts_with] / [`ends_with()`][View::ends_with]
//! test affixes:
//!
//! ```
//! use charview::sv;
//!
//! let path = sv("src/view.rs");
//!
//! assert!(path.starts_with("src/"));
//! assert!(path.ends_with(".rs"));
//! assert_eq!(path.substr(4, 4).unwrap(), "view");
//! assert!(sv("abc") < sv("abd"));
//! assert!(sv("ab") < sv("abc"));
//! ```
//!
//! # Error model
//!
//! Operations that take a starting position ([`at()`][View::at],
//! [`substr()`][View::substr], [`copy_to()`][View::copy_to] and the
//! range-taking comparisons) return an [`OutOfRangeError`] when the position
//! exceeds the view length - a recoverable condition callers can handle or
//! pre-validate. Contract violations (indexing past the end, reading the
//! front of an empty view, trimming more than the view holds) panic instead.
//!
//! ```
//! use charview::sv;
//!
//! let view = sv("abc");
//!
//! assert!(view.substr(5, 1).is_err());
//! assert_eq!(view.at(5).unwrap_err().position(), 5);
//! assert_eq!(view.substr(1, 10).unwrap(), "bc");
//! ```
//!
//! # Wide units
//!
//! Every operation works the same for `u16` and `u32` units:
//!
//! ```
//! use charview::U16View;
//!
//! let wide: &[u16] = &[104, 105, 104];
//! let view = U16View::from(wide);
//!
//! assert_eq!(view.find_unit(105, 0), 1);
//! assert!(view.starts_with(&[104][..]));
//! ```

mod affix;
mod code_unit;
mod compare;
mod display;
mod error;
mod search;
mod view;

pub use code_unit::CodeUnit;
pub use error::{OutOfRangeError, Result};
pub use search::NPOS;
pub use view::{StrView, U16View, U32View, View, sv};
