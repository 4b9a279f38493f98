//! This crate is a small library of validated primitive values: fixed-width integers, floats,
//! heximal and decimal strings, bytes, times and a few other things that are usually passed around
//! as bare numbers or strings.
//!
//! # Purpose
//! A `u64` can't tell you whether it's a count of bytes, a 53-bit value that will survive a trip
//! through a JSON number or a positive id that must never be zero. The types here wrap a single
//! value each and can only be built through named factories which check the value first, so
//! holding an instance is proof that the value is in range.
//!
//! # Method
//! All integer types are aliases of one generic [`Int`](num::Int), configured by a marker type that
//! implements [`Bounds`](num::Bounds). The marker holds the storage type, the width, the floor and
//! the exact text of every failure message, so each alias behaves exactly like a hand-written type
//! without repeating the same code nine times. The 256-bit types are backed by `num-bigint`.
//!
//! # Error Handling
//! There are two kinds of failure:
//! - Bad input is recoverable. Every factory returns a [`Result`](result::Result) and never panics.
//!   The error carries an exact, stable message (such as `"overflow unsigned integer 8 bits"`)
//!   so that callers and tests can compare errors by equality.
//! - Misusing a valid value is a bug. Arithmetic that leaves the range of its type, division by
//!   zero and [`open`](result::Open::open)ing an error all panic with the same kind of message.
//!
//! The errors are structs implementing [`Error`](std::error::Error), composed into a single enum
//! for static dispatch.
//!
//! # Dependencies
//! Big integers come from `num-bigint` and the numeric traits that tie the storage types together
//! from `num-traits`. The `size` feature uses `regex` to parse sizes and the `uri` feature uses
//! `url` to parse URLs. Like everything else I write, this crate also depends on some derive macros
//! because they remove the need for some very repetitive programming.
//!
//! # Features
//! The numeric core is always available. Each of the peripheral modules has a feature of the same
//! name, all of which are enabled by `peripheral-all` (the default).
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod formatter;
pub mod num;
pub mod result;
pub mod validator;

#[cfg(feature = "byte")]
pub mod byte;
#[cfg(feature = "mapping")]
pub mod mapping;
#[cfg(feature = "size")]
pub mod size;
#[cfg(feature = "text")]
pub mod text;
#[cfg(feature = "time")]
pub mod time;
#[cfg(feature = "uri")]
pub mod uri;

pub(crate) mod util;
