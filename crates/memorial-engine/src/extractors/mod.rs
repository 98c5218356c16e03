//! Typed fact extraction on top of the pattern library.
//!
//! Every function here is total: any match shape, including missing optional
//! capture groups, resolves to `Some`/`None` (or an empty list), never a
//! panic.

pub mod facts;
pub mod numeric;
