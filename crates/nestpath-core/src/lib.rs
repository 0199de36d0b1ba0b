#![warn(missing_docs)]
#![forbid(unsafe_code)]
//! Core types and utilities for `nestpath`.
//!
//! This crate provides the vocabulary shared by graph implementations and the search engine:
//! vertex identifiers, per-search auxiliary tables, and the traits a graph implements to be
//! searchable.

mod error;
mod vertex;
mod vertex_map;
pub mod traits;

pub use crate::error::*;
pub use crate::vertex::*;
pub use crate::vertex_map::*;
