//! # tessera-symbols
//!
//! Canonical symbol sets for the Tessera sparse polynomial engine.
//!
//! This crate provides:
//! - A process-wide interning pool guaranteeing one shared representation
//!   per distinct symbol-set content
//! - [`SymbolSet`], a cheap copyable handle with O(1) identity equality
//! - Flat sorted maps keyed by symbol name or by position
//! - Index-alignment and intersection algorithms for reconciling
//!   differently-indexed sparse structures
//!
//! ## Design Principles
//!
//! - **Interning**: structurally equal sets share one canonical allocation,
//!   so equality never walks the contents
//! - **Flat Storage**: sorted vectors instead of tree maps for cache-friendly
//!   traversal
//! - **Single-Pass Merges**: every alignment/intersection runs one monotonic
//!   forward pass over its inputs

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algebra;
pub mod map;
pub mod set;
mod store;

#[cfg(test)]
mod proptests;

pub use map::{SymbolIdxMap, SymbolIdxSet, SymbolMap};
pub use set::SymbolSet;

/// Position of a symbol within a specific [`SymbolSet`]'s order.
///
/// An index is meaningful only relative to the set it was computed against.
pub type SymbolIdx = usize;
