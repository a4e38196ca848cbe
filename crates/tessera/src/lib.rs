//! # Tessera
//!
//! The indexing and storage core of a sparse multivariate polynomial
//! engine.
//!
//! Sparse polynomial terms carry exponent vectors indexed against a named
//! variable set; different operands may be indexed against different sets,
//! and exponent vectors are packed into single machine words for compact
//! storage and fast comparison. Tessera provides the two primitives those
//! layers build on:
//!
//! - **Symbol sets** ([`SymbolSet`]): canonical, interned, ordered variable
//!   collections with O(1) equality, plus the alignment and intersection
//!   algebra for reconciling structures indexed against different sets
//! - **Bit packing** ([`BitPacker`], [`BitUnpacker`]): a range-checked
//!   fixed-width codec between bounded integer sequences and one storage
//!   word
//!
//! ## Quick Start
//!
//! ```
//! use tessera::prelude::*;
//! use tessera::symbols::algebra::merge;
//!
//! // Two operands over different variable sets.
//! let s1 = SymbolSet::new(["x", "z"]);
//! let s2 = SymbolSet::new(["y", "z"]);
//! let (union, ins1, _ins2) = merge(&s1, &s2);
//! assert_eq!(union, SymbolSet::new(["x", "y", "z"]));
//! assert_eq!(ins1.get(1), Some(&SymbolSet::new(["y"])));
//!
//! // Pack an exponent vector sized to the union.
//! let mut packer = BitPacker::<u64>::new(3).unwrap();
//! for exponent in [4, 0, 17] {
//!     packer.push(exponent).unwrap();
//! }
//! let word = packer.get().unwrap();
//!
//! let mut unpacker = BitUnpacker::new(word, 3).unwrap();
//! assert_eq!(unpacker.pop(), Ok(4));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use tessera_bitpack as bitpack;
pub use tessera_symbols as symbols;

pub use tessera_bitpack::{BitPacker, BitUnpacker, PackError, Packable};
pub use tessera_symbols::{SymbolIdx, SymbolIdxMap, SymbolIdxSet, SymbolMap, SymbolSet};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tessera_bitpack::{BitPacker, BitUnpacker, PackError};
    pub use tessera_symbols::{SymbolIdx, SymbolIdxMap, SymbolIdxSet, SymbolMap, SymbolSet};
}
