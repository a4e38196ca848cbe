//! # tessera-bitpack
//!
//! Fixed-width packing of bounded integer sequences into single machine
//! words, for the Tessera sparse polynomial engine.
//!
//! This crate provides:
//! - [`BitPacker`], a stateful encoder filling a declared number of
//!   equally wide slots in one storage word
//! - [`BitUnpacker`], the matching decoder, extracting slots in push order
//! - [`Packable`], the sealed storage-type abstraction covering the signed
//!   and unsigned primitive integers from 16 to 128 bits
//!
//! Exponent vectors packed this way compare and hash as single integers;
//! the slot widths are typically derived from a symbol-set size.
//!
//! ## Guarantees
//!
//! - **Exact round trips**: any sequence of in-range values packs and
//!   unpacks to exactly itself, signed or unsigned
//! - **Strict validation**: slot overflow, out-of-range values and
//!   misconstructed sessions each surface as a distinct [`PackError`]
//!   variant, never a silent truncation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod packable;
pub mod packer;
pub mod unpacker;

#[cfg(test)]
mod proptests;

pub use error::PackError;
pub use packable::Packable;
pub use packer::BitPacker;
pub use unpacker::BitUnpacker;
