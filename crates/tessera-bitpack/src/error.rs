//! Error conditions reported by the packing codec.

use std::fmt::{Debug, Display};

use thiserror::Error;

/// Errors reported by [`BitPacker`](crate::BitPacker) and
/// [`BitUnpacker`](crate::BitUnpacker).
///
/// Every documented failure mode is a distinct variant: misuse of a
/// session (capacity and sequencing), out-of-range values, and invalid
/// construction parameters are never folded into a catch-all.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum PackError<W: Display + Debug> {
    /// The declared slot count exceeds the bit width of the storage type.
    #[error(
        "the number of values to pack ({size}) is larger than the bit width \
         ({nbits}) of the storage type"
    )]
    SizeOverflow {
        /// Declared slot count.
        size: u32,
        /// Bit width of the storage type.
        nbits: u32,
    },

    /// A value was pushed to a packer whose slots are all filled.
    #[error("cannot push any more values: all {size} slots have already been filled")]
    PackerFull {
        /// Declared slot count.
        size: u32,
    },

    /// The packed word was requested before every slot was filled.
    #[error("cannot fetch the packed word: only {pushed} of {size} values have been pushed")]
    Incomplete {
        /// Values pushed so far.
        pushed: u32,
        /// Declared slot count.
        size: u32,
    },

    /// The pushed value does not fit in the per-slot range.
    #[error("the value {value} is outside the allowed slot range [{min}, {max}]")]
    ValueOutOfRange {
        /// The offending value.
        value: W,
        /// Smallest value the slot accepts.
        min: W,
        /// Largest value the slot accepts.
        max: W,
    },

    /// A value was popped from an unpacker whose slots are all consumed.
    #[error("cannot unpack any more values: all {size} slots have already been consumed")]
    UnpackerEmpty {
        /// Declared slot count.
        size: u32,
    },

    /// A zero-slot unpacker was constructed from a non-zero word.
    #[error("only a zero word can be unpacked into zero slots, but {word} was provided")]
    NonZeroEmptyWord {
        /// The offending word.
        word: W,
    },
}
