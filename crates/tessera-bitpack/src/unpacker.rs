//! The decoding half of the codec.

use crate::error::PackError;
use crate::packable::Packable;

/// Unpacks a declared number of integers from one storage word.
///
/// The mirror of [`BitPacker`](crate::BitPacker): constructed from a packed
/// word and the slot count it was packed with, then drained with
/// [`pop`](Self::pop). Values come out in the order they were pushed; the
/// first value occupies the highest used bit field of the word.
///
/// ```
/// use tessera_bitpack::{BitPacker, BitUnpacker};
///
/// let mut packer = BitPacker::<i32>::new(3).unwrap();
/// for value in [-512, 7, 511] {
///     packer.push(value).unwrap();
/// }
///
/// let mut unpacker = BitUnpacker::new(packer.get().unwrap(), 3).unwrap();
/// assert_eq!(unpacker.pop(), Ok(-512));
/// assert_eq!(unpacker.pop(), Ok(7));
/// assert_eq!(unpacker.pop(), Ok(511));
/// ```
#[derive(Clone, Debug)]
pub struct BitUnpacker<W: Packable> {
    word: W,
    size: u32,
    pbits: u32,
    popped: u32,
}

impl<W: Packable> BitUnpacker<W> {
    /// Creates an unpacker reading `size` values out of `word`.
    ///
    /// # Errors
    ///
    /// Fails with [`PackError::SizeOverflow`] if `size` exceeds the bit
    /// width of `W`, and with [`PackError::NonZeroEmptyWord`] if `size` is
    /// zero but `word` is not: an empty session can only have produced a
    /// zero word.
    pub fn new(word: W, size: u32) -> Result<Self, PackError<W>> {
        if size > W::BITS {
            return Err(PackError::SizeOverflow {
                size,
                nbits: W::BITS,
            });
        }
        if size == 0 && word != W::zero() {
            return Err(PackError::NonZeroEmptyWord { word });
        }

        Ok(Self {
            word,
            size,
            pbits: if size == 0 { 0 } else { W::BITS / size },
            popped: 0,
        })
    }

    /// Extracts the next value.
    ///
    /// Slots are consumed first-pushed-first-popped. For signed storage the
    /// extracted bit pattern is sign-extended back to the full width.
    ///
    /// # Errors
    ///
    /// Fails with [`PackError::UnpackerEmpty`] once `size` values have been
    /// extracted.
    pub fn pop(&mut self) -> Result<W, PackError<W>> {
        if self.popped == self.size {
            return Err(PackError::UnpackerEmpty { size: self.size });
        }

        let offset = self.pbits * (self.size - 1 - self.popped);
        let value = self
            .word
            .shr_logical(offset)
            .mask_low(self.pbits)
            .sign_extend(self.pbits);
        self.popped += 1;

        Ok(value)
    }

    /// Returns the declared slot count.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns how many values have been extracted so far.
    #[must_use]
    pub fn popped(&self) -> u32 {
        self.popped
    }

    /// Returns the width of one slot in bits.
    #[must_use]
    pub fn slot_bits(&self) -> u32 {
        self.pbits
    }
}
