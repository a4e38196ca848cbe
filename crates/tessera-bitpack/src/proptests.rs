//! Property-based and randomized tests for the packing codec.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::{BitPacker, BitUnpacker, Packable};

    fn round_trip<W: Packable>(values: &[W]) -> Vec<W> {
        let size = u32::try_from(values.len()).unwrap();
        let mut packer = BitPacker::<W>::new(size).unwrap();
        for &v in values {
            packer.push(v).unwrap();
        }
        let mut unpacker = BitUnpacker::new(packer.get().unwrap(), size).unwrap();
        (0..values.len()).map(|_| unpacker.pop().unwrap()).collect()
    }

    // Strategy for a session size and a vector of in-range unsigned values
    fn u64_session() -> impl Strategy<Value = Vec<u64>> {
        (1u32..=64).prop_flat_map(|size| {
            let max = u64::slot_max(64 / size);
            proptest::collection::vec(0..=max, size as usize)
        })
    }

    // Strategy for a session size and a vector of in-range signed values
    fn i64_session() -> impl Strategy<Value = Vec<i64>> {
        (1u32..=64).prop_flat_map(|size| {
            let pbits = 64 / size;
            proptest::collection::vec(
                i64::slot_min(pbits)..=i64::slot_max(pbits),
                size as usize,
            )
        })
    }

    fn u32_session() -> impl Strategy<Value = Vec<u32>> {
        (1u32..=32).prop_flat_map(|size| {
            let max = u32::slot_max(32 / size);
            proptest::collection::vec(0..=max, size as usize)
        })
    }

    fn i32_session() -> impl Strategy<Value = Vec<i32>> {
        (1u32..=32).prop_flat_map(|size| {
            let pbits = 32 / size;
            proptest::collection::vec(
                i32::slot_min(pbits)..=i32::slot_max(pbits),
                size as usize,
            )
        })
    }

    proptest! {
        #[test]
        fn u64_round_trip(values in u64_session()) {
            prop_assert_eq!(round_trip(&values), values);
        }

        #[test]
        fn i64_round_trip(values in i64_session()) {
            prop_assert_eq!(round_trip(&values), values);
        }

        #[test]
        fn u32_round_trip(values in u32_session()) {
            prop_assert_eq!(round_trip(&values), values);
        }

        #[test]
        fn i32_round_trip(values in i32_session()) {
            prop_assert_eq!(round_trip(&values), values);
        }

        #[test]
        fn unsigned_remainder_bits_stay_zero(values in u64_session()) {
            let size = u32::try_from(values.len()).unwrap();
            let pbits = 64 / size;
            let mut packer = BitPacker::<u64>::new(size).unwrap();
            for &v in &values {
                packer.push(v).unwrap();
            }
            let word = packer.get().unwrap();
            let used = pbits * size;
            if used < 64 {
                prop_assert_eq!(word >> used, 0);
            }
        }

        #[test]
        fn one_past_bound_is_rejected(size in 2u32..=32) {
            use crate::PackError;

            let pbits = 32 / size;
            let max = i32::slot_max(pbits);
            let min = i32::slot_min(pbits);

            let mut packer = BitPacker::<i32>::new(size).unwrap();
            prop_assert!(packer.push(max).is_ok());
            prop_assert!(packer.push(min).is_ok());

            let mut packer = BitPacker::<i32>::new(size).unwrap();
            prop_assert_eq!(
                packer.push(max + 1),
                Err(PackError::ValueOutOfRange { value: max + 1, min, max })
            );
            prop_assert_eq!(
                packer.push(min - 1),
                Err(PackError::ValueOutOfRange { value: min - 1, min, max })
            );
        }
    }

    /// Seeded random round trips across every session size, mirroring the
    /// per-width sweep the property tests cannot reach for 128-bit types.
    #[test]
    fn test_random_round_trips_u128() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for size in 1u32..=128 {
            let pbits = 128 / size;
            let max = u128::slot_max(pbits);
            for _ in 0..20 {
                let values: Vec<u128> =
                    (0..size).map(|_| rng.gen_range(0..=max)).collect();
                assert_eq!(round_trip(&values), values);
            }
        }
    }

    #[test]
    fn test_random_round_trips_i128() {
        let mut rng = ChaCha8Rng::seed_from_u64(43);

        for size in 1u32..=128 {
            let pbits = 128 / size;
            let (min, max) = (i128::slot_min(pbits), i128::slot_max(pbits));
            for _ in 0..20 {
                let values: Vec<i128> =
                    (0..size).map(|_| rng.gen_range(min..=max)).collect();
                assert_eq!(round_trip(&values), values);
            }
        }
    }

    #[test]
    fn test_random_round_trips_isize() {
        let mut rng = ChaCha8Rng::seed_from_u64(44);

        for size in 1u32..=isize::BITS {
            let pbits = isize::BITS / size;
            let (min, max) = (isize::slot_min(pbits), isize::slot_max(pbits));
            for _ in 0..20 {
                let values: Vec<isize> =
                    (0..size).map(|_| rng.gen_range(min..=max)).collect();
                assert_eq!(round_trip(&values), values);
            }
        }
    }
}
