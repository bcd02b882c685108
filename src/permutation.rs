//! Seeded permutation table for lattice hashing.
//!
//! The table is a shuffle of `0..=255` driven by a 32-bit linear congruential
//! generator. The generator state is threaded through the shuffle as a plain
//! local value and dropped once the table is built.

/// Number of entries in the permutation table (and the lattice period per axis)
pub const PERMUTATION_SIZE: usize = 256;

/// LCG multiplier (Numerical Recipes)
pub const LCG_MULTIPLIER: u32 = 1_664_525;

/// LCG increment (Numerical Recipes)
pub const LCG_INCREMENT: u32 = 1_013_904_223;

/// Advance the generator one step: `seed = a * seed + c (mod 2^32)`.
///
/// Returns the new seed, which is also the drawn value.
#[inline]
pub fn lcg_next(seed: u32) -> u32 {
    seed.wrapping_mul(LCG_MULTIPLIER)
        .wrapping_add(LCG_INCREMENT)
}

/// Immutable permutation of `0..=255`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    entries: [u8; PERMUTATION_SIZE],
}

impl PermutationTable {
    /// Look up `table[i mod 256]`.
    ///
    /// Any integer is accepted; the index is reduced by byte truncation so
    /// negative values wrap the same way positive ones do.
    #[inline(always)]
    pub fn hash(&self, i: i32) -> i32 {
        self.entries[(i & 0xFF) as usize] as i32
    }

    /// Raw table entries in order
    pub fn as_slice(&self) -> &[u8] {
        &self.entries
    }

    /// True when every value in `0..=255` appears exactly once
    pub fn is_bijective(&self) -> bool {
        let mut seen = [false; PERMUTATION_SIZE];
        for &value in &self.entries {
            if seen[value as usize] {
                return false;
            }
            seen[value as usize] = true;
        }
        true
    }
}

impl Default for PermutationTable {
    fn default() -> Self {
        build_permutation(0)
    }
}

/// Build the permutation table for `seed`.
///
/// Fisher-Yates over `i = 255..=1`: draw `r = lcg_next(seed)`, swap
/// positions `i` and `r % (i + 1)`. Pure function of the seed.
pub fn build_permutation(seed: u32) -> PermutationTable {
    let mut entries = [0u8; PERMUTATION_SIZE];
    for (i, entry) in entries.iter_mut().enumerate() {
        *entry = i as u8;
    }

    let mut state = seed;
    for i in (1..PERMUTATION_SIZE).rev() {
        state = lcg_next(state);
        let j = (state % (i as u32 + 1)) as usize;
        entries.swap(i, j);
    }

    log::debug!("Built permutation table (seed {})", seed);

    PermutationTable { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcg_wraps() {
        assert_eq!(lcg_next(0), LCG_INCREMENT);
        // u32::MAX * a + c wraps modulo 2^32
        assert_eq!(
            lcg_next(u32::MAX),
            LCG_INCREMENT.wrapping_sub(LCG_MULTIPLIER)
        );
    }

    #[test]
    fn test_seed_zero_regression() {
        let table = build_permutation(0);
        assert_eq!(
            &table.as_slice()[..16],
            &[2, 8, 16, 168, 0, 59, 140, 241, 28, 150, 32, 12, 53, 118, 184, 40]
        );
        assert_eq!(&table.as_slice()[252..], &[48, 165, 242, 95]);
    }

    #[test]
    fn test_default_is_seed_zero() {
        assert_eq!(PermutationTable::default(), build_permutation(0));
    }

    #[test]
    fn test_bijective() {
        for seed in [0, 1, 2, 42, 0xDEAD_BEEF, u32::MAX] {
            let table = build_permutation(seed);
            let mut sorted = table.as_slice().to_vec();
            sorted.sort_unstable();
            let expected: Vec<u8> = (0..=255).collect();
            assert_eq!(sorted, expected, "seed {} is not a permutation", seed);
            assert!(table.is_bijective());
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(build_permutation(1234), build_permutation(1234));
    }

    #[test]
    fn test_seed_sensitivity() {
        let one = build_permutation(1);
        let two = build_permutation(2);
        assert_eq!(&one.as_slice()[..4], &[55, 49, 229, 178]);
        assert_eq!(&two.as_slice()[..4], &[136, 114, 18, 230]);
        assert_ne!(one, two);
    }

    #[test]
    fn test_hash_wraps_negative_indices() {
        let table = build_permutation(7);
        assert_eq!(table.hash(-1), table.hash(255));
        assert_eq!(table.hash(256), table.hash(0));
        assert_eq!(table.hash(511), table.hash(255));
        assert_eq!(table.hash(-256), table.hash(0));
    }
}
