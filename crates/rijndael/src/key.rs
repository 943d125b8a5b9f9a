//! Key types for AES-128.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::block::{Block, BLOCK_SIZE};
use crate::error::{Error, Result};

/// Size of an AES-128 key in bytes.
pub const KEY_SIZE: usize = 16;

/// Number of rounds for a 128-bit key.
pub const NUM_ROUNDS: usize = 10;

/// Size of the full key schedule: one round key per round plus the initial one.
pub const EXPANDED_KEY_SIZE: usize = BLOCK_SIZE * (NUM_ROUNDS + 1);

/// AES-128 key wrapper. Wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Aes128Key(pub [u8; KEY_SIZE]);

impl From<[u8; KEY_SIZE]> for Aes128Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        Error::check_len("key", KEY_SIZE, value.len())?;
        let mut key = [0u8; KEY_SIZE];
        key.copy_from_slice(value);
        Ok(Self(key))
    }
}

impl fmt::Debug for Aes128Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Aes128Key(..)")
    }
}

/// Expanded round keys for AES-128. Wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys(pub [Block; NUM_ROUNDS + 1]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    ///
    /// # Panics
    ///
    /// Panics if `round` is greater than [`NUM_ROUNDS`].
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }

    /// Flattens the schedule into consecutive round keys.
    ///
    /// The copy is wiped when the returned guard is dropped.
    pub fn as_bytes(&self) -> Zeroizing<[u8; EXPANDED_KEY_SIZE]> {
        let mut out = Zeroizing::new([0u8; EXPANDED_KEY_SIZE]);
        for (chunk, round_key) in out.chunks_exact_mut(BLOCK_SIZE).zip(self.0.iter()) {
            chunk.copy_from_slice(round_key);
        }
        out
    }
}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundKeys")
            .field("rounds", &self.0.len())
            .finish_non_exhaustive()
    }
}
