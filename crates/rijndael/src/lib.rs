//! AES-128 (Rijndael) block cipher primitive.
//!
//! This crate follows FIPS-197 for 128-bit keys and provides:
//! - Arithmetic in GF(2^8) for the fixed MixColumns multipliers ([`gf`]).
//! - The forward and inverse round transformations.
//! - The AES-128 key schedule.
//! - Single-block encryption and decryption.
//!
//! It encrypts exactly one 16-byte block. Modes of operation, padding and
//! longer key sizes belong to callers.
//!
//! Every call runs the same ten rounds regardless of its input, but SubBytes
//! is a plain table lookup indexed by secret bytes, so cache timing can
//! still leak key material. Do not use this where an attacker can measure
//! timing.
//!
//! ```
//! use rijndael::{decrypt_block, encrypt_block, Aes128Key};
//!
//! let key = Aes128Key::from(*b"sixteen byte key");
//! let plaintext = *b"one block of txt";
//! let ciphertext = encrypt_block(&plaintext, &key);
//! assert_eq!(decrypt_block(&ciphertext, &key), plaintext);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
pub mod gf;
mod key;
mod round;
mod sbox;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::{
    decrypt_block, decrypt_block_with, encrypt_block, encrypt_block_with, expand_key,
    try_decrypt_block, try_encrypt_block,
};
pub use crate::error::{Error, Result};
pub use crate::key::{Aes128Key, RoundKeys, EXPANDED_KEY_SIZE, KEY_SIZE, NUM_ROUNDS};
pub use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
pub use crate::sbox::{inv_sbox, sbox, INV_SBOX, RCON, SBOX};
