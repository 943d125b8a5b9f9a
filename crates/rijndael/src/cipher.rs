//! AES-128 key schedule and block encryption/decryption.

use log::trace;
use zeroize::Zeroizing;

use crate::block::{Block, BLOCK_SIZE};
use crate::error::{Error, Result};
use crate::key::{Aes128Key, RoundKeys, NUM_ROUNDS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::{sbox, RCON};

/// RotWord, SubWord and the round constant applied to the last word of a round key.
fn schedule_core(last_word: &[u8], round: usize) -> Zeroizing<[u8; 4]> {
    let mut out = Zeroizing::new([last_word[1], last_word[2], last_word[3], last_word[0]]);
    for byte in out.iter_mut() {
        *byte = sbox(*byte);
    }
    out[0] ^= RCON[round - 1];
    out
}

/// Expands a 128-bit key into 11 round keys.
///
/// Round key 0 is the cipher key itself; round key `i` is derived from
/// round key `i - 1` alone. The schedule is written directly into the
/// returned [`RoundKeys`], and scratch words are wiped.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut round_keys = RoundKeys([[0u8; BLOCK_SIZE]; NUM_ROUNDS + 1]);
    round_keys.0[0] = key.0;

    for round in 1..=NUM_ROUNDS {
        let (done, rest) = round_keys.0.split_at_mut(round);
        let prev = &done[round - 1];
        let current = &mut rest[0];
        let temp = schedule_core(&prev[12..], round);
        for j in 0..4 {
            current[j] = prev[j] ^ temp[j];
        }
        for j in 4..BLOCK_SIZE {
            current[j] = prev[j] ^ current[j - 4];
        }
    }

    trace!("expanded AES-128 key into {} round keys", round_keys.0.len());
    round_keys
}

/// SubBytes, ShiftRows, MixColumns (skipped in the final round), AddRoundKey.
#[inline]
fn cipher_round(state: &mut Block, round_key: &Block, last: bool) {
    sub_bytes(state);
    shift_rows(state);
    if !last {
        mix_columns(state);
    }
    add_round_key(state, round_key);
}

/// InvShiftRows, InvSubBytes, AddRoundKey, InvMixColumns (skipped in the
/// final round). The round key is removed before InvMixColumns.
#[inline]
fn inv_cipher_round(state: &mut Block, round_key: &Block, last: bool) {
    inv_shift_rows(state);
    inv_sub_bytes(state);
    add_round_key(state, round_key);
    if !last {
        inv_mix_columns(state);
    }
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block_with(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;
    add_round_key(&mut state, round_keys.get(0));
    for round in 1..=NUM_ROUNDS {
        cipher_round(&mut state, round_keys.get(round), round == NUM_ROUNDS);
    }
    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block_with(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;
    add_round_key(&mut state, round_keys.get(NUM_ROUNDS));
    for round in (0..NUM_ROUNDS).rev() {
        inv_cipher_round(&mut state, round_keys.get(round), round == 0);
    }
    state
}

/// Encrypts one block under `key`.
///
/// The key schedule is derived for this call only and wiped before returning.
pub fn encrypt_block(plaintext: &Block, key: &Aes128Key) -> Block {
    let round_keys = expand_key(key);
    encrypt_block_with(plaintext, &round_keys)
}

/// Decrypts one block under `key`.
///
/// The key schedule is derived for this call only and wiped before returning.
pub fn decrypt_block(ciphertext: &Block, key: &Aes128Key) -> Block {
    let round_keys = expand_key(key);
    decrypt_block_with(ciphertext, &round_keys)
}

fn block_from_slice(context: &'static str, bytes: &[u8]) -> Result<Block> {
    Error::check_len(context, BLOCK_SIZE, bytes.len())?;
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(bytes);
    Ok(block)
}

/// Length-checked [`encrypt_block`] over byte slices.
pub fn try_encrypt_block(plaintext: &[u8], key: &[u8]) -> Result<Block> {
    let block = block_from_slice("plaintext", plaintext)?;
    let key = Aes128Key::try_from(key)?;
    Ok(encrypt_block(&block, &key))
}

/// Length-checked [`decrypt_block`] over byte slices.
pub fn try_decrypt_block(ciphertext: &[u8], key: &[u8]) -> Result<Block> {
    let block = block_from_slice("ciphertext", ciphertext)?;
    let key = Aes128Key::try_from(key)?;
    Ok(decrypt_block(&block, &key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::EXPANDED_KEY_SIZE;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn bytes16(hex_str: &str) -> [u8; 16] {
        hex::decode(hex_str)
            .expect("valid hex")
            .try_into()
            .expect("16 bytes")
    }

    /// FIPS-197 Appendix C.1: (key, plaintext, ciphertext).
    fn appendix_c1() -> ([u8; 16], Block, Block) {
        (
            bytes16("000102030405060708090a0b0c0d0e0f"),
            bytes16("00112233445566778899aabbccddeeff"),
            bytes16("69c4e0d86a7b0430d8cdb78070b4c55a"),
        )
    }

    #[test]
    fn one_shot_entry_points_agree_with_appendix_c1() {
        let (key, plain, cipher) = appendix_c1();
        let key = Aes128Key::from(key);
        assert_eq!(encrypt_block(&plain, &key), cipher);
        assert_eq!(decrypt_block(&cipher, &key), plain);
    }

    #[test]
    fn final_rounds_skip_mix_columns() {
        let (key, plain, _) = appendix_c1();
        let rks = expand_key(&Aes128Key::from(key));

        let mut state = plain;
        add_round_key(&mut state, rks.get(0));
        for round in 1..NUM_ROUNDS {
            cipher_round(&mut state, rks.get(round), false);
        }
        let mut with_mix = state;
        cipher_round(&mut state, rks.get(NUM_ROUNDS), true);
        assert_eq!(state, encrypt_block_with(&plain, &rks));
        cipher_round(&mut with_mix, rks.get(NUM_ROUNDS), false);
        assert_ne!(with_mix, state);

        let mut back = state;
        inv_cipher_round(&mut back, rks.get(0), true);
        let mut expected = state;
        inv_shift_rows(&mut expected);
        inv_sub_bytes(&mut expected);
        add_round_key(&mut expected, rks.get(0));
        assert_eq!(back, expected);
    }

    #[test]
    fn schedule_core_matches_appendix_a_round_one() {
        // w[3] = 09cf4f3c -> RotWord cf4f3c09 -> SubWord 8a84eb01 -> ^ Rcon 8b84eb01.
        let temp: Zeroizing<[u8; 4]> = schedule_core(&[0x09, 0xcf, 0x4f, 0x3c], 1);
        assert_eq!(*temp, [0x8b, 0x84, 0xeb, 0x01]);
    }

    #[test]
    fn expand_key_matches_appendix_a() {
        let key = Aes128Key::from(bytes16("2b7e151628aed2a6abf7158809cf4f3c"));
        let rks = expand_key(&key);
        assert_eq!(rks.get(0), &key.0);
        assert_eq!(rks.get(1), &bytes16("a0fafe1788542cb123a339392a6c7605"));
        assert_eq!(rks.get(10), &bytes16("d014f9a8c9ee2589e13f0cc8b6630ca6"));
    }

    #[test]
    fn expand_key_is_deterministic() {
        let (key_bytes, _, _) = appendix_c1();
        let key = Aes128Key::from(key_bytes);
        let first = *expand_key(&key).as_bytes();
        let second = *expand_key(&key).as_bytes();
        assert_eq!(first.len(), EXPANDED_KEY_SIZE);
        assert_eq!(first, second);
        assert_eq!(first[..16], key_bytes);
    }

    #[test]
    fn zero_key_schedule_last_round() {
        let rks = expand_key(&Aes128Key::from([0u8; 16]));
        assert_eq!(rks.get(10), &bytes16("b4ef5bcb3e92e21123e951cf6f8f188e"));
    }

    #[test]
    fn cached_and_one_shot_paths_round_trip() {
        let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
        for _ in 0..100 {
            let mut key_bytes = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let key = Aes128Key::from(key_bytes);
            let rks = expand_key(&key);
            let ct = encrypt_block_with(&block, &rks);
            assert_eq!(ct, encrypt_block(&block, &key));
            assert_eq!(decrypt_block_with(&ct, &rks), block);
            assert_eq!(decrypt_block(&ct, &key), block);
        }
    }

    #[test]
    fn encrypt_leaves_input_untouched() {
        let (key, plain, _) = appendix_c1();
        let input = plain;
        let _ = encrypt_block(&input, &Aes128Key::from(key));
        assert_eq!(input, plain);
    }

    #[test]
    fn slice_entry_points_validate_lengths() {
        let (key, plain, cipher) = appendix_c1();
        assert_eq!(try_encrypt_block(&plain, &key), Ok(cipher));
        assert_eq!(try_decrypt_block(&cipher, &key), Ok(plain));

        assert_eq!(
            try_encrypt_block(&plain[..15], &key),
            Err(Error::InvalidLength {
                context: "plaintext",
                expected: 16,
                got: 15
            })
        );
        assert_eq!(
            try_decrypt_block(&[0u8; 32], &key),
            Err(Error::InvalidLength {
                context: "ciphertext",
                expected: 16,
                got: 32
            })
        );
        assert_eq!(
            try_encrypt_block(&plain, &[0u8; 24]),
            Err(Error::InvalidLength {
                context: "key",
                expected: 16,
                got: 24
            })
        );
    }
}
