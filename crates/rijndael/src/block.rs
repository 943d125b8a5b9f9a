//! Block representation helpers.
//!
//! A block is the 4x4 AES state stored column by column: byte `i` sits in
//! row `i % 4`, column `i / 4`. Each run of four consecutive bytes is one
//! column.

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// Offset of the state byte at (`row`, `col`).
#[inline]
pub const fn state_index(row: usize, col: usize) -> usize {
    col * 4 + row
}

/// Copies column `col` out of the state.
#[inline]
pub fn column(state: &Block, col: usize) -> [u8; 4] {
    let idx = state_index(0, col);
    [state[idx], state[idx + 1], state[idx + 2], state[idx + 3]]
}

/// Writes column `col` back into the state.
#[inline]
pub fn set_column(state: &mut Block, col: usize, value: [u8; 4]) {
    let idx = state_index(0, col);
    state[idx..idx + 4].copy_from_slice(&value);
}

/// Sets `dst[i] ^= mask[i]` for every byte.
#[inline]
pub fn xor_in_place(dst: &mut Block, mask: &Block) {
    dst.iter_mut().zip(mask).for_each(|(byte, m)| *byte ^= m);
}
