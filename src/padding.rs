use log::trace;
use crate::consts::{BLOCK_LEN, LENGTH_FIELD_LEN};
use crate::error::HashError;

/// Bit length of a message of `len` bytes, rejected if it overflows the length field.
pub fn bit_len(len: usize) -> Result<u64, HashError> {
    u64::try_from(len)
        .ok()
        .and_then(|l| l.checked_mul(8))
        .ok_or(HashError::MessageTooLarge { len })
}

/// Length in bytes of the padded form of a `len`-byte message.
///
/// Always the smallest multiple of [`BLOCK_LEN`] that holds the message, the
/// `0x80` marker byte and the 8-byte length field.
pub fn padded_len(len: usize) -> Result<usize, HashError> {
    bit_len(len)?;
    let min = len
        .checked_add(1 + LENGTH_FIELD_LEN)
        .ok_or(HashError::MessageTooLarge { len })?;
    min.div_ceil(BLOCK_LEN)
        .checked_mul(BLOCK_LEN)
        .ok_or(HashError::MessageTooLarge { len })
}

/// Pads `message` out to a whole number of blocks: a single set bit, zero
/// fill, then the original bit length as a big-endian `u64`.
pub fn pad(message: &[u8]) -> Result<Vec<u8>, HashError> {
    let bits = bit_len(message.len())?;
    let total = padded_len(message.len())?;

    let mut m = Vec::with_capacity(total);
    m.extend_from_slice(message);
    m.push(0x80);
    m.resize(total - LENGTH_FIELD_LEN, 0);
    m.extend_from_slice(&bits.to_be_bytes());

    trace!("Padded {} bytes to {} ({} blocks)", message.len(), total, total / BLOCK_LEN);
    Ok(m)
}
