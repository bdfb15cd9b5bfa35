use crate::consts::BLOCK_LEN;
use crate::error::HashError;

pub type Block = [u8; BLOCK_LEN];

/// Splits a padded message into 512-bit blocks, in order.
pub fn segment(padded: &[u8]) -> Result<Vec<&Block>, HashError> {
    if padded.len() % BLOCK_LEN != 0 {
        return Err(HashError::InvalidPaddingLength { len: padded.len() });
    }

    padded.chunks_exact(BLOCK_LEN)
        .map(|chunk| {
            <&Block>::try_from(chunk)
                .map_err(|_| HashError::InvalidPaddingLength { len: padded.len() })
        })
        .collect()
}
