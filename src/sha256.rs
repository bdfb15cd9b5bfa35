use log::{debug, trace};
use subtle::ConstantTimeEq;
use crate::blocks::segment;
use crate::compress::HashState;
use crate::consts::DIGEST_LEN;
use crate::error::HashError;
use crate::padding::pad;
use crate::schedule::expand;

pub type Digest = [u8; DIGEST_LEN];

/// Computes the SHA-256 digest of `message`.
///
/// Every call starts from a fresh [`HashState`], so independent calls never
/// observe each other. The only error a caller can see is
/// [`HashError::MessageTooLarge`].
pub fn digest(message: &[u8]) -> Result<Digest, HashError> {
    let padded = pad(message)?;
    let blocks = segment(&padded)?;
    debug!("Starting digest (message len: {}, blocks: {})", message.len(), blocks.len());

    let mut state = HashState::new();
    for (n, block) in blocks.into_iter().enumerate() {
        let w = expand(block);
        state.compress(&w);
        trace!("Block {} compressed", n);
    }

    Ok(state.assemble())
}

/// Checks `message` against an expected digest without short-circuiting on
/// the first differing byte.
pub fn verify(message: &[u8], expected: &[u8]) -> Result<bool, HashError> {
    if expected.len() != DIGEST_LEN {
        debug!("Expected digest has wrong length: {}", expected.len());
        return Ok(false);
    }
    let actual = digest(message)?;
    Ok(digests_match(&actual, expected))
}

/// Constant-time comparison of an already computed digest. Slices of
/// different length never match.
pub fn digests_match(actual: &[u8], expected: &[u8]) -> bool {
    actual.ct_eq(expected).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_answers() {
        let cases = [
            ("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855", ""),
            ("ca978112ca1bbdcafac231b39a23dc4da786eff8147c4e72b9807785afee48bb", "a"),
            ("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad", "abc"),
            ("7f83b1657ff1fc53b92dc18148a1d65dfc2d4b1fa3d677284addd200126d9069", "Hello World!"),
            ("248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
             "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
            ("a144061c271f152da4d151034508fed1c138b8c976339de229c3bb6d4bbb4fce",
             "Discard medicine more than two years old."),
            ("8c87deb65505c3993eb24b7a150c4155e82eee6960cf0c3a8114ff736d69cad5",
             "There is no reason for any individual to have a computer in their home. -Ken Olsen, 1977"),
        ];

        for (tgt, msg) in cases {
            let d = digest(msg.as_bytes()).unwrap();
            assert_eq!(hex::encode(d), tgt, "case => {msg}");
        }
    }

    #[test]
    fn million_a() {
        let message = vec![b'a'; 1_000_000];
        assert_eq!(
            hex::encode(digest(&message).unwrap()),
            "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
        );
    }

    #[test]
    fn repeated_calls_agree() {
        let first = digest(b"Hello World!").unwrap();
        digest(b"something else entirely").unwrap();
        assert_eq!(digest(b"Hello World!").unwrap(), first);
    }

    #[test]
    fn verify_accepts_match_and_rejects_mismatch() {
        let expected = digest(b"abc").unwrap();
        assert!(verify(b"abc", &expected).unwrap());
        assert!(!verify(b"abd", &expected).unwrap());
        assert!(!verify(b"abc", &expected[..31]).unwrap());
        assert!(!verify(b"abc", &[]).unwrap());
    }

    #[test]
    fn digests_match_requires_equal_length_and_bytes() {
        let d = digest(b"abc").unwrap();
        let mut other = d;
        other[31] ^= 1;
        assert!(digests_match(&d, &d));
        assert!(!digests_match(&d, &other));
        assert!(!digests_match(&d, &d[..16]));
    }
}
