use rand::{RngCore, SeedableRng};

use crate::errors::{SpritzError, SpritzResult};
use crate::state::SpritzState;

/// Spritz as a keyed stream cipher.
///
/// The keystream is a single continuous sequence: encrypting in chunks
/// is the same as encrypting the concatenation at once.
///
/// ```
/// use spritz::SpritzStream;
///
/// let mut encrypt = SpritzStream::new(b"key");
/// let mut ciphertext = [0u8; 5];
/// encrypt.transform(&mut ciphertext, b"hello").unwrap();
///
/// let mut decrypt = SpritzStream::new(b"key");
/// decrypt.apply_keystream(&mut ciphertext);
/// assert_eq!(&ciphertext, b"hello");
/// ```
pub struct SpritzStream {
    state: SpritzState,
}

impl SpritzStream {
    /// Creates a new cipher from a key of any length.
    pub fn new(key: &[u8]) -> Self {
        let mut state = SpritzState::default();
        state.key_setup(key);
        Self { state }
    }

    /// Returns the next keystream byte.
    pub fn next_byte(&mut self) -> u8 {
        self.state.drip()
    }

    /// Writes `src` XOR keystream into `dst`.
    ///
    /// `dst` must be at least as long as `src`, otherwise nothing is written
    /// and the keystream is not advanced.
    pub fn transform(&mut self, dst: &mut [u8], src: &[u8]) -> SpritzResult<()> {
        if dst.len() < src.len() {
            return Err(SpritzError::BufferTooShort {
                needed: src.len(),
                got: dst.len(),
            });
        }
        for (out, x) in dst.iter_mut().zip(src) {
            *out = x ^ self.state.drip();
        }
        Ok(())
    }

    /// XORs the keystream into `buf` in place.
    pub fn apply_keystream(&mut self, buf: &mut [u8]) {
        for x in buf.iter_mut() {
            *x ^= self.state.drip();
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &SpritzState {
        &self.state
    }
}

impl RngCore for SpritzStream {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(buf.as_mut());
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(buf.as_mut());
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.state.squeeze(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SpritzStream {
    type Seed = [u8; 32];

    /// The seed is used as the key.
    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(&seed)
    }
}

impl core::fmt::Debug for SpritzStream {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "SpritzStream({:?})", self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keystream(key: &[u8], len: usize) -> Vec<u8> {
        let mut stream = SpritzStream::new(key);
        let mut out = vec![0u8; len];
        stream.transform(&mut out, &vec![0u8; len]).unwrap();
        out
    }

    #[test]
    fn test_known_keystreams() {
        assert_eq!(hex::encode(keystream(b"ABC", 8)), "779a8e01f9e9cbc0");
        assert_eq!(hex::encode(keystream(b"spam", 8)), "f0609a1df143cebf");
        assert_eq!(hex::encode(keystream(b"arcfour", 8)), "1afa8b5ee337dbc7");
    }

    #[test]
    fn test_empty_key_reveals_keystream() {
        let mut stream = SpritzStream::new(&[]);
        let mut dst = [0xffu8; 4];
        stream.transform(&mut dst, &[0, 0, 0, 0]).unwrap();
        assert_eq!(dst, [0x04, 0x14, 0x45, 0xce]);
        assert_eq!(keystream(&[], 4), dst);
    }

    #[test]
    fn test_short_destination_is_rejected() {
        let mut stream = SpritzStream::new(b"ABC");
        let mut dst = [0u8; 2];
        assert_eq!(
            stream.transform(&mut dst, &[0u8; 3]),
            Err(SpritzError::BufferTooShort { needed: 3, got: 2 })
        );
        assert_eq!(dst, [0, 0]);
        // the keystream did not move
        assert_eq!(stream.next_byte(), 0x77);
    }

    #[test]
    fn test_longer_destination_is_untouched_past_source() {
        let mut stream = SpritzStream::new(b"ABC");
        let mut dst = [0xaau8; 4];
        stream.transform(&mut dst, &[0, 0]).unwrap();
        assert_eq!(dst, [0x77, 0x9a, 0xaa, 0xaa]);
    }

    #[test]
    fn test_apply_keystream_matches_transform() {
        let plaintext = b"yellow submarine";
        let mut expected = [0u8; 16];
        SpritzStream::new(b"key")
            .transform(&mut expected, plaintext)
            .unwrap();

        let mut buf = *plaintext;
        SpritzStream::new(b"key").apply_keystream(&mut buf);
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_rng_is_keystream() {
        let mut rng = SpritzStream::from_seed([7u8; 32]);
        let mut control = SpritzStream::new(&[7u8; 32]);

        let mut bytes = [0u8; 4];
        control.apply_keystream(&mut bytes);
        assert_eq!(rng.next_u32(), u32::from_le_bytes(bytes));

        let mut bytes = [0u8; 8];
        control.apply_keystream(&mut bytes);
        assert_eq!(rng.next_u64(), u64::from_le_bytes(bytes));
    }
}
