//! Spritz as a variable-output-length hash.
//!
//! Finalization runs on a copy of the state: [`SpritzHash::sum`] can be called
//! any number of times, and absorption can continue afterwards as if it never happened.
//!
//! ```text
//! write(x); write(y) = write(x || y);
//! write(x); sum(); write(y); sum() = write(x || y); sum();
//! ```
use std::io;

use digest::{HashMarker, InvalidBufferSize, InvalidOutputSize, Reset, Update};
use digest::{VariableOutput, VariableOutputReset};

use crate::errors::{SpritzError, SpritzResult};
use crate::state::SpritzState;

/// A streaming Spritz hash with a fixed digest size.
///
/// The digest size is absorbed as a single byte before squeezing,
/// so sizes that differ by a multiple of 256 share the same domain separator:
/// the digest of size `s + 256` starts with the digest of size `s`.
///
/// ```
/// use spritz::SpritzHash;
///
/// let mut hasher = SpritzHash::new(32);
/// hasher.write(b"hello ");
/// let partial = hasher.sum(&[]);
/// hasher.write(b"world");
///
/// assert_eq!(partial, spritz::hash(b"hello ", 32));
/// assert_eq!(hasher.sum(&[]), spritz::hash(b"hello world", 32));
/// ```
#[derive(Clone, Debug)]
pub struct SpritzHash {
    size: usize,
    state: SpritzState,
}

impl SpritzHash {
    /// Creates a new hash producing `size` bytes.
    pub fn new(size: usize) -> Self {
        if size > u8::MAX as usize {
            log::warn!(
                "digest size {} shares its domain separator with size {}",
                size,
                size as u8
            );
        }
        Self {
            size,
            state: SpritzState::default(),
        }
    }

    /// Absorbs `input`, returning the number of bytes consumed.
    pub fn write(&mut self, input: &[u8]) -> usize {
        self.state.absorb(input);
        input.len()
    }

    /// Returns `prefix` followed by the digest of everything written so far.
    pub fn sum(&self, prefix: &[u8]) -> Vec<u8> {
        let mut output = Vec::with_capacity(prefix.len() + self.size);
        output.extend_from_slice(prefix);
        output.resize(prefix.len() + self.size, 0);
        self.finalize_into(&mut output[prefix.len()..]);
        output
    }

    /// Writes the digest into the first [`SpritzHash::digest_size`] bytes of `output`.
    pub fn sum_into(&self, output: &mut [u8]) -> SpritzResult<()> {
        if output.len() < self.size {
            return Err(SpritzError::BufferTooShort {
                needed: self.size,
                got: output.len(),
            });
        }
        self.finalize_into(&mut output[..self.size]);
        Ok(())
    }

    /// Forgets everything written so far. The digest size is kept.
    pub fn reset(&mut self) {
        self.state.initialize();
    }

    /// Input is absorbed one byte at a time.
    pub fn block_size(&self) -> usize {
        1
    }

    /// The number of bytes produced by [`SpritzHash::sum`].
    pub fn digest_size(&self) -> usize {
        self.size
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &SpritzState {
        &self.state
    }

    fn finalize_into(&self, output: &mut [u8]) {
        debug_assert_eq!(output.len(), self.size);
        // the copy is zeroized when dropped
        let mut state = self.state.clone();
        state
            .absorb_stop()
            .absorb_value(self.size as u8)
            .squeeze(output);
    }
}

/// Hashes `input` in one go, producing `size` bytes.
pub fn hash(input: &[u8], size: usize) -> Vec<u8> {
    let mut hasher = SpritzHash::new(size);
    hasher.write(input);
    hasher.sum(&[])
}

impl io::Write for SpritzHash {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(SpritzHash::write(self, buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl HashMarker for SpritzHash {}

impl Update for SpritzHash {
    fn update(&mut self, data: &[u8]) {
        self.state.absorb(data);
    }
}

impl Reset for SpritzHash {
    fn reset(&mut self) {
        self.state.initialize();
    }
}

impl VariableOutput for SpritzHash {
    const MAX_OUTPUT_SIZE: usize = usize::MAX;

    fn new(output_size: usize) -> Result<Self, InvalidOutputSize> {
        Ok(SpritzHash::new(output_size))
    }

    fn output_size(&self) -> usize {
        self.size
    }

    fn finalize_variable(self, out: &mut [u8]) -> Result<(), InvalidBufferSize> {
        if out.len() != self.size {
            return Err(InvalidBufferSize);
        }
        self.finalize_into(out);
        Ok(())
    }
}

impl VariableOutputReset for SpritzHash {
    fn finalize_variable_reset(&mut self, out: &mut [u8]) -> Result<(), InvalidBufferSize> {
        if out.len() != self.size {
            return Err(InvalidBufferSize);
        }
        self.finalize_into(out);
        self.state.initialize();
        Ok(())
    }
}
