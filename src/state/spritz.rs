//! The Spritz permutation state.
//!
//! Spritz is a sponge-like construction over an RC4-style permutation,
//! see Rivest and Schuldt, <https://people.csail.mit.edu/rivest/pubs/RS14.pdf>.
//! Data is absorbed by swapping entries of the permutation, and output is dripped
//! from it once the pending absorptions are shuffled in:
//!
//! ```text
//! absorb(x); absorb(y) = absorb(x || y);
//! squeeze(1); squeeze(1); squeeze(1) = squeeze(3);
//! ```
use zeroize::ZeroizeOnDrop;

use super::{Unit, N};
use crate::errors::{SpritzError, SpritzResult};

/// The permutation array `s` together with the registers `i, j, k, w, z, a`.
///
/// The array always holds a permutation of `0..n`: it is only ever modified by swaps.
/// The stride `w` is always odd and `n` is a power of two, so that `gcd(w, n) = 1`.
#[derive(Clone, ZeroizeOnDrop)]
pub struct SpritzState<U: Unit = u8> {
    #[zeroize(skip)]
    n: usize,
    s: Vec<U>,
    i: usize,
    j: usize,
    k: usize,
    w: usize,
    z: usize,
    /// Nibbles absorbed since the last shuffle.
    a: usize,
}

impl<U: Unit> SpritzState<U> {
    /// Creates a freshly initialized state of size `n`.
    ///
    /// `n` must be a power of two, at least 16, and at most [`Unit::MAX_STATE`].
    pub fn new(n: usize) -> SpritzResult<Self> {
        if n < 16 || !n.is_power_of_two() || n > U::MAX_STATE {
            return Err(SpritzError::InvalidStateSize(n));
        }
        log::debug!("initializing spritz state of size {}", n);

        Ok(Self {
            n,
            s: (0..n).map(U::from_index).collect(),
            i: 0,
            j: 0,
            k: 0,
            w: 1,
            z: 0,
            a: 0,
        })
    }

    /// Resets the state to the identity permutation, keeping its size.
    pub fn initialize(&mut self) {
        for (index, x) in self.s.iter_mut().enumerate() {
            *x = U::from_index(index);
        }
        self.i = 0;
        self.j = 0;
        self.k = 0;
        self.w = 1;
        self.z = 0;
        self.a = 0;
    }

    /// The size `n` of the permutation.
    pub fn size(&self) -> usize {
        self.n
    }

    /// The number of nibbles absorbed and not yet shuffled in.
    pub fn pending(&self) -> usize {
        self.a
    }

    /// A read-only view of the permutation array.
    pub fn permutation(&self) -> &[U] {
        &self.s
    }

    #[inline(always)]
    fn at(&self, index: usize) -> usize {
        self.s[index].to_index()
    }

    pub(crate) fn update(&mut self) {
        let n = self.n;
        self.i = (self.i + self.w) % n;
        let y = (self.j + self.at(self.i)) % n;
        self.j = (self.k + self.at(y)) % n;
        self.k = (self.i + self.k + self.at(self.j)) % n;
        self.s.swap(self.i, self.j);
    }

    /// Extracts one value without mixing, chaining through the previous output `z`.
    pub(crate) fn output(&mut self) -> U {
        let n = self.n;
        let y1 = (self.z + self.k) % n;
        let x1 = (self.i + self.at(y1)) % n;
        let y2 = (self.j + self.at(x1)) % n;
        self.z = self.at(y2);
        U::from_index(self.z)
    }

    /// A single compare-and-swap pass between mirrored positions, not a sort.
    pub(crate) fn crush(&mut self) {
        let n = self.n;
        for v in 0..n / 2 {
            let mirror = n - 1 - v;
            if self.s[v] > self.s[mirror] {
                self.s.swap(v, mirror);
            }
        }
    }

    pub(crate) fn whip(&mut self, rounds: usize) {
        for _ in 0..rounds {
            self.update();
        }
        // n is a power of two: w stays odd.
        self.w = (self.w + 2) % self.n;
    }

    pub(crate) fn shuffle(&mut self) {
        let rounds = 2 * self.n;
        self.whip(rounds);
        self.crush();
        self.whip(rounds);
        self.crush();
        self.whip(rounds);
        self.a = 0;
    }

    #[inline]
    fn shuffle_if_full(&mut self) {
        if self.a == self.n / 2 {
            log::trace!("absorption threshold reached, shuffling");
            self.shuffle();
        }
    }

    /// Absorbs a message boundary, distinct from every nibble.
    pub fn absorb_stop(&mut self) -> &mut Self {
        self.shuffle_if_full();
        self.a = (self.a + 1) % self.n;
        self
    }

    /// Absorbs a single nibble, `x < n / 16`.
    pub fn absorb_nibble(&mut self, x: usize) -> &mut Self {
        debug_assert!(x < self.n / 16);
        self.shuffle_if_full();
        let y = (self.n / 2 + x) % self.n;
        self.s.swap(self.a, y);
        self.a = (self.a + 1) % self.n;
        self
    }

    /// Absorbs a byte, low nibble first.
    pub fn absorb_value(&mut self, b: u8) -> &mut Self {
        let d = self.n / 16;
        let b = b as usize;
        self.absorb_nibble(b % d);
        self.absorb_nibble(b / d)
    }

    /// Absorbs a sequence of bytes, one at a time.
    pub fn absorb(&mut self, input: &[u8]) -> &mut Self {
        for &b in input {
            self.absorb_value(b);
        }
        self
    }

    /// Absorbs a key and shuffles it in, so that no output is released
    /// while absorptions are pending.
    pub fn key_setup(&mut self, key: &[u8]) -> &mut Self {
        self.absorb(key);
        if self.a > 0 {
            self.shuffle();
        }
        self
    }

    /// Produces a single output value.
    pub fn drip(&mut self) -> U {
        if self.a > 0 {
            self.shuffle();
        }
        self.update();
        self.output()
    }

    /// Fills `output` with successive drips.
    pub fn squeeze(&mut self, output: &mut [U]) -> &mut Self {
        if self.a > 0 {
            self.shuffle();
        }
        for x in output.iter_mut() {
            *x = self.drip();
        }
        self
    }

    /// Squeezes `count` values into a new vector.
    pub fn squeeze_vec(&mut self, count: usize) -> Vec<U> {
        let mut output = vec![U::default(); count];
        self.squeeze(&mut output);
        output
    }
}

impl Default for SpritzState<u8> {
    fn default() -> Self {
        let mut state = Self {
            n: N,
            s: vec![0; N],
            i: 0,
            j: 0,
            k: 0,
            w: 1,
            z: 0,
            a: 0,
        };
        state.initialize();
        state
    }
}

impl<U: Unit> core::fmt::Debug for SpritzState<U> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Ensure that the state isn't accidentally logged
        write!(f, "SpritzState(n = {})", self.n)
    }
}
