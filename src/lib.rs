//!
//! **This crate is work in progress, not suitable for production.**
//! It makes no claim of resistance to side-channel attacks.
//!
//! Spritz is a sponge-like function built on an RC4-style permutation,
//! by Ron Rivest and Jacob Schuldt ([RS14]).
//! The same state machine is driven in two modes:
//!
//! - as a keyed stream cipher ([`SpritzStream`]), whose keystream is XOR-ed with the data,
//! - as a hash function with arbitrary output length ([`SpritzHash`]).
//!
//! # Overview
//!
//! The permutation state ([`SpritzState`]) holds a permutation of `0..n`
//! and six registers. Data is *absorbed* nibble by nibble by swapping entries of the permutation.
//! Output is *dripped* one value at a time; before the first drip, the pending absorptions
//! are *shuffled* in. Absorbing more than `n/2` nibbles in a row also forces a shuffle.
//!
//! ```
//! use spritz::SpritzStream;
//!
//! let mut cipher = SpritzStream::new(b"ABC");
//! let mut keystream = [0u8; 4];
//! cipher.transform(&mut keystream, &[0u8; 4]).unwrap();
//! assert_eq!(keystream, [0x77, 0x9a, 0x8e, 0x01]);
//! ```
//!
//! Hashing is streaming, and finalization does not disturb the accumulated state:
//!
//! ```
//! use spritz::SpritzHash;
//!
//! let mut hasher = SpritzHash::new(32);
//! hasher.write(b"arc");
//! hasher.write(b"four");
//! let digest = hasher.sum(&[]);
//! assert_eq!(digest, hasher.sum(&[]));
//! assert_eq!(&digest[..4], &[0xff, 0x8c, 0xf2, 0x68]);
//! ```
//!
//! # Batteries included
//! - [`SpritzHash`] implements the [`digest`] traits for variable output ([`digest::VariableOutput`])
//!   and [`std::io::Write`].
//! - [`SpritzStream`] implements [`rand::RngCore`] and [`rand::SeedableRng`], using the seed as key.
//!
//! (Note: the digest size is absorbed as a single byte,
//! so digest sizes that differ by a multiple of 256 share their domain separator).
//!
//! [RS14]: https://people.csail.mit.edu/rivest/pubs/RS14.pdf

/// Built-in errors.
mod errors;
/// Hash mode.
mod hash;
/// The permutation state.
pub mod state;
/// Stream cipher mode.
mod stream;

pub use errors::{SpritzError, SpritzResult};
pub use hash::{hash, SpritzHash};
pub use state::{SpritzState, Unit, N};
pub use stream::SpritzStream;
