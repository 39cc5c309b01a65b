/*
    Copyright Michael Lodder. All Rights Reserved.
    SPDX-License-Identifier: Apache-2.0
*/
//! Goldwasser-Micali cryptosystem (1982)
//! Probabilistic encryption based on the quadratic residuosity problem.
//! See <https://doi.org/10.1016/0022-0000(84)90070-9>
//!
//! Every message bit is encrypted on its own as y^2 * x^b mod N, where
//! x = N - 1 is a quadratic non-residue modulo both secret primes. Only the
//! holder of the factorization can tell residues from non-residues, so only
//! they can recover the bits.
//!
//! This is a teaching implementation. It is not constant time and it is
//! malleable, so it offers no protection against adaptive chosen-ciphertext
//! attacks.
//!
//! ```
//! use libgoldwasser::*;
//! use rand::rngs::OsRng;
//!
//! let (pk, sk) = KeyGenerator::new().bit_length(128).generate(&mut OsRng).unwrap();
//! let ciphertext = pk.encrypt(&mut OsRng, "HELLO").unwrap();
//! assert_eq!(sk.decrypt(&ciphertext).unwrap(), "HELLO");
//! ```
#![deny(
    warnings,
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    trivial_casts,
    trivial_numeric_casts
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod bits;
mod ciphertext;
mod decryptionkey;
mod encryptionkey;
mod error;
mod keygen;
pub mod primality;
mod random;
pub mod utils;

pub use num_bigint_dig;

pub use ciphertext::*;
pub use decryptionkey::*;
pub use encryptionkey::*;
pub use error::*;
pub use keygen::*;
pub use primality::{is_prime, next_prime, PrimalityStrategy, PrimalityTest};
pub use random::*;

/// A Goldwasser-Micali public key (N, N - 1)
pub type PublicKey = EncryptionKey;
/// A Goldwasser-Micali private key (p, q)
pub type PrivateKey = DecryptionKey;
