/*
    Copyright Michael Lodder. All Rights Reserved.
    SPDX-License-Identifier: Apache-2.0
*/
use num_bigint_dig::{BigUint, RandBigInt};
use rand::{CryptoRng, RngCore};

/// A source of uniformly distributed big integers.
///
/// Encryption draws one value per plaintext bit and key generation draws
/// the starting points of the prime search. The scheme only stays
/// semantically secure when the source is cryptographically strong, which
/// is why the blanket implementation requires [`CryptoRng`].
pub trait RandomSource {
    /// A uniform value in `[lower, upper)`
    fn random_range(&mut self, lower: &BigUint, upper: &BigUint) -> BigUint;

    /// A uniform value in `[0, 2^bits)`
    fn random_bits(&mut self, bits: usize) -> BigUint;
}

impl<R> RandomSource for R
where
    R: RngCore + CryptoRng + ?Sized,
{
    fn random_range(&mut self, lower: &BigUint, upper: &BigUint) -> BigUint {
        self.gen_biguint_range(lower, upper)
    }

    fn random_bits(&mut self, bits: usize) -> BigUint {
        self.gen_biguint(bits)
    }
}
