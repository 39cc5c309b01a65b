/*
    Copyright Michael Lodder. All Rights Reserved.
    SPDX-License-Identifier: Apache-2.0
*/
use crate::{
    error::*, primality::next_prime, DecryptionKey, EncryptionKey, PrimalityStrategy, RandomSource,
};
use num_bigint_dig::BigUint;
use num_traits::One;
use serde::{Deserialize, Serialize};

/// Smallest accepted prime bit length
pub const MIN_BIT_LENGTH: usize = 2;

/// Parameters for key generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyGenConfig {
    /// Bit length of each prime seed; the primes are found just above 2^bit_length
    pub bit_length: usize,
    /// Primality test used by the prime search
    pub primality: PrimalityStrategy,
    /// How many times `q` is redrawn when it collides with `p`
    pub max_attempts: usize,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self {
            bit_length: 512,
            primality: PrimalityStrategy::default(),
            max_attempts: 64,
        }
    }
}

/// Builder for generating key pairs with configurable parameters.
#[derive(Clone, Debug, Default)]
pub struct KeyGenerator {
    config: KeyGenConfig,
}

impl From<KeyGenConfig> for KeyGenerator {
    fn from(config: KeyGenConfig) -> Self {
        Self { config }
    }
}

impl KeyGenerator {
    /// Create a generator with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prime bit length
    pub fn bit_length(mut self, bits: usize) -> Self {
        self.config.bit_length = bits;
        self
    }

    /// Set the primality test
    pub fn primality(mut self, strategy: PrimalityStrategy) -> Self {
        self.config.primality = strategy;
        self
    }

    /// Set the collision retry limit
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.config.max_attempts = attempts;
        self
    }

    /// The active parameters
    pub fn config(&self) -> &KeyGenConfig {
        &self.config
    }

    /// Generate a key pair.
    ///
    /// Both primes are congruent to 3 mod 4 so that N - 1 is a
    /// non-residue modulo each of them.
    pub fn generate<R>(&self, rng: &mut R) -> GmResult<(EncryptionKey, DecryptionKey)>
    where
        R: RandomSource + ?Sized,
    {
        let KeyGenConfig {
            bit_length,
            primality,
            max_attempts,
        } = self.config;
        if bit_length < MIN_BIT_LENGTH {
            return Err(GmError::InvalidBitLength(bit_length));
        }
        // zero rounds accepts every candidate
        if let PrimalityStrategy::Fermat { rounds: 0 } = primality {
            return Err(GmError::InvalidPrimalityStrategy(
                "Fermat test needs at least one round",
            ));
        }
        tracing::debug!(bit_length, ?primality, "generating key pair");

        let p = next_prime(&self.seed(rng), &primality);
        let mut q = next_prime(&self.seed(rng), &primality);
        let mut attempts = 0;
        while p == q {
            if attempts == max_attempts {
                tracing::debug!(attempts, "giving up on distinct primes");
                return Err(GmError::KeyGenerationFailed { attempts });
            }
            tracing::warn!("prime collision, redrawing q");
            q = next_prime(&self.seed(rng), &primality);
            attempts += 1;
        }

        let sk = DecryptionKey::with_primes_unchecked(&p, &q)?;
        let pk = EncryptionKey::from(&sk);
        tracing::debug!(modulus_bits = pk.n().bits(), "key pair generated");
        Ok((pk, sk))
    }

    /// A random value in [2^bits, 2^bits + 2^(bits - 1))
    fn seed<R>(&self, rng: &mut R) -> BigUint
    where
        R: RandomSource + ?Sized,
    {
        let bits = self.config.bit_length;
        rng.random_bits(bits - 1) + (BigUint::one() << bits)
    }
}

/// Generate a key pair of `bit_length` primes with the default parameters
pub fn generate<R>(bit_length: usize, rng: &mut R) -> GmResult<(EncryptionKey, DecryptionKey)>
where
    R: RandomSource + ?Sized,
{
    KeyGenerator::new().bit_length(bit_length).generate(rng)
}
