/*
    Copyright Michael Lodder. All Rights Reserved.
    SPDX-License-Identifier: Apache-2.0
*/
use crate::{bits, error::*, Ciphertext, DecryptionKey, RandomSource};
use num_bigint_dig::BigUint;
use num_integer::Integer;
use num_traits::One;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// A Goldwasser-Micali encryption key
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct EncryptionKey {
    pub(crate) n: BigUint, // N = p * q, where p,q are primes congruent to 3 mod 4
    pub(crate) x: BigUint, // N - 1, a non-residue mod p and mod q
}

impl Serialize for EncryptionKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.n.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EncryptionKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let n = BigUint::deserialize(deserializer)?;
        Self::from_modulus(n).map_err(serde::de::Error::custom)
    }
}

impl From<&DecryptionKey> for EncryptionKey {
    fn from(sk: &DecryptionKey) -> EncryptionKey {
        sk.pk.clone()
    }
}

impl EncryptionKey {
    /// Constructs the encryption key from the modulus, using N - 1 as the non-residue
    pub fn from_modulus(n: BigUint) -> GmResult<Self> {
        // N = 3 * 7 is the smallest usable modulus
        if n < BigUint::from(21u32) || n.is_even() {
            return Err(GmError::InvalidEncryptionKey);
        }
        let x = &n - BigUint::one();
        Ok(Self { n, x })
    }

    /// Constructs the encryption key from the pair (N, x).
    /// `x` must be N - 1
    pub fn from_parts(n: BigUint, x: BigUint) -> GmResult<Self> {
        let pk = Self::from_modulus(n)?;
        if pk.x != x {
            return Err(GmError::InvalidEncryptionKey);
        }
        Ok(pk)
    }

    /// Encrypt an ASCII message and serialize the result as text
    pub fn encrypt<R>(&self, rng: &mut R, message: &str) -> GmResult<String>
    where
        R: RandomSource + ?Sized,
    {
        self.encrypt_bits(rng, message).map(|c| c.serialize())
    }

    /// Encrypt an ASCII message, one ciphertext element per message bit
    pub fn encrypt_bits<R>(&self, rng: &mut R, message: &str) -> GmResult<Ciphertext>
    where
        R: RandomSource + ?Sized,
    {
        if message.is_empty() {
            return Err(GmError::EmptyMessage);
        }
        let bits = bits::encode(message)?;
        tracing::trace!(bits = bits.len(), "encrypting message");

        let elements = bits
            .iter()
            .map(|bit| self.encrypt_bit(rng, bit))
            .collect();
        Ok(Ciphertext(elements))
    }

    /// Encrypt a single bit as y^2 * x^bit mod N for a fresh random unit y
    pub fn encrypt_bit<R>(&self, rng: &mut R, bit: bool) -> BigUint
    where
        R: RandomSource + ?Sized,
    {
        let y = self.random_unit(rng);
        let y2 = y.modpow(&BigUint::from(2u32), &self.n);
        if bit {
            (y2 * &self.x) % &self.n
        } else {
            y2
        }
    }

    /// Draw y in [1, N) with gcd(y, N) = 1
    fn random_unit<R>(&self, rng: &mut R) -> BigUint
    where
        R: RandomSource + ?Sized,
    {
        let one = BigUint::one();
        loop {
            let y = rng.random_range(&one, &self.n);
            if y.gcd(&self.n) == one {
                return y;
            }
        }
    }

    /// Get this key's byte representation
    pub fn to_bytes(&self) -> GmResult<Vec<u8>> {
        Ok(postcard::to_stdvec(self)?)
    }

    /// Convert a byte representation to an encryption key
    pub fn from_bytes<B: AsRef<[u8]>>(data: B) -> GmResult<Self> {
        Ok(postcard::from_bytes(data.as_ref())?)
    }

    /// The modulus N
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// The public quadratic non-residue N - 1
    pub fn x(&self) -> &BigUint {
        &self.x
    }
}
