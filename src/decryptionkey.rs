/*
    Copyright Michael Lodder. All Rights Reserved.
    SPDX-License-Identifier: Apache-2.0
*/
use crate::{
    bits, error::*, utils::*, Ciphertext, EncryptionKey, KeyGenerator, PrimalityStrategy,
    PrimalityTest,
};
use bit_vec::BitVec;
use num_bigint_dig::BigUint;
use rand::rngs::OsRng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A Goldwasser-Micali decryption key
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct DecryptionKey {
    #[zeroize(skip)]
    pub(crate) pk: EncryptionKey,
    /// The prime `p`
    pub(crate) p: BigUint,
    /// The prime `q`
    pub(crate) q: BigUint,
}

impl Serialize for DecryptionKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        DecryptionKeyRef {
            p: &self.p,
            q: &self.q,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DecryptionKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize, Zeroize, ZeroizeOnDrop)]
        struct InnerDecryptionKey {
            p: BigUint,
            q: BigUint,
        }

        let key = InnerDecryptionKey::deserialize(deserializer)?;
        Self::with_primes(&key.p, &key.q)
            .map_err(|_| serde::de::Error::custom("Invalid primes"))
    }
}

impl DecryptionKey {
    /// Create a new random key with a modulus built from two `bit_length` primes
    pub fn random(bit_length: usize) -> GmResult<Self> {
        let (_, sk) = KeyGenerator::new()
            .bit_length(bit_length)
            .generate(&mut OsRng)?;
        Ok(sk)
    }

    /// Create a new key from two primes.
    /// `p` and `q` are checked to be distinct primes congruent to 3 mod 4
    pub fn with_primes(p: &BigUint, q: &BigUint) -> GmResult<Self> {
        if !valid_primes(p, q, &PrimalityStrategy::default()) {
            return Err(GmError::InvalidPrimes);
        }
        Self::with_primes_unchecked(p, q)
    }

    /// Create a new key from two primes,
    /// `p` and `q` are not checked for primality or congruence
    pub fn with_primes_unchecked(p: &BigUint, q: &BigUint) -> GmResult<Self> {
        // Every bit would decrypt as 0 if p == q
        if p == q {
            return Err(GmError::InvalidPrimes);
        }
        let pk = EncryptionKey::from_modulus(p * q)?;
        Ok(DecryptionKey {
            pk,
            p: p.clone(),
            q: q.clone(),
        })
    }

    /// Reverse serialized ciphertext to plaintext
    pub fn decrypt<S: AsRef<str>>(&self, ciphertext: S) -> GmResult<String> {
        let ciphertext = Ciphertext::deserialize(ciphertext)?;
        self.decrypt_bits(&ciphertext)
    }

    /// Reverse ciphertext elements to plaintext.
    ///
    /// A residue decrypts to 0 and a non-residue to 1.
    pub fn decrypt_bits(&self, ciphertext: &Ciphertext) -> GmResult<String> {
        if ciphertext.is_empty() {
            return Err(GmError::InvalidCiphertext);
        }
        tracing::trace!(bits = ciphertext.len(), "decrypting message");

        let mut bits = BitVec::with_capacity(ciphertext.len());
        for c in ciphertext.elements() {
            if !mod_in(c, &self.pk.n) {
                return Err(GmError::InvalidCiphertext);
            }
            bits.push(!self.is_quadratic_residue(c));
        }
        bits::decode(&bits)
    }

    /// True if `c` is a quadratic residue mod N, i.e. mod both `p` and `q`
    pub fn is_quadratic_residue(&self, c: &BigUint) -> bool {
        is_residue_mod_prime(c, &self.p) && is_residue_mod_prime(c, &self.q)
    }

    /// Get this key's byte representation
    pub fn to_bytes(&self) -> GmResult<Vec<u8>> {
        Ok(postcard::to_stdvec(self)?)
    }

    /// Convert a byte representation to a decryption key
    pub fn from_bytes<B: AsRef<[u8]>>(data: B) -> GmResult<Self> {
        Ok(postcard::from_bytes(data.as_ref())?)
    }

    /// The matching encryption key
    pub fn encryption_key(&self) -> &EncryptionKey {
        &self.pk
    }

    /// The modulus N
    pub fn n(&self) -> &BigUint {
        self.pk.n()
    }

    /// The prime `p`
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// The prime `q`
    pub fn q(&self) -> &BigUint {
        &self.q
    }
}

#[derive(Serialize)]
struct DecryptionKeyRef<'a> {
    p: &'a BigUint,
    q: &'a BigUint,
}

fn valid_primes<T>(p: &BigUint, q: &BigUint, primality: &T) -> bool
where
    T: PrimalityTest + ?Sized,
{
    let three = BigUint::from(3u32);
    let four = BigUint::from(4u32);
    p != q
        && p % &four == three
        && q % &four == three
        && primality.is_prime(p)
        && primality.is_prime(q)
}
