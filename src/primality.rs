/*
    Copyright Michael Lodder. All Rights Reserved.
    SPDX-License-Identifier: Apache-2.0
*/
//! Primality tests and the 3 mod 4 prime search used by key generation
use num_bigint_dig::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// Default number of Fermat rounds
pub const DEFAULT_FERMAT_ROUNDS: usize = 4;

/// How candidate primes are tested
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimalityStrategy {
    /// Trial division by 2, 3 and every 6k ± 1 up to √n.
    ///
    /// Exact, but only practical for small numbers.
    TrialDivision,
    /// Fermat test with a deterministic witness sequence.
    ///
    /// The witness starts at 2 and is advanced past any value sharing a
    /// factor with `n`. Composites are rejected with high probability,
    /// except Carmichael numbers which pass for every round count.
    Fermat {
        /// Number of witnesses to try
        rounds: usize,
    },
}

impl Default for PrimalityStrategy {
    fn default() -> Self {
        Self::Fermat {
            rounds: DEFAULT_FERMAT_ROUNDS,
        }
    }
}

/// A primality predicate
pub trait PrimalityTest {
    /// Returns true if `n` is considered prime
    fn is_prime(&self, n: &BigUint) -> bool;
}

impl PrimalityTest for PrimalityStrategy {
    fn is_prime(&self, n: &BigUint) -> bool {
        is_prime(n, *self)
    }
}

impl<F> PrimalityTest for F
where
    F: Fn(&BigUint) -> bool,
{
    fn is_prime(&self, n: &BigUint) -> bool {
        self(n)
    }
}

/// Decide whether `n` is prime using `strategy`
pub fn is_prime(n: &BigUint, strategy: PrimalityStrategy) -> bool {
    match strategy {
        PrimalityStrategy::TrialDivision => trial_division(n),
        PrimalityStrategy::Fermat { rounds } => fermat(n, rounds),
    }
}

/// Exact primality by trial division
pub fn trial_division(n: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    let three = BigUint::from(3u32);
    if n <= &three {
        return n > &BigUint::one();
    }
    if (n % &two).is_zero() || (n % &three).is_zero() {
        return false;
    }

    let six = BigUint::from(6u32);
    let mut i = BigUint::from(5u32);
    while &(&i * &i) <= n {
        if (n % &i).is_zero() || (n % (&i + &two)).is_zero() {
            return false;
        }
        i = i + &six;
    }
    true
}

/// Fermat probable-prime test over `rounds` witnesses
pub fn fermat(n: &BigUint, rounds: usize) -> bool {
    let one = BigUint::one();
    let three = BigUint::from(3u32);
    if n <= &three {
        return n > &one;
    }

    let exp = n - &one;
    let mut witness = BigUint::from(2u32);
    for _ in 0..rounds {
        while witness.gcd(n) != one {
            witness = witness + &one;
        }
        if witness.modpow(&exp, n) != one {
            return false;
        }
        witness = witness + &one;
    }
    true
}

/// Find the smallest value `>= start` that is 3 mod 4 and passes `primality`.
///
/// The search moves in steps of 4 so the congruence is preserved; it
/// terminates by the density of primes in the residue class.
pub fn next_prime<T>(start: &BigUint, primality: &T) -> BigUint
where
    T: PrimalityTest + ?Sized,
{
    let three = BigUint::from(3u32);
    let four = BigUint::from(4u32);

    let mut candidate = start + (&three - (start % &four));
    let mut tested = 0usize;
    while !primality.is_prime(&candidate) {
        candidate = candidate + &four;
        tested += 1;
    }
    tracing::trace!(tested, "found prime congruent to 3 mod 4");
    candidate
}
