/*
    Copyright Michael Lodder. All Rights Reserved.
    SPDX-License-Identifier: Apache-2.0
*/
//! Range and quadratic residue helpers
use num_bigint_dig::BigUint;
use num_traits::{One, Zero};

/// Checks that `1 <= a < n`
pub fn mod_in(a: &BigUint, n: &BigUint) -> bool {
    let lhs = &BigUint::one() <= a;
    let rhs = a < n;
    lhs & rhs
}

/// Euler's criterion: a^((p - 1) / 2) mod p.
///
/// For an odd prime `p` the result is 1 when `a` is a quadratic residue,
/// p - 1 when it is a non-residue and 0 when p divides `a`.
pub fn euler_criterion(a: &BigUint, p: &BigUint) -> BigUint {
    if p.is_zero() {
        return BigUint::zero();
    }
    let one = BigUint::one();
    let exp = (p - &one) / BigUint::from(2u32);
    (a % p).modpow(&exp, p)
}

/// Returns true when `a` is a quadratic residue modulo the odd prime `p`
pub fn is_residue_mod_prime(a: &BigUint, p: &BigUint) -> bool {
    euler_criterion(a, p) == BigUint::one()
}
