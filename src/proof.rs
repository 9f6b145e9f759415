//! # Proof — Exact Primality by Trial Division
//!
//! Upgrades BPSW's "probably prime" to a certainty for inputs small enough
//! that dividing by everything up to the square root is feasible. Also
//! carries the trial-division factorization used by the prime-power proof.
//!
//! None of this is reached by the probabilistic pipeline; it exists so the
//! generation path can be cross-checked exactly on small ranges.

use crate::generate::next_prime;
use crate::primality::small_prime_test;
use crate::tables::PRIMES_10BIT;
use crate::{trailing_zero_bits, Verdict};
use rug::Integer;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Prime -> exponent map of a positive integer.
pub type Factorization = BTreeMap<Integer, u32>;

/// Deterministic primality by trial division up to floor(sqrt(N)).
///
/// Table inputs are answered from the table; anything larger is divided by
/// every integer from 2 up. Only viable for small N.
pub fn simple_proof(n: &Integer) -> bool {
    if small_prime_test(n) == Verdict::Prime {
        return true;
    }
    if *n <= *PRIMES_10BIT.last().expect("table is non-empty") {
        return false;
    }
    let limit = Integer::from(n.sqrt_ref());
    let mut d = Integer::from(2u32);
    while d <= limit {
        if n.is_divisible(&d) {
            return false;
        }
        d += 1u32;
    }
    true
}

/// The least proven prime at or after N: takes BPSW successors until one
/// survives `simple_proof`.
pub fn next_prime_proof(n: &Integer) -> Integer {
    let mut p = next_prime(n);
    while !simple_proof(&p) {
        p = next_prime(&Integer::from(&p + 1u32));
    }
    p
}

/// Trial-division factorization. The divisor runs over 2 and then the odd
/// primes from `next_prime`, up to the square root of what remains; any
/// final cofactor above 1 is prime.
///
/// Panics on N <= 0.
pub fn factor(n: &Integer) -> Factorization {
    assert!(
        n.cmp0() == Ordering::Greater,
        "factorization is for positive integers only"
    );
    let mut f = Factorization::new();
    let mut rem = n.clone();

    let twos = trailing_zero_bits(&rem);
    if twos > 0 {
        f.insert(Integer::from(2u32), twos);
        rem >>= twos;
    }

    let mut p = Integer::from(3u32);
    let mut limit = Integer::from(rem.sqrt_ref());
    while p <= limit && rem > 1u32 {
        let mut e = 0u32;
        while rem.is_divisible(&p) {
            rem /= &p;
            e += 1;
        }
        if e > 0 {
            f.insert(p.clone(), e);
            limit = Integer::from(rem.sqrt_ref());
        }
        p = next_prime(&Integer::from(&p + 2u32));
    }
    if rem > 1u32 {
        f.insert(rem, 1);
    }
    f
}

/// True iff N = p^e for a single prime p (e >= 1), by exact factorization.
pub fn is_prime_power_proof(n: &Integer) -> bool {
    factor(n).len() == 1
}
