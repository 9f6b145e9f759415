//! # Generate — Next-Prime Successor and Random Primes
//!
//! `next_prime` walks candidates with the wheel-of-210 gap table, handing
//! each survivor to BPSW; only residues coprime to 2·3·5·7 are ever tested,
//! which skips about 77% of integers outright. `rand_prime` draws a random
//! integer of the requested width and takes its successor, resampling when
//! the successor spills into the next bit length so the output shape stays
//! uniform.
//!
//! Entropy comes from the thread-local generator and is consumed inline;
//! callers running in parallel each get an independent stream.

use crate::primality::bpsw;
use crate::tables::{PRIMES_10BIT, WHEEL_210};
use crate::Verdict;
use rand::{Rng, RngCore};
use rug::integer::Order;
use rug::Integer;
use std::cmp::Ordering;

/// The least M >= N that BPSW does not reject.
///
/// Non-positive inputs yield 2. Inputs within the small-prime table are
/// answered exactly by table lookup.
pub fn next_prime(n: &Integer) -> Integer {
    if n.cmp0() != Ordering::Greater {
        return Integer::from(2u32);
    }
    if n.significant_bits() <= 10 {
        let v = n.to_u16().expect("checked to fit in 10 bits");
        let idx = PRIMES_10BIT.partition_point(|&p| p < v);
        if idx < PRIMES_10BIT.len() {
            return Integer::from(PRIMES_10BIT[idx]);
        }
        // 1022 and 1023 fall through to the wheel.
    }
    let mut i = n.mod_u(210) as usize;
    let mut p = n.clone();
    let mut tested = 0u64;
    loop {
        if bpsw(&p) != Verdict::Composite {
            tracing::debug!(
                candidates = tested,
                bits = p.significant_bits(),
                "next_prime settled"
            );
            return p;
        }
        tested += 1;
        let gap = usize::from(WHEEL_210[i]);
        p += gap as u32;
        i = (i + gap) % 210;
    }
}

/// A random probable prime of exactly `bits` bits.
///
/// For widths within the small-prime table the result is drawn uniformly
/// from the primes of that exact width. Otherwise a uniform `bits`-wide
/// integer (top bit forced) seeds `next_prime`; if the successor overflows
/// the width, the draw is rejected and repeated.
///
/// Panics for `bits < 2` (there are no primes that narrow).
pub fn rand_prime(bits: u32) -> Integer {
    assert!(bits >= 2, "no primes with bit length {}", bits);
    if bits <= 10 {
        let width = |p: u16| 16 - p.leading_zeros();
        let of_width: Vec<u16> = PRIMES_10BIT
            .iter()
            .copied()
            .filter(|&p| width(p) == bits)
            .collect();
        let pick = rand::thread_rng().gen_range(0..of_width.len());
        return Integer::from(of_width[pick]);
    }
    loop {
        let candidate = random_integer(bits);
        let p = next_prime(&candidate);
        if p.significant_bits() == bits {
            return p;
        }
        tracing::debug!(bits, "successor overflowed the requested width, resampling");
    }
}

/// A uniform random integer of exactly `bits` bits: fresh bytes, masked to
/// width, top bit forced.
fn random_integer(bits: u32) -> Integer {
    let mut bytes = vec![0u8; ((bits + 7) / 8) as usize];
    rand::thread_rng().fill_bytes(&mut bytes);
    let mut n = Integer::from_digits(&bytes, Order::Msf);
    n.keep_bits_mut(bits);
    n.set_bit(bits - 1, true);
    n
}
