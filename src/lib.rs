//! # Primality — Probable-Prime Testing and Perfect-Power Detection
//!
//! Number-theoretic predicates over arbitrary-precision integers
//! (`rug::Integer`), centered on the Baillie-PSW compound probable-prime
//! test and a rigorous perfect-power detector.
//!
//! ## Module Organization
//!
//! - [`primality`] — Jacobi symbol, perfect-square predicate, small-prime
//!   filter, strong Miller–Rabin, strong Lucas–Selfridge, BPSW,
//!   Solovay–Strassen.
//! - [`generate`] — `next_prime` (wheel-of-210 advance) and `rand_prime`
//!   (exact-bit-length random primes).
//! - [`sif`] — scaled-integer floats n·2^a with one-sided relative-error
//!   truncation, division, and powering primitives.
//! - [`powers`] — Bernstein's essentially-linear perfect-power detector
//!   built on [`sif`], plus a naive binary-search kth root.
//! - [`proof`] — trial-division primality proofs and factorization, for
//!   ranges where an exact answer is feasible.
//! - [`tables`] — process-lifetime sieve constants: primes below 2^10,
//!   wheel-of-210 gaps, square residues, partitioned prime products.
//!
//! ## Verdicts
//!
//! Probabilistic tests return a three-valued [`Verdict`]. `Composite` is a
//! certificate; `Undetermined` means "no witness found" and, for BPSW, is
//! the working definition of "probably prime". No test promotes a candidate
//! to `Prime` without an exact argument (table membership or trial
//! division).
//!
//! ## References
//!
//! - R. Baillie, S.S. Wagstaff Jr., "Lucas Pseudoprimes", Mathematics of
//!   Computation, 35(152):1391–1417, 1980.
//! - T.R. Nicely, "The Baillie-PSW primality test",
//!   <http://www.trnicely.net/misc/bpsw.html>.
//! - D.J. Bernstein, "Detecting perfect powers in essentially linear time",
//!   Mathematics of Computation, 67(223):1253–1283, 1998.

pub mod generate;
pub mod powers;
pub mod primality;
pub mod proof;
pub mod sif;
pub mod tables;

use rug::Integer;

/// Outcome of a primality test.
///
/// `Composite` is always a proof of compositeness. `Prime` is only produced
/// by exact arguments (small-prime table lookup, trial division).
/// `Undetermined` means the test found no witness; for a BPSW result it is
/// what "probably prime" means in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Prime,
    Composite,
    Undetermined,
}

/// Count of zero bits below the lowest set bit of `|x|`.
///
/// Zero has no set bit; by convention it maps to 0, as does any odd `x`.
#[inline]
pub fn trailing_zero_bits(x: &Integer) -> u32 {
    if x.cmp0() == std::cmp::Ordering::Equal || x.is_odd() {
        return 0;
    }
    Integer::from(x.abs_ref()).find_one(0).unwrap_or(0)
}

/// ⌈log₂ k⌉ for positive k, with `log2_ceil(1) == 0`.
///
/// Panics on k = 0; there is no sensible answer and every caller guards it.
#[inline]
pub fn log2_ceil(k: u32) -> u32 {
    assert!(k > 0, "log2_ceil is undefined for 0");
    if k == 1 {
        0
    } else {
        32 - (k - 1).leading_zeros()
    }
}
