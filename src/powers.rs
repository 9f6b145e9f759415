//! # Powers — Perfect-Power Detection
//!
//! Decides whether n = x^k for some integer x and exponent k >= 2, in
//! essentially linear time, following Bernstein's algorithm suite:
//!
//! - `alg_b` — bit-by-bit refinement of y^(-1/k), valid for small precision
//!   budgets. Each step raises the candidate to the k-th power, multiplies
//!   by y, and nudges the candidate up if the product fell below 993/1024 or
//!   down if it exceeded 1; the 993/1024 slack guarantees progress without
//!   overshoot.
//! - `alg_n` — Newton's method for larger budgets: recursively obtain a
//!   half-precision root, then one correction step r = (z(k+1) - z^(k+1)y)/k.
//! - `nrootb` — the dispatcher between the two.
//! - `alg_c` — sign of n - x^k by escalating precision: the power is
//!   recomputed at doubling budgets until the interval [r, r(1 + 2^-b))
//!   separates n or the budget reaches the width of n, which certifies
//!   equality.
//! - `alg_k` / `alg_x` — the per-exponent test (round the approximate root,
//!   reject if it misses an integer by 1/4, confirm with `alg_c`) and the
//!   outer driver over prime exponents below bitlen(n) + 1.
//!
//! The reciprocal y ~ 1/n that seeds every exponent is itself obtained from
//! `nrootb` with k = 1.
//!
//! A naive binary-search [`kth_root`] is kept alongside as an independently
//! checkable floor root.
//!
//! ## References
//!
//! - D.J. Bernstein, "Detecting perfect powers in essentially linear time",
//!   Mathematics of Computation, 67(223):1253–1283, 1998.

use crate::log2_ceil;
use crate::sif::Sif;
use crate::tables::PRIMES_10BIT;
use rug::ops::Pow;
use rug::Integer;
use std::cmp::Ordering;

/// A b-bit approximation to y^(-1/k) for small b.
///
/// Starts z at 2^a + 2^(a-1) where a = floor(-g/k), 2^(g-1) <= y < 2^g, and
/// refines one bit per iteration. The working precision is
/// ceil(log2(66(2k+1))), which keeps every comparison decisive.
fn alg_b(y: &Sif, k: u32, b: u32) -> Sif {
    if y.is_zero() {
        return Sif::zero();
    }
    assert!(
        b >= 1 && b <= log2_ceil(8 * k) + 3,
        "alg_b precision budget {} out of range for k = {}",
        b,
        k
    );
    let g = i64::from(y.n.significant_bits()) + y.a;
    let a = (-g).div_euclid(i64::from(k));
    let prec = log2_ceil(66 * (2 * k + 1));
    let mut z = Sif::new(Integer::from(3), a - 1);
    for j in 1..i64::from(b) {
        let r = z.powb(k, prec).mul(&y.truncb(prec)).truncb(prec);
        if r.leq_993_over_1024() {
            z = z.add(&Sif::new(Integer::from(1), a - j - 1));
        }
        if !r.leq_one() {
            z = z.add(&Sif::new(Integer::from(-1), a - j - 1));
        }
    }
    z
}

/// A b-bit approximation to y^(-1/k) for large b, by one Newton correction
/// of a recursively obtained half-precision root.
fn alg_n(y: &Sif, k: u32, b: u32) -> Sif {
    if y.is_zero() {
        return Sif::zero();
    }
    let ell = log2_ceil(k) + 1;
    assert!(
        b >= ell + 3,
        "alg_n precision budget {} too small for k = {}",
        b,
        k
    );
    let bb = ell + (b - ell + 1) / 2;
    let prec = 2 * bb + 4 - ell;
    let z = if bb <= ell + 3 {
        alg_b(y, k, bb)
    } else {
        alg_n(y, k, bb)
    };
    // r = (z·(k+1) - z^(k+1)·y) / k
    let r2 = z.truncb(prec).mul(&Sif::from_integer(Integer::from(k + 1)));
    let r3 = z.powb(k + 1, prec).mul(&y.truncb(prec)).truncb(prec);
    r2.sub(&r3).divb(k, prec)
}

/// Approximate y^(-1/k) to b bits, dispatching on the budget.
pub(crate) fn nrootb(y: &Sif, k: u32, b: u32) -> Sif {
    assert!(k >= 1 && b >= 1, "nrootb requires positive k and b");
    if b <= log2_ceil(8 * k) {
        alg_b(y, k, b)
    } else {
        alg_n(y, k, b)
    }
}

/// Sign of n - x^k in {-1, 0, +1}, by escalating precision.
///
/// The budget doubles up to f = floor(log2(2n)). At b = f any genuine
/// inequality separates: a power below n satisfies r·2^-b < 1 <= n - r, and
/// a power above n pushes r past n. Both sign tests therefore run once more
/// at b = f before a zero is concluded, and that zero is exact equality.
fn alg_c(n: &Integer, x: &Integer, k: u32) -> i32 {
    assert!(
        n.cmp0() == Ordering::Greater && x.cmp0() == Ordering::Greater && k >= 1,
        "alg_c requires positive n, x, and k"
    );
    let nf = Sif::from_integer(n.clone());
    let xf = Sif::from_integer(x.clone());
    let f = i64::from(n.significant_bits());
    let mut b = 1i64;
    loop {
        let prec = (3 + b + i64::from(log2_ceil(k))) as u32;
        let r = xf.powb(k, prec);
        if nf.compare(&r) == Ordering::Less {
            return -1;
        }
        // r·(1 + 2^-b) <= n pins x^k strictly below n.
        let upper = r.mul(&Sif::from_integer(Integer::from(1)).add(&Sif::new(Integer::from(1), -b)));
        if upper.compare(&nf) != Ordering::Greater {
            return 1;
        }
        if b >= f {
            return 0;
        }
        b = (2 * b).min(f);
    }
}

/// Test whether n = x^k for some integer x, given y ~ 1/n.
///
/// The root budget 3 + ceil(bitlen(n)/k) resolves the would-be base (which
/// has about bitlen(n)/k bits) to well under 1/4; if the approximation
/// still misses every integer by 1/4 there is nothing to check, otherwise
/// `alg_c` settles the rounded candidate exactly.
fn alg_k(n: &Integer, k: u32, y: &Sif) -> Option<Integer> {
    let b = 3 + n.significant_bits().div_ceil(k);
    let r = nrootb(y, k, b);
    let x = r.round();
    if x.cmp0() != Ordering::Greater {
        return None;
    }
    let diff = r.sub(&Sif::from_integer(x.clone()));
    let quarter = Sif::new(Integer::from(1), -2);
    let neg_quarter = Sif::new(Integer::from(-1), -2);
    if diff.compare(&quarter) != Ordering::Less || diff.compare(&neg_quarter) != Ordering::Greater {
        return None;
    }
    if alg_c(n, &x, k) == 0 {
        Some(x)
    } else {
        None
    }
}

/// Full power decomposition: returns (x, p) with n = x^p for the first
/// prime exponent that confirms, or (n, 1) when n is not a non-trivial
/// power.
///
/// Exponents run over the primes p < bitlen(n) + 1; a reciprocal
/// approximation of n seeds every per-exponent test.
///
/// Panics on n < 2.
pub fn alg_x(n: &Integer) -> (Integer, u32) {
    assert!(*n >= 2u32, "perfect-power detection requires n >= 2");
    let f = n.significant_bits() + 1;
    let y = nrootb(&Sif::from_integer(n.clone()), 1, f);
    for &p in PRIMES_10BIT.iter() {
        let p = u32::from(p);
        if p >= f {
            break;
        }
        if let Some(x) = alg_k(n, p, &y) {
            tracing::debug!(exponent = p, "perfect power decomposition found");
            return (x, p);
        }
    }
    (n.clone(), 1)
}

/// Whether n is a non-trivial perfect power; the witnessing (x, k) with
/// n = x^k, k >= 2 prime, if so.
pub fn is_perfect_power(n: &Integer) -> Option<(Integer, u32)> {
    let (x, k) = alg_x(n);
    if k == 1 {
        None
    } else {
        Some((x, k))
    }
}

/// Floor of the k-th root of n by binary search. O(log² n) big-integer
/// multiplies; the rigorous engine above does not use it, tests do.
pub fn kth_root(n: &Integer, k: u32) -> Integer {
    assert!(
        n.cmp0() != Ordering::Less && k >= 1,
        "kth_root requires n >= 0 and k >= 1"
    );
    if k == 1 || n.significant_bits() <= 1 {
        return n.clone();
    }
    // Invariant: lo^k <= n < hi^k.
    let bits = n.significant_bits();
    let mut lo = Integer::from(1u32) << ((bits - 1) / k);
    let mut hi = Integer::from(&lo << 1u32);
    while Integer::from(&hi - &lo) > 1u32 {
        let mid = Integer::from(&lo + &hi) >> 1u32;
        if Integer::from((&mid).pow(k)) <= *n {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}
