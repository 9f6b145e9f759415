//! # Primality — Probable-Prime Tests and Shared Predicates
//!
//! The Baillie-PSW compound test and the primitives it is built from. BPSW
//! chains a staged small-prime filter, one strong Miller–Rabin round in base
//! 2, and a strong Lucas–Selfridge round; no composite below 2^64 passes,
//! and no counterexample of any size is known. The sub-tests are exposed on
//! their own, along with the Jacobi symbol and the perfect-square predicate
//! they share, and a Solovay–Strassen witness loop for independent
//! cross-checking.
//!
//! Verdicts are three-valued ([`Verdict`]): `Composite` is a certificate,
//! `Undetermined` means "no witness found". Only the small-prime table
//! lookup ever answers `Prime`.
//!
//! Precondition violations (non-positive or even inputs where oddness is
//! required, bases below 2) are programmer errors and panic.
//!
//! ## References
//!
//! - R. Baillie, S.S. Wagstaff Jr., "Lucas Pseudoprimes", Mathematics of
//!   Computation, 35(152):1391–1417, 1980.
//! - T.R. Nicely, "The Baillie-PSW primality test",
//!   <http://www.trnicely.net/misc/bpsw.html>.
//! - H. Cohen, "A Course in Computational Algebraic Number Theory",
//!   Algorithm 1.7.1 (integer square root).

use crate::tables::{
    prime_products, PRIMES_10BIT, SMALL_SQUARE_MOD, SQUARES_MOD_1155, SQUARES_MOD_128,
};
use crate::{trailing_zero_bits, Verdict};
use rand::RngCore;
use rug::integer::Order;
use rug::ops::{NegAssign, RemRounding};
use rug::Integer;
use std::cmp::Ordering;

/// Jacobi symbol (N / D) for positive odd D, computed by the binary
/// algorithm (reciprocity plus extraction of factors of two).
///
/// Returns a value in {-1, 0, +1}; 0 iff N and D share a factor. The
/// numerator may be negative, which the initial Euclidean reduction absorbs.
///
/// Panics if D is not positive and odd.
pub fn jacobi_symbol(num: &Integer, den: &Integer) -> i32 {
    assert!(
        den.cmp0() == Ordering::Greater && den.is_odd(),
        "jacobi symbol is defined for positive odd denominators only (got {})",
        den
    );
    let mut n = num.clone();
    let mut d = den.clone();
    let mut j = 1i32;
    loop {
        n = n.rem_euc(&d);
        if n.cmp0() == Ordering::Equal {
            return 0;
        }
        // n > d/2: replace n with d - n and pick up the sign of (-1 / d).
        if Integer::from(&n << 1u32) > d {
            n = Integer::from(&d - &n);
            if d.mod_u(4) == 3 {
                j = -j;
            }
        }
        // Extract twos; (2 / d) = -1 exactly when d = 3, 5 (mod 8).
        let s = trailing_zero_bits(&n);
        if s > 0 {
            n >>= s;
        }
        if s & 1 == 1 && matches!(d.mod_u(8), 3 | 5) {
            j = -j;
        }
        if n == 1u32 {
            return j;
        }
        // Quadratic reciprocity: flip when both are 3 (mod 4), then swap.
        if n.mod_u(4) == 3 && d.mod_u(4) == 3 {
            j = -j;
        }
        std::mem::swap(&mut n, &mut d);
    }
}

/// True iff N = m² for some integer m >= 0. Negative inputs are never
/// squares.
///
/// Small inputs go through a hardware square root with an exact check.
/// Large inputs are first filtered by quadratic residues mod 128 and mod
/// 1155 = 3·5·7·11 (together these pass under 3% of non-squares), then the
/// survivors get a full integer Newton iteration for the floor square root.
pub fn is_square(n: &Integer) -> bool {
    match n.cmp0() {
        Ordering::Less => return false,
        Ordering::Equal => return true,
        Ordering::Greater => {}
    }

    // 62 bits leaves headroom so the f64 square root is exact for squares.
    if n.significant_bits() < 62 {
        let v = n.to_i64().expect("checked to fit in 62 bits");
        let a = (v as f64).sqrt() as i64;
        return a * a == v;
    }

    let low = n.mod_u(128) as u8;
    if SQUARES_MOD_128.binary_search(&low).is_err() {
        return false;
    }
    let rem = n.mod_u(SMALL_SQUARE_MOD) as u16;
    if SQUARES_MOD_1155.binary_search(&rem).is_err() {
        return false;
    }

    // Newton iteration seeded above sqrt(N); monotone decreasing after the
    // first step, halts at floor(sqrt(N)).
    let mut x = Integer::from(1u32) << ((n.significant_bits() + 2) >> 1);
    loop {
        let q = Integer::from(n / &x);
        let y = Integer::from(&x + &q) >> 1u32;
        if y < x {
            x = y;
        } else {
            return Integer::from(&x * &x) == *n;
        }
    }
}

/// Trial division staged for early exit.
///
/// Inputs of at most 10 bits are resolved exactly against the prime table.
/// Larger inputs are checked for evenness and then GCD'd against the four
/// partitioned products of all primes <= 1021; any common factor proves
/// compositeness. Survivors are `Undetermined`.
///
/// Panics on N <= 0.
pub fn small_prime_test(n: &Integer) -> Verdict {
    assert!(
        n.cmp0() == Ordering::Greater,
        "small prime test is for positive integers only"
    );
    if n.significant_bits() <= 10 {
        let v = n.to_u16().expect("checked to fit in 10 bits");
        return if PRIMES_10BIT.binary_search(&v).is_ok() {
            Verdict::Prime
        } else {
            Verdict::Composite
        };
    }
    if n.is_even() {
        return Verdict::Composite;
    }
    // N exceeds every table prime here, so any common factor is proper.
    for product in prime_products() {
        if Integer::from(n.gcd_ref(product)) != 1u32 {
            return Verdict::Composite;
        }
    }
    Verdict::Undetermined
}

/// Strong Miller–Rabin test in one fixed base.
///
/// Writes N - 1 = d·2^s with d odd and checks the strong Fermat chain
/// a^d, a^(2d), ..., a^(2^(s-1)·d) mod N. Returns `Composite` if the base
/// witnesses compositeness, `Undetermined` if N is prime or a strong
/// pseudoprime to this base.
///
/// Panics unless N is positive and odd and the base is at least 2.
pub fn strong_miller_rabin(n: &Integer, base: u32) -> Verdict {
    assert!(
        n.cmp0() == Ordering::Greater && n.is_odd() && base >= 2,
        "strong Miller-Rabin requires a positive odd N and a base >= 2"
    );
    let a = Integer::from(base);
    if Integer::from(n.gcd_ref(&a)) != 1u32 {
        return Verdict::Composite;
    }

    let n_minus_1 = Integer::from(n - 1u32);
    let s = trailing_zero_bits(&n_minus_1);
    let d = Integer::from(&n_minus_1 >> s);

    let mut x = a
        .pow_mod(&d, n)
        .expect("exponent is non-negative, modulus is positive");
    if x == 1u32 || x == n_minus_1 {
        return Verdict::Undetermined;
    }
    for _ in 1..s {
        x.square_mut();
        x = x.rem_euc(n);
        if x == n_minus_1 {
            return Verdict::Undetermined;
        }
    }
    Verdict::Composite
}

/// Strong Lucas test with Selfridge's parameters.
///
/// Perfect squares are rejected up front (Selfridge's discriminant search
/// cannot terminate on them). The first D in 5, -7, 9, -11, 13, ... with
/// Jacobi(D, N) = -1 fixes P = 1, Q = (1 - D)/4, and the Lucas sequences
/// U_d, V_d, Q^d are computed mod N by binary-chain doubling, where
/// N + 1 = d·2^s with d odd. N passes (Undetermined) iff U_d = 0 or some
/// V with index d·2^r, r < s, vanishes.
///
/// Division by two mod N uses "add N if odd, then shift", which keeps every
/// intermediate in [0, N) without inverting 2.
///
/// Panics unless N is positive and odd.
pub fn strong_lucas_selfridge(n: &Integer) -> Verdict {
    assert!(
        n.cmp0() == Ordering::Greater && n.is_odd(),
        "strong Lucas-Selfridge requires a positive odd N"
    );
    if is_square(n) {
        return Verdict::Composite;
    }

    // Selfridge's parameter search: D = 5, -7, 9, -11, ...
    let mut dd = Integer::from(5);
    while jacobi_symbol(&dd, n) != -1 {
        if dd.cmp0() == Ordering::Less {
            dd -= 2u32;
        } else {
            dd += 2u32;
        }
        dd.neg_assign();
    }
    // P = 1 (Selfridge's choice), Q = (1 - D)/4 mod N. D = 1 (mod 4), so
    // the division is exact.
    let q = {
        let mut q = Integer::from(1) - &dd;
        q >>= 2u32;
        q.rem_euc(n)
    };
    if Integer::from(n.gcd_ref(&q)) != 1u32 {
        // N shares a small factor with |Q|.
        return Verdict::Composite;
    }

    let n_plus_1 = Integer::from(n + 1u32);
    let s = trailing_zero_bits(&n_plus_1);
    let d = Integer::from(&n_plus_1 >> s);

    let div2_mod = |mut x: Integer| -> Integer {
        if x.is_odd() {
            x += n;
        }
        x >> 1u32
    };

    // (U_0, V_0, Q^0) = (0, 2, 1); walk the bits of d from the top,
    // doubling each step and incrementing on set bits.
    let mut u = Integer::new();
    let mut v = Integer::from(2u32);
    let mut qk = Integer::from(1u32);
    for i in (0..d.significant_bits()).rev() {
        // U_{2k} = U·V,  V_{2k} = V² - 2Q^k,  Q^{2k} = (Q^k)²
        u *= &v;
        u = u.rem_euc(n);
        v.square_mut();
        v -= Integer::from(&qk << 1u32);
        v = v.rem_euc(n);
        qk.square_mut();
        qk = qk.rem_euc(n);
        if d.get_bit(i) {
            // U_{2k+1} = (P·U + V)/2,  V_{2k+1} = (D·U + P·V)/2, with P = 1.
            qk *= &q;
            qk = qk.rem_euc(n);
            let du = Integer::from(&dd * &u).rem_euc(n);
            let new_u = div2_mod(Integer::from(&u + &v)).rem_euc(n);
            let new_v = div2_mod(du + &v).rem_euc(n);
            u = new_u;
            v = new_v;
        }
    }

    if u.cmp0() == Ordering::Equal {
        return Verdict::Undetermined;
    }
    // V_{d·2^r} for r = 0 .. s-1.
    for _ in 0..s {
        if v.cmp0() == Ordering::Equal {
            return Verdict::Undetermined;
        }
        v.square_mut();
        v -= Integer::from(&qk << 1u32);
        v = v.rem_euc(n);
        qk.square_mut();
        qk = qk.rem_euc(n);
    }
    Verdict::Composite
}

/// Baillie-PSW compound probable-prime test.
///
/// Small-prime filter, then strong Miller–Rabin base 2, then strong
/// Lucas–Selfridge. `Undetermined` is this crate's working definition of
/// "probably prime"; the two sub-tests have disjoint known pseudoprime
/// sets, and no composite passing both has ever been exhibited.
///
/// Panics on N <= 0.
pub fn bpsw(n: &Integer) -> Verdict {
    assert!(
        n.cmp0() == Ordering::Greater,
        "BPSW is for positive integers only"
    );
    match small_prime_test(n) {
        Verdict::Prime => return Verdict::Prime,
        Verdict::Composite => return Verdict::Composite,
        Verdict::Undetermined => {}
    }
    if strong_miller_rabin(n, 2) == Verdict::Composite {
        return Verdict::Composite;
    }
    if strong_lucas_selfridge(n) == Verdict::Composite {
        return Verdict::Composite;
    }
    Verdict::Undetermined
}

/// Solovay–Strassen witness loop for odd candidates.
///
/// Runs `rounds` Euler-criterion trials with bases assembled from
/// bitlen(N) random bytes (the size bias is accepted). A composite slips
/// through all k rounds with probability at most 2^(-k). Even inputs other
/// than a single bit are rejected outright.
pub fn solovay_strassen(n: &Integer, rounds: u32) -> Verdict {
    if n.is_even() && n.significant_bits() > 1 {
        return Verdict::Composite;
    }
    let mut rng = rand::thread_rng();
    let mut bytes = vec![0u8; n.significant_bits() as usize];
    for _ in 0..rounds {
        rng.fill_bytes(&mut bytes);
        let a = Integer::from_digits(&bytes, Order::Msf);
        if euler_witness(n, &a) == Verdict::Composite {
            return Verdict::Composite;
        }
    }
    Verdict::Undetermined
}

/// One Euler-criterion trial: a is a witness unless
/// a^((N-1)/2) = Jacobi(a, N) (mod N).
fn euler_witness(n: &Integer, a: &Integer) -> Verdict {
    let x = jacobi_symbol(a, n);
    if x == 0 {
        return Verdict::Composite;
    }
    let exp = Integer::from(n - 1u32) >> 1u32;
    let z = Integer::from(
        a.pow_mod_ref(&exp, n)
            .expect("exponent is non-negative, modulus is positive"),
    );
    let n_minus_1 = Integer::from(n - 1u32);
    if (x == 1 && z == 1u32) || (x == -1 && z == n_minus_1) {
        Verdict::Undetermined
    } else {
        Verdict::Composite
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rug::integer::IsPrime;

    fn int(s: &str) -> Integer {
        Integer::from_str_radix(s, 10).unwrap()
    }

    fn hex(s: &str) -> Integer {
        Integer::from_str_radix(s, 16).unwrap()
    }

    #[test]
    fn jacobi_symbol_known_values() {
        let cases: &[(i64, i64, i32)] = &[
            (15, 45, 0),
            (19, 45, 1),
            (8, 21, -1),
            (5, 21, 1),
            (1001, 9907, -1),
            (-7, 5459, -1),
            (7, 5459, 1),
            (21, 3333, 0),
        ];
        for &(n, d, want) in cases {
            assert_eq!(
                jacobi_symbol(&Integer::from(n), &Integer::from(d)),
                want,
                "jacobi({}, {})",
                n,
                d
            );
        }
    }

    /// Cross-validation against GMP's Jacobi on a dense small grid.
    #[test]
    fn jacobi_symbol_agrees_with_gmp() {
        for d in (3i64..500).step_by(2) {
            let den = Integer::from(d);
            for n in -50i64..200 {
                let num = Integer::from(n);
                assert_eq!(
                    jacobi_symbol(&num, &den),
                    num.jacobi(&den),
                    "jacobi({}, {})",
                    n,
                    d
                );
            }
        }
    }

    #[test]
    #[should_panic(expected = "positive odd denominator")]
    fn jacobi_symbol_even_denominator_panics() {
        jacobi_symbol(&Integer::from(3), &Integer::from(10));
    }

    #[test]
    #[should_panic(expected = "positive odd denominator")]
    fn jacobi_symbol_negative_denominator_panics() {
        jacobi_symbol(&Integer::from(3), &Integer::from(-7));
    }

    #[test]
    fn is_square_small_values() {
        assert!(!is_square(&Integer::from(-1436278)));
        assert!(is_square(&Integer::from(0)));
        assert!(is_square(&Integer::from(1)));
        assert!(!is_square(&Integer::from(15)));
        assert!(is_square(&Integer::from(16)));
        assert!(!is_square(&Integer::from(3571)));
        assert!(is_square(&Integer::from(13627856i64 * 13627856)));
        assert!(!is_square(&Integer::from(13627856)));
    }

    /// Large fixed vectors: adjacent square / non-square pairs spanning 15
    /// to 180 hex digits, so both residue filters and the Newton fallback
    /// are exercised.
    #[test]
    fn is_square_large_values() {
        let squares = [
            "240e16068a04dea390a1f96b3f05a1",
            "fa8bf08953f8b2c1f941de3fd45b952967a055ff7826e4a436b660db443b024eaeed6fdf0640",
            "1e04ded686bffea61355f4c9c76f1e66fba27b9fa8b00f3c5884d3eff369677ad5817d783aa58db408de1310e55cd5e72a8176341",
            "7afee5555433fa458dc6e8e62f1cc4533b3488893e4067830385d9b27fbf724f0ca5e4e94a1c46afb09138c1965d8aa8938bebd89ae3b4f13aecd85839f3b5db1c7b9692bc0ef2595cf8640",
            "3b17f061370666c4f11db552e1dc533fbf30531421a6292207fd136a94f9f011e672a24f0ef1422210ab44f96e43599d6576030ded2b0f9c79fc8b8efd8558f09c168e35895707d7749fb92e18d9f0653efdc05daeee522204766c6aea0f2dbc5793beabbd629e69b38f5c0c56a37fd4ceb27d667ab9d1b098dae5beec2d3bfa96be55a3b9262d5662429ba76fb4f359d5674c0d861c81",
        ];
        let non_squares = [
            "240e16068a04dea390a1f96b3f05a2",
            "fa8bf08953f8b2c1f941de3fd45b952967a055ff7826e4a436b660db443b024eaeed6fdf0641",
            "1e04ded686bffea61355f4c9c76f1e66fba27b9fa8b00f3c5884d3eff369677ad5817d783aa58db408de1310e55cd5e72a8176340",
            "1e04ded686bffea61355f4c9c76f1e66fba27b9fa8b00f3c5884d3eff369677ad5817d783aa58db408de1310e55cd5e72a8176342",
            "7afee5555433fa458dc6e8e62f1cc4533b3488893e4067830385d9b27fbf724f0ca5e4e94a1c46afb09138c1965d8aa8938bebd89ae3b4f13aecd85839f3b5db1c7b9692bc0ef2595cf8641",
            "3b17f061370666c4f11db552e1dc533fbf30531421a6292207fd136a94f9f011e672a24f0ef1422210ab44f96e43599d6576030ded2b0f9c79fc8b8efd8558f09c168e35895707d7749fb92e18d9f0653efdc05daeee522204766c6aea0f2dbc5793beabbd629e69b38f5c0c56a37fd4ceb27d667ab9d1b098dae5beec2d3bfa96be55a3b9262d5662429ba76fb4f359d5674c0d861d81",
        ];
        for s in squares {
            assert!(is_square(&hex(s)), "expected square: {}", s);
        }
        for s in non_squares {
            assert!(!is_square(&hex(s)), "expected non-square: {}", s);
        }
    }

    #[test]
    fn small_prime_test_resolves_ten_bit_inputs() {
        assert_eq!(small_prime_test(&Integer::from(2)), Verdict::Prime);
        assert_eq!(small_prime_test(&Integer::from(1)), Verdict::Composite);
        assert_eq!(small_prime_test(&Integer::from(1021)), Verdict::Prime);
        assert_eq!(small_prime_test(&Integer::from(1022)), Verdict::Composite);
        assert_eq!(small_prime_test(&Integer::from(1023)), Verdict::Composite);
    }

    #[test]
    fn small_prime_test_stages_gcds_above_table() {
        // 1031 is prime, 1033*1039 has no factor below 1022.
        assert_eq!(small_prime_test(&Integer::from(1031)), Verdict::Undetermined);
        assert_eq!(
            small_prime_test(&Integer::from(1033i64 * 1039)),
            Verdict::Undetermined
        );
        // 3 * 1021 has a table factor from the first chunk; 1021 * 1024 is even.
        assert_eq!(
            small_prime_test(&Integer::from(3i64 * 1021)),
            Verdict::Composite
        );
        assert_eq!(
            small_prime_test(&Integer::from(1021i64 * 1024)),
            Verdict::Composite
        );
        // A factor from the last product chunk.
        assert_eq!(
            small_prime_test(&Integer::from(1019i64 * 1031)),
            Verdict::Composite
        );
    }

    #[test]
    #[should_panic(expected = "positive integers only")]
    fn small_prime_test_zero_panics() {
        small_prime_test(&Integer::new());
    }

    #[test]
    fn strong_miller_rabin_known_values() {
        let cases: &[(i64, u32, Verdict)] = &[
            (221, 174, Verdict::Undetermined),
            (221, 137, Verdict::Composite),
            (7, 2, Verdict::Undetermined),
            (11, 2, Verdict::Undetermined),
            (13, 2, Verdict::Undetermined),
            (1709, 2, Verdict::Undetermined),
            (2005, 2, Verdict::Composite),
            // 2047 = 23 * 89, the smallest base-2 strong pseudoprime.
            (2047, 2, Verdict::Undetermined),
            (2047, 3, Verdict::Composite),
            (173, 6, Verdict::Undetermined),
            // 175 = 5^3 * 7 shares a factor with the base.
            (175, 5, Verdict::Composite),
            // 217 = 7 * 31 is a strong pseudoprime base 6.
            (217, 6, Verdict::Undetermined),
        ];
        for &(n, a, want) in cases {
            assert_eq!(
                strong_miller_rabin(&Integer::from(n), a),
                want,
                "MR({}, {})",
                n,
                a
            );
        }
    }

    #[test]
    #[should_panic(expected = "base >= 2")]
    fn strong_miller_rabin_small_base_panics() {
        strong_miller_rabin(&Integer::from(13), 1);
    }

    #[test]
    #[should_panic(expected = "positive odd N")]
    fn strong_miller_rabin_even_panics() {
        strong_miller_rabin(&Integer::from(12), 2);
    }

    #[test]
    fn strong_lucas_selfridge_known_values() {
        let cases: &[(i64, Verdict)] = &[
            (3 * 5 * 11 * 13 * 17, Verdict::Composite),
            (3, Verdict::Undetermined),
            (5, Verdict::Undetermined),
            (11, Verdict::Undetermined),
            (797, Verdict::Undetermined),
            (3571 * 3571, Verdict::Composite),
            (3571, Verdict::Undetermined),
            // 5459 = 53 * 103 is a strong Lucas pseudoprime: this test alone
            // does not suffice.
            (5459, Verdict::Undetermined),
            (364387 * 362751, Verdict::Composite),
            (364387 * 362753, Verdict::Composite),
            (364387 * 362755, Verdict::Composite),
            (364387 * 362757, Verdict::Composite),
        ];
        for &(n, want) in cases {
            assert_eq!(strong_lucas_selfridge(&Integer::from(n)), want, "SLS({})", n);
        }
        // A 33-digit strong Lucas pseudoprime (Arnault); BPSW still rejects it.
        let arnault = int("319889369713946602502766595032347");
        assert_eq!(strong_lucas_selfridge(&arnault), Verdict::Undetermined);
        assert_eq!(bpsw(&arnault), Verdict::Composite);
    }

    #[test]
    #[should_panic(expected = "positive odd N")]
    fn strong_lucas_selfridge_even_panics() {
        strong_lucas_selfridge(&Integer::from(100));
    }

    #[test]
    fn bpsw_catches_lucas_and_mr_pseudoprimes() {
        // Strong Lucas pseudoprime, caught by Miller-Rabin.
        assert_eq!(bpsw(&Integer::from(5459)), Verdict::Composite);
        // Base-2 strong pseudoprimes, caught by Lucas.
        for n in [2047i64, 3277, 4033, 4681, 8321] {
            assert_eq!(bpsw(&Integer::from(n)), Verdict::Composite, "bpsw({})", n);
        }
        // Carmichael numbers.
        for n in [561i64, 1105, 1729, 2821, 6601, 8911] {
            assert_eq!(bpsw(&Integer::from(n)), Verdict::Composite, "bpsw({})", n);
        }
    }

    #[test]
    fn bpsw_accepts_primes() {
        for n in [2i64, 3, 5, 1021, 1031, 17011, 104729, 1700021] {
            assert_ne!(bpsw(&Integer::from(n)), Verdict::Composite, "bpsw({})", n);
        }
        // Mersenne primes 2^p - 1.
        for p in [13u32, 17, 19, 31, 61, 89, 107, 127] {
            let m = (Integer::from(1u32) << p) - 1u32;
            assert_ne!(bpsw(&m), Verdict::Composite, "bpsw(M{})", p);
        }
    }

    #[test]
    #[should_panic(expected = "positive integers only")]
    fn bpsw_zero_panics() {
        bpsw(&Integer::new());
    }

    /// Cross-validation against GMP over an exhaustive small range.
    #[test]
    fn bpsw_agrees_with_gmp_up_to_fifty_thousand() {
        for n in 2u32..=50_000 {
            let v = Integer::from(n);
            let gmp_composite = v.is_probably_prime(25) == IsPrime::No;
            let bpsw_composite = bpsw(&v) == Verdict::Composite;
            assert_eq!(bpsw_composite, gmp_composite, "disagreement at {}", n);
        }
    }

    /// The long exhaustive run over the first million integers; run with
    /// `cargo test -- --ignored` when touching any of the sub-tests.
    #[test]
    #[ignore]
    fn bpsw_agrees_with_gmp_up_to_one_million() {
        for n in 2u32..=1_000_000 {
            let v = Integer::from(n);
            let gmp_composite = v.is_probably_prime(25) == IsPrime::No;
            let bpsw_composite = bpsw(&v) == Verdict::Composite;
            assert_eq!(bpsw_composite, gmp_composite, "disagreement at {}", n);
        }
    }

    #[test]
    fn solovay_strassen_classifies_odd_candidates() {
        for n in [5i64, 13, 101, 1021, 104729] {
            assert_eq!(
                solovay_strassen(&Integer::from(n), 10),
                Verdict::Undetermined,
                "SS({})",
                n
            );
        }
        for n in [9i64, 15, 221, 561, 1105, 8911] {
            assert_eq!(
                solovay_strassen(&Integer::from(n), 10),
                Verdict::Composite,
                "SS({})",
                n
            );
        }
        assert_eq!(solovay_strassen(&Integer::from(100), 10), Verdict::Composite);
    }
}
