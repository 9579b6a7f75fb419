use num_traits::{PrimInt, Unsigned};

/// Calculates the GCD for (u, v) ∈ (N, N).
///
/// The Euclidean method is used as the underlying implementation; it edges out the binary method
/// on the small operands fractions are normalized with.
pub fn gcd<N: Unsigned + PrimInt>(u: N, v: N) -> N {
    euclidean_gcd(u, v)
}

/// Calculates the GCD of the magnitudes of two signed 64-bit integers.
///
/// `gcd_i64(0, 0)` is `0`; the result only exceeds `i64::MAX` for `gcd_i64(i64::MIN, 0)` and
/// `gcd_i64(i64::MIN, i64::MIN)`.
#[inline]
pub fn gcd_i64(u: i64, v: i64) -> u64 {
    gcd(u.unsigned_abs(), v.unsigned_abs())
}

/// Stein's algorithm: strips common factors of two with shifts and reduces by subtraction, so it
/// never divides. Only the benches call it, to compare against [euclidean_gcd].
#[allow(unused)]
fn binary_gcd<N: Unsigned + PrimInt>(mut u: N, mut v: N) -> N {
    if u == N::zero() {
        return v;
    }
    if v == N::zero() {
        return u;
    }

    let shift_back = (u | v).trailing_zeros() as usize;
    u = u >> u.trailing_zeros() as usize;
    v = v >> v.trailing_zeros() as usize;
    if u > v {
        std::mem::swap(&mut u, &mut v);
    }
    v = v - u;
    while v != N::zero() {
        v = v >> v.trailing_zeros() as usize;
        if u > v {
            std::mem::swap(&mut u, &mut v);
        }
        v = v - u;
    }
    u << shift_back
}

/// Exposes [binary_gcd] to the gcd benches.
#[cfg(feature = "benchmark-internals")]
pub fn _binary_gcd<N: Unsigned + PrimInt>(u: N, v: N) -> N {
    binary_gcd(u, v)
}

/// Repeatedly replaces the larger operand by its remainder modulo the smaller one.
fn euclidean_gcd<N: Unsigned + PrimInt>(mut u: N, mut v: N) -> N {
    while !v.is_zero() {
        let r = u % v;
        u = v;
        v = r;
    }
    u
}

/// Exposes [euclidean_gcd] to the gcd benches.
#[cfg(feature = "benchmark-internals")]
pub fn _euclidean_gcd<N: Unsigned + PrimInt>(u: N, v: N) -> N {
    euclidean_gcd(u, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASES: [(u64, u64, u64); 9] = [
        (13, 13, 13),
        (37, 600, 1),
        (20, 100, 20),
        (624_129, 2_061_517, 18_913),
        (600, 37, 1),
        (100, 20, 20),
        (2_061_517, 624_129, 18_913),
        (0, 7, 7),
        (7, 0, 7),
    ];

    #[test]
    fn test_binary_gcd() {
        for (u, v, r) in CASES.iter() {
            assert_eq!(binary_gcd(*u, *v), *r);
        }
    }

    #[test]
    fn test_euclidean_gcd() {
        for (u, v, r) in CASES.iter() {
            assert_eq!(euclidean_gcd(*u, *v), *r);
        }
    }

    #[test]
    fn test_gcd_i64_ignores_sign() {
        assert_eq!(gcd_i64(-12, 18), 6);
        assert_eq!(gcd_i64(12, -18), 6);
        assert_eq!(gcd_i64(-12, -18), 6);
        assert_eq!(gcd_i64(0, -5), 5);
    }
}
