//! # Library-Internal Utilities
//!
//! Sizing helpers for the encodings. They compute with `f64` logarithms
//! like the classic cardinality encoders do and then correct the result
//! with integer arithmetic, so rounding can never break the invariants the
//! encodings rely on.

/// The number of bits needed to give each of `n` items a distinct code,
/// i.e., `ceil(log2(n))`. Returns `0` for `n <= 1`.
#[cfg_attr(feature = "internals", visibility::make(pub))]
#[must_use]
pub(crate) fn code_width(n: usize) -> u32 {
    if n <= 1 {
        return 0;
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut width = ((n as f64).ln() / 2_f64.ln()).ceil() as u32;
    while width > 0 && (1_usize << (width - 1)) >= n {
        width -= 1;
    }
    while (1_usize << width) < n {
        width += 1;
    }
    width
}

/// The smallest power of two that is at least `n`
#[cfg_attr(feature = "internals", visibility::make(pub))]
#[must_use]
pub(crate) fn pow2_at_least(n: usize) -> usize {
    if n <= 1 {
        return 1;
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut pow = {
        let nf = n as f64;
        let mut exp = (nf.ln() / 2_f64.ln()).trunc();
        if nf - exp.exp2() >= 1e-6 {
            exp += 1.;
        }
        ((2_f64.ln() * exp).exp() + 0.1) as usize
    };
    pow = pow.max(1).next_power_of_two();
    while pow < n {
        pow <<= 1;
    }
    while pow > 1 && pow >> 1 >= n {
        pow >>= 1;
    }
    pow
}

/// The smallest power of two strictly greater than `n`
#[cfg_attr(feature = "internals", visibility::make(pub))]
#[must_use]
pub(crate) fn pow2_above(n: usize) -> usize {
    if n == 0 {
        return 1;
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut pow = (((n as f64).ln() / 2_f64.ln()).floor() + 1.).exp2().round() as usize;
    pow = pow.max(1).next_power_of_two();
    while pow <= n {
        pow <<= 1;
    }
    while pow >> 1 > n {
        pow >>= 1;
    }
    pow
}

/// `max(2, floor(sqrt(n)))`, the group size of the modulo totalizers
#[cfg_attr(feature = "internals", visibility::make(pub))]
#[must_use]
pub(crate) fn modulo_base(n: usize) -> usize {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut root = (n as f64).sqrt().floor() as usize;
    while root > 0 && root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root.max(2)
}
