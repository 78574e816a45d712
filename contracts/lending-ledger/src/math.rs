//! Checked integer arithmetic for ledger amounts.
//!
//! `add` and `multiply` fail with [`Error::ArithmeticOverflow`]; `subtract`
//! floors at zero and never fails. Call sites that must reject an underflow
//! compare the operands before subtracting.

use crate::constants::BPS_SCALE;
use crate::errors::Error;

pub fn add(a: u128, b: u128) -> Result<u128, Error> {
    let sum = a.wrapping_add(b);
    if sum < a || sum < b {
        return Err(Error::ArithmeticOverflow);
    }
    Ok(sum)
}

pub fn subtract(a: u128, b: u128) -> u128 {
    if a >= b {
        a - b
    } else {
        0
    }
}

pub fn multiply(a: u128, b: u128) -> Result<u128, Error> {
    let product = a.wrapping_mul(b);
    if a == 0 || product / a == b {
        Ok(product)
    } else {
        Err(Error::ArithmeticOverflow)
    }
}

/// `amount * bps / 10_000`, rounded down.
pub fn bps_of(amount: u128, bps: u128) -> Result<u128, Error> {
    Ok(multiply(amount, bps)? / BPS_SCALE)
}

/// `numerator * 10_000 / denominator`. Callers handle a zero denominator.
pub fn ratio_bps(numerator: u128, denominator: u128) -> Result<u128, Error> {
    debug_assert!(denominator != 0);
    Ok(multiply(numerator, BPS_SCALE)? / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn add_detects_wraparound() {
        assert_eq!(add(u128::MAX, 1), Err(Error::ArithmeticOverflow));
        assert_eq!(add(1, u128::MAX), Err(Error::ArithmeticOverflow));
        assert_eq!(add(u128::MAX, 0), Ok(u128::MAX));
        assert_eq!(add(2, 3), Ok(5));
    }

    #[test]
    fn subtract_floors_at_zero() {
        assert_eq!(subtract(10, 3), 7);
        assert_eq!(subtract(3, 3), 0);
        assert_eq!(subtract(3, 10), 0);
        assert_eq!(subtract(0, u128::MAX), 0);
    }

    #[test]
    fn multiply_edges() {
        assert_eq!(multiply(0, u128::MAX), Ok(0));
        assert_eq!(multiply(u128::MAX, 0), Ok(0));
        assert_eq!(multiply(u128::MAX, 1), Ok(u128::MAX));
        assert_eq!(multiply(u128::MAX, 2), Err(Error::ArithmeticOverflow));
        assert_eq!(multiply(1u128 << 64, 1u128 << 64), Err(Error::ArithmeticOverflow));
        assert_eq!(multiply(1u128 << 63, 1u128 << 64), Ok(1u128 << 127));
    }

    #[test]
    fn bps_helpers() {
        assert_eq!(bps_of(500_000, 10_500), Ok(525_000));
        assert_eq!(bps_of(1_000_000, 5_000), Ok(500_000));
        assert_eq!(ratio_bps(1_000_000, 600_000), Ok(16_666));
        assert_eq!(ratio_bps(1_000_000, 700_000), Ok(14_285));
        assert_eq!(ratio_bps(u128::MAX, 1), Err(Error::ArithmeticOverflow));
    }

    proptest! {
        #[test]
        fn prop_multiply_matches_checked_mul(a in 1u128..=u128::MAX, b in any::<u128>()) {
            match a.checked_mul(b) {
                Some(expected) => prop_assert_eq!(multiply(a, b), Ok(expected)),
                None => prop_assert_eq!(multiply(a, b), Err(Error::ArithmeticOverflow)),
            }
        }

        #[test]
        fn prop_multiply_overflows_above_width(a in 2u128..=(u64::MAX as u128)) {
            let b = u128::MAX / a + 1;
            prop_assert_eq!(multiply(a, b), Err(Error::ArithmeticOverflow));
        }

        #[test]
        fn prop_add_matches_checked_add(a in any::<u128>(), b in any::<u128>()) {
            match a.checked_add(b) {
                Some(expected) => prop_assert_eq!(add(a, b), Ok(expected)),
                None => prop_assert_eq!(add(a, b), Err(Error::ArithmeticOverflow)),
            }
        }

        #[test]
        fn prop_subtract_never_exceeds_minuend(a in any::<u128>(), b in any::<u128>()) {
            let diff = subtract(a, b);
            prop_assert!(diff <= a);
            prop_assert_eq!(diff, a.saturating_sub(b));
        }
    }
}
