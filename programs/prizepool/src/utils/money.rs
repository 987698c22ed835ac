use anchor_lang::prelude::*;

use crate::constants::BPS_DENOM;
use crate::errors::PrizePoolErrorCode;

/// `amount * mul / div` in u128, rounded down to the cent.
///
/// Rounding down keeps every payout set within its pool; the sub-cent
/// remainder stays in the carryover.
pub fn mul_div(amount: u64, mul: u128, div: u128) -> Result<u64> {
    require!(div > 0, PrizePoolErrorCode::MathOverflow);
    let product = (amount as u128)
        .checked_mul(mul)
        .ok_or(PrizePoolErrorCode::MathOverflow)?;
    u64::try_from(product / div).map_err(|_| error!(PrizePoolErrorCode::MathOverflow))
}

/// `bps` basis points of `amount`.
pub fn bps_share(amount: u64, bps: u64) -> Result<u64> {
    mul_div(amount, bps as u128, BPS_DENOM as u128)
}

/// Formats cents as `123.45` for log lines.
pub fn fmt_cents(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_round_down() {
        assert_eq!(bps_share(100_000, 9_000).unwrap(), 90_000);
        assert_eq!(bps_share(333, 6_500).unwrap(), 216); // 216.45
        assert_eq!(mul_div(1_000, 1, 3).unwrap(), 333);
    }

    #[test]
    fn zero_divisor_is_an_error() {
        assert!(mul_div(1, 1, 0).is_err());
    }

    #[test]
    fn overflow_is_an_error() {
        assert!(mul_div(u64::MAX, 2, 1).is_err());
    }

    #[test]
    fn cents_formatting() {
        assert_eq!(fmt_cents(90_000), "900.00");
        assert_eq!(fmt_cents(7), "0.07");
    }
}
