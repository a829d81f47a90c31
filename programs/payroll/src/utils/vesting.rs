//! Linear per-second vesting math.
//!
//! Entitlement is the cumulative amount that has ever vested:
//! `min(elapsed * rate_per_second, deposited_amount)`. The clamp to the
//! funded total is the sole guard against over-withdrawal; the transfer
//! primitive knows nothing about the schedule. Accrual overflowing u64 is
//! a hard error, never a clamp.

use crate::error::PayrollError;

/// Seconds elapsed since stream start, clamped at zero for clocks at or
/// behind the start timestamp. Widened to i128 so the full i64 timestamp
/// range subtracts without wrapping; the difference always fits u64.
pub fn elapsed_seconds(now_ts: i64, start_time: i64) -> u64 {
    let diff = (now_ts as i128) - (start_time as i128);
    if diff <= 0 {
        0
    } else {
        diff as u64
    }
}

/// Total amount ever vested at `now_ts`, capped at the funded total.
pub fn entitlement(
    now_ts: i64,
    start_time: i64,
    rate_per_second: u64,
    deposited_amount: u64,
) -> Result<u64, PayrollError> {
    let accrued = elapsed_seconds(now_ts, start_time)
        .checked_mul(rate_per_second)
        .ok_or(PayrollError::MathOverflow)?;
    Ok(accrued.min(deposited_amount))
}

/// Portion of the entitlement not yet paid out. `claimed` can never exceed
/// the entitlement in a correct execution; a shortfall is a math error.
pub fn claimable(entitlement: u64, claimed_amount: u64) -> Result<u64, PayrollError> {
    entitlement
        .checked_sub(claimed_amount)
        .ok_or(PayrollError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_clamps_at_start() {
        assert_eq!(elapsed_seconds(100, 100), 0);
        assert_eq!(elapsed_seconds(99, 100), 0);
        assert_eq!(elapsed_seconds(130, 100), 30);
    }

    #[test]
    fn elapsed_spans_full_timestamp_range() {
        // extreme timestamps must subtract without wrapping
        assert_eq!(elapsed_seconds(i64::MAX, i64::MIN), u64::MAX);
        assert_eq!(elapsed_seconds(0, i64::MIN), (i64::MAX as u64) + 1);
        assert_eq!(elapsed_seconds(i64::MIN, i64::MAX), 0);
    }

    #[test]
    fn entitlement_clamps_to_funded_total() {
        // rate 2, 30s elapsed, 980 funded => 60 vested
        assert_eq!(entitlement(130, 100, 2, 980).unwrap(), 60);
        // accrual far past the cap stays at the cap
        assert_eq!(entitlement(100_000, 100, 2, 980).unwrap(), 980);
        // nothing funded => nothing vested, regardless of accrual
        assert_eq!(entitlement(100_000, 100, 2, 0).unwrap(), 0);
    }

    #[test]
    fn entitlement_monotonic_in_time() {
        let mut prev = 0;
        for now in [100, 101, 150, 1_000, 10_000] {
            let e = entitlement(now, 100, 7, 5_000).unwrap();
            assert!(e >= prev);
            prev = e;
        }
    }

    #[test]
    fn accrual_overflow_is_hard_error() {
        // elapsed * rate wraps u64: fails even though the cap is tiny.
        let err = entitlement(i64::MAX, 0, u64::MAX, 10).unwrap_err();
        assert!(matches!(err, PayrollError::MathOverflow));
    }

    #[test]
    fn claimable_subtracts_paid_portion() {
        assert_eq!(claimable(60, 0).unwrap(), 60);
        assert_eq!(claimable(60, 60).unwrap(), 0);
        assert_eq!(claimable(980, 60).unwrap(), 920);
        assert!(matches!(
            claimable(59, 60).unwrap_err(),
            PayrollError::MathOverflow
        ));
    }
}
