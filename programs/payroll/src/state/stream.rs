use anchor_lang::prelude::*;

use crate::error::PayrollError;
use crate::utils::vesting;

/// Payroll stream PDA, one per (employer, employee) pair.
///
/// Seeds: `["stream", employer, employee]`. The paired vault token account
/// lives at `["vault", employer, employee]` with this PDA as its authority.
#[account]
pub struct Stream {
    /// Funding authority; the only signer allowed to deposit.
    pub employer: Pubkey,
    /// Beneficiary; the only signer allowed to claim.
    pub employee: Pubkey,
    /// Escrowed token mint.
    pub token_mint: Pubkey,
    /// Mint decimals, captured at creation.
    pub token_decimals: u8,
    /// Total ever escrowed. Monotonic non-decreasing.
    pub deposited_amount: u64,
    /// Total ever withdrawn by the employee. Monotonic non-decreasing,
    /// never exceeds `deposited_amount`.
    pub claimed_amount: u64,
    /// Linear accrual rate in token base units per second.
    pub rate_per_second: u64,
    /// Accrual start (Unix seconds), set once at creation.
    pub start_time: i64,
    /// Stream PDA bump, cached for vault-authority signing.
    pub bump: u8,
}

/// Lifecycle position, always derived from the two counters and never
/// stored, so it cannot drift out of sync with them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamStatus {
    /// Terms declared, nothing funded yet.
    Created,
    /// Funded with unclaimed balance remaining.
    Funded,
    /// Everything funded so far has been claimed. A further deposit
    /// re-opens accrual against the new cap.
    FullyClaimed,
}

impl Stream {
    pub const SIZE: usize =
        32 + // employer
        32 + // employee
        32 + // token_mint
        1 +  // token_decimals
        8 +  // deposited_amount
        8 +  // claimed_amount
        8 +  // rate_per_second
        8 +  // start_time
        1;   // bump

    pub fn status(&self) -> StreamStatus {
        if self.deposited_amount == 0 {
            StreamStatus::Created
        } else if self.claimed_amount < self.deposited_amount {
            StreamStatus::Funded
        } else {
            StreamStatus::FullyClaimed
        }
    }

    /// Raises the funded total. Fails without side effects on u64 overflow.
    pub fn record_deposit(&mut self, amount: u64) -> std::result::Result<(), PayrollError> {
        self.deposited_amount = self
            .deposited_amount
            .checked_add(amount)
            .ok_or(PayrollError::MathOverflow)?;
        Ok(())
    }

    /// Cumulative vested amount at `now_ts`, capped at the funded total.
    pub fn entitlement_at(&self, now_ts: i64) -> std::result::Result<u64, PayrollError> {
        vesting::entitlement(
            now_ts,
            self.start_time,
            self.rate_per_second,
            self.deposited_amount,
        )
    }

    /// Unpaid portion of the entitlement at `now_ts`.
    pub fn claimable_at(&self, now_ts: i64) -> std::result::Result<u64, PayrollError> {
        vesting::claimable(self.entitlement_at(now_ts)?, self.claimed_amount)
    }

    /// Marks the full entitlement as paid. Assignment rather than increment:
    /// equivalent in correct executions, but immune to rounding drift if the
    /// entitlement is ever recomputed under different clamps.
    pub fn settle_claim(&mut self, entitlement: u64) {
        self.claimed_amount = entitlement;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(deposited: u64, claimed: u64, rate: u64) -> Stream {
        Stream {
            employer: Pubkey::new_unique(),
            employee: Pubkey::new_unique(),
            token_mint: Pubkey::new_unique(),
            token_decimals: 6,
            deposited_amount: deposited,
            claimed_amount: claimed,
            rate_per_second: rate,
            start_time: 100,
            bump: 255,
        }
    }

    #[test]
    fn status_derived_from_counters() {
        assert_eq!(stream(0, 0, 1).status(), StreamStatus::Created);
        assert_eq!(stream(980, 0, 1).status(), StreamStatus::Funded);
        assert_eq!(stream(980, 60, 1).status(), StreamStatus::Funded);
        assert_eq!(stream(980, 980, 1).status(), StreamStatus::FullyClaimed);
    }

    #[test]
    fn deposit_reopens_fully_claimed_stream() {
        let mut s = stream(980, 980, 1);
        assert_eq!(s.status(), StreamStatus::FullyClaimed);
        s.record_deposit(20).unwrap();
        assert_eq!(s.deposited_amount, 1_000);
        assert_eq!(s.status(), StreamStatus::Funded);
    }

    #[test]
    fn deposit_overflow_leaves_state_unchanged() {
        let mut s = stream(u64::MAX - 5, 0, 1);
        assert!(s.record_deposit(10).is_err());
        assert_eq!(s.deposited_amount, u64::MAX - 5);
    }

    #[test]
    fn partial_claim_accounting() {
        // rate 2, deposit 980, 30s elapsed: 60 vested, 920 left in vault.
        let mut s = stream(980, 0, 2);
        let entitlement = s.entitlement_at(130).unwrap();
        assert_eq!(entitlement, 60);
        assert_eq!(s.claimable_at(130).unwrap(), 60);

        s.settle_claim(entitlement);
        assert_eq!(s.claimed_amount, 60);
        assert_eq!(s.deposited_amount - s.claimed_amount, 920);
        assert_eq!(s.status(), StreamStatus::Funded);
    }

    #[test]
    fn repeat_claim_at_same_time_yields_nothing() {
        let mut s = stream(980, 0, 2);
        let e1 = s.entitlement_at(130).unwrap();
        s.settle_claim(e1);
        // oracle time unchanged: nothing further claimable
        assert_eq!(s.claimable_at(130).unwrap(), 0);
    }

    #[test]
    fn sequential_claims_never_double_pay() {
        let mut s = stream(980, 0, 2);
        let e1 = s.entitlement_at(130).unwrap();
        s.settle_claim(e1);
        let e2 = s.entitlement_at(200).unwrap();
        assert_eq!(e2, 200); // (200 - 100) * 2
        assert_eq!(s.claimable_at(200).unwrap(), e2 - e1);
        s.settle_claim(e2);
        // final claimed equals entitlement at the later time, nothing more
        assert_eq!(s.claimed_amount, e2);
        assert_eq!(s.claimable_at(200).unwrap(), 0);
    }

    #[test]
    fn full_drain_round_trip() {
        let mut s = stream(0, 0, 3);
        s.record_deposit(90).unwrap();
        // long after accrual passes the cap, the whole deposit is claimable
        let e = s.entitlement_at(1_000_000).unwrap();
        assert_eq!(e, 90);
        s.settle_claim(e);
        assert_eq!(s.claimed_amount, 90);
        assert_eq!(s.deposited_amount - s.claimed_amount, 0);
        assert_eq!(s.status(), StreamStatus::FullyClaimed);
    }

    #[test]
    fn claimed_never_exceeds_deposited() {
        let mut s = stream(0, 0, 5);
        let times = [100, 140, 141, 500, 10_000];
        for (i, now) in times.iter().enumerate() {
            if i % 2 == 0 {
                s.record_deposit(37 * (i as u64 + 1)).unwrap();
            }
            let e = s.entitlement_at(*now).unwrap();
            s.settle_claim(e);
            assert!(s.claimed_amount <= s.deposited_amount);
        }
    }
}
