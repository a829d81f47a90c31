use anchor_lang::prelude::*;

use crate::constants::STREAM_SEED;
use crate::state::Stream;

/// Read-only quote of the current vesting position. Shares the math path
/// with `claim`, so a quote and a claim at the same clock always agree.
pub fn emit_stream_quote(ctx: Context<EmitStreamQuote>) -> Result<()> {
    let stream = &ctx.accounts.stream;
    let now = Clock::get()?.unix_timestamp;

    let entitlement = stream.entitlement_at(now)?;
    let claimable = stream.claimable_at(now)?;

    emit!(StreamQuote {
        employer: stream.employer,
        employee: stream.employee,
        entitlement,
        claimed_amount: stream.claimed_amount,
        claimable,
        deposited_amount: stream.deposited_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitStreamQuote<'info> {
    #[account(
        seeds = [STREAM_SEED, stream.employer.as_ref(), stream.employee.as_ref()],
        bump = stream.bump,
    )]
    pub stream: Account<'info, Stream>,
}

#[event]
pub struct StreamQuote {
    pub employer: Pubkey,
    pub employee: Pubkey,
    pub entitlement: u64,
    pub claimed_amount: u64,
    pub claimable: u64,
    pub deposited_amount: u64,
}
