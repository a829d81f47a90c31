use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{STREAM_SEED, VAULT_SEED};
use crate::error::PayrollError;
use crate::state::Stream;

pub fn create_stream(ctx: Context<CreateStream>, rate_per_second: u64) -> Result<()> {
    require!(rate_per_second > 0, PayrollError::InvalidRate);

    let stream = &mut ctx.accounts.stream;
    stream.employer = ctx.accounts.employer.key();
    stream.employee = ctx.accounts.employee.key();
    stream.token_mint = ctx.accounts.mint.key();
    stream.token_decimals = ctx.accounts.mint.decimals;
    stream.deposited_amount = 0;
    stream.claimed_amount = 0;
    stream.rate_per_second = rate_per_second;
    stream.start_time = Clock::get()?.unix_timestamp;
    stream.bump = ctx.bumps.stream;

    emit!(StreamCreated {
        employer: stream.employer,
        employee: stream.employee,
        mint: stream.token_mint,
        rate_per_second: stream.rate_per_second,
        start_time: stream.start_time,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateStream<'info> {
    #[account(
        init,
        payer = employer,
        space = 8 + Stream::SIZE,
        seeds = [STREAM_SEED, employer.key().as_ref(), employee.key().as_ref()],
        bump
    )]
    pub stream: Account<'info, Stream>,

    #[account(
        init,
        payer = employer,
        token::mint = mint,
        token::authority = stream,
        seeds = [VAULT_SEED, employer.key().as_ref(), employee.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub employer: Signer<'info>,

    /// CHECK: recorded as the stream beneficiary; does not sign at creation.
    pub employee: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct StreamCreated {
    pub employer: Pubkey,
    pub employee: Pubkey,
    pub mint: Pubkey,
    pub rate_per_second: u64,
    pub start_time: i64,
}
