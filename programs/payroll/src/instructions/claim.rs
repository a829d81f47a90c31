use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{STREAM_SEED, VAULT_SEED};
use crate::error::PayrollError;
use crate::state::Stream;

pub fn claim(ctx: Context<Claim>) -> Result<()> {
    // Capture the AccountInfo before taking borrows for the math below.
    let stream_ai = ctx.accounts.stream.to_account_info();

    let stream = &ctx.accounts.stream;
    require_keys_eq!(
        ctx.accounts.employee_token_account.mint,
        stream.token_mint,
        PayrollError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.employee_token_account.owner,
        ctx.accounts.employee.key(),
        PayrollError::InvalidTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;
    let entitlement = stream.entitlement_at(now)?;
    let claimable = stream.claimable_at(now)?;
    require!(claimable > 0, PayrollError::NothingToClaim);
    require!(
        ctx.accounts.vault.amount >= claimable,
        PayrollError::InsufficientVaultBalance
    );

    let employer = stream.employer;
    let employee = stream.employee;
    let bump = stream.bump;

    // CPI transfer from vault to employee, signed by the stream PDA.
    let signer_seeds: &[&[&[u8]]] =
        &[&[STREAM_SEED, employer.as_ref(), employee.as_ref(), &[bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.employee_token_account.to_account_info(),
                authority: stream_ai,
            },
            signer_seeds,
        ),
        claimable,
    )?;

    ctx.accounts.stream.settle_claim(entitlement);
    ctx.accounts.vault.reload()?;

    emit!(TokensClaimed {
        employee,
        amount: claimable,
        claimed_total: entitlement,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(
        mut,
        seeds = [STREAM_SEED, stream.employer.as_ref(), stream.employee.as_ref()],
        bump = stream.bump,
        has_one = employee @ PayrollError::InvalidAuthority,
    )]
    pub stream: Account<'info, Stream>,

    #[account(
        mut,
        seeds = [VAULT_SEED, stream.employer.as_ref(), stream.employee.as_ref()],
        bump,
        constraint = vault.mint == stream.token_mint @ PayrollError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub employee_token_account: Account<'info, TokenAccount>,

    pub employee: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensClaimed {
    pub employee: Pubkey,
    pub amount: u64,
    pub claimed_total: u64,
    pub vault_balance: u64,
}
