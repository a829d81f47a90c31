use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{STREAM_SEED, VAULT_SEED};
use crate::error::PayrollError;
use crate::state::Stream;

pub fn deposit_to_vault(ctx: Context<DepositToVault>, amount: u64) -> Result<()> {
    require!(amount > 0, PayrollError::InvalidDeposit);

    let stream = &ctx.accounts.stream;
    require_keys_eq!(
        ctx.accounts.employer_token_account.mint,
        stream.token_mint,
        PayrollError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.employer_token_account.owner,
        ctx.accounts.employer.key(),
        PayrollError::InvalidTokenAccount
    );

    // Record before moving funds so an overflowing deposit transfers nothing.
    ctx.accounts.stream.record_deposit(amount)?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.employer_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.employer.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.vault.reload()?;

    emit!(TokensDeposited {
        employer: ctx.accounts.employer.key(),
        employee: ctx.accounts.stream.employee,
        amount,
        deposited_total: ctx.accounts.stream.deposited_amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositToVault<'info> {
    #[account(
        mut,
        seeds = [STREAM_SEED, stream.employer.as_ref(), stream.employee.as_ref()],
        bump = stream.bump,
        has_one = employer @ PayrollError::InvalidAuthority,
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
    pub employer_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub employer: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensDeposited {
    pub employer: Pubkey,
    pub employee: Pubkey,
    pub amount: u64,
    pub deposited_total: u64,
    pub vault_balance: u64,
}
