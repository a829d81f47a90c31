use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("61EiRiRNSU4ZEhnn8JpC6L9VRHz6oKvD9YzSP6bPayrL");

/// Token-streaming payroll: an employer escrows SPL tokens into a
/// program-owned vault, and the paired employee withdraws the linearly
/// vested portion at any time. One stream per (employer, employee) pair,
/// addressed by PDA so any party can locate it from the two identities.
#[program]
pub mod payroll {
    use super::*;

    /// Declares stream terms and allocates the stream record plus its
    /// vault. Funding happens separately via `deposit_to_vault`.
    pub fn create_stream(ctx: Context<CreateStream>, rate_per_second: u64) -> Result<()> {
        instructions::create_stream::create_stream(ctx, rate_per_second)
    }

    /// Moves tokens from the employer into the vault and raises the
    /// funded total, as one atomic unit.
    pub fn deposit_to_vault(ctx: Context<DepositToVault>, amount: u64) -> Result<()> {
        instructions::deposit_to_vault::deposit_to_vault(ctx, amount)
    }

    /// Pays out everything vested and not yet claimed to the employee.
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::claim(ctx)
    }

    /// Emits the current vesting position without mutating state.
    pub fn emit_stream_quote(ctx: Context<EmitStreamQuote>) -> Result<()> {
        instructions::emit_stream_quote::emit_stream_quote(ctx)
    }
}
