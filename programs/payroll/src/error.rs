use anchor_lang::prelude::*;

/// Custom error codes for the streaming payroll program.
#[error_code]
pub enum PayrollError {
    #[msg("Rate per second must be greater than zero")]
    InvalidRate,

    #[msg("Deposit amount must be greater than zero")]
    InvalidDeposit,

    #[msg("Unauthorized: signer does not match the stream authority")]
    InvalidAuthority,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Nothing to claim yet")]
    NothingToClaim,
}
