use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Presented account does not match the bank")]
    WrongAccount,
    #[msg("Bank is still time-locked")]
    HandsTooWeak,
    #[msg("Bank has already been withdrawn")]
    AlreadyWithdrawn,
    #[msg("Bank already exists at this address")]
    AlreadyExists,
    #[msg("Sender cannot cover the escrowed amount")]
    InsufficientFunds,
    #[msg("Escrowed amount must be greater than zero")]
    ZeroAmount,
}
