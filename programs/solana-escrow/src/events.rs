use anchor_lang::prelude::*;

#[event]
pub struct BankCreated {
    pub bank: Pubkey,
    pub sender: Pubkey,
    pub receiver: Pubkey,
    pub amount: u64,
    pub timestamp: u64,
}

#[event]
pub struct BankWithdrawn {
    pub bank: Pubkey,
    pub sender: Pubkey,
    pub receiver: Pubkey,
    pub amount: u64,
    /// Time the timelock was evaluated against.
    pub at: u64,
}
