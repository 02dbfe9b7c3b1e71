use anchor_lang::prelude::*;

use crate::{constants::BANK_SEED, errors::EscrowError};

#[account]
#[derive(Default, Debug)]
pub struct Bank {
    pub sender: Pubkey,
    pub receiver: Pubkey,
    pub amount: u64,
    /// Unix time from which the bank can be withdrawn.
    pub timestamp: u64,
    pub bump: u8,
    pub withdrawn: bool,
}

impl Space for Bank {
    const INIT_SPACE: usize = 8 + 32 + 32 + 8 + 8 + 1 + 1;
}

/// Lamports a wallet can give away while keeping `reserve` for itself.
pub fn spendable(balance: u64, reserve: u64) -> u64 {
    balance.saturating_sub(reserve)
}

impl Bank {
    pub fn derive_address(sender: &Pubkey, receiver: &Pubkey, timestamp: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                BANK_SEED,
                sender.as_ref(),
                receiver.as_ref(),
                timestamp.to_le_bytes().as_ref(),
            ],
            &crate::ID,
        )
    }

    /// A zeroed account (fresh from `init_if_needed`) has no sender yet.
    pub fn is_initialized(&self) -> bool {
        self.sender != Pubkey::default()
    }

    /// Lamports the bank holds on behalf of the receiver.
    pub fn held(&self) -> u64 {
        if self.withdrawn {
            0
        } else {
            self.amount
        }
    }

    /// Populates an empty bank. `available` is what the sender can spend
    /// once the account rent has been paid.
    pub fn open(
        &mut self,
        sender: Pubkey,
        receiver: Pubkey,
        amount: u64,
        timestamp: u64,
        bump: u8,
        available: u64,
    ) -> core::result::Result<(), EscrowError> {
        if self.is_initialized() {
            return Err(EscrowError::AlreadyExists);
        }
        if amount == 0 {
            return Err(EscrowError::ZeroAmount);
        }
        if available < amount {
            return Err(EscrowError::InsufficientFunds);
        }

        *self = Bank {
            sender,
            receiver,
            amount,
            timestamp,
            bump,
            withdrawn: false,
        };
        Ok(())
    }

    /// Decides whether `sender` may release the bank to `receiver` at `now`.
    ///
    /// Checks run in order: identity, timelock, terminal state.
    pub fn authorize_withdrawal(
        &self,
        sender: &Pubkey,
        receiver: &Pubkey,
        now: u64,
    ) -> core::result::Result<(), EscrowError> {
        if *sender != self.sender || *receiver != self.receiver {
            return Err(EscrowError::WrongAccount);
        }
        if now < self.timestamp {
            return Err(EscrowError::HandsTooWeak);
        }
        if self.withdrawn {
            return Err(EscrowError::AlreadyWithdrawn);
        }
        Ok(())
    }

    /// Authorizes and retires the bank in one step, returning the lamports
    /// owed to the receiver.
    pub fn release(
        &mut self,
        sender: &Pubkey,
        receiver: &Pubkey,
        now: u64,
    ) -> core::result::Result<u64, EscrowError> {
        self.authorize_withdrawal(sender, receiver, now)?;
        self.withdrawn = true;
        Ok(self.amount)
    }
}
