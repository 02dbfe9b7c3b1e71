use anchor_lang::prelude::*;

use crate::{constants::BANK_SEED, events::BankWithdrawn, state::Bank};

#[derive(Accounts)]
pub struct WithdrawBank<'info> {
    #[account(
        mut,
        seeds = [
            BANK_SEED,
            bank.sender.as_ref(),
            bank.receiver.as_ref(),
            bank.timestamp.to_le_bytes().as_ref()
        ],
        bump = bank.bump
    )]
    pub bank: Account<'info, Bank>,
    pub sender: Signer<'info>,
    /// CHECK: matched against the stored receiver by `Bank::release`
    #[account(mut)]
    pub receiver: UncheckedAccount<'info>,
    pub system_program: Program<'info, System>,
}

impl<'info> WithdrawBank<'info> {
    pub fn withdraw(&mut self, timestamp: u64) -> Result<()> {
        let now = clock_time(Clock::get()?.unix_timestamp);
        msg!("withdraw claimed at {}, clock at {}", timestamp, now);

        let amount = self
            .bank
            .release(&self.sender.key(), &self.receiver.key(), now)?;

        self.bank.sub_lamports(amount)?;
        self.receiver.add_lamports(amount)?;

        msg!("bank {} released {} lamports", self.bank.key(), amount);
        emit!(BankWithdrawn {
            bank: self.bank.key(),
            sender: self.bank.sender,
            receiver: self.bank.receiver,
            amount,
            at: now,
        });
        Ok(())
    }
}

/// Cluster time in Unix seconds. A clock before the epoch counts as zero.
pub fn clock_time(unix_timestamp: i64) -> u64 {
    u64::try_from(unix_timestamp).unwrap_or(0)
}
