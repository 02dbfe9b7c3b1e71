use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::{
    constants::BANK_SEED,
    events::BankCreated,
    state::{spendable, Bank},
};

#[derive(Accounts)]
#[instruction(timestamp: u64)]
pub struct CreateBank<'info> {
    #[account(
        init_if_needed,
        payer = sender,
        space = Bank::INIT_SPACE,
        seeds = [
            BANK_SEED,
            sender.key().as_ref(),
            receiver.key().as_ref(),
            timestamp.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub bank: Account<'info, Bank>,
    #[account(mut)]
    pub sender: Signer<'info>,
    /// CHECK: receiver is a wallet key passed by the sender, only recorded
    pub receiver: UncheckedAccount<'info>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreateBank<'info> {
    pub fn save_bank(&mut self, timestamp: u64, amount: u64, bumps: &CreateBankBumps) -> Result<()> {
        // Rent for the bank has already been taken from the sender at this point.
        // The sender pays fees, so it must stay rent-exempt itself.
        let reserve = Rent::get()?.minimum_balance(0);
        let available = spendable(self.sender.lamports(), reserve);

        self.bank.open(
            self.sender.key(),
            self.receiver.key(),
            amount,
            timestamp,
            bumps.bank,
            available,
        )?;
        Ok(())
    }

    pub fn deposit(&mut self) -> Result<()> {
        let transfer_accounts = Transfer {
            from: self.sender.to_account_info(),
            to: self.bank.to_account_info(),
        };

        let cpi_ctx = CpiContext::new(self.system_program.to_account_info(), transfer_accounts);

        transfer(cpi_ctx, self.bank.amount)?;

        msg!(
            "bank {} locked {} lamports until {}",
            self.bank.key(),
            self.bank.amount,
            self.bank.timestamp
        );
        emit!(BankCreated {
            bank: self.bank.key(),
            sender: self.bank.sender,
            receiver: self.bank.receiver,
            amount: self.bank.amount,
            timestamp: self.bank.timestamp,
        });
        Ok(())
    }
}
