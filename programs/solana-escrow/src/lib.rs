use anchor_lang::prelude::*;

pub mod contexts;
use contexts::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod state;

declare_id!("7yN3dcoXeJKhzAx7uPvRuawTu2MUW1zEUkruSB88ZdTG");

#[program]
pub mod solana_escrow {
    use super::*;

    pub fn create_bank(ctx: Context<CreateBank>, timestamp: u64, amount: u64) -> Result<()> {
        ctx.accounts.save_bank(timestamp, amount, &ctx.bumps)?;
        ctx.accounts.deposit()
    }

    pub fn withdraw_bank(ctx: Context<WithdrawBank>, timestamp: u64) -> Result<()> {
        ctx.accounts.withdraw(timestamp)
    }
}
