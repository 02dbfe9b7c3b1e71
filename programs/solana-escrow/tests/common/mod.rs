use std::collections::HashMap;

use anchor_lang::prelude::Pubkey;
use solana_escrow::{
    constants::BANK_SEED,
    contexts::clock_time,
    errors::EscrowError,
    state::{spendable, Bank},
};

/// Rent-exempt reserve charged when a bank account is first allocated.
pub const BANK_RENT: u64 = 1_336_320;

/// Rent-exempt minimum of a data-less wallet, kept back by the fee payer.
pub const WALLET_RESERVE: u64 = 890_880;

/// In-memory stand-in for the cluster: lamport balances, bank accounts keyed
/// by address, and a settable clock. Every operation commits all of its
/// changes or none.
///
/// `create` and `withdraw` follow `CreateBank` and `WithdrawBank` in
/// `src/contexts/` step for step and must be kept in line with them.
#[derive(Default)]
pub struct TestLedger {
    pub clock: i64,
    lamports: HashMap<Pubkey, u64>,
    banks: HashMap<Pubkey, Bank>,
}

impl TestLedger {
    pub fn new(clock: i64) -> Self {
        Self {
            clock,
            ..Default::default()
        }
    }

    pub fn fund(&mut self, key: Pubkey, lamports: u64) {
        *self.lamports.entry(key).or_default() += lamports;
    }

    pub fn balance(&self, key: &Pubkey) -> u64 {
        self.lamports.get(key).copied().unwrap_or_default()
    }

    pub fn fetch(&self, bank: &Pubkey) -> Option<&Bank> {
        self.banks.get(bank)
    }

    /// Mirrors `create_bank`: allocate (or reopen) the PDA, then deposit.
    pub fn create(
        &mut self,
        sender: Pubkey,
        receiver: Pubkey,
        timestamp: u64,
        amount: u64,
    ) -> Result<Pubkey, EscrowError> {
        let (address, bump) = Bank::derive_address(&sender, &receiver, timestamp);

        let mut sender_lamports = self.balance(&sender);
        let mut bank_lamports = self.balance(&address);
        let mut bank = match self.banks.get(&address) {
            Some(existing) => existing.clone(),
            None => {
                sender_lamports = sender_lamports
                    .checked_sub(BANK_RENT)
                    .ok_or(EscrowError::InsufficientFunds)?;
                bank_lamports += BANK_RENT;
                Bank::default()
            }
        };

        let available = spendable(sender_lamports, WALLET_RESERVE);
        bank.open(sender, receiver, amount, timestamp, bump, available)?;
        sender_lamports -= amount;
        bank_lamports += amount;

        self.lamports.insert(sender, sender_lamports);
        self.lamports.insert(address, bank_lamports);
        self.banks.insert(address, bank);
        Ok(address)
    }

    /// Mirrors `withdraw_bank` with `sender` as the signer. Like the program,
    /// it records the claimed time but gates on the clock alone.
    pub fn withdraw(
        &mut self,
        address: &Pubkey,
        sender: Pubkey,
        receiver: Pubkey,
        _claimed: u64,
    ) -> Result<u64, EscrowError> {
        let mut bank = self
            .banks
            .get(address)
            .cloned()
            .expect("bank account not allocated");

        // Same seeds and stored bump the withdraw context checks.
        let timestamp = bank.timestamp.to_le_bytes();
        let bump = [bank.bump];
        let seeds = [
            BANK_SEED,
            bank.sender.as_ref(),
            bank.receiver.as_ref(),
            timestamp.as_ref(),
            bump.as_ref(),
        ];
        let derived = Pubkey::create_program_address(&seeds, &solana_escrow::ID)
            .expect("stored bump does not derive a valid address");
        assert_eq!(derived, *address, "bank seeds do not match its address");

        let now = clock_time(self.clock);
        let amount = bank.release(&sender, &receiver, now)?;

        let bank_lamports = self.balance(address) - amount;
        self.lamports.insert(*address, bank_lamports);
        self.fund(receiver, amount);
        self.banks.insert(*address, bank);
        Ok(amount)
    }
}
