/// Seed prefix of every bank PDA.
pub const BANK_SEED: &[u8] = b"bank";
