use anchor_lang::prelude::*;

use crate::constants::{SUPERBALL_MAX_NUMBER, SUPERBALL_MIN_NUMBER, SUPERBALL_NUMBERS_PER_TICKET};
use crate::errors::PrizePoolErrorCode;
use crate::state::numbers::CountryNumbers;

/// A main-draw ticket as handed over by order intake (paid orders only).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawTicket {
    pub ticket_id: u64,
    /// Owner of the order the ticket belongs to.
    pub owner: Pubkey,
    pub selections: CountryNumbers,
}

impl DrawTicket {
    pub const SIZE: usize = 8 + 32 + CountryNumbers::SIZE;
}

/// A Superball ticket: five distinct numbers in 1..=10.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuperballEntry {
    pub owner: Pubkey,
    pub numbers: [u8; SUPERBALL_NUMBERS_PER_TICKET],
}

impl SuperballEntry {
    pub const SIZE: usize = 32 + SUPERBALL_NUMBERS_PER_TICKET;

    /// Bitmask of the ticket numbers (bit n => number n), rejecting
    /// out-of-range or repeated numbers.
    pub fn numbers_mask(&self) -> Result<u16> {
        let mut mask: u16 = 0;
        for &n in self.numbers.iter() {
            require!(
                (SUPERBALL_MIN_NUMBER..=SUPERBALL_MAX_NUMBER).contains(&n),
                PrizePoolErrorCode::InvalidSuperballTicket
            );
            let bit = 1u16 << n;
            require!((mask & bit) == 0, PrizePoolErrorCode::InvalidSuperballTicket);
            mask |= bit;
        }
        Ok(mask)
    }

    /// Any-of-five: the ticket wins if it holds the drawn number.
    pub fn contains(&self, winner_number: u8) -> Result<bool> {
        let mask = self.numbers_mask()?;
        Ok(winner_number <= SUPERBALL_MAX_NUMBER && mask & (1u16 << winner_number) != 0)
    }
}
