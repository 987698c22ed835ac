use anchor_lang::prelude::*;

use crate::constants::MAX_SUPERBALL_ENTRIES_PER_BATCH;
use crate::errors::PrizePoolErrorCode;
use crate::state::tickets::SuperballEntry;
use crate::utils::superball::{split_jackpot, winning_entries};

#[repr(u8)]
pub enum SuperballStatus {
    Tallying = 1,
    Settled  = 2,
}

/// One Superball draw: the drawn number, the jackpot snapshot it pays from,
/// and the split once settled. Individual winners are emitted as events
/// while entries are tallied.
#[account]
pub struct SuperballDraw {
    pub draw_date: i64,
    pub bump: u8,
    pub status: u8,
    pub version: u8,
    pub winner_number: u8,

    // Jackpot snapshot taken when the draw was opened
    pub jackpot_cents: u64,
    pub triggered_at: i64,

    pub entries_tallied: u32,
    pub batches_tallied: u32,
    pub total_winners: u32,

    pub prize_per_winner_cents: u64,
    pub remainder_cents: u64,

    pub opened_at: i64,
    pub settled_at: i64,

    pub _reserved: [u8; 16],
}

impl SuperballDraw {
    pub const SEED_PREFIX: &'static [u8] = b"superball_draw";

    pub const SIZE: usize =
        8  + // draw_date
            1  + // bump
            1  + // status
            1  + // version
            1  + // winner_number
            8  + // jackpot_cents
            8  + // triggered_at
            4  + // entries_tallied
            4  + // batches_tallied
            4  + // total_winners
            8  + // prize_per_winner_cents
            8  + // remainder_cents
            8  + // opened_at
            8  + // settled_at
            16;  // reserved

    pub fn is_settled(&self) -> bool {
        self.status == SuperballStatus::Settled as u8
    }

    /// Counts one ordered batch. Returns the positions of the winning
    /// entries within the batch.
    pub fn absorb_batch(&mut self, batch_index: u32, entries: &[SuperballEntry]) -> Result<Vec<usize>> {
        require!(!self.is_settled(), PrizePoolErrorCode::SuperballAlreadyAwarded);
        require_eq!(batch_index, self.batches_tallied, PrizePoolErrorCode::BatchOutOfOrder);
        require!(
            entries.len() <= MAX_SUPERBALL_ENTRIES_PER_BATCH,
            PrizePoolErrorCode::TooManyTickets
        );

        let hits = winning_entries(entries, self.winner_number)?;

        self.total_winners = self
            .total_winners
            .checked_add(hits.len() as u32)
            .ok_or(PrizePoolErrorCode::MathOverflow)?;
        self.entries_tallied = self
            .entries_tallied
            .checked_add(entries.len() as u32)
            .ok_or(PrizePoolErrorCode::MathOverflow)?;
        self.batches_tallied = self
            .batches_tallied
            .checked_add(1)
            .ok_or(PrizePoolErrorCode::MathOverflow)?;
        Ok(hits)
    }

    /// Splits the snapshot jackpot over the tallied winners. Returns the
    /// amount actually paid out.
    pub fn settle(&mut self, now: i64) -> Result<u64> {
        require!(!self.is_settled(), PrizePoolErrorCode::SuperballAlreadyAwarded);

        let (per_winner, remainder) = split_jackpot(self.jackpot_cents, self.total_winners)?;
        self.prize_per_winner_cents = per_winner;
        self.remainder_cents = remainder;
        self.status = SuperballStatus::Settled as u8;
        self.settled_at = now;

        self.jackpot_cents
            .checked_sub(remainder)
            .ok_or_else(|| error!(PrizePoolErrorCode::MathOverflow))
    }
}
