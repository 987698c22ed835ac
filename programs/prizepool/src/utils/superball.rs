use anchor_lang::prelude::*;

use crate::constants::{SUPERBALL_MAX_NUMBER, SUPERBALL_MIN_NUMBER};
use crate::errors::PrizePoolErrorCode;
use crate::state::tickets::SuperballEntry;

/// The jackpot currently waiting for a Superball draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveJackpot {
    pub amount_cents: u64,
    /// Draw date of the main draw whose streak funded the jackpot.
    pub triggered_at: i64,
}

/// Where the awarder looks up the jackpot to pay out.
pub trait JackpotSource {
    fn active_jackpot(&self) -> Option<ActiveJackpot>;

    /// Trigger date of the last jackpot already paid out, if any.
    fn last_awarded_at(&self) -> Option<i64> {
        None
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuperballAward {
    pub total_winners: u32,
    pub prize_per_winner_cents: u64,
    /// Sub-cent dust left after the even split. Stays in the jackpot pool.
    pub remainder_cents: u64,
    /// Indexes into the entry pool, in pool order.
    pub winners: Vec<usize>,
}

pub fn require_winner_number(winner_number: u8) -> Result<()> {
    require!(
        (SUPERBALL_MIN_NUMBER..=SUPERBALL_MAX_NUMBER).contains(&winner_number),
        PrizePoolErrorCode::InvalidSuperballNumber
    );
    Ok(())
}

/// Checks a Superball draw can pay out from `source` and returns the jackpot.
///
/// A pool whose last jackpot was already paid fails with
/// `SuperballAlreadyAwarded`; one that was never funded with `NoActiveJackpot`.
pub fn claimable_jackpot<S: JackpotSource + ?Sized>(source: &S, draw_date: i64) -> Result<ActiveJackpot> {
    let Some(jackpot) = source.active_jackpot() else {
        return match source.last_awarded_at() {
            Some(_) => err!(PrizePoolErrorCode::SuperballAlreadyAwarded),
            None => err!(PrizePoolErrorCode::NoActiveJackpot),
        };
    };
    require!(
        draw_date >= jackpot.triggered_at,
        PrizePoolErrorCode::SuperballDrawBeforeTrigger
    );
    Ok(jackpot)
}

/// Indexes of the entries holding `winner_number`. Every entry is validated.
pub fn winning_entries(entries: &[SuperballEntry], winner_number: u8) -> Result<Vec<usize>> {
    let mut hits = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        if entry.contains(winner_number)? {
            hits.push(i);
        }
    }
    Ok(hits)
}

/// Even split, rounded down to the cent. Zero winners pays nothing and leaves
/// the whole amount as remainder.
pub fn split_jackpot(amount_cents: u64, total_winners: u32) -> Result<(u64, u64)> {
    if total_winners == 0 {
        return Ok((0, amount_cents));
    }
    let per_winner = amount_cents / total_winners as u64;
    let paid = per_winner
        .checked_mul(total_winners as u64)
        .ok_or(PrizePoolErrorCode::MathOverflow)?;
    let remainder = amount_cents
        .checked_sub(paid)
        .ok_or(PrizePoolErrorCode::MathOverflow)?;
    Ok((per_winner, remainder))
}

/// Awards the active jackpot over a complete Superball entry pool.
pub fn award_superball<S: JackpotSource + ?Sized>(
    source: &S,
    draw_date: i64,
    winner_number: u8,
    pool: &[SuperballEntry],
) -> Result<SuperballAward> {
    require_winner_number(winner_number)?;
    let jackpot = claimable_jackpot(source, draw_date)?;

    let winners = winning_entries(pool, winner_number)?;
    let total_winners = u32::try_from(winners.len()).map_err(|_| PrizePoolErrorCode::MathOverflow)?;
    let (prize_per_winner_cents, remainder_cents) = split_jackpot(jackpot.amount_cents, total_winners)?;

    Ok(SuperballAward {
        total_winners,
        prize_per_winner_cents,
        remainder_cents,
        winners,
    })
}
