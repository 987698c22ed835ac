use anchor_lang::prelude::*;

use crate::errors::PrizePoolErrorCode;
use crate::utils::carryover::{CarryoverState, Transition};
use crate::utils::superball::{ActiveJackpot, JackpotSource};

/// ---------------------------------------------------------------------------
/// DrawLedger
/// ---------------------------------------------------------------------------
///
/// Single-writer running state of the engine across the draw sequence:
/// - the `(carryover, no_cat1_streak)` pair handed from one draw to the next
/// - the last finalized draw date and the draw currently in flight
/// - the Superball jackpot pool funded by streak transfers
///
/// Only one main draw and one Superball draw can be open at a time, which
/// keeps the carryover strictly sequential by draw date.
#[account]
pub struct DrawLedger {
    pub bump: u8,

    // Carryover state machine
    pub carryover_cents: u64,
    pub no_cat1_streak: u8,

    // Sequencing (0 = none)
    pub last_finalized_draw_date: i64,
    pub open_draw_date: i64,
    pub draws_finalized: u64,

    // Superball jackpot
    pub superball_jackpot_cents: u64,
    pub superball_active: u8,
    pub superball_triggered_at: i64,
    pub open_superball_date: i64,
    pub last_superball_date: i64,
    /// Trigger date of the last jackpot paid to winners (0 = none).
    pub superball_awarded_at: i64,
    pub superball_draws_settled: u32,

    pub updated_at: i64,
    pub _reserved: [u8; 16],
}

impl DrawLedger {
    pub const SEED: &'static [u8] = b"draw_ledger";

    pub const SIZE: usize =
        1  + // bump
            8  + // carryover_cents
            1  + // no_cat1_streak
            8  + // last_finalized_draw_date
            8  + // open_draw_date
            8  + // draws_finalized
            8  + // superball_jackpot_cents
            1  + // superball_active
            8  + // superball_triggered_at
            8  + // open_superball_date
            8  + // last_superball_date
            8  + // superball_awarded_at
            4  + // superball_draws_settled
            8  + // updated_at
            16;  // reserved

    pub fn carryover_state(&self) -> CarryoverState {
        CarryoverState {
            carryover_cents: self.carryover_cents,
            no_cat1_streak: self.no_cat1_streak,
        }
    }

    pub fn is_draw_open(&self) -> bool {
        self.open_draw_date != 0
    }

    /// Reserves `draw_date` as the draw in flight.
    pub fn begin_draw(&mut self, draw_date: i64) -> Result<()> {
        require!(draw_date > 0, PrizePoolErrorCode::DrawOutOfOrder);
        require!(!self.is_draw_open(), PrizePoolErrorCode::DrawInFlight);
        require!(
            draw_date > self.last_finalized_draw_date,
            PrizePoolErrorCode::DrawOutOfOrder
        );
        self.open_draw_date = draw_date;
        Ok(())
    }

    /// Applies a finalized draw's transition and releases the in-flight slot.
    pub fn commit_draw(&mut self, draw_date: i64, transition: &Transition) -> Result<()> {
        require_eq!(self.open_draw_date, draw_date, PrizePoolErrorCode::DrawDateMismatch);

        self.carryover_cents = transition.next.carryover_cents;
        self.no_cat1_streak = transition.next.no_cat1_streak;
        self.last_finalized_draw_date = draw_date;
        self.open_draw_date = 0;
        self.draws_finalized = self
            .draws_finalized
            .checked_add(1)
            .ok_or(PrizePoolErrorCode::MathOverflow)?;

        if let Some(amount) = transition.superball_transfer_cents {
            self.fund_superball(amount, draw_date)?;
        }
        Ok(())
    }

    /// Adds a streak transfer to the Superball pool. An unclaimed jackpot
    /// stays in the pool and grows.
    pub fn fund_superball(&mut self, amount_cents: u64, triggered_at: i64) -> Result<()> {
        if amount_cents == 0 {
            return Ok(());
        }
        self.superball_jackpot_cents = self
            .superball_jackpot_cents
            .checked_add(amount_cents)
            .ok_or(PrizePoolErrorCode::MathOverflow)?;
        self.superball_active = 1;
        self.superball_triggered_at = triggered_at;
        Ok(())
    }

    /// Superball draw dates strictly increase, like main draws.
    pub fn begin_superball(&mut self, draw_date: i64) -> Result<()> {
        require!(self.open_superball_date == 0, PrizePoolErrorCode::DrawInFlight);
        require!(
            draw_date > self.last_superball_date,
            PrizePoolErrorCode::DrawOutOfOrder
        );
        self.open_superball_date = draw_date;
        Ok(())
    }

    /// Pays out a settled Superball draw.
    ///
    /// With winners the paid amount leaves the pool and the jackpot is no
    /// longer active; split dust stays behind for the next transfer. With no
    /// winners nothing moves and the jackpot rolls to the next Superball draw.
    /// A transfer that landed after the draw was opened (`triggered_at`
    /// moved) keeps the jackpot active.
    pub fn settle_superball(
        &mut self,
        draw_date: i64,
        triggered_at: i64,
        total_winners: u32,
        paid_cents: u64,
    ) -> Result<()> {
        require_eq!(self.open_superball_date, draw_date, PrizePoolErrorCode::DrawDateMismatch);

        if total_winners > 0 {
            self.superball_jackpot_cents = self
                .superball_jackpot_cents
                .checked_sub(paid_cents)
                .ok_or(PrizePoolErrorCode::MathOverflow)?;
            if self.superball_triggered_at == triggered_at {
                self.superball_active = 0;
            }
            self.superball_awarded_at = triggered_at;
        }
        self.open_superball_date = 0;
        self.last_superball_date = draw_date;
        self.superball_draws_settled = self
            .superball_draws_settled
            .checked_add(1)
            .ok_or(PrizePoolErrorCode::MathOverflow)?;
        Ok(())
    }
}

impl JackpotSource for DrawLedger {
    fn active_jackpot(&self) -> Option<ActiveJackpot> {
        (self.superball_active != 0).then_some(ActiveJackpot {
            amount_cents: self.superball_jackpot_cents,
            triggered_at: self.superball_triggered_at,
        })
    }

    fn last_awarded_at(&self) -> Option<i64> {
        (self.superball_awarded_at != 0).then_some(self.superball_awarded_at)
    }
}
