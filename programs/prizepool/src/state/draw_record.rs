use anchor_lang::prelude::*;
use sha2::{Digest, Sha256};

use crate::constants::MAX_TICKETS_PER_BATCH;
use crate::errors::PrizePoolErrorCode;
use crate::state::categories::{CategoryPayout, CategoryTally, CATEGORY_COUNT};
use crate::state::draw_ledger::DrawLedger;
use crate::state::numbers::CountryNumbers;
use crate::state::tickets::DrawTicket;
use crate::utils::carryover::{advance_carryover, PoolBreakdown, Transition};
use crate::utils::distribution::{compute_payouts, tally_tickets, PayoutTable};

#[repr(u8)]
pub enum DrawStatus {
    Tallying  = 1, // Winning numbers posted, ticket batches being counted
    Finalized = 2, // Payouts and carryover written, immutable
}

/// ---------------------------------------------------------------------------
/// DrawRecord
/// ---------------------------------------------------------------------------
///
/// One per draw date. Created when the winning numbers are posted and
/// finalized exactly once.
///
/// While tallying it accumulates per-category winner counts over ordered
/// ticket batches. Finalization writes the payout table, the outgoing
/// carryover and streak, and the Superball transfer when the streak hit the
/// trigger on this draw.
#[account]
pub struct DrawRecord {
    // Identification
    pub draw_date: i64,
    pub bump: u8,
    pub status: u8,
    pub version: u8,
    pub winning_numbers: CountryNumbers,

    // Pool
    pub total_sold_cents: u64,
    pub commission_cents: u64,
    pub sales_prize_pool_cents: u64,
    pub carry_in_cents: u64,
    pub prize_pool_cents: u64,

    // Tally
    pub tally: CategoryTally,
    pub tickets_tallied: u32,
    pub batches_tallied: u32,
    pub last_ticket_id: u64,
    /// Running sha256 over every tallied ticket, in batch order.
    pub tally_digest: [u8; 32],
    pub attempt_count: u8,

    // Result
    pub distributed_cents: u64,
    pub carry_out_cents: u64,
    pub no_cat1_streak: u8,
    pub has_jackpot_winner: u8,
    pub superball_transfer_cents: Option<u64>,
    pub payouts: [CategoryPayout; CATEGORY_COUNT],

    // Timestamps
    pub opened_at: i64,
    pub finalized_at: i64,
    pub last_updated_ts: i64,

    pub _reserved: [u8; 16],
}

impl DrawRecord {
    pub const SEED_PREFIX: &'static [u8] = b"draw_record";

    pub const SIZE: usize =
        8   + // draw_date
            1   + // bump
            1   + // status
            1   + // version
            CountryNumbers::SIZE + // winning_numbers
            8   + // total_sold_cents
            8   + // commission_cents
            8   + // sales_prize_pool_cents
            8   + // carry_in_cents
            8   + // prize_pool_cents
            CategoryTally::SIZE + // tally
            4   + // tickets_tallied
            4   + // batches_tallied
            8   + // last_ticket_id
            32  + // tally_digest
            1   + // attempt_count
            8   + // distributed_cents
            8   + // carry_out_cents
            1   + // no_cat1_streak
            1   + // has_jackpot_winner
            (1 + 8) + // superball_transfer_cents
            (CategoryPayout::SIZE * CATEGORY_COUNT) + // payouts
            8   + // opened_at
            8   + // finalized_at
            8   + // last_updated_ts
            16;   // reserved

    pub fn is_finalized(&self) -> bool {
        self.status == DrawStatus::Finalized as u8
    }

    pub fn set_pool(&mut self, pool: &PoolBreakdown) {
        self.total_sold_cents = pool.total_sold_cents;
        self.commission_cents = pool.commission_cents;
        self.sales_prize_pool_cents = pool.sales_prize_pool_cents;
        self.carry_in_cents = pool.carry_in_cents;
        self.prize_pool_cents = pool.prize_pool_cents;
    }

    /// Counts one ordered batch of tickets into the tally.
    ///
    /// `batch_index` must equal the number of batches already tallied, so a
    /// replayed or skipped batch is rejected rather than double-counted.
    /// Ticket ids must strictly increase across the whole draw, which keeps a
    /// ticket from being counted in two batches.
    pub fn absorb_batch(&mut self, batch_index: u32, tickets: &[DrawTicket]) -> Result<()> {
        require!(
            self.status == DrawStatus::Tallying as u8,
            PrizePoolErrorCode::DrawNotTallying
        );
        require_eq!(batch_index, self.batches_tallied, PrizePoolErrorCode::BatchOutOfOrder);
        require!(
            tickets.len() <= MAX_TICKETS_PER_BATCH,
            PrizePoolErrorCode::TooManyTickets
        );

        let mut last_id = (self.tickets_tallied > 0).then_some(self.last_ticket_id);
        for ticket in tickets {
            if let Some(last) = last_id {
                require!(ticket.ticket_id > last, PrizePoolErrorCode::TicketOutOfOrder);
            }
            ticket.selections.validate_selection()?;
            last_id = Some(ticket.ticket_id);
        }
        if let Some(last) = last_id {
            self.last_ticket_id = last;
        }

        tally_tickets(&mut self.tally, tickets, &self.winning_numbers)?;

        let mut hasher = Sha256::new();
        hasher.update(self.tally_digest);
        for ticket in tickets {
            hasher.update(ticket.ticket_id.to_le_bytes());
            hasher.update(ticket.owner.as_ref());
            hasher.update(ticket.selections.numbers);
        }
        self.tally_digest = hasher.finalize().into();

        self.tickets_tallied = self
            .tickets_tallied
            .checked_add(tickets.len() as u32)
            .ok_or(PrizePoolErrorCode::MathOverflow)?;
        self.batches_tallied = self
            .batches_tallied
            .checked_add(1)
            .ok_or(PrizePoolErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Drops the partial tally so a worker can recount from batch 0.
    pub fn reset_tally(&mut self) -> Result<()> {
        require!(
            self.status == DrawStatus::Tallying as u8,
            PrizePoolErrorCode::DrawNotTallying
        );
        self.tally = CategoryTally::default();
        self.tickets_tallied = 0;
        self.batches_tallied = 0;
        self.last_ticket_id = 0;
        self.tally_digest = [0u8; 32];
        self.attempt_count = self.attempt_count.saturating_add(1);
        Ok(())
    }

    /// Writes the final result. Only valid once, from `Tallying`.
    pub fn finalize(&mut self, table: &PayoutTable, transition: &Transition, now: i64) -> Result<()> {
        require!(
            self.status == DrawStatus::Tallying as u8,
            PrizePoolErrorCode::DrawNotTallying
        );

        self.payouts = table.payouts;
        self.distributed_cents = table.distributed_cents;
        self.has_jackpot_winner = table.has_jackpot_winner as u8;
        self.carry_out_cents = transition.next.carryover_cents;
        self.no_cat1_streak = transition.next.no_cat1_streak;
        self.superball_transfer_cents = transition.superball_transfer_cents;

        self.status = DrawStatus::Finalized as u8;
        self.finalized_at = now;
        self.last_updated_ts = now;
        Ok(())
    }

    /// Distributes the tally, advances the carryover and commits both to the
    /// ledger. Returns `None` without touching anything when the draw is
    /// already finalized.
    pub fn finalize_once(
        &mut self,
        ledger: &mut DrawLedger,
        trigger_streak: u8,
        now: i64,
    ) -> Result<Option<(PayoutTable, Transition)>> {
        if self.is_finalized() {
            return Ok(None);
        }

        // The carryover snapshot taken at open must still be the ledger's
        require_eq!(ledger.open_draw_date, self.draw_date, PrizePoolErrorCode::DrawDateMismatch);
        require_eq!(
            ledger.carryover_cents,
            self.carry_in_cents,
            PrizePoolErrorCode::InvalidCarryOver
        );

        let table = compute_payouts(self.prize_pool_cents, &self.tally)?;
        let transition = advance_carryover(
            ledger.carryover_state(),
            self.prize_pool_cents,
            table.distributed_cents,
            table.has_jackpot_winner,
            trigger_streak,
        )?;

        self.finalize(&table, &transition, now)?;
        ledger.commit_draw(self.draw_date, &transition)?;
        ledger.updated_at = now;
        Ok(Some((table, transition)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::draw_ledger::tests::ledger;
    use crate::utils::carryover::CarryoverState;
    use crate::utils::distribution::tests::{ticket, winning};

    fn record() -> DrawRecord {
        DrawRecord {
            draw_date: 1_700_000_000,
            bump: 0,
            status: DrawStatus::Tallying as u8,
            version: 1,
            winning_numbers: winning(),
            total_sold_cents: 0,
            commission_cents: 0,
            sales_prize_pool_cents: 0,
            carry_in_cents: 0,
            prize_pool_cents: 100_000,
            tally: CategoryTally::default(),
            tickets_tallied: 0,
            batches_tallied: 0,
            last_ticket_id: 0,
            tally_digest: [0u8; 32],
            attempt_count: 1,
            distributed_cents: 0,
            carry_out_cents: 0,
            no_cat1_streak: 0,
            has_jackpot_winner: 0,
            superball_transfer_cents: None,
            payouts: [CategoryPayout::default(); CATEGORY_COUNT],
            opened_at: 0,
            finalized_at: 0,
            last_updated_ts: 0,
            _reserved: [0u8; 16],
        }
    }

    #[test]
    fn draw_record_size_matches_serialization() {
        let mut r = record();
        // Option<u64> is widest when set
        r.superball_transfer_cents = Some(u64::MAX);
        let mut bytes = Vec::new();
        r.serialize(&mut bytes).unwrap();
        assert_eq!(bytes.len(), DrawRecord::SIZE);
    }

    #[test]
    fn batches_must_arrive_in_order() {
        let mut r = record();
        r.absorb_batch(0, &[ticket(1, 6, true)]).unwrap();
        let digest_after_first = r.tally_digest;

        // replaying batch 0 is rejected, not double-counted
        let err = r.absorb_batch(0, &[ticket(1, 6, true)]).unwrap_err();
        assert_eq!(err, PrizePoolErrorCode::BatchOutOfOrder.into());
        assert!(r.absorb_batch(2, &[ticket(3, 1, false)]).is_err());

        r.absorb_batch(1, &[ticket(2, 6, false)]).unwrap();
        assert_eq!(r.tickets_tallied, 2);
        assert_eq!(r.batches_tallied, 2);
        assert_eq!(r.tally.winners[1], 2);
        assert_eq!(r.tally.bonus_winners[1], 1);
        assert_ne!(r.tally_digest, digest_after_first);
    }

    #[test]
    fn oversized_or_invalid_batches_are_rejected() {
        let mut r = record();
        let big: Vec<DrawTicket> = (0..=MAX_TICKETS_PER_BATCH as u64).map(|i| ticket(i, 1, false)).collect();
        assert!(r.absorb_batch(0, &big).is_err());

        let mut empty = ticket(1, 0, false);
        empty.selections = CountryNumbers::default();
        assert!(r.absorb_batch(0, &[empty]).is_err());
        assert_eq!(r.batches_tallied, 0);
    }

    #[test]
    fn digest_is_deterministic_and_resettable() {
        let batch = [ticket(1, 3, false), ticket(2, 0, true)];
        let mut a = record();
        let mut b = record();
        a.absorb_batch(0, &batch).unwrap();
        b.absorb_batch(0, &batch).unwrap();
        assert_eq!(a.tally_digest, b.tally_digest);

        a.reset_tally().unwrap();
        assert_eq!(a.tally, CategoryTally::default());
        assert_eq!(a.tally_digest, [0u8; 32]);
        assert_eq!(a.attempt_count, 2);
        a.absorb_batch(0, &batch).unwrap();
        assert_eq!(a.tally_digest, b.tally_digest);
    }

    #[test]
    fn finalize_happens_once() {
        let mut r = record();
        r.absorb_batch(0, &[ticket(1, 6, true), ticket(2, 6, false)]).unwrap();

        let table = compute_payouts(r.prize_pool_cents, &r.tally).unwrap();
        let t = advance_carryover(CarryoverState::default(), r.prize_pool_cents, table.distributed_cents, false, 10)
            .unwrap();
        r.finalize(&table, &t, 42).unwrap();

        assert!(r.is_finalized());
        assert_eq!(r.distributed_cents, 20_500);
        assert_eq!(r.carry_out_cents, 79_500);
        assert_eq!(r.no_cat1_streak, 1);
        assert_eq!(r.superball_transfer_cents, None);

        assert!(r.finalize(&table, &t, 43).is_err());
        assert!(r.absorb_batch(1, &[ticket(3, 1, false)]).is_err());
        assert!(r.reset_tally().is_err());
        assert_eq!(r.finalized_at, 42);
    }

    #[test]
    fn ticket_ids_cannot_repeat_across_batches() {
        let mut r = record();
        r.absorb_batch(0, &[ticket(1, 6, true), ticket(2, 6, false)]).unwrap();

        let err = r.absorb_batch(1, &[ticket(2, 6, false)]).unwrap_err();
        assert_eq!(err, PrizePoolErrorCode::TicketOutOfOrder.into());
        // unordered within a batch is rejected too
        assert!(r.absorb_batch(1, &[ticket(5, 1, false), ticket(4, 1, false)]).is_err());
        assert_eq!(r.tickets_tallied, 2);

        r.absorb_batch(1, &[ticket(3, 1, false)]).unwrap();
        assert_eq!(r.last_ticket_id, 3);

        // a recount starts over from any id
        r.reset_tally().unwrap();
        r.absorb_batch(0, &[ticket(1, 6, true)]).unwrap();
    }

    #[test]
    fn finalize_once_is_a_no_op_on_retry() {
        let mut l = ledger();
        l.carryover_cents = 50_000;
        l.no_cat1_streak = 9;
        l.begin_draw(1_700_000_000).unwrap();

        let mut r = record();
        r.carry_in_cents = 50_000;
        r.absorb_batch(0, &[ticket(1, 1, false)]).unwrap();

        // tenth draw without a jackpot: the leftover moves to the Superball
        let (table, t) = r.finalize_once(&mut l, 10, 42).unwrap().unwrap();
        assert_eq!(table.distributed_cents, 4_500);
        assert_eq!(t.superball_transfer_cents, Some(95_500));
        assert_eq!(l.carryover_state(), CarryoverState::default());
        assert_eq!(l.superball_jackpot_cents, 95_500);
        assert_eq!(l.draws_finalized, 1);

        assert!(r.finalize_once(&mut l, 10, 43).unwrap().is_none());
        assert_eq!(l.carryover_state(), CarryoverState::default());
        assert_eq!(l.superball_jackpot_cents, 95_500);
        assert_eq!(l.superball_triggered_at, 1_700_000_000);
        assert_eq!(l.draws_finalized, 1);
        assert_eq!(l.updated_at, 42);
        assert_eq!(r.finalized_at, 42);
    }

    #[test]
    fn finalize_once_rejects_stale_carryover() {
        let mut l = ledger();
        l.begin_draw(1_700_000_000).unwrap();
        l.carryover_cents = 1;
        let mut r = record();
        let err = r.finalize_once(&mut l, 10, 42).unwrap_err();
        assert_eq!(err, PrizePoolErrorCode::InvalidCarryOver.into());
        assert!(!r.is_finalized());
    }
}
