use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOM, DEFAULT_SALES_PRIZE_BPS, DEFAULT_SUPERBALL_TRIGGER_STREAK};
use crate::errors::PrizePoolErrorCode;
use crate::state::numbers::CountryNumbers;
use crate::state::tickets::DrawTicket;
use crate::utils::distribution::{distribute, Distribution};
use crate::utils::money::bps_share;

/// Running state carried from one draw to the next. Before the first draw
/// it is `{0, 0}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarryoverState {
    pub carryover_cents: u64,
    /// Consecutive draws without a category 1 winner.
    pub no_cat1_streak: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineParams {
    pub sales_prize_bps: u16,
    pub superball_trigger_streak: u8,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            sales_prize_bps: DEFAULT_SALES_PRIZE_BPS,
            superball_trigger_streak: DEFAULT_SUPERBALL_TRIGGER_STREAK,
        }
    }
}

/// How a draw's prize pool is made up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolBreakdown {
    pub total_sold_cents: u64,
    pub commission_cents: u64,
    pub sales_prize_pool_cents: u64,
    pub carry_in_cents: u64,
    pub prize_pool_cents: u64,
}

/// `prize_pool = total_sold * sales_share + previous carryover`.
/// The rest of the sales is operator commission.
pub fn prize_pool_for(total_sold_cents: u64, carry_in_cents: u64, sales_prize_bps: u16) -> Result<PoolBreakdown> {
    require!(
        (sales_prize_bps as u64) <= BPS_DENOM,
        PrizePoolErrorCode::InvalidConfig
    );

    let sales_prize_pool_cents = bps_share(total_sold_cents, sales_prize_bps as u64)?;
    let commission_cents = total_sold_cents
        .checked_sub(sales_prize_pool_cents)
        .ok_or(PrizePoolErrorCode::MathOverflow)?;
    let prize_pool_cents = sales_prize_pool_cents
        .checked_add(carry_in_cents)
        .ok_or(PrizePoolErrorCode::MathOverflow)?;

    Ok(PoolBreakdown {
        total_sold_cents,
        commission_cents,
        sales_prize_pool_cents,
        carry_in_cents,
        prize_pool_cents,
    })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    pub next: CarryoverState,
    /// `prize_pool - distributed` (zero on a jackpot draw).
    pub leftover_cents: u64,
    /// Set only on the draw where the streak reaches the trigger.
    pub superball_transfer_cents: Option<u64>,
}

impl Transition {
    pub fn triggered_superball(&self) -> bool {
        self.superball_transfer_cents.is_some()
    }
}

/// One step of the carryover / streak state machine.
///
/// - Jackpot winner: carryover and streak both reset to 0.
/// - Otherwise the leftover carries and the streak grows by one. When the
///   streak lands exactly on `trigger_streak` the leftover moves to the
///   Superball instead, and carryover and streak reset to 0.
pub fn advance_carryover(
    prev: CarryoverState,
    prize_pool_cents: u64,
    distributed_cents: u64,
    has_jackpot_winner: bool,
    trigger_streak: u8,
) -> Result<Transition> {
    if has_jackpot_winner {
        return Ok(Transition::default());
    }

    let leftover_cents = prize_pool_cents
        .checked_sub(distributed_cents)
        .ok_or(PrizePoolErrorCode::InvalidCarryOver)?;
    let streak = prev
        .no_cat1_streak
        .checked_add(1)
        .ok_or(PrizePoolErrorCode::MathOverflow)?;

    if streak == trigger_streak {
        return Ok(Transition {
            next: CarryoverState::default(),
            leftover_cents,
            superball_transfer_cents: Some(leftover_cents),
        });
    }

    Ok(Transition {
        next: CarryoverState { carryover_cents: leftover_cents, no_cat1_streak: streak },
        leftover_cents,
        superball_transfer_cents: None,
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawOutcome {
    pub pool: PoolBreakdown,
    pub distribution: Distribution,
    pub transition: Transition,
}

/// Full engine pass for one draw over its complete ticket set.
pub fn run_draw(
    prev: CarryoverState,
    total_sold_cents: u64,
    tickets: &[DrawTicket],
    winning_numbers: &CountryNumbers,
    params: &EngineParams,
) -> Result<DrawOutcome> {
    let pool = prize_pool_for(total_sold_cents, prev.carryover_cents, params.sales_prize_bps)?;
    let distribution = distribute(pool.prize_pool_cents, tickets, winning_numbers)?;
    let transition = advance_carryover(
        prev,
        pool.prize_pool_cents,
        distribution.distributed_cents(),
        distribution.has_jackpot_winner(),
        params.superball_trigger_streak,
    )?;

    Ok(DrawOutcome { pool, distribution, transition })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::distribution::tests::{ticket, winning};

    #[test]
    fn pool_breakdown_splits_commission() {
        let p = prize_pool_for(100_000, 2_500, 6_500).unwrap();
        assert_eq!(p.sales_prize_pool_cents, 65_000);
        assert_eq!(p.commission_cents, 35_000);
        assert_eq!(p.prize_pool_cents, 67_500);
        assert!(prize_pool_for(1, 0, 10_001).is_err());
    }

    #[test]
    fn jackpot_resets_everything() {
        let prev = CarryoverState { carryover_cents: 12_345, no_cat1_streak: 9 };
        let t = advance_carryover(prev, 100_000, 90_000, true, 10).unwrap();
        assert_eq!(t.next, CarryoverState::default());
        assert!(!t.triggered_superball());
    }

    #[test]
    fn leftover_carries_and_streak_grows() {
        let prev = CarryoverState { carryover_cents: 0, no_cat1_streak: 3 };
        let t = advance_carryover(prev, 100_000, 20_500, false, 10).unwrap();
        assert_eq!(t.next, CarryoverState { carryover_cents: 79_500, no_cat1_streak: 4 });
        assert_eq!(t.leftover_cents, 79_500);
        assert!(!t.triggered_superball());
    }

    #[test]
    fn trigger_fires_on_exact_streak() {
        let prev = CarryoverState { carryover_cents: 50_000, no_cat1_streak: 9 };
        let t = advance_carryover(prev, 80_000, 1_000, false, 10).unwrap();
        assert_eq!(t.superball_transfer_cents, Some(79_000));
        assert_eq!(t.next, CarryoverState::default());
    }

    #[test]
    fn distributing_more_than_pool_is_rejected() {
        assert!(advance_carryover(CarryoverState::default(), 100, 101, false, 10).is_err());
    }

    #[test]
    fn scenario_a_end_to_end() {
        let out = run_draw(
            CarryoverState { carryover_cents: 35_000, no_cat1_streak: 4 },
            100_000,
            &[ticket(1, 7, false)],
            &winning(),
            &EngineParams::default(),
        )
        .unwrap();
        assert_eq!(out.pool.prize_pool_cents, 100_000);
        assert_eq!(out.distribution.winners[0].prize_cents, 90_000);
        assert_eq!(out.distribution.distributed_cents(), 90_000);
        assert_eq!(out.transition.next, CarryoverState::default());
    }

    #[test]
    fn scenario_b_end_to_end() {
        // 1000.00 pool made entirely of carryover
        let prev = CarryoverState { carryover_cents: 100_000, no_cat1_streak: 0 };
        let tickets = [ticket(1, 6, true), ticket(2, 6, false)];
        let out = run_draw(prev, 0, &tickets, &winning(), &EngineParams::default()).unwrap();
        assert_eq!(out.distribution.distributed_cents(), 20_500);
        assert_eq!(out.transition.next.carryover_cents, 79_500);
        assert_eq!(out.transition.next.no_cat1_streak, 1);
    }

    #[test]
    fn zero_sales_rolls_everything() {
        let prev = CarryoverState { carryover_cents: 4_200, no_cat1_streak: 2 };
        let out = run_draw(prev, 0, &[], &winning(), &EngineParams::default()).unwrap();
        assert_eq!(out.transition.next, CarryoverState { carryover_cents: 4_200, no_cat1_streak: 3 });
    }

    #[test]
    fn scenario_c_ten_draws_compound_into_superball() {
        let params = EngineParams::default();
        let tickets = [ticket(1, 1, false)]; // one category 7 hit per draw
        let mut state = CarryoverState::default();
        let mut expected_carry = 0u64;
        let mut last_leftover = 0u64;
        let mut transfers = Vec::new();

        for draw in 1..=10u8 {
            let out = run_draw(state, 10_000, &tickets, &winning(), &params).unwrap();

            let pool = 6_500 + expected_carry;
            let leftover = pool - pool * 450 / 10_000;
            assert_eq!(out.pool.prize_pool_cents, pool);
            assert_eq!(out.transition.leftover_cents, leftover);
            last_leftover = leftover;

            if draw < 10 {
                assert_eq!(out.transition.next.no_cat1_streak, draw);
                assert!(!out.transition.triggered_superball());
                expected_carry = leftover;
            } else {
                assert_eq!(out.transition.next, CarryoverState::default());
                transfers.push(out.transition.superball_transfer_cents.unwrap());
            }
            state = out.transition.next;
        }

        assert_eq!(transfers.len(), 1);
        // compounding: not ten times a single draw's leftover
        assert_eq!(transfers[0], last_leftover);
        assert_ne!(transfers[0], 10 * (6_500 - 6_500 * 450 / 10_000));
    }

    #[test]
    fn no_winner_draws_transfer_all_sales_pools() {
        let params = EngineParams::default();
        let mut state = CarryoverState::default();
        let mut transfer = None;
        for _ in 0..10 {
            let out = run_draw(state, 10_000, &[], &winning(), &params).unwrap();
            if out.transition.triggered_superball() {
                transfer = out.transition.superball_transfer_cents;
            } else {
                assert!(out.transition.next.carryover_cents > 0);
            }
            state = out.transition.next;
        }
        assert_eq!(transfer, Some(65_000));
        assert_eq!(state, CarryoverState::default());
    }

    #[test]
    fn trigger_fires_once_per_run_of_ten() {
        let params = EngineParams::default();
        let mut state = CarryoverState::default();
        let mut fired_at = Vec::new();

        // 25 draws, jackpot on draw 13
        for draw in 1..=25u32 {
            let tickets = if draw == 13 { vec![ticket(1, 7, false)] } else { vec![] };
            let prev_streak = state.no_cat1_streak;
            let out = run_draw(state, 1_000, &tickets, &winning(), &params).unwrap();

            if out.transition.triggered_superball() {
                assert_eq!(prev_streak, 9);
                fired_at.push(draw);
            } else if draw == 13 {
                assert_eq!(out.transition.next.no_cat1_streak, 0);
            } else {
                assert_eq!(out.transition.next.no_cat1_streak, prev_streak + 1);
            }
            state = out.transition.next;
        }

        assert_eq!(fired_at, vec![10, 23]);
    }
}
