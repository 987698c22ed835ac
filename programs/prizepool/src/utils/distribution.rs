use anchor_lang::prelude::*;

use crate::constants::{BONUS_ADD_ON_BPS, BPS_DENOM};
use crate::errors::PrizePoolErrorCode;
use crate::state::categories::{CategoryPayout, CategoryTally, PrizeCategory, CATEGORY_COUNT};
use crate::state::numbers::CountryNumbers;
use crate::state::tickets::DrawTicket;
use crate::utils::matches::{compute_match, MatchResult};
use crate::utils::money::mul_div;

/// One paid ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Winner {
    pub ticket_id: u64,
    pub owner: Pubkey,
    pub category: PrizeCategory,
    pub matches: u8,
    pub bonus_matched: bool,
    /// Prize includes the flat bonus add-on.
    pub bonus_applied: bool,
    pub prize_cents: u64,
}

/// Payout amounts for every category of one draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PayoutTable {
    pub payouts: [CategoryPayout; CATEGORY_COUNT],
    pub distributed_cents: u64,
    pub has_jackpot_winner: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Distribution {
    pub tally: CategoryTally,
    pub table: PayoutTable,
    pub winners: Vec<Winner>,
}

impl Distribution {
    pub fn distributed_cents(&self) -> u64 {
        self.table.distributed_cents
    }

    pub fn has_jackpot_winner(&self) -> bool {
        self.table.has_jackpot_winner
    }
}

/// A jackpot winner suppresses every lower category for the draw.
#[inline]
pub fn is_category_paid(category: PrizeCategory, has_jackpot_winner: bool) -> bool {
    !has_jackpot_winner || category == PrizeCategory::Jackpot
}

/// Adds one ticket's outcome to the tally. Returns its category, if any.
pub fn record_match(tally: &mut CategoryTally, result: &MatchResult) -> Result<Option<PrizeCategory>> {
    let Some(category) = PrizeCategory::classify(result.matches, result.bonus_matched) else {
        return Ok(None);
    };

    let i = category.index();
    tally.winners[i] = tally.winners[i]
        .checked_add(1)
        .ok_or(PrizePoolErrorCode::MathOverflow)?;

    if result.bonus_matched {
        tally.bonus_winners[i] = tally.bonus_winners[i]
            .checked_add(1)
            .ok_or(PrizePoolErrorCode::MathOverflow)?;
    }

    Ok(Some(category))
}

/// Matches a batch of tickets and folds them into `tally`.
pub fn tally_tickets(
    tally: &mut CategoryTally,
    tickets: &[DrawTicket],
    winning_numbers: &CountryNumbers,
) -> Result<()> {
    for ticket in tickets {
        let result = compute_match(&ticket.selections, winning_numbers);
        record_match(tally, &result)?;
    }
    Ok(())
}

/// Per-winner payouts from the accumulated category counts.
///
/// - Each paid category splits `pool * share` evenly among its winners.
/// - Categories 1..=7 add `pool * 0.5%`, split only among the winners of that
///   category whose bonus number matched.
/// - Every amount is rounded down to the cent once, after the base share and
///   the add-on are combined.
pub fn compute_payouts(prize_pool_cents: u64, tally: &CategoryTally) -> Result<PayoutTable> {
    let has_jackpot_winner = tally.has_jackpot_winner();
    let mut table = PayoutTable { has_jackpot_winner, ..PayoutTable::default() };
    let denom = BPS_DENOM as u128;

    for category in PrizeCategory::ALL {
        let winners = tally.winners_in(category) as u128;
        if winners == 0 || !is_category_paid(category, has_jackpot_winner) {
            continue;
        }

        let share = category.share_bps() as u128;
        let bonus_winners = if category.is_bonus_eligible() {
            tally.bonus_winners_in(category) as u128
        } else {
            0
        };

        let prize = mul_div(prize_pool_cents, share, denom * winners)?;

        // base/winners + bonus/bonus_winners over one common denominator
        let bonus_prize = if bonus_winners > 0 {
            let numerator = share
                .checked_mul(bonus_winners)
                .and_then(|v| v.checked_add((BONUS_ADD_ON_BPS as u128) * winners))
                .ok_or(PrizePoolErrorCode::MathOverflow)?;
            mul_div(prize_pool_cents, numerator, denom * winners * bonus_winners)?
        } else {
            0
        };

        let plain_winners = (winners - bonus_winners) as u64;
        let paid = prize
            .checked_mul(plain_winners)
            .and_then(|v| v.checked_add(bonus_prize.checked_mul(bonus_winners as u64)?))
            .ok_or(PrizePoolErrorCode::MathOverflow)?;

        table.payouts[category.index()] = CategoryPayout {
            prize_cents: prize,
            bonus_prize_cents: bonus_prize,
            paid_cents: paid,
        };
        table.distributed_cents = table
            .distributed_cents
            .checked_add(paid)
            .ok_or(PrizePoolErrorCode::MathOverflow)?;
    }

    require!(
        table.distributed_cents <= prize_pool_cents,
        PrizePoolErrorCode::DistributionExceedsPool
    );

    Ok(table)
}

/// Re-derives a ticket's prize from a finalized payout table. A ticket whose
/// category or bonus slot paid nothing in the table is not a winner.
pub fn winner_for(
    ticket: &DrawTicket,
    winning_numbers: &CountryNumbers,
    payouts: &[CategoryPayout; CATEGORY_COUNT],
    has_jackpot_winner: bool,
) -> Option<Winner> {
    let result = compute_match(&ticket.selections, winning_numbers);
    let category = PrizeCategory::classify(result.matches, result.bonus_matched)?;
    if !is_category_paid(category, has_jackpot_winner) {
        return None;
    }

    let payout = &payouts[category.index()];
    let bonus_applied = category.is_bonus_eligible() && result.bonus_matched;
    let prize_cents = if bonus_applied { payout.bonus_prize_cents } else { payout.prize_cents };
    if prize_cents == 0 {
        return None;
    }

    Some(Winner {
        ticket_id: ticket.ticket_id,
        owner: ticket.owner,
        category,
        matches: result.matches,
        bonus_matched: result.bonus_matched,
        bonus_applied,
        prize_cents,
    })
}

/// Single-pass distribution of a complete ticket set.
pub fn distribute(
    prize_pool_cents: u64,
    tickets: &[DrawTicket],
    winning_numbers: &CountryNumbers,
) -> Result<Distribution> {
    let mut tally = CategoryTally::default();
    tally_tickets(&mut tally, tickets, winning_numbers)?;

    let table = compute_payouts(prize_pool_cents, &tally)?;

    let winners = tickets
        .iter()
        .filter_map(|t| winner_for(t, winning_numbers, &table.payouts, table.has_jackpot_winner))
        .collect();

    Ok(Distribution { tally, table, winners })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::state::numbers::CountryCode::{self, *};

    pub(crate) fn winning() -> CountryNumbers {
        CountryNumbers::from_pairs(&[
            (CA, 1), (IT, 2), (MX, 3), (NZ, 4), (KR, 5), (IE, 6), (UK, 7), (FR, 9),
        ])
    }

    /// Ticket hitting `hits` main numbers, optionally the bonus too.
    pub(crate) fn ticket(id: u64, hits: u8, bonus: bool) -> DrawTicket {
        let mut selections = CountryNumbers::default();
        for (i, code) in CountryCode::MAIN.iter().enumerate() {
            let n = if (i as u8) < hits { i as u8 + 1 } else { 30 + i as u8 };
            selections.set(*code, n);
        }
        selections.set(FR, if bonus { 9 } else { 8 });
        DrawTicket { ticket_id: id, owner: Pubkey::new_from_array([id as u8; 32]), selections }
    }

    #[test]
    fn scenario_a_single_jackpot_winner() {
        let d = distribute(100_000, &[ticket(1, 7, false)], &winning()).unwrap();
        assert!(d.has_jackpot_winner());
        assert_eq!(d.winners.len(), 1);
        assert_eq!(d.winners[0].category, PrizeCategory::Jackpot);
        assert_eq!(d.winners[0].prize_cents, 90_000);
        assert_eq!(d.distributed_cents(), 90_000);
    }

    #[test]
    fn scenario_b_bonus_goes_to_bonus_matched_winner() {
        let tickets = [ticket(1, 6, true), ticket(2, 6, false)];
        let d = distribute(100_000, &tickets, &winning()).unwrap();

        assert!(!d.has_jackpot_winner());
        assert_eq!(d.winners.len(), 2);
        let w1 = d.winners.iter().find(|w| w.ticket_id == 1).unwrap();
        let w2 = d.winners.iter().find(|w| w.ticket_id == 2).unwrap();
        assert_eq!(w1.category, PrizeCategory::SixMatches);
        assert_eq!(w1.prize_cents, 10_500);
        assert!(w1.bonus_applied);
        assert_eq!(w2.prize_cents, 10_000);
        assert!(!w2.bonus_applied);
        assert_eq!(d.distributed_cents(), 20_500);
        assert_eq!(100_000 - d.distributed_cents(), 79_500);
    }

    #[test]
    fn jackpot_suppresses_lower_categories() {
        let tickets = [
            ticket(1, 7, true),
            ticket(2, 6, true),
            ticket(3, 3, false),
            ticket(4, 0, true),
        ];
        let d = distribute(100_000, &tickets, &winning()).unwrap();

        assert!(d.has_jackpot_winner());
        let lower: u64 = d.table.payouts[1..].iter().map(|p| p.paid_cents).sum();
        assert_eq!(lower, 0);
        assert_eq!(d.winners.len(), 1);
        // jackpot winner with bonus: 90% + 0.5%
        assert_eq!(d.winners[0].prize_cents, 90_500);
        // lower tiers are still counted
        assert_eq!(d.tally.winners_in(PrizeCategory::SixMatches), 1);
    }

    #[test]
    fn bonus_only_tier_gets_no_add_on() {
        let tickets = [ticket(1, 0, true), ticket(2, 0, false)];
        let d = distribute(100_000, &tickets, &winning()).unwrap();
        assert_eq!(d.winners.len(), 1);
        assert_eq!(d.winners[0].category, PrizeCategory::BonusOnly);
        assert!(!d.winners[0].bonus_applied);
        assert_eq!(d.winners[0].prize_cents, 500);
    }

    #[test]
    fn every_lower_category_paid_independently() {
        let tickets: Vec<DrawTicket> = (0..=6).map(|h| ticket(h as u64 + 1, h, false)).collect();
        let d = distribute(100_000, &tickets, &winning()).unwrap();
        // 20 + 15 + 10 + 8 + 6 + 4.5 = 63.5% ; the 0-hit ticket missed the bonus
        assert_eq!(d.distributed_cents(), 63_500);
        assert_eq!(d.winners.len(), 6);
    }

    #[test]
    fn uneven_split_rounds_down_and_conserves() {
        let tickets = [ticket(1, 1, false), ticket(2, 1, false), ticket(3, 1, true)];
        let d = distribute(100_001, &tickets, &winning()).unwrap();
        let p = d.table.payouts[PrizeCategory::OneMatch.index()];
        // 4500.045 / 3 = 1500.015 ; the bonus winner adds 500.005 = 2000.02
        assert_eq!(p.prize_cents, 1_500);
        assert_eq!(p.bonus_prize_cents, 2_000);
        assert_eq!(p.paid_cents, 5_000);
        assert!(d.distributed_cents() <= 100_001);
    }

    #[test]
    fn empty_ticket_set_distributes_nothing() {
        let d = distribute(55_000, &[], &winning()).unwrap();
        assert_eq!(d.distributed_cents(), 0);
        assert!(d.winners.is_empty());
        assert!(!d.has_jackpot_winner());
    }

    #[test]
    fn tiny_pool_never_overpays() {
        let tickets: Vec<DrawTicket> = (0..200).map(|i| ticket(i, 7, i % 2 == 0)).collect();
        let d = distribute(100, &tickets, &winning()).unwrap();
        assert!(d.distributed_cents() <= 100);
    }

    #[test]
    fn winner_for_matches_distribution() {
        let tickets = [ticket(1, 4, true), ticket(2, 4, false), ticket(3, 2, false)];
        let d = distribute(250_000, &tickets, &winning()).unwrap();
        for t in tickets.iter() {
            let w = winner_for(t, &winning(), &d.table.payouts, d.table.has_jackpot_winner).unwrap();
            assert!(d.winners.contains(&w));
        }
    }

    #[test]
    fn untallied_category_reports_no_winner() {
        let d = distribute(100_000, &[ticket(1, 1, false)], &winning()).unwrap();
        assert_eq!(d.winners.len(), 1);

        // a six-match ticket that never reached the tally finds an empty slot
        let late = ticket(99, 6, false);
        assert_eq!(winner_for(&late, &winning(), &d.table.payouts, d.table.has_jackpot_winner), None);

        // same category, but the bonus slot was never funded
        let late_bonus = ticket(98, 1, true);
        assert_eq!(winner_for(&late_bonus, &winning(), &d.table.payouts, d.table.has_jackpot_winner), None);
    }
}
