use crate::state::numbers::{CountryCode, CountryNumbers, COUNTRY_SLOTS};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchResult {
    /// Distinct ticket main numbers found among the main winning numbers.
    pub matches: u8,
    /// Ticket carries a bonus pick (explicit FR, or every slot filled).
    pub has_bonus_field: bool,
    pub bonus_matched: bool,
}

/// Bitmask of the main-country values present (bit n => number n).
///
/// Repeated numbers collapse into one bit, which is what keeps a ticket from
/// inflating its match count by picking the same number for two countries.
/// Values outside the mask width cannot be drawn and are treated as absent.
fn main_numbers_mask(numbers: &CountryNumbers) -> u128 {
    let mut mask: u128 = 0;
    for code in CountryCode::MAIN {
        if let Some(n) = numbers.get(code) {
            if (n as u32) < u128::BITS {
                mask |= 1u128 << n;
            }
        }
    }
    mask
}

/// Compares a ticket against a draw's winning numbers.
///
/// A main number counts when it appears anywhere in the set of main winning
/// values (not only under the same country). Missing winning numbers simply
/// cannot be matched.
pub fn compute_match(selections: &CountryNumbers, winning_numbers: &CountryNumbers) -> MatchResult {
    let ticket_mask = main_numbers_mask(selections);
    let winner_mask = main_numbers_mask(winning_numbers);
    let matches = (ticket_mask & winner_mask).count_ones() as u8;

    let ticket_bonus = selections.get(CountryCode::BONUS);
    let has_bonus_field = ticket_bonus.is_some() || selections.len() == COUNTRY_SLOTS;

    let bonus_matched = match (ticket_bonus, winning_numbers.get(CountryCode::BONUS)) {
        (Some(t), Some(w)) => t == w,
        _ => false,
    };

    MatchResult { matches, has_bonus_field, bonus_matched }
}
