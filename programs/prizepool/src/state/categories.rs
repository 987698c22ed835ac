use anchor_lang::prelude::*;

pub const CATEGORY_COUNT: usize = 8;

/// The eight fixed prize tiers. Category 1 is the jackpot; category 8 pays a
/// ticket with no main matches that hit the bonus number.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PrizeCategory {
    Jackpot = 1,
    SixMatches = 2,
    FiveMatches = 3,
    FourMatches = 4,
    ThreeMatches = 5,
    TwoMatches = 6,
    OneMatch = 7,
    BonusOnly = 8,
}

impl PrizeCategory {
    pub const ALL: [PrizeCategory; CATEGORY_COUNT] = [
        PrizeCategory::Jackpot,
        PrizeCategory::SixMatches,
        PrizeCategory::FiveMatches,
        PrizeCategory::FourMatches,
        PrizeCategory::ThreeMatches,
        PrizeCategory::TwoMatches,
        PrizeCategory::OneMatch,
        PrizeCategory::BonusOnly,
    ];

    /// Category number, 1..=8.
    #[inline]
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Position in per-category arrays, 0..=7.
    #[inline]
    pub fn index(self) -> usize {
        self as usize - 1
    }

    pub fn required_matches(self) -> u8 {
        match self {
            PrizeCategory::Jackpot => 7,
            PrizeCategory::SixMatches => 6,
            PrizeCategory::FiveMatches => 5,
            PrizeCategory::FourMatches => 4,
            PrizeCategory::ThreeMatches => 3,
            PrizeCategory::TwoMatches => 2,
            PrizeCategory::OneMatch => 1,
            PrizeCategory::BonusOnly => 0,
        }
    }

    /// Share of the prize pool in basis points.
    ///
    /// The shares add up to 154%. That is fine because lower categories are
    /// never paid in a draw where the jackpot has winners.
    pub fn share_bps(self) -> u64 {
        match self {
            PrizeCategory::Jackpot => 9_000,
            PrizeCategory::SixMatches => 2_000,
            PrizeCategory::FiveMatches => 1_500,
            PrizeCategory::FourMatches => 1_000,
            PrizeCategory::ThreeMatches => 800,
            PrizeCategory::TwoMatches => 600,
            PrizeCategory::OneMatch => 450,
            PrizeCategory::BonusOnly => 50,
        }
    }

    /// Categories 1..=7 get the flat bonus add-on. Category 8 already needs
    /// the bonus hit to qualify.
    #[inline]
    pub fn is_bonus_eligible(self) -> bool {
        self != PrizeCategory::BonusOnly
    }

    /// Maps a ticket's match outcome to its tier. `None` = not a winner.
    pub fn classify(matches: u8, bonus_matched: bool) -> Option<PrizeCategory> {
        match matches {
            7 => Some(PrizeCategory::Jackpot),
            6 => Some(PrizeCategory::SixMatches),
            5 => Some(PrizeCategory::FiveMatches),
            4 => Some(PrizeCategory::FourMatches),
            3 => Some(PrizeCategory::ThreeMatches),
            2 => Some(PrizeCategory::TwoMatches),
            1 => Some(PrizeCategory::OneMatch),
            0 if bonus_matched => Some(PrizeCategory::BonusOnly),
            _ => None,
        }
    }
}

/// Winner counts per category accumulated while tickets are tallied.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryTally {
    pub winners: [u32; CATEGORY_COUNT],
    /// Winners of the category whose bonus number also matched.
    pub bonus_winners: [u32; CATEGORY_COUNT],
}

impl CategoryTally {
    pub const SIZE: usize = (4 * CATEGORY_COUNT) * 2;

    #[inline]
    pub fn winners_in(&self, category: PrizeCategory) -> u32 {
        self.winners[category.index()]
    }

    #[inline]
    pub fn bonus_winners_in(&self, category: PrizeCategory) -> u32 {
        self.bonus_winners[category.index()]
    }

    pub fn has_jackpot_winner(&self) -> bool {
        self.winners_in(PrizeCategory::Jackpot) > 0
    }

    pub fn total_winners(&self) -> u64 {
        self.winners.iter().map(|n| *n as u64).sum()
    }
}

/// Per-winner amounts for one category, in cents.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryPayout {
    /// Prize of a winner without the bonus add-on.
    pub prize_cents: u64,
    /// Prize of a bonus-matched winner (base share plus add-on).
    pub bonus_prize_cents: u64,
    /// Everything the category paid out.
    pub paid_cents: u64,
}

impl CategoryPayout {
    pub const SIZE: usize = 8 + 8 + 8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_consistent() {
        for (i, cat) in PrizeCategory::ALL.iter().enumerate() {
            assert_eq!(cat.index(), i);
            assert_eq!(cat.number() as usize, i + 1);
            if *cat != PrizeCategory::BonusOnly {
                assert_eq!(PrizeCategory::classify(cat.required_matches(), false), Some(*cat));
            }
        }
        let total: u64 = PrizeCategory::ALL.iter().map(|c| c.share_bps()).sum();
        assert_eq!(total, 15_400);
    }

    #[test]
    fn zero_matches_needs_bonus() {
        assert_eq!(PrizeCategory::classify(0, false), None);
        assert_eq!(PrizeCategory::classify(0, true), Some(PrizeCategory::BonusOnly));
        // bonus on top of main matches does not change the tier
        assert_eq!(PrizeCategory::classify(6, true), Some(PrizeCategory::SixMatches));
    }
}
