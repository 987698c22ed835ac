pub const DRAW_RECORD_VERSION: u8 = 1;
pub const SUPERBALL_DRAW_VERSION: u8 = 1;

pub const BPS_DENOM: u64 = 10_000;

/// Share of paid sales that funds the prize pool (the rest is operator commission).
pub const DEFAULT_SALES_PRIZE_BPS: u16 = 6_500; // 65%

/// Flat add-on for bonus (FR) hits in categories 1..=7, split among the
/// bonus-matched winners of the category.
pub const BONUS_ADD_ON_BPS: u64 = 50; // 0.5%

/// Consecutive draws without a category 1 winner before the carryover moves
/// into the Superball jackpot.
pub const DEFAULT_SUPERBALL_TRIGGER_STREAK: u8 = 10;

// Max tickets accepted in one tally instruction (transaction size bound)
pub const MAX_TICKETS_PER_BATCH: usize = 24;
pub const MAX_SUPERBALL_ENTRIES_PER_BATCH: usize = 24;

pub const SUPERBALL_NUMBERS_PER_TICKET: usize = 5;
pub const SUPERBALL_MIN_NUMBER: u8 = 1;
pub const SUPERBALL_MAX_NUMBER: u8 = 10;
