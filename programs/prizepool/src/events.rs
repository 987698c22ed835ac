use anchor_lang::prelude::*;

#[event]
pub struct DrawOpened {
    pub draw_date: i64,
    pub winning_numbers: [u8; 8],
    pub total_sold_cents: u64,
    pub commission_cents: u64,
    pub carry_in_cents: u64,
    pub prize_pool_cents: u64,
}

#[event]
pub struct DrawFinalized {
    pub draw_date: i64,
    pub prize_pool_cents: u64,
    pub distributed_cents: u64,
    pub total_winners: u64,
    pub has_jackpot_winner: bool,
    pub carry_out_cents: u64,
    pub no_cat1_streak: u8,
    pub tally_digest: [u8; 32],
}

#[event]
pub struct SuperballTransferred {
    pub draw_date: i64,
    pub amount_cents: u64,
    pub jackpot_after_cents: u64,
}

#[event]
pub struct WinnerRecorded {
    pub draw_date: i64,
    pub ticket_id: u64,
    pub owner: Pubkey,
    pub category: u8,
    pub matches: u8,
    pub bonus_matched: bool,
    pub bonus_applied: bool,
    pub prize_cents: u64,
}

#[event]
pub struct SuperballOpened {
    pub draw_date: i64,
    pub winner_number: u8,
    pub jackpot_cents: u64,
    pub triggered_at: i64,
}

/// One winning Superball entry. Payment is made off-chain, so every hit is
/// reported with its deposit still pending.
#[event]
pub struct SuperballHit {
    pub draw_date: i64,
    pub owner: Pubkey,
    pub numbers: [u8; 5],
    pub deposit_pending: bool,
}

#[event]
pub struct SuperballSettled {
    pub draw_date: i64,
    pub winner_number: u8,
    pub total_winners: u32,
    pub prize_per_winner_cents: u64,
    pub remainder_cents: u64,
    pub jackpot_rolled_over: bool,
}
