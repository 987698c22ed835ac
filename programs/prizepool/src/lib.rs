use anchor_lang::prelude::*;
use solana_security_txt::security_txt;

// -----------------------------------------------------------------------------
// Program ID
// -----------------------------------------------------------------------------
declare_id!("6VdG494fiTbnHQA9Ep1cqLjE5rrDM6fUJekYZCDmEXvE");

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "Prize Pool",
    project_url: "https://github.com/prizepool-engine/prizepool",
    contacts: "email:security@prizepool-engine.dev",
    policy: "https://github.com/prizepool-engine/prizepool/blob/main/SECURITY.md",
    preferred_languages: "en"
}


// -----------------------------------------------------------------------------
// Modules
// -----------------------------------------------------------------------------
pub mod state;
pub mod instructions;
pub mod utils;
pub mod errors;
pub mod events;
pub mod constants;

use instructions::*;
use state::{CountryNumbers, DrawTicket, SuperballEntry};

// -----------------------------------------------------------------------------
// Program Entrypoints
// -----------------------------------------------------------------------------
#[program]
pub mod prizepool {
    use super::*;

    // -------------------------------------------------------------------------
    // initialize
    // -------------------------------------------------------------------------
    pub fn initialize(
        ctx: Context<Initialize>,
        sales_prize_bps: u16,
        superball_trigger_streak: u8,
    ) -> Result<()> {
        initialize_handler(ctx, sales_prize_bps, superball_trigger_streak)
    }

    // -------------------------------------------------------------------------
    // update_config
    // -------------------------------------------------------------------------
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        pause_draws: Option<u8>,
        new_authority: Option<Pubkey>,
        new_sales_prize_bps: Option<u16>,
        new_superball_trigger_streak: Option<u8>,
    ) -> Result<()> {
        update_config_handler(
            ctx,
            pause_draws,
            new_authority,
            new_sales_prize_bps,
            new_superball_trigger_streak,
        )
    }

    // =====================================================================
    // MAIN DRAW: open -> tally batches -> finalize
    // =====================================================================

    pub fn open_draw(
        ctx: Context<OpenDraw>,
        draw_date: i64,
        winning_numbers: CountryNumbers,
        total_sold_cents: u64,
    ) -> Result<()> {
        open_draw_handler(ctx, draw_date, winning_numbers, total_sold_cents)
    }

    pub fn tally_draw_tickets(
        ctx: Context<TallyDrawTickets>,
        draw_date: i64,
        batch_index: u32,
        tickets: Vec<DrawTicket>,
    ) -> Result<()> {
        tally_draw_tickets_handler(ctx, draw_date, batch_index, tickets)
    }

    pub fn reset_draw_tally(ctx: Context<ResetDrawTally>, draw_date: i64) -> Result<()> {
        reset_draw_tally_handler(ctx, draw_date)
    }

    pub fn finalize_draw(ctx: Context<FinalizeDraw>, draw_date: i64) -> Result<()> {
        finalize_draw_handler(ctx, draw_date)
    }

    pub fn report_draw_winners(
        ctx: Context<ReportDrawWinners>,
        draw_date: i64,
        tickets: Vec<DrawTicket>,
    ) -> Result<()> {
        report_draw_winners_handler(ctx, draw_date, tickets)
    }

    // =====================================================================
    // SUPERBALL: open -> tally batches -> settle
    // =====================================================================

    pub fn open_superball_draw(
        ctx: Context<OpenSuperballDraw>,
        draw_date: i64,
        winner_number: u8,
    ) -> Result<()> {
        open_superball_draw_handler(ctx, draw_date, winner_number)
    }

    pub fn tally_superball_entries(
        ctx: Context<TallySuperballEntries>,
        draw_date: i64,
        batch_index: u32,
        entries: Vec<SuperballEntry>,
    ) -> Result<()> {
        tally_superball_entries_handler(ctx, draw_date, batch_index, entries)
    }

    pub fn settle_superball_draw(ctx: Context<SettleSuperballDraw>, draw_date: i64) -> Result<()> {
        settle_superball_draw_handler(ctx, draw_date)
    }
}
