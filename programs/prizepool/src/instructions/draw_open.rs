use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::PrizePoolErrorCode;
use crate::events::DrawOpened;
use crate::state::*;
use crate::utils::carryover::prize_pool_for;
use crate::utils::money::fmt_cents;

// -----------------------------------------------------------------------------
// OpenDraw
//
// First step of a draw's pipeline. This:
//   - Validates the posted winning numbers against the country ranges
//   - Reserves the draw date on the ledger (strictly after the last finalized
//     draw, nothing else in flight)
//   - Creates the DrawRecord PDA, snapshots the incoming carryover and
//     computes the prize pool
//
// The PDA is keyed by draw date, so posting the same date twice fails.
// -----------------------------------------------------------------------------
#[derive(Accounts)]
#[instruction(draw_date: i64)]
pub struct OpenDraw<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ PrizePoolErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [DrawLedger::SEED],
        bump = draw_ledger.bump,
    )]
    pub draw_ledger: Account<'info, DrawLedger>,

    #[account(
        init,
        payer = authority,
        space = 8 + DrawRecord::SIZE,
        seeds = [DrawRecord::SEED_PREFIX, draw_date.to_le_bytes().as_ref()],
        bump
    )]
    pub draw_record: Box<Account<'info, DrawRecord>>,

    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn open_draw_handler(
    ctx: Context<OpenDraw>,
    draw_date: i64,
    winning_numbers: CountryNumbers,
    total_sold_cents: u64,
) -> Result<()> {
    let config = &ctx.accounts.config;
    let ledger = &mut ctx.accounts.draw_ledger;
    let record = &mut ctx.accounts.draw_record;
    let clock = Clock::get()?;

    // ─────────────────────────────────────────────────────────────
    // 1) Validation
    // ─────────────────────────────────────────────────────────────
    require!(!config.is_draws_paused(), PrizePoolErrorCode::DrawsPaused);
    winning_numbers.validate_winning()?;
    ledger.begin_draw(draw_date)?;

    for code in CountryCode::ALL {
        match winning_numbers.get(code) {
            Some(n) => msg!("Winning {}: {}", code.as_str(), n),
            None => msg!("Winning {}: missing", code.as_str()),
        }
    }

    // ─────────────────────────────────────────────────────────────
    // 2) Prize pool = sales share + previous carryover
    // ─────────────────────────────────────────────────────────────
    let params = config.engine_params();
    let pool = prize_pool_for(total_sold_cents, ledger.carryover_cents, params.sales_prize_bps)?;

    msg!(
        "Draw {}: sold={} commission={} sales_prize_pool={} carry_in={} prize_pool={} streak_in={}",
        draw_date,
        fmt_cents(pool.total_sold_cents),
        fmt_cents(pool.commission_cents),
        fmt_cents(pool.sales_prize_pool_cents),
        fmt_cents(pool.carry_in_cents),
        fmt_cents(pool.prize_pool_cents),
        ledger.no_cat1_streak
    );

    // ─────────────────────────────────────────────────────────────
    // 3) Initialize DrawRecord
    // ─────────────────────────────────────────────────────────────
    record.draw_date = draw_date;
    record.bump = ctx.bumps.draw_record;
    record.status = DrawStatus::Tallying as u8;
    record.version = DRAW_RECORD_VERSION;
    record.winning_numbers = winning_numbers;
    record.set_pool(&pool);

    record.tally = CategoryTally::default();
    record.tickets_tallied = 0;
    record.batches_tallied = 0;
    record.last_ticket_id = 0;
    record.tally_digest = [0u8; 32];
    record.attempt_count = 1;

    // Result fields are written by finalize_draw
    record.distributed_cents = 0;
    record.carry_out_cents = 0;
    record.no_cat1_streak = 0;
    record.has_jackpot_winner = 0;
    record.superball_transfer_cents = None;
    record.payouts = [CategoryPayout::default(); CATEGORY_COUNT];

    record.opened_at = clock.unix_timestamp;
    record.finalized_at = 0;
    record.last_updated_ts = clock.unix_timestamp;
    record._reserved = [0u8; 16];

    ledger.updated_at = clock.unix_timestamp;

    emit!(DrawOpened {
        draw_date,
        winning_numbers: winning_numbers.numbers,
        total_sold_cents: pool.total_sold_cents,
        commission_cents: pool.commission_cents,
        carry_in_cents: pool.carry_in_cents,
        prize_pool_cents: pool.prize_pool_cents,
    });

    Ok(())
}
