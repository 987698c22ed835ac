use anchor_lang::prelude::*;
use crate::constants::SUPERBALL_DRAW_VERSION;
use crate::errors::PrizePoolErrorCode;
use crate::events::SuperballOpened;
use crate::state::*;
use crate::utils::money::fmt_cents;
use crate::utils::superball::{claimable_jackpot, require_winner_number};

// -----------------------------------------------------------------------------
// OpenSuperballDraw
//
// Posts the drawn Superball number and snapshots the active jackpot into a
// SuperballDraw PDA keyed by draw date. Fails with `NoActiveJackpot` when no
// streak transfer is waiting to be paid.
// -----------------------------------------------------------------------------
#[derive(Accounts)]
#[instruction(draw_date: i64)]
pub struct OpenSuperballDraw<'info> {
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
        space = 8 + SuperballDraw::SIZE,
        seeds = [SuperballDraw::SEED_PREFIX, draw_date.to_le_bytes().as_ref()],
        bump
    )]
    pub superball_draw: Account<'info, SuperballDraw>,

    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}

pub fn open_superball_draw_handler(
    ctx: Context<OpenSuperballDraw>,
    draw_date: i64,
    winner_number: u8,
) -> Result<()> {
    let config = &ctx.accounts.config;
    let ledger = &mut ctx.accounts.draw_ledger;
    let draw = &mut ctx.accounts.superball_draw;
    let clock = Clock::get()?;

    require!(!config.is_draws_paused(), PrizePoolErrorCode::DrawsPaused);
    require_winner_number(winner_number)?;

    let jackpot = claimable_jackpot(&**ledger, draw_date)?;
    ledger.begin_superball(draw_date)?;
    ledger.updated_at = clock.unix_timestamp;

    draw.draw_date = draw_date;
    draw.bump = ctx.bumps.superball_draw;
    draw.status = SuperballStatus::Tallying as u8;
    draw.version = SUPERBALL_DRAW_VERSION;
    draw.winner_number = winner_number;
    draw.jackpot_cents = jackpot.amount_cents;
    draw.triggered_at = jackpot.triggered_at;
    draw.entries_tallied = 0;
    draw.batches_tallied = 0;
    draw.total_winners = 0;
    draw.prize_per_winner_cents = 0;
    draw.remainder_cents = 0;
    draw.opened_at = clock.unix_timestamp;
    draw.settled_at = 0;
    draw._reserved = [0u8; 16];

    msg!(
        "Superball {} opened: number={} jackpot={} triggered_at={}",
        draw_date,
        winner_number,
        fmt_cents(jackpot.amount_cents),
        jackpot.triggered_at
    );

    emit!(SuperballOpened {
        draw_date,
        winner_number,
        jackpot_cents: jackpot.amount_cents,
        triggered_at: jackpot.triggered_at,
    });

    Ok(())
}
