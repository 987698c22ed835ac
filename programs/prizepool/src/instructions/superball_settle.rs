use anchor_lang::prelude::*;
use crate::errors::PrizePoolErrorCode;
use crate::events::SuperballSettled;
use crate::state::*;
use crate::utils::money::fmt_cents;

#[derive(Accounts)]
#[instruction(draw_date: i64)]
pub struct SettleSuperballDraw<'info> {
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
        mut,
        seeds = [SuperballDraw::SEED_PREFIX, draw_date.to_le_bytes().as_ref()],
        bump = superball_draw.bump,
        constraint = superball_draw.draw_date == draw_date @ PrizePoolErrorCode::DrawDateMismatch,
    )]
    pub superball_draw: Account<'info, SuperballDraw>,

    pub authority: Signer<'info>,
}

/// ---------------------------------------------------------------------------
/// settle_superball_draw_handler
///
/// Splits the snapshot jackpot evenly (rounded down to the cent) across the
/// tallied winners.
///
///   - Winners: the paid amount leaves the Superball pool, the jackpot is
///     marked awarded and the split dust stays in the pool.
///   - No winners: nothing is paid and the jackpot stays active for the
///     next Superball draw.
///
/// A settled draw cannot be settled again (`SuperballAlreadyAwarded`).
/// ---------------------------------------------------------------------------
pub fn settle_superball_draw_handler(ctx: Context<SettleSuperballDraw>, draw_date: i64) -> Result<()> {
    let ledger = &mut ctx.accounts.draw_ledger;
    let draw = &mut ctx.accounts.superball_draw;
    let clock = Clock::get()?;

    let paid_cents = draw.settle(clock.unix_timestamp)?;
    ledger.settle_superball(draw_date, draw.triggered_at, draw.total_winners, paid_cents)?;
    ledger.updated_at = clock.unix_timestamp;

    let rolled_over = draw.total_winners == 0;
    msg!(
        "Superball {} settled: winners={} prize_per_winner={} remainder={} rolled_over={} pool_left={}",
        draw_date,
        draw.total_winners,
        fmt_cents(draw.prize_per_winner_cents),
        fmt_cents(draw.remainder_cents),
        rolled_over,
        fmt_cents(ledger.superball_jackpot_cents)
    );

    emit!(SuperballSettled {
        draw_date,
        winner_number: draw.winner_number,
        total_winners: draw.total_winners,
        prize_per_winner_cents: draw.prize_per_winner_cents,
        remainder_cents: draw.remainder_cents,
        jackpot_rolled_over: rolled_over,
    });

    Ok(())
}
