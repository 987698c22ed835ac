use anchor_lang::prelude::*;
use crate::errors::PrizePoolErrorCode;
use crate::events::{DrawFinalized, SuperballTransferred};
use crate::state::*;
use crate::utils::money::fmt_cents;

/// Cannot finalize the same draw twice:
// the DrawRecord leaves `Tallying` here and never returns to it. A retried
// call on a finalized draw logs and exits without touching the ledger.
#[derive(Accounts)]
#[instruction(draw_date: i64)]
pub struct FinalizeDraw<'info> {
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
        seeds = [DrawRecord::SEED_PREFIX, draw_date.to_le_bytes().as_ref()],
        bump = draw_record.bump,
        constraint = draw_record.draw_date == draw_date @ PrizePoolErrorCode::DrawDateMismatch,
    )]
    pub draw_record: Box<Account<'info, DrawRecord>>,

    pub authority: Signer<'info>,
}

/// ---------------------------------------------------------------------------
/// finalize_draw_handler
///
/// Runs the prize distributor over the accumulated tally and the carryover
/// state machine over its result:
///   - Jackpot winner: lower categories are not paid, carryover and streak
///     reset to 0.
///   - No jackpot winner: `prize_pool - distributed` carries and the streak
///     grows. When the streak lands on the configured trigger, the carryover
///     moves into the Superball jackpot instead and both reset.
/// ---------------------------------------------------------------------------
pub fn finalize_draw_handler(ctx: Context<FinalizeDraw>, draw_date: i64) -> Result<()> {
    let params = ctx.accounts.config.engine_params();
    let ledger = &mut ctx.accounts.draw_ledger;
    let record = &mut ctx.accounts.draw_record;
    let clock = Clock::get()?;

    // ─────────────────────────────────────────────
    // 1) Distribute + carryover / streak transition
    // ─────────────────────────────────────────────
    let Some((table, transition)) =
        record.finalize_once(ledger, params.superball_trigger_streak, clock.unix_timestamp)?
    else {
        msg!("Draw {} already finalized, skipping", draw_date);
        return Ok(());
    };

    for category in PrizeCategory::ALL {
        let winners = record.tally.winners_in(category);
        if winners == 0 {
            continue;
        }
        let payout = &table.payouts[category.index()];
        msg!(
            "Category {}: winners={} bonus_winners={} prize={} bonus_prize={} paid={}",
            category.number(),
            winners,
            record.tally.bonus_winners_in(category),
            fmt_cents(payout.prize_cents),
            fmt_cents(payout.bonus_prize_cents),
            fmt_cents(payout.paid_cents)
        );
    }

    msg!(
        "Draw {} finalized: prize_pool={} distributed={} jackpot_winner={} carryover={} streak={}",
        draw_date,
        fmt_cents(record.prize_pool_cents),
        fmt_cents(table.distributed_cents),
        table.has_jackpot_winner,
        fmt_cents(transition.next.carryover_cents),
        transition.next.no_cat1_streak
    );

    emit!(DrawFinalized {
        draw_date,
        prize_pool_cents: record.prize_pool_cents,
        distributed_cents: table.distributed_cents,
        total_winners: record.tally.total_winners(),
        has_jackpot_winner: table.has_jackpot_winner,
        carry_out_cents: transition.next.carryover_cents,
        no_cat1_streak: transition.next.no_cat1_streak,
        tally_digest: record.tally_digest,
    });

    // ─────────────────────────────────────────────
    // 2) Superball trigger
    // ─────────────────────────────────────────────
    if let Some(amount_cents) = transition.superball_transfer_cents {
        msg!(
            "Superball triggered after {} draws without a jackpot: transfer={} jackpot={}",
            params.superball_trigger_streak,
            fmt_cents(amount_cents),
            fmt_cents(ledger.superball_jackpot_cents)
        );
        emit!(SuperballTransferred {
            draw_date,
            amount_cents,
            jackpot_after_cents: ledger.superball_jackpot_cents,
        });
    }

    Ok(())
}
