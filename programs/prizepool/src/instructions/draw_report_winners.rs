use anchor_lang::prelude::*;
use crate::constants::MAX_TICKETS_PER_BATCH;
use crate::errors::PrizePoolErrorCode;
use crate::events::WinnerRecorded;
use crate::state::*;
use crate::utils::distribution::winner_for;

/// ---------------------------------------------------------------------------
/// ReportDrawWinners
///
/// Re-derives each ticket's category and prize from a finalized draw's
/// stored payout table and emits one `WinnerRecorded` per paid ticket. Does
/// not write any account, so it can be replayed freely by the notifier.
/// ---------------------------------------------------------------------------
#[derive(Accounts)]
#[instruction(draw_date: i64)]
pub struct ReportDrawWinners<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ PrizePoolErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(
        seeds = [DrawRecord::SEED_PREFIX, draw_date.to_le_bytes().as_ref()],
        bump = draw_record.bump,
        constraint = draw_record.draw_date == draw_date @ PrizePoolErrorCode::DrawDateMismatch,
    )]
    pub draw_record: Box<Account<'info, DrawRecord>>,

    pub authority: Signer<'info>,
}

pub fn report_draw_winners_handler(
    ctx: Context<ReportDrawWinners>,
    draw_date: i64,
    tickets: Vec<DrawTicket>,
) -> Result<()> {
    let record = &ctx.accounts.draw_record;

    require!(record.is_finalized(), PrizePoolErrorCode::DrawNotFinalized);
    require!(
        tickets.len() <= MAX_TICKETS_PER_BATCH,
        PrizePoolErrorCode::TooManyTickets
    );

    let has_jackpot_winner = record.has_jackpot_winner != 0;
    let mut reported = 0u32;

    for ticket in tickets.iter() {
        let Some(winner) = winner_for(ticket, &record.winning_numbers, &record.payouts, has_jackpot_winner)
        else {
            continue;
        };

        emit!(WinnerRecorded {
            draw_date,
            ticket_id: winner.ticket_id,
            owner: winner.owner,
            category: winner.category.number(),
            matches: winner.matches,
            bonus_matched: winner.bonus_matched,
            bonus_applied: winner.bonus_applied,
            prize_cents: winner.prize_cents,
        });
        reported += 1;
    }

    msg!("Draw {}: {} of {} tickets won", draw_date, reported, tickets.len());
    Ok(())
}
