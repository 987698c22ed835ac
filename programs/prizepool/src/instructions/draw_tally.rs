use anchor_lang::prelude::*;
use crate::errors::PrizePoolErrorCode;
use crate::state::*;

/// ---------------------------------------------------------------------------
/// TallyDrawTickets
///
/// Feeds one batch of the draw's paid tickets through the match calculator
/// and accumulates per-category winner counts on the DrawRecord.
///
/// Batches are numbered from 0 and must arrive in order; a retried
/// transaction for a batch that already landed is rejected.
/// ---------------------------------------------------------------------------
#[derive(Accounts)]
#[instruction(draw_date: i64)]
pub struct TallyDrawTickets<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ PrizePoolErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [DrawRecord::SEED_PREFIX, draw_date.to_le_bytes().as_ref()],
        bump = draw_record.bump,
        constraint = draw_record.draw_date == draw_date @ PrizePoolErrorCode::DrawDateMismatch,
    )]
    pub draw_record: Box<Account<'info, DrawRecord>>,

    pub authority: Signer<'info>,
}

pub fn tally_draw_tickets_handler(
    ctx: Context<TallyDrawTickets>,
    draw_date: i64,
    batch_index: u32,
    tickets: Vec<DrawTicket>,
) -> Result<()> {
    let record = &mut ctx.accounts.draw_record;

    record.absorb_batch(batch_index, &tickets)?;
    record.last_updated_ts = Clock::get()?.unix_timestamp;

    msg!(
        "Draw {} batch {}: tickets={} tallied={} winners={:?}",
        draw_date,
        batch_index,
        tickets.len(),
        record.tickets_tallied,
        record.tally.winners
    );

    Ok(())
}
