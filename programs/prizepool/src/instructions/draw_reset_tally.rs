use anchor_lang::prelude::*;
use crate::errors::PrizePoolErrorCode;
use crate::state::*;

/// ---------------------------------------------------------------------------
/// ResetDrawTally
///
/// Recovery path for a worker that died halfway through the ticket batches:
/// clears the partial tally of a draw that is still tallying so counting can
/// restart from batch 0. Bumps `attempt_count`.
///
/// A finalized draw cannot be reset.
/// ---------------------------------------------------------------------------
#[derive(Accounts)]
#[instruction(draw_date: i64)]
pub struct ResetDrawTally<'info> {
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

pub fn reset_draw_tally_handler(ctx: Context<ResetDrawTally>, draw_date: i64) -> Result<()> {
    let record = &mut ctx.accounts.draw_record;

    record.reset_tally()?;
    record.last_updated_ts = Clock::get()?.unix_timestamp;

    msg!("Draw {} tally reset, attempt {}", draw_date, record.attempt_count);
    Ok(())
}
