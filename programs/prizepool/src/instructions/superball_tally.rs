use anchor_lang::prelude::*;
use crate::errors::PrizePoolErrorCode;
use crate::events::SuperballHit;
use crate::state::*;

#[derive(Accounts)]
#[instruction(draw_date: i64)]
pub struct TallySuperballEntries<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ PrizePoolErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [SuperballDraw::SEED_PREFIX, draw_date.to_le_bytes().as_ref()],
        bump = superball_draw.bump,
        constraint = superball_draw.draw_date == draw_date @ PrizePoolErrorCode::DrawDateMismatch,
    )]
    pub superball_draw: Account<'info, SuperballDraw>,

    pub authority: Signer<'info>,
}

/// Counts one ordered batch of Superball entries and emits a `SuperballHit`
/// for every entry holding the drawn number.
pub fn tally_superball_entries_handler(
    ctx: Context<TallySuperballEntries>,
    draw_date: i64,
    batch_index: u32,
    entries: Vec<SuperballEntry>,
) -> Result<()> {
    let draw = &mut ctx.accounts.superball_draw;

    let hits = draw.absorb_batch(batch_index, &entries)?;

    for i in hits.iter() {
        let entry = &entries[*i];
        emit!(SuperballHit {
            draw_date,
            owner: entry.owner,
            numbers: entry.numbers,
            deposit_pending: true,
        });
    }

    msg!(
        "Superball {} batch {}: entries={} hits={} winners={}",
        draw_date,
        batch_index,
        entries.len(),
        hits.len(),
        draw.total_winners
    );

    Ok(())
}
