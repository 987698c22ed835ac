use anchor_lang::prelude::*;
use crate::constants::BPS_DENOM;
use crate::errors::PrizePoolErrorCode;
use crate::state::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Global config PDA.
    #[account(
        init,
        payer = authority,
        space = 8 + Config::SIZE,
        seeds = [Config::SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    /// Running carryover / streak / Superball state.
    #[account(
        init,
        payer = authority,
        space = 8 + DrawLedger::SIZE,
        seeds = [DrawLedger::SEED],
        bump
    )]
    pub draw_ledger: Account<'info, DrawLedger>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_handler(
    ctx: Context<Initialize>,
    sales_prize_bps: u16,
    superball_trigger_streak: u8,
) -> Result<()> {
    require!(
        (sales_prize_bps as u64) <= BPS_DENOM,
        PrizePoolErrorCode::InvalidConfig
    );
    require!(superball_trigger_streak > 0, PrizePoolErrorCode::InvalidConfig);

    let authority_key = ctx.accounts.authority.key();
    let cfg = &mut ctx.accounts.config;
    let ledger = &mut ctx.accounts.draw_ledger;
    let clock = Clock::get()?;

    // ────────────────────────────────────────────────
    // Initialize config
    // ────────────────────────────────────────────────
    cfg.authority = authority_key;
    cfg.pause_draws = 0;
    cfg.sales_prize_bps = sales_prize_bps;
    cfg.superball_trigger_streak = superball_trigger_streak;
    cfg.started_at = clock.unix_timestamp;
    cfg.bump = ctx.bumps.config;
    cfg._reserved = [0; 16];

    // ────────────────────────────────────────────────
    // Initialize ledger: no carryover, no streak
    // ────────────────────────────────────────────────
    ledger.bump = ctx.bumps.draw_ledger;
    ledger.carryover_cents = 0;
    ledger.no_cat1_streak = 0;
    ledger.last_finalized_draw_date = 0;
    ledger.open_draw_date = 0;
    ledger.draws_finalized = 0;
    ledger.superball_jackpot_cents = 0;
    ledger.superball_active = 0;
    ledger.superball_triggered_at = 0;
    ledger.open_superball_date = 0;
    ledger.last_superball_date = 0;
    ledger.superball_awarded_at = 0;
    ledger.superball_draws_settled = 0;
    ledger.updated_at = clock.unix_timestamp;
    ledger._reserved = [0; 16];

    msg!(
        "Initialized: sales_prize_bps={} superball_trigger_streak={}",
        sales_prize_bps,
        superball_trigger_streak
    );

    Ok(())
}
