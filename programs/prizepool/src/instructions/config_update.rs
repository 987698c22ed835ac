use anchor_lang::prelude::*;
use crate::constants::BPS_DENOM;
use crate::errors::PrizePoolErrorCode;
use crate::state::config::Config;
use crate::state::draw_ledger::DrawLedger;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// Global Config PDA.
    /// Only the `authority` stored in Config is allowed to update it.
    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ PrizePoolErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    /// Read to validate a new trigger against the running streak.
    #[account(
        seeds = [DrawLedger::SEED],
        bump = draw_ledger.bump,
    )]
    pub draw_ledger: Account<'info, DrawLedger>,

    /// Current program authority.
    ///
    /// Must match `config.authority` due to the `has_one` constraint above.
    pub authority: Signer<'info>,
}

/// Updates one or more global configuration parameters.
///
/// - Only callable by the `authority` stored in `Config`.
/// - Any argument set to `None` is left unchanged.
pub fn update_config_handler(
    ctx: Context<UpdateConfig>,
    pause_draws: Option<u8>,
    new_authority: Option<Pubkey>,
    new_sales_prize_bps: Option<u16>,
    new_superball_trigger_streak: Option<u8>,
) -> Result<()> {
    let ledger = &ctx.accounts.draw_ledger;
    let cfg = &mut ctx.accounts.config;

    // ─────────────────────────────────────────────
    // Pause flag
    // ─────────────────────────────────────────────
    if let Some(pause) = pause_draws {
        cfg.pause_draws = if pause == 1 { 1 } else { 0 };
    }

    // ─────────────────────────────────────────────
    // Authority rotation
    // ─────────────────────────────────────────────
    if let Some(new_auth) = new_authority {
        require!(new_auth != Pubkey::default(), PrizePoolErrorCode::InvalidAuthorityTarget);
        require!(new_auth != system_program::ID, PrizePoolErrorCode::InvalidAuthorityTarget);
        require!(new_auth != *ctx.program_id, PrizePoolErrorCode::InvalidAuthorityTarget);
        require!(new_auth != cfg.key(), PrizePoolErrorCode::InvalidAuthorityTarget);
        require!(new_auth != ledger.key(), PrizePoolErrorCode::InvalidAuthorityTarget);
        cfg.authority = new_auth;
    }

    // ─────────────────────────────────────────────
    // Engine parameters
    // ─────────────────────────────────────────────
    if let Some(bps) = new_sales_prize_bps {
        require!((bps as u64) <= BPS_DENOM, PrizePoolErrorCode::InvalidConfig);
        cfg.sales_prize_bps = bps;
    }

    // The trigger is an exact-equality edge: a value at or below the running
    // streak would never fire.
    if let Some(streak) = new_superball_trigger_streak {
        require!(streak > ledger.no_cat1_streak, PrizePoolErrorCode::InvalidConfig);
        cfg.superball_trigger_streak = streak;
    }

    msg!(
        "Config updated: pause_draws={} sales_prize_bps={} superball_trigger_streak={}",
        cfg.pause_draws,
        cfg.sales_prize_bps,
        cfg.superball_trigger_streak
    );

    Ok(())
}
