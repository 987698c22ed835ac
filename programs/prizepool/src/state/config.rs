use anchor_lang::prelude::*;

use crate::utils::carryover::EngineParams;

/// Global configuration PDA.
///
/// Stores the program authority, the pause switch and the tunable engine
/// parameters. The prize category table and the bonus add-on are constants.
#[account]
pub struct Config {
    /// Program admin authority (posts draws and Superball draws).
    pub authority: Pubkey,

    /// 1 = opening new draws paused, 0 = enabled.
    pub pause_draws: u8,

    /// Share of paid sales that funds the prize pool, in basis points.
    pub sales_prize_bps: u16,

    /// Consecutive draws without a category 1 winner that move the
    /// carryover into the Superball jackpot.
    pub superball_trigger_streak: u8,

    /// Unix timestamp when the program was initialized.
    pub started_at: i64,

    /// PDA bump for Config.
    pub bump: u8,

    /// Reserved space for future upgrades.
    pub _reserved: [u8; 16],
}

impl Config {
    pub const SEED: &'static [u8] = b"config";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        32 + // authority
            1 +  // pause_draws
            2 +  // sales_prize_bps
            1 +  // superball_trigger_streak
            8 +  // started_at
            1 +  // bump
            16;  // reserved

    pub fn is_draws_paused(&self) -> bool {
        self.pause_draws != 0
    }

    pub fn engine_params(&self) -> EngineParams {
        EngineParams {
            sales_prize_bps: self.sales_prize_bps,
            superball_trigger_streak: self.superball_trigger_streak,
        }
    }
}
