use anchor_lang::prelude::*;

#[error_code]
pub enum PrizePoolErrorCode {
    // ─────────────────────────────
    // General / Access Control
    // ─────────────────────────────
    #[msg("Unauthorized")]
    Unauthorized,

    InvalidAuthorityTarget,

    #[msg("Invalid config")]
    InvalidConfig,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Draws paused")]
    DrawsPaused,

    // ─────────────────────────────
    // Draw lifecycle
    // ─────────────────────────────
    DrawDateMismatch,

    #[msg("Draw date must follow the last finalized draw")]
    DrawOutOfOrder,

    #[msg("Another draw is still in flight")]
    DrawInFlight,

    DrawNotTallying,

    #[msg("Draw not finalized")]
    DrawNotFinalized,

    BatchOutOfOrder,

    #[msg("Ticket ids must strictly increase across batches")]
    TicketOutOfOrder,

    #[msg("Too many tickets in batch")]
    TooManyTickets,

    // ─────────────────────────────
    // Numbers / tickets
    // ─────────────────────────────
    #[msg("Invalid winning numbers")]
    InvalidWinningNumbers,

    #[msg("Invalid ticket selection")]
    InvalidSelection,

    // ─────────────────────────────
    // Distribution / carryover
    // ─────────────────────────────
    DistributionExceedsPool,
    InvalidCarryOver,

    // ─────────────────────────────
    // Superball
    // ─────────────────────────────
    #[msg("No active Superball jackpot")]
    NoActiveJackpot,

    #[msg("Superball already awarded")]
    SuperballAlreadyAwarded,

    SuperballDrawBeforeTrigger,

    #[msg("Invalid Superball number")]
    InvalidSuperballNumber,

    #[msg("Invalid Superball ticket")]
    InvalidSuperballTicket,
}
