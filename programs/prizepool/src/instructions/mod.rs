pub mod config_update;
pub mod draw_finalize;
pub mod draw_open;
pub mod draw_report_winners;
pub mod draw_reset_tally;
pub mod draw_tally;
pub mod initialize;
pub mod superball_open;
pub mod superball_settle;
pub mod superball_tally;

pub use config_update::*;
pub use draw_finalize::*;
pub use draw_open::*;
pub use draw_report_winners::*;
pub use draw_reset_tally::*;
pub use draw_tally::*;
pub use initialize::*;
pub use superball_open::*;
pub use superball_settle::*;
pub use superball_tally::*;
