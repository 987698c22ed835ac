pub mod categories;
pub mod config;
pub mod draw_ledger;
pub mod draw_record;
pub mod numbers;
pub mod superball_draw;
pub mod tickets;

pub use categories::*;
pub use config::*;
pub use draw_ledger::*;
pub use draw_record::*;
pub use numbers::*;
pub use superball_draw::*;
pub use tickets::*;
