pub mod carryover;
pub mod distribution;
pub mod matches;
pub mod money;
pub mod superball;
