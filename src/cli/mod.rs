//! Command-line interface module.

mod args;
pub mod clock;
pub mod pick;

pub use args::{Cli, ClockArgs, Commands, PickArgs};
