//! Configuration section definitions.
//!
//! | Section   | Purpose                               |
//! |-----------|---------------------------------------|
//! | `[clock]` | Template, tick interval, line clearing |
//! | `[pick]`  | Output and input-format defaults      |

mod clock;
mod pick;

pub use clock::ClockConfig;
pub use pick::{InputFormat, PickConfig};
