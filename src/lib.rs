//! Pathpipe - dot-path lookup and left-to-right function composition.
//!
//! | Module     | Purpose                                           |
//! |------------|---------------------------------------------------|
//! | `node`     | Deep lookup of dot paths in JSON or TOML trees    |
//! | `pipeline` | `compose`, `compose!`, `Then`, `Chain`, `Pipeline`|
//! | `clock`    | Civilian clock built from composed steps          |
//! | `config`   | `pathpipe.toml` loading and validation            |
//! | `cli`      | `pick` and `clock` commands                       |
//! | `logger`   | Colored stderr logging and the clock display line |

pub mod cli;
pub mod clock;
pub mod config;
pub mod logger;
pub mod node;
pub mod pipeline;
