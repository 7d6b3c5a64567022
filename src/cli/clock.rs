//! Clock command implementation.

use anyhow::Result;
use crossbeam::channel::Receiver;

use crate::cli::ClockArgs;
use crate::clock::{Ticker, clock_pipeline, current_time, display, shutdown_channel};
use crate::config::Config;
use crate::debug;
use crate::logger::ClockLine;

/// Execute clock command
pub fn run_clock(args: &ClockArgs, config: &Config) -> Result<()> {
    let shutdown = shutdown_channel()?;
    let ticker = Ticker::new(config.clock.interval()).with_limit(args.count);
    debug!(
        "clock";
        "template `{}`, every {:?}",
        config.clock.template,
        ticker.interval()
    );

    let line = ClockLine::new(config.clock.clear);
    let fired = tick_clock(&ticker, &shutdown, config, line);
    debug!("clock"; "stopped after {} ticks", fired);
    Ok(())
}

/// Render the current time on every tick until the ticker stops.
fn tick_clock(
    ticker: &Ticker,
    shutdown: &Receiver<()>,
    config: &Config,
    mut line: ClockLine,
) -> u64 {
    let render = clock_pipeline(&config.clock.template);
    let mut show = display(|time: &str| line.show(time));
    ticker.run(shutdown, || show(render(current_time())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crossbeam::channel;
    use std::time::Duration;

    #[test]
    fn test_tick_clock_respects_count() {
        let (_tx, rx) = channel::bounded::<()>(1);
        let content = "[clock]\ntemplate = \"tt\"\ninterval_ms = 1\nclear = false";
        let config = test_parse_config(content);
        let ticker = Ticker::new(config.clock.interval()).with_limit(Some(3));

        assert_eq!(tick_clock(&ticker, &rx, &config, ClockLine::new(false)), 3);
    }

    #[test]
    fn test_tick_clock_stops_on_shutdown() {
        let (tx, rx) = channel::bounded::<()>(1);
        tx.send(()).unwrap();
        let ticker = Ticker::new(Duration::from_secs(60));

        assert_eq!(
            tick_clock(&ticker, &rx, &Config::default(), ClockLine::new(false)),
            0
        );
    }
}
