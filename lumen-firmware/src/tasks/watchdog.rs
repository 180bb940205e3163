//! Hardware watchdog task
//!
//! Feeds the RP2040 watchdog from its own task. If any task hogs the
//! executor for longer than the timeout, feeding stops and the chip resets.

use defmt::*;
use embassy_rp::watchdog::Watchdog;
use embassy_time::{Duration, Timer};

/// Reset if not fed within this period
const WATCHDOG_TIMEOUT: Duration = Duration::from_secs(1);

/// Feed interval, well inside the timeout
const FEED_INTERVAL: Duration = Duration::from_millis(250);

#[embassy_executor::task]
pub async fn watchdog_task(mut watchdog: Watchdog) {
    watchdog.start(WATCHDOG_TIMEOUT);
    info!("Watchdog started ({} ms)", WATCHDOG_TIMEOUT.as_millis());

    loop {
        watchdog.feed();
        Timer::after(FEED_INTERVAL).await;
    }
}
