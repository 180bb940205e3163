//! Embassy async tasks

pub mod link;
pub mod watchdog;

pub use link::link_task;
pub use watchdog::watchdog_task;
