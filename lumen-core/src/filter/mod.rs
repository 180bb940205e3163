//! Reading smoothing

pub mod averager;

pub use averager::{DistanceAverager, WINDOW_SIZE};
