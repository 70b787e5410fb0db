//! Output analysis
//!
//! Inspects rendered frames before they are sent to hardware.
//! Currently includes:
//! - Power estimate (approximate current draw)

mod power;

pub use power::PowerEstimator;
