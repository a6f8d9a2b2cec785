//! # hpav-stats
//!
//! Link statistics derived from decoded HomePlug AV management messages:
//!
//! - **Tone maps**: PHY rate estimate and a per-band modulation histogram,
//!   via [`ToneMapStatistics::from_reply`]
//! - **Sniffed frames**: classification, frame duration and bit loading,
//!   via [`summarize`]
//!
//! The raw message decoding lives in the `hpav-mme` crate; this one only
//! turns decoded replies into numbers worth charting.

mod sniffer;
mod tonemap;

pub use sniffer::{bit_loading_estimate, frame_duration_us, summarize, SnifferSummary};
pub use tonemap::{StatsError, ToneMapStatistics, CARRIERS_PER_BAND, FREQ_BANDS};
