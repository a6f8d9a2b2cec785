//! PHY rate and frequency response derived from tone maps.
//!
//! A tone map assigns a modulation to every active OFDM carrier of a link.
//! Summing the bits each carrier contributes per symbol gives the raw
//! symbol capacity; dividing by the symbol duration and applying the FEC
//! rate gives the PHY rate. Averaging the bits over fixed 40-carrier bands
//! gives a coarse frequency response of the powerline channel.

use hpav_mme::{ToneMapReply, ToneMapStatus};
use thiserror::Error;

/// Frequency bands in the modulation histogram.
pub const FREQ_BANDS: usize = 23;

/// Carriers averaged into one band.
pub const CARRIERS_PER_BAND: usize = 40;

/// OFDM symbol duration in microseconds.
const SYMBOL_DURATION_US: f64 = 40.96;

/// Guard interval between symbols in microseconds.
const GUARD_INTERVAL_US: f64 = 5.56;

/// FEC code rate applied to the raw symbol capacity.
const FEC_RATE: f64 = 16.0 / 21.0;

/// Errors raised while deriving statistics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// The reply reported a failure status, so there is no tone map to
    /// analyze.
    #[error("tone map reply reported {0}")]
    NoToneMap(ToneMapStatus),
}

/// PHY rate and per-band modulation density of one tone map.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToneMapStatistics {
    /// Estimated PHY rate in Mbit/s.
    pub phy_rate_mbps: f64,
    /// Bits carried per OFDM symbol across all carriers.
    pub total_bits: u32,
    /// Carrier positions covered by the tone map, two per carrier pair.
    pub carrier_positions: usize,
    /// Average bits per carrier in each 40-carrier band. The last band
    /// absorbs every position past the 22 full bands and is zero when the
    /// tone map does not reach it.
    pub histogram: [f64; FREQ_BANDS],
}

impl ToneMapStatistics {
    /// Derive statistics from a successfully decoded tone map reply.
    pub fn from_reply(reply: &ToneMapReply) -> Result<ToneMapStatistics, StatsError> {
        if reply.status != ToneMapStatus::Success {
            return Err(StatsError::NoToneMap(reply.status));
        }

        let mut histogram = [0f64; FREQ_BANDS];
        let mut total_bits: u32 = 0;
        let carrier_positions = reply.carriers.len() * 2;

        for (index, pair) in reply.carriers.iter().enumerate() {
            let low = pair.low.bits_per_carrier();
            let high = pair.high.bits_per_carrier();
            total_bits += low + high;
            let position = index * 2;
            histogram[band_for(position)] += low as f64;
            histogram[band_for(position + 1)] += high as f64;
        }

        for band in histogram.iter_mut().take(FREQ_BANDS - 1) {
            *band /= CARRIERS_PER_BAND as f64;
        }
        // The tail band averages over however many positions actually fell
        // into it; an empty tail stays at zero.
        let tail_positions = carrier_positions.saturating_sub((FREQ_BANDS - 1) * CARRIERS_PER_BAND);
        if tail_positions > 0 {
            histogram[FREQ_BANDS - 1] /= tail_positions as f64;
        }

        let phy_rate_mbps =
            FEC_RATE * total_bits as f64 / (SYMBOL_DURATION_US + GUARD_INTERVAL_US);

        Ok(ToneMapStatistics {
            phy_rate_mbps,
            total_bits,
            carrier_positions,
            histogram,
        })
    }
}

/// Histogram band for a carrier position. Positions past the last full band
/// are clamped into the final one.
fn band_for(position: usize) -> usize {
    (position / CARRIERS_PER_BAND).min(FREQ_BANDS - 1)
}
