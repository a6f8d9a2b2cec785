//! Classification and timing of passively sniffed PLC frames.

use hpav_mme::{DelimiterType, FrameControl, SnifferIndicate};

/// Microseconds per unit of the frame control's frame length field.
const FRAME_LENGTH_UNIT_US: f64 = 1.28;

/// Frame duration in microseconds, from the raw 12-bit frame length.
pub fn frame_duration_us(fc: &FrameControl) -> f64 {
    fc.frame_length_raw as f64 * FRAME_LENGTH_UNIT_US
}

/// Bits-per-carrier estimate encoded in a raw BLE byte.
///
/// The byte packs a 5-bit mantissa over a 3-bit exponent; the estimate is
/// `(32 + mantissa) * 2^(exponent - 4) + 2^(exponent - 5)`. The shifted
/// exponents go negative for small values, so the powers are computed in
/// floating point on signed exponents.
pub fn bit_loading_estimate(ble: u8) -> f64 {
    let mantissa = (ble >> 3) as f64;
    let exponent = (ble & 0x07) as i32;
    (32.0 + mantissa) * 2f64.powi(exponent - 4) + 2f64.powi(exponent - 5)
}

/// Monitoring summary of one sniffed frame.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnifferSummary {
    /// Frame classification.
    pub kind: DelimiterType,
    /// Terminal equipment id of the transmitter.
    pub source_tei: u8,
    /// Terminal equipment id of the receiver.
    pub dest_tei: u8,
    /// Link id (traffic priority) of the MPDU.
    pub link_id: u8,
    /// Position of the MPDU within its burst.
    pub mpdu_count: u8,
    /// Frame duration in microseconds. Data and management frames only.
    pub duration_us: Option<f64>,
    /// Bits-per-carrier estimate of the link. Data and management frames
    /// only.
    pub bit_loading: Option<f64>,
}

/// Summarize a sniffer indication for monitoring.
///
/// Duration and bit loading are only defined for data and management
/// frames; for every other delimiter type the classification itself is the
/// useful part.
pub fn summarize(indication: &SnifferIndicate) -> SnifferSummary {
    let fc = &indication.frame_control;
    let kind = fc.delimiter_type();
    let (duration_us, bit_loading) = match kind {
        DelimiterType::DataOrManagement => (
            Some(frame_duration_us(fc)),
            Some(bit_loading_estimate(fc.bit_loading_raw)),
        ),
        _ => (None, None),
    };
    SnifferSummary {
        kind,
        source_tei: fc.source_tei,
        dest_tei: fc.dest_tei,
        link_id: fc.link_id,
        mpdu_count: fc.mpdu_count,
        duration_us,
        bit_loading,
    }
}
