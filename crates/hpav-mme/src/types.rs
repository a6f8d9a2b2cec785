//! Value types shared between requests, replies and derived statistics.

use std::fmt;
use std::str::FromStr;

use crate::constants::*;
use crate::error::MmeError;

// ============================================================================
// Addressing
// ============================================================================

/// A 6-byte Ethernet MAC address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MacAddr(pub [u8; MAC_SIZE]);

impl MacAddr {
    /// All-zero address. Devices accept it as the source of a request, so
    /// callers without a bound interface address can send from it.
    pub const ZERO: MacAddr = MacAddr([0; MAC_SIZE]);

    /// Fixed management address every request is sent to.
    pub const MANAGEMENT: MacAddr = MacAddr(MGMT_MAC);

    /// Create from raw bytes.
    pub fn new(bytes: [u8; MAC_SIZE]) -> Self {
        MacAddr(bytes)
    }

    /// Create from a byte slice. Returns `None` if the slice is not exactly
    /// 6 bytes.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() != MAC_SIZE {
            return None;
        }
        let mut bytes = [0u8; MAC_SIZE];
        bytes.copy_from_slice(slice);
        Some(MacAddr(bytes))
    }

    /// Raw bytes of the address.
    pub fn as_bytes(&self) -> &[u8; MAC_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for MacAddr {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

impl FromStr for MacAddr {
    type Err = MmeError;

    /// Parse the usual colon-separated hex form, e.g. `00:1f:84:a2:5c:01`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; MAC_SIZE];
        let mut parts = s.split(':');
        for byte in bytes.iter_mut() {
            let part = parts
                .next()
                .filter(|p| p.len() == 2)
                .ok_or_else(|| MmeError::InvalidAddress(s.to_string()))?;
            *byte = u8::from_str_radix(part, 16)
                .map_err(|_| MmeError::InvalidAddress(s.to_string()))?;
        }
        if parts.next().is_some() {
            return Err(MmeError::InvalidAddress(s.to_string()));
        }
        Ok(MacAddr(bytes))
    }
}

// ============================================================================
// Error statistics selectors
// ============================================================================

/// Which side of the link an error statistics request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Transmit counters only.
    Tx,
    /// Receive counters only.
    Rx,
    /// Both counter blocks, transmit first.
    Both,
}

impl Direction {
    /// Decode a wire direction byte. Returns `None` for codes with no
    /// defined counter layout.
    pub fn from_raw(value: u8) -> Option<Direction> {
        match value {
            DIRECTION_TX => Some(Direction::Tx),
            DIRECTION_RX => Some(Direction::Rx),
            DIRECTION_BOTH => Some(Direction::Both),
            _ => None,
        }
    }
}

impl From<Direction> for u8 {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Tx => DIRECTION_TX,
            Direction::Rx => DIRECTION_RX,
            Direction::Both => DIRECTION_BOTH,
        }
    }
}

/// Which link of a station pair an error statistics request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinkId {
    /// CSMA link at channel access priority 0.
    CsmaCap0,
    /// CSMA link at channel access priority 1.
    CsmaCap1,
    /// CSMA link at channel access priority 2.
    CsmaCap2,
    /// CSMA link at channel access priority 3.
    CsmaCap3,
    /// Sum over all CSMA links with the addressed station.
    CsmaSum,
    /// Sum over all CSMA links with any station.
    CsmaSumAny,
    /// A code outside the named set, passed through unchanged.
    Other(u8),
}

impl From<u8> for LinkId {
    fn from(value: u8) -> Self {
        match value {
            LINK_ID_CSMA_CAP_0 => LinkId::CsmaCap0,
            LINK_ID_CSMA_CAP_1 => LinkId::CsmaCap1,
            LINK_ID_CSMA_CAP_2 => LinkId::CsmaCap2,
            LINK_ID_CSMA_CAP_3 => LinkId::CsmaCap3,
            LINK_ID_CSMA_SUM => LinkId::CsmaSum,
            LINK_ID_CSMA_SUM_ANY => LinkId::CsmaSumAny,
            other => LinkId::Other(other),
        }
    }
}

impl From<LinkId> for u8 {
    fn from(value: LinkId) -> Self {
        match value {
            LinkId::CsmaCap0 => LINK_ID_CSMA_CAP_0,
            LinkId::CsmaCap1 => LINK_ID_CSMA_CAP_1,
            LinkId::CsmaCap2 => LINK_ID_CSMA_CAP_2,
            LinkId::CsmaCap3 => LINK_ID_CSMA_CAP_3,
            LinkId::CsmaSum => LINK_ID_CSMA_SUM,
            LinkId::CsmaSumAny => LINK_ID_CSMA_SUM_ANY,
            LinkId::Other(raw) => raw,
        }
    }
}

// ============================================================================
// Tone maps
// ============================================================================

/// Modulation assigned to one OFDM carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Modulation {
    /// Carrier disabled or unusable.
    None,
    Bpsk,
    Qpsk,
    Qam8,
    Qam16,
    Qam64,
    Qam256,
    Qam1024,
    /// Reserved code; carries no data.
    Reserved(u8),
}

impl Modulation {
    /// Decode a 4-bit tone map code.
    pub fn from_nibble(nibble: u8) -> Modulation {
        match nibble & 0x0F {
            MOD_NONE => Modulation::None,
            MOD_BPSK => Modulation::Bpsk,
            MOD_QPSK => Modulation::Qpsk,
            MOD_QAM_8 => Modulation::Qam8,
            MOD_QAM_16 => Modulation::Qam16,
            MOD_QAM_64 => Modulation::Qam64,
            MOD_QAM_256 => Modulation::Qam256,
            MOD_QAM_1024 => Modulation::Qam1024,
            other => Modulation::Reserved(other),
        }
    }

    /// Bits this modulation carries per OFDM symbol.
    pub fn bits_per_carrier(&self) -> u32 {
        match self {
            Modulation::None => 0,
            Modulation::Bpsk => 1,
            Modulation::Qpsk => 2,
            Modulation::Qam8 => 3,
            Modulation::Qam16 => 4,
            Modulation::Qam64 => 6,
            Modulation::Qam256 => 8,
            Modulation::Qam1024 => 10,
            Modulation::Reserved(_) => 0,
        }
    }
}

impl From<Modulation> for u8 {
    fn from(value: Modulation) -> Self {
        match value {
            Modulation::None => MOD_NONE,
            Modulation::Bpsk => MOD_BPSK,
            Modulation::Qpsk => MOD_QPSK,
            Modulation::Qam8 => MOD_QAM_8,
            Modulation::Qam16 => MOD_QAM_16,
            Modulation::Qam64 => MOD_QAM_64,
            Modulation::Qam256 => MOD_QAM_256,
            Modulation::Qam1024 => MOD_QAM_1024,
            Modulation::Reserved(raw) => raw,
        }
    }
}

/// One tone map byte: the modulation of an even-numbered carrier in the low
/// nibble and of the following odd-numbered carrier in the high nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarrierPair {
    /// Modulation of the even-numbered carrier.
    pub low: Modulation,
    /// Modulation of the odd-numbered carrier.
    pub high: Modulation,
}

impl CarrierPair {
    /// Split a raw tone map byte into its two modulations.
    pub fn from_byte(byte: u8) -> CarrierPair {
        CarrierPair {
            low: Modulation::from_nibble(byte & 0x0F),
            high: Modulation::from_nibble(byte >> 4),
        }
    }
}

/// Status byte of a tone map reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ToneMapStatus {
    /// Reply carries a tone map.
    Success,
    /// Requested MAC is not a known PLC neighbour.
    UnknownMac,
    /// Requested slot has no negotiated tone map.
    UnknownSlot,
    /// Status code outside the documented set.
    Unknown(u8),
}

impl From<u8> for ToneMapStatus {
    fn from(value: u8) -> Self {
        match value {
            TONE_MAP_STATUS_SUCCESS => ToneMapStatus::Success,
            TONE_MAP_STATUS_UNKNOWN_MAC => ToneMapStatus::UnknownMac,
            TONE_MAP_STATUS_UNKNOWN_SLOT => ToneMapStatus::UnknownSlot,
            other => ToneMapStatus::Unknown(other),
        }
    }
}

impl fmt::Display for ToneMapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToneMapStatus::Success => write!(f, "success"),
            ToneMapStatus::UnknownMac => write!(f, "unknown MAC address"),
            ToneMapStatus::UnknownSlot => write!(f, "unknown tone map slot"),
            ToneMapStatus::Unknown(code) => write!(f, "unknown status 0x{:02X}", code),
        }
    }
}

// ============================================================================
// Error statistics counters
// ============================================================================

/// Status byte of an error statistics reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorStatsStatus {
    /// Reply carries counters.
    Success,
    /// Control byte was not a valid command.
    InvalidControl,
    /// Direction byte was not TX, RX or BOTH.
    InvalidDirection,
    /// Link id does not name a known link.
    InvalidLinkId,
    /// Requested MAC is not a known PLC neighbour.
    InvalidMac,
    /// Status code outside the documented set.
    Unknown(u8),
}

impl From<u8> for ErrorStatsStatus {
    fn from(value: u8) -> Self {
        match value {
            ERROR_STATS_STATUS_SUCCESS => ErrorStatsStatus::Success,
            ERROR_STATS_STATUS_INVALID_CONTROL => ErrorStatsStatus::InvalidControl,
            ERROR_STATS_STATUS_INVALID_DIRECTION => ErrorStatsStatus::InvalidDirection,
            ERROR_STATS_STATUS_INVALID_LINK_ID => ErrorStatsStatus::InvalidLinkId,
            ERROR_STATS_STATUS_INVALID_MAC => ErrorStatsStatus::InvalidMac,
            other => ErrorStatsStatus::Unknown(other),
        }
    }
}

impl fmt::Display for ErrorStatsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorStatsStatus::Success => write!(f, "success"),
            ErrorStatsStatus::InvalidControl => write!(f, "invalid control"),
            ErrorStatsStatus::InvalidDirection => write!(f, "invalid direction"),
            ErrorStatsStatus::InvalidLinkId => write!(f, "invalid link id"),
            ErrorStatsStatus::InvalidMac => write!(f, "invalid MAC address"),
            ErrorStatsStatus::Unknown(code) => write!(f, "unknown status 0x{:02X}", code),
        }
    }
}

/// Transmit-side link counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TxLinkStats {
    /// MPDUs transmitted and acknowledged.
    pub mpdu_acked: u64,
    /// MPDUs lost to collisions.
    pub mpdu_collisions: u64,
    /// MPDUs that failed for any other reason.
    pub mpdu_failed: u64,
    /// PHY blocks delivered intact.
    pub pb_passed: u64,
    /// PHY blocks that failed the FEC check.
    pub pb_failed: u64,
}

/// Receive-side link counters plus per-interval breakdowns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RxLinkStats {
    /// MPDUs received and acknowledged.
    pub mpdu_acked: u64,
    /// MPDUs received in error.
    pub mpdu_failed: u64,
    /// PHY blocks received intact.
    pub pb_passed: u64,
    /// PHY blocks that failed the FEC check.
    pub pb_failed: u64,
    /// Turbo bit errors over successfully decoded blocks.
    pub tbe_passed: u64,
    /// Turbo bit errors over failed blocks.
    pub tbe_failed: u64,
    /// One record per receive interval the device reports.
    pub intervals: Vec<RxIntervalStats>,
}

/// Receive counters for one interval, with the PHY rate in effect during it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RxIntervalStats {
    /// Average PHY rate of the interval in Mbit/s.
    pub phy_rate: u8,
    /// PHY blocks received intact.
    pub pb_passed: u64,
    /// PHY blocks that failed the FEC check.
    pub pb_failed: u64,
    /// Turbo bit errors over successfully decoded blocks.
    pub tbe_passed: u64,
    /// Turbo bit errors over failed blocks.
    pub tbe_failed: u64,
}

// ============================================================================
// Sniffer frames
// ============================================================================

/// Classification of a sniffed MPDU, from the delimiter type bits of its
/// frame control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DelimiterType {
    /// Beacon frame; timing comes from the beacon block instead.
    Beacon,
    /// Start-of-frame, carrying data or management traffic.
    DataOrManagement,
    /// Selective acknowledgement.
    Ack,
    /// RTS or CTS frame.
    RtsCts,
    /// Sound frame for channel estimation.
    Sounding,
    /// Delimiter code outside the documented set.
    Unknown(u8),
}

impl From<u8> for DelimiterType {
    fn from(value: u8) -> Self {
        match value {
            DELIMITER_BEACON => DelimiterType::Beacon,
            DELIMITER_SOF => DelimiterType::DataOrManagement,
            DELIMITER_SACK => DelimiterType::Ack,
            DELIMITER_RTS_CTS => DelimiterType::RtsCts,
            DELIMITER_SOUND => DelimiterType::Sounding,
            other => DelimiterType::Unknown(other),
        }
    }
}

impl fmt::Display for DelimiterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelimiterType::Beacon => write!(f, "beacon"),
            DelimiterType::DataOrManagement => write!(f, "data/management"),
            DelimiterType::Ack => write!(f, "ACK"),
            DelimiterType::RtsCts => write!(f, "RTS/CTS"),
            DelimiterType::Sounding => write!(f, "sounding"),
            DelimiterType::Unknown(code) => write!(f, "unknown delimiter 0x{:02X}", code),
        }
    }
}

/// Fields extracted from the 16-byte frame control block of a sniffed MPDU.
///
/// The block is bit-packed least-significant-bit first; fields the monitor
/// has no use for (key select, pending blocks beyond the count, frame check
/// sequence) are consumed but not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameControl {
    /// Raw 3-bit delimiter type.
    pub delimiter: u8,
    /// Contention-free access flag.
    pub access: bool,
    /// Short network id of the sending AV logical network.
    pub snid: u8,
    /// Terminal equipment id of the transmitter.
    pub source_tei: u8,
    /// Terminal equipment id of the receiver.
    pub dest_tei: u8,
    /// Link id (traffic priority) of the MPDU.
    pub link_id: u8,
    /// PHY blocks still queued behind this MPDU.
    pub pending_blocks: u8,
    /// Raw bit loading estimate byte, mantissa and exponent packed.
    pub bit_loading_raw: u8,
    /// Short PHY block size flag.
    pub pb_size: bool,
    /// Number-of-symbols field.
    pub symbol_count: u8,
    /// Tone map index the MPDU was modulated with.
    pub tone_map_index: u8,
    /// Raw 12-bit frame length in units of 1.28 microseconds.
    pub frame_length_raw: u16,
    /// Position of this MPDU within its burst.
    pub mpdu_count: u8,
    /// Burst count field.
    pub burst_count: u8,
}

impl FrameControl {
    /// Classification of the sniffed MPDU.
    pub fn delimiter_type(&self) -> DelimiterType {
        DelimiterType::from(self.delimiter)
    }
}

/// Fields extracted from the 16-byte beacon block of a sniffer indication.
///
/// Only meaningful when the accompanying frame control classifies the MPDU
/// as a beacon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeaconInfo {
    /// Raw 3-bit delimiter type.
    pub delimiter: u8,
    /// Contention-free access flag.
    pub access: bool,
    /// Short network id of the beaconing AV logical network.
    pub snid: u8,
    /// Beacon timestamp in network time base ticks.
    pub timestamp: u32,
    /// Beacon transmission offsets for the four beacon regions.
    pub tx_offsets: [u16; 4],
}

// ============================================================================
// Network statistics
// ============================================================================

/// One station entry of a network statistics reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StationInfo {
    /// MAC address of the station.
    pub mac: MacAddr,
    /// Average PHY rate towards the station in Mbit/s.
    pub avg_phy_rate_tx: u8,
    /// Average PHY rate from the station in Mbit/s.
    pub avg_phy_rate_rx: u8,
}
