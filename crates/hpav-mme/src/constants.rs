//! Protocol constants for HomePlug AV management messaging.

// ============================================================================
// Framing
// ============================================================================

/// EtherType carried by every HPAV management frame.
pub const ETHERTYPE_HPAV: u16 = 0x88E1;

/// Bytes in an Ethernet header (two MACs plus the EtherType).
pub const ETHER_HEADER_SIZE: usize = 14;

/// Bytes in the HPAV management header (version plus MMType).
pub const HPAV_HEADER_SIZE: usize = 3;

/// Bytes before the message payload starts.
pub const FRAME_HEADER_SIZE: usize = ETHER_HEADER_SIZE + HPAV_HEADER_SIZE;

/// Bytes in a MAC address.
pub const MAC_SIZE: usize = 6;

/// Bytes in a vendor OUI.
pub const OUI_SIZE: usize = 3;

/// OUI prefixing the payload of every vendor-specific message.
pub const HPAV_OUI: [u8; OUI_SIZE] = [0x00, 0xB0, 0x52];

/// Fixed destination address for management requests; devices answer
/// regardless of their own MAC.
pub const MGMT_MAC: [u8; MAC_SIZE] = [0x00, 0xB0, 0x52, 0x00, 0x00, 0x01];

/// Management message version byte for HomePlug AV 1.0 (vendor messages).
pub const MMV_AV_1_0: u8 = 0x00;

/// Management message version byte for HomePlug AV 1.1 (standard messages).
pub const MMV_AV_1_1: u8 = 0x01;

// ============================================================================
// Message types
// ============================================================================
//
// Standard HomePlug messages carry 0x60 in the low code byte, vendor-specific
// messages carry 0xA0. A reply code is always its request code plus 0x0100.

/// Network statistics request (standard).
pub const MMTYPE_NW_STATS_REQ: u16 = 0x4860;

/// Network statistics reply (standard).
pub const MMTYPE_NW_STATS_REP: u16 = 0x4960;

/// Tone map request (vendor).
pub const MMTYPE_TONE_MAP_REQ: u16 = 0x70A0;

/// Tone map reply (vendor).
pub const MMTYPE_TONE_MAP_REP: u16 = 0x71A0;

/// Link error statistics request (vendor).
pub const MMTYPE_ERROR_STATS_REQ: u16 = 0x30A0;

/// Link error statistics reply (vendor).
pub const MMTYPE_ERROR_STATS_REP: u16 = 0x31A0;

/// Sniffer mode control request (vendor).
pub const MMTYPE_SNIFFER_REQ: u16 = 0x34A0;

/// Unsolicited sniffer indication (vendor).
pub const MMTYPE_SNIFFER_IND: u16 = 0x36A0;

// ============================================================================
// Tone maps
// ============================================================================

/// Tone map slots maintained per link.
pub const NUM_TONE_MAP_SLOTS: u8 = 6;

/// Carriers in the HPAV OFDM band.
pub const MAX_CARRIERS: usize = 1155;

/// Bits per symbol on a carrier at the densest modulation (QAM-1024).
pub const MAX_BITS_PER_CARRIER: u32 = 10;

/// Tone map request served.
pub const TONE_MAP_STATUS_SUCCESS: u8 = 0x00;

/// Requested MAC is not a known PLC neighbour.
pub const TONE_MAP_STATUS_UNKNOWN_MAC: u8 = 0x01;

/// Requested slot has no negotiated tone map.
pub const TONE_MAP_STATUS_UNKNOWN_SLOT: u8 = 0x02;

// ============================================================================
// Carrier modulations
// ============================================================================

/// Carrier disabled or unusable.
pub const MOD_NONE: u8 = 0x0;

/// Binary phase shift keying, 1 bit per symbol.
pub const MOD_BPSK: u8 = 0x1;

/// Quadrature phase shift keying, 2 bits per symbol.
pub const MOD_QPSK: u8 = 0x2;

/// 8-QAM, 3 bits per symbol.
pub const MOD_QAM_8: u8 = 0x3;

/// 16-QAM, 4 bits per symbol.
pub const MOD_QAM_16: u8 = 0x4;

/// 64-QAM, 6 bits per symbol.
pub const MOD_QAM_64: u8 = 0x5;

/// 256-QAM, 8 bits per symbol.
pub const MOD_QAM_256: u8 = 0x6;

/// 1024-QAM, 10 bits per symbol.
pub const MOD_QAM_1024: u8 = 0x7;

// ============================================================================
// Error statistics
// ============================================================================

/// Counters for the transmit side of the link.
pub const DIRECTION_TX: u8 = 0x00;

/// Counters for the receive side of the link.
pub const DIRECTION_RX: u8 = 0x01;

/// Transmit and receive counters in one reply.
pub const DIRECTION_BOTH: u8 = 0x02;

/// CSMA channel access priority 0 link.
pub const LINK_ID_CSMA_CAP_0: u8 = 0x00;

/// CSMA channel access priority 1 link.
pub const LINK_ID_CSMA_CAP_1: u8 = 0x01;

/// CSMA channel access priority 2 link.
pub const LINK_ID_CSMA_CAP_2: u8 = 0x02;

/// CSMA channel access priority 3 link.
pub const LINK_ID_CSMA_CAP_3: u8 = 0x03;

/// Sum of all CSMA links with the addressed station.
pub const LINK_ID_CSMA_SUM: u8 = 0xF8;

/// Sum of all CSMA links with any station.
pub const LINK_ID_CSMA_SUM_ANY: u8 = 0xFC;

/// Error statistics request served.
pub const ERROR_STATS_STATUS_SUCCESS: u8 = 0x00;

/// Control byte was not a valid command.
pub const ERROR_STATS_STATUS_INVALID_CONTROL: u8 = 0x01;

/// Direction byte was not TX, RX or BOTH.
pub const ERROR_STATS_STATUS_INVALID_DIRECTION: u8 = 0x02;

/// Link id does not name a known link.
pub const ERROR_STATS_STATUS_INVALID_LINK_ID: u8 = 0x10;

/// Requested MAC is not a known PLC neighbour.
pub const ERROR_STATS_STATUS_INVALID_MAC: u8 = 0x20;

/// Bytes in the transmit counter block.
pub const TX_STATS_SIZE: usize = 40;

/// Bytes in the fixed part of the receive counter block, before the
/// per-interval records.
pub const RX_STATS_FIXED_SIZE: usize = 49;

/// Bytes in one receive interval record.
pub const RX_INTERVAL_SIZE: usize = 33;

// ============================================================================
// Sniffer
// ============================================================================

/// Control byte turning sniffer mode off.
pub const SNIFFER_CONTROL_DISABLE: u8 = 0x00;

/// Control byte turning sniffer mode on.
pub const SNIFFER_CONTROL_ENABLE: u8 = 0x01;

/// Bytes in a sniffer indication payload.
pub const SNIFFER_IND_SIZE: usize = 49;

/// Bytes in an MPDU frame control block.
pub const FRAME_CONTROL_SIZE: usize = 16;

/// Bytes in a beacon block.
pub const BEACON_SIZE: usize = 16;

/// Beacon delimiter.
pub const DELIMITER_BEACON: u8 = 0x00;

/// Start-of-frame delimiter (data or management MPDU).
pub const DELIMITER_SOF: u8 = 0x01;

/// Selective acknowledgement delimiter.
pub const DELIMITER_SACK: u8 = 0x02;

/// RTS/CTS delimiter.
pub const DELIMITER_RTS_CTS: u8 = 0x03;

/// Sound delimiter, used for channel estimation.
pub const DELIMITER_SOUND: u8 = 0x04;

// ============================================================================
// Network statistics
// ============================================================================

/// Bytes in one per-station record of a network statistics reply.
pub const STATION_RECORD_SIZE: usize = 8;
