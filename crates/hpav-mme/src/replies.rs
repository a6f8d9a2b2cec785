//! Replies and indications received from powerline devices.

use crate::constants::*;
use crate::error::MmeError;
use crate::frame::{decode_header, FrameHeader};
use crate::types::{
    BeaconInfo, CarrierPair, Direction, ErrorStatsStatus, FrameControl, MacAddr, RxIntervalStats,
    RxLinkStats, StationInfo, ToneMapStatus, TxLinkStats,
};

/// Tone map for one slot of a PLC link.
///
/// `carriers` holds one entry per tone map byte, covering two carrier
/// positions each; it is empty unless `status` is
/// [`ToneMapStatus::Success`]. When `active_carriers` is odd the high
/// nibble of the last pair is padding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToneMapReply {
    /// Whether the device served the request.
    pub status: ToneMapStatus,
    /// Slot the tone map belongs to.
    pub slot: u8,
    /// Tone maps the device currently holds for the link.
    pub tone_map_count: u8,
    /// Carriers with a negotiated modulation.
    pub active_carriers: u16,
    /// Modulation pairs, two carriers per entry.
    pub carriers: Vec<CarrierPair>,
}

impl ToneMapReply {
    /// Decode a tone map reply payload (everything after the HPAV header).
    pub fn decode(payload: &[u8]) -> Result<ToneMapReply, MmeError> {
        if payload.len() < OUI_SIZE + 1 {
            return Err(MmeError::Truncated {
                expected: OUI_SIZE + 1,
                actual: payload.len(),
            });
        }
        let status = ToneMapStatus::from(payload[OUI_SIZE]);
        if status != ToneMapStatus::Success {
            // The remaining fields are undefined on failure.
            return Ok(ToneMapReply {
                status,
                slot: 0,
                tone_map_count: 0,
                active_carriers: 0,
                carriers: Vec::new(),
            });
        }
        if payload.len() < OUI_SIZE + 5 {
            return Err(MmeError::Truncated {
                expected: OUI_SIZE + 5,
                actual: payload.len(),
            });
        }
        let slot = payload[4];
        let tone_map_count = payload[5];
        let active_carriers = u16::from_le_bytes([payload[6], payload[7]]);
        let pairs = active_carriers as usize / 2 + (active_carriers as usize & 1);
        if payload.len() < OUI_SIZE + 5 + pairs {
            return Err(MmeError::Truncated {
                expected: OUI_SIZE + 5 + pairs,
                actual: payload.len(),
            });
        }
        let carriers = payload[8..8 + pairs]
            .iter()
            .map(|&byte| CarrierPair::from_byte(byte))
            .collect();
        Ok(ToneMapReply {
            status,
            slot,
            tone_map_count,
            active_carriers,
            carriers,
        })
    }
}

/// Direction-dependent counter payload of an error statistics reply.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinkStats {
    /// Transmit counters only.
    Tx(TxLinkStats),
    /// Receive counters only.
    Rx(RxLinkStats),
    /// Both counter blocks.
    Both {
        /// Transmit counters.
        tx: TxLinkStats,
        /// Receive counters.
        rx: RxLinkStats,
    },
}

/// Error and collision counters for one link.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorStatsReply {
    /// Whether the device served the request.
    pub status: ErrorStatsStatus,
    /// Direction byte echoed by the device.
    pub direction: u8,
    /// Link id the counters belong to.
    pub link_id: u8,
    /// Terminal equipment id of the addressed station.
    pub tei: u8,
    /// The counters themselves.
    pub stats: LinkStats,
}

impl ErrorStatsReply {
    /// Decode an error statistics reply payload, laying the counter block
    /// out according to the direction that was requested.
    ///
    /// The counters are parsed regardless of the reported status; a device
    /// that rejects a request still answers with a full-size reply.
    pub fn decode(payload: &[u8], direction: Direction) -> Result<ErrorStatsReply, MmeError> {
        if payload.len() < OUI_SIZE + 4 {
            return Err(MmeError::Truncated {
                expected: OUI_SIZE + 4,
                actual: payload.len(),
            });
        }
        let status = ErrorStatsStatus::from(payload[OUI_SIZE]);
        let echoed = payload[4];
        let link_id = payload[5];
        let tei = payload[6];
        let body = &payload[7..];
        let stats = match direction {
            Direction::Tx => LinkStats::Tx(decode_tx_stats(body)?),
            Direction::Rx => LinkStats::Rx(decode_rx_stats(body)?),
            Direction::Both => {
                let tx = decode_tx_stats(body)?;
                let rx = decode_rx_stats(&body[TX_STATS_SIZE..])?;
                LinkStats::Both { tx, rx }
            }
        };
        Ok(ErrorStatsReply {
            status,
            direction: echoed,
            link_id,
            tei,
            stats,
        })
    }
}

/// One PLC frame mirrored by a device in sniffer mode.
///
/// The frame control and beacon blocks are both always present on the wire;
/// the frame control's delimiter type says which one describes the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnifferIndicate {
    /// Sniffer record type.
    pub sniffer_type: u8,
    /// Direction the frame was seen in.
    pub direction: u8,
    /// Device system clock at capture time, in microseconds.
    pub system_time: u64,
    /// Beacon period counter at capture time.
    pub beacon_time: u32,
    /// Frame control block of the sniffed MPDU.
    pub frame_control: FrameControl,
    /// Beacon block of the sniffed MPDU.
    pub beacon: BeaconInfo,
}

impl SnifferIndicate {
    /// Decode a sniffer indication payload.
    pub fn decode(payload: &[u8]) -> Result<SnifferIndicate, MmeError> {
        if payload.len() < SNIFFER_IND_SIZE {
            return Err(MmeError::Truncated {
                expected: SNIFFER_IND_SIZE,
                actual: payload.len(),
            });
        }
        Ok(SnifferIndicate {
            sniffer_type: payload[3],
            direction: payload[4],
            system_time: read_u64_le(payload, 5),
            beacon_time: u32::from_le_bytes([payload[13], payload[14], payload[15], payload[16]]),
            frame_control: decode_frame_control(&payload[17..17 + FRAME_CONTROL_SIZE]),
            beacon: decode_beacon(&payload[33..33 + BEACON_SIZE]),
        })
    }
}

/// Average PHY rate table of every station the device knows.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkStatsReply {
    /// Fragmentation management information of the reply.
    pub fmi: u16,
    /// One entry per known station.
    pub stations: Vec<StationInfo>,
}

impl NetworkStatsReply {
    /// Decode a network statistics reply payload.
    ///
    /// This is a standard message, so the payload starts directly with the
    /// fragmentation field rather than a vendor OUI.
    pub fn decode(payload: &[u8]) -> Result<NetworkStatsReply, MmeError> {
        if payload.len() < 3 {
            return Err(MmeError::Truncated {
                expected: 3,
                actual: payload.len(),
            });
        }
        let fmi = u16::from_le_bytes([payload[0], payload[1]]);
        let count = payload[2] as usize;
        let needed = 3 + count * STATION_RECORD_SIZE;
        if payload.len() < needed {
            return Err(MmeError::Truncated {
                expected: needed,
                actual: payload.len(),
            });
        }
        let mut stations = Vec::with_capacity(count);
        for n in 0..count {
            let base = 3 + n * STATION_RECORD_SIZE;
            stations.push(StationInfo {
                mac: MacAddr::from_slice(&payload[base..base + MAC_SIZE]).unwrap(),
                avg_phy_rate_tx: payload[base + 6],
                avg_phy_rate_rx: payload[base + 7],
            });
        }
        Ok(NetworkStatsReply { fmi, stations })
    }
}

/// Any inbound management message this codec understands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reply {
    /// Tone map reply.
    ToneMap(ToneMapReply),
    /// Error statistics reply.
    ErrorStats(ErrorStatsReply),
    /// Unsolicited sniffer indication.
    SnifferIndicate(SnifferIndicate),
    /// Network statistics reply.
    NetworkStats(NetworkStatsReply),
}

impl Reply {
    /// Decode a reply payload according to its message type.
    ///
    /// Error statistics replies reached through this path take their counter
    /// layout from the direction byte the device echoes; when the requested
    /// direction is already known, [`ErrorStatsReply::decode`] skips that
    /// dependency on the wire.
    pub fn decode(mmtype: u16, payload: &[u8]) -> Result<Reply, MmeError> {
        match mmtype {
            MMTYPE_TONE_MAP_REP => Ok(Reply::ToneMap(ToneMapReply::decode(payload)?)),
            MMTYPE_ERROR_STATS_REP => {
                // The direction echo sits right after the OUI and status.
                if payload.len() < OUI_SIZE + 2 {
                    return Err(MmeError::Truncated {
                        expected: OUI_SIZE + 2,
                        actual: payload.len(),
                    });
                }
                let direction = Direction::from_raw(payload[4])
                    .ok_or(MmeError::UnknownDirection(payload[4]))?;
                Ok(Reply::ErrorStats(ErrorStatsReply::decode(
                    payload, direction,
                )?))
            }
            MMTYPE_SNIFFER_IND => Ok(Reply::SnifferIndicate(SnifferIndicate::decode(payload)?)),
            MMTYPE_NW_STATS_REP => Ok(Reply::NetworkStats(NetworkStatsReply::decode(payload)?)),
            other => {
                log::debug!("no decoder for MMType 0x{:04X}", other);
                Err(MmeError::UnknownMmType(other))
            }
        }
    }
}

/// Decode a complete Ethernet frame into its header and reply.
pub fn decode_frame(frame: &[u8]) -> Result<(FrameHeader, Reply), MmeError> {
    let (header, payload) = decode_header(frame)?;
    let reply = Reply::decode(header.mmtype, payload)?;
    log::trace!("decoded MMType 0x{:04X} from {}", header.mmtype, header.source);
    Ok((header, reply))
}

/// Read a little-endian u64. The caller has already checked bounds.
fn read_u64_le(data: &[u8], offset: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[offset..offset + 8]);
    u64::from_le_bytes(bytes)
}

fn decode_tx_stats(data: &[u8]) -> Result<TxLinkStats, MmeError> {
    if data.len() < TX_STATS_SIZE {
        return Err(MmeError::Truncated {
            expected: TX_STATS_SIZE,
            actual: data.len(),
        });
    }
    Ok(TxLinkStats {
        mpdu_acked: read_u64_le(data, 0),
        mpdu_collisions: read_u64_le(data, 8),
        mpdu_failed: read_u64_le(data, 16),
        pb_passed: read_u64_le(data, 24),
        pb_failed: read_u64_le(data, 32),
    })
}

fn decode_rx_stats(data: &[u8]) -> Result<RxLinkStats, MmeError> {
    if data.len() < RX_STATS_FIXED_SIZE {
        return Err(MmeError::Truncated {
            expected: RX_STATS_FIXED_SIZE,
            actual: data.len(),
        });
    }
    let interval_count = data[48] as usize;
    let needed = RX_STATS_FIXED_SIZE + interval_count * RX_INTERVAL_SIZE;
    if data.len() < needed {
        return Err(MmeError::Truncated {
            expected: needed,
            actual: data.len(),
        });
    }
    let mut intervals = Vec::with_capacity(interval_count);
    for n in 0..interval_count {
        let base = RX_STATS_FIXED_SIZE + n * RX_INTERVAL_SIZE;
        intervals.push(RxIntervalStats {
            phy_rate: data[base],
            pb_passed: read_u64_le(data, base + 1),
            pb_failed: read_u64_le(data, base + 9),
            tbe_passed: read_u64_le(data, base + 17),
            tbe_failed: read_u64_le(data, base + 25),
        });
    }
    Ok(RxLinkStats {
        mpdu_acked: read_u64_le(data, 0),
        mpdu_failed: read_u64_le(data, 8),
        pb_passed: read_u64_le(data, 16),
        pb_failed: read_u64_le(data, 24),
        tbe_passed: read_u64_le(data, 32),
        tbe_failed: read_u64_le(data, 40),
        intervals,
    })
}

/// Extract the modeled fields of a 16-byte frame control block. Bit
/// numbering is least-significant-first within each byte; wider fields
/// continue into the low bits of the following byte.
fn decode_frame_control(fc: &[u8]) -> FrameControl {
    FrameControl {
        delimiter: fc[0] & 0x07,
        access: fc[0] & 0x08 != 0,
        snid: fc[0] >> 4,
        source_tei: fc[1],
        dest_tei: fc[2],
        link_id: fc[3],
        pending_blocks: fc[5],
        bit_loading_raw: fc[6],
        pb_size: fc[7] & 0x01 != 0,
        symbol_count: (fc[7] >> 1) & 0x03,
        tone_map_index: fc[7] >> 3,
        frame_length_raw: u16::from_le_bytes([fc[8], fc[9]]) & 0x0FFF,
        mpdu_count: (fc[9] >> 4) & 0x03,
        burst_count: fc[9] >> 6,
    }
}

/// Extract the modeled fields of a 16-byte beacon block.
fn decode_beacon(bcn: &[u8]) -> BeaconInfo {
    BeaconInfo {
        delimiter: bcn[0] & 0x07,
        access: bcn[0] & 0x08 != 0,
        snid: bcn[0] >> 4,
        timestamp: u32::from_le_bytes([bcn[1], bcn[2], bcn[3], bcn[4]]),
        tx_offsets: [
            u16::from_le_bytes([bcn[5], bcn[6]]),
            u16::from_le_bytes([bcn[7], bcn[8]]),
            u16::from_le_bytes([bcn[9], bcn[10]]),
            u16::from_le_bytes([bcn[11], bcn[12]]),
        ],
    }
}
