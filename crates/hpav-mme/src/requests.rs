//! Requests sent to a powerline device.

use crate::constants::*;
use crate::frame::encode_header;
use crate::types::{Direction, LinkId, MacAddr};

/// Management requests a monitor can send.
///
/// [`Request::encode`] produces the complete Ethernet frame, addressed to
/// the fixed management MAC so any device on the segment answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Request {
    /// Ask for the tone map of one slot on the link towards a neighbour.
    ToneMap {
        /// PLC neighbour whose tone map is requested.
        target: MacAddr,
        /// Tone map slot, `0..NUM_TONE_MAP_SLOTS`.
        slot: u8,
    },
    /// Ask for error and collision counters on the link towards a neighbour.
    ErrorStats {
        /// PLC neighbour whose counters are requested.
        target: MacAddr,
        /// Which side of the link to report.
        direction: Direction,
        /// Which link of the station pair to report.
        link_id: LinkId,
    },
    /// Turn the device's sniffer mode on or off. While enabled the device
    /// mirrors every PLC frame it hears as a sniffer indication.
    SnifferControl {
        /// Enable when true, disable when false.
        enable: bool,
    },
    /// Ask for the average PHY rate table of all known stations.
    NetworkStats,
}

impl Request {
    /// Message type code for this request.
    pub fn mmtype(&self) -> u16 {
        match self {
            Request::ToneMap { .. } => MMTYPE_TONE_MAP_REQ,
            Request::ErrorStats { .. } => MMTYPE_ERROR_STATS_REQ,
            Request::SnifferControl { .. } => MMTYPE_SNIFFER_REQ,
            Request::NetworkStats => MMTYPE_NW_STATS_REQ,
        }
    }

    /// Management message version byte for this request. Vendor-specific
    /// requests carry version 0, the standard network statistics request
    /// carries version 1.
    pub fn version(&self) -> u8 {
        match self {
            Request::NetworkStats => MMV_AV_1_1,
            _ => MMV_AV_1_0,
        }
    }

    /// Encode the complete Ethernet frame for this request.
    ///
    /// `source` becomes the frame's source MAC; [`MacAddr::ZERO`] works when
    /// no interface address is at hand.
    pub fn encode(&self, source: MacAddr) -> Vec<u8> {
        let mut buf = encode_header(MacAddr::MANAGEMENT, source, self.version(), self.mmtype());
        match self {
            Request::ToneMap { target, slot } => {
                buf.extend_from_slice(&HPAV_OUI);
                buf.extend_from_slice(target.as_bytes());
                buf.push(*slot);
            }
            Request::ErrorStats {
                target,
                direction,
                link_id,
            } => {
                buf.extend_from_slice(&HPAV_OUI);
                // Control 0 = read counters.
                buf.push(0x00);
                buf.push((*direction).into());
                buf.push((*link_id).into());
                buf.extend_from_slice(target.as_bytes());
            }
            Request::SnifferControl { enable } => {
                buf.extend_from_slice(&HPAV_OUI);
                buf.push(if *enable {
                    SNIFFER_CONTROL_ENABLE
                } else {
                    SNIFFER_CONTROL_DISABLE
                });
                // Reserved.
                buf.extend_from_slice(&[0x00; 4]);
            }
            // Header-only request.
            Request::NetworkStats => {}
        }
        buf
    }
}
