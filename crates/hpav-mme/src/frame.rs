//! Ethernet framing for management messages.
//!
//! Management messages travel as raw Ethernet frames with EtherType 0x88E1:
//!
//! ```text
//! +--------------+--------------+-----------+---------+------------+----------
//! | dest MAC (6) | src MAC (6)  | EtherType | version | MMType (2) | payload
//! +--------------+--------------+-----------+---------+------------+----------
//! ```
//!
//! The EtherType and MMType are big-endian on the wire; all payload words
//! are little-endian, as the devices emit them.

use bytes::BufMut;

use crate::constants::*;
use crate::error::MmeError;
use crate::types::MacAddr;

/// Decoded Ethernet and HPAV management header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameHeader {
    /// Destination MAC of the frame.
    pub dest: MacAddr,
    /// Source MAC of the frame. Replies carry the answering device's
    /// address here.
    pub source: MacAddr,
    /// Management message version byte.
    pub version: u8,
    /// Management message type code.
    pub mmtype: u16,
}

impl FrameHeader {
    /// Whether the message type is vendor-specific (low code byte 0xA0)
    /// rather than standard HomePlug (low code byte 0x60).
    pub fn is_vendor_specific(&self) -> bool {
        self.mmtype & 0x00FF == 0xA0
    }
}

/// Split a raw Ethernet frame into its management header and payload.
///
/// Frames with a different EtherType are rejected with [`MmeError::NotHpav`]
/// so a capture loop can feed every received frame through and skip the
/// foreign ones.
pub fn decode_header(frame: &[u8]) -> Result<(FrameHeader, &[u8]), MmeError> {
    if frame.len() < FRAME_HEADER_SIZE {
        return Err(MmeError::FrameTooShort {
            expected: FRAME_HEADER_SIZE,
            actual: frame.len(),
        });
    }
    let ethertype = u16::from_be_bytes([frame[12], frame[13]]);
    if ethertype != ETHERTYPE_HPAV {
        return Err(MmeError::NotHpav { ethertype });
    }
    let header = FrameHeader {
        dest: MacAddr::from_slice(&frame[0..6]).unwrap(),
        source: MacAddr::from_slice(&frame[6..12]).unwrap(),
        version: frame[14],
        mmtype: u16::from_be_bytes([frame[15], frame[16]]),
    };
    Ok((header, &frame[FRAME_HEADER_SIZE..]))
}

/// Build the 17-byte Ethernet and HPAV header. The caller appends the
/// message payload.
pub fn encode_header(dest: MacAddr, source: MacAddr, version: u8, mmtype: u16) -> Vec<u8> {
    let mut buf = Vec::with_capacity(FRAME_HEADER_SIZE);
    buf.extend_from_slice(dest.as_bytes());
    buf.extend_from_slice(source.as_bytes());
    buf.put_u16(ETHERTYPE_HPAV);
    buf.push(version);
    buf.put_u16(mmtype);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_round_trip() {
        let dest = MacAddr::new([0x00, 0x1F, 0x84, 0x11, 0x22, 0x33]);
        let source = MacAddr::new([0x00, 0x1F, 0x84, 0x44, 0x55, 0x66]);
        let frame = encode_header(dest, source, MMV_AV_1_0, MMTYPE_TONE_MAP_REQ);
        assert_eq!(frame.len(), FRAME_HEADER_SIZE);

        let (header, payload) = decode_header(&frame).unwrap();
        assert_eq!(header.dest, dest);
        assert_eq!(header.source, source);
        assert_eq!(header.version, MMV_AV_1_0);
        assert_eq!(header.mmtype, MMTYPE_TONE_MAP_REQ);
        assert!(payload.is_empty());
    }

    #[test]
    fn test_header_byte_layout() {
        let frame = encode_header(
            MacAddr::MANAGEMENT,
            MacAddr::ZERO,
            MMV_AV_1_1,
            MMTYPE_NW_STATS_REQ,
        );
        assert_eq!(&frame[0..6], &MGMT_MAC);
        assert_eq!(&frame[6..12], &[0u8; 6]);
        // EtherType and MMType are big-endian.
        assert_eq!(&frame[12..14], &[0x88, 0xE1]);
        assert_eq!(frame[14], 0x01);
        assert_eq!(&frame[15..17], &[0x48, 0x60]);
    }

    #[test]
    fn test_decode_splits_payload() {
        let mut frame = encode_header(
            MacAddr::MANAGEMENT,
            MacAddr::ZERO,
            MMV_AV_1_0,
            MMTYPE_SNIFFER_REQ,
        );
        frame.extend_from_slice(&[0xAA, 0xBB, 0xCC]);
        let (_, payload) = decode_header(&frame).unwrap();
        assert_eq!(payload, &[0xAA, 0xBB, 0xCC]);
    }

    #[test]
    fn test_decode_rejects_short_frame() {
        let err = decode_header(&[0u8; 16]).unwrap_err();
        assert_eq!(
            err,
            MmeError::FrameTooShort {
                expected: FRAME_HEADER_SIZE,
                actual: 16
            }
        );
    }

    #[test]
    fn test_decode_rejects_foreign_ethertype() {
        let mut frame = vec![0u8; FRAME_HEADER_SIZE];
        // IPv4 EtherType.
        frame[12] = 0x08;
        frame[13] = 0x00;
        let err = decode_header(&frame).unwrap_err();
        assert_eq!(err, MmeError::NotHpav { ethertype: 0x0800 });
    }

    #[test]
    fn test_vendor_specific_detection() {
        let vendor = FrameHeader {
            dest: MacAddr::ZERO,
            source: MacAddr::ZERO,
            version: MMV_AV_1_0,
            mmtype: MMTYPE_TONE_MAP_REP,
        };
        assert!(vendor.is_vendor_specific());

        let standard = FrameHeader {
            mmtype: MMTYPE_NW_STATS_REP,
            ..vendor
        };
        assert!(!standard.is_vendor_specific());
    }
}
