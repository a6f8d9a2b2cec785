//! Codec error types.

use thiserror::Error;

/// Errors raised while decoding management frames or parsing addresses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MmeError {
    /// Frame ends before the Ethernet and HPAV headers do.
    #[error("frame too short: expected at least {expected} bytes, got {actual}")]
    FrameTooShort {
        /// Minimum bytes the frame must hold.
        expected: usize,
        /// Bytes actually received.
        actual: usize,
    },

    /// Payload ends before a field or array the message declares.
    #[error("payload truncated: expected at least {expected} bytes, got {actual}")]
    Truncated {
        /// Minimum bytes the payload must hold.
        expected: usize,
        /// Bytes actually received.
        actual: usize,
    },

    /// Frame belongs to another protocol entirely.
    #[error("not an HPAV frame: EtherType 0x{ethertype:04X}")]
    NotHpav {
        /// EtherType found in the frame.
        ethertype: u16,
    },

    /// Message type this codec has no decoder for.
    #[error("unknown MMType: 0x{0:04X}")]
    UnknownMmType(u16),

    /// Direction byte of an unsolicited error statistics reply is not one of
    /// TX, RX or BOTH, so the counter layout cannot be determined.
    #[error("unknown statistics direction: 0x{0:02X}")]
    UnknownDirection(u8),

    /// Textual MAC address could not be parsed.
    #[error("invalid MAC address: {0}")]
    InvalidAddress(String),
}
