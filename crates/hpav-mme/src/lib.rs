//! # hpav-mme
//!
//! Codec for the management messages (MMEs) that HomePlug AV powerline
//! devices exchange over raw Ethernet (EtherType 0x88E1). It covers the
//! message set a link monitor needs:
//!
//! - **Requests** (host to device): tone map, error statistics, sniffer
//!   control and network statistics, built with [`Request::encode`]
//! - **Replies** (device to host): decoded with [`decode_frame`], or with
//!   the per-message `decode` functions when the message type is already
//!   known
//!
//! The crate only transforms bytes; opening a raw socket and moving frames
//! is left to the caller.
//!
//! ## Example
//!
//! ```no_run
//! use hpav_mme::{decode_frame, MacAddr, Reply, Request};
//!
//! # fn demo(received: &[u8]) -> Result<(), hpav_mme::MmeError> {
//! // Poll a neighbour's tone map for slot 0.
//! let target: MacAddr = "00:1f:84:a2:5c:01".parse()?;
//! let frame = Request::ToneMap { target, slot: 0 }.encode(MacAddr::ZERO);
//! // ... send `frame`, receive `received` ...
//!
//! match decode_frame(received)? {
//!     (_, Reply::ToneMap(map)) => println!("{} active carriers", map.active_carriers),
//!     (header, _) => println!("other reply from {}", header.source),
//! }
//! # Ok(())
//! # }
//! ```

mod constants;
mod error;
mod frame;
mod replies;
mod requests;
mod types;

pub use constants::*;
pub use error::MmeError;
pub use frame::{decode_header, encode_header, FrameHeader};
pub use replies::{
    decode_frame, ErrorStatsReply, LinkStats, NetworkStatsReply, Reply, SnifferIndicate,
    ToneMapReply,
};
pub use requests::Request;
pub use types::{
    BeaconInfo, CarrierPair, DelimiterType, Direction, ErrorStatsStatus, FrameControl, LinkId,
    MacAddr, Modulation, RxIntervalStats, RxLinkStats, StationInfo, ToneMapStatus, TxLinkStats,
};
