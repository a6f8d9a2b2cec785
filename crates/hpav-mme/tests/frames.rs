//! Frame-level tests exercising the codec the way a capture loop would:
//! full Ethernet frames in, decoded replies out.

use hpav_mme::{
    decode_frame, decode_header, Direction, LinkId, LinkStats, MacAddr, MmeError, Modulation,
    Reply, Request, DIRECTION_RX, ERROR_STATS_STATUS_SUCCESS, ETHERTYPE_HPAV, FRAME_HEADER_SIZE,
    HPAV_OUI, LINK_ID_CSMA_CAP_1, MMTYPE_ERROR_STATS_REP, MMTYPE_NW_STATS_REP,
    MMTYPE_TONE_MAP_REP, MMV_AV_1_0, MMV_AV_1_1, TONE_MAP_STATUS_SUCCESS,
};

const DEVICE_MAC: [u8; 6] = [0x00, 0x1F, 0x84, 0xA2, 0x5C, 0x01];
const HOST_MAC: [u8; 6] = [0x02, 0x00, 0x00, 0x0A, 0x0B, 0x0C];

/// Build a device-to-host frame the way the firmware does: header first,
/// then the payload bytes.
fn device_frame(version: u8, mmtype: u16, payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::new();
    frame.extend_from_slice(&HOST_MAC);
    frame.extend_from_slice(&DEVICE_MAC);
    frame.extend_from_slice(&ETHERTYPE_HPAV.to_be_bytes());
    frame.push(version);
    frame.extend_from_slice(&mmtype.to_be_bytes());
    frame.extend_from_slice(payload);
    frame
}

#[test]
fn test_tone_map_poll_cycle() {
    // The request the monitor would send.
    let request = Request::ToneMap {
        target: MacAddr::new(DEVICE_MAC),
        slot: 0,
    };
    let out = request.encode(MacAddr::new(HOST_MAC));
    let (header, payload) = decode_header(&out).unwrap();
    assert_eq!(header.dest, MacAddr::MANAGEMENT);
    assert_eq!(header.source, MacAddr::new(HOST_MAC));
    assert!(header.is_vendor_specific());
    assert_eq!(payload.len(), 10);

    // The reply the device would send back: 6 active carriers, all QAM-256.
    let mut reply_payload = Vec::new();
    reply_payload.extend_from_slice(&HPAV_OUI);
    reply_payload.push(TONE_MAP_STATUS_SUCCESS);
    reply_payload.push(0); // slot
    reply_payload.push(1); // tone map count
    reply_payload.extend_from_slice(&6u16.to_le_bytes());
    reply_payload.extend_from_slice(&[0x66; 3]);
    let frame = device_frame(MMV_AV_1_0, MMTYPE_TONE_MAP_REP, &reply_payload);

    let (header, reply) = decode_frame(&frame).unwrap();
    assert_eq!(header.source, MacAddr::new(DEVICE_MAC));
    let map = match reply {
        Reply::ToneMap(map) => map,
        other => panic!("expected tone map reply, got {:?}", other),
    };
    assert_eq!(map.active_carriers, 6);
    assert_eq!(map.carriers.len(), 3);
    assert!(map
        .carriers
        .iter()
        .all(|pair| pair.low == Modulation::Qam256 && pair.high == Modulation::Qam256));
}

#[test]
fn test_unsolicited_error_stats_frame() {
    // RX counters with one interval record, dispatched purely from the
    // frame contents.
    let mut payload = Vec::new();
    payload.extend_from_slice(&HPAV_OUI);
    payload.push(ERROR_STATS_STATUS_SUCCESS);
    payload.push(DIRECTION_RX);
    payload.push(LINK_ID_CSMA_CAP_1);
    payload.push(0x0B); // tei
    for counter in [5000u64, 21, 120_000, 340, 17, 2] {
        payload.extend_from_slice(&counter.to_le_bytes());
    }
    payload.push(1); // interval count
    payload.push(180); // interval phy rate
    for counter in [9000u64, 12, 3, 1] {
        payload.extend_from_slice(&counter.to_le_bytes());
    }
    let frame = device_frame(MMV_AV_1_0, MMTYPE_ERROR_STATS_REP, &payload);

    let (_, reply) = decode_frame(&frame).unwrap();
    let stats = match reply {
        Reply::ErrorStats(stats) => stats,
        other => panic!("expected error stats, got {:?}", other),
    };
    assert_eq!(stats.tei, 0x0B);
    match stats.stats {
        LinkStats::Rx(rx) => {
            assert_eq!(rx.mpdu_acked, 5000);
            assert_eq!(rx.pb_passed, 120_000);
            assert_eq!(rx.intervals.len(), 1);
            assert_eq!(rx.intervals[0].phy_rate, 180);
            assert_eq!(rx.intervals[0].pb_passed, 9000);
        }
        other => panic!("expected RX counters, got {:?}", other),
    }
}

#[test]
fn test_network_stats_poll_cycle() {
    let out = Request::NetworkStats.encode(MacAddr::ZERO);
    assert_eq!(out.len(), FRAME_HEADER_SIZE);

    let mut payload = Vec::new();
    payload.extend_from_slice(&0u16.to_le_bytes());
    payload.push(1);
    payload.extend_from_slice(&DEVICE_MAC);
    payload.push(187); // tx rate
    payload.push(164); // rx rate
    let frame = device_frame(MMV_AV_1_1, MMTYPE_NW_STATS_REP, &payload);

    let (header, reply) = decode_frame(&frame).unwrap();
    assert!(!header.is_vendor_specific());
    let network = match reply {
        Reply::NetworkStats(network) => network,
        other => panic!("expected network stats, got {:?}", other),
    };
    assert_eq!(network.stations.len(), 1);
    assert_eq!(network.stations[0].mac, MacAddr::new(DEVICE_MAC));
    assert_eq!(network.stations[0].avg_phy_rate_tx, 187);
    assert_eq!(network.stations[0].avg_phy_rate_rx, 164);
}

#[test]
fn test_foreign_traffic_is_skipped_not_crashed() {
    // An ARP frame as a capture loop would hand it over.
    let mut arp = vec![0xFFu8; 6];
    arp.extend_from_slice(&HOST_MAC);
    arp.extend_from_slice(&[0x08, 0x06]);
    arp.extend_from_slice(&[0u8; 28]);
    assert_eq!(
        decode_frame(&arp).unwrap_err(),
        MmeError::NotHpav { ethertype: 0x0806 }
    );

    // A runt frame.
    assert!(matches!(
        decode_frame(&[0x00, 0x1F]).unwrap_err(),
        MmeError::FrameTooShort { .. }
    ));
}

#[test]
fn test_requests_stay_parseable() {
    // Every request we emit must round-trip through our own header decoder.
    let requests = [
        Request::ToneMap {
            target: MacAddr::new(DEVICE_MAC),
            slot: 5,
        },
        Request::ErrorStats {
            target: MacAddr::new(DEVICE_MAC),
            direction: Direction::Both,
            link_id: LinkId::CsmaSumAny,
        },
        Request::SnifferControl { enable: true },
        Request::NetworkStats,
    ];
    for request in requests {
        let frame = request.encode(MacAddr::new(HOST_MAC));
        let (header, _) = decode_header(&frame).unwrap();
        assert_eq!(header.mmtype, request.mmtype());
        assert_eq!(header.version, request.version());
        assert_eq!(header.dest, MacAddr::MANAGEMENT);
    }
}
