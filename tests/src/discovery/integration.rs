use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use findpi_common::network::interface::{LocalNetwork, collect_local_networks};
use findpi_common::network::subnet::Subnet;
use findpi_common::report::ScanResult;
use findpi_core::discovery::DiscoveryService;
use findpi_core::vendors::{OuiClassifier, OuiTable};
use pnet::datalink::NetworkInterface;

use crate::fixtures::{
    BrokenNeighbors, FLAGS_ETHERNET, FLAGS_LOOPBACK, ResponsiveRange, Silent, StaticNames,
    StaticNeighbors, ni, v4,
};

const ARP_TABLE: &str = "\
? (10.0.0.1) at 00:1a:2b:3c:4d:01 on eth0 ifscope [ethernet]
desktop.lan (10.0.0.5) at 00:0c:29:aa:bb:05 on eth0 ifscope [ethernet]
? (10.0.0.6) at (incomplete) on eth0 ifscope [ethernet]
raspberrypi.lan (10.0.0.7) at dc:a6:32:aa:bb:07 on eth0 ifscope [ethernet]
? (10.0.0.9) at 0:11:22:33:44:9 on eth0 ifscope [ethernet]
? (10.0.0.200) at b8:27:eb:00:00:c8 on eth0 ifscope [ethernet]
";

fn interfaces() -> Vec<NetworkInterface> {
    vec![
        ni("lo", 1, None, &[v4(127, 0, 0, 1, 8)], FLAGS_LOOPBACK),
        ni("eth0", 2, None, &[v4(10, 0, 0, 5, 24)], FLAGS_ETHERNET),
    ]
}

fn classifier() -> Arc<OuiClassifier> {
    Arc::new(OuiClassifier::new(OuiTable::builtin()))
}

fn local_subnet() -> Subnet {
    let networks: Vec<LocalNetwork> = collect_local_networks(&interfaces());
    assert_eq!(networks.len(), 1, "loopback must not be offered");
    assert_eq!(networks[0].address, Ipv4Addr::new(10, 0, 0, 5));
    networks[0].subnet
}

#[tokio::test]
async fn scan_of_local_network_finds_reachable_devices() {
    let prober: Arc<ResponsiveRange> = Arc::new(ResponsiveRange::new(5, 10));
    let service: DiscoveryService = DiscoveryService::new(
        prober.clone(),
        Box::new(StaticNeighbors(ARP_TABLE.to_string())),
        classifier(),
    )
    .with_concurrency(16);

    let result: ScanResult = service.perform_discovery(local_subnet()).await;

    let ips: Vec<Ipv4Addr> = result.devices.iter().map(|d| d.ip).collect();
    assert_eq!(
        ips,
        vec![
            Ipv4Addr::new(10, 0, 0, 5),
            Ipv4Addr::new(10, 0, 0, 7),
            Ipv4Addr::new(10, 0, 0, 9),
        ]
    );
    assert_eq!(result.total_devices, 3);
    assert_eq!(result.embedded_sbc_count, 1);
    assert_eq!(prober.probes.load(Ordering::Relaxed), 254);

    let pi = &result.devices[1];
    assert!(pi.is_embedded_sbc);
    assert_eq!(pi.mac.to_string(), "dc:a6:32:aa:bb:07");
    assert_eq!(result.devices[2].mac.to_string(), "00:11:22:33:44:09");
    assert_eq!(result.devices[2].vendor, "Unknown");

    assert_eq!(result.vendor_counts.values().sum::<usize>(), 3);
    assert_eq!(result.category_counts.values().sum::<usize>(), 3);
    assert_eq!(result.category_counts.get("Raspberry Pi"), Some(&1));
    assert_eq!(result.category_counts.get("Virtual"), Some(&1));
}

#[tokio::test]
async fn report_serializes_with_stable_names() {
    let service: DiscoveryService = DiscoveryService::new(
        Arc::new(ResponsiveRange::new(5, 10)),
        Box::new(StaticNeighbors(ARP_TABLE.to_string())),
        classifier(),
    )
    .with_concurrency(8);

    let result: ScanResult = service.scan_network("10.0.0.5").await.unwrap();
    let json: serde_json::Value = serde_json::to_value(&result).unwrap();

    assert_eq!(json["network"], "10.0.0.0/24");
    assert_eq!(json["total_devices"], 3);
    assert_eq!(json["raspberry_pi_count"], 1);
    assert_eq!(json["devices"][1]["is_raspberry_pi"], true);
    assert_eq!(json["manufacturer_statistics"]["Unknown"], 1);
    assert_eq!(json["category_statistics"]["Raspberry Pi"], 1);
    assert!(json["devices"][0].get("hostname").is_none());
}

#[tokio::test]
async fn unreadable_neighbor_table_yields_no_devices() {
    let service: DiscoveryService = DiscoveryService::new(
        Arc::new(ResponsiveRange::new(5, 10)),
        Box::new(BrokenNeighbors),
        classifier(),
    )
    .with_concurrency(8);

    let result: ScanResult = service.perform_discovery(local_subnet()).await;

    assert!(result.devices.is_empty());
    assert_eq!(result.total_devices, 0);
    assert_eq!(result.embedded_sbc_count, 0);
    assert!(result.vendor_counts.is_empty());
}

#[tokio::test]
async fn hostnames_are_attached_to_devices() {
    let names: StaticNames = StaticNames(HashMap::from([(
        Ipv4Addr::new(10, 0, 0, 7),
        "raspberrypi.lan".to_string(),
    )]));
    let service: DiscoveryService = DiscoveryService::new(
        Arc::new(ResponsiveRange::new(5, 10)),
        Box::new(StaticNeighbors(ARP_TABLE.to_string())),
        classifier(),
    )
    .with_concurrency(8)
    .with_resolver(Arc::new(names));

    let result: ScanResult = service.perform_discovery(local_subnet()).await;

    let hostnames: Vec<Option<&str>> = result.devices.iter().map(|d| d.hostname.as_deref()).collect();
    assert_eq!(hostnames, vec![None, Some("raspberrypi.lan"), None]);
}

#[tokio::test]
async fn hosts_that_never_answer_are_not_reported() {
    let service: DiscoveryService = DiscoveryService::new(
        Arc::new(Silent),
        Box::new(StaticNeighbors(ARP_TABLE.to_string())),
        classifier(),
    )
    .with_concurrency(64)
    .with_probe_timeout(Duration::from_millis(10))
    .with_deadline(Duration::from_secs(5));

    let result: ScanResult = service.perform_discovery(local_subnet()).await;

    assert!(result.devices.is_empty());
}
