use std::collections::BTreeMap;

use findpi_common::network::device::Device;
use findpi_common::report::Statistics;

/// Counts devices per vendor and per category. Unknown vendors are counted
/// under their placeholder like any other.
pub fn aggregate(devices: &[Device]) -> Statistics {
    let mut vendors: BTreeMap<String, usize> = BTreeMap::new();
    let mut categories: BTreeMap<String, usize> = BTreeMap::new();

    for device in devices {
        *vendors.entry(device.vendor.clone()).or_default() += 1;
        *categories.entry(device.category.clone()).or_default() += 1;
    }

    Statistics { vendors, categories }
}

/// The `n` most common entries, highest count first. Ties keep name order.
pub fn top(counts: &BTreeMap<String, usize>, n: usize) -> Vec<(&str, usize)> {
    let mut ranked: Vec<(&str, usize)> = counts.iter().map(|(k, &v)| (k.as_str(), v)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use findpi_common::vendors::Classification;
    use std::net::Ipv4Addr;

    fn device(last: u8, vendor: &str, category: &str) -> Device {
        Device::new(
            Ipv4Addr::new(10, 0, 0, last),
            format!("00:11:22:33:44:{last:02x}").parse().unwrap(),
            Classification::new(vendor, category),
        )
    }

    #[test]
    fn counts_vendors_and_categories() {
        let devices: Vec<Device> = vec![
            device(1, "Acme", "Widgets"),
            device(2, "Acme", "Widgets"),
            device(3, "Unknown", "Unknown"),
        ];
        let stats: Statistics = aggregate(&devices);

        assert_eq!(
            stats.vendors,
            BTreeMap::from([("Acme".to_string(), 2), ("Unknown".to_string(), 1)])
        );
        assert_eq!(
            stats.categories,
            BTreeMap::from([("Widgets".to_string(), 2), ("Unknown".to_string(), 1)])
        );
        assert_eq!(stats.vendors.values().sum::<usize>(), devices.len());
    }

    #[test]
    fn empty_input_gives_empty_tables() {
        assert_eq!(aggregate(&[]), Statistics::default());
    }

    #[test]
    fn top_orders_by_count_then_name() {
        let counts: BTreeMap<String, usize> = BTreeMap::from([
            ("b".to_string(), 1),
            ("a".to_string(), 1),
            ("c".to_string(), 5),
        ]);
        assert_eq!(top(&counts, 2), vec![("c", 5), ("a", 1)]);
        assert!(top(&counts, 0).is_empty());
    }
}
