use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use colored::*;
use findpi_common::config::Config;
use findpi_common::error::ScanError;
use findpi_common::network::interface::LocalNetwork;
use findpi_common::network::subnet::HOSTS_PER_SUBNET;
use findpi_common::report::ScanResult;
use findpi_common::success;
use findpi_common::system::SystemRepository;
use findpi_common::vendors::VendorRepository;
use findpi_core::discovery::DiscoveryService;
use findpi_core::neighbor::ArpCommand;
use findpi_core::scanner::{self, resolver::SystemResolver};
use findpi_core::statistics::top;
use findpi_core::vendors::registry::IeeeRegistry;
use findpi_core::vendors::{OuiClassifier, OuiTable};
use tracing::{error, info, warn};

use crate::output::{self, Artifact};
use crate::terminal::{colors, format, print, progress, prompt};

/// Rows shown in the device table. The rest are only in the device list.
const TABLE_ROWS: usize = 15;
const TOP_VENDORS: usize = 10;
const KEY_WIDTH: usize = 12;

pub async fn discover(cfg: &Config, system: &dyn SystemRepository) -> anyhow::Result<()> {
    let networks: Vec<LocalNetwork> = system.local_networks();
    if networks.is_empty() {
        return Err(ScanError::NoInterfaces.into());
    }

    print::header("available networks", cfg.quiet);
    print_networks(&networks, cfg);

    let classifier: OuiClassifier = build_classifier(cfg)?;
    let cores: usize = system.cpu_cores();
    let concurrency: usize = cfg.concurrency_for(cores);

    print::header("system info", cfg.quiet);
    if cfg.quiet == 0 {
        print::aligned_line("CPU cores", cores, KEY_WIDTH);
        print::aligned_line("Concurrency", concurrency, KEY_WIDTH);
        print::aligned_line("Probe", cfg.backend, KEY_WIDTH);
        print::aligned_line("OUI entries", classifier.len(), KEY_WIDTH);
    }

    let selection: usize = match cfg.network {
        Some(idx) => prompt::select_network(&idx.to_string(), networks.len())?,
        None => prompt::ask_network(networks.len())?,
    };
    let network: &LocalNetwork = &networks[selection];

    print::header(&format!("scanning {}", network.subnet), cfg.quiet);

    let prober = scanner::prober_for(cfg)
        .context("could not set up the probe backend (try --backend tcp)")?;

    let mut service: DiscoveryService =
        DiscoveryService::new(prober, Box::new(ArpCommand::default()), Arc::new(classifier))
            .with_concurrency(concurrency)
            .with_probe_timeout(cfg.probe_timeout)
            .with_deadline(cfg.sweep_deadline);
    if !cfg.no_dns {
        service = service.with_resolver(Arc::new(SystemResolver));
    }
    if cfg.quiet < 2 {
        service = service.with_progress(Arc::new(progress::update));
        progress::start(HOSTS_PER_SUBNET);
    }

    let result: ScanResult = service.perform_discovery(network.subnet).await;
    progress::finish();

    discovery_ends(&result, cfg);
    Ok(())
}

fn print_networks(networks: &[LocalNetwork], cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }
    for (idx, network) in networks.iter().enumerate() {
        print::tree_head(idx, &network.subnet.to_string());
        print::as_tree_one_level(&[
            ("iface", network.interface.as_str().normal()),
            ("address", network.address.to_string().color(colors::IPV4_ADDR)),
        ]);
    }
}

fn build_classifier(cfg: &Config) -> anyhow::Result<OuiClassifier> {
    let mut table: OuiTable = OuiTable::builtin();
    if let Some(path) = &cfg.oui_file {
        let added: usize = table.load_manuf_file(path)?;
        info!("Loaded {added} extra OUI prefixes from {}", path.display());
    }

    let mut classifier: OuiClassifier = OuiClassifier::new(table);
    if !cfg.no_registry {
        match IeeeRegistry::load() {
            Ok(registry) => classifier = classifier.with_registry(registry),
            Err(e) => warn!("Continuing without the IEEE registry: {e:#}"),
        }
    }
    Ok(classifier)
}

fn discovery_ends(result: &ScanResult, cfg: &Config) {
    save_results(result, cfg);

    if result.devices.is_empty() {
        print::header("zero devices detected", cfg.quiet);
        print::no_results();
    } else {
        if cfg.quiet < 2 {
            print_devices(result, cfg);
        }
        print_embedded_sbcs(result, cfg);
        print_statistics(result, cfg);
    }

    print_summary(result, cfg);
}

fn save_results(result: &ScanResult, cfg: &Config) {
    print::header("output files", cfg.quiet);

    let dir: PathBuf = match output::output_dir(cfg) {
        Ok(dir) => dir,
        Err(e) => {
            error!("Results not saved: {e:#}");
            return;
        }
    };

    for Artifact { path, summary, outcome } in output::write_artifacts(&dir, result) {
        match outcome {
            Ok(()) => success!("{} {}", path.display(), format!("({summary})").dimmed()),
            Err(e) => error!("Failed to save {}: {e:#}", path.display()),
        }
    }
}

fn print_devices(result: &ScanResult, cfg: &Config) {
    print::header("discovered devices", cfg.quiet);
    print::print(&format::table_header());
    for device in result.devices.iter().take(TABLE_ROWS) {
        print::print(&format::device_row(device));
    }

    let hidden: usize = result.devices.len().saturating_sub(TABLE_ROWS);
    if hidden > 0 {
        print::blank();
        print::print(&format!(
            "  {}",
            format!("... and {hidden} more devices (see {})", output::DEVICE_LIST).dimmed()
        ));
    }
}

fn print_embedded_sbcs(result: &ScanResult, cfg: &Config) {
    if result.embedded_sbc_count == 0 {
        return;
    }

    print::header("raspberry pi devices", cfg.quiet);
    for pi in result.embedded_sbcs() {
        let host: String = pi
            .hostname
            .as_deref()
            .map(|name| format!(" ({name})").dimmed().to_string())
            .unwrap_or_default();
        print::print(&format!(
            "  {} {}{} {}",
            "●".color(colors::EMBEDDED_SBC),
            pi.ip.to_string().color(colors::EMPHASIS),
            host,
            format!("[{}]", pi.mac).dimmed()
        ));
    }
}

fn print_statistics(result: &ScanResult, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    print::header("scan results", cfg.quiet);
    print::aligned_line("Devices", result.total_devices, KEY_WIDTH);
    print::aligned_line(
        "Raspberry Pi",
        result.embedded_sbc_count.to_string().color(colors::EMBEDDED_SBC),
        KEY_WIDTH,
    );

    print::blank();
    print::print(&format!("  {}", "Top manufacturers".bold()));
    for (vendor, count) in top(&result.vendor_counts, TOP_VENDORS) {
        print::print(&format::count_line(vendor, count, colors::TEXT_DEFAULT));
    }

    print::blank();
    print::print(&format!("  {}", "Categories".bold()));
    for (category, count) in top(&result.category_counts, usize::MAX) {
        print::print(&format::count_line(category, count, format::category_color(category)));
    }
}

fn print_summary(result: &ScanResult, cfg: &Config) {
    let devices: ColoredString = format!("{} devices", result.total_devices).bold().green();
    let elapsed: ColoredString = format!("{:.2}s", result.duration.as_secs_f64()).bold().yellow();
    let output: String = format!("Scan completed: {devices} found in {elapsed}");

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
            print::end_of_program();
        }
        _ => success!("{}", output),
    }
}
