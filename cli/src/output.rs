//! Result files written after a scan.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use findpi_common::config::Config;
use findpi_common::network::device::Device;
use findpi_common::report::ScanResult;

pub const DEVICE_LIST: &str = "devicesfound.txt";
pub const JSON_REPORT: &str = "devicesfound.json";
pub const PI_LIST: &str = "pilist.txt";

/// One attempted write. A failure here never stops the others.
pub struct Artifact {
    pub path: PathBuf,
    pub summary: String,
    pub outcome: anyhow::Result<()>,
}

/// `--output-dir`, else the home directory.
pub fn output_dir(cfg: &Config) -> anyhow::Result<PathBuf> {
    cfg.output_dir
        .clone()
        .or_else(dirs::home_dir)
        .context("could not determine the home directory, use --output-dir")
}

/// One device per line, in the order given.
pub fn write_device_list<'a, I>(path: &Path, devices: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = &'a Device>,
{
    let file: File =
        File::create(path).with_context(|| format!("failed creating {}", path.display()))?;
    let mut writer: BufWriter<File> = BufWriter::new(file);

    for device in devices {
        writeln!(writer, "{device}").with_context(|| format!("failed writing {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed writing {}", path.display()))
}

pub fn write_json(path: &Path, result: &ScanResult) -> anyhow::Result<()> {
    let file: File =
        File::create(path).with_context(|| format!("failed creating {}", path.display()))?;
    let mut writer: BufWriter<File> = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, result).context("failed encoding JSON")?;
    writeln!(writer)?;
    writer
        .flush()
        .with_context(|| format!("failed writing {}", path.display()))
}

/// Writes every artifact that applies to `result` into `dir`.
///
/// The device list is skipped when nothing was found and the Pi list when no
/// Raspberry Pi was found. The JSON report is always written.
pub fn write_artifacts(dir: &Path, result: &ScanResult) -> Vec<Artifact> {
    let mut artifacts: Vec<Artifact> = Vec::new();

    if !result.devices.is_empty() {
        let path: PathBuf = dir.join(DEVICE_LIST);
        artifacts.push(Artifact {
            outcome: write_device_list(&path, &result.devices),
            summary: format!("{} devices", result.total_devices),
            path,
        });
    }

    let path: PathBuf = dir.join(JSON_REPORT);
    artifacts.push(Artifact {
        outcome: write_json(&path, result),
        summary: "full scan data".to_string(),
        path,
    });

    if result.embedded_sbc_count > 0 {
        let path: PathBuf = dir.join(PI_LIST);
        artifacts.push(Artifact {
            outcome: write_device_list(&path, result.embedded_sbcs()),
            summary: format!("{} Raspberry Pi", result.embedded_sbc_count),
            path,
        });
    }

    artifacts
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
