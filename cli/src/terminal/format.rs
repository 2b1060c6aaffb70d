//! Row and cell formatting for the result tables.

use colored::*;
use findpi_common::network::device::Device;
use findpi_common::vendors::{EMBEDDED_SBC_CATEGORY, UNKNOWN};

use crate::terminal::colors;

const IP_WIDTH: usize = 15;
const MAC_WIDTH: usize = 17;
const VENDOR_WIDTH: usize = 24;
const CATEGORY_WIDTH: usize = 18;

pub fn category_color(category: &str) -> Color {
    match category {
        EMBEDDED_SBC_CATEGORY => colors::EMBEDDED_SBC,
        "Computer/Phone" | "Computer" | "Computer/Network" => Color::BrightCyan,
        "Network Equipment" => Color::Yellow,
        "IoT/Smart Home" | "IoT/Audio" | "IoT/Embedded" => Color::Magenta,
        "TV/Streaming" | "TV/Display" | "TV" => Color::Blue,
        "Phone/TV" | "Phone" | "Phone/IoT" | "Phone/Network" => Color::Cyan,
        "Printer" | "Printer/Camera" => Color::White,
        "Security Camera" => Color::Red,
        "Gaming" => Color::Green,
        "Storage" | "Storage/NAS" | "Virtual" => Color::BrightBlue,
        UNKNOWN => Color::BrightBlack,
        _ => colors::TEXT_DEFAULT,
    }
}

/// Cuts `text` to `width` columns, marking the cut with an ellipsis.
pub fn fit(text: &str, width: usize) -> String {
    let cut = console::truncate_str(text, width, "…");
    format!("{cut:<width$}")
}

pub fn table_header() -> String {
    format!(
        "  {} {} {} {}",
        fit("IP", IP_WIDTH),
        fit("MAC", MAC_WIDTH),
        fit("MANUFACTURER", VENDOR_WIDTH),
        fit("CATEGORY", CATEGORY_WIDTH)
    )
    .bright_black()
    .to_string()
}

pub fn device_row(device: &Device) -> String {
    let marker: ColoredString = if device.is_embedded_sbc {
        "●".color(colors::EMBEDDED_SBC)
    } else {
        " ".normal()
    };
    let mut row: String = format!(
        "{marker} {} {} {} {}",
        fit(&device.ip.to_string(), IP_WIDTH).color(colors::IPV4_ADDR),
        fit(&device.mac.to_string(), MAC_WIDTH).color(colors::MAC_ADDR),
        fit(&device.vendor, VENDOR_WIDTH).color(colors::TEXT_DEFAULT),
        fit(&device.category, CATEGORY_WIDTH).color(category_color(&device.category)),
    );
    if let Some(hostname) = &device.hostname {
        row.push_str(&format!(" {}", hostname.dimmed()));
    }
    row.trim_end().to_string()
}

/// `name .......... count` with the count right-aligned.
pub fn count_line(name: &str, count: usize, color: Color) -> String {
    format!(
        "  {} {:>4}",
        fit(name, 30).color(color),
        count.to_string().color(colors::EMPHASIS)
    )
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

    #[test]
    fn fit_pads_and_truncates() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdefgh", 5), "abcd…");
        assert_eq!(console::measure_text_width(&fit("abcdefgh", 5)), 5);
    }

    #[test]
    fn row_contains_every_column() {
        colored::control::set_override(false);
        let device: Device = Device::new(
            Ipv4Addr::new(192, 168, 1, 20),
            "dc:a6:32:aa:bb:cc".parse().unwrap(),
            Classification::embedded_sbc("Raspberry Pi Trading Ltd"),
        )
        .with_hostname(Some("pi.lan".to_string()));

        let row: String = device_row(&device);
        assert!(row.starts_with("● 192.168.1.20 "));
        assert!(row.contains("dc:a6:32:aa:bb:cc"));
        assert!(row.contains("Raspberry Pi Trading Ltd"));
        assert!(row.ends_with("pi.lan"));
    }

    #[test]
    fn unknown_category_is_dimmed() {
        assert_eq!(category_color(UNKNOWN), Color::BrightBlack);
        assert_eq!(category_color("Something New"), colors::TEXT_DEFAULT);
    }
}
