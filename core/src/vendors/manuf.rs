//! Wireshark `manuf` files and keyword based categories.
//!
//! Rows look like `00:00:0C<TAB>Cisco<TAB>Cisco Systems, Inc`. Only plain
//! 24-bit prefixes are used; `/28` and `/36` blocks and comments are skipped.

use std::sync::LazyLock;

use findpi_common::network::mac::OuiPrefix;
use findpi_common::vendors::UNKNOWN;
use regex::Regex;

use super::OuiEntry;

static MANUF_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9A-Fa-f]{2}:[0-9A-Fa-f]{2}:[0-9A-Fa-f]{2})\s+(\S+)\s*(.*)$")
        .expect("manuf line pattern compiles")
});

/// Checked in order, first match wins. Keywords match whole words of the
/// vendor name, so `lg` does not fire on "Digital" and `ring` not on
/// "Engineering".
const CATEGORY_KEYWORDS: &[(&str, &str)] = &[
    ("raspberry", "Raspberry Pi"),
    ("cisco", "Network Equipment"),
    ("juniper", "Network Equipment"),
    ("arista", "Network Equipment"),
    ("ubiquiti", "Network Equipment"),
    ("mikrotik", "Network Equipment"),
    ("routerboard", "Network Equipment"),
    ("netgear", "Network Equipment"),
    ("tp-link", "Network Equipment"),
    ("d-link", "Network Equipment"),
    ("linksys", "Network Equipment"),
    ("belkin", "Network Equipment"),
    ("zyxel", "Network Equipment"),
    ("aruba", "Network Equipment"),
    ("fortinet", "Network Equipment"),
    ("palo alto", "Network Equipment"),
    ("sonicwall", "Network Equipment"),
    ("meraki", "Network Equipment"),
    ("ruckus", "Network Equipment"),
    ("extreme", "Network Equipment"),
    ("brocade", "Network Equipment"),
    ("alcatel", "Network Equipment"),
    ("apple", "Computer/Phone"),
    ("dell", "Computer"),
    ("hp", "Computer"),
    ("hewlett", "Computer"),
    ("lenovo", "Computer"),
    ("intel", "Computer"),
    ("xbox", "Gaming"),
    ("microsoft", "Computer"),
    ("acer", "Computer"),
    ("asus", "Computer/Network"),
    ("asustek", "Computer/Network"),
    ("samsung", "Phone/TV"),
    ("xiaomi", "Phone/IoT"),
    ("huawei", "Phone/Network"),
    ("oneplus", "Phone"),
    ("oppo", "Phone"),
    ("vivo", "Phone"),
    ("motorola", "Phone"),
    ("nokia", "Phone"),
    ("playstation", "Gaming"),
    ("sony", "Phone/TV"),
    ("google", "Phone/IoT"),
    ("amazon", "IoT/Smart Home"),
    ("ring", "IoT/Smart Home"),
    ("nest", "IoT/Smart Home"),
    ("philips", "IoT/Smart Home"),
    ("sonos", "IoT/Audio"),
    ("ecobee", "IoT/Smart Home"),
    ("wyze", "IoT/Smart Home"),
    ("tuya", "IoT/Smart Home"),
    ("shelly", "IoT/Smart Home"),
    ("espressif", "IoT/Embedded"),
    ("arduino", "IoT/Embedded"),
    ("lg", "TV/Display"),
    ("vizio", "TV"),
    ("tcl", "TV"),
    ("roku", "TV/Streaming"),
    ("nintendo", "Gaming"),
    ("valve", "Gaming"),
    ("canon", "Printer/Camera"),
    ("epson", "Printer"),
    ("brother", "Printer"),
    ("xerox", "Printer"),
    ("lexmark", "Printer"),
    ("hikvision", "Security Camera"),
    ("dahua", "Security Camera"),
    ("axis", "Security Camera"),
    ("lorex", "Security Camera"),
    ("arlo", "Security Camera"),
    ("synology", "Storage/NAS"),
    ("qnap", "Storage/NAS"),
    ("western digital", "Storage"),
    ("seagate", "Storage"),
    ("vmware", "Virtual"),
    ("xensource", "Virtual"),
    ("parallels", "Virtual"),
];

/// Lowercase alphanumeric words separated and surrounded by single spaces.
fn words(text: &str) -> String {
    let mut out: String = String::with_capacity(text.len() + 2);
    out.push(' ');
    for word in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        out.push_str(&word.to_lowercase());
        out.push(' ');
    }
    out
}

/// Guesses a device category from a vendor name.
pub fn categorize(vendor: &str) -> &'static str {
    let name: String = words(vendor);
    CATEGORY_KEYWORDS
        .iter()
        .find(|(keyword, _)| name.contains(&words(keyword)))
        .map(|&(_, category)| category)
        .unwrap_or(UNKNOWN)
}

/// Parses one `manuf` row. The long name is preferred over the short one.
pub fn parse_line(line: &str) -> Option<OuiEntry> {
    let line: &str = line.trim_end();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let caps = MANUF_LINE.captures(line)?;
    let prefix: OuiPrefix = caps[1].parse().ok()?;
    let long: &str = caps[3].trim();
    let vendor: &str = if long.is_empty() { &caps[2] } else { long };

    Some(OuiEntry::new(prefix, vendor, categorize(vendor)))
}

pub fn parse(text: &str) -> Vec<OuiEntry> {
    text.lines().filter_map(parse_line).collect()
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

    #[test]
    fn categorizes_by_whole_words() {
        assert_eq!(categorize("Raspberry Pi Trading Ltd"), "Raspberry Pi");
        assert_eq!(categorize("TP-LINK TECHNOLOGIES CO.,LTD."), "Network Equipment");
        assert_eq!(categorize("LG Electronics"), "TV/Display");
        assert_eq!(categorize("Western Digital"), "Storage");
        assert_eq!(categorize("Sony Interactive Entertainment"), "Phone/TV");
        assert_eq!(categorize("Acme Engineering"), UNKNOWN);
        assert_eq!(categorize("Digital Lighting"), UNKNOWN);
        assert_eq!(categorize(""), UNKNOWN);
    }

    #[test]
    fn parses_rows_and_prefers_long_name() {
        let entry: OuiEntry = parse_line("00:00:0C\tCisco\tCisco Systems, Inc").unwrap();
        assert_eq!(entry.prefix.to_string(), "00:00:0c");
        assert_eq!(entry.vendor, "Cisco Systems, Inc");
        assert_eq!(entry.category, "Network Equipment");

        let short: OuiEntry = parse_line("00:1C:42\tParallels").unwrap();
        assert_eq!(short.vendor, "Parallels");
        assert_eq!(short.category, "Virtual");
    }

    #[test]
    fn skips_comments_blocks_and_noise() {
        let text: &str = "\
# Wireshark manuf
00:50:C2:00:00:00/36\tTLS\tT.L.S. Corp.

not a row
08:00:27\tPcsCompu\tPCS Systemtechnik GmbH
";
        let entries: Vec<OuiEntry> = parse(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].prefix.to_string(), "08:00:27");
    }
}
