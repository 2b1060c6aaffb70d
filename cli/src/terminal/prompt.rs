use colored::*;
use console::Term;
use findpi_common::error::ScanError;

/// Interprets the menu answer. Blank selects the first network.
pub fn select_network(input: &str, count: usize) -> Result<usize, ScanError> {
    let input: &str = input.trim();
    if input.is_empty() {
        return if count > 0 {
            Ok(0)
        } else {
            Err(ScanError::NoInterfaces)
        };
    }

    match input.parse::<usize>() {
        Ok(idx) if idx < count => Ok(idx),
        _ => Err(ScanError::InvalidSelection(input.to_string())),
    }
}

/// Asks on the terminal which of `count` networks to scan.
pub fn ask_network(count: usize) -> anyhow::Result<usize> {
    let term: Term = Term::stdout();
    term.write_str(&format!(
        "\n  {} [{}]: ",
        "Select network to scan".yellow(),
        "0".bright_white()
    ))?;
    let answer: String = term.read_line()?;
    Ok(select_network(&answer, count)?)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
