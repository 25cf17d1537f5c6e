//! ANSI escape sequences used in shell output.

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
/// Rosé Pine "foam" as 24-bit colour, used by the prompt.
pub const FOAM: &str = "\x1b[38;2;156;207;216m";

/// Wrap `text` in `color` and a reset.
pub fn paint(color: &str, text: &str) -> String {
    format!("{color}{text}{RESET}")
}

/// One row of colour swatches: backgrounds `base..base+8`.
pub(crate) fn swatches(base: u8) -> String {
    let mut row: String = (base..base + 8).map(|c| format!("\x1b[{c}m  ")).collect();
    row.push_str(RESET);
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_wraps_and_resets() {
        assert_eq!(paint(CYAN, "docs"), "\x1b[36mdocs\x1b[0m");
    }

    #[test]
    fn swatch_row_has_eight_cells() {
        let row = swatches(40);
        assert!(row.starts_with("\x1b[40m  "));
        assert!(row.contains("\x1b[47m  "));
        assert_eq!(row.matches("m  ").count(), 8);
    }
}
