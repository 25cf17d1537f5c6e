//! The `fastfetch` system-information banner.

use crate::ansi::{BLUE, CYAN, GREEN, RED, RESET, YELLOW, paint, swatches};
use crate::shell::ShellState;

/// Snowflake logo rows, each split into a cyan and a blue half.
const LOGO: [(&str, &str); 12] = [
    ("     \\\\  ", "  \\\\ //    "),
    ("    ==\\\\__", "\\\\/ //     "),
    ("      //  ", " \\\\//      "),
    ("   ==//   ", "  //==     "),
    ("    //\\\\  ", " //        "),
    ("   //  \\\\_", "//         "),
    ("  ___ \\\\  ", " \\\\__      "),
    (" //   \\\\  ", "  \\\\       "),
    ("//  ==\\\\==", "==\\\\==     "),
    ("      //  ", "   \\\\      "),
    ("     //   ", "    \\\\     "),
    ("          ", "           "),
];

const FIELDS: [(&str, &str); 8] = [
    ("OS", "NixOS (Portfolio Edition)"),
    ("Host", "Hetav Shah"),
    ("Kernel", "nixfolio"),
    ("Packages", "TypeScript, Python, Nix"),
    ("Shell", "nix-shell"),
    ("DE", "GNOME (Web Edition)"),
    ("Theme", "Rosé Pine"),
    ("Contact", "github.com/Hetav21"),
];

/// Render the banner for this shell's user and host.
pub fn fastfetch(shell: &ShellState) -> String {
    let title = format!(
        "{}{}{}",
        paint(YELLOW, &shell.user),
        paint(RED, "@"),
        paint(GREEN, &shell.hostname)
    );
    let rule = paint(CYAN, &"─".repeat(shell.user.chars().count() + shell.hostname.chars().count() + 1));
    let arrow = paint(BLUE, "→");

    let mut info = vec![title, rule];
    info.extend(
        FIELDS
            .iter()
            .map(|(key, value)| format!("{} {arrow} {value}", paint(CYAN, key))),
    );
    info.push(swatches(40));
    info.push(swatches(100));

    let mut out = String::from("\n");
    for (i, (cyan, blue)) in LOGO.iter().enumerate() {
        out.push_str(CYAN);
        out.push_str(cyan);
        out.push_str(BLUE);
        out.push_str(blue);
        out.push_str(RESET);
        if let Some(line) = info.get(i) {
            out.push_str("   ");
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}
