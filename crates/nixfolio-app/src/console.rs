//! Line-mode console front end: stdin lines in, terminal stream out.

use std::io::{self, Write};

use nixfolio_terminal::TermOutput;
use nixfolio_types::input::{Key, KeyEvent};

/// ANSI "erase display, cursor home".
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Key presses for one typed line, ending with Enter.
///
/// Tab and backspace/delete characters in the line become their keys.
pub fn line_to_keys(line: &str) -> Vec<KeyEvent> {
    line.chars()
        .map(|c| match c {
            '\t' => Key::Tab,
            '\x08' | '\x7f' => Key::Backspace,
            c => Key::Char(c),
        })
        .chain(std::iter::once(Key::Enter))
        .map(KeyEvent::from)
        .collect()
}

/// Write terminal output to `out`.
pub fn render(outputs: &[TermOutput], out: &mut impl Write) -> io::Result<()> {
    for item in outputs {
        match item {
            TermOutput::Write(text) => out.write_all(text.as_bytes())?,
            TermOutput::ClearScreen => out.write_all(CLEAR_SCREEN.as_bytes())?,
        }
    }
    out.flush()
}
