//! Terminal input and the blocking alert prompt.

use std::io::{self, BufRead as _, IsTerminal as _, Write as _};

use catalog_admin::console::Notifier;

/// Alerts on stderr and waits for Enter when attached to a terminal.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn alert(&mut self, message: &str) {
        eprintln!("! {message}");
        if !io::stdin().is_terminal() {
            return;
        }
        eprint!("  press Enter to continue");
        let _ = io::stderr().flush();
        let mut ack = String::new();
        if let Err(e) = io::stdin().lock().read_line(&mut ack) {
            tracing::debug!("Alert acknowledgement not read: {e}");
        }
    }
}

/// Prints `prompt` and reads one line, without its line ending.
///
/// Returns `None` at end of input.
pub fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Reads a password without echo on a terminal, or a plain line otherwise.
pub fn read_password(prompt: &str) -> io::Result<Option<String>> {
    if io::stdin().is_terminal() {
        rpassword::prompt_password(prompt).map(Some)
    } else {
        read_line(prompt)
    }
}
