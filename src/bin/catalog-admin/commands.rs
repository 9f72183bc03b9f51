//! Commands accepted at the catalog prompt.

use std::str::FromStr;

/// One line typed at the `catalog>` prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Redraw the product table.
    List,
    /// Show the 1-based row in the detail panel.
    Show(usize),
    /// Ask the API whether the session is live.
    Check,
    /// Reload the catalog.
    Refresh,
    /// Forget the token and return to the login form.
    Logout,
    /// Print the command summary.
    Help,
    /// Leave the program.
    Quit,
}

pub const HELP: &str = "\
Commands:
  list          show the product table
  show <row>    show the product in the given row
  check         ask the API whether the session is live
  refresh       reload the product list
  logout        forget the session and sign in again
  help          show this message
  quit          exit";

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(Self::List);
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "list" | "ls" => Self::List,
            "show" => {
                let row = words
                    .next()
                    .ok_or_else(|| "usage: show <row>".to_string())?;
                let row: usize = row
                    .parse()
                    .map_err(|_| format!("not a row number: {row}"))?;
                if row == 0 {
                    return Err("rows are numbered from 1".to_string());
                }
                Self::Show(row)
            }
            "check" => Self::Check,
            "refresh" => Self::Refresh,
            "logout" => Self::Logout,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(format!("unknown command: {other} (try `help`)")),
        };

        if words.next().is_some() {
            return Err(format!("too many arguments for `{name}`"));
        }
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_commands() {
        assert_eq!("list".parse::<Command>(), Ok(Command::List));
        assert_eq!("  show 3 ".parse::<Command>(), Ok(Command::Show(3)));
        assert_eq!("CHECK".parse::<Command>(), Ok(Command::Check));
        assert_eq!("refresh".parse::<Command>(), Ok(Command::Refresh));
        assert_eq!("logout".parse::<Command>(), Ok(Command::Logout));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("".parse::<Command>(), Ok(Command::List));
    }

    #[test]
    fn test_rejects_bad_rows() {
        assert!("show".parse::<Command>().is_err());
        assert!("show zero".parse::<Command>().is_err());
        assert!("show 0".parse::<Command>().is_err());
        assert!("show 1 2".parse::<Command>().is_err());
    }

    #[test]
    fn test_rejects_unknown_command() {
        let err = "delete 1".parse::<Command>().unwrap_err();
        assert!(err.contains("delete"));
    }
}
