use std::str::FromStr;

/// One line of shell input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    CopyAll,
    Clear,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown command `{0}`, type `help` for the list")]
pub struct UnknownCommand(pub String);

impl ShellCommand {
    /// Parse a raw input line. Blank lines yield `Ok(None)`.
    pub fn parse_line(line: &str) -> Result<Option<Self>, UnknownCommand> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for ShellCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "list" | "ls" => Ok(Self::List),
            "copy" | "c" => Ok(Self::CopyAll),
            "clear" => Ok(Self::Clear),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            _ => Err(UnknownCommand(s.to_string())),
        }
    }
}

pub const HELP: &str = "\
Commands:
  list, ls     show the collected entries
  copy, c      copy all entries to the clipboard, one per line
  clear        forget every entry
  help, ?      show this help
  quit, q      save the history and exit (also Ctrl-C or Ctrl-D)";
