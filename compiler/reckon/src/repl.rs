//! Line-oriented session driver used by the interactive loop.
//!
//! [`ReplSession::handle_line`] does all the work without touching the
//! terminal, so the binary only has to read lines and print what comes back.

use reckon_parser::validator::is_command;

use crate::calculator::Calculator;
use crate::format::format_result;
use crate::session::DEFAULT_SLOT;

/// Entries shown by the `history` command.
const HISTORY_LISTING: usize = 10;

const HELP: &[&str] = &[
    "operators: + - * / % ^ (** is accepted for ^)",
    "functions: sin cos tan asin acos atan sinh cosh tanh log ln sqrt exp",
    "           abs ceil floor round fact cbrt deg rad",
    "constants: pi e",
    "commands:",
    "  m+       store the last result in memory",
    "  mr       recall the memory value",
    "  mc       clear the memory value",
    "  memory   show every memory slot",
    "  history  show recent calculations",
    "  stats    show session statistics",
    "  clear    clear history and memory",
    "  help     show this help",
    "  quit     leave the calculator",
];

/// What the caller should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub exit: bool,
}

impl Reply {
    fn lines<I: IntoIterator<Item = String>>(lines: I) -> Self {
        Self {
            lines: lines.into_iter().collect(),
            exit: false,
        }
    }

    fn line<S: Into<String>>(line: S) -> Self {
        Self::lines([line.into()])
    }

    fn exit() -> Self {
        Self {
            lines: Vec::new(),
            exit: true,
        }
    }
}

#[derive(Debug, Default)]
pub struct ReplSession {
    calculator: Calculator,
}

impl ReplSession {
    pub fn new(calculator: Calculator) -> Self {
        Self { calculator }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn prompt(&self) -> &'static str {
        "reckon> "
    }

    pub fn handle_line(&mut self, line: &str) -> Reply {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Reply::lines([]);
        }
        if trimmed.eq_ignore_ascii_case("exit") {
            return Reply::exit();
        }
        if is_command(trimmed) {
            return self.handle_command(&trimmed.to_ascii_lowercase());
        }

        match self.calculator.evaluate(trimmed) {
            Ok(value) => {
                let mut lines = vec![format!("= {}", format_result(value))];
                if let Ok(stored) = self.calculator.recall(DEFAULT_SLOT) {
                    lines.push(format!("{DEFAULT_SLOT} = {}", format_result(stored)));
                }
                Reply::lines(lines)
            }
            Err(err) => Reply::line(format!("error: {err}")),
        }
    }

    fn handle_command(&mut self, command: &str) -> Reply {
        match command {
            "help" => Reply::lines(HELP.iter().map(|l| l.to_string())),
            "quit" => Reply::exit(),
            "history" => Reply::lines(
                self.calculator
                    .history()
                    .formatted(HISTORY_LISTING)
                    .lines()
                    .map(str::to_string),
            ),
            "clear" => {
                self.calculator.clear_all();
                Reply::line("history and memory cleared")
            }
            "m+" => match self.calculator.store_last() {
                Some(Ok(value)) => Reply::line(format!("{DEFAULT_SLOT} = {}", format_result(value))),
                Some(Err(err)) => Reply::line(format!("error: {err}")),
                None => Reply::line("error: no result to store, make a calculation first"),
            },
            "mr" => match self.calculator.recall(DEFAULT_SLOT) {
                Ok(value) => Reply::line(format!("{DEFAULT_SLOT} = {}", format_result(value))),
                Err(err) => Reply::line(format!("error: {err}")),
            },
            "mc" => {
                self.calculator.clear_memory();
                Reply::line("memory cleared")
            }
            "memory" => {
                let memory = self.calculator.memory();
                if memory.is_empty() {
                    return Reply::line("memory is empty");
                }
                let mut lines: Vec<String> = memory
                    .iter()
                    .map(|(slot, value)| format!("{slot} = {}", format_result(value)))
                    .collect();
                lines.push(format!("{}/{} slots used", memory.len(), memory.capacity()));
                Reply::lines(lines)
            }
            "stats" => Reply::lines(
                self.calculator
                    .statistics()
                    .to_string()
                    .lines()
                    .map(str::to_string),
            ),
            "export" => Reply::line("error: exporting history is not supported"),
            other => Reply::line(format!("error: unknown command '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn evaluates_expressions() {
        let mut s = ReplSession::default();
        assert_eq!(s.handle_line("2 + 3 * 4").lines, vec!["= 14"]);
        assert_eq!(s.handle_line("1 / 4").lines, vec!["= 0.25"]);
    }

    #[test]
    fn reports_errors_without_exiting() {
        let mut s = ReplSession::default();
        let reply = s.handle_line("10 / 0");
        assert!(!reply.exit);
        assert_eq!(reply.lines, vec!["error: Math error: Division by zero"]);
    }

    #[test]
    fn blank_lines_do_nothing() {
        let mut s = ReplSession::default();
        assert_eq!(s.handle_line("   "), Reply::lines([]));
    }

    #[test]
    fn quit_and_exit() {
        let mut s = ReplSession::default();
        assert!(s.handle_line("quit").exit);
        assert!(s.handle_line("QUIT").exit);
        assert!(s.handle_line("exit").exit);
    }

    #[test]
    fn help_lists_commands() {
        let mut s = ReplSession::default();
        let reply = s.handle_line("help");
        assert!(reply.lines.iter().any(|l| l.starts_with("commands:")));
    }

    #[test]
    fn memory_commands() {
        let mut s = ReplSession::default();
        assert!(s.handle_line("m+").lines[0].starts_with("error:"));

        assert_eq!(s.handle_line("6 * 7").lines, vec!["= 42"]);
        assert_eq!(s.handle_line("m+").lines, vec!["M = 42"]);
        assert_eq!(s.handle_line("1 + 1").lines, vec!["= 2", "M = 42"]);
        assert_eq!(s.handle_line("mr").lines, vec!["M = 42"]);
        assert_eq!(s.handle_line("memory").lines, vec!["M = 42", "1/26 slots used"]);
        s.handle_line("mc");
        assert!(s.handle_line("mr").lines[0].starts_with("error:"));
        assert_eq!(s.handle_line("memory").lines, vec!["memory is empty"]);
    }

    #[test]
    fn history_and_clear() {
        let mut s = ReplSession::default();
        s.handle_line("1 + 1");
        s.handle_line("2 + 2");
        let listing = s.handle_line("history").lines;
        assert!(listing[1].starts_with("1. 2 + 2 = 4"));
        assert!(listing[2].starts_with("2. 1 + 1 = 2"));

        s.handle_line("clear");
        assert!(s.calculator().history().is_empty());
        assert_eq!(
            s.handle_line("history").lines,
            vec!["No calculations in history yet"]
        );
    }

    #[test]
    fn stats_and_export() {
        let mut s = ReplSession::default();
        assert!(s
            .handle_line("stats")
            .lines
            .iter()
            .any(|l| l == "Parser: Shunting-Yard"));
        assert!(s.handle_line("export").lines[0].contains("not supported"));
    }
}
