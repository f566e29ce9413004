//! Command dispatch
//!
//! Splits a submitted line, looks the name up, and runs the handler. An
//! unknown name is reported as a single output line, never as an error.

use tracing::{debug, info};

use crate::{CommandContext, CommandOutput, CommandRegistry};

/// Splits a line on spaces into a command name and its arguments
///
/// Runs of spaces do not produce empty arguments.
pub fn split_command_line(line: &str) -> Option<(&str, Vec<String>)> {
    let mut parts = line.split(' ').filter(|part| !part.is_empty());
    let name = parts.next()?;
    Some((name, parts.map(String::from).collect()))
}

/// Runs submitted lines against a registry
#[derive(Debug, Default)]
pub struct Dispatcher {
    registry: CommandRegistry,
}

impl Dispatcher {
    pub fn new(registry: CommandRegistry) -> Self {
        Self { registry }
    }

    /// Dispatcher with every built-in registered
    pub fn with_builtins() -> Self {
        Self::new(CommandRegistry::with_builtins())
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }

    /// Runs one command line
    pub fn dispatch(&self, line: &str, ctx: &mut CommandContext<'_>) -> CommandOutput {
        let Some((name, args)) = split_command_line(line) else {
            return CommandOutput::default();
        };

        match self.registry.lookup(name) {
            Some(handler) => {
                debug!(target: "dispatch", command = name, args = args.len(), "running command");
                handler.invoke(&args, ctx)
            }
            None => {
                info!(target: "dispatch", command = name, "command not found");
                CommandOutput::line(format!(
                    "bash: {}: command not found, try 'help'",
                    name
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommandHandler, FixedClock, FixedSizes, SessionEffect};
    use chrono::{FixedOffset, TimeZone};

    fn dispatch(dispatcher: &Dispatcher, line: &str) -> CommandOutput {
        let clock = FixedClock(
            FixedOffset::east_opt(0)
                .unwrap()
                .with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
                .unwrap(),
        );
        let mut sizes = FixedSizes {
            bytes: 100,
            kilobytes: 1,
        };
        let mut ctx = CommandContext {
            cwd: "/home/user/",
            identity: "someone",
            clock: &clock,
            sizes: &mut sizes,
        };
        dispatcher.dispatch(line, &mut ctx)
    }

    #[test]
    fn test_split_command_line() {
        let (name, args) = split_command_line("echo a b  c").unwrap();
        assert_eq!(name, "echo");
        assert_eq!(args, vec!["a", "b", "c"]);
        assert!(split_command_line("").is_none());
        assert!(split_command_line("   ").is_none());
    }

    #[test]
    fn test_echo_collapses_spacing() {
        let output = dispatch(&Dispatcher::with_builtins(), "echo a b  c");
        assert_eq!(output.lines, vec!["a b c"]);
    }

    #[test]
    fn test_unknown_command() {
        let output = dispatch(&Dispatcher::with_builtins(), "vim file.txt");
        assert_eq!(
            output.lines,
            vec!["bash: vim: command not found, try 'help'"]
        );
        assert_eq!(output.effect, SessionEffect::None);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let output = dispatch(&Dispatcher::with_builtins(), "LS");
        assert_eq!(output.lines, vec!["bash: LS: command not found, try 'help'"]);
    }

    #[test]
    fn test_pwd_uses_context() {
        let output = dispatch(&Dispatcher::with_builtins(), "pwd");
        assert_eq!(output.lines, vec!["/home/user/"]);
    }

    #[test]
    fn test_custom_handler_receives_args() {
        let mut dispatcher = Dispatcher::with_builtins();
        dispatcher.registry_mut().register(
            "count",
            CommandHandler::custom(|args| vec![args.len().to_string()]),
        );
        let output = dispatch(&dispatcher, "count x y z");
        assert_eq!(output.lines, vec!["3"]);
    }

    #[test]
    fn test_effect_commands() {
        let dispatcher = Dispatcher::with_builtins();
        assert_eq!(dispatch(&dispatcher, "clear").effect, SessionEffect::ClearScreen);
        assert_eq!(dispatch(&dispatcher, "reset").effect, SessionEffect::Reset);
        assert_eq!(dispatch(&dispatcher, "exit").effect, SessionEffect::Exit);
    }

    #[test]
    fn test_empty_registry_reports_everything_unknown() {
        let output = dispatch(&Dispatcher::default(), "help");
        assert_eq!(output.lines, vec!["bash: help: command not found, try 'help'"]);
    }
}
