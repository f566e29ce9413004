//! Command registry
//!
//! Maps command names to handlers. Registering a name twice replaces the
//! earlier handler.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::{builtins, listing, CommandContext, CommandOutput};

/// Handler for commands registered from outside this crate
pub type CustomHandler = Box<dyn Fn(&[String]) -> Vec<String> + Send + Sync>;

/// Commands implemented by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Help,
    Clear,
    Echo,
    Ls,
    Cd,
    Cat,
    Pwd,
    Whoami,
    Date,
    Reset,
    Exit,
}

impl Builtin {
    /// Every built-in, in registration order
    pub const ALL: [Builtin; 11] = [
        Builtin::Help,
        Builtin::Clear,
        Builtin::Echo,
        Builtin::Ls,
        Builtin::Cd,
        Builtin::Cat,
        Builtin::Pwd,
        Builtin::Whoami,
        Builtin::Date,
        Builtin::Reset,
        Builtin::Exit,
    ];

    /// Name the command is registered under
    pub fn name(&self) -> &'static str {
        match self {
            Builtin::Help => "help",
            Builtin::Clear => "clear",
            Builtin::Echo => "echo",
            Builtin::Ls => "ls",
            Builtin::Cd => "cd",
            Builtin::Cat => "cat",
            Builtin::Pwd => "pwd",
            Builtin::Whoami => "whoami",
            Builtin::Date => "date",
            Builtin::Reset => "reset",
            Builtin::Exit => "exit",
        }
    }

    /// Runs the built-in
    pub fn run(&self, args: &[String], ctx: &mut CommandContext<'_>) -> CommandOutput {
        match self {
            Builtin::Help => builtins::help(),
            Builtin::Clear => builtins::clear(),
            Builtin::Echo => builtins::echo(args),
            Builtin::Ls => listing::ls(args, ctx),
            Builtin::Cd => builtins::not_implemented("cd"),
            Builtin::Cat => builtins::not_implemented("cat"),
            Builtin::Pwd => builtins::pwd(ctx),
            Builtin::Whoami => builtins::whoami(ctx),
            Builtin::Date => builtins::date(ctx),
            Builtin::Reset => builtins::reset(),
            Builtin::Exit => builtins::exit(),
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A registered handler
pub enum CommandHandler {
    Builtin(Builtin),
    Custom(CustomHandler),
}

impl CommandHandler {
    /// Wraps a closure as a handler
    pub fn custom<F>(handler: F) -> Self
    where
        F: Fn(&[String]) -> Vec<String> + Send + Sync + 'static,
    {
        Self::Custom(Box::new(handler))
    }

    pub fn invoke(&self, args: &[String], ctx: &mut CommandContext<'_>) -> CommandOutput {
        match self {
            Self::Builtin(builtin) => builtin.run(args, ctx),
            Self::Custom(handler) => CommandOutput::lines(handler(args)),
        }
    }
}

impl fmt::Debug for CommandHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(builtin) => f.debug_tuple("Builtin").field(builtin).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Name-to-handler table
#[derive(Debug, Default)]
pub struct CommandRegistry {
    handlers: HashMap<String, CommandHandler>,
}

impl CommandRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with every built-in registered
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for builtin in Builtin::ALL {
            registry.register(builtin.name(), CommandHandler::Builtin(builtin));
        }
        registry
    }

    /// Registers a handler, returning the one it replaced
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: CommandHandler,
    ) -> Option<CommandHandler> {
        let name = name.into();
        let previous = self.handlers.insert(name.clone(), handler);
        if previous.is_some() {
            debug!(target: "registry", command = %name, "handler replaced");
        }
        previous
    }

    pub fn lookup(&self, name: &str) -> Option<&CommandHandler> {
        self.handlers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
