//! # Terminal Session
//!
//! The explicit session state: constructed at session start, mutated once
//! per key event, and replaced wholesale by `reset`.

use console_transcript::{
    DisplaySurface, PromptLabel, RenderedLine, Transcript, TranscriptSnapshot,
};
use input_types::KeyEvent;
use line_editor::{InputInterpreter, TurnOutcome};
use shell_commands::{
    Clock, CommandContext, CommandHandler, CommandOutput, Dispatcher, RandomSizes, SessionEffect,
    SizeSource, SystemClock,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{HostConfig, InputScript};

/// Result of feeding one key to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// Still editing the current prompt line
    Continue,
    /// The turn ended; a fresh prompt is showing
    NewPrompt,
    /// `reset` restored the session-start transcript, which already ends in
    /// a prompt
    Reset,
    /// `exit` ran; the host should navigate to `location`
    Exited { location: String },
    /// The session already exited; the key was dropped
    Closed,
}

/// The interpreter's hookup to the display's key events
///
/// Recreated by `reset`; the old subscription stops counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSubscription {
    id: Uuid,
}

impl InputSubscription {
    fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

/// State that `reset` throws away
#[derive(Debug, Clone)]
struct ShellState {
    cwd: String,
    original_display: TranscriptSnapshot,
}

/// One terminal session over a display surface
pub struct Session<D: DisplaySurface = Transcript> {
    config: HostConfig,
    display: D,
    interpreter: InputInterpreter,
    dispatcher: Dispatcher,
    state: ShellState,
    subscription: InputSubscription,
    clock: Box<dyn Clock>,
    sizes: Box<dyn SizeSource>,
    exited: bool,
}

impl Session<Transcript> {
    /// Session over an in-memory transcript sized from the config
    pub fn with_transcript(config: HostConfig) -> Self {
        let transcript = Transcript::new(config.scrollback_limit);
        Self::new(config, transcript)
    }
}

impl<D: DisplaySurface> Session<D> {
    /// Starts a session with the wall clock and random `ls` sizes
    pub fn new(config: HostConfig, display: D) -> Self {
        let sizes = match config.size_seed {
            Some(seed) => RandomSizes::seeded(seed),
            None => RandomSizes::new(),
        };
        Self::with_sources(config, display, Box::new(SystemClock), Box::new(sizes))
    }

    /// Starts a session with explicit time and size sources
    ///
    /// The banner is appended to `display` and the result becomes the
    /// snapshot `reset` returns to.
    pub fn with_sources(
        config: HostConfig,
        mut display: D,
        clock: Box<dyn Clock>,
        sizes: Box<dyn SizeSource>,
    ) -> Self {
        for line in &config.banner {
            display.append_line(RenderedLine::output(line.as_str()));
        }

        let state = ShellState {
            cwd: config.home_dir.clone(),
            original_display: display.snapshot(),
        };
        let subscription = InputSubscription::new();
        info!(target: "session", subscription = %subscription.id(), "session started");

        Self {
            interpreter: InputInterpreter::new(config.edit_mode),
            dispatcher: Dispatcher::with_builtins(),
            config,
            display,
            state,
            subscription,
            clock,
            sizes,
            exited: false,
        }
    }

    /// Registers an extra command; last registration wins
    pub fn register_command(&mut self, name: impl Into<String>, handler: CommandHandler) {
        self.dispatcher.registry_mut().register(name, handler);
    }

    /// Feeds one key event through the current turn
    pub fn handle_key(&mut self, event: &mut KeyEvent) -> SessionStatus {
        if self.exited {
            return SessionStatus::Closed;
        }

        match self.interpreter.apply_key(event) {
            TurnOutcome::Ignored | TurnOutcome::Edited => SessionStatus::Continue,
            TurnOutcome::Blank { raw } => {
                self.finish_prompt(raw);
                SessionStatus::NewPrompt
            }
            TurnOutcome::Interrupted { echo } => {
                self.finish_prompt(echo);
                SessionStatus::NewPrompt
            }
            TurnOutcome::Submitted { raw, command } => {
                self.finish_prompt(raw);
                let output = self.run_command(&command);
                self.apply_output(output)
            }
        }
    }

    /// Types `text` and presses Enter
    pub fn submit_line(&mut self, text: &str) -> SessionStatus {
        let script = InputScript::from_typed_lines([text]);
        self.replay(script)
    }

    /// Feeds every event of a script, stopping early once the session exits
    pub fn replay(&mut self, script: InputScript) -> SessionStatus {
        let mut status = SessionStatus::Continue;
        for mut event in script {
            status = self.handle_key(&mut event);
            if matches!(status, SessionStatus::Exited { .. } | SessionStatus::Closed) {
                break;
            }
        }
        status
    }

    fn finish_prompt(&mut self, input: String) {
        let label = self.prompt_label();
        self.display.append_line(RenderedLine::prompt(label, input));
    }

    fn run_command(&mut self, command: &str) -> CommandOutput {
        let mut ctx = CommandContext {
            cwd: &self.state.cwd,
            identity: &self.config.identity,
            clock: self.clock.as_ref(),
            sizes: self.sizes.as_mut(),
        };
        self.dispatcher.dispatch(command, &mut ctx)
    }

    fn apply_output(&mut self, output: CommandOutput) -> SessionStatus {
        for line in output.lines {
            self.display.append_line(RenderedLine::Output(line));
        }

        match output.effect {
            SessionEffect::None => SessionStatus::NewPrompt,
            SessionEffect::ClearScreen => {
                self.display.clear();
                self.interpreter.clear_line();
                SessionStatus::NewPrompt
            }
            SessionEffect::Reset => {
                self.reset();
                SessionStatus::Reset
            }
            SessionEffect::Exit => {
                self.exited = true;
                info!(target: "session", location = %self.config.exit_location, "exit");
                SessionStatus::Exited {
                    location: self.config.exit_location.clone(),
                }
            }
        }
    }

    /// Restores the session-start transcript and working directory, empties
    /// the prompt line, and resubscribes to input
    ///
    /// History and registered commands survive.
    pub fn reset(&mut self) {
        self.display.restore(&self.state.original_display);
        self.state = ShellState {
            cwd: self.config.home_dir.clone(),
            original_display: self.display.snapshot(),
        };

        let history = std::mem::take(&mut self.interpreter).into_history();
        self.interpreter = InputInterpreter::with_history(self.config.edit_mode, history);

        let previous = self.subscription;
        self.subscription = InputSubscription::new();
        debug!(
            target: "session",
            previous = %previous.id(),
            current = %self.subscription.id(),
            "input resubscribed"
        );
        info!(target: "session", "session reset");
    }

    /// Prompt prefix for the current directory
    pub fn prompt_label(&self) -> PromptLabel {
        PromptLabel::new(
            &self.config.user,
            &self.config.host,
            &self.config.home_dir,
            &self.state.cwd,
        )
    }

    /// The live prompt line as it should be drawn
    pub fn prompt_line(&self) -> String {
        format!("{}{}", self.prompt_label(), self.interpreter.buffer().text())
    }

    pub fn current_directory(&self) -> &str {
        &self.state.cwd
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn interpreter(&self) -> &InputInterpreter {
        &self.interpreter
    }

    pub fn subscription(&self) -> InputSubscription {
        self.subscription
    }

    pub fn is_exited(&self) -> bool {
        self.exited
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use input_types::KeyCode;
    use shell_commands::FixedSizes;

    fn session() -> Session {
        let config = HostConfig {
            banner: vec!["Welcome".to_string()],
            ..HostConfig::default()
        };
        Session::with_sources(
            config,
            Transcript::default(),
            Box::new(SystemClock),
            Box::new(FixedSizes {
                bytes: 100,
                kilobytes: 1,
            }),
        )
    }

    fn text(session: &Session) -> Vec<String> {
        session.display().to_text_lines()
    }

    #[test]
    fn test_banner_is_shown() {
        let session = session();
        assert_eq!(text(&session), vec!["Welcome"]);
        assert_eq!(session.prompt_line(), "user@localhost:~/ $ ");
    }

    #[test]
    fn test_submit_renders_prompt_and_output() {
        let mut session = session();
        assert_eq!(session.submit_line("echo hi"), SessionStatus::NewPrompt);
        assert_eq!(
            text(&session),
            vec!["Welcome", "user@localhost:~/ $ echo hi", "hi"]
        );
    }

    #[test]
    fn test_typing_shows_in_prompt_line() {
        let mut session = session();
        for ch in "pwd".chars() {
            assert_eq!(
                session.handle_key(&mut KeyEvent::char(ch)),
                SessionStatus::Continue
            );
        }
        assert_eq!(session.prompt_line(), "user@localhost:~/ $ pwd");
    }

    #[test]
    fn test_clear_wipes_transcript() {
        let mut session = session();
        session.submit_line("echo one");
        session.submit_line("clear");
        assert!(session.display().is_empty());
        assert_eq!(session.interpreter().history().len(), 2);
    }

    #[test]
    fn test_reset_replaces_state() {
        let mut session = session();
        let before = session.subscription();
        session.submit_line("help");
        assert_eq!(session.submit_line("reset"), SessionStatus::Reset);

        assert_eq!(text(&session), vec!["Welcome"]);
        assert_eq!(session.current_directory(), "/home/user/");
        assert_ne!(session.subscription(), before);
        assert_eq!(session.interpreter().history().entries(), &["help", "reset"]);
    }

    #[test]
    fn test_exit_closes_session() {
        let mut session = session();
        assert_eq!(
            session.submit_line("exit"),
            SessionStatus::Exited {
                location: "index.html".to_string()
            }
        );
        assert!(session.is_exited());

        let mut event = KeyEvent::char('x');
        assert_eq!(session.handle_key(&mut event), SessionStatus::Closed);
        assert!(!event.is_consumed());
    }

    #[test]
    fn test_ignored_key_continues() {
        let mut session = session();
        let mut event = KeyEvent::plain(KeyCode::Tab);
        assert_eq!(session.handle_key(&mut event), SessionStatus::Continue);
        assert!(!event.is_consumed());
    }

    #[test]
    fn test_registered_command_runs() {
        let mut session = session();
        session.register_command(
            "projects",
            CommandHandler::custom(|_| vec!["webterm".to_string(), "pandas".to_string()]),
        );
        session.submit_line("projects");
        assert_eq!(text(&session)[2..], ["webterm", "pandas"]);
    }
}
