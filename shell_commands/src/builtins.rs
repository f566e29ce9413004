//! Built-in commands other than `ls`

use crate::{CommandContext, CommandOutput, SessionEffect};

/// Summary lines printed by `help`, in order
pub const HELP_LINES: [&str; 11] = [
    "Available commands:",
    "help - display this help message",
    "clear - clear the terminal screen",
    "echo [text] - print text to the terminal",
    "ls - list files and directories",
    "cd [directory] - change directory",
    "cat [file] - display file contents",
    "pwd - print the current working directory",
    "whoami - print the current user",
    "date - print the current date and time",
    "exit - close the terminal and return to the frontend",
];

pub fn help() -> CommandOutput {
    CommandOutput::lines(HELP_LINES)
}

pub fn clear() -> CommandOutput {
    CommandOutput::effect(SessionEffect::ClearScreen)
}

/// Joins the arguments with single spaces; no quoting or escapes
pub fn echo(args: &[String]) -> CommandOutput {
    CommandOutput::line(args.join(" "))
}

/// Inert stub shared by `cd` and `cat`
pub fn not_implemented(name: &str) -> CommandOutput {
    CommandOutput::line(format!("{}: command not implemented yet", name))
}

pub fn pwd(ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::line(ctx.cwd)
}

pub fn whoami(ctx: &CommandContext<'_>) -> CommandOutput {
    CommandOutput::line(ctx.identity)
}

/// Long-form local time, e.g. `Mon Oct 19 2026 14:03:07 GMT+0000`
pub fn date(ctx: &CommandContext<'_>) -> CommandOutput {
    let now = ctx.clock.now();
    CommandOutput::line(now.format("%a %b %d %Y %H:%M:%S GMT%z").to_string())
}

pub fn reset() -> CommandOutput {
    CommandOutput::effect(SessionEffect::Reset)
}

pub fn exit() -> CommandOutput {
    CommandOutput::effect(SessionEffect::Exit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedClock, FixedSizes};
    use chrono::{FixedOffset, TimeZone};

    fn with_context<R>(f: impl FnOnce(&mut CommandContext<'_>) -> R) -> R {
        let clock = FixedClock(
            FixedOffset::east_opt(2 * 3600)
                .unwrap()
                .with_ymd_and_hms(2026, 10, 19, 14, 3, 7)
                .unwrap(),
        );
        let mut sizes = FixedSizes {
            bytes: 512,
            kilobytes: 3,
        };
        let mut ctx = CommandContext {
            cwd: "/home/user/",
            identity: "made by someone",
            clock: &clock,
            sizes: &mut sizes,
        };
        f(&mut ctx)
    }

    #[test]
    fn test_help_lines_in_order() {
        let output = help();
        assert_eq!(output.lines.len(), 11);
        assert_eq!(output.lines[0], "Available commands:");
        assert_eq!(output.lines[1], "help - display this help message");
        assert_eq!(output.effect, SessionEffect::None);
    }

    #[test]
    fn test_echo_joins_with_single_spaces() {
        let args = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(echo(&args).lines, vec!["a b c"]);
        assert_eq!(echo(&[]).lines, vec![""]);
    }

    #[test]
    fn test_echo_keeps_markup_verbatim() {
        let args = vec!["<b>hi</b>".to_string(), "\"q\"".to_string()];
        assert_eq!(echo(&args).lines, vec!["<b>hi</b> \"q\""]);
    }

    #[test]
    fn test_stubs() {
        assert_eq!(
            not_implemented("cd").lines,
            vec!["cd: command not implemented yet"]
        );
        assert_eq!(
            not_implemented("cat").lines,
            vec!["cat: command not implemented yet"]
        );
    }

    #[test]
    fn test_pwd_and_whoami() {
        with_context(|ctx| {
            assert_eq!(pwd(ctx).lines, vec!["/home/user/"]);
            assert_eq!(whoami(ctx).lines, vec!["made by someone"]);
        });
    }

    #[test]
    fn test_date_format() {
        let output = with_context(|ctx| date(ctx));
        assert_eq!(output.lines, vec!["Mon Oct 19 2026 14:03:07 GMT+0200"]);
    }

    #[test]
    fn test_effects() {
        assert_eq!(clear().effect, SessionEffect::ClearScreen);
        assert!(clear().lines.is_empty());
        assert_eq!(reset().effect, SessionEffect::Reset);
        assert_eq!(exit().effect, SessionEffect::Exit);
    }
}
