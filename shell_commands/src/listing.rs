//! `ls` over the fixed directory table
//!
//! Accepts one optional flag cluster (`-alFh` and any subset). Entries are
//! sorted by name before flags apply; `-a` adds `.` and `..` after the sorted
//! entries.

use chrono::{DateTime, FixedOffset};
use thiserror::Error;
use tracing::debug;

use crate::{CommandContext, CommandOutput, SizeSource};

/// Kind of a listed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One entry of the fake directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeEntry {
    pub name: &'static str,
    pub kind: EntryKind,
}

impl FakeEntry {
    pub const fn dir(name: &'static str) -> Self {
        Self {
            name,
            kind: EntryKind::Directory,
        }
    }

    pub const fn file(name: &'static str) -> Self {
        Self {
            name,
            kind: EntryKind::File,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// The directory every `ls` lists
pub const FAKE_DIRECTORY: [FakeEntry; 7] = [
    FakeEntry::dir("media"),
    FakeEntry::dir("scripts"),
    FakeEntry::dir("styles"),
    FakeEntry::file("backend.html"),
    FakeEntry::file("index.html"),
    FakeEntry::file("package.json"),
    FakeEntry::file("README.md"),
];

const DOT_ENTRIES: [FakeEntry; 2] = [FakeEntry::dir("."), FakeEntry::dir("..")];

/// Flag parsing errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    #[error("ls: invalid option -- '{0}'")]
    InvalidOption(char),
}

/// Parsed `ls` flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingOptions {
    /// `-a`: include `.` and `..`
    pub all: bool,
    /// `-l`: one entry per line with details
    pub long: bool,
    /// `-F`: trailing `/` on directories
    pub classify: bool,
    /// `-h`: sizes in K (only visible with `-l`)
    pub human: bool,
}

impl ListingOptions {
    /// Parses the first argument if it is a flag cluster
    ///
    /// Anything after the first argument is ignored, as is a first argument
    /// that does not start with `-`.
    pub fn parse(args: &[String]) -> Result<Self, ListingError> {
        let mut options = Self::default();

        let Some(cluster) = args.first().and_then(|arg| arg.strip_prefix('-')) else {
            return Ok(options);
        };

        for flag in cluster.chars() {
            match flag {
                'a' => options.all = true,
                'l' => options.long = true,
                'F' => options.classify = true,
                'h' => options.human = true,
                other => return Err(ListingError::InvalidOption(other)),
            }
        }

        Ok(options)
    }
}

/// Render `entries` according to `options`
pub fn render_listing(
    entries: &[FakeEntry],
    options: ListingOptions,
    now: DateTime<FixedOffset>,
    sizes: &mut dyn SizeSource,
) -> Vec<String> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| a.name.cmp(b.name));
    if options.all {
        sorted.extend(DOT_ENTRIES);
    }

    let timestamp = now.format("%b %-d %H:%M").to_string();
    let items: Vec<String> = sorted
        .iter()
        .map(|entry| {
            let mut item = String::new();
            if options.long {
                item.push_str(&long_prefix(entry, options.human, &timestamp, sizes));
            }
            item.push_str(entry.name);
            if options.classify && entry.is_dir() {
                item.push('/');
            }
            item
        })
        .collect();

    if options.long {
        items
    } else {
        vec![items.join(" ")]
    }
}

/// `drwxr...  1 user user SIZE Mon D HH:MM ` for one entry
fn long_prefix(
    entry: &FakeEntry,
    human: bool,
    timestamp: &str,
    sizes: &mut dyn SizeSource,
) -> String {
    let kind = if entry.is_dir() { 'd' } else { '-' };
    let size = match (entry.is_dir(), human) {
        (true, true) => "4.0K".to_string(),
        (true, false) => "4096".to_string(),
        (false, true) => format!("{}.0K", sizes.human_file_size()),
        (false, false) => format!("{:>4}", sizes.file_size()),
    };

    format!("{}r--r--r--  1 user user {} {} ", kind, size, timestamp)
}

/// The `ls` built-in
pub fn ls(args: &[String], ctx: &mut CommandContext<'_>) -> CommandOutput {
    match ListingOptions::parse(args) {
        Ok(options) => {
            debug!(target: "ls", ?options, "listing");
            let now = ctx.clock.now();
            CommandOutput::lines(render_listing(&FAKE_DIRECTORY, options, now, ctx.sizes))
        }
        Err(err) => CommandOutput::lines([
            err.to_string(),
            "Try 'ls --help' for more information.".to_string(),
        ]),
    }
}
