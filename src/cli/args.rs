//! Flag definitions.
//!
//! The flags live in a [`clap::Command`] so that one description drives
//! both token matching and the rendered usage text. Matching itself is done
//! by [`crate::plan::parse_args`], because interval tokens such as `-0:30`
//! look like flags to a conventional parser.

use clap::{Arg, ArgAction, Command};

use crate::constants::APP_NAME;

/// A recognized command line flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    /// Show usage and do no work.
    Help,
    /// Echo external commands and progress notes.
    Verbose,
    /// Overwrite an existing output file.
    Force,
}

impl Flag {
    const ALL: [Self; 3] = [Self::Help, Self::Verbose, Self::Force];

    fn id(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Verbose => "verbose",
            Self::Force => "force",
        }
    }

    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.id() == id)
    }
}

/// Lookup table over the flag definitions.
#[derive(Debug, Clone)]
pub struct FlagTable {
    command: Command,
}

impl FlagTable {
    /// Build the table from [`command`].
    #[must_use]
    pub fn new() -> Self {
        Self { command: command() }
    }

    /// Match a long flag name (without the leading `--`). Exact match only.
    #[must_use]
    pub fn long(&self, name: &str) -> Option<Flag> {
        self.command
            .get_arguments()
            .find(|arg| arg.get_long() == Some(name))
            .and_then(|arg| Flag::from_id(arg.get_id().as_str()))
    }

    /// Match a single short flag character, including visible aliases.
    #[must_use]
    pub fn short(&self, c: char) -> Option<Flag> {
        self.command
            .get_arguments()
            .find(|arg| {
                arg.get_short_and_visible_aliases()
                    .is_some_and(|shorts| shorts.contains(&c))
            })
            .and_then(|arg| Flag::from_id(arg.get_id().as_str()))
    }
}

impl Default for FlagTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Command line description used for flag lookup and usage rendering.
#[must_use]
pub fn command() -> Command {
    Command::new(APP_NAME)
        .about("Cut time ranges out of a media file and join them into one file")
        .override_usage(
            "ffcut [--help|-h] [--verbose|-v] [--force|-f] <INPUT> <INTERVAL>...",
        )
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new(Flag::Help.id())
                .short('h')
                .visible_short_alias('?')
                .long("help")
                .action(ArgAction::SetTrue)
                .help("Show usage"),
        )
        .arg(
            Arg::new(Flag::Verbose.id())
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Show detailed progress messages"),
        )
        .arg(
            Arg::new(Flag::Force.id())
                .short('f')
                .long("force")
                .action(ArgAction::SetTrue)
                .help("Overwrite existing files"),
        )
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("Media file to cut"),
        )
        .arg(
            Arg::new("intervals")
                .value_name("INTERVAL")
                .num_args(1..)
                .help("Range to keep: <from>-<to>, <from>-, -<to> or <from>"),
        )
        .after_help(
            "Times are H:MM:SS, M:SS or SS, each field one or two digits.\n\
             Ranges are joined in the order given into <INPUT stem>-cut.<ext>.",
        )
}
