use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notez", bin_name = "notez", version)]
#[command(about = "A session-scoped note board for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json (defaults to $NOTEZ_CONFIG_DIR or the platform config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Do not touch the system clipboard when sharing
    #[arg(long)]
    pub no_clipboard: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get or set configuration
    Config {
        /// Configuration key (share-base-url, id-style, clipboard)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// One line typed into a session. The first word is the command name.
#[derive(Parser, Debug)]
#[command(multicall = true, color = ColorChoice::Never)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Create a new note
    #[command(alias = "n")]
    New {
        /// Title of the note
        title: Option<String>,

        /// Body of the note
        content: Option<String>,
    },

    /// List notes, most recent first
    #[command(alias = "ls")]
    List {
        /// Print the notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one or more notes in full
    #[command(alias = "v")]
    View {
        /// Positions, ranges or ids (e.g. 1 2-4 note-7)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Start editing a note
    #[command(alias = "e")]
    Edit {
        /// Position or id of the note
        selector: String,
    },

    /// Save the editor: updates the note being edited, or creates a new one
    Save {
        /// New title (keeps the current one when editing and omitted)
        title: Option<String>,

        /// New body (keeps the current one when editing and omitted)
        content: Option<String>,
    },

    /// Stop editing without saving
    Cancel,

    /// Delete one or more notes
    #[command(alias = "rm")]
    Delete {
        /// Positions, ranges or ids (e.g. 1 2-4 note-7)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Copy a share link for a note to the clipboard
    Share {
        /// Position or id of the note
        selector: String,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}
