use clap::{Parser, Subcommand};
use std::path::PathBuf;
use ticklist::config::DEFAULT_CONFIG_PATH;

#[derive(Parser, Debug)]
#[command(name = "ticklist", version)]
#[command(about = "A two-list checklist: todo items and passed items", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file holding the data file path (a relative data file path is
    /// resolved against this file's directory)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Regex filter for todo items (matched at the start, spaces ignored)
    #[arg(short = 't', long, global = true, default_value = "")]
    pub todo_filter: String,

    /// Regex filter for pass items (matched at the start, spaces ignored)
    #[arg(short = 'p', long, global = true, default_value = "")]
    pub pass_filter: String,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show both lists
    #[command(alias = "ls")]
    List,

    /// Add a todo item
    #[command(alias = "a")]
    Add {
        /// Item text (prompts when omitted)
        text: Option<String>,
    },

    /// Edit the todo item shown at ROW
    #[command(alias = "e")]
    Edit {
        /// Row as shown by `list` with the same filters
        row: usize,

        /// New text (prompts when omitted)
        text: Option<String>,
    },

    /// Send the todo item shown at ROW to the pass list
    #[command(alias = "d")]
    Done {
        /// Row as shown by `list` with the same filters
        row: usize,

        /// Skip the confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Send the pass item shown at ROW back to the todo list
    #[command(alias = "r")]
    Reopen {
        /// Row as shown by `list` with the same filters
        row: usize,

        /// Skip the confirmation
        #[arg(short, long)]
        yes: bool,
    },
}
