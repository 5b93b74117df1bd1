use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lp-host")]
#[command(about = "Authenticate users against the credential authority and provision local accounts")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run one login; exits 0 only on success
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// User group administration
    Group {
        #[command(subcommand)]
        action: GroupCommands,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum GroupCommands {
    /// Create a group
    Add {
        #[arg(long)]
        name: String,
        /// Mark the group as a default for new users
        #[arg(long)]
        default: bool,
    },
    /// List all groups
    List,
}
