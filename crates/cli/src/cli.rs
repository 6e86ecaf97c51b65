// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Ids,
}

// Custom help template that groups commands into sections
const HELP_TEMPLATE: &str = "{about-with-newline}
{usage-heading} {usage}

{before-help}Options:
{options}{after-help}";

const COMMANDS_HELP: &str = "\
Board:
  issues      List the sprint's issues, filtered
  assignees   List the assignee palette

Sprints:
  sprint      List, show, start or end sprints

Issues:
  issue       Create, show, edit or delete an issue

Organization:
  users       List assignable users

Shell:
  completion  Generate shell completion script

";

const QUICKSTART: &str = "
Quick start:
  sb issues -q login -p high     Search the current sprint
  sb sprint start                Start the current sprint
  sb issue new \"Fix crash\"       Create an issue in the current sprint";

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

#[derive(Parser)]
#[command(name = "sb")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A sprint board for filtering issues and moving sprints along")]
#[command(help_template = HELP_TEMPLATE)]
#[command(before_help = COMMANDS_HELP)]
#[command(after_help = QUICKSTART)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Overrides for `.sprintboard.toml`.
#[derive(Args, Clone, Debug, Default)]
pub struct GlobalArgs {
    /// Board file to use
    #[arg(long, global = true, value_name = "path")]
    pub board: Option<PathBuf>,

    /// Act as this user id
    #[arg(long = "as", global = true, value_name = "user")]
    pub user: Option<String>,

    /// Organization id for user listing
    #[arg(long, global = true, value_name = "org")]
    pub org: Option<String>,
}

/// Filter arguments shared by the board listings.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Sprint to show (defaults to the active or next planned sprint)
    #[arg(long, short)]
    pub sprint: Option<String>,

    /// Case-insensitive search in issue titles
    #[arg(long = "search", short = 'q', value_name = "term")]
    pub search: Option<String>,

    /// Select an assignee (repeat or comma-separate for OR)
    #[arg(long, short, value_delimiter = ',')]
    pub assignee: Vec<String>,

    /// Filter by priority (low, medium, high, urgent)
    #[arg(long, short)]
    pub priority: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the sprint's issues, filtered
    #[command(after_help = "\
Examples:
  sb issues                       All issues in the current sprint
  sb issues -q login              Title contains 'login'
  sb issues -a u-ada,u-bob        Assigned to Ada or Bob
  sb issues -p urgent -o json     Urgent issues as JSON")]
    Issues {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List the assignee palette of a sprint
    Assignees {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Sprint commands
    #[command(subcommand)]
    Sprint(SprintCommand),

    /// Issue commands
    #[command(subcommand)]
    Issue(IssueCommand),

    /// List users of the organization
    Users {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum SprintCommand {
    /// List sprints
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show a sprint's status and offered actions
    Show {
        /// Sprint id (defaults to the active or next planned sprint)
        id: Option<String>,

        /// Evaluate at this instant (RFC 3339) instead of now
        #[arg(long, value_name = "time")]
        now: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Start a planned sprint inside its date window
    Start {
        /// Sprint id (defaults to the active or next planned sprint)
        id: Option<String>,

        /// Evaluate at this instant (RFC 3339) instead of now
        #[arg(long, value_name = "time")]
        now: Option<String>,
    },

    /// End an active sprint
    End {
        /// Sprint id (defaults to the active or next planned sprint)
        id: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum IssueCommand {
    /// Create an issue
    #[command(after_help = "\
Examples:
  sb issue new \"Fix crash\"                   Medium priority, unassigned
  sb issue new \"Fix crash\" -p urgent -a u-bob
  sb issue new \"Spike\" --status in-progress --sprint s-2")]
    New {
        /// Issue title
        #[arg(value_parser = non_empty_string)]
        title: String,

        /// Description
        #[arg(long, short)]
        description: Option<String>,

        /// Priority (low, medium, high, urgent)
        #[arg(long, short)]
        priority: Option<String>,

        /// Assignee user id
        #[arg(long, short)]
        assignee: Option<String>,

        /// Initial status (todo, in-progress, in-review, done)
        #[arg(long)]
        status: Option<String>,

        /// Sprint id (defaults to the active or next planned sprint)
        #[arg(long, short)]
        sprint: Option<String>,

        /// Project id (defaults to the sprint's project)
        #[arg(long)]
        project: Option<String>,
    },

    /// Show an issue
    Show {
        /// Issue id
        id: String,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Change an issue's status and/or priority
    Edit {
        /// Issue id
        id: String,

        /// New status (todo, in-progress, in-review, done)
        #[arg(long)]
        status: Option<String>,

        /// New priority (low, medium, high, urgent)
        #[arg(long, short)]
        priority: Option<String>,
    },

    /// Delete an issue
    Delete {
        /// Issue id
        id: String,
    },
}
