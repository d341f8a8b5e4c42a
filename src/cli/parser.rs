use crate::models::role::{Caller, Role};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for paysheet
/// CLI application to collect biweekly timesheets and render them as PDF
#[derive(Parser)]
#[command(
    name = "paysheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Biweekly timesheets: compute pay periods, validate submissions, render fixed-layout reports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Identity of the caller, as established by the authentication layer.
#[derive(Args, Debug, Clone)]
pub struct CallerArgs {
    #[arg(long = "role", value_enum, default_value_t = Role::Employee)]
    pub role: Role,

    #[arg(long = "group", help = "Group tag of a supervisor")]
    pub group: Option<String>,

    #[arg(
        long = "as",
        value_name = "EMPLOYEE_NUMBER",
        help = "Identity of the caller (employee number)"
    )]
    pub identity: Option<String>,
}

impl CallerArgs {
    pub fn to_caller(&self) -> Caller {
        Caller::new(
            self.role,
            self.group.clone(),
            self.identity.clone().unwrap_or_default(),
        )
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, edit, move the period anchor)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,

        #[arg(
            long = "set-anchor",
            value_name = "DATE",
            help = "Move the pay-period anchor to DATE (YYYY-MM-DD); bumps the anchor version"
        )]
        set_anchor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "op", help = "Only show one operation (submit, amend, render, ...)")]
        operation: Option<String>,
    },

    /// Show the pay period containing a date
    Period {
        #[arg(long = "date", help = "Reference date (YYYY-MM-DD), default today")]
        date: Option<String>,
    },

    /// Submit a timesheet form (JSON or YAML)
    Submit {
        #[arg(long = "file", value_name = "FILE")]
        file: String,

        #[arg(
            long = "date",
            help = "Submission date (YYYY-MM-DD) selecting the period, default today"
        )]
        date: Option<String>,
    },

    /// List stored timesheets visible to the caller
    List {
        #[command(flatten)]
        caller: CallerArgs,

        #[arg(long = "json", help = "Print records as JSON")]
        json: bool,
    },

    /// Render a stored timesheet to PDF
    Render {
        #[arg(long = "employee", value_name = "EMPLOYEE_NUMBER")]
        employee: String,

        #[arg(
            long = "period-start",
            value_name = "DATE",
            help = "Period start (YYYY-MM-DD), default the current period"
        )]
        period_start: Option<String>,

        #[arg(long = "out-dir", value_name = "DIR", help = "Override the output directory")]
        out_dir: Option<String>,

        #[command(flatten)]
        caller: CallerArgs,
    },

    /// Delete a stored timesheet
    Delete {
        #[arg(long = "employee", value_name = "EMPLOYEE_NUMBER")]
        employee: String,

        #[arg(
            long = "period-start",
            value_name = "DATE",
            help = "Any date inside the period (YYYY-MM-DD), default the current period"
        )]
        period_start: Option<String>,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,

        #[command(flatten)]
        caller: CallerArgs,
    },
}
