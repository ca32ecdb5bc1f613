use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gl_orphan_labels::output::print_errors;
use gl_orphan_labels::{Cleaner, Credentials, Error, GitlabClient, Options, Summary, exit_code};

/// Delete unused labels from your GitLab projects
#[derive(Parser)]
#[command(name = "gl-orphan-labels", version)]
#[command(about = "Delete project labels that no issue or merge request uses")]
#[command(long_about = r#"gl-orphan-labels - Delete unused labels from your GitLab projects

Every project visible to TOKEN is visited. A project label with no open issues,
no closed issues and no open merge requests is deleted. Group labels are left alone.

The token needs the `api` scope."#)]
struct Args {
    /// GitLab instance base URL, e.g. https://gitlab.example.com
    #[arg(value_name = "BASE_URL", env = "GITLAB_URL")]
    base_url: Option<String>,

    /// Personal or project access token
    #[arg(value_name = "TOKEN", env = "GITLAB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Follow pagination instead of stopping after the first 100 projects/labels
    #[arg(long)]
    all_pages: bool,

    /// Show what would be deleted, but don't delete anything
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Report a failing project and continue with the next one
    #[arg(short, long)]
    keep_going: bool,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }
    setup_logging(args.verbose);

    let result = run(&args);
    match &result {
        Ok(summary) => tracing::info!(
            projects = summary.projects,
            deleted = summary.deleted,
            skipped = summary.skipped,
            failed = summary.failed_projects,
            "cleanup finished"
        ),
        Err(err) => {
            // Nothing sensible left to do if stderr is gone.
            print_errors(&mut io::stderr(), &err.messages()).ok();
        }
    }

    std::process::exit(exit_code(&result));
}

fn run(args: &Args) -> Result<Summary, Error> {
    let credentials = Credentials::resolve(args.base_url.as_deref(), args.token.as_deref())?;
    tracing::debug!(?credentials, "resolved credentials");

    let options = Options {
        all_pages: args.all_pages,
        dry_run: args.dry_run,
        keep_going: args.keep_going,
    };
    let client = GitlabClient::new(credentials, options.all_pages)?;

    let mut stdout = io::stdout().lock();
    Cleaner::new(client, options).run(&mut stdout, &mut io::stderr())
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
