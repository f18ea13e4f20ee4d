//! Main execution logic
//!
//! `run` owns everything process-level (config, argument parsing, logging,
//! the runtime); `program` is the validate → load → query pipeline and writes
//! all user-facing lines to the writer it is given.

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use clap::Parser;

use crate::cli::{Args, Shell};
use crate::client::{SearchClient, DEFAULT_ENDPOINT};
use crate::config::{timeout_duration, Config};
use crate::context::Environment;
use crate::errors::{Result, SpookError};
use crate::input::load_queries;
use crate::logging;
use crate::middleware::auth::BasicAuth;
use crate::models::QueryOutcome;
use crate::output::{JsonFormatterOptions, Reporter};
use crate::signals;
use crate::status::ExitStatus;
use crate::validate::{is_valid_api_key, is_valid_email};

/// Something that can answer a single search term.
///
/// [`SearchClient`] is the real implementation; the seam lets the batch loop
/// be exercised without a network.
pub trait QueryBackend {
    fn run_query(&self, query: &str) -> impl Future<Output = QueryOutcome> + Send;
}

impl QueryBackend for SearchClient {
    fn run_query(&self, query: &str) -> impl Future<Output = QueryOutcome> + Send {
        self.search(query)
    }
}

/// Tally of one batch run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub attempted: usize,
    pub failed: usize,
    pub interrupted: bool,
}

/// Main entry point for the CLI.
pub fn run(args: Vec<String>, mut env: Environment) -> ExitStatus {
    if let Some(name) = args.first() {
        if let Some(basename) = std::path::Path::new(name).file_stem() {
            env.program_name = basename.to_string_lossy().to_string();
        }
    }

    let config = match Config::load(&env) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {}", e);
            Config {
                config_dir: env.config_dir.clone(),
                ..Config::default()
            }
        }
    };

    let merged_args = config.merge_default_options(args);

    let parsed = match Args::try_parse_from(&merged_args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    logging::init(parsed.verbose, parsed.log_format.unwrap_or_default());
    tracing::debug!(
        config_dir = %config.config_dir.display(),
        default_options = config.default_options.len(),
        "Loaded config"
    );
    let debug = parsed.debug;

    if let Some(shell) = parsed.generate_completions {
        generate_completions(shell, &env.program_name);
        return ExitStatus::Success;
    }

    if parsed.generate_manpage {
        return match generate_manpage() {
            Ok(()) => ExitStatus::Success,
            Err(e) => handle_error(e, debug),
        };
    }

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => return handle_error(SpookError::Io(e), debug),
    };

    let stdout = std::io::stdout();
    match runtime.block_on(program(parsed, &config, stdout.lock())) {
        Ok(status) => status,
        Err(e) => handle_error(e, debug),
    }
}

/// Validate credentials, load the query file, then search every term in order.
pub async fn program<W: Write>(args: Args, config: &Config, out: W) -> Result<ExitStatus> {
    if args.debug {
        eprintln!("Debug: {:?}", args);
    }

    let check_status = args.check_status;
    let json = JsonFormatterOptions {
        sort_keys: args.sort_keys,
        ..JsonFormatterOptions::default()
    };
    let mut reporter = Reporter::new(out, json);

    let email = args
        .email
        .ok_or_else(|| SpookError::Argument("--email is required".to_string()))?;
    let api_key = args
        .api_key
        .ok_or_else(|| SpookError::Argument("--api_key is required".to_string()))?;
    let file = args
        .file
        .ok_or_else(|| SpookError::Argument("--file is required".to_string()))?;

    if !is_valid_email(&email) {
        reporter.message("Invalid email format. Exiting.")?;
        return Ok(ExitStatus::from_failure(true, check_status));
    }

    if !is_valid_api_key(api_key.as_str()) {
        reporter.message("Invalid API key format. Exiting.")?;
        return Ok(ExitStatus::from_failure(true, check_status));
    }

    let queries = match load_queries(&file) {
        Ok(queries) => queries,
        Err(e) => {
            reporter.message(&e)?;
            return Ok(ExitStatus::from_failure(true, check_status));
        }
    };

    let endpoint = args
        .endpoint
        .or_else(|| config.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let timeout = resolve_timeout(args.timeout.or(config.timeout))?;

    let auth = BasicAuth::new(email, api_key.as_str());
    let client = SearchClient::new(&endpoint, &auth, timeout)?;
    tracing::info!(
        endpoint = %client.endpoint(),
        queries = queries.len(),
        "Starting search batch"
    );

    let summary = run_queries(&client, &queries, &mut reporter, signals::was_interrupted).await?;
    tracing::info!(
        attempted = summary.attempted,
        failed = summary.failed,
        "Search batch finished"
    );

    if summary.interrupted {
        return Ok(ExitStatus::Interrupted);
    }

    Ok(ExitStatus::from_failure(summary.failed > 0, check_status))
}

/// Search each query in order, printing results as they arrive.
///
/// A failed query is reported and the loop moves on. `interrupted` is polled
/// before each request.
pub async fn run_queries<B, W, F>(
    backend: &B,
    queries: &[String],
    reporter: &mut Reporter<W>,
    interrupted: F,
) -> Result<BatchSummary>
where
    B: QueryBackend,
    W: Write,
    F: Fn() -> bool,
{
    let mut summary = BatchSummary::default();

    for query in queries {
        if interrupted() {
            summary.interrupted = true;
            break;
        }

        reporter.querying(query)?;
        let outcome = backend.run_query(query).await;
        summary.attempted += 1;
        if !outcome.is_success() {
            summary.failed += 1;
        }
        reporter.outcome(&outcome)?;
    }

    Ok(summary)
}

fn resolve_timeout(seconds: Option<f64>) -> Result<Option<Duration>> {
    match seconds {
        None => Ok(None),
        Some(s) => timeout_duration(s).map(Some).ok_or_else(|| {
            SpookError::Argument(format!(
                "--timeout must be a positive number of seconds, got {}",
                s
            ))
        }),
    }
}

fn handle_error(error: SpookError, debug: bool) -> ExitStatus {
    if debug {
        eprintln!("Error: {:?}", error);
    } else {
        eprintln!("Error: {}", error);
    }
    ExitStatus::Error
}

fn generate_completions(shell: Shell, program_name: &str) {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as ClapShell};

    let mut cmd = Args::command();
    let shell = match shell {
        Shell::Bash => ClapShell::Bash,
        Shell::Zsh => ClapShell::Zsh,
        Shell::Fish => ClapShell::Fish,
        Shell::PowerShell => ClapShell::PowerShell,
        Shell::Elvish => ClapShell::Elvish,
    };

    generate(shell, &mut cmd, program_name, &mut std::io::stdout());
}

fn generate_manpage() -> Result<()> {
    use clap::CommandFactory;

    let man = clap_mangen::Man::new(Args::command());
    man.render(&mut std::io::stdout())?;
    Ok(())
}
