use rbk_config::commands::generate::{
    self, DEFAULT_CONFIG_PATH, DEFAULT_HEADER_PATH, DEFAULT_SCRIPT_PATH, GenerateOptions,
};
use rbk_config::{ConfigError, logging};

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status reported when the run is interrupted with Ctrl+C
const INTERRUPTED_EXIT_CODE: i32 = 130;

#[derive(Parser)]
#[command(
    name = "rbk-config",
    about = "Generate the RetroBoi64 configuration header and build script from config.json",
    version
)]
struct Cli {
    /// JSON configuration file (created with defaults if missing)
    #[arg(long, short = 'c', value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Output path of the generated C++ header
    #[arg(long, value_name = "PATH", default_value = DEFAULT_HEADER_PATH)]
    header: PathBuf,

    /// Output path of the Windows build script
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SCRIPT_PATH)]
    script: PathBuf,

    /// Skip the startup banner
    #[arg(long)]
    no_banner: bool,

    /// Print diagnostics to stderr (-v info, -vv debug)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Print a failed run the way users expect to read it
///
/// Validation failures list every violation; everything else prints the
/// error chain.
fn report_error(err: &anyhow::Error) {
    match err.downcast_ref::<ConfigError>() {
        Some(ConfigError::Validation(violations)) => {
            eprintln!("✗ Configuration validation failed:");
            for violation in violations {
                eprintln!("  - {}", violation);
            }
        }
        _ => eprintln!("✗ {:#}", err),
    }
}

/// Announce a Ctrl+C cancellation and return the exit status to use
fn announce_cancelled(out: &mut impl Write) -> i32 {
    // Best effort: stdout may already be closed while shutting down
    let _ = writeln!(out, "\n\nBuild cancelled by user.");
    let _ = out.flush();
    INTERRUPTED_EXIT_CODE
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("warning: {:#}", e);
    }

    let options = GenerateOptions {
        config_path: cli.config,
        header_path: cli.header,
        script_path: cli.script,
        show_banner: !cli.no_banner,
    };

    // The pipeline is blocking; run it off the runtime so Ctrl+C stays observable
    let task = tokio::task::spawn_blocking(move || generate::run(&options));

    tokio::select! {
        joined = task => match joined {
            Ok(Ok(())) => ExitCode::SUCCESS,
            Ok(Err(e)) => {
                report_error(&e);
                ExitCode::FAILURE
            }
            Err(e) => {
                eprintln!("\n✗ Unexpected error: {}", e);
                ExitCode::FAILURE
            }
        },
        Ok(()) = tokio::signal::ctrl_c() => {
            let code = announce_cancelled(&mut std::io::stdout());
            // The blocking task cannot be cancelled, so exit without waiting for it
            std::process::exit(code);
        }
    }
}
