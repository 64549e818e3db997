//! Renewable dispatch entry point: CLI wiring, solve, and artefact output.

use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;

use renewable_dispatch::chart::write_chart;
use renewable_dispatch::cli::Cli;
use renewable_dispatch::config::ToolConfig;
use renewable_dispatch::dispatch::{self, DispatchResult};
use renewable_dispatch::io::export::export_csv;
use renewable_dispatch::{logging, report};

/// Exit status when the solver finds no feasible dispatch.
const EXIT_INFEASIBLE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init("info");

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let config = load_config(cli)?;

    if cli.tui {
        return run_tui(cli, &config);
    }

    let request = config.inputs.to_request();
    let result = dispatch::optimize(&request);

    println!("{}", report::summary(&result));

    let code = match &result {
        DispatchResult::Success(allocation) => {
            if !cli.no_chart {
                let path = &config.output.chart_path;
                write_chart(path, allocation, &request, &config.output.chart_options())
                    .with_context(|| format!("failed to write chart to {}", path.display()))?;
                info!(path = %path.display(), "chart written");
            }
            if let Some(ref path) = cli.csv_out {
                export_csv(allocation, &request, path)
                    .with_context(|| format!("failed to write CSV to {}", path.display()))?;
                info!(path = %path.display(), "allocation exported");
            }
            ExitCode::SUCCESS
        }
        DispatchResult::Failure { .. } => ExitCode::from(EXIT_INFEASIBLE),
    };

    if cli.serve {
        run_server(cli, &config)?;
    }

    Ok(code)
}

/// Resolves and validates the configuration, reporting every problem at once.
fn load_config(cli: &Cli) -> Result<ToolConfig> {
    let config = cli.resolve_config()?;
    let errors = config.validate();
    if !errors.is_empty() {
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        bail!("invalid configuration:\n{joined}");
    }
    Ok(config)
}

#[cfg(feature = "tui")]
fn run_tui(cli: &Cli, config: &ToolConfig) -> Result<ExitCode> {
    let name = cli.preset.as_deref().unwrap_or("default");
    renewable_dispatch::tui::run(name, config).context("terminal UI failed")?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(not(feature = "tui"))]
fn run_tui(_cli: &Cli, _config: &ToolConfig) -> Result<ExitCode> {
    bail!("--tui requires building with the `tui` feature")
}

#[cfg(feature = "api")]
fn run_server(cli: &Cli, config: &ToolConfig) -> Result<()> {
    use std::net::SocketAddr;
    use std::sync::Arc;

    use renewable_dispatch::api::{AppState, serve};

    let state = Arc::new(AppState {
        defaults: config.inputs.to_request(),
    });
    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
    rt.block_on(serve(state, addr))
        .with_context(|| format!("API server on {addr} failed"))
}

#[cfg(not(feature = "api"))]
fn run_server(_cli: &Cli, _config: &ToolConfig) -> Result<()> {
    bail!("--serve requires building with the `api` feature")
}
