use std::time::Instant;

use anyhow::{Context, Result};
use clap::{error::ErrorKind, CommandFactory, Parser};
use serde::Serialize;
use tmm::settings::{self, CliArgs, OutputFormat};
use tmm::{solver, Response};

#[derive(Serialize)]
struct Report<'a> {
    wavelength: f64,
    angle: f64,
    #[serde(flatten)]
    response: &'a Response,
    absorptance: f64,
    elapsed_ms: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let start = Instant::now();

    let args = CliArgs::parse();
    if args.layers.len() % 2 != 0 {
        CliArgs::command()
            .error(
                ErrorKind::WrongNumberOfValues,
                "layers must be given as \"index thickness\" pairs",
            )
            .exit();
    }

    let settings = settings::load_config(&args)?;
    log::info!("{}", settings);
    let stack = settings.stack()?;
    let angle = settings.angle_radians();

    let response = solver::solve(&stack, settings.wavelength, angle).with_context(|| {
        format!(
            "failed to solve {}-layer stack at wavelength {}",
            stack.len(),
            settings.wavelength
        )
    })?;

    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

    match settings.output {
        OutputFormat::Text => {
            println!("{}", response);
            println!("Execution Time: {:.6} ms", elapsed_ms);
        }
        OutputFormat::Json => {
            let report = Report {
                wavelength: settings.wavelength,
                angle,
                response: &response,
                absorptance: response.absorptance(),
                elapsed_ms,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
