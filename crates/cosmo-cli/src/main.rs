// ─────────────────────────────────────────────────────────────────────
// SCPN Cosmology — Report CLI
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! `cosmo-report`: age, diameter, Planck units and composition for one
//! parameter set. Log verbosity follows `RUST_LOG`.

use anyhow::{Context, Result};
use clap::Parser;
use cosmo_core::report::Report;
use cosmo_types::config::RunConfig;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "cosmo-report", version, about = "Age and size of a flat ΛCDM universe")]
struct Cli {
    /// JSON run configuration (`cosmology` and `quadrature` sections).
    /// Planck 2018 values are used when omitted.
    #[arg(long)]
    config: Option<String>,

    /// Override the quadrature relative tolerance.
    #[arg(long)]
    rel_tol: Option<f64>,

    /// Override the relative error accepted when the subdivision limit is
    /// hit. Defaults to the larger of the configured ceiling and `--rel-tol`.
    #[arg(long)]
    max_rel_error: Option<f64>,

    /// Override the quadrature subdivision limit.
    #[arg(long)]
    max_subdivisions: Option<usize>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

fn load_config(cli: &Cli) -> Result<RunConfig> {
    let mut config = match &cli.config {
        Some(path) => RunConfig::from_file(path)
            .with_context(|| format!("failed to load configuration from {path}"))?,
        None => RunConfig::default(),
    };
    if let Some(rel_tol) = cli.rel_tol {
        config.quadrature.rel_tol = rel_tol;
        if rel_tol > config.quadrature.max_rel_error {
            config.quadrature.max_rel_error = rel_tol;
        }
    }
    if let Some(ceiling) = cli.max_rel_error {
        config.quadrature.max_rel_error = ceiling;
    }
    if let Some(limit) = cli.max_subdivisions {
        config.quadrature.max_subdivisions = limit;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let report = Report::compute(&config).context("cosmology computation failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
