//! Standalone validator for catalog documents.
//!
//! Runs the same load pipeline the lookup CLI uses (schema validation, then
//! duplicate/empty-name checks) and reports a one-line summary on success.
//! Intended for checking edited catalog files before shipping them with
//! `fzrv --catalog`.

use anyhow::{Result, bail};
use fzrv::Catalog;
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = env::args().skip(1);
    let mut catalog_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--catalog" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("missing value for --catalog"))?;
                if catalog_path.is_some() {
                    bail!("--catalog may only be provided once");
                }
                catalog_path = Some(PathBuf::from(path));
            }
            "--help" | "-h" => {
                print!("{}", usage());
                return Ok(());
            }
            other => bail!("unknown argument: {other}"),
        }
    }

    let (catalog, source) = match &catalog_path {
        Some(path) => (Catalog::load(path)?, path.display().to_string()),
        None => (Catalog::embedded()?, "embedded".to_string()),
    };

    println!("ok: {} ({} instructions)", source, catalog.len());
    Ok(())
}

fn usage() -> &'static str {
    "Usage: catalog-check [--catalog PATH]\n\
Validates an instruction catalog document (the embedded one by default):\n\
JSON Schema conformance, supported schema_version, unique non-empty names.\n"
}
