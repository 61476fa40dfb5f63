//! CLI front end for the instruction catalog.
//!
//! Runs one search per invocation (positional words form the query) or, with
//! `--stdin`, one search per input line so interactive callers can re-filter
//! as the user types. Output is either a readable text block per record or,
//! with `--json`, the matched records as a JSON array. Presentation only;
//! matching semantics live in the library.

use anyhow::{Context, Result, bail};
use fzrv::{Catalog, Instruction, search};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse()?;

    let catalog = match &args.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::embedded()?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.mode {
        QueryMode::Single(query) => {
            let results = search(&catalog, &query);
            render(&mut out, &results, args.json)?;
        }
        QueryMode::Stdin => {
            // One query per line; each line re-runs the full search.
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let query = line.context("reading query from stdin")?;
                let results = search(&catalog, &query);
                render(&mut out, &results, args.json)?;
            }
        }
    }

    Ok(())
}

fn render(out: &mut impl Write, results: &[&Instruction], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, results).context("serializing results")?;
        writeln!(out)?;
        return Ok(());
    }

    // Mirrors the reference layout: identity fields together, then the
    // syntax/effect pair indented beneath them.
    for record in results {
        writeln!(out, "{}  {}  [{}]", record.name, record.description, record.module)?;
        writeln!(out, "    {}", record.format)?;
        writeln!(out, "    {}", record.implementation)?;
    }
    Ok(())
}

struct CliArgs {
    mode: QueryMode,
    catalog_path: Option<PathBuf>,
    json: bool,
}

enum QueryMode {
    /// Search once with this query (possibly empty, meaning "everything").
    Single(String),
    /// Read queries line by line from stdin.
    Stdin,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut catalog_path: Option<PathBuf> = None;
        let mut json = false;
        let mut from_stdin = false;
        let mut query_words: Vec<String> = Vec::new();

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
                "--json" => json = true,
                "--stdin" => from_stdin = true,
                "--help" | "-h" => {
                    print!("{}", usage());
                    std::process::exit(0);
                }
                other if other.starts_with("--") => bail!("unknown flag: {other}"),
                word => query_words.push(word.to_string()),
            }
        }

        let mode = if from_stdin {
            if !query_words.is_empty() {
                bail!("--stdin cannot be combined with a positional query");
            }
            QueryMode::Stdin
        } else {
            QueryMode::Single(query_words.join(" "))
        };

        Ok(CliArgs {
            mode,
            catalog_path,
            json,
        })
    }
}

fn usage() -> &'static str {
    "Usage: fzrv [--catalog PATH] [--json] [--stdin] [QUERY...]\n\
Filters the RISC-V instruction catalog by case-insensitive substring match across\n\
name, description, format, implementation, and module. An empty query lists the\n\
whole catalog. With --stdin, each input line is run as its own query.\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use fzrv::InstructionName;

    fn record(name: &str) -> Instruction {
        Instruction {
            name: InstructionName(name.to_string()),
            description: "Add".to_string(),
            format: "add rd, rs1, rs2".to_string(),
            implementation: "x[rd] = x[rs1] + x[rs2]".to_string(),
            module: "RV32I, RV64I".to_string(),
        }
    }

    #[test]
    fn text_render_groups_fields() {
        let add = record("add");
        let results = vec![&add];
        let mut buf = Vec::new();
        render(&mut buf, &results, false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "add  Add  [RV32I, RV64I]\n    add rd, rs1, rs2\n    x[rd] = x[rs1] + x[rs2]\n"
        );
    }

    #[test]
    fn json_render_is_an_array() {
        let add = record("add");
        let results = vec![&add];
        let mut buf = Vec::new();
        render(&mut buf, &results, true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["name"], "add");
        assert_eq!(value[0]["module"], "RV32I, RV64I");
    }
}
