use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path to a compiled helper binary of this package.
pub fn helper_binary(name: &str) -> PathBuf {
    match name {
        "fzrv" => PathBuf::from(env!("CARGO_BIN_EXE_fzrv")),
        "catalog-check" => PathBuf::from(env!("CARGO_BIN_EXE_catalog-check")),
        other => panic!("unknown helper binary {other}"),
    }
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {cmd:?}"))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

/// Run a command that is expected to fail; returns its stderr.
pub fn run_command_expecting_failure(mut cmd: Command) -> Result<String> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {cmd:?}"))?;
    if output.status.success() {
        bail!("command {cmd:?} unexpectedly succeeded");
    }
    Ok(String::from_utf8_lossy(&output.stderr).into_owned())
}

/// Write a catalog document into `dir` and return its path.
pub fn write_catalog(dir: &Path, contents: &str) -> Result<PathBuf> {
    let path = dir.join("catalog.json");
    std::fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
