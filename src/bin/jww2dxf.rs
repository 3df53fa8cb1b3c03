//! Thin CLI adapter: argv -> file read -> parse -> convert -> serialize ->
//! stdout/file.
//!
//! This binary is explicitly outside the core per §1's non-goals: it does
//! no parsing, transform, or serialization logic of its own, matching the
//! teacher crate's plain `std::env::args()` diagnostic binaries in
//! `src/bin/diag_*.rs` rather than reaching for a CLI-parsing crate.

use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("jww2dxf: {err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let input_path = args.next().context("usage: jww2dxf <input.jww> [output.dxf]")?;
    let output_path = args.next();

    let bytes = fs::read(&input_path).with_context(|| format!("reading {input_path}"))?;
    let document = jww2dxf::parse(&bytes).with_context(|| format!("decoding {input_path}"))?;
    let target = jww2dxf::convert(&document);
    let text = jww2dxf::serialize(&target);

    match output_path {
        Some(path) => fs::write(&path, text).with_context(|| format!("writing {path}"))?,
        None => print!("{text}"),
    }

    Ok(())
}
