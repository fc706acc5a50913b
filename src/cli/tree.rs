//! The `tree` command: render a project list as a forest.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use super::render_forest;
use crate::types::{build_forest, ProjectList};
use crate::{Error, Result};

/// Read a JSON project list from `input` and write its rendered forest to `out`.
pub fn run<R: Read, W: Write>(input: R, out: &mut W) -> Result<()> {
    let projects: ProjectList = serde_json::from_reader(input).map_err(Error::Decode)?;
    tracing::debug!(count = projects.len(), "rendering project tree");

    let forest = build_forest(&projects);
    out.write_all(render_forest(&forest).as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Like [`run`], reading the project list from a file.
pub fn run_from_path<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let file = File::open(path)?;
    run(BufReader::new(file), out)
}
