// crates/permit-tree-core/src/writer.rs
use crate::error::{PermitError, Result};
use crate::model::PermitTree;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Default output file name, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "output.json";

const INDENT: &[u8] = b"    ";

/// Serializes the tree as pretty JSON with 4-space indentation.
pub fn to_json_pretty(tree: &PermitTree) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    tree.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| PermitError::InvalidData(e.to_string()))
}

/// Writes already serialized JSON text to `path`, replacing any previous file.
pub fn write_json(path: impl AsRef<Path>, text: &str) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| with_path(e, path))?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(text.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| with_path(e, path))?;

    info!(path = %path.display(), bytes = text.len(), "wrote permit tree");
    Ok(())
}

/// Reads a previously written tree back.
pub fn read_json(path: impl AsRef<Path>) -> Result<PermitTree> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        PermitError::NotFound(format!("Tree not found at {}: {}", path.display(), e))
    })?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn with_path(e: std::io::Error, path: &Path) -> PermitError {
    PermitError::Io(std::io::Error::new(
        e.kind(),
        format!("Failed to write {}: {}", path.display(), e),
    ))
}
