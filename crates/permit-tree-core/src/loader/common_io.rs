// crates/permit-tree-core/src/loader/common_io.rs
use crate::error::{PermitError, Result};
use std::fs::File;
use std::io::{self, BufReader, ErrorKind, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a file, buffers it, and wraps `.gz` files in a Gzip decoder.
/// Returns a generic Reader so the caller doesn't care about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            PermitError::NotFound(format!("Input not found at {}: {}", path.display(), e))
        }
        kind => PermitError::Io(io::Error::new(
            kind,
            format!("Failed to open {}: {}", path.display(), e),
        )),
    })?;

    // Opening a directory succeeds on unix; reject it before the first read.
    if file.metadata()?.is_dir() {
        return Err(PermitError::Io(io::Error::new(
            ErrorKind::InvalidInput,
            format!("Input {} is a directory", path.display()),
        )));
    }

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        if is_gzip(path) {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}

pub fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
