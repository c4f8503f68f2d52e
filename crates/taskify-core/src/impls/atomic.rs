//! Atomic file replacement (temp file -> fsync -> rename).
//!
//! The temp file is created in the target's directory with a unique name,
//! so concurrent writers from different processes never share a temp file
//! and the final rename stays on one filesystem.

use std::io::Write;
use std::path::Path;

pub(crate) fn write_atomic(dir: &Path, target: &Path, bytes: &[u8]) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(target).map_err(|e| e.error)?;
    Ok(())
}
