//! Writing encoded images to disk.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use log::{debug, warn};

use crate::error::{Error, Result};

/// Write `bytes` to `path`, creating missing parent directories.
///
/// An existing file is left untouched and reported as
/// [`Error::AlreadyExists`] unless `force` is set.
pub fn write_asset(path: &Path, bytes: &[u8], force: bool) -> Result<()> {
    let io_err = |source: std::io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let mut file = options.open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::AlreadyExists {
            Error::AlreadyExists(path.to_path_buf())
        } else {
            io_err(e)
        }
    })?;
    fill_or_remove(&mut file, path, bytes)?;

    debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Write `bytes` through `writer`; on failure remove the file at `path` so a
/// truncated asset is not left behind.
fn fill_or_remove<W: Write>(writer: &mut W, path: &Path, bytes: &[u8]) -> Result<()> {
    let result = writer.write_all(bytes).and_then(|()| writer.flush());
    if let Err(source) = result {
        if let Err(e) = fs::remove_file(path) {
            warn!("could not remove partial {}: {e}", path.display());
        }
        return Err(Error::Io {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

/// Write several files as a unit.
///
/// Without `force`, every destination is checked before anything is written.
/// If a write fails, the files this call already wrote are removed.
pub fn write_assets<P: AsRef<Path>>(assets: &[(P, &[u8])], force: bool) -> Result<()> {
    if !force {
        if let Some((path, _)) = assets.iter().find(|(p, _)| p.as_ref().exists()) {
            return Err(Error::AlreadyExists(path.as_ref().to_path_buf()));
        }
    }

    for (done, (path, bytes)) in assets.iter().enumerate() {
        if let Err(e) = write_asset(path.as_ref(), bytes, force) {
            for (written, _) in &assets[..done] {
                if let Err(rm) = fs::remove_file(written.as_ref()) {
                    warn!("could not remove {}: {rm}", written.as_ref().display());
                }
            }
            return Err(e);
        }
    }
    Ok(())
}
