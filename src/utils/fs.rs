use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

/// Create every missing directory above `path`. Existing directories are fine.
pub async fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent).await,
        _ => Ok(()),
    }
}

/// Write `bytes` to a sibling temp file, then rename it over `path`.
/// Readers never observe a truncated file.
pub async fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp_path = temp_path(path)?;

    let mut result = write_synced(&tmp_path, bytes).await;
    if result.is_ok() {
        result = fs::rename(&tmp_path, path).await;
    }

    if result.is_err() {
        if let Err(err) = fs::remove_file(&tmp_path).await {
            if err.kind() != io::ErrorKind::NotFound {
                log::warn!("failed to remove {}: {}", tmp_path.display(), err);
            }
        }
    }
    result
}

async fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await
}

fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let Some(name) = path.file_name() else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("not a file path: {}", path.display()),
        ));
    };
    let mut name = name.to_os_string();
    name.push(".tmp");
    Ok(path.with_file_name(name))
}
