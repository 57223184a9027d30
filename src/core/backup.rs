//! Database backup: plain copy plus optional compression.

use crate::config::Config;
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::path::{ensure_parent_dir, expand_tilde};
use rusqlite::Connection;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        let dest_buf = expand_tilde(dest_file);
        let dest = dest_buf.as_path();

        // 1. Check DB exists
        if !src.exists() {
            return Err(AppError::Backup(format!(
                "database not found: {}",
                src.display()
            )));
        }

        // 2. Ensure destination folder exists
        ensure_parent_dir(dest)?;

        // 3. Ask before overwriting an existing file
        if dest.exists() && !confirm_overwrite(dest)? {
            warning("Backup cancelled by user.");
            return Ok(());
        }

        // 4. Copy database
        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        // 5. Optional compression; the uncompressed copy is removed
        let final_path = if compress {
            let compressed = compress_backup(dest)?;

            if compressed != dest.to_path_buf() {
                if let Err(e) = fs::remove_file(dest) {
                    warning(format!("Failed to remove uncompressed backup: {}", e));
                }
            }

            compressed
        } else {
            dest.to_path_buf()
        };

        // 6. Log in DB (non-fatal)
        if let Ok(conn) = Connection::open(src) {
            let _ = ttlog(
                &conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }

        Ok(())
    }
}

fn confirm_overwrite(dest: &Path) -> AppResult<bool> {
    warning(format!("The file '{}' already exists.", dest.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();
    Ok(ans == "y" || ans == "yes")
}

/// Compress a backup: `.zip` on Windows, `.tar.gz` elsewhere.
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let compressed = if cfg!(target_os = "windows") {
        compress_zip(path)?
    } else {
        compress_tar_gz(path)?
    };

    success(format!("Compressed: {}", compressed.display()));
    Ok(compressed)
}

fn compress_zip(path: &Path) -> AppResult<PathBuf> {
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Backup("backup path has no file name".into()))?;

    let mut f = fs::File::open(path)?;
    zip.start_file(name, options).map_err(io::Error::other)?;
    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(zip_path)
}

fn compress_tar_gz(path: &Path) -> AppResult<PathBuf> {
    use flate2::Compression;
    use flate2::write::GzEncoder;

    let tar_gz_path = path.with_extension("tar.gz");
    let file = fs::File::create(&tar_gz_path)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Backup("backup path has no file name".into()))?;

    let mut f = fs::File::open(path)?;
    builder.append_file(name, &mut f)?;

    let encoder = builder.into_inner()?;
    encoder.finish()?;

    Ok(tar_gz_path)
}
