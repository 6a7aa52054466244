use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use ignore::{DirEntry, WalkBuilder};
use tracing::{debug, info, warn};

use crate::convert::{convert, ConvertResult};
use crate::entry::FileEntry;
use crate::error::ImgNormError;
use crate::extensions::ExtensionSets;
use crate::normalize::normalize_filename;
use crate::results::Summary;
use crate::traits::Codec;

// ---------------------------------------------------------------------------
// Engine options
// ---------------------------------------------------------------------------

/// Internal options passed from the builder to `run()`.
pub(crate) struct EngineOptions {
    pub root:       PathBuf,
    pub extensions: ExtensionSets,
    pub codec:      Box<dyn Codec>,
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Convert and rename every eligible file under `opts.root`.
///
/// The tree is snapshotted depth-first before the first file is touched, so
/// files created or renamed during the run are never visited again.
/// Conversion failures are logged and skipped. The first failed rename stops
/// the run and is returned as the error.
pub(crate) fn run(opts: EngineOptions) -> Result<Summary, ImgNormError> {
    let start = Instant::now();
    let mut summary = Summary::default();

    let entries = snapshot(&opts.root);
    debug!(root = %opts.root.display(), entries = entries.len(), "snapshot taken");

    for res in entries {
        let entry = match res {
            Ok(e) => e,
            Err(e) => {
                let err = map_ignore_error(e);
                warn!("Skipping unreadable entry: {}", err);
                summary.errors.push(err);
                continue;
            }
        };

        // Skip the root itself
        if entry.depth() == 0 {
            continue;
        }

        let ft = match entry.file_type() {
            Some(ft) => ft,
            None     => continue,
        };

        if ft.is_dir() {
            summary.stats.dirs += 1;
            continue;
        }

        // Links are walked as links: process the ones that resolve to a
        // regular file, never descend into the rest
        let is_file = if ft.is_symlink() {
            entry.path().is_file()
        } else {
            ft.is_file()
        };
        if !is_file {
            continue;
        }
        summary.stats.files += 1;

        let depth = entry.depth();
        let path = entry.into_path();
        match FileEntry::new(&path, depth) {
            Some(file) => process(file, &opts, &mut summary)?,
            None => {
                warn!("Skipping non UTF-8 file name: {}", path.display());
                summary.skipped += 1;
            }
        }
    }

    summary.stats.duration = start.elapsed();
    Ok(summary)
}

// ---------------------------------------------------------------------------
// Per-file decision
// ---------------------------------------------------------------------------

fn process(
    file: FileEntry,
    opts: &EngineOptions,
    summary: &mut Summary,
) -> Result<(), ImgNormError> {
    let file = if opts.extensions.is_convertible(&file.extension) {
        match convert(&file.path, &file.jpeg_destination(), opts.codec.as_ref()) {
            ConvertResult::Converted { src, dst } => {
                info!("Converted: {} → {}", src.display(), dst.display());
                summary.converted += 1;
                file.converted()
            }
            ConvertResult::Failed { src, reason } => {
                warn!("Failed to convert {}: {}", src.display(), reason);
                summary.failed.push(src);
                summary.skipped += 1;
                return Ok(());
            }
        }
    } else {
        file
    };

    if !opts.extensions.is_supported(&file.extension) {
        debug!("Skipping unsupported file: {}", file.path.display());
        summary.skipped += 1;
        return Ok(());
    }

    let new_name = normalize_filename(&file.name);
    if new_name == file.name {
        summary.unchanged += 1;
        return Ok(());
    }

    let new_path = file.sibling(&new_name);
    info!("Renaming: {} → {}", file.name, new_name);
    fs::rename(&file.path, &new_path).map_err(|source| ImgNormError::Rename {
        from: file.path.clone(),
        to: new_path,
        source,
    })?;
    summary.renamed += 1;

    Ok(())
}

// ---------------------------------------------------------------------------
// Snapshot walk
// ---------------------------------------------------------------------------

/// Depth-first listing of everything under `root`, taken before any mutation.
///
/// No ignore rules apply: hidden files and `.gitignore`d paths are listed
/// like anything else. Symlinks are listed but never descended into.
fn snapshot(root: &Path) -> Vec<Result<DirEntry, ignore::Error>> {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .ignore(false)
        .parents(false)
        .hidden(false)
        .follow_links(false)
        .same_file_system(false);

    builder.build().collect()
}

// ---------------------------------------------------------------------------
// Map ignore::Error to ImgNormError
// ---------------------------------------------------------------------------

fn map_ignore_error(e: ignore::Error) -> ImgNormError {
    match e {
        ignore::Error::WithPath { path, err } => match *err {
            ignore::Error::Io(io_err) => {
                if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                    ImgNormError::PermissionDenied(path)
                } else {
                    ImgNormError::Io { path, source: io_err }
                }
            }
            other => ImgNormError::Walk(format!("{}: {}", path.display(), other)),
        },
        ignore::Error::WithDepth { err, .. } => map_ignore_error(*err),
        ignore::Error::Loop { child, .. } => ImgNormError::SymlinkLoop(child),
        ignore::Error::Io(io_err)         => ImgNormError::Io {
            path: PathBuf::new(),
            source: io_err,
        },
        other => ImgNormError::Walk(other.to_string()),
    }
}
