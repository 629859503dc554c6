//! Grid state persistence (requires the `state-persistence` feature).
//!
//! State is written as pretty-printed JSON wrapped in a small envelope that
//! carries a format version:
//!
//! ```json
//! {
//!   "formatVersion": 1,
//!   "state": { "data": [], "visibleData": [], "filter": "", "sortProperties": { ... } }
//! }
//! ```
//!
//! Writes go to `{path}.tmp` first, are flushed and synced, then renamed
//! over `{path}`, so a crash never leaves a half-written file behind.
//!
//! # Failure Modes
//!
//! | Failure | Behavior |
//! |---------|----------|
//! | File missing | `load_state` returns `Ok(None)` |
//! | Format version mismatch | logged, `Ok(None)` |
//! | Invalid JSON | `TreeError::Persistence` |
//! | I/O failure | `TreeError::Io` |

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use rowtree_core::TreeResult;
use serde::{Deserialize, Serialize};

use crate::state::GridState;

const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StateFileRef<'a> {
    format_version: u32,
    state: &'a GridState,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StateFile {
    format_version: u32,
    state: GridState,
}

fn temp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

/// Write `state` to `path` atomically.
///
/// # Errors
///
/// I/O or serialization failures.
pub fn save_state(path: impl AsRef<Path>, state: &GridState) -> TreeResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = temp_path(path);
    {
        let file = File::create(&tmp_path)?;
        let mut writer = BufWriter::new(file);
        let envelope = StateFileRef {
            format_version: FORMAT_VERSION,
            state,
        };
        serde_json::to_writer_pretty(&mut writer, &envelope)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
    }
    fs::rename(&tmp_path, path)?;

    rowtree_core::debug!(path = %path.display(), rows = state.data.len(), "saved grid state");
    Ok(())
}

/// Read state previously written by [`save_state`].
///
/// # Errors
///
/// I/O failures or a file that is not valid state JSON.
pub fn load_state(path: impl AsRef<Path>) -> TreeResult<Option<GridState>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let reader = BufReader::new(File::open(path)?);
    let file: StateFile = serde_json::from_reader(reader)?;
    if file.format_version != FORMAT_VERSION {
        rowtree_core::warn!(
            stored = file.format_version,
            expected = FORMAT_VERSION,
            "state file format version mismatch, ignoring stored state"
        );
        return Ok(None);
    }
    Ok(Some(file.state))
}
