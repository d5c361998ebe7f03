#![forbid(unsafe_code)]

mod dataset;
mod error;
mod report;
mod table;

pub use dataset::{read_dataset, read_dataset_file};
pub use error::Error;
pub use report::TextReport;
pub use table::{HistoryRow, write_gallery, write_grid, write_history, write_results};

use std::{
    fs,
    io::{self, Write},
    path::Path,
};
use tracing::debug;

/// Write `contents` next to `path` and rename it into place, so readers never
/// see a half-written export.
pub fn write_atomic(path: impl AsRef<Path>, contents: &[u8]) -> Result<(), Error> {
    let path = path.as_ref();
    let Some(file_name) = path.file_name() else {
        return Err(Error::InvalidPath(path.to_owned()));
    };
    let mut tmp_name = file_name.to_owned();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    if let Err(err) = write_and_rename(&tmp_path, path, contents) {
        if let Err(cleanup) = fs::remove_file(&tmp_path) {
            debug!(path = %tmp_path.display(), %cleanup, "temporary file not removed");
        }
        return Err(err.into());
    }
    Ok(())
}

fn write_and_rename(tmp_path: &Path, path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(tmp_path)?;
    file.write_all(contents)?;
    file.sync_all()?;
    fs::rename(tmp_path, path)
}
