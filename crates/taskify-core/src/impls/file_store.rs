//! FileSharedStore - ディレクトリ内に 1 キー 1 ファイル
//!
//! ディレクトリが見えるプロセスなら、作成したプロセスが動いているか
//! どうかに関係なく読み書きできる。
//!
//! # 学習ポイント
//! - キー名の検証（パス区切りや先頭の `.` を拒否）
//! - 書き込みは `atomic::write_atomic` に任せる

use std::path::{Path, PathBuf};

use crate::domain::StoreError;
use crate::ports::SharedStore;

use super::atomic::write_atomic;

/// Directory-backed `SharedStore`.
///
/// # Layout
/// `<dir>/<key>` holds the UTF-8 value of `key`. Writes are atomic renames,
/// so a reader never observes a half-written snapshot.
pub struct FileSharedStore {
    dir: PathBuf,
}

impl FileSharedStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(key))
    }
}

fn io_error(key: &str, source: std::io::Error) -> StoreError {
    StoreError::Io {
        key: key.to_string(),
        source,
    }
}

impl SharedStore for FileSharedStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key, e)),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        write_atomic(&self.dir, &path, value.as_bytes()).map_err(|e| io_error(key, e))?;
        tracing::debug!(key, bytes = value.len(), "store value replaced");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(key, e)),
        }
    }
}
