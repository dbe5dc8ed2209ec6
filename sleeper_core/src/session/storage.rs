use super::error::Result;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// A string key-value store, shaped like a browser's `localStorage`. Each
/// method is a single atomic step.
pub trait Storage: Send + Sync {
    /// Get the value stored under `key`, if any.
    ///
    /// ## Errors
    ///
    /// Backends that touch the outside world may fail to read.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing whatever was there.
    ///
    /// ## Errors
    ///
    /// Backends that touch the outside world may fail to write.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Forget `key`. Forgetting a key that isn't there is fine.
    ///
    /// ## Errors
    ///
    /// Backends that touch the outside world may fail to write.
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Storage that lasts as long as the process does.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    /// The stored values
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create empty storage
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);

        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.remove(key);

        Ok(())
    }
}

/// Storage in a single JSON file (an object of string keys to string values.)
/// A missing file is the same as an empty one.
#[derive(Debug)]
pub struct FileStorage {
    /// Where the file lives
    path: PathBuf,

    /// Held for the whole read-modify-write of a change, so that two writers
    /// in this process can't lose each other's updates.
    lock: Mutex<()>,
}

impl FileStorage {
    /// The name of the file `in_dir` uses.
    pub const FILE_NAME: &'static str = "session.json";

    /// Store data in the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Store data in the standard file inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(Self::FILE_NAME))
    }

    /// Where the data is stored.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read everything in the file.
    fn load(&self) -> Result<BTreeMap<String, String>> {
        match fs::read(&self.path) {
            Ok(data) => Ok(serde_json::from_slice(&data)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Replace the file with `items`. We write next to the file and rename
    /// over it so readers never see a half-written file.
    fn save(&self, items: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_vec(items)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &data)?;

        if let Err(err) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }

        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        Ok(self.load()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut items = self.load()?;
        items.insert(key.to_string(), value.to_string());

        tracing::debug!(path = ?self.path, key, "writing storage");
        self.save(&items)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut items = self.load()?;
        if items.remove(key).is_none() {
            return Ok(());
        }

        tracing::debug!(path = ?self.path, key, "writing storage");
        self.save(&items)
    }
}
