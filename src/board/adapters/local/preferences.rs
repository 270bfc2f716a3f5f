//! Preference slot stored as a JSON file inside a capability directory.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::board::{
    domain::Preferences,
    ports::{PREFERENCES_STORAGE_KEY, PreferenceStore, PreferenceStoreError},
};

/// File-backed preference store.
///
/// The slot lives at `<directory>/kanban-preferences.json` and holds only
/// `{ "theme", "accentColor" }`.
#[derive(Debug)]
pub struct FilePreferenceStore {
    dir: Dir,
    file_name: String,
}

impl FilePreferenceStore {
    /// Opens the store rooted at `directory`, creating the directory when it
    /// does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceStoreError::Io`] when the directory cannot be
    /// created or opened.
    pub fn open(directory: &Utf8Path) -> Result<Self, PreferenceStoreError> {
        let authority = ambient_authority();
        match Dir::open_ambient_dir(directory, authority) {
            Ok(dir) => Ok(Self::from_dir(dir)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Dir::create_ambient_dir_all(directory, ambient_authority())?;
                let dir = Dir::open_ambient_dir(directory, ambient_authority())?;
                Ok(Self::from_dir(dir))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Wraps an already opened directory.
    #[must_use]
    pub fn from_dir(dir: Dir) -> Self {
        Self {
            dir,
            file_name: format!("{PREFERENCES_STORAGE_KEY}.json"),
        }
    }

    /// Returns the slot's file name relative to the directory.
    #[must_use]
    pub fn file_name(&self) -> &Utf8Path {
        Utf8Path::new(&self.file_name)
    }

    fn temp_file_name(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(format!("{}.tmp", self.file_name))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Result<Option<Preferences>, PreferenceStoreError> {
        let contents = match self.dir.read_to_string(&self.file_name) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let preferences = serde_json::from_str::<Preferences>(&contents)?;
        Ok(Some(preferences))
    }

    fn save(&self, preferences: &Preferences) -> Result<(), PreferenceStoreError> {
        let payload = serde_json::to_vec_pretty(preferences)?;
        let temp = self.temp_file_name();
        self.dir.write(&temp, payload)?;
        self.dir.rename(&temp, &self.dir, &self.file_name)?;
        Ok(())
    }
}
