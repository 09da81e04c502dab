use crate::domain::Library;
use crate::ports::library_repository::{LibraryRepository as LibraryRepositoryTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory implementation of LibraryRepository
///
/// Keeps libraries in insertion order and records every `save` call so tests
/// can assert on persist side effects.
pub struct LibraryRepository {
    libraries: Mutex<Vec<Library>>,
    saved: Mutex<Vec<Library>>,
    failure: Mutex<Option<String>>,
}

impl LibraryRepository {
    pub fn new() -> Self {
        Self::with_libraries(Vec::new())
    }

    pub fn with_libraries(libraries: Vec<Library>) -> Self {
        Self {
            libraries: Mutex::new(libraries),
            saved: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
        }
    }

    /// Libraries passed to `save`, in call order
    pub fn saved(&self) -> Vec<Library> {
        self.saved.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saved.lock().unwrap().len()
    }

    /// Make every subsequent call fail with the given message
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(message.into());
    }

    fn check_failure(&self) -> Result<()> {
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(Box::new(std::io::Error::other(message.clone()))),
            None => Ok(()),
        }
    }
}

impl Default for LibraryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LibraryRepositoryTrait for LibraryRepository {
    async fn find_all(&self) -> Result<Vec<Library>> {
        self.check_failure()?;
        Ok(self.libraries.lock().unwrap().clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Library>> {
        self.check_failure()?;
        Ok(self
            .libraries
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.name == name)
            .cloned())
    }

    /// Upsert by name, mirroring the primary key of the SQL store
    async fn save(&self, library: Library) -> Result<()> {
        self.check_failure()?;
        self.saved.lock().unwrap().push(library.clone());

        let mut libraries = self.libraries.lock().unwrap();
        match libraries.iter_mut().find(|l| l.name == library.name) {
            Some(existing) => *existing = library,
            None => libraries.push(library),
        }
        Ok(())
    }
}
