use crate::domain::{Checkable, CheckableKind};
use crate::ports::checkable_repository::{
    CheckableRepository as CheckableRepositoryTrait, Result,
};
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory implementation of CheckableRepository
///
/// Same shape as the library mock: insertion-ordered storage plus capture of
/// every `save` call.
pub struct CheckableRepository {
    checkables: Mutex<Vec<Checkable>>,
    saved: Mutex<Vec<Checkable>>,
    failure: Mutex<Option<String>>,
}

impl CheckableRepository {
    pub fn new() -> Self {
        Self::with_checkables(Vec::new())
    }

    pub fn with_checkables(checkables: Vec<Checkable>) -> Self {
        Self {
            checkables: Mutex::new(checkables),
            saved: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
        }
    }

    pub fn saved(&self) -> Vec<Checkable> {
        self.saved.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saved.lock().unwrap().len()
    }

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

impl Default for CheckableRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CheckableRepositoryTrait for CheckableRepository {
    async fn find_all(&self) -> Result<Vec<Checkable>> {
        self.check_failure()?;
        Ok(self.checkables.lock().unwrap().clone())
    }

    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Checkable>> {
        self.check_failure()?;
        Ok(self
            .checkables
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.has_isbn(isbn))
            .cloned())
    }

    async fn find_by_type(&self, kind: CheckableKind) -> Result<Option<Checkable>> {
        self.check_failure()?;
        Ok(self
            .checkables
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.kind() == kind)
            .cloned())
    }

    async fn save(&self, checkable: Checkable) -> Result<()> {
        self.check_failure()?;
        self.saved.lock().unwrap().push(checkable.clone());

        let mut checkables = self.checkables.lock().unwrap();
        match checkables.iter_mut().find(|c| c.has_isbn(checkable.isbn())) {
            Some(existing) => *existing = checkable,
            None => checkables.push(checkable),
        }
        Ok(())
    }
}
