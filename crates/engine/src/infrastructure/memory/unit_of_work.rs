//! Change-log unit of work for the in-memory store.
//!
//! `begin` copies the live tables into a private stage. Writes made through the
//! transaction land on the stage and are journaled. `commit` replays the
//! journal onto the current live tables, so direct writes made meanwhile are
//! kept. If any journaled change no longer applies, the commit fails and the
//! live tables are left as they were.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};

use super::repos::InMemoryRepo;
use super::tables::{Change, Tables};
use super::{into_repos, InMemoryStore};
use crate::infrastructure::ports::{GalaxyRepos, RepoError, Transaction, UnitOfWork};

pub struct InMemoryTransaction {
    live: Arc<RwLock<Tables>>,
    staged: Arc<RwLock<Tables>>,
    journal: Arc<Mutex<Vec<Change>>>,
}

#[async_trait]
impl UnitOfWork for InMemoryStore {
    async fn begin(&self) -> Result<Box<dyn Transaction>, RepoError> {
        let snapshot = self.tables.read().await.clone();
        Ok(Box::new(InMemoryTransaction {
            live: self.tables.clone(),
            staged: Arc::new(RwLock::new(snapshot)),
            journal: Arc::default(),
        }))
    }
}

#[async_trait]
impl Transaction for InMemoryTransaction {
    fn repos(&self) -> GalaxyRepos {
        into_repos(InMemoryRepo::journaled(
            self.staged.clone(),
            self.journal.clone(),
        ))
    }

    async fn commit(self: Box<Self>) -> Result<(), RepoError> {
        let changes = std::mem::take(&mut *self.journal.lock().await);
        let mut live = self.live.write().await;
        let mut next = live.clone();
        for change in &changes {
            next.apply(change).map_err(|e| {
                RepoError::transaction(format!("commit conflicts with concurrent writes: {}", e))
            })?;
        }
        *live = next;
        tracing::debug!(changes = changes.len(), "In-memory transaction committed");
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), RepoError> {
        Ok(())
    }
}
