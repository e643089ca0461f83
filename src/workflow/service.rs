//! Load, transition and store order items through the file store

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::config::load_config;
use crate::domain::{
    compute_progress, validate_progression, ProgressSnapshot, ProgressionEngine, TransitionOutcome,
    TransitionRequest,
};
use crate::errors::{Result, TrackerError};
use crate::fs;
use crate::schemas::{Config, OrderItemProgress};

use super::locks::ItemLocks;

/// Serializes transitions per order item against a tracker root.
///
/// File access runs on tokio's blocking pool while the item's guard is held.
#[derive(Debug)]
pub struct ProgressionService {
    root: PathBuf,
    config: Config,
    engine: ProgressionEngine,
    locks: ItemLocks,
}

impl ProgressionService {
    /// Open a tracker root, loading its configuration.
    pub fn open(root: &Path) -> Result<Self> {
        let config = load_config(root)?;
        Self::with_config(root, config)
    }

    /// Build a service with an explicit configuration.
    pub fn with_config(root: &Path, config: Config) -> Result<Self> {
        let engine = ProgressionEngine::from_config(&config)?;
        Ok(ProgressionService {
            root: root.to_path_buf(),
            config,
            engine,
            locks: ItemLocks::new(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn engine(&self) -> &ProgressionEngine {
        &self.engine
    }

    /// Store a freshly instantiated progression.
    pub async fn register(&self, progress: &OrderItemProgress) -> Result<()> {
        let _guard = self.locks.acquire(&progress.order_item_id).await;
        validate_progression(progress, self.engine.classifier())?;

        let root = self.root.clone();
        let stored = progress.clone();
        blocking(move || fs::write_progress(&root, &stored)).await?;

        tracing::info!(
            order_item = %progress.order_item_id,
            tasks = progress.task_count(),
            "registered progression"
        );
        Ok(())
    }

    /// Apply one transition while holding the order item's lock.
    ///
    /// Requests without a timestamp are stamped with the current time.
    pub async fn transition(&self, request: TransitionRequest) -> Result<TransitionOutcome> {
        let _guard = self.locks.acquire(&request.order_item_id).await;

        let progress = self.load(&request.order_item_id).await?;
        let order_item_id = request.order_item_id.clone();
        let task_id = request.task_id.clone();
        let target = request.target;
        let request = match request.at {
            Some(_) => request,
            None => request.with_timestamp(Utc::now()),
        };

        let outcome = match self.engine.request_transition(&progress, request) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!(
                    order_item = %order_item_id,
                    task = %task_id,
                    %target,
                    code = e.code(),
                    "transition rejected"
                );
                return Err(e);
            }
        };

        let root = self.root.clone();
        let stored = outcome.progress.clone();
        blocking(move || fs::write_progress(&root, &stored)).await?;

        tracing::info!(
            order_item = %order_item_id,
            task = %task_id,
            from = %outcome.previous_status,
            to = %target,
            progress = outcome.overall_progress,
            "task transitioned"
        );
        Ok(outcome)
    }

    /// Read an order item and its derived progress.
    ///
    /// # Errors
    /// * `MalformedProgression` - the stored file violates the data model
    pub async fn snapshot(
        &self,
        order_item_id: &str,
    ) -> Result<(OrderItemProgress, ProgressSnapshot)> {
        let _guard = self.locks.acquire(order_item_id).await;
        let progress = self.load(order_item_id).await?;
        validate_progression(&progress, self.engine.classifier())?;
        let snapshot = compute_progress(&progress.milestones);
        Ok((progress, snapshot))
    }

    /// Ids of every stored order item
    pub fn order_item_ids(&self) -> Result<Vec<String>> {
        fs::list_order_item_ids(&self.root)
    }

    async fn load(&self, order_item_id: &str) -> Result<OrderItemProgress> {
        let root = self.root.clone();
        let order_item_id = order_item_id.to_string();
        blocking(move || fs::read_progress(&root, &order_item_id)).await
    }
}

async fn blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| TrackerError::Io(std::io::Error::other(e)))?
}
