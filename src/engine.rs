//! Counting engine: bounded fan-out over sources, single-consumer fan-in.
//!
//! One task is spawned per source; the semaphore caps how many run at once.
//! The `JoinSet` is the fan-in point — the aggregation loop below is the
//! only place records accumulate, so the buffer needs no lock.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::matcher;
use crate::model::Record;
use crate::reader::SourceReader;
use crate::sema::Sema;

/// Counts a word across sources with bounded concurrency.
///
/// The semaphore lives with the counter and is reused across calls;
/// occupancy returns to zero between them.
pub struct Counter<R> {
    sema: Sema,
    reader: Arc<R>,
}

impl<R: SourceReader> Counter<R> {
    /// Create a counter running at most `max_in_flight` reads at once.
    ///
    /// # Panics
    ///
    /// Panics if `max_in_flight` is zero.
    pub fn new(max_in_flight: usize, reader: R) -> Self {
        Self {
            sema: Sema::new(max_in_flight),
            reader: Arc::new(reader),
        }
    }

    /// Count `word` in every source.
    ///
    /// On full success returns one record per source — duplicates included —
    /// in completion order rather than input order; callers needing a
    /// deterministic order must sort. On the first failure the remaining
    /// tasks are aborted, records collected so far are discarded, and that
    /// single error is returned without awaiting the aborted tasks. Under
    /// near-simultaneous failures, which error is "first" is decided by
    /// completion order and is not deterministic.
    ///
    /// `word` must be a non-empty token (word characters and hyphens).
    pub async fn count(&self, sources: &[String], word: &str) -> Result<Vec<Record>> {
        let mut tasks = JoinSet::new();

        for source in sources {
            let sema = self.sema.clone();
            let reader = Arc::clone(&self.reader);
            let source = source.clone();
            let word = word.to_owned();

            tasks.spawn(async move {
                // The slot is held until the task resolves or is aborted;
                // dropping it releases the slot on every exit path.
                let _slot = sema.acquire().await;

                debug!(source = %source, "reading source");
                let content = reader.read(&source).await.map_err(|cause| Error::Source {
                    source: source.clone(),
                    cause,
                })?;

                let count = matcher::count_word(&content, &word);
                debug!(source = %source, count, "source counted");

                Ok(Record { source, count })
            });
        }

        let mut records = Vec::with_capacity(sources.len());

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Ok(record)) => records.push(record),
                Ok(Err(err)) => {
                    warn!(error = %err, "source failed, aborting batch");
                    tasks.abort_all();
                    return Err(err);
                }
                // Nothing aborts tasks before this loop exits, so the only
                // way a task fails to join is a panic; keep it visible.
                Err(join_err) => match join_err.try_into_panic() {
                    Ok(payload) => std::panic::resume_unwind(payload),
                    Err(join_err) => unreachable!("task cancelled mid-batch: {join_err}"),
                },
            }
        }

        Ok(records)
    }
}
