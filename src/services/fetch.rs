//! Cancellable background fetching of list collections.
//!
//! A [`FetchTask`] is owned by whatever shows the list. Dropping it (the
//! list going away) cancels the fetch, and a result that arrives after
//! cancellation is discarded instead of being applied.

use tokio::task::JoinHandle;

use crate::repository::errors::{FetchError, FetchResult};
use crate::view::{PagedSortedView, Sortable};

#[derive(Debug)]
pub struct FetchTask<T> {
    handle: Option<JoinHandle<FetchResult<Vec<T>>>>,
    cancelled: bool,
}

impl<T: Send + 'static> FetchTask<T> {
    /// Runs the blocking `fetch` on the runtime's blocking pool.
    pub fn spawn<F>(fetch: F) -> Self
    where
        F: FnOnce() -> FetchResult<Vec<T>> + Send + 'static,
    {
        Self {
            handle: Some(tokio::task::spawn_blocking(fetch)),
            cancelled: false,
        }
    }

    /// Stops waiting for the fetch; [`FetchTask::join`] will report
    /// [`FetchError::Cancelled`].
    pub fn cancel(&mut self) {
        self.cancelled = true;
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }

    /// Whether the fetch has completed, failed or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Waits for the collection.
    pub async fn join(mut self) -> FetchResult<Vec<T>> {
        let Some(handle) = self.handle.take() else {
            return Err(FetchError::Cancelled);
        };
        if self.cancelled {
            return Err(FetchError::Cancelled);
        }

        match handle.await {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => Err(FetchError::Cancelled),
            Err(err) => Err(FetchError::Unexpected(format!("fetch task failed: {err}"))),
        }
    }
}

impl<T> Drop for FetchTask<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Waits for `task` and swaps its collection into `view`.
///
/// On success the view returns to page 1 and the number of items loaded is
/// returned. On failure the view keeps showing what it had.
pub async fn refresh<T>(view: &mut PagedSortedView<T>, task: FetchTask<T>) -> FetchResult<usize>
where
    T: Sortable + Send + 'static,
{
    match task.join().await {
        Ok(items) => {
            let count = items.len();
            log::debug!("Replacing list collection with {count} items");
            view.replace_collection(items);
            Ok(count)
        }
        Err(err) => {
            log::error!("Failed to refresh list: {err}");
            Err(err)
        }
    }
}
