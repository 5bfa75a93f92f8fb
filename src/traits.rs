use std::error::Error;

use async_trait::async_trait;

use crate::task::RemoteTask;

/// A remote source of task records.
///
/// Fetching is the only suspending operation of the planner core. An empty list is the regular
/// "no data yet" answer, not an error; only transport problems are reported as errors. The core
/// never retries a failed fetch, that is up to the caller.
#[async_trait]
pub trait TaskSource {
    /// Fetch the current task records from this source.
    /// This can be a long process (e.g. in case of a remote server), or can even fail
    async fn fetch_tasks(&self) -> Result<Vec<RemoteTask>, Box<dyn Error>>;
}
