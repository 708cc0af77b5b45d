use std::sync::Arc;

use crate::{catch::CatchDifficultyAttributes, model::beatmap::Beatmap};

use super::{error::DifficultyResult, Difficulty};

impl Difficulty {
    /// Perform the difficulty calculation on tokio's blocking thread pool.
    ///
    /// Dropping the returned handle does not abort the calculation but its
    /// result will be discarded.
    #[cfg(feature = "async_tokio")]
    pub fn calculate_tokio(
        self,
        map: Arc<Beatmap>,
    ) -> tokio::task::JoinHandle<DifficultyResult<CatchDifficultyAttributes>> {
        tokio::task::spawn_blocking(move || self.calculate(&map))
    }

    /// Perform the difficulty calculation on async-std's blocking thread pool.
    #[cfg(feature = "async_std")]
    pub async fn calculate_async_std(
        self,
        map: Arc<Beatmap>,
    ) -> DifficultyResult<CatchDifficultyAttributes> {
        async_std::task::spawn_blocking(move || self.calculate(&map)).await
    }
}
