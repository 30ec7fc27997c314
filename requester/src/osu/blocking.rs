use super::*;
use tokio::runtime::{Builder, Runtime};

/// The same calls as `OsuApi`, driven to completion on the calling thread.
/// Must not be used from inside an async runtime.
pub struct BlockingOsuApi<F = Reqwest> {
    inner: OsuApi<F>,
    rt: Runtime,
}

impl BlockingOsuApi<Reqwest> {
    pub fn new(key: impl Into<String>) -> Result<Self> {
        Self::from_async(OsuApi::new(key))
    }
}

impl<F: Fetcher> BlockingOsuApi<F> {
    pub fn from_async(inner: OsuApi<F>) -> Result<Self> {
        let rt = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { inner, rt })
    }

    #[inline]
    pub fn inner(&self) -> &OsuApi<F> {
        &self.inner
    }

    pub fn get_beatmap(&self, params: BeatmapParams) -> Result<Option<Beatmap>> {
        self.rt.block_on(self.inner.get_beatmap(params))
    }

    pub fn get_beatmap_set(&self, params: BeatmapParams) -> Result<Vec<Beatmap>> {
        self.rt.block_on(self.inner.get_beatmap_set(params))
    }

    pub fn get_user(&self, params: UserParams) -> Result<Option<User>> {
        self.rt.block_on(self.inner.get_user(params))
    }

    pub fn get_scores(&self, params: ScoresParams) -> Result<Vec<Score>> {
        self.rt.block_on(self.inner.get_scores(params))
    }

    pub fn get_user_best(&self, params: UserScoresParams) -> Result<Vec<UserScore>> {
        self.rt.block_on(self.inner.get_user_best(params))
    }

    pub fn get_user_recent(&self, params: UserScoresParams) -> Result<Vec<UserScore>> {
        self.rt.block_on(self.inner.get_user_recent(params))
    }

    pub fn get_match(&self, match_id: u32) -> Result<Vec<MultiPlayer>> {
        self.rt.block_on(self.inner.get_match(match_id))
    }

    pub fn get_replay(&self, mode: PlayMode, beatmap_id: u32, user_id: u32) -> Result<ReplayFile> {
        self.rt.block_on(self.inner.get_replay(mode, beatmap_id, user_id))
    }
}
