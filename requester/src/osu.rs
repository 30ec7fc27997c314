//! osu! api v1, https://github.com/ppy/osu-api/wiki
//!
//! Every call validates its parameters first and sends nothing when they are wrong,
//! then does exactly one GET. An empty answer is `None` or an empty `Vec`, not an error.

mod blocking;
mod de;
mod enums;
mod models;
mod mods;
mod params;
mod query;

pub use blocking::BlockingOsuApi;
pub use enums::*;
pub use models::*;
pub use mods::Mods;
pub use params::*;
pub use query::Query;

use crate::{Error, Fetcher, Reqwest, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub const API_ENDPOINT: &str = "https://osu.ppy.sh/api";

/// The api key is bound once here and sent as `k` on every request.
/// Holds no other state, so it can be shared between tasks freely.
pub struct OsuApi<F = Reqwest> {
    key: String,
    base: String,
    fetcher: F,
}

impl OsuApi<Reqwest> {
    pub fn new(key: impl Into<String>) -> Self {
        Self::with_fetcher(key, Reqwest::new())
    }
}

impl<F: Fetcher> OsuApi<F> {
    pub fn with_fetcher(key: impl Into<String>, fetcher: F) -> Self {
        Self {
            key: key.into(),
            base: API_ENDPOINT.to_owned(),
            fetcher,
        }
    }

    /// Use a mirror of the api instead of osu.ppy.sh
    pub fn base_url(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    #[inline]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    #[inline]
    fn query(&self, endpoint: &'static str) -> Query {
        Query::new(endpoint, &self.key)
    }

    async fn send(&self, query: &Query) -> Result<Value> {
        debug!("GET {}", query.redacted());

        let body = self.fetcher.fetch(&query.url(&self.base)).await?;
        trace!("/{} answered with {} bytes", query.endpoint(), body.len());

        parse(&body)
    }

    async fn request<T: DeserializeOwned>(&self, query: &Query) -> Result<T> {
        let value = self.send(query).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// The first beatmap matching the filters
    pub async fn get_beatmap(&self, params: BeatmapParams) -> Result<Option<Beatmap>> {
        let mut query = self.query("get_beatmaps");
        params.append_to("b", &mut query);

        let beatmaps: Vec<Beatmap> = self.request(&query).await?;
        Ok(beatmaps.into_iter().next())
    }

    /// Every difficulty of a set, `params.id` being the set id
    pub async fn get_beatmap_set(&self, params: BeatmapParams) -> Result<Vec<Beatmap>> {
        let mut query = self.query("get_beatmaps");
        params.append_to("s", &mut query);

        self.request(&query).await
    }

    pub async fn get_user(&self, params: UserParams) -> Result<Option<User>> {
        params.validate()?;

        let mut query = self.query("get_user");
        params.append_to(&mut query);

        let users: Vec<User> = self.request(&query).await?;
        Ok(users.into_iter().next())
    }

    pub async fn get_scores(&self, params: ScoresParams) -> Result<Vec<Score>> {
        params.validate()?;

        let mut query = self.query("get_scores");
        params.append_to(&mut query);

        self.request(&query).await
    }

    pub async fn get_user_best(&self, params: UserScoresParams) -> Result<Vec<UserScore>> {
        params.validate("user best")?;

        let mut query = self.query("get_user_best");
        params.append_to(&mut query);

        self.request(&query).await
    }

    /// Plays of the last 24 hours
    pub async fn get_user_recent(&self, params: UserScoresParams) -> Result<Vec<UserScore>> {
        params.validate("user recent")?;

        let mut query = self.query("get_user_recent");
        params.append_to(&mut query);

        self.request(&query).await
    }

    /// A match is a list on this side even though one id is one match
    pub async fn get_match(&self, match_id: u32) -> Result<Vec<MultiPlayer>> {
        let mut query = self.query("get_match");
        query.push("mp", match_id);

        let value = self.send(&query).await?;
        decode_matches(value)
    }

    pub async fn get_replay(
        &self,
        mode: PlayMode,
        beatmap_id: u32,
        user_id: u32,
    ) -> Result<ReplayFile> {
        params::concrete(mode, "replays")?;
        params::positive("beatmap_id", beatmap_id)?;
        params::positive("user_id", user_id)?;

        let mut query = self.query("get_replay");
        query
            .push("m", mode.code())
            .push("b", beatmap_id)
            .push("u", user_id);

        self.request(&query).await
    }
}

/// Parse the body, turning the `{"error": "..."}` answers of the api into `Error::Api`
fn parse(body: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(body)?;

    match value.get("error").and_then(Value::as_str) {
        Some(message) => Err(Error::Api(message.to_owned())),
        None => Ok(value),
    }
}

/// The live api gives a single object, and `{"match": 0, "games": []}` for an unknown id
fn decode_matches(value: Value) -> Result<Vec<MultiPlayer>> {
    let matches = match value {
        Value::Array(_) => serde_json::from_value(value)?,
        Value::Object(ref map) if !map.get("match").map_or(false, Value::is_object) => Vec::new(),
        value => vec![serde_json::from_value(value)?],
    };

    Ok(matches)
}
