use super::enums::PlayMode;
use super::mods::Mods;
use super::query::Query;
use crate::{Error, Result};
use std::fmt;

/// Highest `limit` accepted by the score endpoints
pub const MAX_SCORE_LIMIT: u32 = 100;
/// Highest `event_days` accepted by `get_user`
pub const MAX_EVENT_DAYS: u8 = 31;

/// A player, either by the numeric id or by the name.
/// Becomes `u=...&type=id` or `u=...&type=string` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserIdent {
    Id(u32),
    Name(String),
}

impl UserIdent {
    /// Numbers become ids, anything else is a name
    pub fn parse(s: &str) -> Self {
        s.parse().map(Self::Id).unwrap_or_else(|_| Self::Name(s.to_owned()))
    }

    #[inline]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Id(_) => "id",
            Self::Name(_) => "string",
        }
    }

    /// A positive id or a non-empty name
    pub fn is_set(&self) -> bool {
        match self {
            Self::Id(id) => *id > 0,
            Self::Name(name) => !name.is_empty(),
        }
    }
}

impl fmt::Display for UserIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<u32> for UserIdent {
    fn from(id: u32) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for UserIdent {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for UserIdent {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Filters for `get_beatmaps`, used by both the beatmap and the beatmap set lookups
#[derive(Debug, Clone, PartialEq)]
pub struct BeatmapParams {
    /// Beatmap id, or the set id for a set lookup
    pub id: Option<u32>,
    /// `All` means no filter
    pub mode: PlayMode,
    /// Include the converted maps, only matters with a concrete mode
    pub converted: bool,
    pub hash: Option<String>,
    pub limit: u32,
}

impl Default for BeatmapParams {
    fn default() -> Self {
        Self {
            id: None,
            mode: PlayMode::All,
            converted: false,
            hash: None,
            limit: 500,
        }
    }
}

impl BeatmapParams {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn mode(mut self, mode: PlayMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn converted(mut self, converted: bool) -> Self {
        self.converted = converted;
        self
    }

    pub fn hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// `id_name` is `b` for beatmaps and `s` for sets
    pub(crate) fn append_to(&self, id_name: &'static str, query: &mut Query) {
        if let Some(id) = self.id {
            query.push(id_name, id);
        }

        if self.mode.is_concrete() {
            query.push("m", self.mode.code());
        }

        query.push_flag("a", self.converted);

        if let Some(hash) = self.hash.as_ref().filter(|v| !v.is_empty()) {
            query.push("h", hash);
        }

        query.push("limit", self.limit);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserParams {
    pub user: UserIdent,
    pub mode: PlayMode,
    pub event_days: u8,
}

impl UserParams {
    pub fn new(user: impl Into<UserIdent>) -> Self {
        Self {
            user: user.into(),
            mode: PlayMode::Osu,
            event_days: 1,
        }
    }

    pub fn mode(mut self, mode: PlayMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn event_days(mut self, days: u8) -> Self {
        self.event_days = days;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        at_most("event_days", self.event_days.into(), MAX_EVENT_DAYS.into())?;
        concrete(self.mode, "users")
    }

    pub(crate) fn append_to(&self, query: &mut Query) {
        query
            .push("u", &self.user)
            .push("m", self.mode.code())
            .push("type", self.user.kind())
            .push("event_days", self.event_days);
    }
}

/// Leaderboard of a beatmap
#[derive(Debug, Clone, PartialEq)]
pub struct ScoresParams {
    pub beatmap_id: u32,
    /// Only the scores of this player
    pub user: Option<UserIdent>,
    pub mode: PlayMode,
    pub mods: Mods,
    pub limit: u32,
}

impl ScoresParams {
    pub fn new(beatmap_id: u32) -> Self {
        Self {
            beatmap_id,
            user: None,
            mode: PlayMode::Osu,
            mods: Mods::empty(),
            limit: 50,
        }
    }

    pub fn user(mut self, user: impl Into<UserIdent>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn mode(mut self, mode: PlayMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mods(mut self, mods: Mods) -> Self {
        self.mods = mods;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        at_most("limit", self.limit.into(), MAX_SCORE_LIMIT.into())?;
        concrete(self.mode, "scores")
    }

    pub(crate) fn append_to(&self, query: &mut Query) {
        query.push("b", self.beatmap_id);

        if let Some(user) = self.user.as_ref().filter(|v| v.is_set()) {
            query.push("u", user).push("type", user.kind());
        }

        query
            .push("m", self.mode.code())
            .push("mods", self.mods.bits())
            .push("limit", self.limit);
    }
}

/// Best or recent plays of a player
#[derive(Debug, Clone, PartialEq)]
pub struct UserScoresParams {
    pub user: UserIdent,
    pub mode: PlayMode,
    pub limit: u32,
}

impl UserScoresParams {
    pub fn new(user: impl Into<UserIdent>) -> Self {
        Self {
            user: user.into(),
            mode: PlayMode::Osu,
            limit: 10,
        }
    }

    pub fn mode(mut self, mode: PlayMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub(crate) fn validate(&self, what: &str) -> Result<()> {
        at_most("limit", self.limit.into(), MAX_SCORE_LIMIT.into())?;
        concrete(self.mode, what)
    }

    pub(crate) fn append_to(&self, query: &mut Query) {
        query
            .push("u", &self.user)
            .push("type", self.user.kind())
            .push("m", self.mode.code())
            .push("limit", self.limit);
    }
}

pub(crate) fn concrete(mode: PlayMode, what: &str) -> Result<()> {
    if mode.is_concrete() {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "PlayMode can not be set to All for {}",
            what
        )))
    }
}

pub(crate) fn positive(name: &str, value: u32) -> Result<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!("{} must be positive", name)))
    }
}

fn at_most(name: &'static str, value: u64, max: u64) -> Result<()> {
    if value <= max {
        Ok(())
    } else {
        Err(Error::OutOfRange { name, value, max })
    }
}
