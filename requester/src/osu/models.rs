use super::de;
use super::enums::*;
use super::mods::Mods;
use crate::{Error, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Beatmap {
    #[serde(rename = "approved")]
    pub ranked_status: RankedStatus,
    /// `None` while the map is not ranked
    #[serde(rename = "approved_date", deserialize_with = "de::optional_date")]
    pub ranked_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "de::date")]
    pub last_update: DateTime<Utc>,
    pub artist: String,
    #[serde(deserialize_with = "de::number")]
    pub beatmap_id: u32,
    #[serde(deserialize_with = "de::number")]
    pub beatmapset_id: u32,
    #[serde(deserialize_with = "de::number")]
    pub bpm: f32,
    pub creator: String,
    #[serde(deserialize_with = "de::number")]
    pub creator_id: u32,
    #[serde(rename = "difficultyrating", deserialize_with = "de::number")]
    pub difficulty_rating: f64,
    #[serde(rename = "diff_size", deserialize_with = "de::number")]
    pub cs: f32,
    #[serde(rename = "diff_overall", deserialize_with = "de::number")]
    pub od: f32,
    #[serde(rename = "diff_approach", deserialize_with = "de::number")]
    pub ar: f32,
    #[serde(rename = "diff_drain", deserialize_with = "de::number")]
    pub hp: f32,
    /// Seconds from the first note to the last, breaks excluded
    #[serde(deserialize_with = "de::number")]
    pub hit_length: u32,
    #[serde(rename = "genre_id")]
    pub genre: Genre,
    #[serde(rename = "language_id")]
    pub language: Language,
    pub title: String,
    #[serde(deserialize_with = "de::number")]
    pub total_length: u32,
    /// Difficulty name
    pub version: String,
    pub file_md5: String,
    pub mode: PlayMode,
    pub tags: String,
    #[serde(deserialize_with = "de::number")]
    pub favourite_count: u32,
    #[serde(rename = "playcount", deserialize_with = "de::number")]
    pub play_count: u32,
    #[serde(rename = "passcount", deserialize_with = "de::number")]
    pub pass_count: u32,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "de::number")]
    pub user_id: u32,
    pub username: String,
    #[serde(deserialize_with = "de::number")]
    pub count300: u64,
    #[serde(deserialize_with = "de::number")]
    pub count100: u64,
    #[serde(deserialize_with = "de::number")]
    pub count50: u64,
    #[serde(rename = "playcount", deserialize_with = "de::number")]
    pub play_count: u64,
    #[serde(deserialize_with = "de::number")]
    pub ranked_score: u64,
    #[serde(deserialize_with = "de::number")]
    pub total_score: u64,
    /// Global rank, `0` for inactive players
    #[serde(rename = "pp_rank", deserialize_with = "de::number")]
    pub global_rank: u32,
    #[serde(deserialize_with = "de::number")]
    pub pp_raw: f32,
    #[serde(deserialize_with = "de::number")]
    pub level: f32,
    #[serde(deserialize_with = "de::number")]
    pub accuracy: f32,
    #[serde(rename = "count_rank_ss", deserialize_with = "de::number")]
    pub count_ss: u32,
    #[serde(rename = "count_rank_ssh", deserialize_with = "de::number")]
    pub count_ssh: u32,
    #[serde(rename = "count_rank_s", deserialize_with = "de::number")]
    pub count_s: u32,
    #[serde(rename = "count_rank_sh", deserialize_with = "de::number")]
    pub count_sh: u32,
    #[serde(rename = "count_rank_a", deserialize_with = "de::number")]
    pub count_a: u32,
    pub country: String,
    #[serde(deserialize_with = "de::number")]
    pub total_seconds_played: u64,
    #[serde(rename = "pp_country_rank", deserialize_with = "de::number")]
    pub country_rank: u32,
    pub events: Vec<UserEvent>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserEvent {
    pub display_html: String,
    // Both are opaque strings on the wire, and can be empty for non-beatmap events
    #[serde(deserialize_with = "de::text")]
    pub beatmap_id: String,
    #[serde(deserialize_with = "de::text")]
    pub beatmapset_id: String,
    #[serde(deserialize_with = "de::date")]
    pub date: DateTime<Utc>,
    #[serde(rename = "epicfactor", deserialize_with = "de::number")]
    pub epic_factor: u8,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Score {
    #[serde(deserialize_with = "de::number")]
    pub score_id: u64,
    #[serde(rename = "score", deserialize_with = "de::number")]
    pub total_score: u64,
    pub username: String,
    #[serde(deserialize_with = "de::number")]
    pub count300: u32,
    #[serde(deserialize_with = "de::number")]
    pub count100: u32,
    #[serde(deserialize_with = "de::number")]
    pub count50: u32,
    #[serde(deserialize_with = "de::number")]
    pub countmiss: u32,
    #[serde(deserialize_with = "de::number")]
    pub countkatu: u32,
    #[serde(deserialize_with = "de::number")]
    pub countgeki: u32,
    #[serde(rename = "maxcombo", deserialize_with = "de::number")]
    pub max_combo: u32,
    #[serde(deserialize_with = "de::flag")]
    pub perfect: bool,
    #[serde(rename = "enabled_mods")]
    pub mods: Mods,
    #[serde(deserialize_with = "de::number")]
    pub user_id: u32,
    #[serde(deserialize_with = "de::date")]
    pub date: DateTime<Utc>,
    /// Letter grade as sent by the api, `XH`, `X`, `SH`, `S`, `A`... `F`
    #[serde(rename = "rank")]
    pub grade: String,
    /// `None` for scores on maps without a leaderboard
    #[serde(deserialize_with = "de::optional_number")]
    pub pp: Option<f32>,
    #[serde(deserialize_with = "de::flag")]
    pub replay_available: bool,
}

/// A play from the best/recent list of a player
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserScore {
    #[serde(deserialize_with = "de::number")]
    pub beatmap_id: u32,
    /// Only present on best plays
    #[serde(deserialize_with = "de::optional_number")]
    pub score_id: Option<u64>,
    #[serde(rename = "score", deserialize_with = "de::number")]
    pub total_score: u64,
    #[serde(rename = "maxcombo", deserialize_with = "de::number")]
    pub max_combo: u32,
    #[serde(deserialize_with = "de::number")]
    pub count300: u32,
    #[serde(deserialize_with = "de::number")]
    pub count100: u32,
    #[serde(deserialize_with = "de::number")]
    pub count50: u32,
    #[serde(deserialize_with = "de::number")]
    pub countmiss: u32,
    #[serde(deserialize_with = "de::number")]
    pub countkatu: u32,
    #[serde(deserialize_with = "de::number")]
    pub countgeki: u32,
    #[serde(deserialize_with = "de::flag")]
    pub perfect: bool,
    #[serde(rename = "enabled_mods")]
    pub mods: Mods,
    #[serde(deserialize_with = "de::number")]
    pub user_id: u32,
    #[serde(deserialize_with = "de::date")]
    pub date: DateTime<Utc>,
    #[serde(rename = "rank")]
    pub grade: String,
    #[serde(deserialize_with = "de::optional_number")]
    pub pp: Option<f32>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiPlayer {
    #[serde(rename = "match")]
    pub info: Match,
    pub games: Vec<Game>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Match {
    #[serde(deserialize_with = "de::number")]
    pub match_id: u32,
    pub name: String,
    #[serde(deserialize_with = "de::date")]
    pub start_time: DateTime<Utc>,
    /// `None` while the match is still going
    #[serde(deserialize_with = "de::optional_date")]
    pub end_time: Option<DateTime<Utc>>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Game {
    #[serde(deserialize_with = "de::number")]
    pub game_id: u64,
    #[serde(deserialize_with = "de::date")]
    pub start_time: DateTime<Utc>,
    #[serde(deserialize_with = "de::optional_date")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "de::number")]
    pub beatmap_id: u32,
    pub play_mode: PlayMode,
    #[serde(deserialize_with = "de::number")]
    pub match_type: u32,
    pub scoring_type: ScoringType,
    pub team_type: TeamType,
    /// Mods forced on every player, free mods are on each score
    pub mods: Mods,
    pub scores: Vec<MatchScore>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchScore {
    #[serde(deserialize_with = "de::number")]
    pub slot: u8,
    pub team: Team,
    #[serde(deserialize_with = "de::number")]
    pub user_id: u32,
    #[serde(deserialize_with = "de::number")]
    pub score: u64,
    #[serde(rename = "maxcombo", deserialize_with = "de::number")]
    pub max_combo: u32,
    #[serde(rename = "rank")]
    pub grade: String,
    #[serde(deserialize_with = "de::number")]
    pub count50: u32,
    #[serde(deserialize_with = "de::number")]
    pub count100: u32,
    #[serde(deserialize_with = "de::number")]
    pub count300: u32,
    #[serde(deserialize_with = "de::number")]
    pub countmiss: u32,
    #[serde(deserialize_with = "de::number")]
    pub countgeki: u32,
    #[serde(deserialize_with = "de::number")]
    pub countkatu: u32,
    #[serde(deserialize_with = "de::flag")]
    pub perfect: bool,
    #[serde(deserialize_with = "de::flag")]
    pub pass: bool,
    /// Only set when the match allows free mods
    pub enabled_mods: Option<Mods>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayFile {
    pub content: String,
    pub encoding: String,
}

impl Beatmap {
    pub fn url(&self) -> String {
        format!("https://osu.ppy.sh/b/{}", self.beatmap_id)
    }

    pub fn set_url(&self) -> String {
        format!("https://osu.ppy.sh/s/{}", self.beatmapset_id)
    }
}

impl User {
    #[inline]
    pub fn total_hits(&self) -> u64 {
        self.count300 + self.count100 + self.count50
    }

    pub fn url(&self) -> String {
        format!("https://osu.ppy.sh/u/{}", self.user_id)
    }
}

impl Score {
    pub fn accuracy(&self, mode: PlayMode) -> f32 {
        accuracy(
            mode,
            [
                self.count300,
                self.count100,
                self.count50,
                self.countmiss,
                self.countkatu,
                self.countgeki,
            ],
        )
    }
}

impl UserScore {
    pub fn accuracy(&self, mode: PlayMode) -> f32 {
        accuracy(
            mode,
            [
                self.count300,
                self.count100,
                self.count50,
                self.countmiss,
                self.countkatu,
                self.countgeki,
            ],
        )
    }
}

impl MatchScore {
    pub fn accuracy(&self, mode: PlayMode) -> f32 {
        accuracy(
            mode,
            [
                self.count300,
                self.count100,
                self.count50,
                self.countmiss,
                self.countkatu,
                self.countgeki,
            ],
        )
    }
}

impl MultiPlayer {
    pub fn url(&self) -> String {
        format!("https://osu.ppy.sh/community/matches/{}", self.info.match_id)
    }
}

impl ReplayFile {
    /// The raw replay data (the LZMA stream of an .osr), only base64 is supported
    pub fn decode(&self) -> Result<Vec<u8>> {
        if !self.encoding.eq_ignore_ascii_case("base64") {
            return Err(Error::ReplayEncoding(self.encoding.to_owned()));
        }

        let content: String = self.content.split_whitespace().collect();
        Ok(BASE64.decode(content)?)
    }
}

/// Accuracy in percent from `[300, 100, 50, miss, katu, geki]`.
/// `All` is counted as standard.
fn accuracy(mode: PlayMode, counts: [u32; 6]) -> f32 {
    let [n300, n100, n50, miss, katu, geki] = counts.map(f64::from);

    let (hit, total) = match mode {
        PlayMode::Osu | PlayMode::All => (
            n300 * 300.0 + n100 * 100.0 + n50 * 50.0,
            (n300 + n100 + n50 + miss) * 300.0,
        ),
        PlayMode::Taiko => (n300 + n100 * 0.5, n300 + n100 + miss),
        PlayMode::Ctb => (n300 + n100 + n50, n300 + n100 + n50 + katu + miss),
        PlayMode::Mania => (
            (n300 + geki) * 300.0 + katu * 200.0 + n100 * 100.0 + n50 * 50.0,
            (n300 + geki + katu + n100 + n50 + miss) * 300.0,
        ),
    };

    if total == 0.0 {
        0.0
    } else {
        (hit / total * 100.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn beatmap_from_the_live_format() {
        let beatmap: Beatmap = serde_json::from_value(json!({
            "beatmapset_id": "1",
            "beatmap_id": "75",
            "approved": "1",
            "total_length": "142",
            "hit_length": "109",
            "version": "Normal",
            "file_md5": "a5b99395a42bd55bc5eb1d2411cbdf8b",
            "diff_size": "4",
            "diff_overall": "6",
            "diff_approach": "6",
            "diff_drain": "6",
            "mode": "0",
            "approved_date": "2007-10-06 17:46:31",
            "last_update": "2007-10-06 17:46:31",
            "artist": "Kenji Ninuma",
            "title": "DISCO PRINCE",
            "creator": "peppy",
            "creator_id": "2",
            "bpm": "119.999",
            "source": "",
            "tags": "katamari",
            "genre_id": "2",
            "language_id": "3",
            "favourite_count": "511",
            "playcount": "1138398",
            "passcount": "202485",
            "difficultyrating": "2.4069502353668213",
            "max_combo": "314"
        }))
        .unwrap();

        assert_eq!(beatmap.beatmap_id, 75);
        assert_eq!(beatmap.ranked_status, RankedStatus::Ranked);
        assert!(beatmap.ranked_date.is_some());
        assert_eq!(beatmap.genre, Genre::Game);
        assert_eq!(beatmap.language, Language::Japanese);
        assert_eq!(beatmap.mode, PlayMode::Osu);
        assert_eq!(beatmap.play_count, 1138398);
        assert!((beatmap.difficulty_rating - 2.40695).abs() < 1e-4);
        assert_eq!(beatmap.url(), "https://osu.ppy.sh/b/75");
    }

    #[test]
    fn unranked_beatmap_has_no_date() {
        let beatmap: Beatmap = serde_json::from_value(json!({
            "beatmap_id": 1,
            "approved": -2,
            "approved_date": null,
        }))
        .unwrap();

        assert_eq!(beatmap.ranked_status, RankedStatus::Graveyard);
        assert_eq!(beatmap.ranked_date, None);
    }

    #[test]
    fn user_with_events() {
        let user: User = serde_json::from_value(json!({
            "user_id": "2",
            "username": "peppy",
            "count300": "2500",
            "count100": "300",
            "count50": "40",
            "pp_rank": null,
            "pp_raw": "0",
            "country": "AU",
            "events": [{
                "display_html": "<b>peppy</b> has lost first place",
                "beatmap_id": "75",
                "beatmapset_id": "1",
                "date": "2019-08-01 12:00:00",
                "epicfactor": "1"
            }]
        }))
        .unwrap();

        assert_eq!(user.user_id, 2);
        assert_eq!(user.global_rank, 0);
        assert_eq!(user.total_hits(), 2840);
        assert_eq!(user.events.len(), 1);
        assert_eq!(user.events[0].beatmap_id, "75");
        assert_eq!(user.events[0].epic_factor, 1);
    }

    #[test]
    fn score_flags_and_pp() {
        let score: Score = serde_json::from_value(json!({
            "score_id": "7",
            "score": "1000000",
            "username": "peppy",
            "count300": "100",
            "count100": "0",
            "count50": "0",
            "countmiss": "0",
            "maxcombo": "150",
            "perfect": "1",
            "enabled_mods": "24",
            "date": "2020-01-01 00:00:00",
            "rank": "SH",
            "pp": null,
            "replay_available": "0"
        }))
        .unwrap();

        assert!(score.perfect);
        assert!(!score.replay_available);
        assert_eq!(score.mods, Mods::HIDDEN | Mods::HARD_ROCK);
        assert_eq!(score.pp, None);
        assert_eq!(score.grade, "SH");
        assert_eq!(score.accuracy(PlayMode::Osu), 100.0);
    }

    #[test]
    fn accuracy_per_mode() {
        // 300, 100, 50, miss, katu, geki
        let counts = [90, 10, 0, 0, 0, 0];
        assert!((accuracy(PlayMode::Osu, counts) - 93.3333).abs() < 1e-3);
        assert!((accuracy(PlayMode::Taiko, counts) - 95.0).abs() < 1e-3);
        assert!((accuracy(PlayMode::Ctb, counts) - 100.0).abs() < 1e-3);
        assert_eq!(accuracy(PlayMode::Mania, [0; 6]), 0.0);
    }

    #[test]
    fn replay_decode() {
        let replay = ReplayFile {
            content: "XQAAIAA=".to_owned(),
            encoding: "base64".to_owned(),
        };
        assert_eq!(replay.decode().unwrap(), vec![0x5d, 0, 0, 0x20, 0]);

        let other = ReplayFile {
            encoding: "lzma".to_owned(),
            ..replay.clone()
        };
        assert!(matches!(other.decode(), Err(Error::ReplayEncoding(_))));

        let broken = ReplayFile {
            content: "not base64!".to_owned(),
            ..replay
        };
        assert!(matches!(broken.decode(), Err(Error::ReplayContent(_))));
    }
}
