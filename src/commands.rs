use crate::Result;
use requester::osu::*;
use requester::{Fetcher, OsuApi};
use std::fmt::Debug;

pub const USAGE: &str = "\
usage: opi <command> [args]

  beatmap <beatmap id>
  set     <beatmapset id>
  user    <user id | name>
  scores  <beatmap id> [user id | name]
  best    <user id | name>
  recent  <user id | name>
  match   <match id>
  replay  <mode> <beatmap id> <user id>";

/// One api call, straight from the command line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Beatmap(u32),
    Set(u32),
    User(UserIdent),
    Scores {
        beatmap_id: u32,
        user: Option<UserIdent>,
    },
    Best(UserIdent),
    Recent(UserIdent),
    Match(u32),
    Replay {
        mode: PlayMode,
        beatmap_id: u32,
        user_id: u32,
    },
}

impl Command {
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args = args
            .into_iter()
            .map(|v| v.as_ref().to_owned())
            .collect::<Vec<_>>();

        let (name, rest) = match args.split_first() {
            Some((name, rest)) => (name.as_str(), rest),
            None => return Err(USAGE.into()),
        };

        let arg = |index: usize| -> Result<&str> {
            rest.get(index)
                .map(String::as_str)
                .ok_or_else(|| format!("missing argument for `{}`\n\n{}", name, USAGE).into())
        };

        let id = |index: usize| -> Result<u32> {
            let value = arg(index)?;
            value
                .parse()
                .map_err(|_| format!("`{}` is not a valid id", value).into())
        };

        let command = match name {
            "beatmap" => Self::Beatmap(id(0)?),
            "set" => Self::Set(id(0)?),
            "user" => Self::User(UserIdent::parse(arg(0)?)),
            "scores" => Self::Scores {
                beatmap_id: id(0)?,
                user: rest.get(1).map(|v| UserIdent::parse(v)),
            },
            "best" => Self::Best(UserIdent::parse(arg(0)?)),
            "recent" => Self::Recent(UserIdent::parse(arg(0)?)),
            "match" => Self::Match(id(0)?),
            "replay" => Self::Replay {
                mode: arg(0)?.parse()?,
                beatmap_id: id(1)?,
                user_id: id(2)?,
            },
            other => return Err(format!("unknown command `{}`\n\n{}", other, USAGE).into()),
        };

        Ok(command)
    }

    /// Do the call and render the result for the terminal
    pub async fn run<F: Fetcher>(self, api: &OsuApi<F>, mode: PlayMode) -> Result<String> {
        debug!("Running {:?} in {}", self, mode);

        let output = match self {
            Self::Beatmap(id) => found(api.get_beatmap(BeatmapParams::new().id(id)).await?),
            Self::Set(id) => list(api.get_beatmap_set(BeatmapParams::new().id(id)).await?),
            Self::User(user) => found(api.get_user(UserParams::new(user).mode(mode)).await?),
            Self::Scores { beatmap_id, user } => {
                let mut params = ScoresParams::new(beatmap_id).mode(mode);
                params.user = user;
                list(api.get_scores(params).await?)
            }
            Self::Best(user) => {
                list(api.get_user_best(UserScoresParams::new(user).mode(mode)).await?)
            }
            Self::Recent(user) => {
                list(api.get_user_recent(UserScoresParams::new(user).mode(mode)).await?)
            }
            Self::Match(id) => list(api.get_match(id).await?),
            Self::Replay {
                mode,
                beatmap_id,
                user_id,
            } => {
                let replay = api.get_replay(mode, beatmap_id, user_id).await?;
                let data = replay.decode()?;
                format!("{} bytes of {} replay data", data.len(), replay.encoding)
            }
        };

        Ok(output)
    }
}

fn found<T: Debug>(value: Option<T>) -> String {
    match value {
        Some(v) => format!("{:#?}", v),
        None => String::from("Not found"),
    }
}

fn list<T: Debug>(values: Vec<T>) -> String {
    if values.is_empty() {
        String::from("Not found")
    } else {
        format!("{:#?}", values)
    }
}
