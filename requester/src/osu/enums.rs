use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Integer coded enum, accepting both `1` and `"1"` on the wire.
/// The variant with code `0` must be the `#[default]` one, `null` decodes to it.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $code ),+
        }

        impl $name {
            #[inline]
            pub fn code(self) -> i32 {
                self as i32
            }
        }

        impl TryFrom<i64> for $name {
            type Error = i64;

            fn try_from(code: i64) -> Result<Self, i64> {
                $(
                    if code == $code {
                        return Ok(Self::$variant);
                    }
                )+

                Err(code)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_i32(self.code())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code: i64 = super::de::number(deserializer)?;

                Self::try_from(code).map_err(|code| {
                    D::Error::custom(format_args!(
                        "unknown {} code {}",
                        stringify!($name),
                        code
                    ))
                })
            }
        }
    };
}

wire_enum! {
    pub enum PlayMode {
        #[default]
        Osu = 0,
        Taiko = 1,
        Ctb = 2,
        Mania = 3,
        /// Only meaningful as a filter for beatmap lookups
        All = 4,
    }
}

wire_enum! {
    pub enum RankedStatus {
        Graveyard = -2,
        Wip = -1,
        #[default]
        Pending = 0,
        Ranked = 1,
        Approved = 2,
        Qualified = 3,
        Loved = 4,
    }
}

// 8 is missing on the api as well
wire_enum! {
    pub enum Genre {
        #[default]
        Any = 0,
        Unspecified = 1,
        Game = 2,
        Anime = 3,
        Rock = 4,
        Pop = 5,
        Other = 6,
        Novelty = 7,
        HipHop = 9,
        Electronic = 10,
    }
}

wire_enum! {
    pub enum Language {
        #[default]
        Any = 0,
        Other = 1,
        English = 2,
        Japanese = 3,
        Chinese = 4,
        Instrumental = 5,
        Korean = 6,
        French = 7,
        German = 8,
        Swedish = 9,
        Spanish = 10,
        Italian = 11,
    }
}

wire_enum! {
    pub enum Team {
        #[default]
        None = 0,
        Red = 1,
        Blue = 2,
    }
}

wire_enum! {
    /// How the players of a multiplayer game are grouped
    pub enum TeamType {
        #[default]
        HeadToHead = 0,
        TagCoop = 1,
        TeamVs = 2,
        TagTeamVs = 3,
    }
}

wire_enum! {
    pub enum ScoringType {
        #[default]
        Score = 0,
        Accuracy = 1,
        Combo = 2,
        ScoreV2 = 3,
    }
}

impl PlayMode {
    /// One of the four real modes, i.e. not `All`
    #[inline]
    pub fn is_concrete(self) -> bool {
        self != Self::All
    }
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Osu => "osu!",
            Self::Taiko => "osu!taiko",
            Self::Ctb => "osu!catch",
            Self::Mania => "osu!mania",
            Self::All => "all",
        };

        f.write_str(name)
    }
}

/// Either the wire code or a name, `"2"`, `"ctb"` and `"fruits"` are all `Ctb`
impl FromStr for PlayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<i64>() {
            return Self::try_from(code).map_err(|code| format!("unknown mode code {}", code));
        }

        match s.to_lowercase().as_str() {
            "osu" | "std" | "standard" => Ok(Self::Osu),
            "taiko" => Ok(Self::Taiko),
            "ctb" | "catch" | "fruits" => Ok(Self::Ctb),
            "mania" => Ok(Self::Mania),
            "all" => Ok(Self::All),
            other => Err(format!("unknown mode `{}`", other)),
        }
    }
}

impl RankedStatus {
    /// Maps with a public leaderboard
    pub fn has_leaderboard(self) -> bool {
        matches!(
            self,
            Self::Ranked | Self::Approved | Self::Qualified | Self::Loved
        )
    }
}
