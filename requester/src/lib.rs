#[macro_use]
extern crate async_trait;

#[macro_use]
extern crate log;

mod error;
mod fetcher;
pub mod osu;

pub use error::{Error, Result};
pub use fetcher::Fetcher;
pub use osu::{BlockingOsuApi, OsuApi};

pub use reqwest::Client as Reqwest;
pub use reqwest::Error as ReqwestError;
