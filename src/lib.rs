#[macro_use]
extern crate log;

extern crate config as lib_config;

pub mod commands;
pub mod config;
pub mod logger;

pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

use std::error::Error;
