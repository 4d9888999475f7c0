//! Book Log library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// The tab shown when the app opens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartTab {
    #[default]
    Home,
    Add,
    History,
    Genres,
}

impl FromStr for StartTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}
