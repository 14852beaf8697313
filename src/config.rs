use std::ffi::OsString;

use anyhow::anyhow;
use clap::Parser;

use crate::{cli::Args, units::system::UnitSystem, utils::tree::TreeDepth};

pub struct Config {
    pub dir: String,
    pub unit_system: UnitSystem,
    pub traversal_depth: TreeDepth,
    pub output_depth: TreeDepth,
}

impl Config {
    pub fn parse<I, T>(itr: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Args::try_parse_from(itr) {
            Ok(args) => Ok(args.try_into()?),
            Err(err) => Err(anyhow!("error parsing arguments into Config: {}", err)),
        }
    }
}
