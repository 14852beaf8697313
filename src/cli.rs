use clap::Parser;

use crate::{config::Config, units::system::UnitSystem, utils::tree::TreeDepth};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Target directory; defaults to the current working directory
    #[arg(default_value = ".")]
    pub dir: String,

    #[arg(name = "si", long = "si", conflicts_with = "binary")]
    pub si: bool,
    #[arg(
        name = "binary",
        long = "binary",
        short = 'b',
        alias = "bin",
        conflicts_with = "si"
    )]
    pub binary: bool,

    /// Recursive traversal depth; or -1 for no limit
    #[arg(
        name = "max-depth",
        long = "max-depth",
        short = 'm',
        default_value_t = -1,
        allow_negative_numbers = true
    )]
    pub max_depth: i64,
    /// Recursive output depth; or -1 for no limit
    #[arg(
        name = "output-depth",
        long = "output-depth",
        short = 'd',
        default_value_t = 1,
        allow_negative_numbers = true
    )]
    pub output_depth: i64,
}

impl TryInto<Config> for Args {
    type Error = anyhow::Error;

    fn try_into(self) -> Result<Config, Self::Error> {
        let unit_system = if self.binary {
            UnitSystem::Binary
        } else {
            UnitSystem::SI
        };

        Ok(Config {
            dir: self.dir,
            unit_system,
            traversal_depth: TreeDepth::from_cli(self.max_depth)?,
            output_depth: TreeDepth::from_cli(self.output_depth)?,
        })
    }
}
