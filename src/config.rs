//! Load-time configuration from the environment and the command line.
//!
//! `CATNAP_*` environment variables are read through `figment`; command-line
//! flags are applied on top of them.

use std::path::PathBuf;

use figment::providers::Env;
use figment::Figment;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Deserialize;

use crate::asset::DEFAULT_ASSET_DIR;
use crate::error::ConfigError;

/// Prefix of every environment variable the game reads.
pub const ENV_PREFIX: &str = "CATNAP_";

pub const USAGE: &str = "\
Usage: catnap [OPTIONS]

Options:
  --assets <DIR>  Directory to load sprites, fonts and sounds from [env: CATNAP_ASSETS] [default: assets]
  --mute          Start with audio muted [env: CATNAP_MUTE]
  --seed <U64>    Seed the respawn RNG for a reproducible session [env: CATNAP_SEED]
  -h, --help      Print this help
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub assets_dir: PathBuf,
    pub muted: bool,
    pub seed: Option<u64>,
    pub show_help: bool,
}

/// Settings as they arrive from the environment, before flags are applied.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    assets: Option<PathBuf>,
    #[serde(default)]
    mute: bool,
    seed: Option<u64>,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            assets_dir: raw
                .assets
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_DIR)),
            muted: raw.mute,
            seed: raw.seed,
            show_help: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        RawConfig::default().into()
    }
}

impl Config {
    /// The environment provider: `CATNAP_ASSETS`, `CATNAP_MUTE` and `CATNAP_SEED`.
    pub fn figment() -> Figment {
        Figment::new().merge(Env::prefixed(ENV_PREFIX))
    }

    /// Reads the environment, then the process arguments.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(std::env::args().skip(1), Self::figment())
    }

    /// Extracts settings from `figment`, then applies `args` (without the program name) over them.
    pub fn load<I, S>(args: I, figment: Figment) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raw: RawConfig = figment
            .extract()
            .map_err(|e| ConfigError::Environment(e.to_string()))?;
        let mut config = Config::from(raw);
        config.apply_args(args)?;
        Ok(config)
    }

    /// Parses `args` over the defaults, ignoring the environment.
    pub fn parse<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Config::default();
        config.apply_args(args)?;
        Ok(config)
    }

    fn apply_args<I, S>(&mut self, args: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--assets" => {
                    let dir = args.next().ok_or(ConfigError::MissingValue("--assets"))?;
                    self.assets_dir = PathBuf::from(dir);
                }
                "--mute" => self.muted = true,
                "--seed" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--seed"))?;
                    let seed = value
                        .parse::<u64>()
                        .map_err(|_| ConfigError::InvalidValue { flag: "--seed", value })?;
                    self.seed = Some(seed);
                }
                "-h" | "--help" => self.show_help = true,
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }
        Ok(())
    }

    /// The RNG used for hazard respawns: seeded if requested, otherwise from the thread RNG.
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        }
    }
}
