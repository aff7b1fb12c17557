#[macro_use]
extern crate log;

use clap::{Parser, Subcommand};
use pathkit::config::{self, PathmapConfig, CONFIG_FILE_NAME};
use pathkit::{combine, combine_with, ensure_dir, BaseDirectory, FixedDirectory, PathMapper};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pathmap", version, about = "Combine and map paths")]
pub struct Opt {
    /// Configuration file, defaults to ~/.pathkit/pathmap.yml then /etc/pathkit/pathmap.yml
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Join fragments with a single `/`
    #[command(name = "combine")]
    Combine { fragments: Vec<String> },
    /// Append fragments to a base path
    #[command(name = "combine-with")]
    CombineWith {
        base: String,
        #[arg(conflicts_with = "absent")]
        fragments: Vec<String>,
        /// Pass a single absent fragment: the base is printed untouched
        #[arg(long)]
        absent: bool,
    },
    /// Resolve a relative path against the executable directory
    #[command(name = "map")]
    Map {
        relative: String,
        /// self-hosted, web-hosted, project or a layout from the configuration
        #[arg(short, long)]
        layout: Option<String>,
        /// Raw upward modifier, e.g. `/../..`
        #[arg(short, long, conflicts_with = "layout", allow_hyphen_values = true)]
        modifier: Option<String>,
        /// Use this directory instead of the executable directory
        #[arg(short, long)]
        base_dir: Option<String>,
    },
    /// Create a directory and its parents if missing
    #[command(name = "ensure-dir")]
    EnsureDir { dir: String },
}

/// Runs a command and returns what should be printed.
pub fn run(opt: Opt) -> Result<String, anyhow::Error> {
    let config: PathmapConfig =
        config::parse_optional(&opt.config, CONFIG_FILE_NAME)?.unwrap_or_default();
    debug!("pathmap starting with config {:#?}", config);
    match opt.command {
        Command::Combine { fragments } => Ok(combine(&fragments)),
        Command::CombineWith {
            base,
            fragments,
            absent,
        } => {
            if absent {
                Ok(combine_with(&base, [None::<&str>]))
            } else {
                Ok(combine_with(&base, &fragments))
            }
        }
        Command::Map {
            relative,
            layout,
            modifier,
            base_dir,
        } => {
            let provider: Box<dyn BaseDirectory> = match base_dir {
                Some(dir) => Box::new(FixedDirectory::new(dir)),
                None => config.base_directory_provider(),
            };
            let mapper = PathMapper::new(provider);
            let mapped = match (modifier, layout) {
                (Some(modifier), _) => {
                    mapper.map_absolute_path(&relative, Some(modifier.as_str()))?
                }
                (None, Some(name)) => {
                    mapper.map_layout_path(&relative, &config.layout(&name)?)?
                }
                (None, None) => mapper.map_layout_path(&relative, &config.default_layout()?)?,
            };
            Ok(mapped)
        }
        Command::EnsureDir { dir } => Ok(ensure_dir(dir)?),
    }
}
