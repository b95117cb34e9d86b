//! Command line interface.

use std::path::{Path, PathBuf};

use clap::builder::PossibleValuesParser;
use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand};

use crate::enharmonic::{USER_KEYS, normalize_key};
use crate::keywords::{Instrument, Tags};
use crate::strategy::Strategy;
use crate::{Error, Result};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Read and write the keywords of song-chart PDF files.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Log more (-v for info, -vv for debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand, Debug)]
pub enum Action {
    /// Read pdf properties
    Read {
        /// PDF file
        file: PathBuf,
    },
    /// Write pdf properties
    Write(WriteArgs),
}

impl Action {
    pub fn file(&self) -> &Path {
        match self {
            Action::Read { file } => file,
            Action::Write(args) => &args.file,
        }
    }
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("strategy").required(true).args(["merge", "overwrite"])))]
pub struct WriteArgs {
    /// PDF file
    pub file: PathBuf,

    /// Write the song key
    #[arg(long, value_parser = PossibleValuesParser::new(USER_KEYS.iter().copied()))]
    pub key: Option<String>,

    #[arg(long)]
    pub chords: bool,

    #[arg(long)]
    pub jon: bool,

    /// Instruments the chart is written for; a repeated flag replaces the earlier list
    #[arg(short = 'i', long, value_enum, num_args = 1.., action = ArgAction::Set, overrides_with = "instrument")]
    pub instrument: Vec<Instrument>,

    #[arg(short = 't', long)]
    pub tab: bool,

    /// Youtube link
    #[arg(long, visible_alias = "yt", value_name = "URL")]
    pub youtube: Option<String>,

    /// Spotify link
    #[arg(long, visible_alias = "sp", value_name = "URL")]
    pub spotify: Option<String>,

    /// Merge keywords instead of overwriting
    #[arg(long)]
    pub merge: bool,

    /// Overwrite keywords
    #[arg(long)]
    pub overwrite: bool,
}

impl WriteArgs {
    pub fn strategy(&self) -> Strategy {
        if self.merge { Strategy::Merge } else { Strategy::Overwrite }
    }

    pub fn tags(&self) -> Tags {
        Tags {
            chords: self.chords,
            jon: self.jon,
            key: self.key.as_deref().map(normalize_key).map(str::to_string),
            youtube: self.youtube.clone(),
            spotify: self.spotify.clone(),
            instruments: self.instrument.clone(),
            tab: self.tab,
        }
    }
}

/// Checks that `path` names a PDF file that exists. The name is checked
/// first, without touching the filesystem.
pub fn validate_pdf_path(path: &Path) -> Result<()> {
    if !path.to_string_lossy().to_lowercase().ends_with(".pdf") {
        return Err(Error::NotPdf(path.to_path_buf()));
    }
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    Ok(())
}
