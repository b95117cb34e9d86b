use std::fmt;

use clap::ValueEnum;

use crate::properties::{KEYWORDS, Properties};

/// Separator placed between keyword tokens.
pub const SEPARATOR: &str = "; ";

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Instrument {
    Bass,
    Guitar,
    Ukulele,
}

impl Instrument {
    pub fn name(self) -> &'static str {
        match self {
            Instrument::Bass => "bass",
            Instrument::Guitar => "guitar",
            Instrument::Ukulele => "ukulele",
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tags describing one song chart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tags {
    pub chords: bool,
    pub jon: bool,
    /// Song key, already in its canonical enharmonic spelling.
    pub key: Option<String>,
    pub youtube: Option<String>,
    pub spotify: Option<String>,
    pub instruments: Vec<Instrument>,
    pub tab: bool,
}

impl Tags {
    /// Keyword tokens in their fixed order.
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens = Vec::new();
        if self.chords {
            tokens.push("#chords".to_string());
        }
        if self.jon {
            tokens.push("#jon".to_string());
        }
        if let Some(key) = &self.key {
            tokens.push(format!("#key={}", key));
        }
        if let Some(url) = &self.youtube {
            tokens.push(url.clone());
        }
        if let Some(url) = &self.spotify {
            tokens.push(url.clone());
        }
        tokens.extend(self.instruments.iter().map(|instrument| format!("#{}", instrument)));
        if self.tab {
            tokens.push("#tab".to_string());
        }
        tokens
    }

    /// Properties to write, with no `Keywords` entry when there are no tokens.
    pub fn to_properties(&self) -> Properties {
        let mut props = Properties::new();
        let tokens = self.tokens();
        if !tokens.is_empty() {
            props.set(KEYWORDS, tokens.join(SEPARATOR));
        }
        props
    }
}
