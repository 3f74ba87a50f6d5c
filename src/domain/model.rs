use serde::Deserialize;
use std::fmt;

pub const CLEAR_ADDRESS: &str = "/clear";
pub const SYNONYM_ADDRESS: &str = "/syn";
pub const ANTONYM_ADDRESS: &str = "/ant";
pub const PARAMS_ADDRESS: &str = "/params";

/// Word relation requested from the word-association service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Synonym,
    Antonym,
}

impl Relation {
    /// Datamuse query parameter for this relation.
    pub fn query_param(self) -> &'static str {
        match self {
            Relation::Synonym => "rel_syn",
            Relation::Antonym => "rel_ant",
        }
    }

    pub fn address(self) -> &'static str {
        match self {
            Relation::Synonym => SYNONYM_ADDRESS,
            Relation::Antonym => ANTONYM_ADDRESS,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Synonym => write!(f, "synonym"),
            Relation::Antonym => write!(f, "antonym"),
        }
    }
}

/// One record of a word service response. Extra fields (score, tags) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct WordRecord {
    pub word: String,
}

/// Synonyms and antonyms in service ranking order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordLists {
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioParams {
    pub tempo: i32,
    pub density: f64,
    pub brightness: f64,
    pub pan: f64,
}

/// Typed OSC argument.
#[derive(Debug, Clone, PartialEq)]
pub enum OscArg {
    Int(i32),
    Float(f32),
    Str(String),
}

impl OscArg {
    pub fn type_tag(&self) -> char {
        match self {
            OscArg::Int(_) => 'i',
            OscArg::Float(_) => 'f',
            OscArg::Str(_) => 's',
        }
    }
}

/// An addressed message as carried by one UDP datagram.
#[derive(Debug, Clone, PartialEq)]
pub struct OscMessage {
    pub address: String,
    pub args: Vec<OscArg>,
}

impl OscMessage {
    pub fn new(address: impl Into<String>, args: Vec<OscArg>) -> Self {
        Self {
            address: address.into(),
            args,
        }
    }

    pub fn clear() -> Self {
        Self::new(CLEAR_ADDRESS, Vec::new())
    }

    pub fn word(relation: Relation, word: &str) -> Self {
        Self::new(relation.address(), vec![OscArg::Str(word.to_string())])
    }

    /// tempo 也以 float 送出，與其他三個參數一致
    pub fn params(params: &AudioParams) -> Self {
        Self::new(
            PARAMS_ADDRESS,
            vec![
                OscArg::Float(params.tempo as f32),
                OscArg::Float(params.density as f32),
                OscArg::Float(params.brightness as f32),
                OscArg::Float(params.pan as f32),
            ],
        )
    }
}

/// Outcome of one run, rendered as the CLI summary line.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub synonyms_sent: usize,
    pub antonyms_sent: usize,
    pub messages_sent: usize,
    pub params: AudioParams,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sent {} syn, {} ant -> tempo {}, dens {:.2}, bright {:.2}, pan {:.2}",
            self.synonyms_sent,
            self.antonyms_sent,
            self.params.tempo,
            self.params.density,
            self.params.brightness,
            self.params.pan
        )
    }
}
