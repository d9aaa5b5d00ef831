//! # Command Layer
//!
//! One module per CLI command. Commands do the work and return a
//! [`CmdResult`]; they never print. Turning results into terminal output is
//! the CLI's job.

use crate::classify::Decision;
use crate::config::ArtisortConfig;
use crate::model::Item;
use crate::rules::Rule;

pub mod check;
pub mod classify;
pub mod config;
pub mod labels;
pub mod template;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// An artifact together with what was decided about it.
#[derive(Debug, Clone)]
pub struct JudgedItem {
    pub item: Item,
    pub decision: Decision,
}

/// A titled list of words the rule sheet accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    pub title: &'static str,
    pub words: Vec<String>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub rules: Vec<Rule>,
    pub judged: Vec<JudgedItem>,
    pub vocabulary: Vec<Vocabulary>,
    pub config: Option<ArtisortConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_rules(mut self, rules: Vec<Rule>) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_judged(mut self, judged: Vec<JudgedItem>) -> Self {
        self.judged = judged;
        self
    }

    pub fn with_vocabulary(mut self, vocabulary: Vec<Vocabulary>) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    pub fn with_config(mut self, config: ArtisortConfig) -> Self {
        self.config = Some(config);
        self
    }
}
