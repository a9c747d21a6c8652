use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::prompts::{
    PLATONIC_STYLE_PROMPT, SOCRATIC_STYLE_PROMPT, STORY_STYLE_PROMPT,
};
use crate::errors::AppError;

/// Teaching persona used to build the dialogue prompt. The wire value is the
/// capitalized variant name, matched exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeachingStyle {
    Socratic,
    Platonic,
    Story,
}

impl TeachingStyle {
    pub fn system_prompt(&self) -> &'static str {
        match self {
            TeachingStyle::Socratic => SOCRATIC_STYLE_PROMPT,
            TeachingStyle::Platonic => PLATONIC_STYLE_PROMPT,
            TeachingStyle::Story => STORY_STYLE_PROMPT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TeachingStyle::Socratic => "Socratic",
            TeachingStyle::Platonic => "Platonic",
            TeachingStyle::Story => "Story",
        }
    }
}

impl FromStr for TeachingStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Socratic" => Ok(TeachingStyle::Socratic),
            "Platonic" => Ok(TeachingStyle::Platonic),
            "Story" => Ok(TeachingStyle::Story),
            other => Err(AppError::InvalidStyle(other.to_string())),
        }
    }
}

impl fmt::Display for TeachingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output contract requested from the model. Plain text is the deployed
/// default; structured mode asks for the JSON dialogue shape instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogueMode {
    Structured,
    #[default]
    PlainText,
}

impl DialogueMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "structured" => Some(DialogueMode::Structured),
            "plain" | "plaintext" | "plain-text" => Some(DialogueMode::PlainText),
            _ => None,
        }
    }
}

/// A finished reed: the model's dialogue text plus the style that shaped it.
/// The text is passed through to the client untouched in both modes.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedReed {
    pub text: String,
    pub style: TeachingStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Teacher,
    Student,
}

/// One exchange in the structured dialogue shape. The server never builds
/// these itself; they pin the JSON contract structured mode asks the model
/// to produce.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DialogueTurn {
    pub speaker: Speaker,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct StructuredDialogue {
    pub dialogues: Vec<DialogueTurn>,
}
