//! # Validation
//!
//! Pure checks over raw field values. Both are total and side effect free.
//!
//! ## Rules
//! - Full name: trimmed length within `[3, 20]`, counted in UTF-16 code units
//!   the way a browser counts, with a byte order mark trimmed like whitespace
//! - Size: exactly one of `S`, `M`, `L`, case sensitive

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const FULL_NAME_MIN: usize = 3;
pub const FULL_NAME_MAX: usize = 20;

/// Banner shown when a submit is rejected.
pub const SUBMIT_FAILURE: &str = "Something went wrong";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Full name must be at least 3 characters")]
    NameTooShort,

    #[error("Full name must be at most 20 characters")]
    NameTooLong,

    #[error("size must be S or M or L")]
    SizeIncorrect,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    #[default]
    #[serde(rename = "")]
    Unselected,
    #[serde(rename = "S")]
    Small,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
}

impl Size {
    pub fn from_code(raw: &str) -> Option<Self> {
        match raw {
            "S" => Some(Size::Small),
            "M" => Some(Size::Medium),
            "L" => Some(Size::Large),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Size::Unselected => "",
            Size::Small => "S",
            Size::Medium => "M",
            Size::Large => "L",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Size::Unselected => "",
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }

    pub fn is_selected(self) -> bool {
        self != Size::Unselected
    }
}

pub fn trimmed_len(raw: &str) -> usize {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .encode_utf16()
        .count()
}

pub fn validate_full_name(raw: &str) -> Result<(), ValidationError> {
    let len = trimmed_len(raw);

    if len < FULL_NAME_MIN {
        Err(ValidationError::NameTooShort)
    } else if len > FULL_NAME_MAX {
        Err(ValidationError::NameTooLong)
    } else {
        Ok(())
    }
}

pub fn validate_size(raw: &str) -> Result<(), ValidationError> {
    Size::from_code(raw)
        .map(|_| ())
        .ok_or(ValidationError::SizeIncorrect)
}

/// Field errors as shown next to each input. Empty means no error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationState {
    pub full_name_error: String,
    pub size_error: String,
}

impl ValidationState {
    pub fn set_full_name(&mut self, raw: &str) {
        self.full_name_error = message(validate_full_name(raw));
    }

    pub fn set_size(&mut self, raw: &str) {
        self.size_error = message(validate_size(raw));
    }

    pub fn is_clear(&self) -> bool {
        self.full_name_error.is_empty() && self.size_error.is_empty()
    }
}

fn message(result: Result<(), ValidationError>) -> String {
    result.err().map(|e| e.to_string()).unwrap_or_default()
}
