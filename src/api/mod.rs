//! Typed call boundary for script-conversion requests.
//!
//! The transport layer (HTTP, FFI, whatever hosts the engine) decodes its
//! own encoding, builds a [`ConvertRequest`], and calls [`convert`]. The
//! caller-side validations live here; the engine underneath assumes it is
//! only ever invoked for the supported direction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::translit::transliterate_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Latin,
    Arabic,
}

impl FromStr for Script {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "latin" => Ok(Script::Latin),
            "arabic" => Ok(Script::Arabic),
            _ => Err(RequestError::UnknownScript(s.to_string())),
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Script::Latin => f.write_str("latin"),
            Script::Arabic => f.write_str("arabic"),
        }
    }
}

// thiserror treats the `source` field of `UnsupportedPair` as the error
// source and therefore requires `Script: std::error::Error`. Satisfy that
// bound so the derive compiles; the default `source()`/`description()` are
// fine for this plain data enum.
impl std::error::Error for Script {}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("missing \"text\" parameter")]
    EmptyText,
    #[error("unknown script: {0}")]
    UnknownScript(String),
    #[error("conversion from \"{source}\" to \"{target}\" is not supported yet")]
    UnsupportedPair { source: Script, target: Script },
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertRequest {
    pub text: String,
    pub source: Script,
    pub target: Script,
}

/// The `{"result": …}` envelope returned to the transport layer.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub result: String,
}

/// Validate a request and run the engine.
pub fn convert(req: &ConvertRequest) -> Result<ConvertResponse, RequestError> {
    if req.text.trim().is_empty() {
        return Err(RequestError::EmptyText);
    }
    if (req.source, req.target) != (Script::Latin, Script::Arabic) {
        return Err(RequestError::UnsupportedPair {
            source: req.source,
            target: req.target,
        });
    }
    Ok(ConvertResponse {
        result: transliterate_text(&req.text),
    })
}
