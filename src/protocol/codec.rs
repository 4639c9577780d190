//! Newline-delimited JSON framing: one message object per line.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{BufRead, Write};

use crate::renderer::InvalidDepth;

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("malformed message: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidDepth(#[from] InvalidDepth),
    #[error("transport error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn decode<T: DeserializeOwned>(line: &str) -> Result<T, ProtocolError> {
    Ok(serde_json::from_str(line.trim())?)
}

pub fn encode<T: Serialize>(message: &T) -> Result<String, ProtocolError> {
    Ok(serde_json::to_string(message)?)
}

/// Writes one message followed by a newline, and flushes.
pub fn write_message<W: Write, T: Serialize>(writer: &mut W, message: &T) -> Result<(), ProtocolError> {
    let line = encode(message)?;
    writer.write_all(line.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Reads the next non-blank line. `None` at end of input.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>, ProtocolError> {
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if !line.trim().is_empty() {
            return Ok(Some(line));
        }
    }
}
