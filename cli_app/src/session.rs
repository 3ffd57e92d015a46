//! Interactive limiter session: read samples and a dB threshold from a text
//! stream, limit the samples, print the result.

use hardlimit_core::core::parameter::THRESHOLD;
use hardlimit_core::core::units::db_to_linear;
use hardlimit_core::{FrameProcessor, ProcessError};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Upper bound on the up-front reservation; the count comes from untrusted input.
const MAX_RESERVED_SAMPLES: usize = 4096;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid number of samples.")]
    InvalidCount,
    #[error("Invalid input for audio data (sample {index}).")]
    InvalidSample { index: usize },
    #[error("Invalid threshold value.")]
    InvalidThreshold,
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Splits a line-oriented reader into whitespace-separated tokens, reading
/// only as many lines as needed.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        TokenReader {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Parses the next token; `None` if input ended or the token did not parse.
    pub fn parse_next<T: FromStr>(&mut self) -> io::Result<Option<T>> {
        Ok(self.next_token()?.and_then(|token| token.parse().ok()))
    }
}

/// Everything a session needs before processing.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionInput {
    pub samples: Vec<f32>,
    pub threshold_db: f32,
}

impl SessionInput {
    pub fn threshold_linear(&self) -> f32 {
        db_to_linear(self.threshold_db)
    }
}

/// Reads a sample count, that many samples and a dB threshold.
///
/// The threshold is only read from `reader` when `threshold_db` is `None`.
/// Prompts are written to `prompts`; pass [`io::sink`] to suppress them.
pub fn read_session<R: BufRead, W: Write>(
    reader: R,
    prompts: &mut W,
    threshold_db: Option<f32>,
) -> Result<SessionInput, InputError> {
    let mut tokens = TokenReader::new(reader);

    write!(prompts, "Enter the number of samples: ")?;
    prompts.flush()?;
    let count = match tokens.parse_next::<i32>()? {
        Some(n) if n > 0 => n as usize,
        _ => return Err(InputError::InvalidCount),
    };

    writeln!(prompts, "Enter {} audio samples:", count)?;
    prompts.flush()?;
    let mut samples = Vec::with_capacity(count.min(MAX_RESERVED_SAMPLES));
    for index in 0..count {
        let sample = tokens
            .parse_next::<f32>()?
            .ok_or(InputError::InvalidSample { index })?;
        samples.push(sample);
    }

    let threshold_db = match threshold_db {
        Some(db) => db,
        None => {
            write!(prompts, "Enter the threshold value in dB: ")?;
            prompts.flush()?;
            tokens
                .parse_next::<f32>()?
                .ok_or(InputError::InvalidThreshold)?
        }
    };

    Ok(SessionInput {
        samples,
        threshold_db,
    })
}

/// Configures `processor` with the session threshold and limits a copy of the samples.
pub fn process_session(
    input: &SessionInput,
    processor: &mut dyn FrameProcessor,
) -> Result<Vec<f32>, ProcessError> {
    let threshold = input.threshold_linear();
    debug!(
        processor = processor.name(),
        threshold_db = input.threshold_db,
        threshold,
        samples = input.samples.len(),
        "processing session"
    );

    processor.set_parameter(THRESHOLD, threshold)?;
    let mut buffer = input.samples.clone();
    processor.process_block(&mut buffer)?;
    Ok(buffer)
}

/// Formats samples with four decimals, space separated.
pub fn format_buffer(buffer: &[f32]) -> String {
    buffer
        .iter()
        .map(|s| format!("{:.4}", s))
        .collect::<Vec<_>>()
        .join(" ")
}
