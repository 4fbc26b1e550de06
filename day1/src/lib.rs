use std::io;

use thiserror::Error;
use tracing::{debug, error, info, trace};

const NUMBER_WORDS: [(&str, u32); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

/// First and last digit found on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibration {
    pub first: u32,
    pub last: u32,
}

impl Calibration {
    fn new(digit: u32) -> Self {
        Self {
            first: digit,
            last: digit,
        }
    }

    fn with_last(self, digit: u32) -> Self {
        Self {
            last: digit,
            ..self
        }
    }

    pub fn value(&self) -> u32 {
        self.first * 10 + self.last
    }
}

#[derive(Error, Debug)]
pub enum CalibrationError {
    #[error("Unable to read input line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

fn first_and_last(digits: impl Iterator<Item = u32>) -> Option<Calibration> {
    digits.fold(None, |found, digit| {
        Some(found.map_or(Calibration::new(digit), |c| c.with_last(digit)))
    })
}

fn ascii_digit(b: u8) -> Option<u32> {
    b.is_ascii_digit().then(|| u32::from(b - b'0'))
}

pub fn find_digits(line: &str) -> Option<Calibration> {
    first_and_last(line.bytes().filter_map(ascii_digit))
}

enum Candidate {
    Word(u32),
    Prefix,
    Dead,
}

fn classify(candidate: &[u8]) -> Candidate {
    let mut prefix = false;
    for (word, digit) in NUMBER_WORDS {
        if word.as_bytes() == candidate {
            return Candidate::Word(digit);
        }
        prefix |= word.as_bytes().starts_with(candidate);
    }

    if prefix {
        Candidate::Prefix
    } else {
        Candidate::Dead
    }
}

/// Digit starting exactly at `start`, either numeric or spelled out.
///
/// The candidate grows while it is a prefix of some number word. Whatever the
/// outcome, the caller moves on to `start + 1`, so a word starting inside a
/// previous match or a dead candidate is still found.
fn digit_at(bytes: &[u8], start: usize) -> Option<u32> {
    if let Some(digit) = ascii_digit(bytes[start]) {
        return Some(digit);
    }

    for end in start + 1..=bytes.len() {
        match classify(&bytes[start..end]) {
            Candidate::Word(digit) => return Some(digit),
            Candidate::Prefix => continue,
            Candidate::Dead => return None,
        }
    }

    None
}

/// Like [`find_digits`], but also accepts "one" through "nine", including
/// words that overlap ("eightwo" gives 8 and 2).
pub fn find_digits_spelled(line: &str) -> Option<Calibration> {
    let bytes = line.as_bytes();

    first_and_last((0..bytes.len()).filter_map(|start| digit_at(bytes, start)))
}

pub fn sum_calibration_values<F>(
    input: impl Iterator<Item = io::Result<String>>,
    extract: F,
) -> Result<u64, CalibrationError>
where
    F: Fn(&str) -> Option<Calibration>,
{
    let sum = input
        .enumerate()
        .try_fold(0u64, |sum, (i, line)| {
            let line = line.map_err(|source| CalibrationError::Read { line: i + 1, source })?;

            match extract(&line) {
                Some(calibration) => {
                    trace!(line = i + 1, value = calibration.value());
                    Ok(sum + u64::from(calibration.value()))
                }
                None => {
                    debug!(line = i + 1, "no digits, skipping");
                    Ok(sum)
                }
            }
        })
        .map_err(|e| {
            error!("{e}");
            e
        })?;

    info!(sum, "done");

    Ok(sum)
}

pub fn sum_digits(input: impl Iterator<Item = io::Result<String>>) -> Result<u64, CalibrationError> {
    sum_calibration_values(input, find_digits)
}

pub fn sum_spelled(input: impl Iterator<Item = io::Result<String>>) -> Result<u64, CalibrationError> {
    sum_calibration_values(input, find_digits_spelled)
}
