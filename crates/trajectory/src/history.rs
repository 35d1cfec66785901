//! Per-body position histories decoded from the integrator's output
//!
//! Each data line of the trajectory file holds one time step: a
//! whitespace-separated concatenation of fixed-width records `name x y z`,
//! one per body, with an arbitrary number of records per line. The decoder
//! is a chunked decode over the token sequence with an explicit
//! divisibility check, not a stateful scanner.

use nalgebra::Point2;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{HistoryError, HistoryResult};

/// Tokens per body record: name, x, y, z
const RECORD_WIDTH: usize = 4;

/// First token prefix marking a comment line
const COMMENT_MARKER: char = '#';

/// Ordered position histories for every body seen in the input.
///
/// Keys iterate in first-seen order. Histories are append-only while
/// decoding and read-only afterwards; renderers borrow them and never
/// mutate.
#[derive(Debug, Clone, Default)]
pub struct Histories {
    /// Body names in first-seen order
    order: Vec<String>,
    samples: HashMap<String, Vec<Point2<f64>>>,
}

impl Histories {
    /// Decodes a trajectory file from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> HistoryResult<Self> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Decodes a trajectory stream.
    ///
    /// Empty lines and comment lines are skipped silently. A data line
    /// whose token count is not a multiple of four, or with an unparseable
    /// coordinate, is skipped in its entirety with a diagnostic — decode is
    /// two-phase (whole line, then commit), so a bad line never extends any
    /// history partially. Bodies may appear in any order and may join
    /// mid-stream.
    ///
    /// Returns [`HistoryError::EmptyInput`] when no well-formed data line
    /// was found at all.
    pub fn from_reader<R: BufRead>(reader: R) -> HistoryResult<Self> {
        let mut histories = Self::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;

            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() || tokens[0].starts_with(COMMENT_MARKER) {
                continue;
            }

            if tokens.len() % RECORD_WIDTH != 0 {
                warn!(
                    line_number,
                    token_count = tokens.len(),
                    "skipping trajectory line with incomplete records"
                );
                continue;
            }

            match decode_records(&tokens) {
                Some(records) => {
                    for (name, position) in records {
                        histories.push(name, position);
                    }
                }
                None => {
                    warn!(
                        line_number,
                        "skipping trajectory line with unparseable coordinates"
                    );
                }
            }
        }

        if histories.samples.is_empty() {
            return Err(HistoryError::EmptyInput);
        }

        debug!(bodies = histories.order.len(), "trajectory input decoded");
        Ok(histories)
    }

    fn push(&mut self, name: &str, position: Point2<f64>) {
        if !self.samples.contains_key(name) {
            self.order.push(name.to_string());
        }
        self.samples.entry(name.to_string()).or_default().push(position);
    }

    /// Number of distinct bodies seen.
    pub fn body_count(&self) -> usize {
        self.order.len()
    }

    /// Body names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// One body's ordered history; index = time step.
    pub fn get(&self, name: &str) -> Option<&[Point2<f64>]> {
        self.samples.get(name).map(Vec::as_slice)
    }

    /// `(name, history)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Point2<f64>])> {
        self.order
            .iter()
            .map(|name| (name.as_str(), self.samples[name].as_slice()))
    }

    /// Resolves a body selection against the decoded histories.
    ///
    /// `None` selects every body in first-seen order. An explicit list is
    /// validated up front: if any requested name is absent the whole
    /// selection fails with the full list of unmatched names, before any
    /// rendering work begins.
    pub fn select<'a>(&'a self, requested: Option<&'a [String]>) -> HistoryResult<Vec<&'a str>> {
        let Some(names) = requested else {
            return Ok(self.names().collect());
        };

        let unknown: Vec<String> = names
            .iter()
            .filter(|name| !self.samples.contains_key(name.as_str()))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(HistoryError::UnknownBodies(unknown));
        }

        Ok(names.iter().map(String::as_str).collect())
    }
}

/// Decodes every record of one data line, or `None` if any coordinate
/// fails to parse. The z coordinate is part of the wire format but is not
/// decoded: the rest of the pipeline is a planar projection.
fn decode_records<'a>(tokens: &[&'a str]) -> Option<Vec<(&'a str, Point2<f64>)>> {
    tokens
        .chunks_exact(RECORD_WIDTH)
        .map(|record| {
            let x = record[1].parse::<f64>().ok()?;
            let y = record[2].parse::<f64>().ok()?;
            Some((record[0], Point2::new(x, y)))
        })
        .collect()
}
