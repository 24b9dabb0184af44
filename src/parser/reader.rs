//! Line-by-line parser for the sectioned run file
//!
//! The format is what the simulator's `RunData::save` writes: `#` starts a
//! comment, `*<letter>` switches section, everything else is a
//! whitespace-separated data row of the active section. The input is
//! streamed exactly once and the file handle lives only as long as the
//! load call.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::ParseError;
use crate::parser::section::{Section, SectionCursors};
use crate::trajectory::header::SimulationHeader;
use crate::trajectory::series::{NVec3, RawSeries};
use crate::trajectory::store::TrajectoryStore;

/// Open `path`, parse it and build the trajectory store.
pub fn load_run(path: &Path) -> Result<TrajectoryStore, ParseError> {
    let file = File::open(path)?;
    parse_run(BufReader::new(file))
}

/// Parse a run from any line source. Returns the store only on a fully
/// successful parse; any fatal condition aborts the whole load.
pub fn parse_run<R: BufRead>(input: R) -> Result<TrajectoryStore, ParseError> {
    let mut active: Option<Section> = None;
    let mut cursors = SectionCursors::default();
    // Header and buffers appear together once the *P row has been read.
    let mut state: Option<(SimulationHeader, RawSeries)> = None;

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;

        if line.starts_with('#') {
            continue;
        }
        if let Some(rest) = line.strip_prefix('*') {
            let section = Section::from_marker(rest.chars().next().unwrap_or(' '));
            cursors.reset(section);
            active = Some(section);
            continue;
        }

        let Some(section) = active else {
            // Before the first marker nothing is addressable; the writer
            // never emits such lines, so they are skipped like comments.
            continue;
        };

        match section {
            Section::Other(_) => {} // inert, forward compatible
            Section::Parameters => {
                if line.trim().is_empty() {
                    continue;
                }
                let tokens: Vec<&str> = line.split_whitespace().collect();
                if tokens.len() != 4 {
                    return Err(ParseError::TokenCount {
                        line: lineno,
                        section: 'P',
                        expected: 4,
                        found: tokens.len(),
                    });
                }
                let header = SimulationHeader::new(
                    parse_int(tokens[0], lineno)?,
                    parse_int(tokens[1], lineno)?,
                    parse_int(tokens[2], lineno)?,
                    parse_float(tokens[3], lineno)?,
                    lineno,
                )?;
                let raw = RawSeries::allocate(header.n_days, header.n_bodies);
                state = Some((header, raw));
            }
            Section::Velocity | Section::Energy | Section::Position => {
                let Some((header, raw)) = state.as_mut() else {
                    return Err(ParseError::HeaderMissing {
                        line: lineno,
                        section: section.letter(),
                    });
                };
                let row = parse_row(&line, section, header, lineno)?;
                // claim() always yields for the three data sections
                let Some(day) = cursors.claim(section) else {
                    continue;
                };
                if day >= header.n_days {
                    return Err(ParseError::ShapeOverflow {
                        line: lineno,
                        section: section.letter(),
                        n_days: header.n_days,
                    });
                }
                match section {
                    Section::Velocity => {
                        for (b, v) in row.chunks_exact(3).enumerate() {
                            raw.velocity[day][b] = [v[0], v[1], v[2], 0.0];
                        }
                    }
                    Section::Position => {
                        for (b, p) in row.chunks_exact(3).enumerate() {
                            raw.position[day][b] = NVec3::new(p[0], p[1], p[2]);
                        }
                    }
                    Section::Energy => {
                        raw.energy[day] = [row[0], row[1], row[2]];
                    }
                    _ => {}
                }
            }
        }
    }

    let (header, raw) = state.ok_or(ParseError::NoHeader)?;
    Ok(TrajectoryStore::from_raw(header, raw))
}

/// Tokenize one data row and enforce the token count the header implies.
fn parse_row(
    line: &str,
    section: Section,
    header: &SimulationHeader,
    lineno: usize,
) -> Result<Vec<f64>, ParseError> {
    let expected = match section {
        Section::Energy => 3,
        _ => header.n_bodies * 3,
    };
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != expected {
        return Err(ParseError::TokenCount {
            line: lineno,
            section: section.letter(),
            expected,
            found: tokens.len(),
        });
    }
    tokens
        .iter()
        .map(|tok| parse_float(tok, lineno))
        .collect()
}

fn parse_int(token: &str, line: usize) -> Result<usize, ParseError> {
    token.parse().map_err(|_| ParseError::Number {
        line,
        token: token.to_string(),
    })
}

fn parse_float(token: &str, line: usize) -> Result<f64, ParseError> {
    token.parse().map_err(|_| ParseError::Number {
        line,
        token: token.to_string(),
    })
}
