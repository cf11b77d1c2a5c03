//! Line-oriented query I/O.
//!
//! Input is a query count followed by that many 1-based indices, one per line.
//! Output is one decibinary number per line, in query order.

use crate::enumerator::DecibinaryEnumerator;
use crate::error::DecibinaryError;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Reads the query count and then exactly that many indices.
///
/// Blank lines are skipped. Lines after the last expected query are ignored.
pub fn read_queries<R: BufRead>(reader: R) -> Result<Vec<u64>, DecibinaryError> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(n, line)| line.map(|l| (n + 1, l)))
        .filter(|line| !matches!(line, Ok((_, l)) if l.trim().is_empty()));

    let (line, header) = lines.next().ok_or(DecibinaryError::MissingCount)??;
    let expected: u64 = parse_line(line, &header)?;

    // The count is untrusted, so the vector grows only as lines arrive.
    let mut queries = Vec::new();
    for _ in 0..expected {
        let (line, text) = lines
            .next()
            .ok_or_else(|| DecibinaryError::UnexpectedEof {
                expected,
                found: queries.len() as u64,
            })??;
        queries.push(parse_line(line, &text)?);
    }

    debug!(count = queries.len(), "read queries");
    Ok(queries)
}

fn parse_line<T: std::str::FromStr<Err = std::num::ParseIntError>>(
    line: usize,
    text: &str,
) -> Result<T, DecibinaryError> {
    text.trim()
        .parse()
        .map_err(|source| DecibinaryError::Parse { line, source })
}

/// Answers each query against `enumerator`, writing one line per result.
pub fn answer_queries<W: Write>(
    enumerator: &mut DecibinaryEnumerator,
    queries: &[u64],
    mut writer: W,
) -> Result<(), DecibinaryError> {
    for &i in queries {
        let answer = enumerator.nth(i)?;
        writeln!(writer, "{answer}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads all queries, answers them with a fresh enumerator, and returns the
/// number of queries answered.
pub fn run<R: BufRead, W: Write>(reader: R, writer: W) -> Result<usize, DecibinaryError> {
    let queries = read_queries(reader)?;
    let mut enumerator = DecibinaryEnumerator::new();
    answer_queries(&mut enumerator, &queries, writer)?;

    let stats = enumerator.stats();
    info!(
        queries = queries.len(),
        frontier = stats.frontier,
        listed = stats.listed,
        memo_entries = stats.memo_entries,
        "answered queries"
    );
    Ok(queries.len())
}
