//! Destinations for all-pairs results.

use crate::error::{FrechetError, Result};
use std::fmt;
use std::io::Write;

/// One measured pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairRecord<F> {
    /// Id of the curve with the smaller index.
    pub a: u64,
    /// Id of the curve with the larger index.
    pub b: u64,
    /// Distance between the two curves.
    pub distance: F,
}

impl<F: fmt::Display> fmt::Display for PairRecord<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.a, self.b, self.distance)
    }
}

/// Receives records from the writer thread of an all-pairs run.
///
/// A sink is driven by exactly one thread, so implementations need no
/// locking of their own.
pub trait PairSink<F>: Send {
    /// Consumes one record.
    fn emit(&mut self, record: PairRecord<F>) -> Result<()>;

    /// Called once after the last record.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<F: Send> PairSink<F> for Vec<PairRecord<F>> {
    fn emit(&mut self, record: PairRecord<F>) -> Result<()> {
        self.push(record);
        Ok(())
    }
}

/// Writes one `"<idA> <idB> <distance>"` line per record.
#[derive(Debug)]
pub struct LineSink<W: Write> {
    out: W,
}

impl<W: Write> LineSink<W> {
    /// Wraps a writer. Wrap files in a `BufWriter`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<F: fmt::Display, W: Write + Send> PairSink<F> for LineSink<W> {
    fn emit(&mut self, record: PairRecord<F>) -> Result<()> {
        writeln!(self.out, "{}", record).map_err(|e| FrechetError::Sink(e.to_string()))
    }

    fn finish(&mut self) -> Result<()> {
        self.out
            .flush()
            .map_err(|e| FrechetError::Sink(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_format() {
        let mut sink = LineSink::new(Vec::new());
        sink.emit(PairRecord {
            a: 3,
            b: 17,
            distance: 5.0_f64,
        })
        .unwrap();
        sink.emit(PairRecord {
            a: 4,
            b: 9,
            distance: 0.25_f64,
        })
        .unwrap();
        PairSink::<f64>::finish(&mut sink).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "3 17 5\n4 9 0.25\n");
    }

    #[test]
    fn test_vec_sink() {
        let mut sink: Vec<PairRecord<f64>> = Vec::new();
        sink.emit(PairRecord {
            a: 1,
            b: 2,
            distance: 1.5,
        })
        .unwrap();
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].to_string(), "1 2 1.5");
    }
}
