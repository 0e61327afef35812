//! Ordered result reports and their console/file output.

use crate::convert::Conversion;
use anyhow::{Context, Result};
use std::{
    fmt,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    time::Instant,
};

/// Label of the timing entry appended after every transform.
pub const EXEC_TIME_LABEL: &str = "Execution Time (seconds)";

/// Value of a single report entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Float(f64),
    Floats(Vec<f64>),
    Count(usize),
    Conversion(Conversion),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Float(val) => write!(f, "{}", format_float(*val)),
            Value::Floats(vals) => {
                write!(f, "[")?;
                for (idx, &val) in vals.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", format_float(val))?;
                }
                write!(f, "]")
            }
            Value::Count(cnt) => write!(f, "{cnt}"),
            Value::Conversion(conv) => write!(f, "{conv}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub label: String,
    pub value: Value,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Ordered list of labelled results.
///
/// Labels are not required to be unique; entries are printed and saved
/// in insertion order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Report {
    entries: Vec<Entry>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<L: Into<String>>(&mut self, label: L, value: Value) {
        self.entries.push(Entry {
            label: label.into(),
            value,
        });
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Find the first entry with the given label.
    pub fn get(&self, label: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| &entry.value)
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|entry| entry.to_string())
    }

    pub fn print(&self) {
        for line in self.lines() {
            println!("{line}");
        }
    }

    /// Write every entry to `file`, replacing any previous content.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written.
    pub fn save<P: AsRef<Path>>(&self, file: P) -> Result<()> {
        let file = file.as_ref();
        let handle = File::create(file).with_context(|| format!("failed to create {file:?}"))?;
        let mut writer = BufWriter::new(handle);

        for line in self.lines() {
            writeln!(writer, "{line}").with_context(|| format!("failed to write {file:?}"))?;
        }

        writer.flush().context("failed to flush writer stream")?;

        Ok(())
    }
}

/// Run `f` and return its output together with the elapsed wall-clock seconds.
pub fn timed<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed().as_secs_f64())
}

/// Format a float as its shortest round-trip representation, always
/// showing a decimal point or an exponent (`3.0`, `0.1`, `1e-05`, `1.5e+16`).
/// Non-finite values render as `inf`, `-inf` and `nan`.
pub fn format_float(val: f64) -> String {
    if val.is_nan() {
        return "nan".to_owned();
    }
    let repr = format!("{val:?}");
    let Some((mantissa, exp)) = repr.split_once('e') else {
        return repr;
    };
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exp),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}
