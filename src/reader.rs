use anyhow::{Result, anyhow, bail};
use num_bigint::BigInt;
use std::{
    fs::File,
    io::{ErrorKind, Read},
    path::Path,
};

/// Turns one stripped input line into zero or more values.
pub trait LineParser {
    type Value;

    /// Append the values found in `line` to `out`.
    ///
    /// # Errors
    /// Returns an error if the line is invalid and must be skipped.
    fn parse_line(&self, line: &str, out: &mut Vec<Self::Value>) -> Result<()>;
}

#[derive(Default)]
pub struct FloatParser;

impl LineParser for FloatParser {
    type Value = f64;

    fn parse_line(&self, line: &str, out: &mut Vec<f64>) -> Result<()> {
        let val: f64 = line.parse()?;
        if val.is_nan() {
            bail!("number must not be NaN");
        }
        out.push(val);
        Ok(())
    }
}

#[derive(Default)]
pub struct IntParser;

impl LineParser for IntParser {
    type Value = BigInt;

    fn parse_line(&self, line: &str, out: &mut Vec<BigInt>) -> Result<()> {
        out.push(line.parse()?);
        Ok(())
    }
}

#[derive(Default)]
pub struct WordParser;

impl LineParser for WordParser {
    type Value = String;

    fn parse_line(&self, line: &str, out: &mut Vec<String>) -> Result<()> {
        out.extend(line.split_whitespace().map(str::to_owned));
        Ok(())
    }
}

/// Values read from an input file, in file order.
#[derive(Debug)]
pub struct Input<T> {
    pub values: Vec<T>,
    pub n_skipped: usize,
}

/// Read `file` line by line, keeping whatever `parser` accepts.
///
/// Every rejected line is reported on standard output and skipped.
///
/// # Errors
/// Returns an error if the file does not exist or cannot be read.
pub fn read_input<P, L>(file: P, parser: &L) -> Result<Input<L::Value>>
where
    P: AsRef<Path>,
    L: LineParser,
{
    let file = file.as_ref();
    let mut handle = match File::open(file) {
        Ok(handle) => handle,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            bail!("Error: The file '{}' was not found.", file.display())
        }
        Err(err) => bail!("An error occurred while accessing the file: {err}"),
    };
    let mut text = String::new();
    handle
        .read_to_string(&mut text)
        .map_err(|err| anyhow!("An error occurred while accessing the file: {err}"))?;

    let mut input = Input {
        values: Vec::new(),
        n_skipped: 0,
    };
    for line in split_lines(&text) {
        let line = line.trim();
        if let Err(err) = parser.parse_line(line, &mut input.values) {
            println!("Invalid data found and skipped: {line}");
            log::debug!("skipped {line:?}: {err}");
            input.n_skipped += 1;
        }
    }

    log::info!(
        "read {} values from {file:?}, skipped {} lines",
        input.values.len(),
        input.n_skipped
    );

    Ok(input)
}

/// Split `text` on `\n`, `\r\n` and lone `\r`, dropping the terminators.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(idx) = rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..idx];
        let term_len = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[idx + term_len..];
        Some(line)
    })
}
