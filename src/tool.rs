use crate::convert::convert_numbers;
use crate::reader::{FloatParser, IntParser, LineParser, WordParser, read_input};
use crate::report::{EXEC_TIME_LABEL, Report, Value, timed};
use crate::stats::Summary;
use crate::words::count_words;
use anyhow::{Result, bail};
use num_bigint::BigInt;
use std::path::Path;

/// One line-oriented utility: how to parse its input, what to compute,
/// and where to save the results.
pub trait Tool {
    type Parser: LineParser + Default;

    /// Fixed name of the results file, relative to the working directory.
    const OUTPUT_FILE: &'static str;

    /// Message printed when the input holds no valid values.
    const EMPTY_MSG: &'static str;

    /// Compute the report from a non-empty list of values.
    fn transform(values: Vec<<Self::Parser as LineParser>::Value>) -> Report;
}

pub struct Statistics;

impl Tool for Statistics {
    type Parser = FloatParser;
    const OUTPUT_FILE: &'static str = "StatisticsResults.txt";
    const EMPTY_MSG: &'static str = "No valid numbers found in the file.";

    fn transform(values: Vec<f64>) -> Report {
        Summary::new(values).report()
    }
}

pub struct NumberConversion;

impl Tool for NumberConversion {
    type Parser = IntParser;
    const OUTPUT_FILE: &'static str = "ConversionResults.txt";
    const EMPTY_MSG: &'static str = "No valid numbers found in the file.";

    fn transform(values: Vec<BigInt>) -> Report {
        convert_numbers(values)
    }
}

pub struct WordCount;

impl Tool for WordCount {
    type Parser = WordParser;
    const OUTPUT_FILE: &'static str = "WordCountResults.txt";
    const EMPTY_MSG: &'static str = "No valid words found in the file.";

    fn transform(values: Vec<String>) -> Report {
        count_words(&values)
    }
}

/// Read `file`, compute the timed report, print it and save it to
/// [`Tool::OUTPUT_FILE`] in the working directory.
///
/// # Errors
/// Returns an error if the input cannot be read or holds no valid values.
/// A failure to save the report is printed but not returned.
pub fn run_tool<T: Tool, P: AsRef<Path>>(file: P) -> Result<Report> {
    run_tool_into::<T, _, _>(file, T::OUTPUT_FILE)
}

/// Like [`run_tool`], saving to `output` instead of the fixed file name.
pub fn run_tool_into<T, P, Q>(file: P, output: Q) -> Result<Report>
where
    T: Tool,
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = read_input(file, &T::Parser::default())?;
    if input.values.is_empty() {
        bail!(T::EMPTY_MSG);
    }

    let (mut report, secs) = timed(|| T::transform(input.values));
    log::info!("transform took {secs} s");
    report.push(EXEC_TIME_LABEL, Value::Float(secs));

    report.print();

    let output = output.as_ref();
    match report.save(output) {
        Ok(()) => {
            println!("Results saved in {}", output.display());
            log::info!("saved {output:?}");
        }
        Err(error) => {
            println!(
                "An error occurred while writing to the file: {}",
                error.root_cause()
            );
            log::debug!("{error:#?}");
        }
    }

    Ok(report)
}
