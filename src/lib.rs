//! Line-oriented command-line tools sharing one pipeline:
//! read a file line by line, transform the valid values, print the
//! results and save them to a fixed output file.

pub mod cli;
pub mod convert;
pub mod counter;
pub mod reader;
pub mod report;
pub mod stats;
pub mod tool;
pub mod words;
