use crate::report::{Report, Value};
use num_bigint::BigInt;
use std::fmt;

/// Decimal, binary and hexadecimal forms of one integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub number: BigInt,
    pub binary: String,
    pub hexadecimal: String,
}

impl Conversion {
    pub fn new(number: BigInt) -> Self {
        Self {
            binary: to_binary(&number),
            hexadecimal: to_hexadecimal(&number),
            number,
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Binary: {}, Hexadecimal: {}",
            self.number, self.binary, self.hexadecimal
        )
    }
}

/// Base-2 digits of `number`, sign-magnitude for negatives, no prefix.
pub fn to_binary(number: &BigInt) -> String {
    format!("{number:b}")
}

/// Uppercase base-16 digits of `number`, sign-magnitude for negatives, no prefix.
pub fn to_hexadecimal(number: &BigInt) -> String {
    format!("{number:X}")
}

/// One `Number` entry per input, in input order.
pub fn convert_numbers(numbers: Vec<BigInt>) -> Report {
    let mut report = Report::new();
    for number in numbers {
        report.push("Number", Value::Conversion(Conversion::new(number)));
    }
    report
}
