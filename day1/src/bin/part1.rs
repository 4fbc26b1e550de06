use day1::sum_digits;

use std::process::ExitCode;

use anyhow::{Context, Result};

fn main() -> Result<ExitCode> {
    util::init_logging().context("Unable to set up logging")?;

    match sum_digits(util::stdin_lines()) {
        Ok(sum) => {
            println!("Sum of calibration values: {sum}");

            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("Error reading input: {:#}", anyhow::Error::from(e));

            Ok(ExitCode::FAILURE)
        }
    }
}
