//! Voxjson - converts a `.vox` model into the `voxels` key of a JSON document.
//!
//! Usage: voxjson <input.vox> <output.json>
//!
//! The output file must already exist and contain a JSON object. Its
//! `voxels` key is replaced; everything else in it is kept.

use std::path::PathBuf;
use std::process::ExitCode;

use voxjson::convert;
use voxjson::core::{logging, ConvertConfig};

/// Split the command line into input and output paths, or return the usage message
fn parse_args(args: &[String]) -> Result<(PathBuf, PathBuf), String> {
    match args {
        [_, input, output] => Ok((PathBuf::from(input), PathBuf::from(output))),
        _ => {
            let program = args.first().map(String::as_str).unwrap_or("voxjson");
            Err(format!("Usage: {} input.vox output.json", program))
        }
    }
}

fn main() -> ExitCode {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let (input, output) = match parse_args(&args) {
        Ok(paths) => paths,
        Err(usage) => {
            eprintln!("{}", usage);
            return ExitCode::FAILURE;
        }
    };

    match convert::vox_to_json(&input, &output, &ConvertConfig::default()) {
        Ok(stats) => {
            println!("Wrote {} voxels to {}", stats.entries_written, output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
