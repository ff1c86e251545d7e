//! Rebuild a `.vox` model from the `voxels` key of a JSON document.
//!
//! Usage:
//!   cargo run --bin json_to_vox -- <input.json> <output.vox> [--size X Y Z]
//!
//! Without `--size` the model dimensions are the tight bounds of the voxel keys.

use std::path::PathBuf;
use std::process::ExitCode;

use glam::UVec3;

use voxjson::convert;
use voxjson::core::{logging, ConvertConfig};

fn parse_size_arg(args: &[String]) -> Result<Option<UVec3>, String> {
    let Some(i) = args.iter().position(|a| a == "--size") else {
        return Ok(None);
    };

    let values: Vec<u32> = args
        .iter()
        .skip(i + 1)
        .take(3)
        .map(|s| s.parse::<u32>().map_err(|e| format!("invalid --size value {:?}: {}", s, e)))
        .collect::<Result<_, _>>()?;

    match values.as_slice() {
        [x, y, z] => Ok(Some(UVec3::new(*x, *y, *z))),
        _ => Err("--size needs three values".to_string()),
    }
}

fn main() -> ExitCode {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let positional: Vec<&String> = args
        .iter()
        .skip(1)
        .take_while(|a| a.as_str() != "--size")
        .collect();

    if positional.len() != 2 {
        let program = args.first().map(String::as_str).unwrap_or("json_to_vox");
        eprintln!("Usage: {} input.json output.vox [--size X Y Z]", program);
        return ExitCode::FAILURE;
    }

    let mut config = ConvertConfig::default();
    match parse_size_arg(&args) {
        Ok(Some(size)) => config = config.with_model_size(size),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    }

    let input = PathBuf::from(positional[0]);
    let output = PathBuf::from(positional[1]);

    match convert::json_to_vox(&input, &output, &config) {
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
