//! Encode command handler.
//!
//! Shows what a path looks like after conversion to the portable byte
//! string, and whether converting back reproduces it.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use framepaths_core::{native_string_from_path, path_from_native_string};

use crate::error::CliError;

pub fn execute(path: &Path, out: &mut dyn Write) -> Result<(), CliError> {
    let encoded = native_string_from_path(path);
    let round_trips = path_from_native_string(&encoded) == path;

    match std::str::from_utf8(&encoded) {
        Ok(text) => writeln!(out, "utf8 = {text}")?,
        Err(_) => writeln!(out, "hex = {}", hex(&encoded))?,
    }
    writeln!(out, "bytes = {}", encoded.len())?;
    writeln!(out, "round_trip = {round_trips}")?;
    Ok(())
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut acc, b| {
        let _ = write!(acc, "{b:02x}");
        acc
    })
}
