use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::RainbowError;

/// Reads the buffer to scan from `path`, or from stdin when `path` is `None`.
///
/// The bytes are returned as-is; the scanner does not require UTF-8.
pub fn read_source(path: Option<&Path>) -> Result<Vec<u8>, RainbowError> {
    let mut buffer = Vec::new();
    match path {
        Some(file_path) => {
            File::open(file_path)?.read_to_end(&mut buffer)?;
        }
        None => {
            io::stdin().lock().read_to_end(&mut buffer)?;
        }
    }

    #[cfg(debug_assertions)]
    log::debug!("Read {} bytes of source", buffer.len());

    Ok(buffer)
}
