use crate::error::WinCleanError;
use std::fs;
use std::path::Path;

/// Default name of the downloadable script.
pub const BATCH_FILE_NAME: &str = "clean_c_drive.bat";

/// Prepended so Windows detects the file as UTF-8.
const UTF8_BOM: char = '\u{FEFF}';

/// Write the batch file: BOM followed by the generator output, byte for
/// byte. The raw (clipboard/stdout) payload carries no BOM.
pub fn write_batch_file(path: &Path, script: &str) -> Result<(), WinCleanError> {
    let mut contents = String::with_capacity(script.len() + UTF8_BOM.len_utf8());
    contents.push(UTF8_BOM);
    contents.push_str(script);
    fs::write(path, contents)?;
    Ok(())
}
