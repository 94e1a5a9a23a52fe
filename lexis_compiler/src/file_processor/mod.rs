//! File input for the Lexis front end
//!
//! Everything outside the core tokenizer that touches the filesystem lives
//! here: path checks, the compile-time size cap and UTF-8 decoding.

mod processor;

use crate::config::compile_time::file_processing::{LARGE_FILE_THRESHOLD, MAX_FILE_SIZE};
use crate::config::runtime::FileProcessorPreferences;
use crate::log_debug;
pub use processor::{
    FileMetadata, FileProcessingResult, FileProcessor, FileProcessorError, SOURCE_EXTENSION,
};

/// Process a file with preferences taken from the environment
pub fn process_file(file_path: &str) -> Result<FileProcessingResult, FileProcessorError> {
    processor::process_file(file_path)
}

pub fn create_processor_from_preferences(prefs: &FileProcessorPreferences) -> FileProcessor {
    FileProcessor::from_preferences(prefs)
}

pub fn get_max_file_size() -> u64 {
    MAX_FILE_SIZE
}

pub fn get_large_file_threshold() -> u64 {
    LARGE_FILE_THRESHOLD
}

/// Check that every file processing code has registry metadata
pub fn init_file_processor_logging() -> Result<(), String> {
    let file_codes = [
        crate::logging::codes::file_processing::FILE_NOT_FOUND,
        crate::logging::codes::file_processing::INVALID_EXTENSION,
        crate::logging::codes::file_processing::FILE_TOO_LARGE,
        crate::logging::codes::file_processing::INVALID_ENCODING,
        crate::logging::codes::file_processing::IO_ERROR,
        crate::logging::codes::file_processing::INVALID_PATH,
    ];

    for code in &file_codes {
        if crate::logging::codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "File processing code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    log_debug!("File processor limits initialized",
        "max_file_size" => MAX_FILE_SIZE,
        "large_file_threshold" => LARGE_FILE_THRESHOLD
    );

    Ok(())
}
