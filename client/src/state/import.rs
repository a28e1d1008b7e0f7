//! Batch-import view state.
//!
//! The rendered summary always belongs to the most recent upload: starting a
//! new upload drops the previous result before the request goes out.

#[cfg(test)]
#[path = "import_test.rs"]
mod import_test;

use crate::net::types::UploadResult;

pub const NO_FILE_SELECTED: &str = "Please select a file first";
pub const UPLOAD_SUCCEEDED: &str = "File uploaded successfully!";
pub const UPLOAD_FAILED: &str = "Failed to upload file";

/// Why an upload could not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImportBlocked {
    Busy,
    NoFile,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportState {
    /// Name of the picked file, if any.
    pub file_name: Option<String>,
    pub busy: bool,
    pub result: Option<UploadResult>,
}

impl ImportState {
    pub fn select(&mut self, file_name: Option<String>) {
        self.file_name = file_name;
    }

    pub fn can_upload(&self) -> bool {
        !self.busy && self.file_name.is_some()
    }

    /// Claim the busy flag and clear the previous summary.
    ///
    /// # Errors
    ///
    /// Returns why the upload cannot start.
    pub fn try_begin(&mut self) -> Result<(), ImportBlocked> {
        if self.busy {
            return Err(ImportBlocked::Busy);
        }
        if self.file_name.is_none() {
            return Err(ImportBlocked::NoFile);
        }
        self.busy = true;
        self.result = None;
        Ok(())
    }

    pub fn finish_ok(&mut self, result: UploadResult) {
        self.busy = false;
        self.result = Some(result);
    }

    pub fn finish_err(&mut self) {
        self.busy = false;
        self.result = None;
    }
}

/// Display lines for an upload summary.
pub fn summary_lines(result: &UploadResult) -> [String; 3] {
    [
        format!("Total Records: {}", result.total_records),
        format!("Successfully Imported: {}", result.success_count),
        format!("Failed to Import: {}", result.failed_count),
    ]
}
