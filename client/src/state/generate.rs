//! Generate-users view state and driver.

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;

use crate::net::api;
use crate::net::client::ApiClient;
use crate::net::error::ApiError;
use crate::util::files::FileSaver;

pub const MIN_COUNT: u32 = 1;
pub const MAX_COUNT: u32 = 100;
pub const DEFAULT_COUNT: u32 = 10;

pub const COUNT_OUT_OF_RANGE: &str = "Count must be between 1 and 100";
pub const GENERATE_FAILED: &str = "Failed to generate users";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateState {
    /// Raw text of the count input.
    pub count_input: String,
    pub busy: bool,
}

impl Default for GenerateState {
    fn default() -> Self {
        Self { count_input: DEFAULT_COUNT.to_string(), busy: false }
    }
}

impl GenerateState {
    /// Claim the busy flag. `false` if a generate is already in flight.
    pub fn try_begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn finish(&mut self) {
        self.busy = false;
    }
}

/// Parse and bound-check the count input.
///
/// # Errors
///
/// Returns [`COUNT_OUT_OF_RANGE`] for non-numeric or out-of-range input.
pub fn parse_count(raw: &str) -> Result<u32, &'static str> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|n| (MIN_COUNT..=MAX_COUNT).contains(n))
        .ok_or(COUNT_OUT_OF_RANGE)
}

pub fn success_message(count: u32) -> String {
    format!("Successfully generated {count} users!")
}

/// Fetch `count` generated users and hand the file to `saver`.
///
/// Returns the saved file name.
///
/// # Errors
///
/// Returns the API error, or [`ApiError::Browser`] if the save fails.
pub async fn generate_and_save(client: &ApiClient, saver: &dyn FileSaver, count: u32) -> Result<String, ApiError> {
    let file = api::generate_users(client, count).await?;
    saver.save(&file)?;
    Ok(file.file_name)
}
