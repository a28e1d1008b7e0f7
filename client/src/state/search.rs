//! Admin user-search view state.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::error::ApiError;
use crate::net::types::User;

pub const EMPTY_QUERY: &str = "Please enter a username";
pub const USER_NOT_FOUND: &str = "User not found";
pub const SEARCH_ERROR: &str = "An error occurred while searching for the user";
pub const SEARCH_FAILED: &str = "User search failed";

/// Why a search could not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchBlocked {
    Busy,
    EmptyQuery,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub busy: bool,
    pub result: Option<User>,
    pub error: Option<String>,
}

impl SearchState {
    /// Claim the busy flag, clear the last outcome, and return the trimmed query.
    ///
    /// # Errors
    ///
    /// Returns why the search cannot start.
    pub fn try_begin(&mut self) -> Result<String, SearchBlocked> {
        if self.busy {
            return Err(SearchBlocked::Busy);
        }
        let query = self.query.trim();
        if query.is_empty() {
            return Err(SearchBlocked::EmptyQuery);
        }
        let query = query.to_owned();
        self.busy = true;
        self.result = None;
        self.error = None;
        Ok(query)
    }

    pub fn finish(&mut self, outcome: Result<User, ApiError>) {
        self.busy = false;
        match outcome {
            Ok(user) => self.result = Some(user),
            Err(e) => self.error = Some(search_error_message(&e).to_owned()),
        }
    }
}

/// Inline message for a failed search, distinguished by status.
pub fn search_error_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::NotFound => USER_NOT_FOUND,
        _ => SEARCH_ERROR,
    }
}

/// The search panel exists only for admins.
pub fn search_visible(user: Option<&User>) -> bool {
    user.is_some_and(User::is_admin)
}
