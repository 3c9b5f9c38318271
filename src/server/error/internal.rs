use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored settings section is not a JSON object.
    ///
    /// Only possible if the row was written outside of this service. Results in a
    /// 500 Internal Server Error with a generic message returned to client.
    #[error("Stored settings for owner '{owner_id}' have a non-object '{column}' section")]
    CorruptSection {
        /// Owner of the corrupt document
        owner_id: String,
        /// Column holding the bad value
        column: &'static str,
    },

    /// A settings row disappeared between being written and being read back.
    #[error("Settings for owner '{0}' missing immediately after write")]
    MissingAfterWrite(String),
}
