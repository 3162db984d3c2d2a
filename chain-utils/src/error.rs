use thiserror::Error;

/// Tool-specific error types
///
/// This enum defines the domain errors that can occur while parsing a
/// network-listing file. Each variant represents a specific violation of the
/// expected input format.
#[derive(Error, Debug)]
pub enum ListingError {
    /// A record header line did not carry the mandatory `"id: "` field
    #[error("network record \"{0}\" has no \"id: \" field on its header line")]
    MissingId(String),
}
