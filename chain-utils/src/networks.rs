use crate::error::ListingError;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

/// Marker beginning every record in a network-listing file
pub const NETWORK_MARKER: &str = "Network: ";

/// Marker introducing the id field on a record's header line
pub const ID_MARKER: &str = "id: ";

/// One parsed block of a network-listing file
///
/// Describes a single blockchain network's identifying metadata: a name, an
/// id, and any further `key: value` pairs in the order they appeared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRecord {
    /// First whitespace-delimited token after the `"Network: "` marker
    pub name: String,

    /// Value of the header line's `"id: "` field
    ///
    /// Kept as a string; the listing format does not promise numeric ids.
    pub id: String,

    /// Additional fields from the record body, in input order
    pub fields: Vec<(String, String)>,
}

/// An ordered collection of network records
///
/// Record order matches order of appearance in the input file. Duplicate
/// names are not deduplicated; a listing that repeats a name serializes that
/// name twice, faithfully reflecting the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkListing {
    pub records: Vec<NetworkRecord>,
}

impl NetworkListing {
    /// Parse a network-listing document
    ///
    /// The input is split on the literal `"Network: "` marker and any text
    /// before the first occurrence is discarded as preamble. Within each
    /// record:
    ///
    /// * the name is the first whitespace-delimited token of the header line;
    /// * the id is everything after the first `"id: "` on the header line,
    ///   with the final character removed. The strip is literal, exactly one
    ///   character, so carriage returns or trailing punctuation on header
    ///   lines never reach the output;
    /// * every further line holding a `": "` separator contributes one
    ///   trimmed `key: value` pair; lines without one are skipped silently.
    ///
    /// # Arguments
    ///
    /// * `input` - The full text of the listing file
    ///
    /// # Returns
    ///
    /// * `Result<Self, ListingError>` - The parsed listing, or an error when
    ///   a record header is missing its `"id: "` field
    pub fn parse(input: &str) -> Result<Self, ListingError> {
        let mut records = Vec::new();

        for chunk in input.split(NETWORK_MARKER).skip(1) {
            records.push(parse_record(chunk)?);
        }

        debug!("parsed {} network record(s)", records.len());
        Ok(NetworkListing { records })
    }

    /// Find the first record with the given id
    pub fn find_by_id(&self, id: &str) -> Option<&NetworkRecord> {
        self.records.iter().find(|record| record.id == id)
    }
}

/// Parse one record chunk (the text between two `"Network: "` markers)
fn parse_record(chunk: &str) -> Result<NetworkRecord, ListingError> {
    let mut lines = chunk.split('\n');

    // The marker is always followed by at least an empty header line, so the
    // iterator yields at least one item here.
    let header = lines.next().unwrap_or_default();
    let name = header
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();

    let (_, raw_id) = header
        .split_once(ID_MARKER)
        .ok_or_else(|| ListingError::MissingId(name.clone()))?;

    // Drop exactly one trailing character, a convention of the listing
    // format rather than a generic trim.
    let mut id = raw_id.to_string();
    id.pop();

    let mut fields = Vec::new();
    for line in lines {
        if let Some((key, value)) = line.split_once(": ") {
            fields.push((key.trim().to_string(), value.trim().to_string()));
        }
    }

    Ok(NetworkRecord { name, id, fields })
}

impl Serialize for NetworkListing {
    /// Serialize the listing as a JSON object keyed by network name
    ///
    /// Top-level keys appear in input order; `serde_json::to_string_pretty`
    /// renders this with two-space indentation per nesting level.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for record in &self.records {
            map.serialize_entry(&record.name, record)?;
        }
        map.end()
    }
}

impl Serialize for NetworkRecord {
    /// Serialize a record as an object with `"id"` first, then the
    /// additional fields in input order, all as JSON strings
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry("id", &self.id)?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
