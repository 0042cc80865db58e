//! Error types for manifest loading.

/// Fatal failure while fetching or decoding the manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("invalid base URL {0:?}")]
    BaseUrl(String),
    #[error("GET {url} failed")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },
    #[error("manifest header is unreadable")]
    Header(#[source] csv::Error),
    #[error("manifest is missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("manifest record at line {line} is invalid")]
    Row {
        line: u64,
        #[source]
        source: csv::Error,
    },
}
