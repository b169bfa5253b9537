use thiserror::Error;

/// Transport-level failures while downloading the source document.
/// Always fatal: there is no table to work with.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// Structural failures: the document or table no longer has the shape this
/// pipeline understands. Always fatal, since every downstream stage assumes
/// well-formed rows. Usually means the upstream README format changed.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("table start marker not found in document")]
    StartMarkerMissing,
    #[error("table end marker not found in document")]
    EndMarkerMissing,
    #[error("table end marker precedes start marker")]
    MarkersOutOfOrder,
    #[error("no column separator row found, input is not a recognizable table")]
    SeparatorMissing,
    #[error("separator row has no preceding header line")]
    HeaderMissing,
}
