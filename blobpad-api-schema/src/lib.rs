//! Request and response types for the blobpad HTTP API, one module per
//! endpoint. These are shared by the server, the blocking API client, and
//! the web frontend, so the wire contract lives in exactly one place.

pub mod error;
pub mod health;
pub mod read_blob;
pub mod store;
