//! Shared core of MapeiaVoto: the backend's DTOs and the workflows every
//! screen runs (session gate, reference loading, geography cascade, entity
//! forms and lists), written against an injected [`client::HttpTransport`]
//! so they run the same in the browser and in tests.

pub mod cascade;
pub mod client;
pub mod config;
pub mod dates;
pub mod error;
pub mod forms;
pub mod list;
pub mod masks;
pub mod model;
pub mod references;
pub mod requests;
pub mod routes;
pub mod session;
pub mod validation;

pub use error::{Error, Result};
