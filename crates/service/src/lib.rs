//! Service layer for homesense
//!
//! Business logic between the HTTP/CLI surfaces and storage.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod auth;
mod error;
mod ingest_service;
mod location_service;
mod readings_service;

pub use auth::{hash_password, PasswordVerifier};
pub use error::ServiceError;
pub use ingest_service::IngestService;
pub use location_service::LocationService;
pub use readings_service::{DeviceLookup, LatestReadingsService, ReadingsRequest};
