//! Client for a zone-scoped remote object-storage HTTP API.
//!
//! A [`storage::StorageClient`] is bound to one access-key credential and
//! one storage zone for its lifetime and exposes four operations: read a
//! file, list a directory, write a file, and delete a path. Each operation
//! is a single HTTP round trip whose (status, body) outcome is mapped
//! deterministically into a typed result; there is no retry, caching, or
//! recursion at this layer.

pub mod config;
pub mod error;
pub mod storage;
pub mod transport;
pub mod validate;
