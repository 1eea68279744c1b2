//! Content index module.
//!
//! The node serves two trees from disk: the pages directory (Micron pages,
//! some of them executable) and the files directory (downloads). This module
//! scans both into an immutable [`ContentSnapshot`](structs::content_snapshot::ContentSnapshot)
//! mapping logical paths to resource descriptors.
//!
//! # Logical paths
//!
//! - `/page/<relative path>` for everything under the pages directory
//! - `/file/<relative path>` for everything under the files directory
//! - `/page` and `/file` (and every subdirectory) are directory entries whose
//!   listing is computed from the snapshot at request time
//!
//! # Snapshot isolation
//!
//! The published snapshot lives behind an `ArcSwap`. A refresh scans the disk
//! without holding any lock and then swaps the whole snapshot in one step, so
//! a lookup always sees either the old index or the new one, never a mix.
//! If a scan fails the previous snapshot stays published.
//!
//! # Classification
//!
//! A file under the pages directory is a dynamic page when it is executable
//! and its first line starts with `#!`; any other page is static. Everything
//! under the files directory is a static file.

/// Enumerations (resource kinds, content sections, errors).
pub mod enums;

/// Data structures (descriptors, snapshots, the index itself).
pub mod structs;

/// Implementation blocks for the content index.
pub mod impls;

/// Unit tests for scanning and lookups.
pub mod tests;
