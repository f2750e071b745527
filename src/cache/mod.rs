//! Content-addressed code id cache
//!
//! Maps a (chain id, contract file content) pair to the code id a previous
//! deployment returned, so repeated test runs against the same chain instance
//! skip redeploying unchanged binaries.
//!
//! # Coherence
//!
//! Code ids are only valid inside the chain instance that issued them. The
//! store carries the `start_time` of the chain session it was built under; the
//! chain harness writes the current session's `start_time` to an epoch artifact.
//! Whenever the two disagree the whole `file_cache` is dropped at once.
//!
//! # Store States
//!
//! | State | start_time | file_cache |
//! |-------|------------|------------|
//! | Uninitialized | `0` | empty |
//! | Empty | current epoch | empty |
//! | Populated | current epoch | one or more keys |

pub mod content;
pub mod fingerprint;
pub mod marker;
pub mod store;

pub use content::{CachePaths, ContentCache, Resolution};
pub use fingerprint::{fingerprint_file, normalize_chain_id, CHUNK_SIZE};
pub use marker::{read_chain_epoch, Epoch, UNINITIALIZED};
pub use store::{CacheStore, DeploymentId};
