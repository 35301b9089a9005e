//! Layer descriptors and project snapshots.
//!
//! - [`kind`] - The closed set of layer kinds
//! - [`model`] - The [`Layer`] descriptor and its lenient decoding
//! - [`snapshot`] - [`ProjectSource`] and snapshot file loading

pub mod kind;
pub mod model;
pub mod snapshot;

pub use kind::LayerKind;
pub use model::{Layer, UNREADABLE_PLACEHOLDER};
pub use snapshot::{parse_snapshot, ProjectSource, SnapshotFile, PROJECT_DIR, SNAPSHOT_FILE_NAMES};
