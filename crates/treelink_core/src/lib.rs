pub mod class;
pub mod cursor;
pub mod error;
pub mod link;
pub mod official;
pub mod planner;
pub mod selection;
pub mod version;

pub use class::CharacterClass;
pub use error::{CodecError, ImportIssue};
pub use link::{Dialect, DetectedLink, ImportedTree, decode_link, encode_link};
pub use selection::{CLUSTER_NODE_OFFSET, NodeSelection};
pub use version::TreeVersion;
