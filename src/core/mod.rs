// Public modules
pub mod category;
pub mod copier;
pub mod defaults;
pub mod docs;
pub mod error;
pub mod example;
pub mod output;
pub mod paths;
pub mod registry;

// Internal modules - not part of public API
pub(crate) mod project;
pub(crate) mod templates;

// Re-export common types for convenience
pub use copier::{CopyStats, PathCopier};
pub use error::{Error, ErrorCode, Result};
pub use output::{BatchResult, BatchResultItem, ItemStatus};
pub use paths::Workspace;
pub use registry::{CategoryDescriptor, ExampleDescriptor, Registry};
