//! Database layer - policy store implementations

pub mod memory;
pub mod mongo;
pub mod traits;

pub use memory::MemoryPolicyStore;
pub use mongo::MongoPolicyStore;
pub use traits::{PolicyStore, StatusGroup};
