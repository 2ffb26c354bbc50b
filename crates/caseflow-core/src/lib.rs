//! Caseflow core: the import session, the store boundary, and the chunked
//! batch submission protocol.

pub mod coordinator;
pub mod memory;
pub mod session;
pub mod store;
pub mod transform;

pub use coordinator::{BatchCoordinator, DEFAULT_CHUNK_SIZE, SubmissionReport};
pub use memory::MemoryStore;
pub use session::ImportSession;
pub use store::ImportStore;
pub use transform::build_rows;
