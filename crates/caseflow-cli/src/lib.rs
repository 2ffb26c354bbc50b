//! Library surface of the Caseflow CLI: logging setup shared by the binary
//! and by tests.

pub mod logging;
