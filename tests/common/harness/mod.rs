//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments (config, org directory and a project
//! tree in a temp dir) and CLI assertion helpers using `assert_cmd`.

mod command;
mod env;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::TorgoCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
