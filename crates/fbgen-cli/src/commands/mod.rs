//! CLI command implementations for fbgen.
//!
//! Each module corresponds to a subcommand (`fbgen <command>`).

pub mod binary_info;
pub mod init_config;
pub mod scaffold;
pub mod scan_shaders;
pub mod star;
