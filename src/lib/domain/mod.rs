pub mod commands;
pub mod invocation;
pub mod summary;
pub mod target;
