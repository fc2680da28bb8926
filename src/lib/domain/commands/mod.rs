pub mod arguments;
pub mod command_line;
