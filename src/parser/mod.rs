pub mod reader;
pub mod section;
