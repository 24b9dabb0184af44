pub mod header;
pub mod series;
pub mod store;
