//! Buffer data model: rows, the row store and the cursor

pub mod buffer;
pub mod cursor;
pub mod row;
