pub mod editing;
pub mod rendering;
pub mod search;
