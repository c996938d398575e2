pub mod build;
pub mod parse;
