pub mod import;
pub mod terminal;
