pub mod types;

pub mod encode;
pub mod parse;
pub mod tokenize;

pub use encode::encode;
pub use parse::parse;
pub use tokenize::tokenize;
