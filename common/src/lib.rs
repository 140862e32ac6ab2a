mod field;
pub use field::*;

mod record;
pub use record::*;

mod keyword;
pub use keyword::*;

mod config;
pub use config::*;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

pub mod test_case;
