pub mod query_normalizer;
pub use query_normalizer::*;

pub mod table_name_parser;
pub use table_name_parser::*;

pub mod where_parser;
pub use where_parser::*;
