pub mod fetch;
pub mod imagelink;
pub mod output;
pub mod parser;
pub mod record;
pub mod render;
