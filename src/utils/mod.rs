pub mod formatting;
pub mod logging;
pub mod path;
