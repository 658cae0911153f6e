pub mod completions;
pub mod openapi;
pub mod serve;
