pub mod delay;
pub mod parser;
pub mod progress;
