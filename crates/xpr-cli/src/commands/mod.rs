pub mod check;
pub mod grammar;
pub mod input;
pub mod parse;
