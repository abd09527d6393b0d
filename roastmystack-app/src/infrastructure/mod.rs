pub mod db;
pub mod og;
pub mod openai;
