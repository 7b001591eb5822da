pub mod op;
pub mod prompt;
pub mod show;
pub mod transpose;
