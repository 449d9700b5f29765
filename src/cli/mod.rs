pub mod forms;
pub mod output;
pub mod shell;
