pub mod profile_book;
pub mod services;
pub mod utils;

pub use profile_book::ProfileBook;
