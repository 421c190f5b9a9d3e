pub mod assess;
pub mod history;
pub mod init;
pub mod questions;
