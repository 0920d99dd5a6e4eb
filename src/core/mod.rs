pub mod classify;
pub mod rebuild;
pub mod walk;
