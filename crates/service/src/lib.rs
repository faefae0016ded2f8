pub mod address;
pub mod errors;
pub mod student;
