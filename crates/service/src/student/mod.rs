pub mod repository;
pub mod validate;
