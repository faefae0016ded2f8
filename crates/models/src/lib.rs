pub mod address;
pub mod db;
pub mod student;
