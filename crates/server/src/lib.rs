pub mod errors;
pub mod extract;
pub mod routes;
pub mod startup;

pub use startup::{run_address, run_student};
