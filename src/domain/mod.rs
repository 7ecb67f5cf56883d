pub mod error;

// CSV inspection module
pub mod csv;
