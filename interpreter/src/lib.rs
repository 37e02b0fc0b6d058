pub mod error;
pub mod executor;
pub mod machine;

pub use error::{DiagnosticError, RuntimeError};
pub use executor::{execute_program, execute_program_traced};
pub use machine::Machine;
