pub mod equity;
pub use equity::*;

pub mod monty;
pub use monty::*;

pub mod showdown;
pub use showdown::*;
