//! Execute handlers for the side token contract.

mod bridge;
mod token;

pub use bridge::*;
pub use token::*;
