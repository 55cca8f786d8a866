//! Core data structures for equation-guessing puzzles.
//!
//! This crate provides the building blocks shared by equation generation and
//! game management: the closed symbol alphabet, tiles with feedback colors,
//! equations as fixed-length tile sequences, and the arithmetic evaluator
//! used to decide equation validity.
//!
//! # Overview
//!
//! - [`symbol`]: Type-safe representation of the 15 admissible characters
//!   (digits `0`-`9`, operators `+ - * /`, and `=`)
//! - [`color`]: Ranked feedback colors with monotonic upgrade semantics
//! - [`tile`]: One character slot holding an optional symbol and a color
//! - [`equation`]: Fixed-length tile sequences with validity checking and
//!   string interchange
//! - [`eval`]: Arithmetic expression evaluation with operator precedence
//!
//! # Examples
//!
//! ```
//! use equatle_core::Equation;
//!
//! let equation: Equation = "1+2=3".parse().unwrap();
//! assert!(equation.is_valid());
//! assert_eq!(equation.to_string(), "1+2=3");
//!
//! // Division must produce a whole number
//! let equation: Equation = "1/2=0".parse().unwrap();
//! assert!(!equation.is_valid());
//! ```

pub mod color;
pub mod equation;
pub mod eval;
pub mod symbol;
pub mod tile;

// Re-export commonly used types
pub use self::{
    color::Color,
    equation::{Equation, EquationId},
    eval::EvalError,
    symbol::{InvalidSymbol, Symbol},
    tile::{Tile, TileId},
};
