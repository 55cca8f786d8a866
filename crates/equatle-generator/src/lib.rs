//! Random equation generation for equation-guessing puzzles.
//!
//! Generation works by construction-then-verify: a left-hand side is built
//! token by token under structural constraints (first and last tokens are
//! digits, operators never adjacent), evaluated to an exact integer, and
//! completed with `=` and the result. Candidates whose total length does
//! not match the requested board size are discarded and the whole round is
//! retried, so the process is rejection sampling with a bounded retry cap.
//!
//! Seeds make generation reproducible, and [`daily`] derives a
//! date-deterministic seed so every player sees the same daily equation.
//!
//! # Examples
//!
//! ```
//! use equatle_generator::{EquationGenerator, EquationSeed, GameSize};
//!
//! let seed: EquationSeed = "2f1e4c15a210ddb9762a54cbdee6e2736744d33055db486bcfcadc2083bf6f4a"
//!     .parse()
//!     .unwrap();
//! let mut generator = EquationGenerator::with_seed(&seed);
//! let equation = generator.generate(GameSize::Classic).unwrap();
//! assert_eq!(equation.length(), 8);
//! assert!(equation.is_valid());
//! ```

mod generate;
mod seed;
mod size;

pub use self::{
    generate::{EquationGenerator, GenerateError, daily},
    seed::{EquationSeed, SeedParseError},
    size::GameSize,
};
