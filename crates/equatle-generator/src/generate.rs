//! Constrained random construction of valid equations.

use equatle_core::{Equation, Symbol, eval};
use rand::{Rng, RngExt as _};
use rand_pcg::Pcg64Mcg;

use crate::{EquationSeed, GameSize};

/// Bound on rejection-sampling rounds per generated equation.
///
/// For the supported sizes most candidates already land on a valid
/// integer result, so typical generation needs a handful of rounds; the
/// cap only exists to turn a hypothetical degenerate case into an error
/// instead of a hang.
const MAX_RETRIES: usize = 10_000;

/// Operators eligible for the left-hand side during construction.
/// `=` is placed structurally, never drawn at random.
const BINARY_OPERATORS: [Symbol; 4] = [
    Symbol::Plus,
    Symbol::Minus,
    Symbol::Multiply,
    Symbol::Divide,
];

/// Errors produced by equation generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// The requested length is not one of the supported board sizes.
    #[display("unsupported equation length: {length}")]
    UnsupportedLength {
        /// The rejected length.
        length: usize,
    },
    /// Rejection sampling failed to produce a candidate within the retry
    /// cap.
    #[display("equation generation gave up after {MAX_RETRIES} attempts")]
    RetriesExhausted,
}

/// Random generator of valid, length-matched equations.
///
/// The generator is pure given its RNG: two generators built from the
/// same [`EquationSeed`] yield the same sequence of equations.
///
/// # Examples
///
/// ```
/// use equatle_generator::{EquationGenerator, EquationSeed, GameSize};
///
/// let seed = EquationSeed::for_date(2024, 3, 15);
/// let mut a = EquationGenerator::with_seed(&seed);
/// let mut b = EquationGenerator::with_seed(&seed);
/// assert_eq!(
///     a.generate(GameSize::Mini).unwrap().to_string(),
///     b.generate(GameSize::Mini).unwrap().to_string(),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct EquationGenerator<R = Pcg64Mcg> {
    rng: R,
}

impl EquationGenerator<Pcg64Mcg> {
    /// Creates a generator with a fresh entropy-derived seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(&EquationSeed::from_entropy())
    }

    /// Creates a generator reproducing the sequence for `seed`.
    #[must_use]
    pub fn with_seed(seed: &EquationSeed) -> Self {
        Self { rng: seed.to_rng() }
    }
}

impl Default for EquationGenerator<Pcg64Mcg> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> EquationGenerator<R> {
    /// Creates a generator driven by an arbitrary RNG.
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a valid equation of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RetriesExhausted`] if rejection sampling
    /// hits the retry cap. This does not happen in practice for the
    /// supported sizes.
    pub fn generate(&mut self, size: GameSize) -> Result<Equation, GenerateError> {
        for _ in 0..MAX_RETRIES {
            if let Some(equation) = self.try_generate(size) {
                return Ok(equation);
            }
        }
        log::warn!("equation generation exhausted {MAX_RETRIES} retries for size {size}");
        Err(GenerateError::RetriesExhausted)
    }

    /// Generates a valid equation with exactly `length` tiles.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::UnsupportedLength`] for lengths outside
    /// {5, 6, 8}, or [`GenerateError::RetriesExhausted`] as in
    /// [`EquationGenerator::generate`].
    pub fn generate_length(&mut self, length: usize) -> Result<Equation, GenerateError> {
        let size =
            GameSize::try_from_length(length).ok_or(GenerateError::UnsupportedLength { length })?;
        self.generate(size)
    }

    /// One construction round: build a left-hand side, verify it, and
    /// check the total length. `None` means "discard and retry".
    fn try_generate(&mut self, size: GameSize) -> Option<Equation> {
        let (numbers_count, operators_count) = self.token_counts(size);
        let total = numbers_count + operators_count;

        let mut left = String::with_capacity(size.length());
        let mut numbers_left = numbers_count;
        let mut operators_left = operators_count;
        for i in 0..total {
            // The first and last tokens are always digits; in between an
            // operator is forced exactly when the remaining slots would
            // otherwise not fit a digit per operator.
            if i == 0 || i == total - 1 || operators_left == 0 || operators_left < numbers_left {
                left.push(self.random_number().as_char());
                numbers_left -= 1;
            } else {
                left.push(self.random_operator().as_char());
                operators_left -= 1;
            }
        }

        let result = eval::evaluate_integral(&left).ok()?;
        if result < 0 {
            // a negative right-hand side would need a unary minus, which
            // the alphabet cannot express
            return None;
        }
        let candidate = format!("{left}={result}");
        if candidate.len() != size.length() {
            return None;
        }
        candidate.parse().ok()
    }

    /// Token budget by size: micro is fixed at two digits and one
    /// operator, mini and classic draw the digit count at random.
    fn token_counts(&mut self, size: GameSize) -> (usize, usize) {
        match size {
            GameSize::Micro => (2, 1),
            GameSize::Mini => (self.rng.random_range(2..=3), 1),
            GameSize::Classic => (self.rng.random_range(3..=4), 2),
        }
    }

    fn random_number(&mut self) -> Symbol {
        Symbol::NUMBERS[self.rng.random_range(0..Symbol::NUMBERS.len())]
    }

    fn random_operator(&mut self) -> Symbol {
        BINARY_OPERATORS[self.rng.random_range(0..BINARY_OPERATORS.len())]
    }
}

/// Generates the deterministic equation for a calendar date.
///
/// Every process calling this with the same date and size obtains the
/// same equation, which makes it suitable for daily-puzzle selection
/// without a server.
///
/// # Errors
///
/// Returns [`GenerateError::RetriesExhausted`] if rejection sampling hits
/// the retry cap.
///
/// # Examples
///
/// ```
/// use equatle_generator::{GameSize, daily};
///
/// let today = daily(GameSize::Micro, 2024, 3, 15).unwrap();
/// let again = daily(GameSize::Micro, 2024, 3, 15).unwrap();
/// assert_eq!(today.to_string(), again.to_string());
/// ```
pub fn daily(size: GameSize, year: i32, month: u32, day: u32) -> Result<Equation, GenerateError> {
    EquationGenerator::with_seed(&EquationSeed::for_date(year, month, day)).generate(size)
}
