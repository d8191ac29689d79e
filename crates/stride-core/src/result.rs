// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

/// The expected, recoverable failure kinds of the checked arithmetic
/// routines.
///
/// Both variants are reported to the immediate caller as values; neither is
/// ever surfaced as a panic, since an overflow the stepper exists to detect
/// is not an exceptional condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    /// The next accumulation would leave the representable range of the
    /// numeric domain. The offending operation was not performed.
    RangeExceeded {
        /// Zero-based index of the step at which the violation was
        /// predicted.
        step: u64,
    },
    /// The divisor was zero.
    DivisionByZero,
}

impl std::fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArithmeticError::RangeExceeded { step } => {
                write!(f, "range exceeded at step {}", step)
            }
            ArithmeticError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// The outcome of a checked arithmetic routine: the exact final value, or a
/// distinguished failure. No partial value is ever returned on failure.
pub type StepResult<T> = Result<T, ArithmeticError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure() {
        assert_eq!(
            ArithmeticError::RangeExceeded { step: 5 }.to_string(),
            "range exceeded at step 5"
        );
        assert_eq!(
            ArithmeticError::DivisionByZero.to_string(),
            "division by zero"
        );
    }

    #[test]
    fn errors_are_comparable() {
        assert_eq!(
            ArithmeticError::RangeExceeded { step: 0 },
            ArithmeticError::RangeExceeded { step: 0 }
        );
        assert_ne!(
            ArithmeticError::RangeExceeded { step: 0 },
            ArithmeticError::DivisionByZero
        );
    }
}
