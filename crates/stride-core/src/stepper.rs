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

//! # Checked Arithmetic Stepper
//!
//! Repeated sums and differences with per-step range prediction. Before each
//! accumulation the stepper checks, against the domain's own `MIN`/`MAX`
//! constants, whether the step would leave the representable range; if so it
//! stops without performing the operation and reports the offending step.
//!
//! Each call is a stateless sweep from the start value to either the final
//! value or the early failure. There are no side effects and no shared
//! state; the only failure channel is the returned [`StepResult`].

use crate::num::value::StepValue;
use crate::result::{ArithmeticError, StepResult};

/// An immutable description of one stepping computation: a start value, a
/// per-step delta, and a step count.
///
/// The delta is a value of the domain itself and may be negative for signed
/// and float domains. A request is constructed per invocation and discarded
/// after.
///
/// # Examples
///
/// ```rust
/// # use stride_core::stepper::StepRequest;
/// let request = StepRequest::new(0u8, 51, 5);
/// assert_eq!(request.sum(), Ok(255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRequest<T> {
    start: T,
    delta: T,
    steps: u64,
}

impl<T> StepRequest<T>
where
    T: StepValue,
{
    /// Creates a new request.
    #[inline]
    pub const fn new(start: T, delta: T, steps: u64) -> Self {
        Self {
            start,
            delta,
            steps,
        }
    }

    /// Returns the start value.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the per-step delta.
    #[inline]
    pub const fn delta(&self) -> T {
        self.delta
    }

    /// Returns the step count.
    #[inline]
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    /// Runs the request as a repeated sum. See [`step_sum`].
    #[inline]
    pub fn sum(&self) -> StepResult<T> {
        step_sum(self.start, self.delta, self.steps)
    }

    /// Runs the request as a repeated difference. See [`step_difference`].
    #[inline]
    pub fn difference(&self) -> StepResult<T> {
        step_difference(self.start, self.delta, self.steps)
    }
}

/// Returns `true` if `current + delta` would leave the representable range.
///
/// The prediction rearranges the bound comparison so that the offending
/// addition itself is never evaluated: integer domains cannot wrap here and
/// float domains cannot round to infinity. Both bounds are guarded, since a
/// negative delta moves the accumulator toward `MIN`.
#[inline]
fn exceeds_on_add<T>(current: T, delta: T) -> bool
where
    T: StepValue,
{
    if delta >= T::zero() {
        current > T::MAX - delta
    } else {
        current < T::MIN - delta
    }
}

/// Returns `true` if `current - delta` would leave the representable range.
#[inline]
fn exceeds_on_sub<T>(current: T, delta: T) -> bool
where
    T: StepValue,
{
    if delta >= T::zero() {
        current < T::MIN + delta
    } else {
        current > T::MAX + delta
    }
}

/// Accumulates `start + increment` exactly `steps` times, predicting before
/// each addition whether the result would leave the representable range of
/// the domain.
///
/// On a predicted violation the addition is not performed and
/// [`ArithmeticError::RangeExceeded`] records the offending step. With
/// `steps == 0` the start value is returned unchanged.
///
/// # Examples
///
/// ```rust
/// # use stride_core::stepper::step_sum;
/// # use stride_core::result::ArithmeticError;
/// assert_eq!(step_sum(0u8, 51, 5), Ok(255));
/// assert_eq!(
///     step_sum(0u8, 51, 6),
///     Err(ArithmeticError::RangeExceeded { step: 5 })
/// );
/// ```
pub fn step_sum<T>(start: T, increment: T, steps: u64) -> StepResult<T>
where
    T: StepValue,
{
    let mut result = start;
    for step in 0..steps {
        if exceeds_on_add(result, increment) {
            return Err(ArithmeticError::RangeExceeded { step });
        }
        result = result + increment;
    }
    Ok(result)
}

/// Accumulates `start - decrement` exactly `steps` times, predicting before
/// each subtraction whether the result would leave the representable range
/// of the domain.
///
/// Symmetric to [`step_sum`]: the check is against the domain minimum for a
/// non-negative decrement and against the maximum for a negative one.
///
/// # Examples
///
/// ```rust
/// # use stride_core::stepper::step_difference;
/// # use stride_core::result::ArithmeticError;
/// assert_eq!(step_difference(255u8, 51, 5), Ok(0));
/// assert_eq!(
///     step_difference(255u8, 51, 6),
///     Err(ArithmeticError::RangeExceeded { step: 5 })
/// );
/// ```
pub fn step_difference<T>(start: T, decrement: T, steps: u64) -> StepResult<T>
where
    T: StepValue,
{
    let mut result = start;
    for step in 0..steps {
        if exceeds_on_sub(result, decrement) {
            return Err(ArithmeticError::RangeExceeded { step });
        }
        result = result - decrement;
    }
    Ok(result)
}

/// Divides `numerator` by `denominator`, reporting a zero denominator as
/// [`ArithmeticError::DivisionByZero`] instead of producing an unchecked
/// computation (a wrapped integer trap or a float infinity/NaN).
///
/// A quotient the domain cannot represent is reported as
/// [`ArithmeticError::RangeExceeded`] before the division is performed. This
/// arises only for the domain minimum divided by negative one in signed
/// integer domains, where the true quotient is `MAX + 1`; float domains
/// represent that quotient exactly.
///
/// # Examples
///
/// ```rust
/// # use stride_core::stepper::divide;
/// # use stride_core::result::ArithmeticError;
/// assert_eq!(divide(10.0f32, 2.0), Ok(5.0));
/// assert_eq!(divide(10.0f32, 0.0), Err(ArithmeticError::DivisionByZero));
/// assert_eq!(
///     divide(i32::MIN, -1),
///     Err(ArithmeticError::RangeExceeded { step: 0 })
/// );
/// ```
pub fn divide<T>(numerator: T, denominator: T) -> StepResult<T>
where
    T: StepValue,
{
    if denominator.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    // Two's-complement domains cannot represent -MIN (MIN + MAX < 0 there,
    // while float bounds cancel exactly). Unsigned domains have no -1 and
    // skip the guard entirely.
    if let Some(minus_one) = T::from_i64(-1) {
        if denominator == minus_one && numerator == T::MIN && T::MIN + T::MAX < T::zero() {
            return Err(ArithmeticError::RangeExceeded { step: 0 });
        }
    }
    Ok(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEPS: u64 = 5;

    fn fifth_of_max<T: StepValue>() -> T {
        let five = T::from_u64(STEPS).expect("5 is representable in every supported domain");
        T::MAX / five
    }

    /// Five increments of `MAX/5` from zero must complete, and a sixth must
    /// be caught at step 5.
    fn assert_sum_properties<T: StepValue>() {
        let increment = fifth_of_max::<T>();
        let expected = increment + increment + increment + increment + increment;

        assert_eq!(
            step_sum(T::zero(), increment, STEPS),
            Ok(expected),
            "{}: in-range sum must complete",
            T::NAME
        );
        assert_eq!(
            step_sum(T::zero(), increment, STEPS + 1),
            Err(ArithmeticError::RangeExceeded { step: 5 }),
            "{}: sixth increment must be caught",
            T::NAME
        );
    }

    /// Five decrements of `MAX/5` from `MAX` must complete without leaving
    /// the domain.
    fn assert_difference_stays_in_range<T: StepValue>() {
        let decrement = fifth_of_max::<T>();
        let result = step_difference(T::MAX, decrement, STEPS)
            .unwrap_or_else(|e| panic!("{}: in-range difference failed: {}", T::NAME, e));
        assert!(result >= T::MIN, "{}: result fell below MIN", T::NAME);
        assert!(result <= T::MAX, "{}: result rose above MAX", T::NAME);
    }

    /// For unsigned domains the sixth decrement crosses zero and must be
    /// caught at step 5.
    fn assert_unsigned_difference_exceeds<T: StepValue>() {
        let decrement = fifth_of_max::<T>();
        assert_eq!(
            step_difference(T::MAX, decrement, STEPS + 1),
            Err(ArithmeticError::RangeExceeded { step: 5 }),
            "{}: sixth decrement must be caught",
            T::NAME
        );
    }

    /// For signed and float domains the sixth decrement lands far above
    /// `MIN` and must complete; reporting a violation here would be a false
    /// positive.
    fn assert_signed_difference_completes<T: StepValue>() {
        let decrement = fifth_of_max::<T>();
        let result = step_difference(T::MAX, decrement, STEPS + 1)
            .unwrap_or_else(|e| panic!("{}: sixth decrement failed: {}", T::NAME, e));
        assert!(result >= T::MIN, "{}: result fell below MIN", T::NAME);
        assert!(result < T::zero(), "{}: sixth decrement must go negative", T::NAME);
    }

    #[test]
    fn sum_properties_hold_for_signed_domains() {
        assert_sum_properties::<i8>();
        assert_sum_properties::<i16>();
        assert_sum_properties::<i32>();
        assert_sum_properties::<i64>();
        assert_sum_properties::<i128>();
        assert_sum_properties::<isize>();
    }

    #[test]
    fn sum_properties_hold_for_unsigned_domains() {
        assert_sum_properties::<u8>();
        assert_sum_properties::<u16>();
        assert_sum_properties::<u32>();
        assert_sum_properties::<u64>();
        assert_sum_properties::<u128>();
        assert_sum_properties::<usize>();
    }

    #[test]
    fn sum_properties_hold_for_float_domains() {
        assert_sum_properties::<f32>();
        assert_sum_properties::<f64>();
    }

    #[test]
    fn difference_stays_in_range_for_all_domains() {
        assert_difference_stays_in_range::<i8>();
        assert_difference_stays_in_range::<i16>();
        assert_difference_stays_in_range::<i32>();
        assert_difference_stays_in_range::<i64>();
        assert_difference_stays_in_range::<i128>();
        assert_difference_stays_in_range::<isize>();
        assert_difference_stays_in_range::<u8>();
        assert_difference_stays_in_range::<u16>();
        assert_difference_stays_in_range::<u32>();
        assert_difference_stays_in_range::<u64>();
        assert_difference_stays_in_range::<u128>();
        assert_difference_stays_in_range::<usize>();
        assert_difference_stays_in_range::<f32>();
        assert_difference_stays_in_range::<f64>();
    }

    #[test]
    fn difference_exceeds_for_unsigned_domains() {
        assert_unsigned_difference_exceeds::<u8>();
        assert_unsigned_difference_exceeds::<u16>();
        assert_unsigned_difference_exceeds::<u32>();
        assert_unsigned_difference_exceeds::<u64>();
        assert_unsigned_difference_exceeds::<u128>();
        assert_unsigned_difference_exceeds::<usize>();
    }

    #[test]
    fn difference_completes_for_signed_and_float_domains() {
        assert_signed_difference_completes::<i8>();
        assert_signed_difference_completes::<i16>();
        assert_signed_difference_completes::<i32>();
        assert_signed_difference_completes::<i64>();
        assert_signed_difference_completes::<i128>();
        assert_signed_difference_completes::<isize>();
        assert_signed_difference_completes::<f32>();
        assert_signed_difference_completes::<f64>();
    }

    #[test]
    fn zero_steps_returns_the_start_value() {
        assert_eq!(step_sum(42i32, 7, 0), Ok(42));
        assert_eq!(step_difference(42i32, 7, 0), Ok(42));
    }

    #[test]
    fn negative_increment_is_guarded_against_the_minimum() {
        assert_eq!(
            step_sum(i8::MIN, -1, 1),
            Err(ArithmeticError::RangeExceeded { step: 0 })
        );
        assert_eq!(step_sum(0i8, -1, 128), Ok(i8::MIN));
    }

    #[test]
    fn negative_decrement_is_guarded_against_the_maximum() {
        assert_eq!(
            step_difference(i8::MAX, -1, 1),
            Err(ArithmeticError::RangeExceeded { step: 0 })
        );
        assert_eq!(step_difference(0i8, -1, 127), Ok(i8::MAX));
    }

    #[test]
    fn accumulation_may_reach_the_bound_exactly() {
        assert_eq!(step_sum(u8::MAX - 1, 1, 1), Ok(u8::MAX));
        assert_eq!(step_difference(u8::MIN + 1, 1, 1), Ok(u8::MIN));
    }

    #[test]
    fn divide_reports_a_zero_denominator() {
        assert_eq!(divide(10.0f64, 0.0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(divide(10i32, 0), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn divide_computes_the_quotient() {
        assert_eq!(divide(10.0f64, 2.0), Ok(5.0));
        assert_eq!(divide(10i32, 3), Ok(3));
    }

    /// The domain minimum divided by negative one has no representable
    /// quotient in signed integer domains; it must come back as a value,
    /// not a division-overflow panic.
    fn assert_min_by_minus_one_is_caught<T: StepValue>() {
        let minus_one = T::from_i64(-1).expect("signed domains represent -1");
        assert_eq!(
            divide(T::MIN, minus_one),
            Err(ArithmeticError::RangeExceeded { step: 0 }),
            "{}: MIN / -1 must be caught",
            T::NAME
        );
    }

    #[test]
    fn divide_guards_the_unrepresentable_quotient() {
        assert_min_by_minus_one_is_caught::<i8>();
        assert_min_by_minus_one_is_caught::<i16>();
        assert_min_by_minus_one_is_caught::<i32>();
        assert_min_by_minus_one_is_caught::<i64>();
        assert_min_by_minus_one_is_caught::<i128>();
        assert_min_by_minus_one_is_caught::<isize>();
    }

    #[test]
    fn divide_allows_representable_extreme_quotients() {
        assert_eq!(divide(i32::MIN, 1), Ok(i32::MIN));
        assert_eq!(divide(i32::MIN, -2), Ok(i32::MIN / -2));
        assert_eq!(divide(i32::MIN + 1, -1), Ok(i32::MAX));
        assert_eq!(divide(f64::MIN, -1.0), Ok(f64::MAX));
    }

    #[test]
    fn request_delegates_to_the_stepper() {
        let request = StepRequest::new(0u16, u16::MAX / 5, STEPS);
        assert_eq!(request.sum(), Ok(u16::MAX));
        assert_eq!(request.start(), 0);
        assert_eq!(request.delta(), u16::MAX / 5);
        assert_eq!(request.steps(), STEPS);

        let request = StepRequest::new(u16::MAX, u16::MAX / 5, STEPS + 1);
        assert_eq!(
            request.difference(),
            Err(ArithmeticError::RangeExceeded { step: 5 })
        );
    }
}
