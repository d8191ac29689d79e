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

//! # Stride Core
//!
//! Range-checked stepping arithmetic over primitive numeric domains. This
//! crate provides the building blocks for computing repeated sums and
//! differences while predicting, before each accumulation, whether the step
//! would leave the representable range of the numeric type in use.
//!
//! ## Modules
//!
//! - `num`: Numeric domain descriptors (`DomainBounds` with associated
//!   `MIN`/`MAX` constants for every primitive integer and float domain)
//!   and the `StepValue` trait alias collecting the bounds the stepper
//!   requires.
//! - `result`: The `ArithmeticError` failure kinds (`RangeExceeded`,
//!   `DivisionByZero`) and the `StepResult<T>` alias. Expected overflow and
//!   underflow are reported as values, never as panics.
//! - `stepper`: The checked arithmetic stepper (`step_sum`,
//!   `step_difference`), the checked `divide` helper, and the immutable
//!   `StepRequest` input record.
//!
//! ## Purpose
//!
//! Prediction happens against the domain's own bounds through static trait
//! lookup, so integer domains never wrap and float domains never silently
//! saturate to infinity. The offending operation is never executed; callers
//! always receive either the exact final value or a distinguished failure.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
pub mod result;
pub mod stepper;
