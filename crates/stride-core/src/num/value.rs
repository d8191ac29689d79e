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

//! # Stepper Value Trait
//!
//! Unified numeric bounds for the checked arithmetic stepper. `StepValue`
//! specifies the capabilities a numeric domain must provide: by-value
//! addition, subtraction, and division, ordering for bound prediction, the
//! `DomainBounds` descriptor, and conversion from primitives for callers
//! that derive deltas from the domain's own limits.
//!
//! ## Motivation
//!
//! The stepper should remain generic over both integer and float domains
//! while resolving range limits through static trait lookup. This alias
//! collects the necessary bounds once, simplifying generic signatures and
//! keeping the domain an explicit type-level choice of the caller.

use crate::num::bounds::DomainBounds;
use core::ops::{Add, Div, Sub};
use num_traits::{FromPrimitive, Zero};

/// A trait alias for numeric types the stepper can operate over.
///
/// Implemented automatically for every type meeting the bounds, which covers
/// all primitive integer and float domains carrying [`DomainBounds`].
pub trait StepValue:
    Copy
    + PartialOrd
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Div<Self, Output = Self>
    + Zero
    + FromPrimitive
    + DomainBounds
    + std::fmt::Debug
    + std::fmt::Display
    + Send
    + Sync
{
}

impl<T> StepValue for T where
    T: Copy
        + PartialOrd
        + Add<Self, Output = Self>
        + Sub<Self, Output = Self>
        + Div<Self, Output = Self>
        + Zero
        + FromPrimitive
        + DomainBounds
        + std::fmt::Debug
        + std::fmt::Display
        + Send
        + Sync
{
}
