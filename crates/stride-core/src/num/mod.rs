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

//! # Numeric Domains
//!
//! Traits describing the numeric domains the stepper operates over. A
//! domain is a primitive numeric type together with its representable
//! range, exposed through associated constants rather than runtime
//! inspection.
//!
//! ## Submodules
//!
//! - `bounds`: The `DomainBounds` descriptor trait (`MIN`, `MAX`, `NAME`)
//!   implemented for all core integer and float types.
//! - `value`: The `StepValue` trait alias collecting the arithmetic,
//!   ordering, and formatting bounds the stepper requires of a domain.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod bounds;
pub mod value;
