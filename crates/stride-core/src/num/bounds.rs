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

/// A trait for numeric types whose representable range is known statically.
///
/// The bounds are associated constants rather than the functions of
/// `num_traits::Bounded`, so a caller selects the domain through the type
/// parameter alone and the limits resolve at compile time. `NAME` labels the
/// domain in demonstration output, replacing any runtime type-name lookup.
///
/// # Invariants
///
/// `MIN <= 0 <= MAX` for signed integer and float domains; `MIN == 0` for
/// unsigned domains.
///
/// # Examples
///
/// ```rust
/// # use stride_core::num::bounds::DomainBounds;
/// assert_eq!(<u8 as DomainBounds>::MIN, 0);
/// assert_eq!(<u8 as DomainBounds>::MAX, 255);
/// assert_eq!(<i8 as DomainBounds>::NAME, "i8");
/// ```
pub trait DomainBounds {
    /// The smallest representable value of the domain.
    const MIN: Self;
    /// The largest representable value of the domain.
    const MAX: Self;
    /// A static label for the domain, e.g. `"i32"`.
    const NAME: &'static str;
}

macro_rules! domain_bounds_impl {
    ($t:ty) => {
        impl DomainBounds for $t {
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const NAME: &'static str = stringify!($t);
        }
    };
}

domain_bounds_impl!(i8);
domain_bounds_impl!(i16);
domain_bounds_impl!(i32);
domain_bounds_impl!(i64);
domain_bounds_impl!(i128);
domain_bounds_impl!(isize);

domain_bounds_impl!(u8);
domain_bounds_impl!(u16);
domain_bounds_impl!(u32);
domain_bounds_impl!(u64);
domain_bounds_impl!(u128);
domain_bounds_impl!(usize);

// Note: `f32::MIN` is the most negative finite value, which is the minimum
// representable bound in the sense used here, not the subnormal threshold.
domain_bounds_impl!(f32);
domain_bounds_impl!(f64);
