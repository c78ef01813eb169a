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

use num_traits::One;
use std::ops::{AddAssign, SubAssign};

/// A trait for values that can move one unit up or down in place.
///
/// This is the increment/decrement capability of a value, the counterpart of
/// the `++`/`--` operators found in other languages. It is implemented for
/// every type that has a multiplicative identity (`num_traits::One`) and
/// supports `+=`/`-=` with itself, which covers all primitive integers and
/// floats as well as `std::num::Wrapping<T>`.
///
/// # Examples
///
/// ```rust
/// # use strongdef_core::Step;
///
/// let mut x: u8 = 41;
/// x.step_forward();
/// assert_eq!(x, 42);
///
/// let mut y: f64 = 0.5;
/// y.step_backward();
/// assert_eq!(y, -0.5);
/// ```
pub trait Step {
    /// Moves the value one unit up (`x += 1`).
    fn step_forward(&mut self);

    /// Moves the value one unit down (`x -= 1`).
    fn step_backward(&mut self);
}

impl<T> Step for T
where
    T: One + AddAssign + SubAssign,
{
    #[inline(always)]
    fn step_forward(&mut self) {
        *self += T::one();
    }

    #[inline(always)]
    fn step_backward(&mut self) {
        *self -= T::one();
    }
}
