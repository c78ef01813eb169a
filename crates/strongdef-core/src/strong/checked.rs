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

//! Checked and saturating arithmetic, plus `num_traits` integration.
//!
//! The named methods follow the same operand rule as the operators: the right
//! operand is either the same wrapper or the bare value (`StrongOperand`).
//! Checked methods return `None` where the wrapped type's own checked method
//! does (overflow, underflow, division by zero); saturating methods clamp to
//! the wrapped type's bounds.

use crate::strong::tag::StrongTag;
use crate::strong::wrapper::{Strong, StrongOperand};
use num_traits::{
    Bounded, CheckedAdd, CheckedDiv, CheckedMul, CheckedRem, CheckedSub, One, SaturatingAdd,
    SaturatingMul, SaturatingSub, Zero,
};

macro_rules! impl_checked_op {
    ($bound:ident, $method:ident, $doc:literal) => {
        impl<V, Tag> Strong<V, Tag>
        where
            V: $bound,
            Tag: StrongTag,
        {
            #[doc = $doc]
            #[inline(always)]
            pub fn $method<R>(self, rhs: R) -> Option<Self>
            where
                R: StrongOperand<V, Tag>,
            {
                <V as $bound>::$method(self.value(), &rhs.into_operand()).map(Self::new)
            }
        }
    };
}

impl_checked_op!(
    CheckedAdd,
    checked_add,
    "Checked addition. Returns `None` on overflow."
);
impl_checked_op!(
    CheckedSub,
    checked_sub,
    "Checked subtraction. Returns `None` on underflow."
);
impl_checked_op!(
    CheckedMul,
    checked_mul,
    "Checked multiplication. Returns `None` on overflow."
);
impl_checked_op!(
    CheckedDiv,
    checked_div,
    "Checked division. Returns `None` on division by zero or overflow."
);
impl_checked_op!(
    CheckedRem,
    checked_rem,
    "Checked remainder. Returns `None` on division by zero or overflow."
);

macro_rules! impl_saturating_op {
    ($bound:ident, $method:ident, $doc:literal) => {
        impl<V, Tag> Strong<V, Tag>
        where
            V: $bound,
            Tag: StrongTag,
        {
            #[doc = $doc]
            #[inline(always)]
            pub fn $method<R>(self, rhs: R) -> Self
            where
                R: StrongOperand<V, Tag>,
            {
                Self::new(<V as $bound>::$method(self.value(), &rhs.into_operand()))
            }
        }
    };
}

impl_saturating_op!(
    SaturatingAdd,
    saturating_add,
    "Saturating addition. Clamps at the wrapped type's bounds."
);
impl_saturating_op!(
    SaturatingSub,
    saturating_sub,
    "Saturating subtraction. Clamps at the wrapped type's bounds."
);
impl_saturating_op!(
    SaturatingMul,
    saturating_mul,
    "Saturating multiplication. Clamps at the wrapped type's bounds."
);

impl<V, Tag> Zero for Strong<V, Tag>
where
    V: Zero,
    Tag: StrongTag,
{
    #[inline(always)]
    fn zero() -> Self {
        Self::new(V::zero())
    }

    #[inline(always)]
    fn is_zero(&self) -> bool {
        self.value().is_zero()
    }
}

impl<V, Tag> One for Strong<V, Tag>
where
    V: One,
    Tag: StrongTag,
{
    #[inline(always)]
    fn one() -> Self {
        Self::new(V::one())
    }
}

impl<V, Tag> Bounded for Strong<V, Tag>
where
    V: Bounded,
    Tag: StrongTag,
{
    #[inline(always)]
    fn min_value() -> Self {
        Self::new(V::min_value())
    }

    #[inline(always)]
    fn max_value() -> Self {
        Self::new(V::max_value())
    }
}

#[cfg(test)]
mod tests {
    use num_traits::{Bounded, One, Zero};

    crate::strong_type!(Speed: u8, SpeedTag);
    crate::strong_type!(Offset: i32, OffsetTag);

    #[test]
    fn test_checked_add_sub() {
        let s = Speed::new(200);

        assert_eq!(s.checked_add(50_u8), Some(Speed::new(250)));
        assert_eq!(s.checked_add(Speed::new(100)), None);
        assert_eq!(s.checked_sub(Speed::new(201)), None);
        assert_eq!(s.checked_sub(100_u8), Some(Speed::new(100)));
    }

    #[test]
    fn test_checked_mul_div_rem() {
        let s = Speed::new(20);

        assert_eq!(s.checked_mul(10_u8), Some(Speed::new(200)));
        assert_eq!(s.checked_mul(Speed::new(20)), None);
        assert_eq!(s.checked_div(0_u8), None);
        assert_eq!(s.checked_div(Speed::new(4)), Some(Speed::new(5)));
        assert_eq!(s.checked_rem(Speed::new(0)), None);
        assert_eq!(s.checked_rem(3_u8), Some(Speed::new(2)));
    }

    #[test]
    fn test_checked_signed_edge() {
        let min = Offset::new(i32::MIN);
        assert_eq!(min.checked_div(-1_i32), None);
        assert_eq!(min.checked_rem(Offset::new(-1)), None);
    }

    #[test]
    fn test_saturating() {
        assert_eq!(Speed::new(250).saturating_add(10_u8), Speed::new(255));
        assert_eq!(Speed::new(5).saturating_sub(Speed::new(10)), Speed::new(0));
        assert_eq!(Speed::new(100).saturating_mul(3_u8), Speed::max_value());
        assert_eq!(Offset::new(-5).saturating_sub(i32::MAX), Offset::min_value());
    }

    #[test]
    fn test_num_traits_identities() {
        assert!(Offset::zero().is_zero());
        assert!(!Offset::new(3).is_zero());
        assert_eq!(Offset::one(), 1);
        assert_eq!(Speed::min_value(), 0);
        assert_eq!(Speed::max_value(), u8::MAX);
    }

    #[test]
    fn test_step_applies_to_wrapper_itself() {
        use crate::Step;

        let mut o = Offset::new(1);
        o.step_forward();
        assert_eq!(o, 2);
    }
}
