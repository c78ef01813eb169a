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

//! Arithmetic forwarding for `Strong<V, Tag>`.
//!
//! Each of `+ - * / %` is implemented twice: with the wrapper itself and
//! with the bare `V` on the right. The compound forms mirror that pair. The
//! result is always the left operand's wrapper. There is no impl
//! taking a wrapper with a different tag, a reference, or any other type.

use crate::strong::tag::StrongTag;
use crate::strong::wrapper::Strong;
use std::iter::{Product, Sum};
use std::ops::Neg;

macro_rules! impl_strong_op {
    ($trait_name:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl<V, Tag> std::ops::$trait_name for Strong<V, Tag>
        where
            V: std::ops::$trait_name<Output = V>,
            Tag: StrongTag,
        {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self::Output {
                Self::new(std::ops::$trait_name::$method(
                    self.into_value(),
                    rhs.into_value(),
                ))
            }
        }

        impl<V, Tag> std::ops::$trait_name<V> for Strong<V, Tag>
        where
            V: std::ops::$trait_name<Output = V>,
            Tag: StrongTag,
        {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: V) -> Self::Output {
                Self::new(std::ops::$trait_name::$method(self.into_value(), rhs))
            }
        }

        impl<V, Tag> std::ops::$assign_trait for Strong<V, Tag>
        where
            V: std::ops::$assign_trait,
            Tag: StrongTag,
        {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                std::ops::$assign_trait::$assign_method(self.value_mut(), rhs.into_value());
            }
        }

        impl<V, Tag> std::ops::$assign_trait<V> for Strong<V, Tag>
        where
            V: std::ops::$assign_trait,
            Tag: StrongTag,
        {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: V) {
                std::ops::$assign_trait::$assign_method(self.value_mut(), rhs);
            }
        }
    };
}

impl_strong_op!(Add, add, AddAssign, add_assign);
impl_strong_op!(Sub, sub, SubAssign, sub_assign);
impl_strong_op!(Mul, mul, MulAssign, mul_assign);
impl_strong_op!(Div, div, DivAssign, div_assign);
impl_strong_op!(Rem, rem, RemAssign, rem_assign);

impl<V, Tag> Neg for Strong<V, Tag>
where
    V: Neg<Output = V>,
    Tag: StrongTag,
{
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Self::new(-self.into_value())
    }
}

impl<V, Tag> Sum for Strong<V, Tag>
where
    V: Sum,
    Tag: StrongTag,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::new(iter.map(Strong::into_value).sum())
    }
}

impl<'a, V, Tag> Sum<&'a Strong<V, Tag>> for Strong<V, Tag>
where
    V: Sum<&'a V> + 'a,
    Tag: StrongTag + 'a,
{
    fn sum<I: Iterator<Item = &'a Strong<V, Tag>>>(iter: I) -> Self {
        Self::new(iter.map(Strong::value).sum())
    }
}

impl<V, Tag> Product for Strong<V, Tag>
where
    V: Product,
    Tag: StrongTag,
{
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::new(iter.map(Strong::into_value).product())
    }
}

impl<'a, V, Tag> Product<&'a Strong<V, Tag>> for Strong<V, Tag>
where
    V: Product<&'a V> + 'a,
    Tag: StrongTag + 'a,
{
    fn product<I: Iterator<Item = &'a Strong<V, Tag>>>(iter: I) -> Self {
        Self::new(iter.map(Strong::value).product())
    }
}

#[cfg(test)]
mod tests {
    crate::strong_type!(Width: i32, WidthTag);
    crate::strong_type!(Ratio: f64, RatioTag);

    #[test]
    fn test_arithmetic_with_underlying() {
        let w = Width::new(45);

        assert_eq!(w + 5, 50);
        assert_eq!(w - 5, 40);
        assert_eq!(w * 4, 180);
        assert_eq!(w / 15, 3);
        assert_eq!(w % 2, 1);
    }

    #[test]
    fn test_arithmetic_with_self() {
        let w = Width::new(45);

        assert_eq!(w + w, 90);
        assert_eq!(w - w, 0);
        assert_eq!(w * w, 45 * 45);
        assert_eq!(w / w, 1);
        assert_eq!(w % w, 0);
    }

    #[test]
    fn test_assignment_ops_with_underlying() {
        let mut w = Width::new(45);
        w += 10;
        assert_eq!(w, Width::new(55));

        let mut w = Width::new(45);
        w -= 10;
        assert_eq!(w, Width::new(35));

        let mut w = Width::new(45);
        w *= 2;
        assert_eq!(w, Width::new(90));

        let mut w = Width::new(90);
        w /= 2;
        assert_eq!(w, Width::new(45));

        let mut w = Width::new(44);
        w %= 4;
        assert_eq!(w, Width::new(0));
    }

    #[test]
    fn test_assignment_ops_with_self() {
        let mut a = Width::new(56);
        let b = Width::new(67);
        a += b;
        assert_eq!(a, 56 + 67);

        a -= b;
        assert_eq!(a, 56);

        a *= Width::new(2);
        assert_eq!(a, 112);

        a /= Width::new(7);
        assert_eq!(a, 16);

        a %= Width::new(5);
        assert_eq!(a, 1);
    }

    #[test]
    fn test_float_forwarding() {
        let r = Ratio::new(1.5) * 2.0 + Ratio::new(0.5);
        assert_eq!(r, 3.5);
        assert_eq!(Ratio::new(7.5) % 2.0, 1.5);
    }

    #[test]
    fn test_neg() {
        assert_eq!(-Width::new(3), Width::new(-3));
        assert_eq!(-Ratio::new(0.25), -0.25);
    }

    #[test]
    fn test_sum_and_product() {
        let widths = [Width::new(1), Width::new(2), Width::new(3), Width::new(4)];

        let by_ref: Width = widths.iter().sum();
        let by_value: Width = widths.into_iter().sum();
        assert_eq!(by_ref, 10);
        assert_eq!(by_value, by_ref);

        let product: Width = widths.iter().product();
        assert_eq!(product, 24);

        let empty: Width = std::iter::empty::<Width>().sum();
        assert_eq!(empty, 0);
    }

    #[test]
    #[should_panic]
    fn test_division_by_zero_is_underlying_behavior() {
        let w = Width::new(1);
        let zero = Width::new(std::hint::black_box(0));
        let _ = w / zero;
    }
}
