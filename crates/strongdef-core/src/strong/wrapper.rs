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

use crate::strong::tag::StrongTag;
use std::marker::PhantomData;

/// A strong typedef: a value of type `V` made distinct by the tag type `Tag`.
///
/// `Strong<V, A>` and `Strong<V, B>` are different types whenever `A != B`,
/// even though both hold a `V`. The wrapper forwards `V`'s arithmetic,
/// comparison, and stepping operators, accepting either another wrapper of
/// the same type or a bare `V` as the right operand.
///
/// The tag is only a type-level marker. It is held as `PhantomData<fn() -> Tag>`
/// so it never affects `Send`, `Sync` or variance. Construction and member
/// access work for any tag; every operator, comparison, and formatting impl
/// requires `Tag: StrongTag`.
///
/// # Examples
///
/// ```rust
/// # use strongdef_core::{Strong, StrongTag};
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct MeterTag;
///
/// impl StrongTag for MeterTag {
///    const NAME: &'static str = "Meter";
/// }
///
/// type Meter = Strong<i32, MeterTag>;
///
/// let m = Meter::new(5) * 3;
/// assert_eq!(m.get(), 15);
/// assert_eq!(m, Meter::new(15));
/// ```
#[repr(transparent)]
pub struct Strong<V, Tag> {
    value: V,
    _tag: PhantomData<fn() -> Tag>,
}

impl<V, Tag> Strong<V, Tag> {
    /// Wraps `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strongdef_core::strong_type;
    /// strong_type!(Width: u32, WidthTag);
    ///
    /// const DEFAULT_WIDTH: Width = Width::new(80);
    /// assert_eq!(DEFAULT_WIDTH.get(), 80);
    /// ```
    #[inline(always)]
    pub const fn new(value: V) -> Self {
        Self {
            value,
            _tag: PhantomData,
        }
    }

    /// Returns a shared reference to the wrapped value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strongdef_core::strong_type;
    /// strong_type!(Name: String, NameTag);
    ///
    /// let name = Name::new("Jean".to_string());
    /// assert_eq!(name.value().len(), 4);
    /// ```
    #[inline(always)]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the wrapped value.
    ///
    /// This is the escape hatch for `V`'s own methods; mutations through it
    /// stay inside the wrapper.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strongdef_core::strong_type;
    /// strong_type!(Name: String, NameTag);
    ///
    /// let mut name = Name::new("Jean".to_string());
    /// name.value_mut().push_str("-Paul");
    /// assert_eq!(name.value(), "Jean-Paul");
    /// ```
    #[inline(always)]
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Consumes the wrapper and returns the wrapped value.
    #[inline(always)]
    pub fn into_value(self) -> V {
        self.value
    }

    /// Applies `f` to the wrapped value and wraps the result in the same
    /// wrapper type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strongdef_core::strong_type;
    /// strong_type!(Meter: i32, MeterTag);
    ///
    /// let m = Meter::new(-7).map(i32::abs);
    /// assert_eq!(m, 7);
    /// ```
    #[inline]
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnOnce(V) -> V,
    {
        Self::new(f(self.value))
    }
}

impl<V, Tag> Strong<V, Tag>
where
    V: Copy,
{
    /// Returns a copy of the wrapped value.
    #[inline(always)]
    pub const fn get(&self) -> V {
        self.value
    }
}

impl<V, Tag> Clone for Strong<V, Tag>
where
    V: Clone,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<V, Tag> Copy for Strong<V, Tag> where V: Copy {}

/// A default wrapper holds `V::default()`: zero for numbers, empty for strings.
impl<V, Tag> Default for Strong<V, Tag>
where
    V: Default,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<V, Tag> From<V> for Strong<V, Tag> {
    #[inline(always)]
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

impl<V, Tag> std::fmt::Display for Strong<V, Tag>
where
    V: std::fmt::Display,
    Tag: StrongTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.value, f)
    }
}

impl<V, Tag> std::fmt::Debug for Strong<V, Tag>
where
    V: std::fmt::Debug,
    Tag: StrongTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple(Tag::NAME).field(&self.value).finish()
    }
}

/// A right-hand operand accepted by the wrapper's named arithmetic methods.
///
/// Implemented for exactly two types: the wrapper itself and its bare value
/// type `V`. This is the method-call form of the operator ruleset; a
/// different wrapper, or any type other than `V`, is not an operand.
///
/// # Examples
///
/// ```rust
/// # use strongdef_core::strong_type;
/// strong_type!(Meter: i32, MeterTag);
///
/// let m = Meter::new(10);
/// assert_eq!(m.checked_add(Meter::new(5)), Some(Meter::new(15)));
/// assert_eq!(m.checked_add(5_i32), Some(Meter::new(15)));
/// ```
pub trait StrongOperand<V, Tag> {
    /// Unwraps the operand to the value it contributes.
    fn into_operand(self) -> V;
}

impl<V, Tag> StrongOperand<V, Tag> for V {
    #[inline(always)]
    fn into_operand(self) -> V {
        self
    }
}

impl<V, Tag> StrongOperand<V, Tag> for Strong<V, Tag> {
    #[inline(always)]
    fn into_operand(self) -> V {
        self.value
    }
}

/// Declares a strong typedef: a tag type plus a `Strong<V, Tag>` alias.
///
/// `strong_type!(pub Meter: i32, MeterTag)` defines the zero-sized
/// `MeterTag` (reporting the name `"Meter"`) and
/// `pub type Meter = Strong<i32, MeterTag>`. Attributes placed before the
/// name, doc comments included, are attached to the alias. The expansion also
/// asserts at compile time that the wrapper has exactly the size of its
/// single member.
///
/// # Examples
///
/// ```rust
/// use strongdef_core::strong_type;
///
/// strong_type!(
///     /// Horizontal extent of a building, in meters.
///     pub Width: i32, WidthTag
/// );
///
/// let mut w = Width::new(45);
/// w *= 2;
/// assert_eq!(w, Width::new(90));
/// ```
#[macro_export]
macro_rules! strong_type {
    ($(#[$meta:meta])* $vis:vis $name:ident: $value:ty, $tag:ident) => {
        $crate::strong_tag!($vis $tag => stringify!($name));

        $(#[$meta])*
        $vis type $name = $crate::Strong<$value, $tag>;

        const _: () = assert!(
            ::core::mem::size_of::<$name>() == ::core::mem::size_of::<$value>()
        );
    };
}
