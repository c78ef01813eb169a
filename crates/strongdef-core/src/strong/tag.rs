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

/// A trait to mark a type as the tag of a strong typedef.
///
/// Implementing `StrongTag` is the explicit opt-in that qualifies
/// `Strong<V, Self>` as a named wrapper. Without it the wrapper can be built
/// and unwrapped but has no operators, comparisons, stepping, checked
/// arithmetic, formatting, or parsing. `NAME` is what `Debug` and
/// `ParseStrongError` report.
///
/// # Examples
///
/// ```rust
/// # use strongdef_core::{Strong, StrongTag};
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct WidthTag;
///
/// impl StrongTag for WidthTag {
///     const NAME: &'static str = "Width";
/// }
///
/// type Width = Strong<i32, WidthTag>;
///
/// let w = Width::new(45);
/// assert_eq!(format!("{:?}", w), "Width(45)");
/// ```
pub trait StrongTag {
    const NAME: &'static str;
}

/// Declares a zero-sized tag type and implements `StrongTag` for it.
///
/// The name reported by the tag defaults to the tag's identifier; pass
/// `=> "Name"` to override it.
///
/// # Examples
///
/// ```rust
/// use strongdef_core::{Strong, StrongTag, strong_tag};
///
/// strong_tag!(pub HeightTag => "Height");
/// strong_tag!(DepthTag);
///
/// assert_eq!(HeightTag::NAME, "Height");
/// assert_eq!(DepthTag::NAME, "DepthTag");
///
/// type Height = Strong<u32, HeightTag>;
/// assert_eq!(format!("{:?}", Height::new(3)), "Height(3)");
/// ```
#[macro_export]
macro_rules! strong_tag {
    ($(#[$meta:meta])* $vis:vis $tag:ident => $name:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        $vis struct $tag;

        impl $crate::StrongTag for $tag {
            const NAME: &'static str = $name;
        }
    };
    ($(#[$meta:meta])* $vis:vis $tag:ident) => {
        $crate::strong_tag!($(#[$meta])* $vis $tag => stringify!($tag));
    };
}

#[cfg(test)]
mod tests {
    use super::StrongTag;

    crate::strong_tag!(NamedTag => "Named");
    crate::strong_tag!(
        /// Documented tags keep their attributes.
        pub(crate) PlainTag
    );

    #[test]
    fn test_explicit_name() {
        assert_eq!(NamedTag::NAME, "Named");
    }

    #[test]
    fn test_default_name_is_identifier() {
        assert_eq!(PlainTag::NAME, "PlainTag");
    }

    #[test]
    fn test_tags_are_zero_sized() {
        assert_eq!(std::mem::size_of::<NamedTag>(), 0);
        assert_eq!(std::mem::size_of::<PlainTag>(), 0);
    }
}
