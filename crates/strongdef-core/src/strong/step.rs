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

use crate::num::step::Step;
use crate::strong::tag::StrongTag;
use crate::strong::wrapper::Strong;

impl<V, Tag> Strong<V, Tag>
where
    V: Step,
    Tag: StrongTag,
{
    /// Prefix increment (`++w`): steps the wrapped value forward and returns
    /// the updated wrapper.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strongdef_core::strong_type;
    /// strong_type!(Width: i32, WidthTag);
    ///
    /// let mut w = Width::new(45);
    /// assert_eq!(*w.increment(), 46);
    /// assert_eq!(w, 46);
    /// ```
    #[inline(always)]
    pub fn increment(&mut self) -> &mut Self {
        self.value_mut().step_forward();
        self
    }

    /// Prefix decrement (`--w`): steps the wrapped value backward and returns
    /// the updated wrapper.
    #[inline(always)]
    pub fn decrement(&mut self) -> &mut Self {
        self.value_mut().step_backward();
        self
    }
}

impl<V, Tag> Strong<V, Tag>
where
    V: Step + Clone,
    Tag: StrongTag,
{
    /// Postfix increment (`w++`): steps the wrapped value forward and returns
    /// a snapshot taken before the step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use strongdef_core::strong_type;
    /// strong_type!(Width: i32, WidthTag);
    ///
    /// let mut w = Width::new(45);
    /// assert_eq!(w.post_increment(), 45);
    /// assert_eq!(w, 46);
    /// ```
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let before = self.clone();
        self.value_mut().step_forward();
        before
    }

    /// Postfix decrement (`w--`): steps the wrapped value backward and returns
    /// a snapshot taken before the step.
    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let before = self.clone();
        self.value_mut().step_backward();
        before
    }
}
