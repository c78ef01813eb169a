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

//! # Strong Typedefs
//!
//! Phantom-tagged wrappers around a single value. `Strong<V, Tag>` holds one
//! `V` and is `#[repr(transparent)]` over it, so it costs nothing at runtime.
//! Two wrappers over the same `V` but with different tags are unrelated types:
//! the compiler refuses to add, compare, or assign one to the other.
//!
//! ## Operator ruleset
//!
//! Every binary operator comes in exactly two shapes:
//!
//! - `Strong<V, Tag> op Strong<V, Tag>`: both operands share the wrapper.
//! - `Strong<V, Tag> op V`: the right operand is a bare value of the exact
//!   wrapped type, so `distance += 4` needs no throwaway wrapper.
//!
//! Anything else (another wrapper, a reference, a different numeric type) has
//! no impl and fails to build. All of it is gated on `Tag: StrongTag`; a tag
//! that never opted in leaves the wrapper without operators. The result of arithmetic is always rewrapped in
//! the left operand's wrapper.
//!
//! ## Submodules
//!
//! - `tag`: `StrongTag`, the explicit opt-in marker that names a wrapper, and
//!   the `strong_tag!` macro.
//! - `wrapper`: The `Strong<V, Tag>` type, construction, member access,
//!   formatting, and the `strong_type!` macro.
//! - `arith`: `+ - * / %`, compound assignment, unary `-`, `Sum`, `Product`.
//! - `cmp`: `== != < > <= >=` against the wrapper or the bare value.
//! - `step`: Prefix and postfix increment/decrement.
//! - `checked`: Checked and saturating arithmetic plus `num_traits`
//!   integration (`Zero`, `One`, `Bounded`).
//! - `parse`: `FromStr` forwarding and `ParseStrongError`.

pub mod arith;
pub mod checked;
pub mod cmp;
pub mod parse;
pub mod step;
pub mod tag;
pub mod wrapper;
