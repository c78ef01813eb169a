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

//! # Strongdef Core
//!
//! Strong typedefs for Rust: nominal wrappers around a single value that keep
//! the wrapped type's arithmetic, comparison, and stepping operators while
//! refusing to mix semantically different quantities that share a
//! representation.
//!
//! ## Modules
//!
//! - `strong`: The `Strong<V, Tag>` wrapper, its tag trait (`StrongTag`), the
//!   forwarding operator ruleset (`+ - * / %`, compound assignment, unary
//!   negation, comparison), increment/decrement, checked and saturating
//!   arithmetic, parsing, and the `strong_tag!`/`strong_type!` declaration
//!   macros.
//! - `num`: The `Step` trait, the forwarding point for increment and
//!   decrement of the wrapped value.
//!
//! ## Usage
//!
//! ```rust
//! use strongdef_core::strong_type;
//!
//! strong_type!(pub Meter: i32, MeterTag);
//! strong_type!(pub Yard: i32, YardTag);
//!
//! let mut length = Meter::new(6) + Meter::new(7);
//! length += 4;
//! assert_eq!(length, 17);
//! assert_eq!(format!("{}", length), "17");
//! assert_eq!(format!("{:?}", length), "Meter(17)");
//!
//! // Yards are not meters, even though both are `i32` underneath.
//! let _fence = Yard::new(3);
//! ```
//!
//! Mixing two different wrappers is a build failure:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Meter: i32, MeterTag);
//! strong_type!(Yard: i32, YardTag);
//!
//! let _ = Meter::new(1) + Yard::new(1);
//! ```

pub mod num;
pub mod strong;

#[cfg(doctest)]
mod rejection;

pub use num::step::Step;
pub use strong::parse::ParseStrongError;
pub use strong::tag::StrongTag;
pub use strong::wrapper::{Strong, StrongOperand};
