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

//! Build-time rejections of the operator ruleset.
//!
//! Every snippet below must fail to compile. They are collected only when
//! running doctests.
//!
//! # Cross-wrapper mismatch
//!
//! `Width + Height`:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//! strong_type!(Height: i32, HeightTag);
//!
//! let w = Width::new(98);
//! let h = Height::new(98);
//! let _ = w + h;
//! ```
//!
//! `Width - Height`:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//! strong_type!(Height: i32, HeightTag);
//!
//! let w = Width::new(98);
//! let h = Height::new(98);
//! let _ = w - h;
//! ```
//!
//! `Width * Height`:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//! strong_type!(Height: i32, HeightTag);
//!
//! let w = Width::new(98);
//! let h = Height::new(98);
//! let _ = w * h;
//! ```
//!
//! `Width / Height`:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//! strong_type!(Height: i32, HeightTag);
//!
//! let w = Width::new(98);
//! let h = Height::new(98);
//! let _ = w / h;
//! ```
//!
//! `Width % Height`:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//! strong_type!(Height: i32, HeightTag);
//!
//! let w = Width::new(98);
//! let h = Height::new(98);
//! let _ = w % h;
//! ```
//!
//! `Width += Height`:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//! strong_type!(Height: i32, HeightTag);
//!
//! let mut w = Width::new(98);
//! let h = Height::new(98);
//! w += h;
//! ```
//!
//! `Width -= Height`:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//! strong_type!(Height: i32, HeightTag);
//!
//! let mut w = Width::new(98);
//! let h = Height::new(98);
//! w -= h;
//! ```
//!
//! `Width *= Height`:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//! strong_type!(Height: i32, HeightTag);
//!
//! let mut w = Width::new(98);
//! let h = Height::new(98);
//! w *= h;
//! ```
//!
//! `Width /= Height`:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//! strong_type!(Height: i32, HeightTag);
//!
//! let mut w = Width::new(98);
//! let h = Height::new(98);
//! w /= h;
//! ```
//!
//! `Width %= Height`:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//! strong_type!(Height: i32, HeightTag);
//!
//! let mut w = Width::new(98);
//! let h = Height::new(98);
//! w %= h;
//! ```
//!
//! `Width == Height`:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//! strong_type!(Height: i32, HeightTag);
//!
//! let w = Width::new(98);
//! let h = Height::new(98);
//! let _ = w == h;
//! ```
//!
//! `Width != Height`:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//! strong_type!(Height: i32, HeightTag);
//!
//! let w = Width::new(98);
//! let h = Height::new(98);
//! let _ = w != h;
//! ```
//!
//! `Width < Height`:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//! strong_type!(Height: i32, HeightTag);
//!
//! let w = Width::new(98);
//! let h = Height::new(98);
//! let _ = w < h;
//! ```
//!
//! `Width > Height`:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//! strong_type!(Height: i32, HeightTag);
//!
//! let w = Width::new(98);
//! let h = Height::new(98);
//! let _ = w > h;
//! ```
//!
//! `Width <= Height`:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//! strong_type!(Height: i32, HeightTag);
//!
//! let w = Width::new(98);
//! let h = Height::new(98);
//! let _ = w <= h;
//! ```
//!
//! `Width >= Height`:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//! strong_type!(Height: i32, HeightTag);
//!
//! let w = Width::new(98);
//! let h = Height::new(98);
//! let _ = w >= h;
//! ```
//!
//! No conversion between wrappers, not even an explicit `From`:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//! strong_type!(Height: i32, HeightTag);
//!
//! let h: Height = Height::from(Width::new(1));
//! ```
//!
//! Assignment across wrappers:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//! strong_type!(Height: i32, HeightTag);
//!
//! let mut w = Width::new(1);
//! w = Height::new(2);
//! ```
//!
//! # Cross-representation mismatch
//!
//! A bare value of a wider type:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//! strong_type!(Height: i32, HeightTag);
//!
//! let _ = Width::new(1) + 1_i64;
//! ```
//!
//! A wider bare value in compound assignment:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//!
//! let mut w = Width::new(1);
//! w += 1_i64;
//! ```
//!
//! A narrower bare value in an ordering comparison:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//!
//! let _ = Width::new(1) < 1_u8;
//! ```
//!
//! A bare value of a float type:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//! strong_type!(Height: i32, HeightTag);
//!
//! let _ = Width::new(1) == 1.0;
//! ```
//!
//! A reference to the wrapped type:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//! strong_type!(Height: i32, HeightTag);
//!
//! let j = 4;
//! let _ = Width::new(56) + &j;
//! ```
//!
//! A raw pointer:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//! strong_type!(Height: i32, HeightTag);
//!
//! let j = 4;
//! let p: *const i32 = &j;
//! let _ = Width::new(56) + p;
//! ```
//!
//! Implicit construction from a bare value:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//! strong_type!(Height: i32, HeightTag);
//!
//! let w: Width = 5;
//! ```
//!
//! The bare value on the left does not gain the wrapper:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//! strong_type!(Height: i32, HeightTag);
//!
//! let _: Width = 5 + Width::new(1);
//! ```
//!
//! # Non-qualifying wrapper
//!
//! A tag without `StrongTag` gives no `Debug`:
//!
//! ```compile_fail
//! use strongdef_core::Strong;
//!
//! struct Untagged;
//!
//! let w = Strong::<i32, Untagged>::new(1);
//! let _ = format!("{:?}", w);
//! ```
//!
//! A tag without `StrongTag` gives no arithmetic:
//!
//! ```compile_fail
//! use strongdef_core::Strong;
//!
//! struct Untagged;
//!
//! let _ = Strong::<i32, Untagged>::new(1) + 1;
//! ```
//!
//! No comparison either:
//!
//! ```compile_fail
//! use strongdef_core::Strong;
//!
//! struct Untagged;
//!
//! let _ = Strong::<i32, Untagged>::new(1) == 1;
//! ```
//!
//! No stepping:
//!
//! ```compile_fail
//! use strongdef_core::Strong;
//!
//! struct Untagged;
//!
//! let mut w = Strong::<i32, Untagged>::new(1);
//! w.increment();
//! ```
//!
//! No checked arithmetic:
//!
//! ```compile_fail
//! use strongdef_core::Strong;
//!
//! struct Untagged;
//!
//! let _ = Strong::<i32, Untagged>::new(1).checked_add(1);
//! ```
//!
//! A foreign type used as the tag does not qualify:
//!
//! ```compile_fail
//! use strongdef_core::Strong;
//!
//! let mut w = Strong::<i32, ()>::new(1);
//! w += 4;
//! ```
//!
//! A plain single-field struct gets no operators:
//!
//! ```compile_fail
//! struct Meter { v: i32 }
//!
//! let _ = Meter { v: 1 } + Meter { v: 2 };
//! ```
//!
//! # Unsupported underlying operation
//!
//! `String` has no `Mul`:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Name: String, NameTag);
//!
//! let _ = Name::new("a".to_string()) * Name::new("b".to_string());
//! ```
//!
//! `String` has no `Step`:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Name: String, NameTag);
//!
//! let mut n = Name::new("a".to_string());
//! n.increment();
//! ```
//!
//! A tuple member gets no arithmetic:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Pair: (i32, i32), PairTag);
//!
//! let _ = Pair::new((1, 2)) + Pair::new((3, 4));
//! ```
//!
//! Checked arithmetic follows the same operand rule:
//!
//! ```compile_fail
//! use strongdef_core::strong_type;
//!
//! strong_type!(Width: i32, WidthTag);
//! strong_type!(Height: i32, HeightTag);
//!
//! let _ = Width::new(1).checked_add(Height::new(1));
//! ```
