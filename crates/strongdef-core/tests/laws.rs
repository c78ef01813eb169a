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

use proptest::prelude::*;
use strongdef_core::strong_type;

strong_type!(Meter: i32, MeterTag);
strong_type!(Yard: i32, YardTag);
strong_type!(Ticks: u64, TicksTag);

// Keeps products and sums well inside `i32`.
const SMALL: std::ops::RangeInclusive<i32> = -40_000..=40_000;

fn non_zero() -> impl Strategy<Value = i32> {
    SMALL.prop_filter("divisor must be non-zero", |v| *v != 0)
}

proptest! {
    #[test]
    fn wrapped_operands_match_underlying(a in SMALL, b in SMALL) {
        prop_assert_eq!(Meter::new(a) + Meter::new(b), Meter::new(a + b));
        prop_assert_eq!(Meter::new(a) - Meter::new(b), Meter::new(a - b));
        prop_assert_eq!(Meter::new(a) * Meter::new(b), Meter::new(a * b));
    }

    #[test]
    fn wrapped_division_matches_underlying(a in SMALL, b in non_zero()) {
        prop_assert_eq!(Meter::new(a) / Meter::new(b), Meter::new(a / b));
        prop_assert_eq!(Meter::new(a) % Meter::new(b), Meter::new(a % b));
    }

    #[test]
    fn bare_operands_match_underlying(a in SMALL, b in SMALL, d in non_zero()) {
        prop_assert_eq!(Meter::new(a) + b, Meter::new(a + b));
        prop_assert_eq!(Meter::new(a) - b, Meter::new(a - b));
        prop_assert_eq!(Meter::new(a) * b, Meter::new(a * b));
        prop_assert_eq!(Meter::new(a) / d, Meter::new(a / d));
        prop_assert_eq!(Meter::new(a) % d, Meter::new(a % d));
    }

    #[test]
    fn compound_assignment_round_trips(a in SMALL, k in SMALL) {
        let original = Meter::new(a);

        let mut w = original;
        w += k;
        w -= k;
        prop_assert_eq!(w, original);

        let mut w = original;
        w += Meter::new(k);
        w -= Meter::new(k);
        prop_assert_eq!(w, original);
    }

    #[test]
    fn postfix_returns_snapshot(a in 1_u64..u64::MAX - 1) {
        let original = Ticks::new(a);

        let mut w = original;
        let before = w.post_increment();
        prop_assert_eq!(before, original);
        prop_assert_eq!(w, original + 1);

        let prior = w;
        let before = w.post_decrement();
        prop_assert_eq!(before, prior);
        prop_assert_eq!(w, prior - 1);
    }

    #[test]
    fn prefix_returns_updated(a in 1_u64..u64::MAX - 1) {
        let mut w = Ticks::new(a);
        prop_assert_eq!(*w.increment(), a + 1);
        prop_assert_eq!(*w.decrement(), a);
    }

    #[test]
    fn comparison_is_total(a in any::<i32>(), b in any::<i32>()) {
        let (x, y) = (Yard::new(a), Yard::new(b));
        let holds = [x < y, x == y, x > y];
        prop_assert_eq!(holds.iter().filter(|h| **h).count(), 1);
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
    }

    #[test]
    fn comparison_with_bare_value_agrees(a in any::<i32>(), b in any::<i32>()) {
        let x = Yard::new(a);
        prop_assert_eq!(x == b, a == b);
        prop_assert_eq!(x < b, a < b);
        prop_assert_eq!(x >= b, a >= b);
        prop_assert_eq!(x.partial_cmp(&b), a.partial_cmp(&b));
    }

    #[test]
    fn checked_matches_underlying(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(Meter::new(a).checked_add(b).map(Meter::into_value), a.checked_add(b));
        prop_assert_eq!(Meter::new(a).checked_mul(Meter::new(b)).map(Meter::into_value), a.checked_mul(b));
        prop_assert_eq!(Meter::new(a).checked_div(b).map(Meter::into_value), a.checked_div(b));
    }

    #[test]
    fn display_and_parse_agree(a in any::<i32>()) {
        let m = Meter::new(a);
        prop_assert_eq!(m.to_string(), a.to_string());
        prop_assert_eq!(m.to_string().parse::<Meter>().unwrap(), m);
    }
}

#[test]
fn width_scenarios() {
    strong_type!(Width: i32, WidthTag);

    let mut w = Width::new(45);
    w.post_increment();
    assert_eq!(w, 46);
    w.increment();
    assert_eq!(w, 47);

    let mut w = Width::new(45);
    w *= 2;
    assert_eq!(w, Width::new(90));
}

#[test]
fn default_value_compares_equal_to_zero() {
    let mut m = Meter::new(67);
    assert_eq!(m, 67);
    m = Meter::default();
    assert_eq!(m, 0);
}
