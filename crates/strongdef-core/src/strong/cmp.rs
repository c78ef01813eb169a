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
use crate::strong::wrapper::Strong;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<V, Tag> PartialEq for Strong<V, Tag>
where
    V: PartialEq,
    Tag: StrongTag,
{
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl<V, Tag> PartialEq<V> for Strong<V, Tag>
where
    V: PartialEq,
    Tag: StrongTag,
{
    #[inline(always)]
    fn eq(&self, other: &V) -> bool {
        self.value() == other
    }
}

impl<V, Tag> Eq for Strong<V, Tag>
where
    V: Eq,
    Tag: StrongTag,
{
}

impl<V, Tag> PartialOrd for Strong<V, Tag>
where
    V: PartialOrd,
    Tag: StrongTag,
{
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value().partial_cmp(other.value())
    }
}

impl<V, Tag> PartialOrd<V> for Strong<V, Tag>
where
    V: PartialOrd,
    Tag: StrongTag,
{
    #[inline(always)]
    fn partial_cmp(&self, other: &V) -> Option<Ordering> {
        self.value().partial_cmp(other)
    }
}

impl<V, Tag> Ord for Strong<V, Tag>
where
    V: Ord,
    Tag: StrongTag,
{
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(other.value())
    }
}

impl<V, Tag> Hash for Strong<V, Tag>
where
    V: Hash,
    Tag: StrongTag,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};

    crate::strong_type!(Width: i32, WidthTag);
    crate::strong_type!(Name: String, NameTag);

    #[test]
    fn test_equality() {
        let a = Width::new(45);
        let b = Width::new(45);
        let c = Width::new(46);

        assert!(a == 45);
        assert!(a == b);
        assert!(a != 46);
        assert!(a != c);
    }

    #[test]
    fn test_ordering_with_self() {
        let w = Width::new(45);

        assert!(w < Width::new(46));
        assert!(w > Width::new(40));
        assert!(w <= Width::new(48));
        assert!(w <= Width::new(45));
        assert!(w >= Width::new(41));
        assert!(w >= Width::new(45));
    }

    #[test]
    fn test_ordering_with_underlying() {
        let w = Width::new(45);

        assert!(w < 46);
        assert!(w > 40);
        assert!(w <= 45);
        assert!(w >= 45);
    }

    #[test]
    fn test_sort_and_collections() {
        let mut numbers: Vec<Width> = [1, 56, 90, 56, 2, 78, 5]
            .into_iter()
            .map(Width::new)
            .collect();
        numbers.sort();
        assert_eq!(
            numbers.iter().map(|w| w.get()).collect::<Vec<_>>(),
            vec![1, 2, 5, 56, 56, 78, 90]
        );

        let unique: BTreeSet<Width> = numbers.iter().copied().collect();
        assert_eq!(unique.len(), 6);

        let hashed: HashSet<Width> = numbers.into_iter().collect();
        assert!(hashed.contains(&Width::new(78)));
    }

    #[test]
    fn test_string_comparison() {
        let jean = Name::new("Jean".to_string());
        let jeff = Name::new("Jeff".to_string());

        assert!(jean < jeff);
        assert!(jean == "Jean".to_string());
        assert_eq!(jean.cmp(&jean.clone()), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_nan_is_unordered() {
        crate::strong_type!(Ratio: f64, RatioTag);
        let nan = Ratio::new(f64::NAN);

        assert!(nan != nan);
        assert_eq!(nan.partial_cmp(&Ratio::new(1.0)), None);
        assert_eq!(nan.partial_cmp(&1.0), None);
    }
}
