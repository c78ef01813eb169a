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

use strongdef_core::{ParseStrongError, strong_type};

strong_type!(
    /// A count that can never go negative.
    NaturalInt: u32, NaturalIntTag
);

strong_type!(
    /// A person's name.
    Name: String, NameTag
);

strong_type!(Meter: i32, MeterTag);
strong_type!(Yard: i32, YardTag);

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn yards_to_meters(yards: Yard) -> Meter {
    // 1 yd = 0.9144 m, rounded to the nearest whole meter (halves round up).
    Meter::new((yards.get() * 9144 + 5000).div_euclid(10000))
}

fn main() -> Result<(), ParseStrongError<std::num::ParseIntError>> {
    let mut numbers: Vec<NaturalInt> = [1, 56, 90, 56, 2, 78, 5]
        .into_iter()
        .map(NaturalInt::new)
        .collect();
    println!("{}", join(&numbers));
    numbers.sort();
    println!("{}", join(&numbers));

    let mut person = Name::new("Jean".to_string());
    let other = Name::new("Jeff".to_string());
    person.value_mut().push_str("-Paul");
    println!("{}", person);
    println!("{}", person < other);
    println!("Using the value directly: {}", person.value().to_uppercase());

    let mut track: Meter = "400".parse()?;
    track += yards_to_meters(Yard::new(110));
    track.increment();
    println!("{:?}", track);

    match "four hundred".parse::<Meter>() {
        Ok(m) => println!("{:?}", m),
        Err(e) => println!("{}", e),
    }

    Ok(())
}
