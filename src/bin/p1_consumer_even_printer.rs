//! Pattern 1: Actions (single-argument, no result)
//! Example: Printing the even numbers of a sequence, four equivalent ways
//!
//! Run with: cargo run --bin p1_consumer_even_printer

use colored::Colorize;
use functional_interface_patterns::consumer::{evens, for_each_even};

// An action is any callable that takes one value and returns nothing; it
// exists only for its side effect. In Rust that capability is a closure or
// function item satisfying `FnMut(i32)` -- no single-method trait object is
// needed. The four sections below print exactly the same lines (2, then 4);
// they differ only in how the action value is written at the call site.

// Form 2 uses this: a named function item with the action's signature. It
// can be passed anywhere a closure can, by name, with no wrapper.
fn print_if_even(n: i32) {
    if n % 2 == 0 {
        println!("{}", n);
    }
}

fn main() {
    // A fixed, ordered sequence. It is only read; an array is enough.
    let numbers = [1, 2, 3, 4, 5];

    // Form 1: bind the action to a name first, then pass the name. Useful
    // when the same action is applied in several places, or when a name
    // makes the call site read better.
    println!("{}", "=== Form 1: named closure value ===".bold());
    let print_even = |n: i32| {
        if n % 2 == 0 {
            println!("{}", n);
        }
    };
    numbers.iter().copied().for_each(print_even);

    // Form 2: a plain named function. Function items coerce to the same
    // `FnMut(i32)` capability as closures, so `for_each` accepts them
    // directly. This is the closest Rust gets to passing a method by name.
    println!("{}", "=== Form 2: named function item ===".bold());
    numbers.iter().copied().for_each(print_if_even);

    // Form 3: write the closure inline. The compiler knows `for_each` wants
    // a callable taking one element, so no type annotation is needed.
    println!("{}", "=== Form 3: inline closure ===".bold());
    numbers.iter().copied().for_each(|n| {
        if n % 2 == 0 {
            println!("{}", n);
        }
    });

    // Form 4: move the even-check out of the action and into a `filter`
    // stage. The action becomes an unconditional print; the pipeline keeps
    // the original order and visits each retained element once.
    println!("{}", "=== Form 4: filter, then print ===".bold());
    numbers
        .iter()
        .copied()
        .filter(|n| n % 2 == 0)
        .for_each(|n| println!("{}", n));

    // The library owns the canonical routines the forms above re-derive:
    // `for_each_even` for the action-parameter shape, `evens` for the
    // pipeline shape.
    println!("{}", "=== Library routines ===".bold());
    for_each_even(&numbers, |n| println!("{}", n));
    evens(&numbers).for_each(|n| println!("{}", n));
}
