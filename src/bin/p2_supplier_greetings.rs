//! Pattern 2: Producers (no argument, one result)
//! Example: Generating bounded sequences of a fixed greeting
//!
//! Run with: cargo run --bin p2_supplier_greetings

use colored::Colorize;
use functional_interface_patterns::supplier::{generate, greeting, print_each, GREETING};

// A producer is any callable that takes nothing and returns a value; it is
// used to manufacture values on demand. Here the producer is stateless and
// always returns the same string, so the only observable property of a
// generated sequence is its length. `generate` invokes the producer exactly
// `count` times via `repeat_with(...).take(count).collect()`.

// One of the two printing styles below: a named function passed directly
// to `for_each`, instead of wrapping the print in a closure.
fn print_line(line: &String) {
    println!("{}", line);
}

fn main() {
    // Three producer encodings, one per generated sequence. All three
    // return the identical string on every invocation.
    println!("{}", "=== Generating 5 + 2 + 3 greetings ===".bold());

    // Named function item (see `supplier::greeting`), passed by name.
    let five = generate(5, greeting);

    // Named closure value: bound first, passed second.
    let greet = || GREETING.to_string();
    let two = generate(2, greet);

    // Inline closure, written at the call site.
    let three = generate(3, || GREETING.to_string());

    println!("lengths: {} {} {}", five.len(), two.len(), three.len());

    // Printing style 1: an explicit per-element action closure. The closure
    // receives each element and decides what to do with it.
    println!("{}", "=== Printing with an explicit action ===".bold());
    five.iter().for_each(|s| println!("{}", s));
    two.iter().for_each(|s| println!("{}", s));
    three.iter().for_each(|s| println!("{}", s));

    // Printing style 2: pass a named print function straight through. Same
    // lines, same order; only the call-site spelling changes.
    println!("{}", "=== Printing by passing the function ===".bold());
    five.iter().for_each(print_line);
    two.iter().for_each(print_line);
    three.iter().for_each(print_line);

    // The library's own wrapper does the same thing for a slice.
    println!("{}", "=== Library routine ===".bold());
    print_each(&five);
    print_each(&two);
    print_each(&three);
}
