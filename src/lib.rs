//! # Functional Interface Patterns
//!
//! This crate contains examples for two standard functional-interface shapes
//! and how they plug into iterator pipelines.
//!
//! ## Patterns Covered
//!
//! 1. **Actions (single-argument, no result)**
//!    - A callable that takes one value and returns nothing, used purely for
//!      its side effect (here: printing even numbers)
//!    - Four equivalent call-site encodings: named closure value, named
//!      function item, inline closure, filter-then-print pipeline
//!
//! 2. **Producers (no argument, one result)**
//!    - A callable that takes nothing and returns a value, used to
//!      manufacture repeated values (here: a fixed greeting)
//!    - Bounded generation with `repeat_with` + `take` + `collect`
//!    - Three equivalent producer encodings, and two equivalent ways to
//!      print the generated sequences
//!
//! The point of the repeated forms is that they are the *same* algorithm:
//! one canonical routine takes a callable-typed parameter, and call sites
//! pass named functions, inline closures, or pipeline stages interchangeably.
//!
//! ## Running Examples
//!
//! ```bash
//! # Pattern 1: Actions
//! cargo run --bin p1_consumer_even_printer
//!
//! # Pattern 2: Producers
//! cargo run --bin p2_supplier_greetings
//! ```

pub mod consumer;
pub mod supplier;

pub use consumer::{evens, for_each_even, print_evens};
pub use supplier::{generate, greeting, print_each, GREETING};
