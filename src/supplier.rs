//! Producers: callables that take nothing and return a value.
//!
//! The canonical routine is [`generate`]: invoke a producer a fixed number
//! of times and materialize the results into a `Vec`. The producer used in
//! the demos is stateless, so only the invocation count is observable, but
//! `generate` takes `FnMut` so stateful producers work as well.

use std::iter;

/// The fixed greeting every producer form returns.
pub const GREETING: &str = "Olá, seja bem-vindo(a)!";

/// Named producer: always returns [`GREETING`].
pub fn greeting() -> String {
    GREETING.to_string()
}

/// Invoke `producer` exactly `count` times and collect the results in
/// invocation order. `count == 0` yields an empty vec and never calls the
/// producer.
pub fn generate<T, P>(count: usize, producer: P) -> Vec<T>
where
    P: FnMut() -> T,
{
    iter::repeat_with(producer).take(count).collect()
}

/// Print every element on its own line, in order.
pub fn print_each(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
