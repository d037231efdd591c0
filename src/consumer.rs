//! Actions: callables that take one value and return nothing.
//!
//! The canonical routine here is [`for_each_even`]: it owns the
//! "filter evens, visit in order" logic once, and accepts any `FnMut(i32)`
//! as the visit action. The demo binary shows four call-site encodings of
//! the same behavior; none of them change what this module computes.

/// Apply `action` to every even element of `numbers`, preserving order.
///
/// This is the core of the pattern: the even-check lives here, the effect
/// lives in the caller-supplied action.
pub fn for_each_even<F>(numbers: &[i32], mut action: F)
where
    F: FnMut(i32),
{
    for &n in numbers {
        if n % 2 == 0 {
            action(n);
        }
    }
}

/// The pipeline encoding of the same contract: a lazy iterator over the
/// even elements, in their original order.
pub fn evens(numbers: &[i32]) -> impl Iterator<Item = i32> + '_ {
    numbers.iter().copied().filter(|n| n % 2 == 0)
}

/// Print one line per even element of `numbers`, in order.
pub fn print_evens(numbers: &[i32]) {
    for_each_even(numbers, |n| println!("{}", n));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visits_only_evens_in_order() {
        let mut seen = Vec::new();
        for_each_even(&[1, 2, 3, 4, 5], |n| seen.push(n));
        assert_eq!(seen, vec![2, 4]);
    }

    #[test]
    fn test_pipeline_form_matches_action_form() {
        let numbers = [1, 2, 3, 4, 5];

        let mut via_action = Vec::new();
        for_each_even(&numbers, |n| via_action.push(n));

        let via_pipeline: Vec<i32> = evens(&numbers).collect();

        assert_eq!(via_action, via_pipeline);
    }

    #[test]
    fn test_named_function_and_closure_are_interchangeable() {
        fn record(n: i32) -> i32 {
            n
        }

        let numbers = [10, 11, 12];

        let mut via_named = Vec::new();
        for_each_even(&numbers, |n| via_named.push(record(n)));

        let mut via_closure = Vec::new();
        for_each_even(&numbers, |n| via_closure.push(n));

        assert_eq!(via_named, via_closure);
        assert_eq!(via_named, vec![10, 12]);
    }

    #[test]
    fn test_no_evens_means_no_calls() {
        let mut calls = 0;
        for_each_even(&[1, 3, 5, 7], |_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_empty_input() {
        let mut calls = 0;
        for_each_even(&[], |_| calls += 1);
        assert_eq!(calls, 0);
        assert_eq!(evens(&[]).count(), 0);
    }

    #[test]
    fn test_negative_and_zero_are_even_too() {
        let collected: Vec<i32> = evens(&[-2, -1, 0, 1, 2]).collect();
        assert_eq!(collected, vec![-2, 0, 2]);
    }
}
