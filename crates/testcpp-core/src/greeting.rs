//! Greeting provider

/// The text returned to every caller.
pub const GREETING: &str = "Hello from C++";

/// Build a fresh, caller-owned copy of [`GREETING`].
///
/// Never fails and touches no shared state, so it is safe to call from
/// any number of threads at once.
pub fn greeting() -> String {
    GREETING.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_greeting_literal() {
        assert_eq!(greeting(), "Hello from C++");
        assert_eq!(greeting().as_bytes(), b"Hello from C++");
    }

    #[test]
    fn test_greeting_is_fresh_allocation() {
        let a = greeting();
        let b = greeting();
        assert_eq!(a, b);
        assert_ne!(a.as_ptr(), b.as_ptr());
        assert_ne!(a.as_ptr(), GREETING.as_ptr());
    }

    #[test]
    fn test_concurrent_callers() {
        let results: Vec<String> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..10)
                .map(|_| s.spawn(|| (0..100).map(|_| greeting()).collect::<Vec<_>>()))
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        assert_eq!(results.len(), 1000);
        assert!(results.iter().all(|s| s == GREETING));
    }

    proptest! {
        #[test]
        fn prop_copies_are_independent(calls in 1usize..64, victim in 0usize..64, junk in ".*") {
            let mut copies: Vec<String> = (0..calls).map(|_| greeting()).collect();
            let victim = victim % calls;
            copies[victim].push_str(&junk);
            copies[victim].insert(0, '!');

            for (i, copy) in copies.iter().enumerate() {
                if i != victim {
                    prop_assert_eq!(copy.as_str(), GREETING);
                }
            }
            prop_assert_eq!(greeting(), GREETING);
        }
    }
}
