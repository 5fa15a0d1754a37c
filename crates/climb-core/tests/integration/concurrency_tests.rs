//! Integration tests for independent parses on separate threads

use climb_core::evaluate;
use std::thread;

#[test]
fn test_parallel_parses_are_independent() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let source = format!("{} * ( 1 + 1 ) ^ 2", i);
                (0..200)
                    .map(|_| evaluate(&source).map(|e| e.value))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let results = handle.join().unwrap();
        for result in results {
            assert_eq!(result, Ok(i as f64 * 4.0));
        }
    }
}

#[test]
fn test_shared_tree_evaluates_across_threads() {
    use std::sync::Arc;

    let expr = Arc::new(climb_core::parse("2 ^ 3 ^ 2 - 12").unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let expr = Arc::clone(&expr);
            thread::spawn(move || climb_core::value_of(&expr))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(500.0));
    }
}
