use std::sync::Arc;
use std::thread;

use arith_tutor::tutor::DIVIDE_BY_ZERO;
use arith_tutor::{explain_rule, hint_for, FactStore, Feedback, InMemoryFactStore, Tutor};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn store_is_shareable() {
    assert_send_sync::<InMemoryFactStore>();
}

#[test]
fn many_threads_read_the_same_store() {
    let store = Arc::new(InMemoryFactStore::load().unwrap());
    let divide = store.operation_by_symbol("/").unwrap();
    let expected_rule = explain_rule(store.as_ref(), divide);
    let expected_hint = hint_for(store.as_ref(), divide, DIVIDE_BY_ZERO).to_string();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let tutor = Tutor::new(store.as_ref());
                let mut seen = Vec::new();
                for j in 0..100 {
                    let a = f64::from(i * 100 + j);
                    let feedback = tutor.tutor_raw(&a.to_string(), "0", "/");
                    let Feedback::DivideByZero { hint, rule, .. } = feedback else {
                        panic!("expected divide by zero");
                    };
                    seen.push((hint, rule));
                }
                seen
            })
        })
        .collect();

    for handle in handles {
        for (hint, rule) in handle.join().unwrap() {
            assert_eq!(hint, expected_hint);
            assert_eq!(rule, expected_rule);
        }
    }
}

#[test]
fn scoped_threads_borrow_the_store() {
    let store = InMemoryFactStore::load().unwrap();
    let tutor = Tutor::new(&store);
    thread::scope(|scope| {
        for symbol in ["+", "-", "*", "/"] {
            scope.spawn(move || {
                let feedback = tutor.tutor_raw("8", "2", symbol);
                assert!(!feedback.is_blocked(), "{symbol}");
            });
        }
    });
}
