//! Error hints.

use crate::entity::{Attribute, EntityRef, OperationId};
use crate::storage::FactStore;

/// Error name for a zero divisor.
pub const DIVIDE_BY_ZERO: &str = "DivideByZero";

/// Error name for choosing the wrong operation.
pub const WRONG_OPERATION: &str = "WrongOperation";

/// Hint text of the error named `error_name` among the errors of `op`.
///
/// Returns an empty string when the operation has no such error; callers
/// supply their own fallback.
pub fn hint_for<'a, S: FactStore + ?Sized>(
    store: &'a S,
    op: OperationId,
    error_name: &str,
) -> &'a str {
    store
        .errors_of(op)
        .iter()
        .map(|&id| EntityRef::ErrorType(id))
        .find(|&err| store.attribute(err, Attribute::ErrorName, "") == error_name)
        .map_or("", |err| store.attribute(err, Attribute::ErrorHint, ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, Triple};
    use crate::entity::OperationKind;
    use crate::storage::InMemoryFactStore;

    const DIVIDE_BY_ZERO_HINT: &str = "Division by zero is undefined. The divisor must be non-zero.";

    #[test]
    fn division_has_divide_by_zero_hint() {
        let store = InMemoryFactStore::load().unwrap();
        let op = store.operation_by_symbol("/").unwrap();
        assert_eq!(hint_for(&store, op, DIVIDE_BY_ZERO), DIVIDE_BY_ZERO_HINT);
    }

    #[test]
    fn other_operations_lack_divide_by_zero() {
        let store = InMemoryFactStore::load().unwrap();
        for symbol in ["+", "-", "*"] {
            let op = store.operation_by_symbol(symbol).unwrap();
            assert_eq!(hint_for(&store, op, DIVIDE_BY_ZERO), "", "{symbol}");
        }
    }

    #[test]
    fn wrong_operation_hint_is_shared() {
        let store = InMemoryFactStore::load().unwrap();
        let hints: Vec<&str> = OperationKind::ALL
            .into_iter()
            .map(|k| hint_for(&store, store.operation_of_kind(k).unwrap(), WRONG_OPERATION))
            .collect();
        assert!(hints[0].starts_with("Use keywords: total/altogether → add;"));
        assert!(hints.iter().all(|h| *h == hints[0]));
    }

    #[test]
    fn unknown_error_name_is_empty() {
        let store = InMemoryFactStore::load().unwrap();
        let op = store.operation_by_symbol("/").unwrap();
        assert_eq!(hint_for(&store, op, "Overflow"), "");
        assert_eq!(hint_for(&store, op, "dividebyzero"), "");
    }

    #[test]
    fn operation_without_errors_is_empty() {
        let ds = Dataset::new("t").with(Triple::reference("Add", "type", "Addition"));
        let store = InMemoryFactStore::from_dataset(&ds).unwrap();
        let op = store.operation_by_symbol("+").unwrap();
        assert_eq!(hint_for(&store, op, WRONG_OPERATION), "");
    }

    #[test]
    fn repeated_calls_agree() {
        let store = InMemoryFactStore::load().unwrap();
        let op = store.operation_by_symbol("/").unwrap();
        let first = hint_for(&store, op, DIVIDE_BY_ZERO).to_string();
        for _ in 0..3 {
            assert_eq!(hint_for(&store, op, DIVIDE_BY_ZERO), first);
        }
    }
}
