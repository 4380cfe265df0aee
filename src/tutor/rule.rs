//! Rule explanations.

use crate::entity::{Attribute, EntityRef, OperationId};
use crate::storage::FactStore;

/// Returned when an operation has no rule.
pub const NO_RULE_MESSAGE: &str = "No rule found for this operation.";

/// Formats the teaching rule for `op`.
///
/// The text holds, one per line: the rule name, the rule text, a blank
/// line, `Example:`, the example problem, and the example steps. Missing
/// attributes render as empty lines.
pub fn explain_rule<S: FactStore + ?Sized>(store: &S, op: OperationId) -> String {
    let Ok(rule) = store.rule_of(op) else {
        return NO_RULE_MESSAGE.to_string();
    };
    let rule = EntityRef::Rule(rule);
    let text = |attribute| store.attribute(rule, attribute, "");

    format!(
        "{}\n{}\n\nExample:\n{}\n{}",
        text(Attribute::RuleName),
        text(Attribute::RuleText),
        text(Attribute::ExampleProblem),
        text(Attribute::ExampleSteps),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, Triple};
    use crate::entity::OperationKind;
    use crate::storage::InMemoryFactStore;

    #[test]
    fn explains_addition() {
        let store = InMemoryFactStore::load().unwrap();
        let op = store.operation_by_symbol("+").unwrap();
        assert_eq!(
            explain_rule(&store, op),
            "Addition rule\n\
             Addition combines two or more quantities to make a total.\n\
             \n\
             Example:\n\
             What is 7 + 5?\n\
             Step 1: Identify 7 and 5. Step 2: Add: 7 + 5 = 12."
        );
    }

    #[test]
    fn every_builtin_operation_has_a_rule() {
        let store = InMemoryFactStore::load().unwrap();
        for kind in OperationKind::ALL {
            let op = store.operation_of_kind(kind).unwrap();
            let text = explain_rule(&store, op);
            assert_ne!(text, NO_RULE_MESSAGE);
            assert!(text.contains("\n\nExample:\n"));
        }
    }

    #[test]
    fn falls_back_without_rule() {
        let ds = Dataset::new("t").with(Triple::reference("Add", "type", "Addition"));
        let store = InMemoryFactStore::from_dataset(&ds).unwrap();
        let op = store.operation_by_symbol("+").unwrap();
        assert_eq!(explain_rule(&store, op), NO_RULE_MESSAGE);
    }

    #[test]
    fn missing_attributes_render_empty() {
        let ds = Dataset::new("t")
            .with(Triple::reference("Add", "type", "Addition"))
            .with(Triple::reference("r", "type", "ArithmeticRule"))
            .with(Triple::reference("Add", "hasRule", "r"))
            .with(Triple::literal("r", "ruleName", "Sparse rule"));
        let store = InMemoryFactStore::from_dataset(&ds).unwrap();
        let op = store.operation_by_symbol("+").unwrap();
        assert_eq!(explain_rule(&store, op), "Sparse rule\n\n\nExample:\n\n");
    }

    #[test]
    fn works_through_trait_object() {
        let store = InMemoryFactStore::load().unwrap();
        let dyn_store: &dyn FactStore = &store;
        let op = dyn_store.operation_by_symbol("/").unwrap();
        assert!(explain_rule(dyn_store, op).starts_with("Division rule\n"));
    }
}
