//! Abstract fact-store trait.
//!
//! The store is read-only once constructed. Every method is a bounded
//! in-memory lookup, so implementations must be safe to share across
//! threads without locking.

use tracing::trace;

use crate::entity::{
    Attribute, EntityRef, ErrorType, ErrorTypeId, Operation, OperationId, OperationKind, Rule,
    RuleId,
};
use crate::error::NotFound;

/// Read-only access to the knowledge base.
pub trait FactStore: Send + Sync {
    /// Get the operation of a given kind.
    fn operation_of_kind(&self, kind: OperationKind) -> Result<OperationId, NotFound>;

    /// Get an operation record by handle.
    fn operation(&self, id: OperationId) -> Option<&Operation>;

    /// Get a rule record by handle.
    fn rule(&self, id: RuleId) -> Option<&Rule>;

    /// Get an error-type record by handle.
    fn error_type(&self, id: ErrorTypeId) -> Option<&ErrorType>;

    /// The rule associated with an operation.
    fn rule_of(&self, op: OperationId) -> Result<RuleId, NotFound>;

    /// All error types associated with an operation. Unknown handles
    /// yield an empty slice. Callers must not rely on the order.
    fn errors_of(&self, op: OperationId) -> &[ErrorTypeId];

    /// The literal value of `attribute` on `entity`, or `default` when
    /// the entity does not carry it. Never fails.
    fn attribute<'a>(&'a self, entity: EntityRef, attribute: Attribute, default: &'a str) -> &'a str;

    /// Map an operator symbol (`+ - * /`) to its operation.
    ///
    /// The symbol must match exactly; callers normalize user input first.
    /// Anything else is [`NotFound::Symbol`].
    fn operation_by_symbol(&self, symbol: &str) -> Result<OperationId, NotFound> {
        let Some(kind) = OperationKind::from_symbol(symbol) else {
            trace!(symbol, "unrecognized operator symbol");
            return Err(NotFound::Symbol {
                symbol: symbol.to_string(),
            });
        };
        self.operation_of_kind(kind)
    }
}
