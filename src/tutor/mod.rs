//! Tutoring logic over a fact store.
//!
//! The two resolvers (`explain_rule`, `hint_for`) are stateless
//! functions generic over any [`FactStore`](crate::storage::FactStore).
//! `session` combines them with operand validation and arithmetic into
//! a complete tutoring exchange.

mod hint;
mod rule;
mod session;

pub use hint::{hint_for, DIVIDE_BY_ZERO, WRONG_OPERATION};
pub use rule::{explain_rule, NO_RULE_MESSAGE};
pub use session::{
    display_number, Feedback, Tutor, TutorRequest, DIVIDE_BY_ZERO_FALLBACK,
    INVALID_NUMBERS_MESSAGE, WRONG_OPERATION_CONTEXT, WRONG_OPERATION_FALLBACK,
    WRONG_OPERATION_MESSAGE,
};
