//! Compiles a triple dataset into typed entity arenas.
//!
//! Two passes: the first assigns every typed subject a handle, the
//! second resolves relations and attributes against those handles.
//! Any inconsistency aborts the whole load.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::dataset::vocab::{self, Class, Predicate};
use crate::dataset::{validate, Dataset, Term, Triple};
use crate::entity::{
    Attribute, Attributes, EntityKind, EntityRef, ErrorType, ErrorTypeId, Operation, OperationId,
    OperationKind, Rule, RuleId,
};
use crate::error::LoadError;

/// Typed result of compiling a dataset.
#[derive(Debug, Default)]
pub(crate) struct Compiled {
    pub operations: Vec<Operation>,
    pub rules: Vec<Rule>,
    pub error_types: Vec<ErrorType>,
    pub by_kind: HashMap<OperationKind, OperationId>,
}

struct Compiler<'d> {
    out: Compiled,
    subjects: HashMap<&'d str, EntityRef>,
}

pub(crate) fn compile(dataset: &Dataset) -> Result<Compiled, LoadError> {
    validate(dataset)?;

    let mut compiler = Compiler {
        out: Compiled::default(),
        subjects: HashMap::new(),
    };

    for triple in &dataset.triples {
        if triple.predicate == vocab::TYPE {
            compiler.declare(triple)?;
        }
    }
    for triple in &dataset.triples {
        compiler.relate(triple)?;
    }
    compiler.check_error_names()?;

    Ok(compiler.out)
}

fn expect_ref<'t>(triple: &'t Triple) -> Result<&'t str, LoadError> {
    match &triple.object {
        Term::Ref(ident) => Ok(ident),
        Term::Literal(_) => Err(LoadError::ObjectKindMismatch {
            subject: triple.subject.clone(),
            predicate: triple.predicate.clone(),
            expected: "reference",
        }),
    }
}

impl<'d> Compiler<'d> {
    fn declare(&mut self, triple: &'d Triple) -> Result<(), LoadError> {
        let class_name = expect_ref(triple)?;
        let class = Class::parse(class_name).ok_or_else(|| LoadError::UnknownClass {
            subject: triple.subject.clone(),
            class: class_name.to_string(),
        })?;

        if self.subjects.contains_key(triple.subject.as_str()) {
            return Err(LoadError::ConflictingType {
                subject: triple.subject.clone(),
            });
        }

        let key = triple.subject.clone();
        let handle = match class {
            Class::Operation(kind) => {
                let id = OperationId::from_index(self.out.operations.len());
                match self.out.by_kind.entry(kind) {
                    Entry::Occupied(existing) => {
                        return Err(LoadError::DuplicateOperationKind {
                            kind,
                            first: self.out.operations[existing.get().index()].key.clone(),
                            second: key,
                        });
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(id);
                    }
                }
                self.out.operations.push(Operation {
                    key,
                    kind,
                    rule: None,
                    errors: Vec::new(),
                });
                EntityRef::Operation(id)
            }
            Class::Rule => {
                let id = RuleId::from_index(self.out.rules.len());
                self.out.rules.push(Rule {
                    key,
                    attributes: Attributes::new(),
                });
                EntityRef::Rule(id)
            }
            Class::ErrorType => {
                let id = ErrorTypeId::from_index(self.out.error_types.len());
                self.out.error_types.push(ErrorType {
                    key,
                    attributes: Attributes::new(),
                });
                EntityRef::ErrorType(id)
            }
        };
        self.subjects.insert(triple.subject.as_str(), handle);
        Ok(())
    }

    fn relate(&mut self, triple: &Triple) -> Result<(), LoadError> {
        let predicate =
            Predicate::parse(&triple.predicate).ok_or_else(|| LoadError::UnknownPredicate {
                predicate: triple.predicate.clone(),
            })?;
        let subject = self
            .subjects
            .get(triple.subject.as_str())
            .copied()
            .ok_or_else(|| LoadError::Untyped {
                subject: triple.subject.clone(),
            })?;

        match predicate {
            Predicate::Type => Ok(()),
            Predicate::HasRule => {
                let op = operation_subject(subject, triple)?;
                let EntityRef::Rule(rule) = self.target(triple)? else {
                    return Err(wrong_target(triple, EntityKind::Rule));
                };
                let slot = &mut self.out.operations[op.index()].rule;
                if slot.is_some() {
                    return Err(duplicate(triple));
                }
                *slot = Some(rule);
                Ok(())
            }
            Predicate::HasCommonError => {
                let op = operation_subject(subject, triple)?;
                let EntityRef::ErrorType(err) = self.target(triple)? else {
                    return Err(wrong_target(triple, EntityKind::ErrorType));
                };
                let errors = &mut self.out.operations[op.index()].errors;
                if !errors.contains(&err) {
                    errors.push(err);
                }
                Ok(())
            }
            Predicate::Attribute(attribute) => self.set_attribute(subject, attribute, triple),
        }
    }

    fn target(&self, triple: &Triple) -> Result<EntityRef, LoadError> {
        let object = expect_ref(triple)?;
        self.subjects
            .get(object)
            .copied()
            .ok_or_else(|| LoadError::DanglingReference {
                subject: triple.subject.clone(),
                predicate: triple.predicate.clone(),
                object: object.to_string(),
            })
    }

    fn set_attribute(
        &mut self,
        subject: EntityRef,
        attribute: Attribute,
        triple: &Triple,
    ) -> Result<(), LoadError> {
        let Term::Literal(value) = &triple.object else {
            return Err(LoadError::ObjectKindMismatch {
                subject: triple.subject.clone(),
                predicate: triple.predicate.clone(),
                expected: "literal",
            });
        };
        let attributes = match subject {
            EntityRef::Rule(id) if attribute.domain() == EntityKind::Rule => {
                &mut self.out.rules[id.index()].attributes
            }
            EntityRef::ErrorType(id) if attribute.domain() == EntityKind::ErrorType => {
                &mut self.out.error_types[id.index()].attributes
            }
            _ => return Err(inapplicable(triple)),
        };
        if attributes.insert(attribute, value.clone()).is_some() {
            return Err(duplicate(triple));
        }
        Ok(())
    }

    fn check_error_names(&self) -> Result<(), LoadError> {
        let mut seen = HashSet::new();
        for err in &self.out.error_types {
            if let Some(name) = err.name() {
                if !seen.insert(name) {
                    return Err(LoadError::DuplicateErrorName {
                        name: name.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn operation_subject(subject: EntityRef, triple: &Triple) -> Result<OperationId, LoadError> {
    match subject {
        EntityRef::Operation(id) => Ok(id),
        _ => Err(inapplicable(triple)),
    }
}

fn inapplicable(triple: &Triple) -> LoadError {
    LoadError::InapplicablePredicate {
        subject: triple.subject.clone(),
        predicate: triple.predicate.clone(),
    }
}

fn wrong_target(triple: &Triple, expected: EntityKind) -> LoadError {
    LoadError::WrongTargetKind {
        subject: triple.subject.clone(),
        predicate: triple.predicate.clone(),
        object: triple.object.as_ref_ident().unwrap_or_default().to_string(),
        expected: expected.as_str(),
    }
}

fn duplicate(triple: &Triple) -> LoadError {
    LoadError::DuplicateValue {
        subject: triple.subject.clone(),
        predicate: triple.predicate.clone(),
    }
}
