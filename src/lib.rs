#![warn(clippy::all)]
//! A fluent builder for AWS IAM policy statements.
//!
//! Statements accumulate actions, resource locators, and condition clauses
//! through chained calls on a per-service provider (see [services]), all of
//! which feed a shared engine: the [Statement] accumulator, the ARN
//! template resolver ([ResourceTemplate] + [Defaults]), the closed
//! condition-operator vocabulary ([condop]), and the access-level
//! classifier ([Registry]).
//!
//! Builders mutate in place and return themselves for chaining; this is
//! not copy-on-write. A statement may keep changing after it has been
//! serialized, and serializing again reflects the latest state.

pub(crate) mod access_level;
pub(crate) mod arn;
pub(crate) mod condition;
pub(crate) mod context;
pub(crate) mod error;
pub(crate) mod global_conditions;
pub(crate) mod registry;
pub(crate) mod service;
pub mod services;
pub(crate) mod statement;

#[macro_use]
pub(crate) mod serutil;

pub use {
    access_level::AccessLevel,
    arn::ResourceTemplate,
    condition::{op as condop, Condition, ConditionMap, ConditionOp, ConditionValues, IntoOperator, Qualifier},
    context::{Defaults, DefaultsBuilder, DefaultsBuilderError},
    error::MasonError,
    registry::Registry,
    service::{ActionEntry, ServiceTable},
    statement::{Effect, Statement},
};
