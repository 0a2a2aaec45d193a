#[allow(non_upper_case_globals)]
pub mod op;

mod qualifier;
mod values;
pub(crate) mod variant;

pub use {
    op::{ConditionOp, IntoOperator},
    qualifier::Qualifier,
    values::ConditionValues,
};

use {
    serde::{ser::Serializer, Serialize},
    std::collections::{btree_map::Iter, BTreeMap},
};

/// The keys and value sets grouped under one operator.
pub type ConditionMap = BTreeMap<String, ConditionValues>;

/// A statement's condition block: operator, then key, then value set.
///
/// Both levels are ordered maps, so serialization is deterministic
/// regardless of insertion order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Condition {
    map: BTreeMap<ConditionOp, ConditionMap>,
}

impl Condition {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn get(&self, op: &ConditionOp) -> Option<&ConditionMap> {
        self.map.get(op)
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, ConditionOp, ConditionMap> {
        self.map.iter()
    }

    /// Merges one `(operator, key) -> values` entry.
    ///
    /// Re-adding a pair that is already present unions the new values onto
    /// the existing list in call order, skipping exact duplicates; it never
    /// creates a second entry for the pair.
    pub fn put(&mut self, op: ConditionOp, key: impl Into<String>, values: ConditionValues) {
        self.map.entry(op).or_default().entry(key.into()).or_default().merge(values);
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.map.serialize(serializer)
    }
}
