use {
    super::{qualifier::Qualifier, variant::Variant},
    crate::MasonError,
    serde::{ser::Serializer, Serialize},
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// ARN operator names, indexed by `ArnCmp as usize | Variant as usize`.
const ARN_DISPLAY_NAMES: [&str; 8] = [
    "ArnEquals",
    "ArnEqualsIfExists",
    "ArnNotEquals",
    "ArnNotEqualsIfExists",
    "ArnLike",
    "ArnLikeIfExists",
    "ArnNotLike",
    "ArnNotLikeIfExists",
];

const BINARY_DISPLAY_NAMES: [&str; 2] = ["BinaryEquals", "BinaryEqualsIfExists"];

const BOOL_DISPLAY_NAMES: [&str; 2] = ["Bool", "BoolIfExists"];

/// Date operator names. The negation of `LessThan` is `GreaterThanEquals`
/// and vice versa, so the table folds eight nominal comparisons into three.
const DATE_DISPLAY_NAMES: [&str; 12] = [
    "DateEquals",
    "DateEqualsIfExists",
    "DateNotEquals",
    "DateNotEqualsIfExists",
    "DateLessThan",
    "DateLessThanIfExists",
    "DateGreaterThanEquals",
    "DateGreaterThanEqualsIfExists",
    "DateLessThanEquals",
    "DateLessThanEqualsIfExists",
    "DateGreaterThan",
    "DateGreaterThanIfExists",
];

const IP_ADDRESS_DISPLAY_NAMES: [&str; 4] =
    ["IpAddress", "IpAddressIfExists", "NotIpAddress", "NotIpAddressIfExists"];

const NULL_DISPLAY_NAME: &str = "Null";

const NUMERIC_DISPLAY_NAMES: [&str; 12] = [
    "NumericEquals",
    "NumericEqualsIfExists",
    "NumericNotEquals",
    "NumericNotEqualsIfExists",
    "NumericLessThan",
    "NumericLessThanIfExists",
    "NumericGreaterThanEquals",
    "NumericGreaterThanEqualsIfExists",
    "NumericLessThanEquals",
    "NumericLessThanEqualsIfExists",
    "NumericGreaterThan",
    "NumericGreaterThanIfExists",
];

const STRING_DISPLAY_NAMES: [&str; 12] = [
    "StringEquals",
    "StringEqualsIfExists",
    "StringNotEquals",
    "StringNotEqualsIfExists",
    "StringEqualsIgnoreCase",
    "StringEqualsIgnoreCaseIfExists",
    "StringNotEqualsIgnoreCase",
    "StringNotEqualsIgnoreCaseIfExists",
    "StringLike",
    "StringLikeIfExists",
    "StringNotLike",
    "StringNotLikeIfExists",
];

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub(crate) enum ArnCmp {
    Equals = 0,
    Like = 4,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub(crate) enum DateCmp {
    Equals = 0,
    LessThan = 4,
    LessThanEquals = 8,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub(crate) enum NumericCmp {
    Equals = 0,
    LessThan = 4,
    LessThanEquals = 8,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub(crate) enum StringCmp {
    Equals = 0,
    EqualsIgnoreCase = 4,
    Like = 8,
}

/// The base operator families.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) enum BaseOp {
    /// Operators for ARNs.
    Arn(ArnCmp, Variant),

    /// Operators for base64-encoded binary values. Variant here is only
    /// allowed to be [Variant::None] or [Variant::IfExists].
    Binary(Variant),

    /// Operators on boolean values. Variant here is only allowed to be
    /// [Variant::None] or [Variant::IfExists].
    Bool(Variant),

    /// Operators for date/time values.
    Date(DateCmp, Variant),

    /// Operators on IP addresses and networks.
    IpAddress(Variant),

    /// Operator on the presence/absence of a value.
    Null,

    /// Operators on numeric values.
    Numeric(NumericCmp, Variant),

    /// Operators on string values.
    String(StringCmp, Variant),
}

impl BaseOp {
    fn display_name(self) -> &'static str {
        match self {
            Self::Arn(cmp, variant) => ARN_DISPLAY_NAMES[cmp as usize | variant.as_usize()],
            Self::Binary(variant) => BINARY_DISPLAY_NAMES[variant.as_usize()],
            Self::Bool(variant) => BOOL_DISPLAY_NAMES[variant.as_usize()],
            Self::Date(cmp, variant) => DATE_DISPLAY_NAMES[cmp as usize | variant.as_usize()],
            Self::IpAddress(variant) => IP_ADDRESS_DISPLAY_NAMES[variant.as_usize()],
            Self::Null => NULL_DISPLAY_NAME,
            Self::Numeric(cmp, variant) => NUMERIC_DISPLAY_NAMES[cmp as usize | variant.as_usize()],
            Self::String(cmp, variant) => STRING_DISPLAY_NAMES[cmp as usize | variant.as_usize()],
        }
    }

    fn with_if_exists(self) -> Self {
        match self {
            Self::Arn(cmp, variant) => Self::Arn(cmp, variant.with_if_exists()),
            Self::Binary(variant) => Self::Binary(variant.with_if_exists()),
            Self::Bool(variant) => Self::Bool(variant.with_if_exists()),
            Self::Date(cmp, variant) => Self::Date(cmp, variant.with_if_exists()),
            Self::IpAddress(variant) => Self::IpAddress(variant.with_if_exists()),
            // Null has no IfExists form.
            Self::Null => Self::Null,
            Self::Numeric(cmp, variant) => Self::Numeric(cmp, variant.with_if_exists()),
            Self::String(cmp, variant) => Self::String(cmp, variant.with_if_exists()),
        }
    }
}

/// An operator for a condition clause: a base comparison, optionally
/// negated, with the `IfExists` suffix, and with a `ForAllValues:` /
/// `ForAnyValue:` set qualifier.
///
/// The operator vocabulary is closed. Values are obtained from the named
/// constants in this module (re-exported as `condop`) or parsed from their
/// display names via [FromStr]; an unknown name fails with
/// [MasonError::UnknownOperator].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ConditionOp {
    base: BaseOp,
    qualifier: Qualifier,
}

impl ConditionOp {
    pub(crate) const fn new(base: BaseOp) -> Self {
        Self {
            base,
            qualifier: Qualifier::None,
        }
    }

    /// This operator with the `ForAllValues:` set qualifier.
    pub fn for_all_values(self) -> Self {
        Self {
            qualifier: Qualifier::ForAllValues,
            ..self
        }
    }

    /// This operator with the `ForAnyValue:` set qualifier.
    pub fn for_any_value(self) -> Self {
        Self {
            qualifier: Qualifier::ForAnyValue,
            ..self
        }
    }

    /// This operator with the `IfExists` suffix. A no-op on `Null`, which
    /// has no `IfExists` form.
    pub fn if_exists(self) -> Self {
        Self {
            base: self.base.with_if_exists(),
            ..self
        }
    }
}

/// The `ArnEquals` operator.
pub const ArnEquals: ConditionOp = ConditionOp::new(BaseOp::Arn(ArnCmp::Equals, Variant::None));

/// The `ArnEqualsIfExists` operator.
pub const ArnEqualsIfExists: ConditionOp = ConditionOp::new(BaseOp::Arn(ArnCmp::Equals, Variant::IfExists));

/// The `ArnNotEquals` operator.
pub const ArnNotEquals: ConditionOp = ConditionOp::new(BaseOp::Arn(ArnCmp::Equals, Variant::Negated));

/// The `ArnNotEqualsIfExists` operator.
pub const ArnNotEqualsIfExists: ConditionOp = ConditionOp::new(BaseOp::Arn(ArnCmp::Equals, Variant::IfExistsNegated));

/// The `ArnLike` operator.
pub const ArnLike: ConditionOp = ConditionOp::new(BaseOp::Arn(ArnCmp::Like, Variant::None));

/// The `ArnLikeIfExists` operator.
pub const ArnLikeIfExists: ConditionOp = ConditionOp::new(BaseOp::Arn(ArnCmp::Like, Variant::IfExists));

/// The `ArnNotLike` operator.
pub const ArnNotLike: ConditionOp = ConditionOp::new(BaseOp::Arn(ArnCmp::Like, Variant::Negated));

/// The `ArnNotLikeIfExists` operator.
pub const ArnNotLikeIfExists: ConditionOp = ConditionOp::new(BaseOp::Arn(ArnCmp::Like, Variant::IfExistsNegated));

/// The `BinaryEquals` operator.
pub const BinaryEquals: ConditionOp = ConditionOp::new(BaseOp::Binary(Variant::None));

/// The `BinaryEqualsIfExists` operator.
pub const BinaryEqualsIfExists: ConditionOp = ConditionOp::new(BaseOp::Binary(Variant::IfExists));

/// The `Bool` operator.
pub const Bool: ConditionOp = ConditionOp::new(BaseOp::Bool(Variant::None));

/// The `BoolIfExists` operator.
pub const BoolIfExists: ConditionOp = ConditionOp::new(BaseOp::Bool(Variant::IfExists));

/// The `DateEquals` operator.
pub const DateEquals: ConditionOp = ConditionOp::new(BaseOp::Date(DateCmp::Equals, Variant::None));

/// The `DateEqualsIfExists` operator.
pub const DateEqualsIfExists: ConditionOp = ConditionOp::new(BaseOp::Date(DateCmp::Equals, Variant::IfExists));

/// The `DateNotEquals` operator.
pub const DateNotEquals: ConditionOp = ConditionOp::new(BaseOp::Date(DateCmp::Equals, Variant::Negated));

/// The `DateNotEqualsIfExists` operator.
pub const DateNotEqualsIfExists: ConditionOp = ConditionOp::new(BaseOp::Date(DateCmp::Equals, Variant::IfExistsNegated));

/// The `DateLessThan` operator.
pub const DateLessThan: ConditionOp = ConditionOp::new(BaseOp::Date(DateCmp::LessThan, Variant::None));

/// The `DateLessThanIfExists` operator.
pub const DateLessThanIfExists: ConditionOp = ConditionOp::new(BaseOp::Date(DateCmp::LessThan, Variant::IfExists));

/// The `DateGreaterThanEquals` operator.
pub const DateGreaterThanEquals: ConditionOp = ConditionOp::new(BaseOp::Date(DateCmp::LessThan, Variant::Negated));

/// The `DateGreaterThanEqualsIfExists` operator.
pub const DateGreaterThanEqualsIfExists: ConditionOp =
    ConditionOp::new(BaseOp::Date(DateCmp::LessThan, Variant::IfExistsNegated));

/// The `DateLessThanEquals` operator.
pub const DateLessThanEquals: ConditionOp = ConditionOp::new(BaseOp::Date(DateCmp::LessThanEquals, Variant::None));

/// The `DateLessThanEqualsIfExists` operator.
pub const DateLessThanEqualsIfExists: ConditionOp =
    ConditionOp::new(BaseOp::Date(DateCmp::LessThanEquals, Variant::IfExists));

/// The `DateGreaterThan` operator.
pub const DateGreaterThan: ConditionOp = ConditionOp::new(BaseOp::Date(DateCmp::LessThanEquals, Variant::Negated));

/// The `DateGreaterThanIfExists` operator.
pub const DateGreaterThanIfExists: ConditionOp =
    ConditionOp::new(BaseOp::Date(DateCmp::LessThanEquals, Variant::IfExistsNegated));

/// The `IpAddress` operator.
pub const IpAddress: ConditionOp = ConditionOp::new(BaseOp::IpAddress(Variant::None));

/// The `IpAddressIfExists` operator.
pub const IpAddressIfExists: ConditionOp = ConditionOp::new(BaseOp::IpAddress(Variant::IfExists));

/// The `NotIpAddress` operator.
pub const NotIpAddress: ConditionOp = ConditionOp::new(BaseOp::IpAddress(Variant::Negated));

/// The `NotIpAddressIfExists` operator.
pub const NotIpAddressIfExists: ConditionOp = ConditionOp::new(BaseOp::IpAddress(Variant::IfExistsNegated));

/// The `Null` operator.
pub const Null: ConditionOp = ConditionOp::new(BaseOp::Null);

/// The `NumericEquals` operator.
pub const NumericEquals: ConditionOp = ConditionOp::new(BaseOp::Numeric(NumericCmp::Equals, Variant::None));

/// The `NumericEqualsIfExists` operator.
pub const NumericEqualsIfExists: ConditionOp = ConditionOp::new(BaseOp::Numeric(NumericCmp::Equals, Variant::IfExists));

/// The `NumericNotEquals` operator.
pub const NumericNotEquals: ConditionOp = ConditionOp::new(BaseOp::Numeric(NumericCmp::Equals, Variant::Negated));

/// The `NumericNotEqualsIfExists` operator.
pub const NumericNotEqualsIfExists: ConditionOp =
    ConditionOp::new(BaseOp::Numeric(NumericCmp::Equals, Variant::IfExistsNegated));

/// The `NumericLessThan` operator.
pub const NumericLessThan: ConditionOp = ConditionOp::new(BaseOp::Numeric(NumericCmp::LessThan, Variant::None));

/// The `NumericLessThanIfExists` operator.
pub const NumericLessThanIfExists: ConditionOp =
    ConditionOp::new(BaseOp::Numeric(NumericCmp::LessThan, Variant::IfExists));

/// The `NumericGreaterThanEquals` operator.
pub const NumericGreaterThanEquals: ConditionOp =
    ConditionOp::new(BaseOp::Numeric(NumericCmp::LessThan, Variant::Negated));

/// The `NumericGreaterThanEqualsIfExists` operator.
pub const NumericGreaterThanEqualsIfExists: ConditionOp =
    ConditionOp::new(BaseOp::Numeric(NumericCmp::LessThan, Variant::IfExistsNegated));

/// The `NumericLessThanEquals` operator.
pub const NumericLessThanEquals: ConditionOp =
    ConditionOp::new(BaseOp::Numeric(NumericCmp::LessThanEquals, Variant::None));

/// The `NumericLessThanEqualsIfExists` operator.
pub const NumericLessThanEqualsIfExists: ConditionOp =
    ConditionOp::new(BaseOp::Numeric(NumericCmp::LessThanEquals, Variant::IfExists));

/// The `NumericGreaterThan` operator.
pub const NumericGreaterThan: ConditionOp =
    ConditionOp::new(BaseOp::Numeric(NumericCmp::LessThanEquals, Variant::Negated));

/// The `NumericGreaterThanIfExists` operator.
pub const NumericGreaterThanIfExists: ConditionOp =
    ConditionOp::new(BaseOp::Numeric(NumericCmp::LessThanEquals, Variant::IfExistsNegated));

/// The `StringEquals` operator.
pub const StringEquals: ConditionOp = ConditionOp::new(BaseOp::String(StringCmp::Equals, Variant::None));

/// The `StringEqualsIfExists` operator.
pub const StringEqualsIfExists: ConditionOp = ConditionOp::new(BaseOp::String(StringCmp::Equals, Variant::IfExists));

/// The `StringNotEquals` operator.
pub const StringNotEquals: ConditionOp = ConditionOp::new(BaseOp::String(StringCmp::Equals, Variant::Negated));

/// The `StringNotEqualsIfExists` operator.
pub const StringNotEqualsIfExists: ConditionOp =
    ConditionOp::new(BaseOp::String(StringCmp::Equals, Variant::IfExistsNegated));

/// The `StringEqualsIgnoreCase` operator.
pub const StringEqualsIgnoreCase: ConditionOp =
    ConditionOp::new(BaseOp::String(StringCmp::EqualsIgnoreCase, Variant::None));

/// The `StringEqualsIgnoreCaseIfExists` operator.
pub const StringEqualsIgnoreCaseIfExists: ConditionOp =
    ConditionOp::new(BaseOp::String(StringCmp::EqualsIgnoreCase, Variant::IfExists));

/// The `StringNotEqualsIgnoreCase` operator.
pub const StringNotEqualsIgnoreCase: ConditionOp =
    ConditionOp::new(BaseOp::String(StringCmp::EqualsIgnoreCase, Variant::Negated));

/// The `StringNotEqualsIgnoreCaseIfExists` operator.
pub const StringNotEqualsIgnoreCaseIfExists: ConditionOp =
    ConditionOp::new(BaseOp::String(StringCmp::EqualsIgnoreCase, Variant::IfExistsNegated));

/// The `StringLike` operator.
pub const StringLike: ConditionOp = ConditionOp::new(BaseOp::String(StringCmp::Like, Variant::None));

/// The `StringLikeIfExists` operator.
pub const StringLikeIfExists: ConditionOp = ConditionOp::new(BaseOp::String(StringCmp::Like, Variant::IfExists));

/// The `StringNotLike` operator.
pub const StringNotLike: ConditionOp = ConditionOp::new(BaseOp::String(StringCmp::Like, Variant::Negated));

/// The `StringNotLikeIfExists` operator.
pub const StringNotLikeIfExists: ConditionOp =
    ConditionOp::new(BaseOp::String(StringCmp::Like, Variant::IfExistsNegated));

impl Display for ConditionOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.qualifier.prefix())?;
        f.write_str(self.base.display_name())
    }
}

impl PartialEq<str> for ConditionOp {
    fn eq(&self, other: &str) -> bool {
        self.to_string().as_str() == other
    }
}

impl Serialize for ConditionOp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl FromStr for ConditionOp {
    type Err = MasonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (qualifier, base) = if let Some(rest) = s.strip_prefix("ForAllValues:") {
            (Qualifier::ForAllValues, rest)
        } else if let Some(rest) = s.strip_prefix("ForAnyValue:") {
            (Qualifier::ForAnyValue, rest)
        } else {
            (Qualifier::None, s)
        };

        let op = match base {
            "ArnEquals" => ArnEquals,
            "ArnEqualsIfExists" => ArnEqualsIfExists,
            "ArnNotEquals" => ArnNotEquals,
            "ArnNotEqualsIfExists" => ArnNotEqualsIfExists,
            "ArnLike" => ArnLike,
            "ArnLikeIfExists" => ArnLikeIfExists,
            "ArnNotLike" => ArnNotLike,
            "ArnNotLikeIfExists" => ArnNotLikeIfExists,
            "BinaryEquals" => BinaryEquals,
            "BinaryEqualsIfExists" => BinaryEqualsIfExists,
            "Bool" => Bool,
            "BoolIfExists" => BoolIfExists,
            "DateEquals" => DateEquals,
            "DateEqualsIfExists" => DateEqualsIfExists,
            "DateNotEquals" => DateNotEquals,
            "DateNotEqualsIfExists" => DateNotEqualsIfExists,
            "DateLessThan" => DateLessThan,
            "DateLessThanIfExists" => DateLessThanIfExists,
            "DateGreaterThanEquals" => DateGreaterThanEquals,
            "DateGreaterThanEqualsIfExists" => DateGreaterThanEqualsIfExists,
            "DateLessThanEquals" => DateLessThanEquals,
            "DateLessThanEqualsIfExists" => DateLessThanEqualsIfExists,
            "DateGreaterThan" => DateGreaterThan,
            "DateGreaterThanIfExists" => DateGreaterThanIfExists,
            "IpAddress" => IpAddress,
            "IpAddressIfExists" => IpAddressIfExists,
            "NotIpAddress" => NotIpAddress,
            "NotIpAddressIfExists" => NotIpAddressIfExists,
            "Null" => Null,
            "NumericEquals" => NumericEquals,
            "NumericEqualsIfExists" => NumericEqualsIfExists,
            "NumericNotEquals" => NumericNotEquals,
            "NumericNotEqualsIfExists" => NumericNotEqualsIfExists,
            "NumericLessThan" => NumericLessThan,
            "NumericLessThanIfExists" => NumericLessThanIfExists,
            "NumericGreaterThanEquals" => NumericGreaterThanEquals,
            "NumericGreaterThanEqualsIfExists" => NumericGreaterThanEqualsIfExists,
            "NumericLessThanEquals" => NumericLessThanEquals,
            "NumericLessThanEqualsIfExists" => NumericLessThanEqualsIfExists,
            "NumericGreaterThan" => NumericGreaterThan,
            "NumericGreaterThanIfExists" => NumericGreaterThanIfExists,
            "StringEquals" => StringEquals,
            "StringEqualsIfExists" => StringEqualsIfExists,
            "StringNotEquals" => StringNotEquals,
            "StringNotEqualsIfExists" => StringNotEqualsIfExists,
            "StringEqualsIgnoreCase" => StringEqualsIgnoreCase,
            "StringEqualsIgnoreCaseIfExists" => StringEqualsIgnoreCaseIfExists,
            "StringNotEqualsIgnoreCase" => StringNotEqualsIgnoreCase,
            "StringNotEqualsIgnoreCaseIfExists" => StringNotEqualsIgnoreCaseIfExists,
            "StringLike" => StringLike,
            "StringLikeIfExists" => StringLikeIfExists,
            "StringNotLike" => StringNotLike,
            "StringNotLikeIfExists" => StringNotLikeIfExists,
            _ => return Err(MasonError::UnknownOperator(s.to_string())),
        };

        Ok(ConditionOp {
            qualifier,
            ..op
        })
    }
}

/// Accepted as the operator argument of
/// [Statement::if_condition](crate::Statement::if_condition): either a
/// typed [ConditionOp] or an operator name validated against the registry.
pub trait IntoOperator {
    fn into_operator(self) -> Result<ConditionOp, MasonError>;
}

impl IntoOperator for ConditionOp {
    fn into_operator(self) -> Result<ConditionOp, MasonError> {
        Ok(self)
    }
}

impl IntoOperator for &str {
    fn into_operator(self) -> Result<ConditionOp, MasonError> {
        ConditionOp::from_str(self)
    }
}

impl IntoOperator for String {
    fn into_operator(self) -> Result<ConditionOp, MasonError> {
        ConditionOp::from_str(&self)
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{condop, ConditionOp, IntoOperator, MasonError},
        pretty_assertions::assert_eq,
        std::str::FromStr,
    };

    #[test_log::test]
    fn test_display_roundtrip() {
        let items = vec![
            "ArnEquals",
            "ArnEqualsIfExists",
            "ArnLike",
            "ArnLikeIfExists",
            "ArnNotEquals",
            "ArnNotEqualsIfExists",
            "ArnNotLike",
            "ArnNotLikeIfExists",
            "BinaryEquals",
            "BinaryEqualsIfExists",
            "Bool",
            "BoolIfExists",
            "DateEquals",
            "DateEqualsIfExists",
            "DateGreaterThan",
            "DateGreaterThanEquals",
            "DateGreaterThanEqualsIfExists",
            "DateGreaterThanIfExists",
            "DateLessThan",
            "DateLessThanEquals",
            "DateLessThanEqualsIfExists",
            "DateLessThanIfExists",
            "DateNotEquals",
            "DateNotEqualsIfExists",
            "IpAddress",
            "IpAddressIfExists",
            "NotIpAddress",
            "NotIpAddressIfExists",
            "Null",
            "NumericEquals",
            "NumericEqualsIfExists",
            "NumericGreaterThan",
            "NumericGreaterThanEquals",
            "NumericGreaterThanEqualsIfExists",
            "NumericGreaterThanIfExists",
            "NumericLessThan",
            "NumericLessThanEquals",
            "NumericLessThanEqualsIfExists",
            "NumericLessThanIfExists",
            "NumericNotEquals",
            "NumericNotEqualsIfExists",
            "StringEquals",
            "StringEqualsIfExists",
            "StringEqualsIgnoreCase",
            "StringEqualsIgnoreCaseIfExists",
            "StringLike",
            "StringLikeIfExists",
            "StringNotEquals",
            "StringNotEqualsIfExists",
            "StringNotEqualsIgnoreCase",
            "StringNotEqualsIgnoreCaseIfExists",
            "StringNotLike",
            "StringNotLikeIfExists",
        ];

        for item in items {
            let op = ConditionOp::from_str(item).unwrap();
            assert_eq!(format!("{}", op), item);
            assert_eq!(&op, item);

            let qualified = format!("ForAllValues:{}", item);
            let op = ConditionOp::from_str(&qualified).unwrap();
            assert_eq!(format!("{}", op), qualified);

            let qualified = format!("ForAnyValue:{}", item);
            let op = ConditionOp::from_str(&qualified).unwrap();
            assert_eq!(format!("{}", op), qualified);
        }
    }

    #[test_log::test]
    fn test_unknown_operator() {
        let e = ConditionOp::from_str("NotARealOperator").unwrap_err();
        assert_eq!(e, MasonError::UnknownOperator("NotARealOperator".to_string()));

        // The qualifier alone does not make a name valid.
        let e = ConditionOp::from_str("ForAnyValue:NotARealOperator").unwrap_err();
        assert_eq!(e, MasonError::UnknownOperator("ForAnyValue:NotARealOperator".to_string()));

        let e = ConditionOp::from_str("").unwrap_err();
        assert_eq!(e, MasonError::UnknownOperator("".to_string()));
    }

    #[test_log::test]
    fn test_fluent_modifiers() {
        assert_eq!(condop::StringEquals.for_any_value().to_string(), "ForAnyValue:StringEquals");
        assert_eq!(condop::StringEquals.for_all_values().to_string(), "ForAllValues:StringEquals");
        assert_eq!(condop::StringEquals.if_exists(), condop::StringEqualsIfExists);
        assert_eq!(condop::StringNotLike.if_exists(), condop::StringNotLikeIfExists);
        assert_eq!(condop::ArnLike.if_exists().if_exists(), condop::ArnLikeIfExists);
        assert_eq!(condop::Null.if_exists(), condop::Null);
        assert_eq!(
            condop::StringLike.for_all_values().if_exists().to_string(),
            "ForAllValues:StringLikeIfExists"
        );
    }

    #[test_log::test]
    fn test_into_operator() {
        assert_eq!(condop::Bool.into_operator().unwrap(), condop::Bool);
        assert_eq!("Bool".into_operator().unwrap(), condop::Bool);
        assert_eq!("ForAnyValue:StringEquals".into_operator().unwrap(), condop::StringEquals.for_any_value());
        assert_eq!(
            "Bogus".to_string().into_operator().unwrap_err(),
            MasonError::UnknownOperator("Bogus".to_string())
        );
    }

    #[test_log::test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&condop::StringLike).unwrap(), r#""StringLike""#);
        assert_eq!(
            serde_json::to_string(&condop::StringEquals.for_any_value()).unwrap(),
            r#""ForAnyValue:StringEquals""#
        );
    }

    #[test_log::test]
    fn test_ord() {
        let mut ops = vec![condop::StringLike, condop::ArnLike, condop::Bool];
        ops.sort();
        assert_eq!(ops, vec![condop::ArnLike, condop::Bool, condop::StringLike]);
    }
}
