use {
    chrono::{DateTime, SecondsFormat, TimeZone},
    ipnet::{IpNet, Ipv4Net, Ipv6Net},
    serde::{ser::Serializer, Serialize},
    std::net::IpAddr,
};

/// The value set of one condition entry, in insertion order.
///
/// Everything is normalized to a string on the way in, matching how the
/// IAM console renders booleans, numbers, and timestamps. A single value
/// serializes as a JSON scalar, multiple values as an array.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConditionValues {
    values: Vec<String>,
}

impl ConditionValues {
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// A single base64-encoded value for use with `BinaryEquals`.
    pub fn base64(bytes: impl AsRef<[u8]>) -> Self {
        base64::encode(bytes.as_ref()).into()
    }

    /// Appends `other`'s values in order, skipping exact duplicates.
    pub(crate) fn merge(&mut self, other: ConditionValues) {
        for value in other.values {
            if !self.values.contains(&value) {
                self.values.push(value);
            }
        }
    }
}

impl Serialize for ConditionValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.values.len() == 1 {
            self.values[0].serialize(serializer)
        } else {
            self.values.serialize(serializer)
        }
    }
}

impl From<String> for ConditionValues {
    fn from(value: String) -> Self {
        Self {
            values: vec![value],
        }
    }
}

impl From<&str> for ConditionValues {
    fn from(value: &str) -> Self {
        value.to_string().into()
    }
}

impl From<bool> for ConditionValues {
    fn from(value: bool) -> Self {
        value.to_string().into()
    }
}

impl From<i64> for ConditionValues {
    fn from(value: i64) -> Self {
        value.to_string().into()
    }
}

impl From<u64> for ConditionValues {
    fn from(value: u64) -> Self {
        value.to_string().into()
    }
}

impl From<f64> for ConditionValues {
    fn from(value: f64) -> Self {
        value.to_string().into()
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for ConditionValues
where
    Tz::Offset: std::fmt::Display,
{
    fn from(value: DateTime<Tz>) -> Self {
        value.to_rfc3339_opts(SecondsFormat::Millis, true).into()
    }
}

impl From<IpNet> for ConditionValues {
    fn from(value: IpNet) -> Self {
        value.to_string().into()
    }
}

impl From<Ipv4Net> for ConditionValues {
    fn from(value: Ipv4Net) -> Self {
        value.to_string().into()
    }
}

impl From<Ipv6Net> for ConditionValues {
    fn from(value: Ipv6Net) -> Self {
        value.to_string().into()
    }
}

impl From<IpAddr> for ConditionValues {
    fn from(value: IpAddr) -> Self {
        value.to_string().into()
    }
}

impl<T: Into<ConditionValues>> From<Vec<T>> for ConditionValues {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Into<ConditionValues>, const N: usize> From<[T; N]> for ConditionValues {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl From<&[&str]> for ConditionValues {
    fn from(values: &[&str]) -> Self {
        values.iter().copied().collect()
    }
}

impl<T: Into<ConditionValues>> FromIterator<T> for ConditionValues {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut result = Self::default();
        for item in iter {
            result.values.extend(item.into().values);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::ConditionValues,
        chrono::{TimeZone, Utc},
        ipnet::IpNet,
        pretty_assertions::assert_eq,
    };

    fn values_of(v: impl Into<ConditionValues>) -> Vec<String> {
        v.into().iter().map(str::to_string).collect()
    }

    #[test_log::test]
    fn test_conversions() {
        assert_eq!(values_of("payments"), vec!["payments"]);
        assert_eq!(values_of("payments".to_string()), vec!["payments"]);
        assert_eq!(values_of(true), vec!["true"]);
        assert_eq!(values_of(false), vec!["false"]);
        assert_eq!(values_of(3600_i64), vec!["3600"]);
        assert_eq!(values_of(3600_u64), vec!["3600"]);
        assert_eq!(values_of(1.5_f64), vec!["1.5"]);
        assert_eq!(values_of(vec!["a", "b"]), vec!["a", "b"]);
        assert_eq!(values_of(["a", "b", "c"]), vec!["a", "b", "c"]);
    }

    #[test_log::test]
    fn test_date_conversion() {
        let date = Utc.with_ymd_and_hms(2020, 4, 1, 0, 0, 0).unwrap();
        assert_eq!(values_of(date), vec!["2020-04-01T00:00:00.000Z"]);
    }

    #[test_log::test]
    fn test_ip_conversion() {
        let net: IpNet = "203.0.113.0/24".parse().unwrap();
        assert_eq!(values_of(net), vec!["203.0.113.0/24"]);
    }

    #[test_log::test]
    fn test_base64() {
        assert_eq!(values_of(ConditionValues::base64(b"QUJD")), vec!["UVVKRA=="]);
    }

    #[test_log::test]
    fn test_serialize() {
        let single: ConditionValues = "payments".into();
        assert_eq!(serde_json::to_string(&single).unwrap(), r#""payments""#);

        let multiple: ConditionValues = ["a", "b"].into();
        assert_eq!(serde_json::to_string(&multiple).unwrap(), r#"["a","b"]"#);
    }

    #[test_log::test]
    fn test_merge() {
        let mut values: ConditionValues = "a".into();
        values.merge("b".into());
        values.merge("a".into());
        values.merge(["b", "c"].into());
        assert_eq!(values.len(), 3);
        assert!(!values.is_empty());
        assert_eq!(values.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }
}
