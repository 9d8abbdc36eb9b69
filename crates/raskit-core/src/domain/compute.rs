//! Interpretation of the application's compute result.
//!
//! The automation layer does not guarantee a stable result shape: the same
//! call may hand back a 4-tuple, a 2-tuple or a bare scalar depending on the
//! installed version. Adapters translate whatever they receive into a
//! [`RawValue`]; [`ComputeOutcome::from_raw`] decides once, by inspecting the
//! shape, and nothing past this boundary sees the untyped value again.
//!
//! | Shape                               | Outcome                               |
//! |-------------------------------------|---------------------------------------|
//! | `(flag, error_count, messages, ..)` | `Success` iff `flag` and count is 0   |
//! | `(flag, detail)`                    | `Success` iff `flag`                  |
//! | anything else                       | `Unknown`: completed, not verified    |

use std::fmt;

/// Untyped value as returned by the automation interface.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Tuple(Vec<RawValue>),
}

impl RawValue {
    /// Truthiness as the automation layer means it: zero, empty and
    /// `Empty` are false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Empty => false,
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::Text(s) => !s.is_empty(),
            Self::Tuple(items) => !items.is_empty(),
        }
    }

    /// Integral count, if this value is numeric.
    pub fn as_count(&self) -> Option<i64> {
        match self {
            Self::Bool(b) => Some(i64::from(*b)),
            Self::Int(i) => Some(*i),
            Self::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(*f as i64),
            _ => None,
        }
    }

    /// Messages carried by this value: each element of a tuple, or the
    /// value itself when it is a non-empty scalar.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Empty => Vec::new(),
            Self::Tuple(items) => items
                .iter()
                .filter(|v| !matches!(v, Self::Empty))
                .map(ToString::to_string)
                .collect(),
            Self::Text(s) if s.is_empty() => Vec::new(),
            other => vec![other.to_string()],
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("None"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{:?}", x),
            Self::Text(s) => f.write_str(s),
            Self::Tuple(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str(")")
            }
        }
    }
}

/// What a compute call actually achieved.
#[derive(Debug, Clone, PartialEq)]
pub enum ComputeOutcome {
    Success,
    Failure {
        error_count: u32,
        messages: Vec<String>,
    },
    /// The call returned without raising, but in a shape that says nothing
    /// about success.
    Unknown { raw: RawValue },
}

impl ComputeOutcome {
    pub fn from_raw(raw: RawValue) -> Self {
        match raw {
            RawValue::Tuple(items) if items.len() >= 4 => Self::from_status_tuple(&items),
            RawValue::Tuple(items) if items.len() == 2 => {
                if items[0].is_truthy() {
                    Self::Success
                } else {
                    Self::Failure {
                        error_count: 1,
                        messages: items[1].messages(),
                    }
                }
            }
            other => Self::Unknown { raw: other },
        }
    }

    fn from_status_tuple(items: &[RawValue]) -> Self {
        let flag = items[0].is_truthy();
        let messages = items[2].messages();

        match items[1].as_count() {
            Some(0) if flag => Self::Success,
            Some(count) => Self::Failure {
                error_count: u32::try_from(count.max(0)).unwrap_or(u32::MAX),
                messages,
            },
            None => Self::Failure {
                error_count: 0,
                messages: vec![format!("unreadable error count: {}", items[1])],
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// `true` for `Success` and `Unknown`: neither reports a failure.
    pub fn is_non_failing(&self) -> bool {
        !self.is_failure()
    }

    /// The legacy `(success, message)` pair. `Unknown` reports `true` with a
    /// message that says it was not verified.
    pub fn summary(&self) -> (bool, String) {
        (self.is_non_failing(), self.to_string())
    }
}

impl fmt::Display for ComputeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("SIMULATION COMPLETED SUCCESSFULLY"),
            Self::Failure {
                error_count,
                messages,
            } => {
                if messages.is_empty() {
                    write!(f, "SIMULATION FAILED: {} errors occurred", error_count)
                } else {
                    write!(f, "SIMULATION FAILED WITH ERRORS: {}", messages.join(", "))
                }
            }
            Self::Unknown { raw } => write!(f, "SIMULATION COMPLETED (unverified): {}", raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuple(items: Vec<RawValue>) -> RawValue {
        RawValue::Tuple(items)
    }

    fn text(s: &str) -> RawValue {
        RawValue::Text(s.into())
    }

    #[test]
    fn four_tuple_success() {
        let raw = tuple(vec![
            RawValue::Bool(true),
            RawValue::Int(0),
            tuple(vec![text("Computations completed")]),
            RawValue::Bool(false),
        ]);
        assert_eq!(ComputeOutcome::from_raw(raw), ComputeOutcome::Success);
    }

    #[test]
    fn four_tuple_with_errors_fails_even_when_flag_true() {
        let raw = tuple(vec![
            RawValue::Bool(true),
            RawValue::Int(2),
            tuple(vec![text("bad xs"), text("no flow")]),
            RawValue::Bool(false),
        ]);
        let outcome = ComputeOutcome::from_raw(raw);
        assert_eq!(
            outcome,
            ComputeOutcome::Failure {
                error_count: 2,
                messages: vec!["bad xs".into(), "no flow".into()],
            }
        );
        assert_eq!(
            outcome.to_string(),
            "SIMULATION FAILED WITH ERRORS: bad xs, no flow"
        );
    }

    #[test]
    fn four_tuple_false_flag_without_messages() {
        let raw = tuple(vec![
            RawValue::Bool(false),
            RawValue::Int(3),
            tuple(vec![]),
            RawValue::Bool(false),
        ]);
        let outcome = ComputeOutcome::from_raw(raw);
        assert!(outcome.is_failure());
        assert_eq!(outcome.to_string(), "SIMULATION FAILED: 3 errors occurred");
    }

    #[test]
    fn four_tuple_false_flag_zero_count_is_failure() {
        let raw = tuple(vec![
            RawValue::Bool(false),
            RawValue::Int(0),
            RawValue::Empty,
            RawValue::Empty,
        ]);
        assert!(ComputeOutcome::from_raw(raw).is_failure());
    }

    #[test]
    fn unreadable_count_is_failure() {
        let raw = tuple(vec![
            RawValue::Bool(true),
            text("many"),
            RawValue::Empty,
            RawValue::Empty,
        ]);
        assert!(ComputeOutcome::from_raw(raw).is_failure());
    }

    #[test]
    fn pair_shape() {
        let ok = tuple(vec![RawValue::Int(1), text("done")]);
        assert!(ComputeOutcome::from_raw(ok).is_success());

        let failed = ComputeOutcome::from_raw(tuple(vec![RawValue::Bool(false), text("locked")]));
        assert_eq!(
            failed,
            ComputeOutcome::Failure {
                error_count: 1,
                messages: vec!["locked".into()],
            }
        );
    }

    #[test]
    fn other_shapes_are_unknown_not_success() {
        for raw in [
            RawValue::Bool(true),
            RawValue::Empty,
            RawValue::Int(0),
            tuple(vec![RawValue::Bool(true)]),
            tuple(vec![RawValue::Bool(true), RawValue::Int(0), RawValue::Empty]),
        ] {
            let outcome = ComputeOutcome::from_raw(raw.clone());
            assert_eq!(outcome, ComputeOutcome::Unknown { raw });
            assert!(!outcome.is_success());
            assert!(outcome.is_non_failing());
        }
    }

    #[test]
    fn summary_pairs() {
        assert_eq!(
            ComputeOutcome::Success.summary(),
            (true, "SIMULATION COMPLETED SUCCESSFULLY".to_string())
        );
        let (ok, msg) = ComputeOutcome::Unknown {
            raw: RawValue::Bool(true),
        }
        .summary();
        assert!(ok);
        assert!(msg.contains("unverified"));
    }

    #[test]
    fn raw_display_looks_like_a_tuple() {
        let raw = tuple(vec![RawValue::Bool(true), RawValue::Float(1.5), text("x")]);
        assert_eq!(raw.to_string(), "(true, 1.5, x)");
    }
}
