//! Credential verifier verdicts.
//!
//! The verifier answers with a small JSON object:
//!
//! ```json
//! { "success": true, "firstName": "Alex" }
//! { "success": false, "message": "..." }
//! ```
//!
//! [`Verdict::from_json`] is the single place that wire shape is
//! interpreted. Every malformed body - not JSON at all, the wrong shape, a
//! missing or empty `firstName` - falls through to [`Verdict::Denied`], so
//! callers only ever see the two-armed union.

use serde::Deserialize;

/// Outcome of one credential check. Produced once per login attempt and
/// never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The verifier accepted the credential.
    Approved {
        /// Display name to greet the user with.
        first_name: String,
    },
    /// The verifier rejected the credential, or its answer could not be
    /// trusted. The optional reason is for logs only and never shown.
    Denied {
        /// Reason reported by the verifier, if any.
        message: Option<String>,
    },
}

/// Raw wire shape. Lenient on purpose: absent fields default rather than
/// fail, so shape validation happens in one place below.
#[derive(Debug, Deserialize)]
struct WireVerdict {
    #[serde(default)]
    success: bool,
    #[serde(default, rename = "firstName")]
    first_name: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl Verdict {
    /// Whether this verdict approves the login.
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        matches!(self, Self::Approved { .. })
    }

    /// Interpret a verifier response body.
    ///
    /// Approval requires `success: true` together with a non-empty
    /// `firstName`; anything else, including an unparseable body, is a
    /// denial.
    #[must_use]
    pub fn from_json(body: &str) -> Self {
        let Ok(wire) = serde_json::from_str::<WireVerdict>(body) else {
            return Self::Denied { message: None };
        };

        match wire {
            WireVerdict {
                success: true,
                first_name: Some(first_name),
                ..
            } if !first_name.is_empty() => Self::Approved { first_name },
            WireVerdict { message, .. } => Self::Denied { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approved_shape_captures_first_name() {
        let verdict = Verdict::from_json(r#"{"success": true, "firstName": "Alex"}"#);
        assert_eq!(
            verdict,
            Verdict::Approved {
                first_name: "Alex".to_string()
            }
        );
        assert!(verdict.is_approved());
    }

    #[test]
    fn explicit_denial_keeps_the_message_for_logs() {
        let verdict = Verdict::from_json(r#"{"success": false, "message": "no such account"}"#);
        assert_eq!(
            verdict,
            Verdict::Denied {
                message: Some("no such account".to_string())
            }
        );
    }

    #[test]
    fn success_without_first_name_is_denied() {
        let verdict = Verdict::from_json(r#"{"success": true}"#);
        assert!(!verdict.is_approved());
    }

    #[test]
    fn success_with_empty_first_name_is_denied() {
        let verdict = Verdict::from_json(r#"{"success": true, "firstName": ""}"#);
        assert!(!verdict.is_approved());
    }

    #[test]
    fn unrelated_object_shape_is_denied() {
        let verdict = Verdict::from_json(r#"{"status": "ok", "count": 3}"#);
        assert_eq!(verdict, Verdict::Denied { message: None });
    }

    #[test]
    fn non_json_body_is_denied() {
        let verdict = Verdict::from_json("<html>Bad Gateway</html>");
        assert_eq!(verdict, Verdict::Denied { message: None });
    }

    #[test]
    fn json_array_is_denied() {
        let verdict = Verdict::from_json(r#"[{"success": true}]"#);
        assert_eq!(verdict, Verdict::Denied { message: None });
    }

    #[test]
    fn extra_fields_do_not_block_approval() {
        let verdict =
            Verdict::from_json(r#"{"success": true, "firstName": "Sam", "plan": "gold"}"#);
        assert!(verdict.is_approved());
    }
}
