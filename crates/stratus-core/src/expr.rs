//! Typed intrinsic expressions for template outputs.
//!
//! Output values are classified once, at load time, into an explicit tagged
//! expression type instead of re-inspecting untyped JSON at resolution time.
//! Only two intrinsic forms exist: a direct reference to a resource
//! ([`Expr::Ref`]) and an attribute lookup against a resource
//! ([`Expr::GetAtt`]). Everything else is a literal.

use serde_json::Value;

/// A resolved-at-build-time output expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A plain JSON value, resolving to itself unchanged.
    Literal(Value),

    /// A direct reference to a resource by logical id.
    ///
    /// Resolves to the referenced resource's identity string.
    Ref(String),

    /// An attribute lookup against a resource by logical id.
    GetAtt {
        /// Logical id of the referenced resource.
        logical_id: String,
        /// Name of the attribute to read from the resource.
        attribute: String,
    },
}

impl Expr {
    /// Create an attribute-get expression.
    pub fn get_att(logical_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::GetAtt {
            logical_id: logical_id.into(),
            attribute: attribute.into(),
        }
    }

    /// Returns the logical id this expression references, if any.
    ///
    /// Literals reference nothing.
    pub fn referenced_id(&self) -> Option<&str> {
        match self {
            Expr::Literal(_) => None,
            Expr::Ref(logical_id) => Some(logical_id),
            Expr::GetAtt { logical_id, .. } => Some(logical_id),
        }
    }

    /// Returns `true` if this expression is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Expr::Literal(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_referenced_id() {
        assert_eq!(Expr::Literal(json!("plain")).referenced_id(), None);
        assert_eq!(
            Expr::Ref("Queue".to_string()).referenced_id(),
            Some("Queue")
        );
        assert_eq!(
            Expr::get_att("Queue", "Arn").referenced_id(),
            Some("Queue")
        );
    }

    #[test]
    fn test_get_att_constructor() {
        let expr = Expr::get_att("Table", "Arn");
        assert_eq!(
            expr,
            Expr::GetAtt {
                logical_id: "Table".to_string(),
                attribute: "Arn".to_string(),
            }
        );
        assert!(!expr.is_literal());
    }
}
