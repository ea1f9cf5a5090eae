//! Ready-made name transform strategies.
//!
//! Values for [`GenOptions::transform_name`](crate::GenOptions); callers
//! with project-specific conventions supply their own closure instead.

use crate::options::NameTransform;

/// Returns the identity transform (the default behavior).
#[must_use]
pub fn identity() -> NameTransform {
    Box::new(|name: &str| name.to_string())
}

/// Returns a transform converting identifiers to PascalCase.
#[must_use]
pub fn pascal_case() -> NameTransform {
    Box::new(|name: &str| to_pascal_case(name))
}

/// Returns a transform prefixing every identifier.
#[must_use]
pub fn prefixed(prefix: impl Into<String>) -> NameTransform {
    let prefix = prefix.into();
    Box::new(move |name: &str| format!("{prefix}{name}"))
}

/// Converts a string to PascalCase.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '_' || c == '-' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(identity()("user_id"), "user_id");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("user_id"), "UserId");
        assert_eq!(to_pascal_case("side"), "Side");
        assert_eq!(to_pascal_case("order-type"), "OrderType");
        assert_eq!(to_pascal_case("AlreadyPascal"), "AlreadyPascal");
    }

    #[test]
    fn test_pascal_case_transform() {
        assert_eq!(pascal_case()("wire_point"), "WirePoint");
    }

    #[test]
    fn test_prefixed() {
        let transform = prefixed("Wire");
        assert_eq!(transform("Point"), "WirePoint");
    }
}
