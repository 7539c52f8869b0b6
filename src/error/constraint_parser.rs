use regex::Regex;
use std::sync::OnceLock;

/// Parses PostgreSQL constraint violation messages into structured
/// (entity, field, value) information.
pub struct ConstraintParser;

/// Compiled regex patterns, built once and reused.
struct RegexPatterns {
    key_value: Regex,
    column_name: Regex,
    table_name: Regex,
}

impl RegexPatterns {
    fn new() -> Self {
        Self {
            // Matches "Key (field)=(value)" pattern in PostgreSQL messages
            key_value: Regex::new(r"Key \(([^)]+)\)=\(([^)]*)\)").unwrap(),
            // Matches column names in quotes
            column_name: Regex::new(r#"column "([^"]+)""#).unwrap(),
            // Matches table names in quotes
            table_name: Regex::new(r#"table "([^"]+)""#).unwrap(),
        }
    }
}

static REGEX_PATTERNS: OnceLock<RegexPatterns> = OnceLock::new();

impl ConstraintParser {
    fn patterns() -> &'static RegexPatterns {
        REGEX_PATTERNS.get_or_init(RegexPatterns::new)
    }

    /// Parses a unique constraint violation into (entity, field, value).
    ///
    /// Prefers the constraint name (e.g. `products_code_key`), falling back
    /// to the `Key (field)=(value)` detail line of the message.
    pub fn parse_unique_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        if let Some(constraint) = constraint_name {
            if let Some((entity, field)) = Self::parse_constraint_name(constraint) {
                if let Some(value) = Self::extract_value_from_message(message) {
                    return Some((entity, field, value));
                }
                return Some((entity, field, "duplicate_value".to_string()));
            }
        }

        if let Some((field, value)) = Self::extract_key_value_from_message(message) {
            let entity =
                Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
            return Some((entity, field, value));
        }

        None
    }

    /// Parses a not-null violation into (entity, field).
    pub fn parse_not_null_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String)> {
        if let Some(field) = Self::extract_column_from_message(message) {
            let entity = Self::extract_table_from_message(message)
                .or_else(|| {
                    constraint_name.and_then(|c| Self::parse_constraint_name(c).map(|(e, _)| e))
                })
                .unwrap_or_else(|| "resource".to_string());
            return Some((entity, field));
        }

        None
    }

    /// Parses a foreign key violation into (entity, field, referenced value).
    ///
    /// Handles constraint names like `licenses_business_id_fkey`.
    pub fn parse_foreign_key_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        if let Some(constraint) = constraint_name {
            if let Some((entity, field)) = Self::parse_foreign_key_constraint_name(constraint) {
                if let Some(value) = Self::extract_value_from_message(message) {
                    return Some((entity, field, value));
                }
                return Some((entity, field, "invalid_reference".to_string()));
            }
        }

        if let Some((field, value)) = Self::extract_key_value_from_message(message) {
            let entity =
                Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
            return Some((entity, field, value));
        }

        None
    }

    /// Parses a check constraint violation into (entity, field).
    pub fn parse_check_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String)> {
        if let Some(constraint) = constraint_name {
            if let Some((entity, field)) = Self::parse_constraint_name(constraint) {
                return Some((entity, field));
            }
        }

        if let Some(field) = Self::extract_column_from_message(message) {
            let entity =
                Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
            return Some((entity, field));
        }

        None
    }

    /// Splits a conventional constraint name (`table_field_suffix`) into
    /// (entity, field). Requires at least three `_`-separated parts.
    pub fn parse_constraint_name(constraint_name: &str) -> Option<(String, String)> {
        let parts: Vec<&str> = constraint_name.split('_').collect();
        if parts.len() >= 3 {
            let entity = parts[0].to_string();
            let field = parts[1].to_string();
            return Some((entity, field));
        }
        None
    }

    /// Splits a foreign key constraint name (`table_field_fkey`) into
    /// (entity, field), keeping multi-part field names intact.
    pub fn parse_foreign_key_constraint_name(constraint_name: &str) -> Option<(String, String)> {
        if constraint_name.ends_with("_fkey") {
            let without_suffix = &constraint_name[..constraint_name.len() - 5];
            let parts: Vec<&str> = without_suffix.split('_').collect();
            if parts.len() >= 2 {
                let entity = parts[0].to_string();
                let field = parts[1..].join("_");
                return Some((entity, field));
            }
        }
        None
    }

    /// Extracts a column name from `column "field"` in the message.
    pub fn extract_column_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .column_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Extracts a table name from `table "name"` in the message.
    pub fn extract_table_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .table_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Extracts (field, value) from `Key (field)=(value)` in the message.
    pub fn extract_key_value_from_message(message: &str) -> Option<(String, String)> {
        Self::patterns().key_value.captures(message).and_then(|caps| {
            let field = caps.get(1)?.as_str().to_string();
            let value = caps.get(2)?.as_str().to_string();
            Some((field, value))
        })
    }

    /// Extracts a value from the message, trying the key/value detail line
    /// first and falling back to the first quoted string.
    pub fn extract_value_from_message(message: &str) -> Option<String> {
        if let Some((_, value)) = Self::extract_key_value_from_message(message) {
            return Some(value);
        }

        if let Some(start) = message.find('"') {
            if let Some(end) = message[start + 1..].find('"') {
                return Some(message[start + 1..start + 1 + end].to_string());
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unique_violation_with_constraint_name() {
        let message = "duplicate key value violates unique constraint \"products_code_key\"\nDETAIL: Key (code)=(BP-PRO) already exists.";
        let result = ConstraintParser::parse_unique_violation(message, Some("products_code_key"));
        assert_eq!(
            result,
            Some(("products".to_string(), "code".to_string(), "BP-PRO".to_string()))
        );
    }

    #[test]
    fn test_parse_unique_violation_without_constraint_name() {
        let message = "duplicate key value violates unique constraint\nDETAIL: Key (license_key)=(ABCD-0001) already exists.";
        let result = ConstraintParser::parse_unique_violation(message, None);
        assert_eq!(
            result,
            Some((
                "resource".to_string(),
                "license_key".to_string(),
                "ABCD-0001".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_not_null_violation() {
        let message = "null value in column \"name\" violates not-null constraint";
        let result = ConstraintParser::parse_not_null_violation(message, None);
        assert_eq!(result, Some(("resource".to_string(), "name".to_string())));
    }

    #[test]
    fn test_parse_foreign_key_violation() {
        let message = "insert or update on table \"licenses\" violates foreign key constraint \"licenses_business_id_fkey\"\nDETAIL: Key (business_id)=(999) is not present in table \"businesses\".";
        let result =
            ConstraintParser::parse_foreign_key_violation(message, Some("licenses_business_id_fkey"));
        assert_eq!(
            result,
            Some((
                "licenses".to_string(),
                "business_id".to_string(),
                "999".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_check_violation() {
        let message = "new row for relation \"licenses\" violates check constraint \"licenses_status_check\"";
        let result = ConstraintParser::parse_check_violation(message, Some("licenses_status_check"));
        assert_eq!(result, Some(("licenses".to_string(), "status".to_string())));
    }

    #[test]
    fn test_parse_constraint_name() {
        assert_eq!(
            ConstraintParser::parse_constraint_name("products_code_key"),
            Some(("products".to_string(), "code".to_string()))
        );
        assert_eq!(ConstraintParser::parse_constraint_name("invalid"), None);
    }

    #[test]
    fn test_parse_foreign_key_constraint_name() {
        assert_eq!(
            ConstraintParser::parse_foreign_key_constraint_name("businesses_customer_id_fkey"),
            Some(("businesses".to_string(), "customer_id".to_string()))
        );
        assert_eq!(
            ConstraintParser::parse_foreign_key_constraint_name("not_a_foreign_key"),
            None
        );
    }

    #[test]
    fn test_extract_column_from_message() {
        let message = "null value in column \"title\" violates not-null constraint";
        assert_eq!(
            ConstraintParser::extract_column_from_message(message),
            Some("title".to_string())
        );
        assert_eq!(ConstraintParser::extract_column_from_message("no column here"), None);
    }

    #[test]
    fn test_extract_table_from_message() {
        let message = "insert or update on table \"businesses\" violates foreign key constraint";
        assert_eq!(
            ConstraintParser::extract_table_from_message(message),
            Some("businesses".to_string())
        );
    }

    #[test]
    fn test_extract_key_value_from_message() {
        let message = "Key (customer_id)=(42) is not present in table \"customers\"";
        assert_eq!(
            ConstraintParser::extract_key_value_from_message(message),
            Some(("customer_id".to_string(), "42".to_string()))
        );
    }

    #[test]
    fn test_extract_value_falls_back_to_quoted_string() {
        let message = "some error with \"quoted_value\" in it";
        assert_eq!(
            ConstraintParser::extract_value_from_message(message),
            Some("quoted_value".to_string())
        );
    }

    #[test]
    fn test_graceful_parsing_failures() {
        let message = "completely unrelated error message";
        assert_eq!(ConstraintParser::parse_unique_violation(message, None), None);
        assert_eq!(ConstraintParser::parse_not_null_violation(message, None), None);
        assert_eq!(ConstraintParser::parse_foreign_key_violation(message, None), None);
        assert_eq!(ConstraintParser::parse_check_violation(message, None), None);
    }
}
