//! Pure validators for untrusted ToDo fields.
//!
//! Inputs arrive as untyped JSON values (`None` when the field is absent) so
//! the same validators serve query parameters, request bodies and stored
//! records. On success the original string is returned unchanged.

use chrono::DateTime;
use serde_json::Value;
use uuid::Uuid;

use super::error::ValidationError;

/// Byte offsets of the hyphens in the 8-4-4-4-12 form.
const UUID_HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// Validates an item identifier in the 8-4-4-4-12 hex form (any case).
pub fn validate_uuid(input: Option<&Value>) -> Result<String, ValidationError> {
    let value = input.ok_or(ValidationError::IdRequired)?;
    match value.as_str() {
        Some(id) if is_hyphenated_uuid(id) => Ok(id.to_string()),
        _ => Err(ValidationError::InvalidId),
    }
}

/// Validates a creation timestamp in the strict `YYYY-MM-DDTHH:mm:ss.sssZ` form.
pub fn validate_date(input: Option<&Value>) -> Result<String, ValidationError> {
    let value = input.ok_or(ValidationError::DateRequired)?;
    match value.as_str() {
        Some(date) if is_iso_millis_utc(date) => Ok(date.to_string()),
        _ => Err(ValidationError::InvalidDate),
    }
}

/// Validates a ToDo name: present, string-typed and non-empty.
pub fn validate_name(input: Option<&Value>) -> Result<String, ValidationError> {
    let value = input.ok_or(ValidationError::NameRequired)?;
    let name = value.as_str().ok_or(ValidationError::NameNotString)?;
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name.to_string())
}

fn is_hyphenated_uuid(s: &str) -> bool {
    if s.len() != 36 {
        return false;
    }
    let shape_ok = s.bytes().enumerate().all(|(i, b)| {
        if UUID_HYPHENS.contains(&i) {
            b == b'-'
        } else {
            b.is_ascii_hexdigit()
        }
    });
    // uuid also accepts simple/braced/urn forms, so the shape check comes first
    shape_ok && Uuid::try_parse(s).is_ok()
}

fn is_iso_millis_utc(s: &str) -> bool {
    const PATTERN: &[u8; 24] = b"dddd-dd-ddTdd:dd:dd.dddZ";

    if s.len() != PATTERN.len() {
        return false;
    }
    let shape_ok = s
        .bytes()
        .zip(PATTERN.iter())
        .all(|(b, &p)| match p {
            b'd' => b.is_ascii_digit(),
            literal => b == literal,
        });

    shape_ok && DateTime::parse_from_rfc3339(s).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_uuid_accepts_canonical_form() {
        let input = json!("550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(
            validate_uuid(Some(&input)),
            Ok("550e8400-e29b-41d4-a716-446655440000".to_string())
        );
    }

    #[test]
    fn test_validate_uuid_keeps_original_case() {
        let input = json!("550E8400-E29B-41D4-A716-446655440000");
        assert_eq!(
            validate_uuid(Some(&input)),
            Ok("550E8400-E29B-41D4-A716-446655440000".to_string())
        );
    }

    #[test]
    fn test_validate_uuid_rejects_malformed() {
        for bad in [
            json!("not-a-uuid"),
            json!("550e8400e29b41d4a716446655440000"),
            json!("{550e8400-e29b-41d4-a716-446655440000}"),
            json!("550e8400-e29b-41d4-a716-44665544000g"),
            json!(""),
            json!(42),
        ] {
            assert_eq!(
                validate_uuid(Some(&bad)),
                Err(ValidationError::InvalidId),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_validate_uuid_missing() {
        assert_eq!(validate_uuid(None), Err(ValidationError::IdRequired));
    }

    #[test]
    fn test_validate_date_accepts_millisecond_utc() {
        let input = json!("2024-01-15T10:30:00.000Z");
        assert_eq!(
            validate_date(Some(&input)),
            Ok("2024-01-15T10:30:00.000Z".to_string())
        );
    }

    #[test]
    fn test_validate_date_rejects_other_shapes() {
        for bad in [
            json!("2024-01-15"),
            json!("2024-01-15T10:30:00Z"),
            json!("2024-01-15T10:30:00.000000Z"),
            json!("2024-01-15T10:30:00.000+00:00"),
            json!("2024-01-15 10:30:00.000Z"),
            json!("2024-13-15T10:30:00.000Z"),
            json!("2024-02-30T10:30:00.000Z"),
            json!(1705314600000u64),
        ] {
            assert_eq!(
                validate_date(Some(&bad)),
                Err(ValidationError::InvalidDate),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_validate_date_missing() {
        assert_eq!(validate_date(None), Err(ValidationError::DateRequired));
    }

    #[test]
    fn test_validate_name() {
        let input = json!("Buy milk");
        assert_eq!(validate_name(Some(&input)), Ok("Buy milk".to_string()));
    }

    #[test]
    fn test_validate_name_empty() {
        assert_eq!(
            validate_name(Some(&json!(""))),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn test_validate_name_not_string() {
        assert_eq!(
            validate_name(Some(&json!(42))),
            Err(ValidationError::NameNotString)
        );
        assert_eq!(
            validate_name(Some(&Value::Null)),
            Err(ValidationError::NameNotString)
        );
    }

    #[test]
    fn test_validate_name_missing() {
        assert_eq!(validate_name(None), Err(ValidationError::NameRequired));
    }

    #[test]
    fn test_validate_name_keeps_whitespace() {
        let input = json!("  spaced  ");
        assert_eq!(validate_name(Some(&input)), Ok("  spaced  ".to_string()));
    }
}
