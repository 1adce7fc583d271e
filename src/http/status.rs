//! Status codes written as numbers or symbolic names.
//!
//! A status payload can be `401`, `"401"` or `"unauthorized"`. Names are the
//! canonical reason phrases in snake_case (`"not_found"`, `"found"`, `"ok"`).

use std::collections::HashMap;
use std::sync::OnceLock;

use axum::http::StatusCode;

use crate::dispatch::DispatchError;
use crate::outcome::Payload;

/// Resolve a status payload to a `StatusCode`.
pub fn parse_status(value: &Payload) -> Result<StatusCode, DispatchError> {
    let invalid = || DispatchError::InvalidStatus(value.to_string());

    match value {
        Payload::Number(number) => {
            let code = number
                .as_u64()
                .and_then(|code| u16::try_from(code).ok())
                .ok_or_else(invalid)?;
            from_code(code).ok_or_else(invalid)
        }
        Payload::String(text) => match text.parse::<u16>() {
            Ok(code) => from_code(code).ok_or_else(invalid),
            Err(_) => symbol_table().get(text.as_str()).copied().ok_or_else(invalid),
        },
        _ => Err(invalid()),
    }
}

fn from_code(code: u16) -> Option<StatusCode> {
    if (100..=599).contains(&code) {
        StatusCode::from_u16(code).ok()
    } else {
        None
    }
}

fn symbol_table() -> &'static HashMap<String, StatusCode> {
    static TABLE: OnceLock<HashMap<String, StatusCode>> = OnceLock::new();
    TABLE.get_or_init(|| {
        (100..=599u16)
            .filter_map(|code| StatusCode::from_u16(code).ok())
            .filter_map(|status| {
                status
                    .canonical_reason()
                    .map(|reason| (symbolize(reason), status))
            })
            .collect()
    })
}

/// `"Non-Authoritative Information"` -> `"non_authoritative_information"`.
fn symbolize(reason: &str) -> String {
    reason
        .split(|c: char| c == ' ' || c == '-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            word.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_ascii_lowercase()
        })
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_status() {
        assert_eq!(parse_status(&json!(200)).unwrap(), StatusCode::OK);
        assert_eq!(parse_status(&json!("404")).unwrap(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_symbolic_status() {
        assert_eq!(parse_status(&json!("ok")).unwrap(), StatusCode::OK);
        assert_eq!(parse_status(&json!("found")).unwrap(), StatusCode::FOUND);
        assert_eq!(
            parse_status(&json!("unauthorized")).unwrap(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            parse_status(&json!("non_authoritative_information")).unwrap(),
            StatusCode::NON_AUTHORITATIVE_INFORMATION
        );
        assert_eq!(
            parse_status(&json!("im_a_teapot")).unwrap(),
            StatusCode::IM_A_TEAPOT
        );
    }

    #[test]
    fn test_invalid_status() {
        assert!(matches!(
            parse_status(&json!("teapot")),
            Err(DispatchError::InvalidStatus(_))
        ));
        assert!(parse_status(&json!(42)).is_err());
        assert!(parse_status(&json!(-1)).is_err());
        assert!(parse_status(&Payload::Null).is_err());
    }
}
