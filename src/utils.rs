use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::TadoApiError;

/// Serialize a serde-backed enum into its string name (e.g. SCREAMING_SNAKE_CASE).
///
/// Used where enum values end up in URL path segments rather than JSON bodies.
pub fn serde_enum_name<T: Serialize>(val: &T) -> Option<String> {
    serde_json::to_value(val).ok()?.as_str().map(|s| s.to_string())
}

/// Decode an already-parsed JSON value into a typed model.
///
/// Wraps the serde error with the path to the offending field, which is the
/// difference between "invalid type: null" and knowing which zone field broke.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, TadoApiError> {
    serde_path_to_error::deserialize(value).map_err(|e| TadoApiError::Json(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayType;

    #[test]
    fn enum_name_uses_wire_spelling() {
        assert_eq!(serde_enum_name(&DayType::MondayToFriday).as_deref(), Some("MONDAY_TO_FRIDAY"));
        assert_eq!(serde_enum_name(&DayType::Monday).as_deref(), Some("MONDAY"));
    }

    #[test]
    fn from_value_reports_the_failing_path() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Probe {
            setting: Setting,
        }
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Setting {
            power: String,
        }

        let err = from_value::<Probe>(serde_json::json!({"setting": {"power": 3}})).unwrap_err();
        let TadoApiError::Json(msg) = err else {
            panic!("expected json error");
        };
        assert!(msg.contains("setting.power"), "path missing in: {}", msg);
    }
}
