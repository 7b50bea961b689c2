use crate::utils::error::{WeekError, Result};
use std::str::FromStr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(WeekError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(WeekError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 解析列舉值，失敗時帶上欄位名稱
pub fn validate_choice<T>(field_name: &str, value: &str) -> Result<T>
where
    T: FromStr<Err = String>,
{
    value
        .parse::<T>()
        .map_err(|reason| WeekError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason,
        })
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(WeekError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ExportFormat, PhaseRule};

    #[test]
    fn test_validate_path() {
        assert!(validate_path("settings.output_path", "./output").is_ok());
        assert!(validate_path("settings.output_path", "   ").is_err());
        assert!(validate_path("settings.output_path", "out\0put").is_err());
    }

    #[test]
    fn test_validate_choice() {
        let rule: PhaseRule = validate_choice("settings.phase_rule", "compact").unwrap();
        assert_eq!(rule, PhaseRule::Compact);

        let err = validate_choice::<ExportFormat>("settings.default_format", "pdf").unwrap_err();
        assert!(err.to_string().contains("settings.default_format"));
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("timeline.from", 1, 1, 42).is_ok());
        assert!(validate_range("timeline.to", 43, 1, 42).is_err());
    }
}
