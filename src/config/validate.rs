// src/config/validate.rs

use std::collections::BTreeMap;
use std::str::FromStr;

use ratatui::style::Color;

use crate::config::model::{
    ConfigFile, OperationStyle, RawConfigFile, RawOperationStyle, default_operation_styles,
};
use crate::errors::{Result, SchedvizError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = SchedvizError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_layout(&raw)?;
        let operations = validate_operations(&raw.operation)?;
        Ok(ConfigFile::new_unchecked(raw.input, raw.layout, operations))
    }
}

fn validate_layout(cfg: &RawConfigFile) -> Result<()> {
    if cfg.layout.spacing == 0 {
        return Err(SchedvizError::ConfigError(
            "[layout].spacing must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_operations(
    raw: &BTreeMap<String, RawOperationStyle>,
) -> Result<BTreeMap<u32, OperationStyle>> {
    let mut styles = default_operation_styles();

    for (key, style) in raw {
        let op_type: u32 = key.trim().parse().map_err(|_| {
            SchedvizError::ConfigError(format!(
                "[operation.{key}] must be keyed by an integer operation type"
            ))
        })?;

        if style.label.trim().is_empty() {
            return Err(SchedvizError::ConfigError(format!(
                "[operation.{key}].label must not be empty"
            )));
        }

        let color = Color::from_str(style.color.trim()).map_err(|_| {
            SchedvizError::ConfigError(format!(
                "[operation.{key}].color '{}' is not a recognised color",
                style.color
            ))
        })?;

        styles.insert(
            op_type,
            OperationStyle {
                label: style.label.trim().to_string(),
                color,
            },
        );
    }

    Ok(styles)
}
