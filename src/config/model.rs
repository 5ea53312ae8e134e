// src/config/model.rs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::Deserialize;

use crate::errors::{Result, SchedvizError};

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [input]
/// schedule = "output.txt"
/// dependencies = "input.txt"
///
/// [layout]
/// spacing = 3
///
/// [operation.2]
/// label = "Multiplication"
/// color = "#FF6347"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawConfigFile {
    /// Input file locations from `[input]`.
    #[serde(default)]
    pub input: InputSection,

    /// Graph layout knobs from `[layout]`.
    #[serde(default)]
    pub layout: LayoutSection,

    /// Styles from `[operation.<type>]`, keyed by the operation type code.
    ///
    /// Entries are merged over the built-in styles for types 1 and 2.
    #[serde(default)]
    pub operation: BTreeMap<String, RawOperationStyle>,
}

/// `[input]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct InputSection {
    /// Scheduled-operations report written by the scheduler.
    #[serde(default = "default_schedule_path")]
    pub schedule: PathBuf,

    /// Node/edge-count dependency file, or a `.dot` graph.
    #[serde(default = "default_dependencies_path")]
    pub dependencies: PathBuf,
}

fn default_schedule_path() -> PathBuf {
    PathBuf::from("output.txt")
}

fn default_dependencies_path() -> PathBuf {
    PathBuf::from("input.txt")
}

impl Default for InputSection {
    fn default() -> Self {
        Self {
            schedule: default_schedule_path(),
            dependencies: default_dependencies_path(),
        }
    }
}

/// `[layout]` section.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct LayoutSection {
    /// Horizontal distance between nodes on the same level.
    #[serde(default = "default_spacing")]
    pub spacing: u32,
}

fn default_spacing() -> u32 {
    3
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            spacing: default_spacing(),
        }
    }
}

/// `[operation.<type>]` section as written by the user.
#[derive(Debug, Clone, Deserialize)]
pub struct RawOperationStyle {
    pub label: String,
    /// Anything ratatui can parse: `"red"`, `"#FF6347"`, `"208"`.
    pub color: String,
}

/// Validated display style for one operation type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStyle {
    pub label: String,
    pub color: Color,
}

/// Built-in styles: type 1 is an adder, type 2 a multiplier.
pub fn default_operation_styles() -> BTreeMap<u32, OperationStyle> {
    BTreeMap::from([
        (
            1,
            OperationStyle {
                label: "Addition".to_string(),
                color: Color::Rgb(65, 105, 225),
            },
        ),
        (
            2,
            OperationStyle {
                label: "Multiplication".to_string(),
                color: Color::Rgb(255, 99, 71),
            },
        ),
    ])
}

/// Validated configuration.
///
/// Only constructible through `TryFrom<RawConfigFile>` (see `validate.rs`) or
/// `Default`, so every instance satisfies the layout and style invariants.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    input: InputSection,
    layout: LayoutSection,
    operations: BTreeMap<u32, OperationStyle>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        input: InputSection,
        layout: LayoutSection,
        operations: BTreeMap<u32, OperationStyle>,
    ) -> Self {
        Self {
            input,
            layout,
            operations,
        }
    }

    pub fn input(&self) -> &InputSection {
        &self.input
    }

    pub fn layout(&self) -> LayoutSection {
        self.layout
    }

    pub fn operations(&self) -> &BTreeMap<u32, OperationStyle> {
        &self.operations
    }

    /// Replace input paths with those given on the command line.
    pub fn override_inputs(&mut self, schedule: Option<PathBuf>, dependencies: Option<PathBuf>) {
        if let Some(path) = schedule {
            self.input.schedule = path;
        }
        if let Some(path) = dependencies {
            self.input.dependencies = path;
        }
    }

    /// Resolve relative input paths against `root` (the config file's folder).
    pub fn rebase_inputs(&mut self, root: &Path) {
        for path in [&mut self.input.schedule, &mut self.input.dependencies] {
            if path.is_relative() {
                *path = root.join(&*path);
            }
        }
    }

    /// Replace the layout spacing, keeping the `spacing >= 1` invariant.
    pub fn override_spacing(&mut self, spacing: u32) -> Result<()> {
        if spacing == 0 {
            return Err(SchedvizError::ConfigError(
                "spacing must be >= 1 (got 0)".to_string(),
            ));
        }
        self.layout.spacing = spacing;
        Ok(())
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(
            InputSection::default(),
            LayoutSection::default(),
            default_operation_styles(),
        )
    }
}
