use crate::domain::models::{AllocationConfig, SalaryGrade};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct DefaultsFile {
    #[serde(default)]
    pub allocation: AllocationDefaults,
}

/// Starting values for a fresh session, overridable via
/// `$HOME/.config/shalloc/defaults.toml`.
#[derive(Debug, Deserialize)]
pub struct AllocationDefaults {
    #[serde(default = "default_grade_labels")]
    pub grade_labels: Vec<String>,
    #[serde(default = "default_reserve_ratio")]
    pub reserve_ratio: f64,
    #[serde(default = "default_share_percent")]
    pub shadow_shares_base_percent: f64,
}

impl Default for AllocationDefaults {
    fn default() -> Self {
        Self {
            grade_labels: default_grade_labels(),
            reserve_ratio: default_reserve_ratio(),
            shadow_shares_base_percent: default_share_percent(),
        }
    }
}

fn default_grade_labels() -> Vec<String> {
    ["A", "B", "C", "D", "E"].map(String::from).to_vec()
}

fn default_reserve_ratio() -> f64 {
    10.0
}

fn default_share_percent() -> f64 {
    15.0
}

impl AllocationDefaults {
    pub fn initial_config(&self) -> AllocationConfig {
        AllocationConfig {
            salary_grades: self
                .grade_labels
                .iter()
                .map(|label| SalaryGrade {
                    grade: label.clone(),
                    units: 0.0,
                    unit_value: 0.0,
                    employees: 0,
                })
                .collect(),
            profit: 0.0,
            reserve_ratio: self.reserve_ratio,
            shadow_shares_base_percent: self.shadow_shares_base_percent,
            treasury_reserve: 0.0,
        }
    }
}

pub fn load_defaults() -> anyhow::Result<AllocationDefaults> {
    let home = std::env::var("HOME")?;
    let path = PathBuf::from(home).join(".config/shalloc/defaults.toml");
    if !path.exists() {
        return Ok(AllocationDefaults::default());
    }
    let raw = std::fs::read_to_string(path)?;
    let file: DefaultsFile = toml::from_str(&raw)?;
    Ok(file.allocation)
}
