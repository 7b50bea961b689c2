use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One catalogued gestational week.
///
/// Labels are authored by hand and are not derived from the numeric fields;
/// they may disagree (e.g. a rounded label next to a precise measurement).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentRecord {
    pub week: u32,
    #[serde(default)]
    pub length_cm: f64,
    #[serde(default)]
    pub weight_grams: f64,
    pub size_label: String,
    pub weight_label: String,
    pub comparison_object: String,
    #[serde(default)]
    pub comparison_emoji: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub baby_milestones: String,
    #[serde(default)]
    pub mom_milestones: String,
    #[serde(default)]
    pub organs_developing: Vec<String>,
}

/// A record answered for a requested week, which may sit between catalogued weeks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedWeekData {
    pub week: f64,
    pub length_cm: f64,
    pub weight_grams: f64,
    pub size_label: String,
    pub weight_label: String,
    pub comparison_object: String,
    pub comparison_emoji: String,
    pub description: String,
    pub baby_milestones: String,
    pub mom_milestones: String,
    pub organs_developing: Vec<String>,
}

impl From<&DevelopmentRecord> for ResolvedWeekData {
    fn from(record: &DevelopmentRecord) -> Self {
        Self {
            week: f64::from(record.week),
            length_cm: record.length_cm,
            weight_grams: record.weight_grams,
            size_label: record.size_label.clone(),
            weight_label: record.weight_label.clone(),
            comparison_object: record.comparison_object.clone(),
            comparison_emoji: record.comparison_emoji.clone(),
            description: record.description.clone(),
            baby_milestones: record.baby_milestones.clone(),
            mom_milestones: record.mom_milestones.clone(),
            organs_developing: record.organs_developing.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trimester {
    First,
    Second,
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PregnancyPhase {
    pub trimester: Trimester,
    pub name: &'static str,
    pub color_token: &'static str,
    pub description: &'static str,
}

/// Week boundaries used to split the pregnancy into trimesters.
///
/// `Standard` puts weeks 13–27 in the second trimester. `Compact` ends the
/// second trimester at week 24, which moves weeks 25–27 into the third.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseRule {
    #[default]
    Standard,
    Compact,
}

impl PhaseRule {
    /// Last week (inclusive) that still belongs to the second trimester.
    pub fn second_trimester_end(self) -> i64 {
        match self {
            PhaseRule::Standard => 27,
            PhaseRule::Compact => 24,
        }
    }
}

impl FromStr for PhaseRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(PhaseRule::Standard),
            "compact" => Ok(PhaseRule::Compact),
            other => Err(format!(
                "unknown phase rule '{}', expected 'standard' or 'compact'",
                other
            )),
        }
    }
}

impl fmt::Display for PhaseRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhaseRule::Standard => write!(f, "standard"),
            PhaseRule::Compact => write!(f, "compact"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!(
                "unsupported format '{}', expected csv, tsv or json",
                other
            )),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
