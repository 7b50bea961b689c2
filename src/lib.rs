pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::core::catalog::{BuiltinCatalog, Catalog};
pub use crate::core::due_date::PregnancyProgress;
pub use crate::core::phase::{classify, classify_compact, classify_with};
pub use crate::core::resolver::WeekDataResolver;
pub use crate::domain::model::{
    DevelopmentRecord, ExportFormat, PhaseRule, PregnancyPhase, ResolvedWeekData, Trimester,
};
pub use crate::utils::error::{CatalogError, Result, WeekError};
