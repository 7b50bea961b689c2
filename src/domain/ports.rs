use crate::core::catalog::Catalog;
use crate::utils::error::Result;

/// Anything able to hand out a validated week catalog.
pub trait CatalogSource: Send + Sync {
    fn load_catalog(&self) -> Result<Catalog>;
}

pub trait SettingsProvider: Send + Sync {
    fn phase_rule(&self) -> crate::domain::model::PhaseRule;
    fn output_path(&self) -> &str;
    fn default_format(&self) -> crate::domain::model::ExportFormat;
}
