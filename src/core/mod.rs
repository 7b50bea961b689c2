pub mod catalog;
pub mod due_date;
pub mod export;
pub mod phase;
pub mod resolver;

pub use crate::domain::model::{DevelopmentRecord, PregnancyPhase, ResolvedWeekData};
pub use crate::domain::ports::{CatalogSource, SettingsProvider};
pub use crate::utils::error::Result;
