use crate::domain::model::{ExportFormat, PhaseRule};
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "mama-weeks")]
#[command(about = "Pregnancy week development data and trimester phases")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Resolve development data and phase for one week
    Week {
        #[arg(allow_negative_numbers = true)]
        week: f64,

        /// Trimester boundaries to use (standard or compact)
        #[arg(long)]
        phase_rule: Option<PhaseRule>,

        #[arg(long)]
        json: bool,
    },

    /// Current week and progress from a due date (YYYY-MM-DD)
    Due {
        due_date: String,

        /// Reference date instead of today
        #[arg(long)]
        today: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Export a week-by-week table
    Timeline {
        #[arg(long, default_value = "1")]
        from: u32,

        #[arg(long, default_value = "40")]
        to: u32,

        #[arg(long)]
        format: Option<ExportFormat>,

        #[arg(long)]
        phase_rule: Option<PhaseRule>,

        /// Output file; stdout when omitted
        #[arg(long)]
        output: Option<String>,
    },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Command::Timeline { from, to, .. } = &self.command {
            validate_range("timeline.from", *from, 1, 42)?;
            validate_range("timeline.to", *to, *from, 42)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_week_command() {
        let cli = CliConfig::parse_from(["mama-weeks", "week", "10", "--phase-rule", "compact"]);
        match cli.command {
            Command::Week {
                week, phase_rule, json,
            } => {
                assert_eq!(week, 10.0);
                assert_eq!(phase_rule, Some(PhaseRule::Compact));
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_timeline_range_validation() {
        let ok = CliConfig::parse_from(["mama-weeks", "timeline", "--from", "4", "--to", "12"]);
        assert!(ok.validate().is_ok());

        let reversed = CliConfig::parse_from(["mama-weeks", "timeline", "--from", "20", "--to", "10"]);
        assert!(reversed.validate().is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = CliConfig::parse_from([
            "mama-weeks", "timeline", "--format", "json", "--config", "weeks.toml", "--verbose",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.config.as_deref(), Some("weeks.toml"));
        assert!(matches!(
            cli.command,
            Command::Timeline {
                format: Some(ExportFormat::Json),
                ..
            }
        ));
    }
}
