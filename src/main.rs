use clap::Parser;
use mama_weeks::config::Command;
use mama_weeks::core::due_date::{parse_date, PregnancyProgress};
use mama_weeks::core::export;
use mama_weeks::domain::ports::{CatalogSource, SettingsProvider};
use mama_weeks::utils::{logger, validation::Validate};
use mama_weeks::{classify_with, CliConfig, Result, TomlConfig, WeekDataResolver};
use std::path::Path;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?})",
            e,
            e.category()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn run(cli: &CliConfig) -> Result<()> {
    cli.validate()?;

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };
    config.validate()?;

    let catalog = config.load_catalog()?;
    let resolver = WeekDataResolver::new(&catalog);

    match &cli.command {
        Command::Week {
            week,
            phase_rule,
            json,
        } => {
            let rule = phase_rule.unwrap_or_else(|| config.phase_rule());
            let data = resolver.resolve(*week);
            let phase = classify_with(rule, week.floor() as i64);

            if *json {
                let body = serde_json::json!({ "data": data, "phase": phase, "phase_rule": rule });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                println!("Week {} · {}", data.week, phase.name);
                println!(
                    "  Size: {} ({} {})",
                    data.size_label, data.comparison_emoji, data.comparison_object
                );
                println!("  Weight: {}", data.weight_label);
                println!("  {}", data.description);
                if !data.organs_developing.is_empty() {
                    println!("  Developing: {}", data.organs_developing.join(", "));
                }
                println!("  Phase: {}", phase.description);
            }
        }
        Command::Due {
            due_date,
            today,
            json,
        } => {
            let due = parse_date(due_date)?;
            let today = match today {
                Some(value) => parse_date(value)?,
                None => chrono::Local::now().date_naive(),
            };
            let progress = PregnancyProgress::from_due_date(due, today);
            tracing::info!(
                "Week {} day {} ({}% of term)",
                progress.week,
                progress.day_of_week,
                progress.progress_percent
            );

            if *json {
                let data = resolver.resolve(progress.week as f64);
                let body = serde_json::json!({ "progress": progress, "data": data });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                println!(
                    "Week {} + {} days · {}",
                    progress.week, progress.day_of_week, progress.phase.name
                );
                println!("  Days remaining: {}", progress.days_remaining);
                println!("  Progress: {}%", progress.progress_percent);
            }
        }
        Command::Timeline {
            from,
            to,
            format,
            phase_rule,
            output,
        } => {
            let format = format.unwrap_or_else(|| config.default_format());
            let rule = phase_rule.unwrap_or_else(|| config.phase_rule());
            let rows = resolver.timeline(*from, *to);

            match output {
                Some(path) => {
                    export::write_to(path, &rows, format, rule)?;
                    tracing::info!("✅ Exported {} weeks", rows.len());
                    println!("📁 Output saved to: {}", path);
                }
                None if cli.config.is_some() && config.settings.output_path.is_some() => {
                    let path = Path::new(config.output_path())
                        .join(format!("timeline.{}", format.extension()));
                    export::write_to(&path, &rows, format, rule)?;
                    tracing::info!("✅ Exported {} weeks", rows.len());
                    println!("📁 Output saved to: {}", path.display());
                }
                None => print!("{}", export::render(&rows, format, rule)?),
            }
        }
    }

    Ok(())
}
