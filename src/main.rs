//! resume-ats: rule-based ATS compatibility scoring for structured resumes

use clap::Parser;
use log::{error, info};
use resume_ats::cli::{self, Cli, Commands, ConfigAction};
use resume_ats::config::{Config, OutputFormat};
use resume_ats::input::InputManager;
use resume_ats::output::formatter::formatter_for;
use resume_ats::output::report::{ImprovementReport, ScoreReport};
use resume_ats::processing::engine::calculate_ats_score;
use resume_ats::processing::keyword_analyzer::KeywordAnalyzer;
use resume_ats::{AtsError, Result};
use std::path::{Path, PathBuf};
use std::process;

const RESUME_EXTENSIONS: &[&str] = &["json", "toml"];
const JOB_EXTENSIONS: &[&str] = &["txt", "md", "markdown", "pdf"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn resolve_format(requested: Option<String>, config: &Config) -> Result<OutputFormat> {
    match requested {
        Some(format) => cli::parse_output_format(&format).map_err(AtsError::InvalidInput),
        None => Ok(config.output.format.clone()),
    }
}

async fn load_resume(
    input_manager: &mut InputManager,
    resume: &Path,
) -> Result<Option<resume_ats::ResumeDocument>> {
    cli::validate_file_extension(resume, RESUME_EXTENSIONS)
        .map_err(|e| AtsError::InvalidInput(format!("Resume file: {}", e)))?;
    input_manager.load_document(resume).await
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    let mut input_manager = InputManager::new();

    match command {
        Commands::Score {
            resume,
            output,
            detailed,
            save,
            no_color,
        } => {
            let format = resolve_format(output, &config)?;
            let document = load_resume(&mut input_manager, &resume).await?;

            let analysis = calculate_ats_score(document.as_ref());
            info!("ATS score for {}: {}/100", resume.display(), analysis.score);

            let report = ScoreReport::new(analysis, resume.display().to_string());
            let use_colors = config.output.color_output && !no_color && save.is_none();
            let formatter = formatter_for(&format, use_colors, detailed || config.output.detailed);
            let rendered = formatter.format_report(&report)?;

            match save {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    info!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Improve { resume, output } => {
            let format = resolve_format(output, &config)?;
            let document = load_resume(&mut input_manager, &resume).await?;

            let analysis = calculate_ats_score(document.as_ref());
            let report = ImprovementReport::from_analysis(&analysis);
            let formatter = formatter_for(&format, config.output.color_output, true);
            println!("{}", formatter.format_improvements(&report)?);
        }

        Commands::Keywords {
            resume,
            job,
            output,
            threshold,
        } => {
            let format = resolve_format(output, &config)?;
            cli::validate_file_extension(&job, JOB_EXTENSIONS)
                .map_err(|e| AtsError::InvalidInput(format!("Job description file: {}", e)))?;

            let document = load_resume(&mut input_manager, &resume).await?.unwrap_or_default();
            let job_text = input_manager.extract_text(&job).await?;

            let mut analyzer = KeywordAnalyzer::with_custom_keywords(config.keywords.extra_keywords.clone())?;
            analyzer.set_fuzzy_threshold(threshold.unwrap_or(config.keywords.fuzzy_threshold));

            let report = analyzer.match_job_description(&document, &job_text);
            info!(
                "Keyword coverage: {:.1}% ({} matched, {} missing)",
                report.coverage * 100.0,
                report.matched.len(),
                report.missing.len()
            );

            let formatter = formatter_for(&format, config.output.color_output, config.output.detailed);
            println!("{}", formatter.format_keywords(&report)?);
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| AtsError::Configuration(e.to_string()))?;
                println!("{}", content);
            }

            Some(ConfigAction::Path) => {
                let path = config_path.unwrap_or_else(Config::config_path);
                println!("{}", path.display());
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                match config_path {
                    Some(path) => default_config.save_to(&path)?,
                    None => default_config.save()?,
                }
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}
