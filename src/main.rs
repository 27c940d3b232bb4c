use clap::Parser;
use kloni::app::render;
use kloni::config::toml_config::TomlConfig;
use kloni::utils::logger;
use kloni::{CliConfig, CloneForm, CloneOutcome, Command, Dashboard, DashError, FormState, OutputFormat, Settings};
use std::time::Instant;

fn load_settings(cli: &CliConfig, file: Option<&TomlConfig>) -> Result<Settings, DashError> {
    let mut settings = file.map(Settings::from_toml).unwrap_or_default();
    settings.apply_env()?;
    cli.apply_overrides(&mut settings);
    Ok(settings)
}

async fn run(cli: &CliConfig, file: Option<&TomlConfig>) -> Result<(), DashError> {
    let settings = load_settings(cli, file)?;
    let dashboard = Dashboard::from_settings(&settings)?;

    match &cli.command {
        Command::Search { sku, format } => {
            let result = dashboard.search(sku).await?;
            let output = match format {
                OutputFormat::Table => render::render_table(&result),
                OutputFormat::Csv => render::render_csv(&result)?,
                OutputFormat::Json => render::render_json(&result)?,
            };
            print!("{}", output);
        }
        Command::Clone {
            root_id,
            sku,
            titles,
        } => {
            let form = CloneForm::with_titles(root_id.as_str(), sku.as_str(), titles.iter().cloned());
            let report = dashboard.submit_clone(FormState::default(), &form).await?;

            match report.outcome {
                CloneOutcome::Redirect { location, .. } => {
                    println!("✅ {} clone(s) requested. Redirecting to {}", form.len(), location);
                    if let Some(result) = report.refreshed {
                        print!("{}", render::render_table(&result));
                    }
                }
                CloneOutcome::Failed { state, banner } => {
                    eprintln!("❌ {}", banner.message);
                    eprintln!("   {} (tentativas falhas: {})", banner.detail(), state.fails);
                    tracing::debug!(
                        "Banner visible for another {:?}",
                        banner.remaining(Instant::now())
                    );
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = CliConfig::parse();

    // parsed before the logger starts so [logging] can shape it
    let file = match cli.config.as_ref().map(TomlConfig::from_file).transpose() {
        Ok(file) => file,
        Err(e) => {
            eprintln!("❌ {}: {}", e.user_friendly_message(), e);
            std::process::exit(e.exit_code());
        }
    };

    let verbose = cli.verbose || file.as_ref().is_some_and(|f| f.verbose());
    if cli.json_logs || file.as_ref().is_some_and(|f| f.json_logs()) {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting kloni CLI");
    if let Some(path) = &cli.config {
        tracing::debug!("Loaded configuration from {}", path.display());
    }
    if verbose {
        tracing::debug!("CLI command: {:?}", cli.command);
    }

    if let Err(e) = run(&cli, file.as_ref()).await {
        tracing::error!(
            "❌ {} (Kind: {:?}, Severity: {:?})",
            e,
            e.kind(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(e.exit_code());
    }
}
