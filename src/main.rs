use cardiorisk::{cli, client, config, error, export, prompt, render, session};
use cardiorisk_common::{BatchTable, FormState, PredictController, SubmissionRecord, Verdict};
use clap::Parser;
use cli::{Cli, Commands, OutputFormat};
use client::PredictionClient;
use config::Config;
use error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;
    let api_url = config.resolve_api_url(cli.api_url.as_deref());

    match cli.command {
        Commands::Predict { fields, input, interactive, format } => {
            let mut form = match input {
                Some(path) => {
                    let content = std::fs::read_to_string(&path)?;
                    let record: SubmissionRecord = serde_json::from_str(&content)?;
                    FormState::from_record(record)?
                }
                None => FormState::new(),
            };
            for pair in &fields {
                form.set_pair(pair)?;
            }
            if interactive {
                prompt::prompt_missing(&mut form)?;
            }

            let client = PredictionClient::new(api_url);
            let mut controller = PredictController::new();

            let pb = spinner("Processing...");
            let outcome = session::run_manual(&mut controller, &client, &form).await;
            pb.finish_and_clear();
            let result = outcome?;

            match format {
                OutputFormat::Text => print!("{}", render::render_verdict(&Verdict::from_result(&result))),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            }
        }

        Commands::Batch { file, export: export_path, format } => {
            let upload = session::BatchUpload::from_path(&file)?;
            println!("{} ({})", upload.candidate.name, upload.candidate.status_line());

            let client = PredictionClient::new(api_url);
            let mut controller = PredictController::new();
            controller.switch_tab(cardiorisk_common::Mode::Batch);

            let pb = spinner("Processing large dataset...");
            let outcome = session::run_batch(&mut controller, &client, upload).await;
            pb.finish_and_clear();
            let rows = outcome?;

            match format {
                OutputFormat::Text => print!("{}", render::render_batch_table(&BatchTable::build(&rows))),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
            }

            if let Some(output) = export_path {
                let path = export::results_path(&output, chrono::Local::now());
                export::write_results(&rows, &path)?;
                println!("✔ 結果を保存: {}", path.display());
            }
        }

        Commands::Template { output } => {
            export::write_template(&output)?;
            println!("✔ テンプレートを作成: {}", output.display());
        }

        Commands::Fields => {
            print!("{}", render::render_fields());
        }

        Commands::Health => {
            let client = PredictionClient::new(api_url);
            match client.health().await {
                Ok(body) => println!("✔ {} : {}", client.base_url(), body),
                Err(e) => {
                    tracing::error!(error = %e, "health check failed");
                    println!("✘ {} に接続できません", client.base_url());
                }
            }
        }

        Commands::Config { set_api_url, show } => {
            let mut config = config;

            if let Some(url) = set_api_url {
                config.set_api_url(url)?;
                println!("✔ APIのURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  ファイル: {}", Config::config_path()?.display());
                println!("  API URL: {}", config.api_url.as_deref().unwrap_or("未設定"));
                println!("  使用するURL: {}", config.resolve_api_url(cli.api_url.as_deref()));
            }
        }
    }

    Ok(())
}
