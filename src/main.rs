use clap::Parser;
use resume_match::config::cli::pick_file;
use resume_match::core::ConfigProvider;
use resume_match::utils::{logger, render, validation::Validate};
use resume_match::{CliConfig, FormSession, LocalStorage, SubmissionEngine, WebhookAnalyzer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting resume-match CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    let mut session = FormSession::new();

    match pick_file(&config.resume) {
        Ok(candidate) => {
            if !session.select_file(candidate) {
                let message = session.error().unwrap_or("Invalid resume file");
                eprintln!("❌ {}", message);
                std::process::exit(2);
            }
        }
        Err(e) => {
            tracing::error!("❌ Could not read resume file: {}", e);
            eprintln!("❌ Could not read resume file: {}", config.resume);
            std::process::exit(e.exit_code());
        }
    }
    session.set_job_description(config.job_description.clone());

    let storage = LocalStorage::new(config.output_path().to_string());
    let analyzer = WebhookAnalyzer::new(config.webhook_url().to_string());
    let engine = SubmissionEngine::new(storage, analyzer);

    engine.submit(&mut session).await;

    match session.result() {
        Some(result) => {
            tracing::info!("✅ Analysis completed successfully!");
            println!("✅ Analysis complete!");
            println!("{}", render::render_result(result));

            if config.save {
                match engine.save_report(result).await {
                    Ok(name) => {
                        println!("📁 Report saved to: {}/{}", config.output_path(), name);
                    }
                    Err(e) => {
                        tracing::error!("❌ Failed to save report: {}", e);
                        eprintln!("❌ Failed to save report: {}", e);
                    }
                }
            }
        }
        None => {
            let message = session
                .error()
                .unwrap_or("Failed to analyze resume. Please try again.");
            tracing::error!("❌ Submission failed: {}", message);
            eprintln!("❌ {}", message);
            std::process::exit(1);
        }
    }

    Ok(())
}
