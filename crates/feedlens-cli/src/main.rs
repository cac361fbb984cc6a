//! feedlens command line interface.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use feedlens_analysis::posts::count_category;
use feedlens_analysis::{plan, run_analysis, run_comparison};
use feedlens_providers::{detect_model_family, HttpProvider, ModelConfig, ProviderConfig};

mod export;

#[derive(Debug, Parser)]
#[command(name = "feedlens")]
#[command(about = "Instagram export analysis over pluggable model providers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the full analysis against the configured provider.
    Analyze {
        /// Path to the Instagram export JSON file.
        #[arg(long)]
        input: PathBuf,
        /// Comma-separated category list; auto-detected from the export when
        /// omitted.
        #[arg(long)]
        categories: Option<String>,
        /// Model id; defaults to FEEDLENS_MODEL.
        #[arg(long)]
        model: Option<String>,
        /// Write the result JSON here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Run the same analysis across several models and summarize.
    Compare {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        categories: Option<String>,
        /// Comma-separated model ids, one comparison arm each.
        #[arg(long)]
        models: String,
    },
    /// Count categories and print the sampling manifest. No provider call.
    Plan {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        categories: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            input,
            categories,
            model,
            output,
        } => {
            let data = export::load_export(&input)?;
            let categories = export::resolve_categories(&data, categories.as_deref());
            if categories.is_empty() {
                anyhow::bail!("no recognizable categories in {}", input.display());
            }

            let provider_config =
                ProviderConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
            let model = model.unwrap_or_else(|| provider_config.model.clone());
            let provider = HttpProvider::new(
                detect_model_family(&model),
                &provider_config.base_url,
                provider_config.api_key.clone(),
            );

            let result =
                run_analysis(&provider, &data, &categories, &ModelConfig::new(model)).await?;
            emit(&serde_json::to_string_pretty(&result)?, output.as_deref())?;
        }
        Commands::Compare {
            input,
            categories,
            models,
        } => {
            let data = export::load_export(&input)?;
            let categories = export::resolve_categories(&data, categories.as_deref());
            if categories.is_empty() {
                anyhow::bail!("no recognizable categories in {}", input.display());
            }

            let provider_config =
                ProviderConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
            let arms: Vec<(HttpProvider, ModelConfig)> = models
                .split(',')
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(|model| {
                    (
                        HttpProvider::new(
                            detect_model_family(model),
                            &provider_config.base_url,
                            provider_config.api_key.clone(),
                        ),
                        ModelConfig::new(model),
                    )
                })
                .collect();
            if arms.is_empty() {
                anyhow::bail!("--models must name at least one model");
            }

            let report = run_comparison(&arms, &data, &categories).await;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Plan { input, categories } => {
            let data = export::load_export(&input)?;
            let categories = export::resolve_categories(&data, categories.as_deref());

            let counts: BTreeMap<String, usize> = categories
                .iter()
                .map(|category| {
                    let section = data.get(category).unwrap_or(&serde_json::Value::Null);
                    (category.clone(), count_category(category, section))
                })
                .collect();
            let manifest = plan(&counts);
            println!("{}", serde_json::to_string_pretty(&manifest)?);
        }
    }

    Ok(())
}

fn emit(json: &str, output: Option<&std::path::Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .map_err(|e| anyhow::anyhow!("cannot write {}: {e}", path.display()))?;
            tracing::info!(path = %path.display(), "analysis written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
