mod commands;
mod output;
mod xml_output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use swaggerbuddy_lib::config::API_URL_ENV;
use swaggerbuddy_lib::{ApiClient, Config};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "swagger-buddy")]
#[command(about = "Upload Swagger/OpenAPI documents and browse them as API projects")]
struct Cli {
    /// Output format: table, json, csv, markdown, xml
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Backend base URL (overrides SWAGGER_BUDDY_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a project from a Swagger file or URL
    Create(commands::create::CreateArgs),
    /// List projects
    Projects(commands::projects::ProjectsArgs),
    /// Browse a project's sections and endpoints
    Show(commands::show::ShowArgs),
    /// Delete a project
    Delete(commands::delete::DeleteArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("swaggerbuddy=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        "xml" => OutputFormat::Xml,
        _ => OutputFormat::Table,
    };

    let config = Config::resolve(cli.api_url.as_deref(), std::env::var(API_URL_ENV).ok());
    tracing::debug!("Using backend {}", config.api_url);
    let client = ApiClient::new(&config)?;

    match &cli.command {
        Commands::Create(args) => commands::create::run(args, &client, &format).await?,
        Commands::Projects(args) => commands::projects::run(args, &client, &format).await?,
        Commands::Show(args) => commands::show::run(args, &client, &format).await?,
        Commands::Delete(args) => commands::delete::run(args, &client).await?,
    }

    Ok(())
}
