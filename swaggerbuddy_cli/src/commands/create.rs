use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use swaggerbuddy_lib::validation::load_swagger_file;
use swaggerbuddy_lib::{ApiClient, UploadForm, UploadOutcome, UploadType};

use super::show::{self, ShowArgs};
use crate::output::OutputFormat;

#[derive(Args)]
pub struct CreateArgs {
    /// Project name
    #[arg(long)]
    pub name: String,

    /// Base URL of the documented API (e.g. https://api.example.com/v1)
    #[arg(long)]
    pub base_url: String,

    /// Swagger/OpenAPI document to upload (.json, .yaml, .yml, max 10MB)
    #[arg(long, conflicts_with = "url", required_unless_present = "url")]
    pub file: Option<PathBuf>,

    /// URL of a Swagger/OpenAPI document for the backend to fetch
    #[arg(long)]
    pub url: Option<String>,

    /// Print the new project ID instead of opening the project
    #[arg(long)]
    pub no_open: bool,
}

pub async fn run(args: &CreateArgs, client: &ApiClient, format: &OutputFormat) -> Result<()> {
    let mut form = UploadForm::new();
    form.set_project_name(&args.name);
    form.set_base_url(&args.base_url);

    match (&args.file, &args.url) {
        (Some(path), _) => {
            form.set_upload_type(UploadType::File);
            form.select_file(load_swagger_file(path)?)?;
        }
        (None, Some(url)) => {
            form.set_upload_type(UploadType::Url);
            form.set_swagger_url(url);
        }
        (None, None) => anyhow::bail!("Provide a Swagger document with --file or --url"),
    }
    form.validate()?;

    let pb = match form.upload_type() {
        UploadType::File => {
            let pb = ProgressBar::new(100);
            pb.set_style(ProgressStyle::with_template(
                "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>3}% {msg}",
            )?);
            pb.set_message("uploading...");
            pb
        }
        UploadType::Url => {
            let pb = ProgressBar::new_spinner();
            pb.set_message("fetching and processing Swagger document...");
            pb.enable_steady_tick(Duration::from_millis(120));
            pb
        }
    };

    let bar = pb.clone();
    let result = form
        .submit(client, move |percent| {
            bar.set_position(u64::from(percent));
            if percent >= 100 {
                bar.set_message("processing...");
            }
        })
        .await;

    let project = match result {
        Ok(project) => {
            pb.finish_with_message("done");
            project
        }
        Err(e) => {
            pb.abandon_with_message("failed");
            return Err(e.into());
        }
    };

    eprintln!(
        "Project created successfully! {} ({} endpoints)",
        project.name,
        project.endpoint_count()
    );

    let on_success = args.no_open.then_some(|id: &str| println!("{}", id));
    match UploadOutcome::resolve(&project.id, on_success) {
        UploadOutcome::Handled => Ok(()),
        UploadOutcome::Navigate { project_id, after } => {
            eprintln!("Opening project...");
            tokio::time::sleep(after).await;
            show::run(&ShowArgs::for_project(&project_id), client, format).await
        }
    }
}
