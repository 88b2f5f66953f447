use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Args;
use swaggerbuddy_lib::{ApiClient, DeleteConfirmation, DeleteOutcome, CONFIRMATION_TEXT};

use super::fetch_failed;

#[derive(Args)]
pub struct DeleteArgs {
    /// Project ID
    pub id: String,

    /// Confirmation text; prompts on stdin when omitted
    #[arg(long)]
    pub confirm: Option<String>,
}

pub async fn run(args: &DeleteArgs, client: &ApiClient) -> Result<()> {
    let project = client
        .projects()
        .get_by_id(&args.id)
        .await
        .map_err(|e| fetch_failed("project", e))?;

    eprintln!(
        "This will permanently delete \"{}\" and all of its sections, endpoints and examples.",
        project.name
    );

    let mut dialog = DeleteConfirmation::new();
    dialog.open();
    let typed = match &args.confirm {
        Some(text) => text.clone(),
        None => prompt(&format!("Type {} to confirm: ", CONFIRMATION_TEXT))?,
    };
    dialog.set_input(&typed);

    match dialog.confirm(client, &project.id).await? {
        DeleteOutcome::Deleted => {
            eprintln!("Deleted project {} ({})", project.name, project.id);
            Ok(())
        }
        DeleteOutcome::NotConfirmed => {
            dialog.close();
            anyhow::bail!("Deletion cancelled: confirmation text did not match {}", CONFIRMATION_TEXT)
        }
    }
}

fn prompt(message: &str) -> Result<String> {
    let mut stderr = std::io::stderr();
    stderr.write_all(message.as_bytes())?;
    stderr.flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
