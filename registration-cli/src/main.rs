use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use registration::wizard::WizardStep;
use registration::{ApiClient, RegistrationBackend, RegistrationConfig, RegistrationDraft};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "registration", about = "Registration backend tools")]
struct Cli {
    /// Config file (defaults to ./registration.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Overrides `api.base_url`.
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lists registered users.
    Users,
    /// Checks a draft file against every step's field rules.
    Validate {
        /// JSON file holding a full registration draft.
        file: PathBuf,
    },
    /// Validates a draft file and submits it.
    Submit {
        file: PathBuf,
        /// Reuse the key of an earlier failed attempt.
        #[arg(long)]
        idempotency_key: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    tracing::debug!(base_url = %config.api.base_url, "configuration resolved");

    match &cli.command {
        Commands::Users => {
            let client = ApiClient::new(&config.api);
            let users = client
                .list_users()
                .await
                .context("Failed to fetch users")?;

            println!("👥 {} registered user(s)", users.len());
            for user in &users {
                println!(
                    "  - {} | {} | {} | notifications {} | theme {}",
                    user.display_name(),
                    user.occupation().unwrap_or("-"),
                    user.email().unwrap_or("-"),
                    if user.notifications_enabled() { "on" } else { "off" },
                    user.theme_label(),
                );
            }
        }
        Commands::Validate { file } => {
            let draft = read_draft(file)?;
            let problems = report_field_errors(&draft);
            if problems > 0 {
                bail!("{} field error(s) in {}", problems, file.display());
            }
            println!("✅ {} is valid", file.display());
        }
        Commands::Submit {
            file,
            idempotency_key,
        } => {
            let draft = read_draft(file)?;
            let problems = report_field_errors(&draft);
            if problems > 0 {
                bail!("Not submitting: {} field error(s)", problems);
            }

            let key = idempotency_key
                .clone()
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
            tracing::info!(%key, "submitting registration");

            let client = ApiClient::new(&config.api);
            client.register(&draft, &key).await.with_context(|| {
                format!("Registration failed. Retry with --idempotency-key {}", key)
            })?;
            println!("✅ Registration successful");
        }
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<RegistrationConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = RegistrationConfig::load_from(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            config.apply_overrides(|key| std::env::var(key).ok());
            config
        }
        None => RegistrationConfig::load(),
    };

    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.trim_end_matches('/').to_string();
    }
    Ok(config)
}

fn read_draft(path: &Path) -> Result<RegistrationDraft> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let draft = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a registration draft", path.display()))?;
    Ok(draft)
}

/// Prints every failing field and returns how many there were.
fn report_field_errors(draft: &RegistrationDraft) -> usize {
    let mut count = 0;
    for step in WizardStep::ALL {
        let errors = step.validate(draft);
        for error in errors.iter() {
            println!("  🔥 {} / {}: {}", step.title(), error.field, error.message);
        }
        count += errors.len();
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_sparse_draft_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(
            file.path(),
            r#"{"personalInfo":{"firstName":"Ada","lastName":"Lovelace","email":"ada@x.com"},
               "accountDetails":{"username":"ada","password":"Str0ng!Pwd"}}"#,
        )
        .unwrap();

        let draft = read_draft(file.path()).unwrap();
        assert_eq!(draft.preferences.theme, "dark");
        assert_eq!(report_field_errors(&draft), 0);
    }

    #[test]
    fn test_counts_errors_across_steps() {
        let mut draft = RegistrationDraft::default();
        draft.personal_info.email = "not-an-email".into();
        // firstName, lastName, email, username, password
        assert_eq!(report_field_errors(&draft), 5);
    }

    #[test]
    fn test_base_url_flag_wins() {
        let cli = Cli::parse_from(["registration", "--base-url", "http://localhost:4000/", "users"]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:4000");
    }
}
