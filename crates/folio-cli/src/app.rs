//! Folio CLI application.
//!
//! Loads configuration, installs logging, builds the content repository, and
//! dispatches commands to the handlers.

use crate::cli::{CliArgs, Command, ProjectsAction};
use crate::config::FolioConfig;
use crate::config_handlers;
use crate::handlers::{self, ListOptions};
use folio_content::ContentRepository;
use folio_core::Result;
use folio_core::traits::ConfigProvider;
use tracing_subscriber::EnvFilter;

// ============================================================================
// FolioCli
// ============================================================================

/// The CLI application: a name, a version, and the loaded configuration.
pub struct FolioCli {
    name: String,
    config: FolioConfig,
    version: String,
}

impl FolioCli {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = FolioConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }

    pub fn new(name: impl Into<String>, config: FolioConfig) -> Self {
        Self {
            name: name.into(),
            config,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    /// Initialise tracing-based logging on stderr.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity
    /// flags. Records from the `log` facade are captured as well.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // A subscriber may already be set (e.g. in tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    fn repository(&self) -> Result<ContentRepository> {
        let repo = ContentRepository::from_config(&self.config)?;
        tracing::debug!(root = %repo.root().display(), "Using content directory");
        Ok(repo)
    }

    /// Run the command and return what it prints.
    pub async fn execute(&self, args: CliArgs) -> Result<String> {
        match args.command {
            Some(Command::Projects(projects)) => {
                let repo = self.repository()?;
                match projects.command {
                    ProjectsAction::List {
                        page,
                        per_page,
                        tag,
                    } => {
                        let options = ListOptions {
                            page,
                            per_page: per_page.unwrap_or(self.config.content.per_page),
                            tag,
                        };
                        handlers::handle_list(&repo, &options).await
                    }
                    ProjectsAction::Featured => handlers::handle_featured(&repo).await,
                    ProjectsAction::Show { slug } => handlers::handle_show(&repo, &slug).await,
                    ProjectsAction::Tags => handlers::handle_tags(&repo).await,
                }
            }
            Some(Command::Palette { color, json }) => {
                let color = color.as_deref().unwrap_or(&self.config.palette.base_color);
                handlers::handle_palette(color, json)
            }
            Some(Command::Export { output }) => {
                let repo = self.repository()?;
                let path = self.config.export_path(output.as_deref())?;
                handlers::handle_export(&repo, &path).await
            }
            Some(Command::Config(config_cmd)) => {
                config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
            }
            Some(Command::Version) => Ok(format!("{} {}", self.name, self.version)),
            None => Ok(format!(
                "{} {} ({}): use --help for usage",
                self.name,
                self.version,
                self.config.project_name()
            )),
        }
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);
        let output = self.execute(args).await?;
        println!("{}", output.trim_end_matches('\n'));
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;
    use tempfile::TempDir;

    fn site(dir: &Path) -> FolioConfig {
        let content = dir.join("content").join("projects");
        std::fs::create_dir_all(&content).unwrap();
        std::fs::write(
            content.join("alpha.mdx"),
            "---\ntitle: Alpha\ndate: 2024-05-01\ntags: [rust]\nfeatured: true\n---\nHello",
        )
        .unwrap();
        std::fs::write(
            content.join("beta.mdx"),
            "---\ntitle: Beta\ndate: 2022-05-01\n---\n",
        )
        .unwrap();

        let mut config = FolioConfig {
            base_path: Some(dir.to_string_lossy().into_owned()),
            ..Default::default()
        };
        config.content.per_page = 1;
        config
    }

    async fn execute(cli: &FolioCli, argv: &[&str]) -> Result<String> {
        let mut full = vec!["folio"];
        full.extend_from_slice(argv);
        cli.execute(CliArgs::parse_from(full)).await
    }

    #[test]
    fn test_folio_cli_new() {
        let cli = FolioCli::new("folio", FolioConfig::default()).with_version("1.2.3");
        assert_eq!(cli.name, "folio");
        assert_eq!(cli.version, "1.2.3");
        assert_eq!(cli.config().project_name(), "folio");
    }

    #[tokio::test]
    async fn test_version_and_no_command() {
        let cli = FolioCli::new("folio", FolioConfig::default()).with_version("0.9.0");
        assert_eq!(execute(&cli, &["version"]).await.unwrap(), "folio 0.9.0");
        assert!(execute(&cli, &[]).await.unwrap().contains("--help"));
    }

    #[tokio::test]
    async fn test_projects_list_uses_configured_page_size() {
        let temp = TempDir::new().unwrap();
        let cli = FolioCli::new("folio", site(temp.path()));

        let out = execute(&cli, &["projects", "list"]).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["items"].as_array().unwrap().len(), 1);
        assert_eq!(value["items"][0]["slug"], "alpha");
        assert_eq!(value["has_next"], true);

        let out = execute(&cli, &["projects", "list", "--per-page", "5"])
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["items"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_projects_commands() {
        let temp = TempDir::new().unwrap();
        let cli = FolioCli::new("folio", site(temp.path()));

        let featured = execute(&cli, &["projects", "featured"]).await.unwrap();
        assert!(featured.contains("\"alpha\""));
        assert!(!featured.contains("\"beta\""));

        let shown = execute(&cli, &["projects", "show", "beta"]).await.unwrap();
        assert!(shown.contains("\"Beta\""));

        let tags = execute(&cli, &["projects", "tags"]).await.unwrap();
        assert!(tags.contains("\"rust\""));

        let err = execute(&cli, &["projects", "show", "gamma"])
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_missing_content_directory_lists_nothing() {
        let temp = TempDir::new().unwrap();
        let config = FolioConfig {
            base_path: Some(temp.path().to_string_lossy().into_owned()),
            ..Default::default()
        };
        let cli = FolioCli::new("folio", config);

        let out = execute(&cli, &["projects", "list"]).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["total"], 0);
    }

    #[tokio::test]
    async fn test_palette_default_and_explicit() {
        let mut config = FolioConfig::default();
        config.palette.base_color = "#ff0000".into();
        let cli = FolioCli::new("folio", config);

        let css = execute(&cli, &["palette"]).await.unwrap();
        assert!(css.contains("--primary-500: #ba2121;"));

        let css = execute(&cli, &["palette", "#3b82f6"]).await.unwrap();
        assert!(css.contains("--primary-500: #215bba;"));

        assert!(execute(&cli, &["palette", "nope"]).await.is_err());
    }

    #[tokio::test]
    async fn test_export_default_path() {
        let temp = TempDir::new().unwrap();
        let cli = FolioCli::new("folio", site(temp.path()));

        let message = execute(&cli, &["export"]).await.unwrap();
        assert!(message.starts_with("Wrote 2 projects"));
        assert!(temp.path().join("out/api/projects.json").exists());
    }

    #[tokio::test]
    async fn test_config_command_dispatch() {
        let cli = FolioCli::new("folio", FolioConfig::default());
        let out = execute(&cli, &["--config", "/explicit/config.toml", "config", "path"])
            .await
            .unwrap();
        assert_eq!(out, "/explicit/config.toml");
    }

    #[tokio::test]
    async fn test_run_prints() {
        let cli = FolioCli::new("folio", FolioConfig::default());
        let result = cli.run(CliArgs::parse_from(["folio", "version"])).await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        let cli = FolioCli::new("folio", FolioConfig::default());
        cli.init_logging(false, false);
        cli.init_logging(true, false);
        cli.init_logging(false, true);
    }

    #[test]
    fn test_from_args_with_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "project_name = \"from-file\"\n").unwrap();

        let args = CliArgs::parse_from(["folio", "--config", path.to_str().unwrap()]);
        let cli = FolioCli::from_args("folio", &args).unwrap();
        assert_eq!(cli.config().project_name(), "from-file");
    }
}
