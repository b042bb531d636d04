//! Command-line interface
//!
//! - `status`: platform reachability and the online indicator
//! - `health`: backend health summary
//! - `watch`: keep polling until interrupted, optionally serving `/dashboard`
//! - `nvidia`: GPU and vendor service readiness
//! - `github`, `vercel`: list and create records
//! - `deploy`: walk through the deployment steps

pub mod output;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dashboard_api::{EnvVar, Framework, GITHUB_FRAMEWORKS, VERCEL_FRAMEWORKS};

use crate::app::{self, AppOptions};
use crate::app::run::await_shutdown_signal;
use crate::deploy::{DeploymentCenter, DeploymentStep, QuickDeployPreset, StepStatus};
use crate::http::{BackendApi, HttpClient};
use crate::panels::{GithubPanel, NvidiaPanel, VercelPanel};
use crate::render::{availability_badge, connection_badge, live_badge, overview, status_badge};
use crate::resource::{EnvField, GithubRepositories, VercelProjects};
use crate::state::{status_store, Notifier};
use crate::storage::{Settings, StorageLayout};
use crate::workers::poller;

use output::{heading, paint, row, step_line};

/// CLI arguments structure
#[derive(Parser, Debug)]
#[command(name = "omnidash")]
#[command(author, version, about = "Status dashboard for the OmniAI platform", long_about = None)]
pub struct Cli {
    /// Path to the settings file (default: ~/.omnidash/settings.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Backend base URL, overrides the settings file
    #[arg(long, env = "OMNIDASH_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Override log level
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show platform reachability
    Status,

    /// Show the backend health summary
    Health,

    /// Poll continuously until Ctrl+C
    Watch {
        /// Serve the dashboard snapshot over HTTP
        #[arg(long)]
        serve: bool,

        /// Port for the local server, implies --serve
        #[arg(long)]
        port: Option<u16>,
    },

    /// Show GPU and vendor service readiness
    Nvidia,

    /// GitHub repositories
    #[command(subcommand)]
    Github(GithubCommands),

    /// Vercel projects
    #[command(subcommand)]
    Vercel(VercelCommands),

    /// Run the deployment steps for a project
    Deploy {
        #[arg(long)]
        project_name: String,

        /// Quick-deploy preset: nextjs, react, svelte or python
        #[arg(long)]
        preset: Option<String>,

        #[arg(long)]
        repository: Option<String>,

        #[arg(long)]
        build_command: Option<String>,

        #[arg(long)]
        output_directory: Option<String>,

        /// Create the Vercel project once the steps complete
        #[arg(long)]
        create: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum GithubCommands {
    /// List repositories
    Repos,

    /// Create a repository
    Create {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long)]
        private: bool,

        #[arg(long, default_value = "nextjs")]
        framework: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum VercelCommands {
    /// List projects
    Projects,

    /// Create a project
    Create {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "nextjs")]
        framework: String,

        #[arg(long, default_value = "")]
        git_repo: String,

        /// Environment variable as KEY=VALUE, repeatable
        #[arg(long = "env", value_parser = parse_env_var)]
        env: Vec<EnvVar>,
    },

    /// Deploy an existing project
    Deploy {
        /// Project ID
        id: String,
    },
}

fn parse_env_var(raw: &str) -> Result<EnvVar, String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok(EnvVar::new(key.trim(), value)),
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

impl Cli {
    /// Directory for rotated log files.
    ///
    /// The configured directory wins; `watch` otherwise logs under the storage
    /// layout, one-shot commands only log to stderr.
    pub fn log_dir(&self, settings: &Settings, layout: &StorageLayout) -> Option<PathBuf> {
        settings.log_dir.as_ref().map(PathBuf::from).or_else(|| {
            matches!(self.command, Commands::Watch { .. }).then(|| layout.logs_dir())
        })
    }
}

/// Run the selected subcommand
pub async fn run_command(cli: &Cli, settings: &Settings) -> Result<()> {
    match &cli.command {
        Commands::Status => cmd_status(create_api(settings)?).await,
        Commands::Health => cmd_health(create_api(settings)?).await,
        Commands::Watch { serve, port } => cmd_watch(settings, *serve, *port).await,
        Commands::Nvidia => cmd_nvidia(create_api(settings)?).await,
        Commands::Github(GithubCommands::Repos) => cmd_github_repos(create_api(settings)?).await,
        Commands::Github(GithubCommands::Create {
            name,
            description,
            private,
            framework,
        }) => {
            cmd_github_create(create_api(settings)?, name, description, *private, framework).await
        }
        Commands::Vercel(VercelCommands::Projects) => {
            cmd_vercel_projects(create_api(settings)?).await
        }
        Commands::Vercel(VercelCommands::Create {
            name,
            framework,
            git_repo,
            env,
        }) => cmd_vercel_create(create_api(settings)?, name, framework, git_repo, env).await,
        Commands::Vercel(VercelCommands::Deploy { id }) => {
            cmd_vercel_deploy(create_api(settings)?, id).await
        }
        Commands::Deploy {
            project_name,
            preset,
            repository,
            build_command,
            output_directory,
            create,
        } => {
            let args = DeployArgs {
                project_name,
                preset: preset.as_deref(),
                repository: repository.as_deref(),
                build_command: build_command.as_deref(),
                output_directory: output_directory.as_deref(),
                create: *create,
            };
            cmd_deploy(create_api(settings)?, args).await
        }
    }
}

fn create_api(settings: &Settings) -> Result<Arc<dyn BackendApi>> {
    let client = HttpClient::new(&settings.backend.base_url, settings.backend.request_timeout())
        .context("Failed to create backend client")?;
    Ok(Arc::new(client))
}

async fn cmd_status(api: Arc<dyn BackendApi>) -> Result<()> {
    let (writer, view) = status_store();
    let notifier = Notifier::default();
    let result = poller::poll_once(api.as_ref(), &writer, &notifier).await;

    let snapshot = view.snapshot();
    if snapshot.platform.is_none() {
        return result.context("Failed to fetch platform status");
    }

    let overview = overview(&snapshot);
    heading("OmniAI Platform");
    println!("  {:18} {}", "Platform", paint(&overview.indicator));
    println!();
    println!("Integrations:");
    for integration in &overview.integrations {
        row(&integration.name, &integration.badge);
    }
    if let Some(platform) = &snapshot.platform {
        println!();
        println!("Core:");
        row("backend", &connection_badge(platform.backend));
        row("middleware", &connection_badge(platform.middleware));
    }
    println!();
    Ok(())
}

async fn cmd_health(api: Arc<dyn BackendApi>) -> Result<()> {
    let health = api.health().await.context("Failed to fetch backend health")?;

    heading("Backend Health");
    println!("  {:18} {}", "Status", paint(&status_badge(&health.status)));
    if !health.services.is_empty() {
        println!();
        println!("Services:");
        for (name, state) in &health.services {
            row(name, &status_badge(state));
        }
    }
    println!();
    Ok(())
}

fn watch_options(settings: &Settings, serve: bool, port: Option<u16>) -> AppOptions {
    let mut options = AppOptions::from_settings(settings);
    options.enable_server = options.enable_server || serve || port.is_some();
    if let Some(port) = port {
        options.server.port = port;
    }
    options
}

async fn cmd_watch(settings: &Settings, serve: bool, port: Option<u16>) -> Result<()> {
    let options = watch_options(settings, serve, port);

    println!(
        "Watching {} every {:?} (Ctrl+C to stop)",
        options.backend_base_url, options.poller.interval
    );
    if options.enable_server {
        println!("Dashboard at http://{}/dashboard", options.server.addr());
    }

    app::run(options, await_shutdown_signal())
        .await
        .context("Dashboard stopped with an error")
}

async fn cmd_nvidia(api: Arc<dyn BackendApi>) -> Result<()> {
    let panel = NvidiaPanel::new(api, Notifier::default());
    panel
        .refresh()
        .await
        .context("Failed to fetch vendor status")?;

    heading("NVIDIA");
    if let Some(gpu) = panel.gpu_summary() {
        println!("  {:18} {}", "GPU", paint(&gpu.availability));
        println!("  {:18} {}", "Name", gpu.name);
        println!("  {:18} {}", "Memory", gpu.memory);
    }
    println!();
    println!("Services:");
    for service in panel.service_rows() {
        println!(
            "  {:18} {:16} {}",
            service.name,
            paint(&service.badge),
            service.action.dimmed()
        );
        println!("    {}", service.description.dimmed());
    }
    println!();
    Ok(())
}

async fn cmd_github_repos(api: Arc<dyn BackendApi>) -> Result<()> {
    let panel = GithubPanel::new(GithubRepositories::new(api), Notifier::default());
    panel.mount().await.context("Failed to load GitHub status")?;

    heading("GitHub");
    println!("  {:18} {}", "Account", paint(&connection_badge(panel.connected())));
    if !panel.connected() {
        if let Some(error) = panel.connection().and_then(|c| c.error) {
            println!("  {}", error.dimmed());
        }
        println!();
        return Ok(());
    }

    let repos = panel.records();
    println!();
    if repos.is_empty() {
        println!("No repositories found.");
    }
    for repo in &repos {
        let visibility = if repo.private { "private" } else { "public" };
        println!(
            "  {:30} {:8} {:10} {:>5}*",
            repo.name.bold(),
            visibility,
            repo.branch(),
            repo.stars()
        );
        if let Some(description) = repo.description.as_deref().filter(|d| !d.is_empty()) {
            println!("    {}", description.dimmed());
        }
    }
    println!();
    Ok(())
}

async fn cmd_github_create(
    api: Arc<dyn BackendApi>,
    name: &str,
    description: &str,
    private: bool,
    framework: &str,
) -> Result<()> {
    if Framework::find(GITHUB_FRAMEWORKS, framework).is_none() {
        bail!("Unknown framework '{}'", framework);
    }

    let panel = GithubPanel::new(GithubRepositories::new(api), Notifier::default());
    panel.edit_draft(|draft| {
        draft.name = name.to_string();
        draft.description = description.to_string();
        draft.private = private;
        draft.framework = framework.to_string();
    });

    let repo = panel.submit().await.context("Failed to create repository")?;
    println!("{} Created repository {}", "[OK]".green(), repo.name.bold());
    if let Some(url) = &repo.html_url {
        println!("     {}", url);
    }
    Ok(())
}

async fn cmd_vercel_projects(api: Arc<dyn BackendApi>) -> Result<()> {
    let panel = VercelPanel::new(VercelProjects::new(api), Notifier::default());
    panel.mount().await.context("Failed to load Vercel status")?;

    heading("Vercel");
    println!("  {:18} {}", "Account", paint(&connection_badge(panel.connected())));
    if !panel.connected() {
        if let Some(error) = panel.connection().and_then(|c| c.error) {
            println!("  {}", error.dimmed());
        }
        println!();
        return Ok(());
    }

    let projects = panel.records();
    println!();
    if projects.is_empty() {
        println!("No projects found.");
    }
    for project in &projects {
        println!(
            "  {:24} {:28} {:10} {}",
            project.id.as_str().dimmed(),
            project.name.bold(),
            project.framework.as_deref().unwrap_or("-"),
            paint(&live_badge(project.is_live()))
        );
        if let Some(url) = project.url.as_deref().filter(|u| !u.is_empty()) {
            println!("    https://{}", url.trim_start_matches("https://"));
        }
    }
    println!();
    Ok(())
}

async fn cmd_vercel_create(
    api: Arc<dyn BackendApi>,
    name: &str,
    framework: &str,
    git_repo: &str,
    env: &[EnvVar],
) -> Result<()> {
    if Framework::find(VERCEL_FRAMEWORKS, framework).is_none() {
        bail!("Unknown framework '{}'", framework);
    }

    let panel = VercelPanel::new(VercelProjects::new(api), Notifier::default());
    panel.edit_draft(|draft| {
        draft.name = name.to_string();
        draft.framework = framework.to_string();
        draft.git_repo = git_repo.to_string();
    });
    for (index, var) in env.iter().enumerate() {
        if index > 0 {
            panel.add_env_var();
        }
        panel.update_env_var(index, EnvField::Key, var.key.clone());
        panel.update_env_var(index, EnvField::Value, var.value.clone());
    }

    let project = panel.submit().await.context("Failed to create project")?;
    println!("{} Created project {} ({})", "[OK]".green(), project.name.bold(), project.id);
    Ok(())
}

async fn cmd_vercel_deploy(api: Arc<dyn BackendApi>, id: &str) -> Result<()> {
    let panel = VercelPanel::new(VercelProjects::new(api), Notifier::default());
    let deployment = panel
        .deploy(id)
        .await
        .with_context(|| format!("Failed to deploy project {}", id))?;

    println!("{} Deployment triggered for {}", "[OK]".green(), id);
    if !deployment.id.is_empty() {
        println!("  {:12} {}", "Deployment", deployment.id);
    }
    if let Some(status) = &deployment.status {
        println!("  {:12} {}", "Status", paint(&status_badge(status)));
    }
    if let Some(url) = &deployment.url {
        println!("  {:12} {}", "URL", url);
    }
    Ok(())
}

struct DeployArgs<'a> {
    project_name: &'a str,
    preset: Option<&'a str>,
    repository: Option<&'a str>,
    build_command: Option<&'a str>,
    output_directory: Option<&'a str>,
    create: bool,
}

async fn cmd_deploy(api: Arc<dyn BackendApi>, args: DeployArgs<'_>) -> Result<()> {
    let mut center = DeploymentCenter::new(VercelProjects::new(api), Notifier::default());

    if let Some(key) = args.preset {
        let preset = QuickDeployPreset::find(key)
            .with_context(|| format!("Unknown preset '{}'", key))?;
        center.apply_preset(preset);
    }
    {
        let draft = center.draft_mut();
        draft.project_name = args.project_name.to_string();
        if let Some(repository) = args.repository {
            draft.repository = repository.to_string();
        }
        if let Some(command) = args.build_command {
            draft.build_command = command.to_string();
        }
        if let Some(dir) = args.output_directory {
            draft.output_directory = dir.to_string();
        }
    }

    let draft = center.draft().clone();
    heading(&format!("Deploying {}", draft.project_name));
    println!("  {:18} {}", "Framework", draft.framework);
    println!("  {:18} {}", "Build command", or_dash(&draft.build_command));
    println!("  {:18} {}", "Output directory", or_dash(&draft.output_directory));
    println!();

    let mut steps = center.start(tokio::time::sleep)?;
    loop {
        let current = *steps.borrow_and_update();
        if let Some(step) = current {
            println!("{}", step_line(step, StepStatus::Active));
            if step == DeploymentStep::Complete {
                break;
            }
        }
        if steps.changed().await.is_err() {
            break;
        }
    }

    println!();
    for (step, status) in center.steps() {
        println!("{}", step_line(step, status));
    }
    println!();

    if args.create {
        let project = center.create_project().await.context("Failed to create project")?;
        println!(
            "{} Created project {} ({})",
            "[OK]".green(),
            project.name.bold(),
            project.id
        );
        println!("  {:18} {}", "Status", paint(&availability_badge(true)));
    }
    Ok(())
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
