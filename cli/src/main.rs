mod output;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use log::{debug, error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use docsearch::config::{default_config_path, load_config};
use docsearch::{
    ClientConfig, DocsearchError, FileType, FilterPatch, HttpDocumentService, SearchController,
    UploadRequest,
};

#[derive(Parser, Debug)]
#[command(name = "docsearch", author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// API base URL, including the /api prefix
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List documents, optionally filtered
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Search documents
    Search {
        query: String,
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Show query suggestions for a prefix
    Suggest { prefix: String },
    /// Upload a document
    Upload {
        path: PathBuf,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        team: Option<String>,
        #[arg(long)]
        project: Option<String>,
    },
    /// Show one document
    Show { id: i64 },
    /// Recently accessed documents
    Recent,
    /// Document and search statistics
    Stats,
}

#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Team id
    #[arg(long)]
    team: Option<String>,
    /// Project id
    #[arg(long)]
    project: Option<String>,
    /// PDF, DOCX, PPTX, XLSX, TXT, MD, IMAGE or OTHER
    #[arg(long)]
    file_type: Option<FileType>,
    /// Topic id
    #[arg(long)]
    topic: Option<String>,
}

impl FilterArgs {
    fn to_patch(&self) -> FilterPatch {
        let mut patch = FilterPatch::new();
        if let Some(team) = &self.team {
            patch = patch.team(team.as_str());
        }
        if let Some(project) = &self.project {
            patch = patch.project(project.as_str());
        }
        if let Some(file_type) = self.file_type {
            patch = patch.file_type(file_type);
        }
        if let Some(topic) = &self.topic {
            patch = patch.topic(topic.as_str());
        }
        patch
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr),
    );

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Logging was already initialized");
    }
    if let Err(e) = tracing_log::LogTracer::init() {
        eprintln!("Failed to bridge log records: {}", e);
    }
}

/// `--config`, else the default path if it exists, else built-in defaults;
/// then the environment, then `--api-url`.
fn resolve_config(cli: &Cli) -> Result<ClientConfig, DocsearchError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => {
                debug!("Loading config from {:?}", path);
                load_config(&path)?
            }
            None => ClientConfig::default(),
        },
    };

    config.apply_env_overrides();
    if let Some(url) = &cli.api_url {
        config.api_base_url = url.clone();
    }
    config.validate()?;
    Ok(config)
}

async fn run(cli: Cli) -> Result<ExitCode, DocsearchError> {
    let config = resolve_config(&cli)?;
    let service = HttpDocumentService::new(&config)?;
    let controller = SearchController::new(Arc::new(service), config);

    if !controller.connect().await {
        if let Some(message) = controller.snapshot().error {
            eprintln!("{}", message);
        }
        return Ok(ExitCode::FAILURE);
    }

    let json = cli.json;
    match cli.command {
        Command::List { filters } => {
            let patch = filters.to_patch();
            if !patch.is_empty() {
                controller.apply_filters(patch).await;
            }
            output::documents(&controller.snapshot().displayed_documents, json);
        }
        Command::Search { query, filters } => {
            let patch = filters.to_patch();
            if !patch.is_empty() {
                controller.apply_filters(patch).await;
            }
            controller.search(&query).await;
            let state = controller.snapshot();
            if let Some(message) = state.error {
                eprintln!("{}", message);
                return Ok(ExitCode::FAILURE);
            }
            output::documents(&state.displayed_documents, json);
        }
        Command::Suggest { prefix } => {
            controller.get_suggestions(&prefix).await;
            output::suggestions(&controller.snapshot().suggestions, json);
        }
        Command::Upload {
            path,
            title,
            description,
            team,
            project,
        } => {
            let mut request = UploadRequest::from_path(&path).await?;
            if let Some(title) = title {
                request = request.title(title);
            }
            if let Some(description) = description {
                request = request.description(description);
            }
            if let Some(team) = team {
                request = request.team(team);
            }
            if let Some(project) = project {
                request = request.project(project);
            }

            match controller.upload(request).await {
                Ok(document) => {
                    info!("Uploaded {:?}", path);
                    output::document_detail(&document, json);
                }
                Err(e) => {
                    debug!("Upload error: {}", e);
                    if let Some(message) = controller.snapshot().error {
                        eprintln!("{}", message);
                    }
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::Show { id } => {
            let document = controller.document(id).await?;
            output::document_detail(&document, json);
        }
        Command::Recent => {
            let documents = controller.recent_documents().await?;
            output::documents(&documents, json);
        }
        Command::Stats => {
            let state = controller.snapshot();
            output::stats(state.stats.as_ref(), state.search_stats.as_ref(), json);
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
