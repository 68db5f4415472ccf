mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use family_hierarchy::adapters::outbound::console::StderrProgressReporter;
use family_hierarchy::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemUploadRepository,
};
use family_hierarchy::adapters::outbound::identity::ConfiguredIdentityProvider;
use family_hierarchy::adapters::outbound::ingest::CsvRelationParser;
use family_hierarchy::application::dto::{
    OutputFormat, ReportRequest, UploadRequest, DEFAULT_LEVELS,
};
use family_hierarchy::application::factories::{
    FormatterFactory, PresenterFactory, PresenterTarget,
};
use family_hierarchy::application::read_models::HierarchyReadModelBuilder;
use family_hierarchy::application::relation_store::RelationStore;
use family_hierarchy::application::use_cases::{GenerateReportUseCase, UploadRelationUseCase};
use family_hierarchy::shared::error::ExitCode;
use family_hierarchy::shared::Result;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process;

const DEFAULT_STORE_DIR: &str = ".family-hierarchy/uploads";

/// Settings after merging CLI arguments over the config file and defaults.
#[derive(Debug)]
struct Settings {
    up_levels: i64,
    down_levels: i64,
    format: OutputFormat,
    store_dir: PathBuf,
    persist_uploads: bool,
}

impl Settings {
    fn merge(args: &Args, config: &ConfigFile) -> Self {
        Self {
            up_levels: args.up.or(config.up_levels).unwrap_or(DEFAULT_LEVELS),
            down_levels: args.down.or(config.down_levels).unwrap_or(DEFAULT_LEVELS),
            format: args
                .format
                .or_else(|| config.output_format())
                .unwrap_or_default(),
            store_dir: args
                .store_dir
                .clone()
                .or_else(|| config.store_dir.as_deref().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_DIR)),
            persist_uploads: !args.no_store && config.persist_uploads.unwrap_or(true),
        }
    }
}

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\n{} {}", "Caused by:".yellow(), err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let settings = Settings::merge(&args, &config);

    let identity =
        ConfiguredIdentityProvider::from_sources(args.user.as_deref(), config.user.as_deref());

    // The request is validated before any file is touched.
    let request = ReportRequest::builder()
        .person_name(args.name.as_str())
        .up_levels(settings.up_levels)
        .down_levels(settings.down_levels)
        .build()?;

    let report_use_case =
        GenerateReportUseCase::new(identity.clone(), StderrProgressReporter::new());
    report_use_case.require_identity()?;

    let mut store = RelationStore::new();
    let upload_use_case = UploadRelationUseCase::new(
        FileSystemReader::new(),
        CsvRelationParser::new(),
        FileSystemUploadRepository::new(settings.store_dir.clone()),
        identity,
        StderrProgressReporter::new(),
    );
    upload_use_case.execute(
        UploadRequest::new(args.data.clone(), settings.persist_uploads),
        &mut store,
    )?;

    let response = report_use_case.execute(store.current(), request)?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let read_model = HierarchyReadModelBuilder::build(&response);
    let formatter = FormatterFactory::create(settings.format);
    let output = formatter.format(&read_model)?;

    let presenter = PresenterFactory::create(PresenterTarget::from_output_path(args.output));
    presenter.present(&output)?;

    Ok(())
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    if let Some(path) = args.config.as_deref() {
        let config = config::load_config_from_path(path)?;
        eprintln!("📄 Loaded config from: {}", path.display());
        return Ok(config);
    }

    let cwd = std::env::current_dir()?;
    match config::discover_config(&cwd)? {
        Some(config) => {
            eprintln!("📄 Auto-discovered config file: {}", config::CONFIG_FILENAME);
            Ok(config)
        }
        None => Ok(ConfigFile::default()),
    }
}
