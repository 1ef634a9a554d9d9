//! Renders every state of a button description to PNG files

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use button_engine::foundation::logging;
use button_engine::prelude::*;
use clap::{Arg, ArgAction, Command};

fn cli() -> Command {
    Command::new("panel_render")
        .about("Renders the states of a touch-panel button description to PNG images")
        .arg(
            Arg::new("object")
                .value_name("OBJECT_FILE")
                .help("Button description (.ron or .toml)")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("DIR")
                .help("Output directory for rendered states"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Application configuration (.ron or .toml)"),
        )
        .arg(
            Arg::new("assets")
                .short('a')
                .long("assets")
                .value_name("DIR")
                .help("Extra directory searched for bitmap files (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("prefix")
                .short('p')
                .long("prefix")
                .value_name("PREFIX")
                .help("Filename prefix for rendered images"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Default log filter when RUST_LOG is not set"),
        )
}

fn load_config(matches: &clap::ArgMatches) -> Result<ApplicationConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => ApplicationConfig::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path))?,
        None => ApplicationConfig::default(),
    };

    if let Some(dir) = matches.get_one::<String>("output") {
        config.output.output_dir = PathBuf::from(dir);
    }
    if let Some(prefix) = matches.get_one::<String>("prefix") {
        config.output.file_prefix = prefix.clone();
    }
    if let Some(level) = matches.get_one::<String>("log-level") {
        config.engine.log_level = level.clone();
    }
    if let Some(dirs) = matches.get_many::<String>("assets") {
        // Command line directories are searched first, in the order given
        for dir in dirs.rev() {
            config.assets = config.assets.with_search_path(dir);
        }
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn output_path(config: &OutputConfig, object: &ButtonObject, state: usize) -> PathBuf {
    let name = if object.name.is_empty() {
        format!("object{}", object.id)
    } else {
        object.name.replace(|c: char| !c.is_ascii_alphanumeric() && c != '-' && c != '_', "_")
    };
    config
        .output_dir
        .join(format!("{}{}_{}.png", config.file_prefix, name, state))
}

fn write_states(config: &OutputConfig, object: &ButtonObject, buffers: &[RasterBuffer]) -> Result<()> {
    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("Failed to create {}", config.output_dir.display()))?;

    for (state, buffer) in buffers.iter().enumerate() {
        let path = output_path(config, object, state);
        buffer
            .save(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("{}", path.display());
    }
    Ok(())
}

fn summarize(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    let errors = diagnostics.iter().filter(|d| d.severity() == Severity::Error).count();
    let warnings = diagnostics.iter().filter(|d| d.severity() == Severity::Warning).count();
    println!("{} diagnostic(s): {} error(s), {} warning(s)", diagnostics.len(), errors, warnings);
    for diagnostic in diagnostics.iter().filter(|d| d.severity() > Severity::Debug) {
        println!("  {}", diagnostic);
    }
}

fn run(object_path: &Path, config: &ApplicationConfig) -> Result<()> {
    let object = ButtonObject::load(object_path)
        .with_context(|| format!("Failed to load button description {}", object_path.display()))?;

    if object.states.is_empty() {
        bail!("Button '{}' has no states to render", object.name);
    }

    let compositor = Compositor::new(FileImageSource::new(&config.assets));
    let mut diagnostics = Vec::new();
    let buffers = compositor
        .render_button(&object, &mut diagnostics)
        .with_context(|| format!("Failed to render '{}'", object.name))?;

    log::info!("Rendered {} state(s) of '{}'", buffers.len(), object.name);
    write_states(&config.output, &object, &buffers)?;
    summarize(&diagnostics);
    Ok(())
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    let config = load_config(&matches)?;
    logging::init_with_level(&config.engine.log_level);

    let object_path = matches
        .get_one::<String>("object")
        .map(PathBuf::from)
        .context("OBJECT_FILE is required")?;

    run(&object_path, &config)
}
