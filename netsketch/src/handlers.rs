use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use colored::Colorize;
use netsketch_builder::catalog::DEVICE_CATEGORIES;
use netsketch_builder::{Connection, ConnectionList, filter_devices, require_template, template, template_names};
use netsketch_core::config::TABLES_FILE_NAME;
use netsketch_core::{
    DiagramFormat, Diagnostic, Extraction, Extractor, Graph, GraphRenderer, MermaidRenderer,
    PlantUmlRenderer, TablesConfig,
};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_DIR: &str = "~/.config/netsketch/";

/// Output formats accepted by `parse` and `build`: a diagram notation or JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Diagram(DiagramFormat),
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("json") {
            return Some(OutputFormat::Json);
        }
        DiagramFormat::from_str(s.trim()).map(OutputFormat::Diagram)
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Diagram(DiagramFormat::Mermaid)
    }
}

/// Title and note applied to PlantUML output
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub title: Option<String>,
    pub note: Option<String>,
}

// Helper functions

/// Expand a `~`-prefixed path
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Location of the user's tables file
pub fn default_tables_path() -> PathBuf {
    expand_path(DEFAULT_CONFIG_DIR).join(TABLES_FILE_NAME)
}

/// Use the prompt argument when given, otherwise read all of `input`
pub fn read_prompt(prompt: Option<&String>, input: &mut dyn Read) -> Result<String> {
    if let Some(prompt) = prompt {
        return Ok(prompt.clone());
    }
    let mut buffer = String::new();
    input
        .read_to_string(&mut buffer)
        .context("Failed to read prompt from stdin")?;
    Ok(buffer)
}

/// Pick the tables: an explicit file, else the user's tables file when it
/// exists, else the built-in tables
pub fn load_extractor(explicit: Option<&Path>, user_default: &Path) -> Result<Extractor> {
    let path = match explicit {
        Some(path) => Some(path),
        None if user_default.exists() => Some(user_default),
        None => None,
    };

    match path {
        Some(path) => {
            debug!("Using tables file {}", path.display());
            let config = TablesConfig::load(path)
                .with_context(|| format!("Failed to load tables file {}", path.display()))?;
            Extractor::from_config(config)
                .with_context(|| format!("Invalid tables in {}", path.display()))
        }
        None => Extractor::with_default_tables().context("Failed to build default tables"),
    }
}

/// Render a graph in a diagram format
pub fn render_graph(graph: &Graph, format: OutputFormat, options: &RenderOptions) -> Result<String> {
    match format {
        OutputFormat::Diagram(DiagramFormat::Mermaid) => Ok(MermaidRenderer::new().render(graph)),
        OutputFormat::Diagram(DiagramFormat::PlantUml) => {
            let mut renderer = PlantUmlRenderer::new();
            if let Some(title) = &options.title {
                renderer = renderer.with_title(title.clone());
            }
            if let Some(note) = &options.note {
                renderer = renderer.with_note(note.clone());
            }
            Ok(renderer.render(graph))
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(graph).context("Failed to serialize graph")
        }
    }
}

/// Render an extraction; JSON output includes provenance and diagnostics
pub fn render_extraction(
    extraction: &Extraction,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(extraction).context("Failed to serialize extraction")
        }
        _ => render_graph(&extraction.graph, format, options),
    }
}

/// Human-readable lines describing what the extractor could not do cleanly
pub fn describe_diagnostics(extraction: &Extraction) -> Vec<String> {
    let mut lines = Vec::new();

    if extraction.is_empty() {
        lines.push("No known devices found in the prompt".to_string());
    }

    for diagnostic in &extraction.diagnostics {
        match diagnostic {
            Diagnostic::UnresolvedPair { from, to, .. } => lines.push(format!(
                "Skipped connection between '{}' and '{}' (no known device on one side)",
                from, to
            )),
            Diagnostic::FallbackChain { nodes } => lines.push(format!(
                "No connector phrases found; guessed a chain: {}",
                nodes.join(" -> ")
            )),
        }
    }

    lines
}

/// Gather connections from an optional template plus explicit specs
pub fn collect_connections(template_name: Option<&str>, specs: &[String]) -> Result<ConnectionList> {
    let mut list = match template_name {
        Some(name) => require_template(name)?,
        None => ConnectionList::new(),
    };

    for spec in specs {
        let connection = Connection::parse(spec)?;
        list.add(connection)?;
    }

    if list.is_empty() {
        bail!("Please add at least one connection (--connection or --template)");
    }

    Ok(list)
}

pub fn format_template_listing() -> String {
    let mut out = String::new();
    for name in template_names() {
        out.push_str(&format!("{}\n", name));
        if let Some(list) = template(name) {
            for connection in list.iter() {
                out.push_str(&format!("  {}\n", connection));
            }
        }
    }
    out
}

pub fn format_device_listing(search: Option<&str>) -> String {
    let mut out = String::new();
    match search {
        Some(query) => {
            for device in filter_devices(query) {
                out.push_str(&format!("{}\n", device));
            }
        }
        None => {
            for (category, devices) in DEVICE_CATEGORIES {
                out.push_str(&format!("{}\n", category));
                for device in devices.iter() {
                    out.push_str(&format!("  {}\n", device));
                }
            }
        }
    }
    out
}

/// Outcome of writing the default tables file
#[derive(Debug, PartialEq, Eq)]
pub enum InitOutcome {
    Written(PathBuf),
    AlreadyExists(PathBuf),
}

/// Write the built-in tables into `dir`, refusing to overwrite unless forced
pub fn write_default_tables(dir: &Path, force: bool) -> Result<InitOutcome> {
    let path = dir.join(TABLES_FILE_NAME);
    if path.exists() && !force {
        return Ok(InitOutcome::AlreadyExists(path));
    }
    TablesConfig::default()
        .save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(InitOutcome::Written(path))
}

fn print_divider() {
    eprintln!("{}", "═".repeat(60).bright_blue().bold());
}

fn print_prompt(msg: &str) -> Result<String> {
    eprint!("{} ", msg.bright_cyan().bold());
    io::stderr().flush()?;
    let mut response = String::new();
    io::stdin().read_line(&mut response)?;
    Ok(response.trim().to_lowercase())
}

fn format_arg(args: &ArgMatches) -> OutputFormat {
    args.get_one::<String>("format")
        .and_then(|f| OutputFormat::from_str(f))
        .unwrap_or_default()
}

// Handler functions

pub fn handle_parse(args: &ArgMatches) -> Result<()> {
    let prompt = read_prompt(args.get_one::<String>("PROMPT"), &mut io::stdin())?;
    let tables = args.get_one::<PathBuf>("tables");
    let extractor = load_extractor(tables.map(PathBuf::as_path), &default_tables_path())?;

    let extraction = extractor.extract(&prompt);
    let options = RenderOptions {
        title: args.get_one::<String>("title").cloned(),
        note: if args.get_flag("with-note") {
            Some(prompt.trim().to_string())
        } else {
            None
        },
    };

    for line in describe_diagnostics(&extraction) {
        eprintln!("{} {}", "⚠".yellow().bold(), line.yellow());
    }

    println!("{}", render_extraction(&extraction, format_arg(args), &options)?);
    Ok(())
}

pub fn handle_build(args: &ArgMatches) -> Result<()> {
    let template_name = args.get_one::<String>("template").map(String::as_str);
    let specs: Vec<String> = args
        .get_many::<String>("connection")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let list = collect_connections(template_name, &specs)?;
    let options = RenderOptions {
        title: args.get_one::<String>("title").cloned(),
        note: args.get_one::<String>("note").cloned(),
    };

    let format = format_arg(args);
    let output = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&list).context("Failed to serialize connections")?
        }
        _ => render_graph(&list.to_graph(), format, &options)?,
    };

    println!("{}", output);
    Ok(())
}

pub fn handle_templates() -> Result<()> {
    print!("{}", format_template_listing());
    Ok(())
}

pub fn handle_devices(args: &ArgMatches) -> Result<()> {
    let search = args.get_one::<String>("search").map(String::as_str);
    let listing = format_device_listing(search);
    if listing.is_empty() {
        eprintln!("{} No devices match", "✗".red().bold());
    }
    print!("{}", listing);
    Ok(())
}

pub fn handle_init(args: &ArgMatches) -> Result<()> {
    print_divider();
    eprintln!("{}", "  NETSKETCH INITIALIZATION".bright_white().bold());
    print_divider();
    eprintln!();

    let dir = args
        .get_one::<String>("PATH")
        .map(|p| expand_path(p))
        .unwrap_or_else(|| expand_path(DEFAULT_CONFIG_DIR));
    let force = args.get_flag("force");

    eprintln!(
        "{} Target: {}",
        "→".blue(),
        dir.display().to_string().bright_white()
    );

    let path = match write_default_tables(&dir, force)? {
        InitOutcome::Written(path) => path,
        InitOutcome::AlreadyExists(path) => {
            eprintln!("{}", "⚠ WARNING".yellow().bold());
            eprintln!(
                "Tables file already exists: {}",
                path.display().to_string().bright_white()
            );
            let response = print_prompt("Do you want to overwrite it? [y/N]:")?;
            if response != "y" && response != "yes" {
                eprintln!("{} Initialization cancelled.", "✗".red().bold());
                return Ok(());
            }
            match write_default_tables(&dir, true)? {
                InitOutcome::Written(path) | InitOutcome::AlreadyExists(path) => path,
            }
        }
    };

    eprintln!(
        "{} Tables written: {}",
        "✓".green().bold(),
        path.display().to_string().bright_white()
    );
    eprintln!("Edit the file to add devices or connector phrases; `netsketch parse` picks it up automatically.");
    Ok(())
}
