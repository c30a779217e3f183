//! Slidepress CLI
//!
//! Usage:
//!   slidepress [OPTIONS] <COMMAND>
//!
//! Commands:
//!   new           Create an empty presentation
//!   list          List stored presentations
//!   patch         Apply a change batch (JSON file or stdin)
//!   add-slide     Append or insert a default slide
//!   remove-slide  Remove a slide
//!   set-image     Attach an image file to a slide field
//!   render        Render a presentation to HTML
//!   catalog       List templates, transitions or effects
//!
//! Options:
//!   -c, --config <FILE>  Configuration file (TOML format)
//!   -h, --help           Print help

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use slidepress::{
    Catalog, ChangeBatch, ChangeRecord, Config, FieldChange, File, FileStore, RenderConfig, Studio,
};

#[derive(Parser)]
#[command(name = "slidepress")]
#[command(about = "Structured slide decks rendered to standalone HTML")]
struct Cli {
    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create an empty presentation and print its identifier
    New {
        #[arg(short, long)]
        title: Option<String>,
    },
    /// List stored presentations
    List,
    /// Apply a change batch read from a JSON file, or stdin with `-`
    Patch { batch: PathBuf },
    /// Add a default slide and print its identifier
    AddSlide {
        id: String,
        #[arg(short, long)]
        position: Option<usize>,
    },
    /// Remove a slide
    RemoveSlide { id: String, slide_id: String },
    /// Attach an image file to a template field or the slide background
    SetImage {
        id: String,
        slide_id: String,
        /// Image file to embed
        image: PathBuf,
        /// Target field name
        #[arg(short, long, default_value = "image")]
        field: String,
        /// Mime type; guessed from the extension when omitted
        #[arg(short, long)]
        mime: Option<String>,
    },
    /// Render a presentation to HTML
    Render {
        id: String,
        /// Output file (stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List catalog entries
    Catalog { kind: CatalogKind },
}

#[derive(Clone, Copy, ValueEnum)]
enum CatalogKind {
    Templates,
    Transitions,
    Effects,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    if let Err(e) = run(cli.command, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Command, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    if let Command::Catalog { kind } = command {
        print_catalog(kind);
        return Ok(());
    }

    let mut studio = Studio::new(FileStore::open(&config.storage)?);
    match command {
        Command::New { title } => {
            let presentation = studio.create(title.as_deref())?;
            println!("{}", presentation.id());
        }
        Command::List => {
            for summary in studio.list()? {
                println!("{}\t{}", summary.id, summary.title);
            }
        }
        Command::Patch { batch } => {
            let text = read_input(&batch)?;
            let batch = ChangeBatch::from_json(&text)?;
            let presentation = studio.apply_changes(&batch)?;
            println!("{}", presentation.id());
        }
        Command::AddSlide { id, position } => {
            println!("{}", studio.add_slide(&id, position)?);
        }
        Command::RemoveSlide { id, slide_id } => {
            studio.remove_slide(&id, &slide_id)?;
        }
        Command::SetImage {
            id,
            slide_id,
            image,
            field,
            mime,
        } => {
            let bytes = fs::read(&image)?;
            let mime = mime.unwrap_or_else(|| guess_mime(&image).to_string());
            let name = image
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let file = File::from_bytes(mime, name, &bytes);
            let value = serde_json::to_value(&file)?;
            let batch = ChangeBatch::new(
                id,
                vec![ChangeRecord::slide(slide_id, vec![FieldChange::new(field, value)])],
            );
            studio.apply_changes(&batch)?;
        }
        Command::Render { id, output } => {
            let render_config: RenderConfig = config.render.to_render_config()?;
            let html = studio.render(&id, &render_config)?;
            match output {
                Some(path) => fs::write(path, html)?,
                None => println!("{}", html),
            }
        }
        Command::Catalog { .. } => {}
    }
    Ok(())
}

fn read_input(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        fs::read_to_string(path)
    }
}

fn guess_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        _ => "application/octet-stream",
    }
}

fn print_catalog(kind: CatalogKind) {
    let entries = match kind {
        CatalogKind::Templates => Catalog::templates(),
        CatalogKind::Transitions => Catalog::transitions(),
        CatalogKind::Effects => Catalog::effects(),
    };
    for entry in entries {
        println!("{}\t{}", entry.id, entry.label);
    }
}
