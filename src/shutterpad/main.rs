use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use shutterpad::camera::CommandCamera;
use shutterpad::config::GalleryConfig;
use shutterpad::error::{GalleryError, Result};
use shutterpad::gallery::Gallery;
use shutterpad::model::PhotoRecord;
use shutterpad::platform::{FileUrlResolver, Runtime};
use shutterpad::storage::disk::{DiskPreferences, DiskStorage};
use shutterpad::view::GalleryView;
use std::io::{self, Write};
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

type CliView = GalleryView<CommandCamera, DiskStorage, DiskPreferences, FileUrlResolver>;

struct AppContext {
    view: CliView,
    config: GalleryConfig,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Snap) => handle_snap(&mut ctx),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Delete { index, yes }) => handle_delete(&mut ctx, index, yes),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "shutterpad", "shutterpad")
            .ok_or_else(|| GalleryError::Storage("could not determine data directory".to_string()))?
            .data_dir()
            .to_path_buf(),
    };

    let config = GalleryConfig::load(&data_dir).unwrap_or_default();
    let camera = CommandCamera::new(config.capture_command.as_ref().map(PathBuf::from));
    let files = DiskStorage::new(data_dir.clone());
    let prefs = DiskPreferences::new(&data_dir);

    // The CLI runs with direct native file access, so it is a hybrid context
    let gallery = Gallery::new(Runtime::Hybrid, camera, files, prefs, FileUrlResolver)
        .with_quality(config.quality);

    let mut view = GalleryView::new(gallery);
    view.load()?;

    Ok(AppContext {
        view,
        config,
        data_dir,
    })
}

fn handle_snap(ctx: &mut AppContext) -> Result<()> {
    let record = ctx.view.capture()?;
    println!("{}", format!("Captured: {}", display_name(&record)).green());
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    print_photos(ctx.view.photos());
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, index: usize, yes: bool) -> Result<()> {
    let record = ctx.view.select(index)?;

    if !yes {
        println!("This will permanently remove:");
        println!("  {}. {}", index, display_name(&record));
        print!("[Y] To delete: ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if input.trim() != "Y" {
            ctx.view.cancel();
            println!("{}", "Operation cancelled.".dimmed());
            return Ok(());
        }
    }

    if let Some(deleted) = ctx.view.confirm_delete()? {
        println!("{}", format!("Deleted: {}", display_name(&deleted)).green());
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) => {
            println!(
                "capture-command = {}",
                ctx.config.capture_command.as_deref().unwrap_or("(unset)")
            );
            println!("quality = {}", ctx.config.quality);
        }
        (Some("capture-command"), None) => {
            println!(
                "capture-command = {}",
                ctx.config.capture_command.as_deref().unwrap_or("(unset)")
            );
        }
        (Some("capture-command"), Some(v)) => {
            ctx.config.capture_command = Some(v);
            ctx.config.save(&ctx.data_dir)?;
            println!("{}", "capture-command updated.".green());
        }
        (Some("quality"), None) => {
            println!("quality = {}", ctx.config.quality);
        }
        (Some("quality"), Some(v)) => {
            let quality = v
                .parse::<u8>()
                .map_err(|_| GalleryError::Input(format!("invalid quality value: {}", v)))?;
            ctx.config.set_quality(quality);
            ctx.config.save(&ctx.data_dir)?;
            println!("{}", "quality updated.".green());
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
        }
    }
    Ok(())
}

const GRID_COLS: usize = 3;
const CELL_WIDTH: usize = 30;

fn print_photos(photos: &[PhotoRecord]) {
    if photos.is_empty() {
        println!("No photos yet. Try `shutterpad snap`.");
        return;
    }

    for (row_start, row) in photos.chunks(GRID_COLS).enumerate() {
        let mut line = String::new();
        for (offset, record) in row.iter().enumerate() {
            let index = row_start * GRID_COLS + offset + 1;
            let cell = format!("{}. {}", index, display_name(record));
            let cell = truncate_to_width(&cell, CELL_WIDTH - 2);

            let padding = CELL_WIDTH.saturating_sub(cell.width());
            if record.is_resolved() {
                line.push_str(&cell);
            } else {
                // unresolved thumbnails render dimmed, like a broken image
                line.push_str(&cell.dimmed().to_string());
            }
            line.push_str(&" ".repeat(padding));
        }
        println!("{}", line.trim_end());
    }
}

fn display_name(record: &PhotoRecord) -> &str {
    record
        .filepath
        .rsplit('/')
        .next()
        .unwrap_or(&record.filepath)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
