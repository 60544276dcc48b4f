use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use quill::app::{Editor, HELP_MESSAGE};
use quill::config::Config;
use quill::input::key_translator::Key;
use quill::services::terminal_modes::{self, TerminalModes};
use quill::services::tracing_setup;
use std::io::{self, Write};
use std::path::PathBuf;

/// A small terminal text editor
#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(about = "A small terminal text editor with syntax highlighting", long_about = None)]
#[command(version)]
struct Args {
    /// File to open. Created on first save if it does not exist.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for editor diagnostics
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    let log_file = args.log_file.clone().unwrap_or_else(tracing_setup::main_log_path);
    tracing_setup::init_global(&log_file);
    tracing::info!("Editor starting");

    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    if args.dump_config {
        let json = serde_json::to_string_pretty(&config).context("Failed to serialize configuration")?;
        println!("{json}");
        return Ok(());
    }

    let (width, height) = terminal::size().context("Failed to determine terminal size")?;
    tracing::info!("Terminal size: {}x{}", width, height);

    let mut editor = Editor::new(config, width, height);
    if let Some(path) = &args.file {
        editor
            .open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
    }

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));

    let mut terminal_modes = TerminalModes::enable().context("Failed to set up terminal")?;
    editor.set_status_message(HELP_MESSAGE);

    let result = run(&mut editor);
    terminal_modes.undo();

    match &result {
        Ok(()) => tracing::info!("Editor exiting"),
        Err(e) => tracing::error!("Editor loop failed: {:#}", e),
    }
    result
}

/// Draw, wait for one event, apply it. Returns when the editor asks to quit.
fn run(editor: &mut Editor) -> AnyhowResult<()> {
    let mut stdout = io::stdout();
    loop {
        let frame = editor.refresh_screen()?;
        stdout.write_all(&frame)?;
        stdout.flush()?;

        match event::read().context("Failed to read terminal event")? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                if let Some(key) = Key::from_key_event(key_event) {
                    if !editor.handle_key(key) {
                        return Ok(());
                    }
                }
            }
            Event::Resize(width, height) => editor.resize(width, height),
            _ => {}
        }
    }
}
