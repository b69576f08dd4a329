//! Enclosure Wiring (headless).
//!
//! Spielt eine JSON-Liste von Intents gegen den Routing-Kern ab und gibt
//! eine Zusammenfassung aus; optional wird die Leitungsliste exportiert.
//!
//! Aufruf: `enclosure-wiring <intents.json> [--export <wires.json>]`

use anyhow::Context;
use clap::Parser;
use enclosure_wiring::{AppController, AppIntent, AppState, EditorOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "enclosure-wiring")]
#[command(about = "Spielt aufgezeichnete Intents gegen den Leitungs-Router ab", long_about = None)]
struct Args {
    /// JSON-Datei mit einer Liste von Intents
    intents: PathBuf,

    /// Leitungsliste nach dem Abspielen als JSON exportieren
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Enclosure Wiring v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = EditorOptions::config_path();
    let mut state = AppState::with_options(EditorOptions::load_from_file(&config_path));
    state.options_path = Some(config_path);

    let content = std::fs::read_to_string(&args.intents)
        .with_context(|| format!("Datei {} nicht lesbar", args.intents.display()))?;
    let intents: Vec<AppIntent> = serde_json::from_str(&content)
        .with_context(|| format!("Ungültige Intent-Liste: {}", args.intents.display()))?;

    let mut controller = AppController::new();
    for (index, intent) in intents.into_iter().enumerate() {
        controller
            .handle_intent(&mut state, intent)
            .with_context(|| format!("Intent #{} fehlgeschlagen", index))?;
    }

    let scene = controller.build_render_scene(&state);
    println!("Ansicht:          {}", scene.projection.display_name());
    println!("Leitungen:        {}", state.wire_count());
    println!("davon hängend:    {}", state.hanging_count());
    println!("Gesamtlänge:      {:.1} mm", state.total_length());
    println!("Commands:         {}", state.command_log.len());
    if state.core.is_routing() {
        println!("Hinweis: Verlegen noch nicht abgeschlossen");
    }

    if let Some(path) = args.export {
        let count = enclosure_wiring::write_wire_list_file(state.core.wires().values(), &path)?;
        println!("{} Leitungen exportiert nach {}", count, path.display());
    }

    Ok(())
}
