//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen in den State und persistiert sie.
///
/// Ohne `options_path` (z.B. in Tests) wird nichts geschrieben.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    state.options = options;
    state.apply_options();
    match &state.options_path {
        Some(path) => state.options.save_to_file(path),
        None => Ok(()),
    }
}
