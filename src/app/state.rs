//! Editor-Zustand: der bearbeitete Pfad plus Interaktions-Status.

use crate::core::{PointAddress, SliderPath};
use crate::shared::EditorOptions;

/// Gesamtzustand einer Editier-Sitzung.
///
/// Der Pfad gehört exklusiv dieser Sitzung; ein Reset erzeugt einen
/// neuen Pfad statt in-place zu mutieren. Alle Operationen laufen
/// synchron aus einem Eingabe-Strom — kein internes Locking nötig.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Der bearbeitete Slider-Pfad
    pub path: SliderPath,
    /// true solange platziert wird (der letzte Punkt folgt dem Zeiger)
    pub drawing: bool,
    /// Aktuell gegriffener Punkt im Editier-Modus
    pub focus_point: Option<PointAddress>,
    /// Laufzeit-Optionen (Tempo, Raster, Pick-Schwellen)
    pub options: EditorOptions,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Neue Sitzung: leerer Pfad, Zeichenmodus aktiv.
    pub fn new() -> Self {
        Self {
            path: SliderPath::new(),
            drawing: true,
            focus_point: None,
            options: EditorOptions::default(),
        }
    }
}
