//! Eingabe-Vertrag des Editors.
//!
//! Die UI-Schale übersetzt rohe Pointer-/Tastatur-Events in diese Intents.
//! Koordinaten kommen bereits in Map-Einheiten an, aufgelöst aus
//! Bildschirm-Skalierung und Grid-Raster (`EditorController::snap_to_grid`).

use glam::Vec2;

/// Ein Editor-Intent in Map-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorEvent {
    /// Zeiger bewegt
    PointerMoved(Vec2),
    /// Primärtaste gedrückt (Punkt greifen im Editier-Modus)
    PrimaryPressed(Vec2),
    /// Primärtaste losgelassen: Punkt setzen, mit Modifier Anker/Einfügen
    PrimaryReleased { pos: Vec2, with_modifier: bool },
    /// Sekundärtaste losgelassen: Zeichnen beenden bzw. Punkt/Anker entfernen
    SecondaryReleased(Vec2),
    /// Through-Modifier gedrückt (Arc/Spline-Vorschau fürs letzte Segment)
    ThroughPressed,
    /// Through-Modifier losgelassen (zurück zu Bézier)
    ThroughReleased,
    /// Zeichnen abbrechen: schwebenden Punkt verwerfen (Escape)
    CancelDrawing,
    /// Pfad verwerfen und neu beginnen
    ClearRequested,
}
