//! Zentrale Konfiguration für den Slider-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Spielfeld ───────────────────────────────────────────────────────

/// Breite des osu!-Spielfelds in Map-Einheiten (osu!pixel).
pub const PLAYFIELD_WIDTH: f32 = 512.0;
/// Höhe des osu!-Spielfelds in Map-Einheiten.
pub const PLAYFIELD_HEIGHT: f32 = 384.0;

// ── Picking ─────────────────────────────────────────────────────────

/// Pick-Schwelle für Kontrollpunkte (quadrierte Map-Einheiten).
pub const PICK_POINT_DIST_SQ: f32 = 64.0;
/// Pick-Schwelle für Kanten (lineare Map-Einheiten).
pub const PICK_EDGE_DIST: f32 = 64.0;

// ── Kurven ──────────────────────────────────────────────────────────

/// Toleranz der Bézier-Abflachung (Map-Einheiten).
pub const BEZIER_TOLERANCE: f32 = 0.25;
/// Tension der Cardinal-Spline.
pub const SPLINE_TENSION: f32 = 0.25;
/// Maximaler Winkel pro Teilstück der Kreisbogen-Approximation (Radiant).
pub const ARC_MAX_PART_ANGLE: f32 = std::f32::consts::FRAC_PI_2;

// ── Laufzeit-Optionen (serialisierbar) ──────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `osu_slider_editor.toml` neben der Anwendung gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Tempo ───────────────────────────────────────────────────
    /// Basis-Slider-Velocity der Map (SliderMultiplier)
    pub base_sv: f32,
    /// SV-Multiplikator des aktiven Timing-Points
    pub sv_multiplier: f32,
    /// Beat-Snap-Teiler (z.B. 0.25 = 1/4-Noten)
    pub beat_snap: f32,

    // ── Eingabe ─────────────────────────────────────────────────
    /// Grid-Rastergröße in Map-Einheiten (0 = kein Raster).
    /// Wird von der UI-Schale beim Auflösen der Zeigerposition angewendet.
    pub grid_size: f32,
    /// Pick-Schwelle für Kontrollpunkte (quadrierte Map-Einheiten)
    pub pick_point_dist_sq: f32,
    /// Pick-Schwelle für Kanten (lineare Map-Einheiten)
    pub pick_edge_dist: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            base_sv: 1.0,
            sv_multiplier: 1.0,
            beat_snap: 0.25,
            grid_size: 0.0,
            pick_point_dist_sq: PICK_POINT_DIST_SQ,
            pick_edge_dist: PICK_EDGE_DIST,
        }
    }
}

impl EditorOptions {
    /// Abstand eines Slider-Ticks in Map-Einheiten.
    ///
    /// `beat_snap × base_sv × sv_multiplier × 100` — osu! bewegt den
    /// Slider-Ball bei SV 1.0 um 100 osu!pixel pro Beat.
    pub fn tick_distance(&self) -> f32 {
        self.beat_snap * self.base_sv * self.sv_multiplier * 100.0
    }

    /// Lädt Optionen aus einer TOML-Datei.
    ///
    /// Fehlende oder nicht lesbare Dateien ergeben die Defaults; eine
    /// kaputte Datei wird geloggt statt die Sitzung zu verhindern.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(options) => options,
                Err(err) => {
                    log::warn!(
                        "Optionen aus {} nicht lesbar, Defaults werden verwendet: {}",
                        path.display(),
                        err
                    );
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Speichert die Optionen als TOML.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tick_distance_defaults() {
        // 1/4-Snap bei SV 1.0 → 25 osu!pixel pro Tick
        let options = EditorOptions::default();
        assert_relative_eq!(options.tick_distance(), 25.0);
    }

    #[test]
    fn test_tick_distance_skaliert_mit_sv() {
        let options = EditorOptions {
            base_sv: 1.6,
            sv_multiplier: 2.0,
            beat_snap: 0.5,
            ..EditorOptions::default()
        };
        assert_relative_eq!(options.tick_distance(), 160.0);
    }

    #[test]
    fn test_toml_roundtrip() {
        let options = EditorOptions {
            base_sv: 1.4,
            grid_size: 8.0,
            ..EditorOptions::default()
        };
        let text = toml::to_string_pretty(&options).expect("Serialisierung erwartet");
        let parsed: EditorOptions = toml::from_str(&text).expect("Deserialisierung erwartet");
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_kaputte_optionen_schlagen_beim_parsen_fehl() {
        let parsed: Result<EditorOptions, _> = toml::from_str("base_sv = \"keine zahl\"");
        assert!(parsed.is_err());
    }
}
