//! Use-Case-Funktionen des Editors.
//!
//! Aufgeteilt nach Interaktions-Phase:
//! - `editing` — Punkt-Platzierung, Anker-Gesten, Löschen, Through-Umschaltung

pub mod editing;
