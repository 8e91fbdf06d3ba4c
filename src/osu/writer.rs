//! Writer für die Slider-Codezeile im .osu-Hitobject-Format.
//!
//! Format: `x,y,0,2,0,<TYP>|x2:y2|…,1,<länge>`. Die Felder `0,2,0`
//! (Zeit, Objekt-Typ, Hitsound) und die Wiederholungszahl `1` sind feste
//! Platzhalter des Formats und werden hier nicht berechnet.

use crate::core::SliderPath;
use crate::curve::SegmentKind;
use crate::shared::options::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use glam::Vec2;

/// Typ-Buchstabe des Formats für einen Segment-Typ.
///
/// `Spline` hat keinen eigenen Buchstaben und wird vor dem Export immer
/// zu `B` abgeflacht.
fn type_letter(kind: SegmentKind) -> char {
    match kind {
        SegmentKind::Linear => 'L',
        SegmentKind::Arc => 'P',
        SegmentKind::Bezier | SegmentKind::Spline => 'B',
    }
}

/// Verschiebung, die den Pfad zur Spielfeldmitte zentriert und den Kopf
/// im Spielfeld hält.
///
/// Würde der Kopf durch die Zentrierung das Feld verlassen, wird pro
/// Achse gegen die jeweilige Feldkante nachkorrigiert (symmetrische
/// Klammerung: x gegen die Feldbreite, y gegen die Feldhöhe).
fn centering_offset(path: &SliderPath, head: Vec2) -> Vec2 {
    let midpoint = path.midpoint();
    let mut offset = Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0) - midpoint;

    let shifted = head + offset;
    if shifted.x < 0.0 {
        offset.x -= shifted.x;
    } else if shifted.x > PLAYFIELD_WIDTH {
        offset.x -= shifted.x - PLAYFIELD_WIDTH;
    }
    if shifted.y < 0.0 {
        offset.y -= shifted.y;
    } else if shifted.y > PLAYFIELD_HEIGHT {
        offset.y -= shifted.y - PLAYFIELD_HEIGHT;
    }
    offset
}

/// Schreibt die Hitobject-Zeile für den Pfad.
///
/// Ein einzelnes Nicht-Spline-Segment wird mit seinen rohen
/// Kontrollpunkten und nativem Typ-Buchstaben exportiert; alles andere
/// wird segmentweise in kubische Bézier-Kontrollpunkte überführt und
/// einheitlich als `B` geschrieben. Koordinaten werden nach der
/// Verschiebung auf ganze Zahlen gerundet.
///
/// `tick_dist` ist der Tick-Abstand in Map-Einheiten; die exportierte
/// Länge ist die volle Länge, abgerundet auf das Tick-Vielfache.
/// Degenerierte Eingaben (leerer Pfad, einzelnes Segment mit weniger als
/// 2 Punkten, `tick_dist ≤ 0`) ergeben den leeren String.
pub fn write_slider_code(path: &SliderPath, tick_dist: f32) -> String {
    if tick_dist <= 0.0 || path.is_empty() {
        return String::new();
    }
    let Some(first_segment) = path.segments().first() else {
        return String::new();
    };
    if path.segment_count() == 1 && first_segment.len() < 2 {
        return String::new();
    }

    let mut kind = first_segment.kind();
    let all_points: Vec<Vec2> = if path.segment_count() == 1 && kind != SegmentKind::Spline {
        first_segment.points().to_vec()
    } else {
        kind = SegmentKind::Bezier;
        path.segments()
            .iter()
            .flat_map(|segment| segment.bezier_form())
            .collect()
    };

    let Some(&head) = all_points.first() else {
        return String::new();
    };
    let offset = centering_offset(path, head);

    let translated: Vec<(i32, i32)> = all_points
        .iter()
        .map(|&point| {
            (
                (point.x + offset.x).round() as i32,
                (point.y + offset.y).round() as i32,
            )
        })
        .collect();

    let playable_length = (path.full_length() / tick_dist).floor() * tick_dist;

    let mut line = String::new();
    line.push_str(&format!("{},{}", translated[0].0, translated[0].1));
    line.push_str(&format!(",0,2,0,{}|", type_letter(kind)));
    let tail: Vec<String> = translated[1..]
        .iter()
        .map(|(x, y)| format!("{}:{}", x, y))
        .collect();
    line.push_str(&tail.join("|"));
    line.push_str(&format!(",1,{}", playable_length));
    line
}
