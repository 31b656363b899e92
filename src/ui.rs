//! Plain-text projection of search results.
//!
//! Map and list rendering live outside this crate; this module only shapes a
//! [`ResultSet`] into the marker and row values they draw, and prints the
//! list for the command-line binary.

use crate::app::MapFocus;
use crate::models::{Coordinate, ResultSet};
use std::fmt::Write;

/// One pin on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub title: String,
    pub subtitle: String,
    pub coordinate: Coordinate,
}

/// One row of the result list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub title: String,
    pub detail: String,
}

pub fn markers(results: &ResultSet) -> Vec<Marker> {
    results
        .iter()
        .map(|p| Marker {
            title: p.title.clone(),
            subtitle: p.distance_label.clone(),
            coordinate: p.coordinate,
        })
        .collect()
}

pub fn list_rows(results: &ResultSet) -> Vec<ListRow> {
    results
        .iter()
        .map(|p| ListRow {
            title: p.title.clone(),
            detail: p.distance_label.clone(),
        })
        .collect()
}

/// Renders the focus line followed by one numbered line per result.
pub fn render(focus: Option<&MapFocus>, results: &ResultSet) -> String {
    let mut out = String::new();
    if let Some(focus) = focus {
        let _ = writeln!(
            out,
            "{} ({:.6}, {:.6})",
            focus.label, focus.coordinate.latitude, focus.coordinate.longitude
        );
    }
    if results.is_empty() {
        out.push_str("No places found.\n");
        return out;
    }
    for (i, row) in list_rows(results).iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {:<40} {}", i + 1, row.title, row.detail);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DisplayPlace;

    fn results() -> ResultSet {
        vec![
            DisplayPlace {
                title: "Kape Kalye".to_string(),
                distance_meters: 80,
                distance_label: "80 meters".to_string(),
                coordinate: Coordinate::new(14.58, 121.06),
            },
            DisplayPlace {
                title: "Bo's Coffee".to_string(),
                distance_meters: 2100,
                distance_label: "2 kilometers".to_string(),
                coordinate: Coordinate::new(14.57, 121.05),
            },
        ]
    }

    #[test]
    fn markers_carry_label_as_subtitle() {
        let pins = markers(&results());
        assert_eq!(
            pins[1],
            Marker {
                title: "Bo's Coffee".to_string(),
                subtitle: "2 kilometers".to_string(),
                coordinate: Coordinate::new(14.57, 121.05),
            }
        );
    }

    #[test]
    fn render_lists_in_order() {
        let focus = MapFocus {
            coordinate: Coordinate::new(14.586716, 121.062449),
            label: "Initial location",
        };
        let text = render(Some(&focus), &results());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Initial location (14.586716, 121.062449)");
        assert!(lines[1].starts_with(" 1. Kape Kalye"));
        assert!(lines[1].ends_with("80 meters"));
        assert!(lines[2].starts_with(" 2. Bo's Coffee"));
    }

    #[test]
    fn render_empty() {
        assert_eq!(render(None, &ResultSet::new()), "No places found.\n");
    }
}
