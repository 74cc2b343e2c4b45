//! Matching station pairs to slices of a track polyline.
//!
//! Track traces are drawn independently of station positions, so the
//! vertex closest to each station stands in for the station on the trace.
//! Distances are planar in degrees; over a single city the projection
//! error does not change which vertex is closest in practice.

use crate::domain::Coord;

/// Index of the polyline vertex closest to `point`.
///
/// The first vertex wins on ties. Returns `None` for an empty polyline.
pub fn nearest_index(polyline: &[Coord], point: Coord) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, vertex) in polyline.iter().enumerate() {
        let d = vertex.planar_distance(&point);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

/// The part of `polyline` between the vertices nearest to `a` and `b`.
///
/// The slice runs from `a`'s vertex to `b`'s vertex inclusive, reversed
/// when the trace was drawn in the opposite direction of travel. An empty
/// polyline yields an empty segment.
///
/// Tracks that overlap themselves or branch are not handled: the result
/// is always one contiguous slice.
pub fn extract_segment(polyline: &[Coord], a: Coord, b: Coord) -> Vec<Coord> {
    let (Some(start), Some(end)) = (nearest_index(polyline, a), nearest_index(polyline, b)) else {
        return Vec::new();
    };

    if start <= end {
        polyline[start..=end].to_vec()
    } else {
        polyline[end..=start].iter().rev().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Vec<Coord> {
        (0..10).map(|i| Coord::new(21.0 + i as f64 * 0.01, 72.0)).collect()
    }

    #[test]
    fn nearest_on_empty_polyline() {
        assert_eq!(nearest_index(&[], Coord::new(0.0, 0.0)), None);
    }

    #[test]
    fn nearest_picks_closest_vertex() {
        let polyline = line();
        assert_eq!(nearest_index(&polyline, Coord::new(21.031, 72.001)), Some(3));
        assert_eq!(nearest_index(&polyline, Coord::new(25.0, 72.0)), Some(9));
        assert_eq!(nearest_index(&polyline, Coord::new(0.0, 0.0)), Some(0));
    }

    #[test]
    fn nearest_prefers_first_on_tie() {
        let polyline = vec![
            Coord::new(0.0, 1.0),
            Coord::new(0.0, -1.0),
            Coord::new(0.0, 1.0),
        ];
        assert_eq!(nearest_index(&polyline, Coord::new(0.0, 0.0)), Some(0));
        assert_eq!(nearest_index(&polyline, Coord::new(0.0, 1.0)), Some(0));
    }

    #[test]
    fn forward_segment() {
        let polyline = line();
        let segment = extract_segment(&polyline, polyline[2], polyline[5]);
        assert_eq!(segment, polyline[2..=5].to_vec());
    }

    #[test]
    fn backward_segment_is_reversed() {
        let polyline = line();
        let segment = extract_segment(&polyline, polyline[6], polyline[1]);
        let expected: Vec<Coord> = polyline[1..=6].iter().rev().copied().collect();
        assert_eq!(segment, expected);
    }

    #[test]
    fn same_point_gives_single_vertex() {
        let polyline = line();
        let p = Coord::new(21.0402, 71.9999);
        assert_eq!(extract_segment(&polyline, p, p), vec![polyline[4]]);
    }

    #[test]
    fn empty_polyline_gives_empty_segment() {
        assert!(extract_segment(&[], Coord::new(0.0, 0.0), Coord::new(1.0, 1.0)).is_empty());
    }

    #[test]
    fn stations_off_the_trace_snap_to_it() {
        let polyline = line();
        // Both stations sit a little east of the track
        let segment = extract_segment(
            &polyline,
            Coord::new(21.0705, 72.002),
            Coord::new(21.0496, 72.003),
        );
        let expected: Vec<Coord> = polyline[5..=7].iter().rev().copied().collect();
        assert_eq!(segment, expected);
    }
}
