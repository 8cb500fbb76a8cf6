//! Attributes derived from a found path.
//!
//! Everything here is a pure function of the network and the path: the zone
//! span, the pricing mode, the lines ridden and where the rider changes line.

use serde::Serialize;

use crate::domain::{StationId, TravelMode, Zone};
use crate::network::{Network, NetworkError};

/// One hop of a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathSegment {
    pub from: StationId,
    pub to: StationId,
    pub line: String,
    pub mode: TravelMode,
    pub minutes: u32,
}

/// Derived attributes of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathAnalysis {
    /// Number of zones spanned: max zone - min zone + 1. Always at least 1.
    pub zones_crossed: u32,

    /// Train if any segment is train-like; Bus only if every segment is.
    pub mode: TravelMode,

    /// Line label of each segment, in order.
    pub segment_lines: Vec<String>,

    /// `segment_lines` with consecutive duplicates collapsed.
    pub compressed_lines: Vec<String>,

    /// Stations where the line changes from the previous segment.
    pub transfer_stations: Vec<StationId>,

    /// Zone count priced by the fare table: 1 for bus, zones crossed for train.
    pub required_zones: u32,

    segments: Vec<PathSegment>,
}

impl PathAnalysis {
    /// Per-segment details, in path order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Number of line changes.
    pub fn transfer_count(&self) -> usize {
        self.transfer_stations.len()
    }
}

/// Analyse a path produced by [`find_fastest_path`](super::find_fastest_path)
/// over the same network.
///
/// Fails with [`NetworkError::UnknownStation`] if a path station is missing
/// and with [`NetworkError::NotAdjacent`] if two consecutive stations are not
/// directly connected. Both mean the path did not come from this network.
pub fn analyze_path(network: &Network, path: &[StationId]) -> Result<PathAnalysis, NetworkError> {
    let zones_crossed = zones_crossed(network, path)?;

    let segments = path
        .windows(2)
        .map(|pair| {
            let conn = network.direct_connection(&pair[0], &pair[1])?;
            Ok(PathSegment {
                from: pair[0].clone(),
                to: pair[1].clone(),
                line: conn.line.clone(),
                mode: conn.travel_mode(),
                minutes: conn.minutes,
            })
        })
        .collect::<Result<Vec<_>, NetworkError>>()?;

    let mode = infer_mode(&segments);
    let segment_lines: Vec<String> = segments.iter().map(|s| s.line.clone()).collect();
    let compressed_lines = compress_lines(&segment_lines);
    let transfer_stations = transfer_stations(path, &segment_lines);
    let required_zones = required_zones(mode, zones_crossed);

    Ok(PathAnalysis {
        zones_crossed,
        mode,
        segment_lines,
        compressed_lines,
        transfer_stations,
        required_zones,
        segments,
    })
}

/// Max zone minus min zone plus one over every station on the path.
fn zones_crossed(network: &Network, path: &[StationId]) -> Result<u32, NetworkError> {
    let zones = path
        .iter()
        .map(|id| {
            network
                .station(id)
                .map(|s| s.zone)
                .ok_or_else(|| NetworkError::UnknownStation(id.clone()))
        })
        .collect::<Result<Vec<Zone>, _>>()?;

    let (Some(min), Some(max)) = (zones.iter().min(), zones.iter().max()) else {
        return Ok(1);
    };

    Ok(max.abs_diff(*min) + 1)
}

/// Any train-like segment makes the whole trip train-like. A path with no
/// segments is train-like too.
fn infer_mode(segments: &[PathSegment]) -> TravelMode {
    if segments.is_empty() || segments.iter().any(|s| s.mode.is_train()) {
        TravelMode::Train
    } else {
        TravelMode::Bus
    }
}

/// Collapse consecutive duplicates: [X, X, Y, Y, X] becomes [X, Y, X].
pub fn compress_lines(lines: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for line in lines {
        if out.last() != Some(line) {
            out.push(line.clone());
        }
    }
    out
}

/// Segment `i` runs from `path[i]` to `path[i + 1]`, so a change between
/// segments `i - 1` and `i` happens at `path[i]`.
pub fn transfer_stations(path: &[StationId], segment_lines: &[String]) -> Vec<StationId> {
    segment_lines
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] != pair[1])
        .filter_map(|(i, _)| path.get(i + 1).cloned())
        .collect()
}

/// Zone count the fare table should price for a trip.
pub fn required_zones(mode: TravelMode, zones_crossed: u32) -> u32 {
    match mode {
        TravelMode::Bus => 1,
        TravelMode::Train => zones_crossed,
    }
}
