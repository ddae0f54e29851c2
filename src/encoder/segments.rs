//! Input classification and bit-minimal segmentation.
//!
//! Text is first split into maximal single-class runs. Every run is then
//! offered in each mode able to encode it, and the cheapest mode sequence
//! is found as a shortest path through the layered graph of candidates.

use tracing::trace;

use crate::encoder::modes::alphanumeric::AlphanumericEncoder;
use crate::encoder::modes::kanji::KanjiEncoder;
use crate::encoder::modes::numeric::NumericEncoder;
use crate::encoder::shortest_path::Graph;
use crate::error::{QrError, Result};
use crate::models::{Mode, Segment, SegmentHint, Version};

/// Class of a single character; digits never count as alphanumeric here
fn char_mode(c: char, kanji_enabled: bool) -> Mode {
    if NumericEncoder::is_numeric(c) {
        Mode::Numeric
    } else if AlphanumericEncoder::is_alphanumeric(c) {
        Mode::Alphanumeric
    } else if kanji_enabled && KanjiEncoder::is_kanji(c) {
        Mode::Kanji
    } else {
        Mode::Byte
    }
}

/// Most compact mode able to encode all of `data`
pub fn best_mode_for_data(data: &str, kanji_enabled: bool) -> Mode {
    if data.is_empty() {
        Mode::Byte
    } else if data.chars().all(NumericEncoder::is_numeric) {
        Mode::Numeric
    } else if data.chars().all(AlphanumericEncoder::is_alphanumeric) {
        Mode::Alphanumeric
    } else if kanji_enabled && data.chars().all(KanjiEncoder::is_kanji) {
        Mode::Kanji
    } else {
        Mode::Byte
    }
}

/// Split `text` into maximal runs of one character class
pub fn raw_split(text: &str, kanji_enabled: bool) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    for c in text.chars() {
        let mode = char_mode(c, kanji_enabled);
        match segments.last_mut() {
            Some(last) if last.mode == mode => last.data.push(c),
            _ => segments.push(Segment::new(mode, c.to_string())),
        }
    }
    segments
}

/// Build segments from caller hints, honouring forced modes
pub fn from_hints(hints: &[SegmentHint], kanji_enabled: bool) -> Result<Vec<Segment>> {
    let mut segments = Vec::with_capacity(hints.len());
    for hint in hints.iter().filter(|h| !h.data.is_empty()) {
        let best = best_mode_for_data(&hint.data, kanji_enabled);
        let mut mode = hint.mode.unwrap_or(best);
        if mode != Mode::Byte && mode.indicator() < best.indicator() {
            return Err(QrError::IncompatibleMode {
                data: hint.data.clone(),
                mode,
                suggested: best,
            });
        }
        if mode == Mode::Kanji && !kanji_enabled {
            mode = Mode::Byte;
        }
        if mode == Mode::Kanji && !hint.data.chars().all(KanjiEncoder::is_kanji) {
            return Err(QrError::IncompatibleMode {
                data: hint.data.clone(),
                mode,
                suggested: best,
            });
        }
        segments.push(Segment::new(mode, hint.data.clone()));
    }
    Ok(segments)
}

/// One candidate encoding of a raw run
#[derive(Debug, Clone)]
struct Candidate {
    data: String,
    mode: Mode,
    length: usize,
}

fn candidates(segment: &Segment) -> Vec<Candidate> {
    let byte = Candidate {
        data: segment.data.clone(),
        mode: Mode::Byte,
        length: segment.data.len(),
    };
    let chars = segment.data.chars().count();
    let own = |mode| Candidate {
        data: segment.data.clone(),
        mode,
        length: chars,
    };
    match segment.mode {
        Mode::Numeric => vec![own(Mode::Numeric), own(Mode::Alphanumeric), byte],
        Mode::Alphanumeric => vec![own(Mode::Alphanumeric), byte],
        Mode::Kanji => vec![own(Mode::Kanji), byte],
        Mode::Byte => vec![byte],
    }
}

/// Layered candidate graph; node 0 is the start, the last node the end
struct SegmentGraph {
    graph: Graph,
    nodes: Vec<Option<Candidate>>,
}

impl SegmentGraph {
    const START: usize = 0;

    fn build(layers: Vec<Vec<Candidate>>, version: Version) -> Self {
        let total: usize = layers.iter().map(Vec::len).sum();
        let end = total + 1;
        let mut graph = Graph::new(total + 2);
        let mut nodes: Vec<Option<Candidate>> = vec![None; total + 2];
        // Characters accumulated in the current run ending at each node
        let mut last_count = vec![0usize; total + 2];

        let mut prev_ids = vec![Self::START];
        let mut next_id = 1;
        for layer in layers {
            let mut current_ids = Vec::with_capacity(layer.len());
            for node in layer {
                let id = next_id;
                next_id += 1;
                for &prev in &prev_ids {
                    let weight = match &nodes[prev] {
                        Some(prev_node) if prev_node.mode == node.mode => {
                            let run = last_count[prev];
                            last_count[prev] += node.length;
                            node.mode.bits_for(run + node.length) - node.mode.bits_for(run)
                        }
                        prev_node => {
                            if prev_node.is_some() {
                                last_count[prev] = node.length;
                            }
                            node.mode.bits_for(node.length)
                                + 4
                                + node.mode.char_count_bits(version)
                        }
                    };
                    graph.add_edge(prev, id, weight);
                }
                nodes[id] = Some(node);
                current_ids.push(id);
            }
            prev_ids = current_ids;
        }
        for &prev in &prev_ids {
            graph.add_edge(prev, end, 0);
        }

        Self { graph, nodes }
    }

    fn end(&self) -> usize {
        self.nodes.len() - 1
    }
}

fn merge(path: Vec<Candidate>) -> Vec<Segment> {
    let mut merged: Vec<Segment> = Vec::new();
    for node in path {
        match merged.last_mut() {
            Some(last) if last.mode == node.mode => last.data.push_str(&node.data),
            _ => merged.push(Segment::new(node.mode, node.data)),
        }
    }
    merged
}

/// Bit-minimal segmentation of `text` for a symbol of `version`
pub fn optimize(text: &str, version: Version, kanji_enabled: bool) -> Result<Vec<Segment>> {
    let raw = raw_split(text, kanji_enabled);
    let layers: Vec<Vec<Candidate>> = raw.iter().map(candidates).collect();
    let mut seg_graph = SegmentGraph::build(layers, version);

    let path = seg_graph
        .graph
        .shortest_path(SegmentGraph::START, seg_graph.end())
        .ok_or(QrError::Internal("segment graph has no path to the end node"))?;

    let chosen: Vec<Candidate> = path
        .iter()
        .filter_map(|&id| seg_graph.nodes[id].take())
        .collect();
    let segments = merge(chosen);
    trace!(
        raw = raw.len(),
        optimized = segments.len(),
        "segmentation for version {}",
        version
    );
    Ok(segments)
}
