use crate::config::TableSettings;
use crate::model::{Row, Table};

/// Recover tables from `pdftotext -layout` output.
///
/// pdftotext -layout keeps column alignment by padding with spaces, so a
/// table shows up as a run of lines that each split into two or more text
/// segments at wide gaps. Column boundaries come from the union of the
/// segments of those lines; each segment is then assigned to the column
/// it overlaps most.
pub fn find_tables(page_text: &str, settings: &TableSettings) -> Vec<Table> {
    let gap = settings.min_column_gap.max(1);

    find_blocks(page_text, settings)
        .into_iter()
        .filter_map(|block| build_table(&block, gap, settings.merge_continuation_lines))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Segment {
    start: usize,
    end: usize,
    text: String,
}

#[derive(Debug, Clone)]
struct BlockLine {
    segments: Vec<Segment>,
    aligned: bool,
}

/// Split a line into text runs separated by at least `min_gap` spaces.
/// Positions are char offsets so that alignment survives non-ASCII text.
fn segments(line: &str, min_gap: usize) -> Vec<Segment> {
    let chars: Vec<char> = line.chars().collect();
    let mut out = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i].is_whitespace() {
            i += 1;
            continue;
        }

        let start = i;
        let mut end = i;
        let mut spaces = 0;
        while i < chars.len() {
            if chars[i].is_whitespace() {
                spaces += 1;
                if spaces >= min_gap {
                    break;
                }
            } else {
                spaces = 0;
                end = i + 1;
            }
            i += 1;
        }

        out.push(Segment {
            start,
            end,
            text: chars[start..end].iter().collect(),
        });
    }

    out
}

/// Group lines into candidate table blocks.
///
/// Aligned lines (two or more segments) open or extend a block. A
/// single-segment line indented past the block's left edge extends it as a
/// continuation line. Up to `max_row_gap` blank lines may sit between rows.
fn find_blocks(page_text: &str, settings: &TableSettings) -> Vec<Vec<BlockLine>> {
    let gap = settings.min_column_gap.max(1);
    let mut blocks = Vec::new();
    let mut current: Vec<BlockLine> = Vec::new();
    let mut indent = usize::MAX;
    let mut blank_run = 0;

    for line in page_text.lines() {
        let segs = segments(line, gap);

        if segs.is_empty() {
            if !current.is_empty() {
                blank_run += 1;
                if blank_run > settings.max_row_gap {
                    flush_block(&mut current, &mut blocks, settings.min_rows);
                    indent = usize::MAX;
                    blank_run = 0;
                }
            }
            continue;
        }

        if segs.len() >= 2 {
            indent = indent.min(segs[0].start);
            blank_run = 0;
            current.push(BlockLine {
                segments: segs,
                aligned: true,
            });
        } else if !current.is_empty() && blank_run == 0 && segs[0].start >= indent + gap {
            current.push(BlockLine {
                segments: segs,
                aligned: false,
            });
        } else {
            flush_block(&mut current, &mut blocks, settings.min_rows);
            indent = usize::MAX;
            blank_run = 0;
        }
    }

    flush_block(&mut current, &mut blocks, settings.min_rows);
    blocks
}

fn flush_block(current: &mut Vec<BlockLine>, blocks: &mut Vec<Vec<BlockLine>>, min_rows: usize) {
    let block = std::mem::take(current);
    let aligned = block.iter().filter(|l| l.aligned).count();
    if aligned >= min_rows.max(1) {
        blocks.push(block);
    }
}

/// Column spans `[start, end)` covered by the aligned lines of a block.
/// Spans closer together than `gap` are merged.
fn column_spans(block: &[BlockLine], gap: usize) -> Vec<(usize, usize)> {
    let width = block
        .iter()
        .filter(|l| l.aligned)
        .flat_map(|l| l.segments.iter().map(|s| s.end))
        .max()
        .unwrap_or(0);

    let mut covered = vec![false; width];
    for line in block.iter().filter(|l| l.aligned) {
        for seg in &line.segments {
            covered[seg.start..seg.end].fill(true);
        }
    }

    let mut spans: Vec<(usize, usize)> = Vec::new();
    let mut i = 0;
    while i < width {
        if !covered[i] {
            i += 1;
            continue;
        }
        let start = i;
        while i < width && covered[i] {
            i += 1;
        }
        if let Some(last) = spans.last_mut() {
            if start - last.1 < gap {
                last.1 = i;
                continue;
            }
        }
        spans.push((start, i));
    }

    spans
}

/// Index of the span a segment belongs to: largest overlap, else nearest.
fn assign_column(seg: &Segment, spans: &[(usize, usize)]) -> usize {
    let overlap = |(s, e): (usize, usize)| seg.end.min(e).saturating_sub(seg.start.max(s));
    let distance = |(s, e): (usize, usize)| {
        if seg.end <= s {
            s - seg.end
        } else {
            seg.start.saturating_sub(e)
        }
    };

    let mut best: Option<(usize, usize)> = None;
    for (i, &span) in spans.iter().enumerate() {
        let o = overlap(span);
        if o > 0 && best.map_or(true, |(_, b)| o > b) {
            best = Some((i, o));
        }
    }

    match best {
        Some((i, _)) => i,
        None => spans
            .iter()
            .enumerate()
            .min_by_key(|&(_, &span)| distance(span))
            .map(|(i, _)| i)
            .unwrap_or(0),
    }
}

fn build_table(block: &[BlockLine], gap: usize, merge_continuations: bool) -> Option<Table> {
    let spans = column_spans(block, gap);
    if spans.len() < 2 {
        return None;
    }

    let mut rows: Vec<Row> = Vec::new();
    for line in block {
        let mut row: Row = vec![None; spans.len()];
        for seg in &line.segments {
            let col = assign_column(seg, &spans);
            match &mut row[col] {
                Some(text) => {
                    text.push(' ');
                    text.push_str(&seg.text);
                }
                slot => *slot = Some(seg.text.clone()),
            }
        }

        if merge_continuations && row[0].is_none() {
            if let Some(prev) = rows.last_mut() {
                for (target, cell) in prev.iter_mut().zip(row) {
                    if let Some(text) = cell {
                        *target = Some(match target.take() {
                            Some(existing) => format!("{existing}\n{text}"),
                            None => text,
                        });
                    }
                }
                continue;
            }
        }
        rows.push(row);
    }

    Some(Table::new(rows))
}
