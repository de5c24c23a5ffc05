//! Exemplars compiled into the binary
//!
//! Each exemplar is drawn as rows of characters plus a legend mapping every
//! character to a colour. Labels follow legend order.

use crate::analysis::Exemplar;
use crate::io::error::{Result, SynthesisError, invalid_parameter};
use ndarray::Array2;

struct BundledExemplar {
    name: &'static str,
    rows: &'static [&'static str],
    legend: &'static [(char, [u8; 4])],
}

const FLOWERS: BundledExemplar = BundledExemplar {
    name: "flowers",
    rows: &[
        "................",
        "................",
        "...r.......y....",
        "..rcr.....yoy...",
        "...r.......y....",
        "...g...p...g....",
        "..gg..pcp..gg...",
        "...g...p...g....",
        "...g...g...g....",
        "GGGGGGGGGGGGGGGG",
        "DDDDDDDDDDDDDDDD",
        "DDDDDDDDDDDDDDDD",
    ],
    legend: &[
        ('.', [174, 214, 241, 255]),
        ('r', [214, 48, 49, 255]),
        ('c', [253, 203, 110, 255]),
        ('y', [255, 234, 167, 255]),
        ('o', [225, 112, 85, 255]),
        ('p', [162, 155, 254, 255]),
        ('g', [0, 148, 50, 255]),
        ('G', [46, 204, 113, 255]),
        ('D', [121, 85, 72, 255]),
    ],
};

const BRICKS: BundledExemplar = BundledExemplar {
    name: "bricks",
    rows: &[
        "BBBBBBBM", "BBBBBBBM", "MMMMMMMM", "BBBMBBBB", "BBBMBBBB", "MMMMMMMM",
    ],
    legend: &[('B', [178, 34, 34, 255]), ('M', [220, 220, 220, 255])],
};

const MAZE: BundledExemplar = BundledExemplar {
    name: "maze",
    rows: &[
        "WWWWWWWW", "W.....W.", "W.WWW.W.", "W.W...W.", "W.W.WWW.", "W.W.....", "W.WWWWW.",
        "W.......",
    ],
    legend: &[('W', [40, 40, 60, 255]), ('.', [240, 240, 230, 255])],
};

const LAKE: BundledExemplar = BundledExemplar {
    name: "lake",
    rows: &[
        "GGGGGGGGGG",
        "GGGSSSSGGG",
        "GGSWWWWSGG",
        "GSWWWWWWSG",
        "GSWWWWWWSG",
        "GGSWWWWSGG",
        "GGGSSSSGGG",
        "GGGGGGGGGG",
    ],
    legend: &[
        ('G', [106, 176, 76, 255]),
        ('S', [238, 214, 175, 255]),
        ('W', [64, 120, 200, 255]),
    ],
};

const BUNDLED: [BundledExemplar; 4] = [FLOWERS, BRICKS, MAZE, LAKE];

/// Names of every bundled exemplar, default first
pub fn available() -> Vec<&'static str> {
    BUNDLED.iter().map(|exemplar| exemplar.name).collect()
}

/// Whether `selector` names a bundled exemplar
pub fn is_bundled(selector: &str) -> bool {
    BUNDLED.iter().any(|exemplar| exemplar.name == selector)
}

/// Build the bundled exemplar called `selector`
///
/// # Errors
///
/// Returns an error if no bundled exemplar has that name
pub fn load_bundled(selector: &str) -> Result<Exemplar> {
    let bundled = BUNDLED
        .iter()
        .find(|exemplar| exemplar.name == selector)
        .ok_or_else(|| SynthesisError::UnknownExemplar {
            selector: selector.to_string(),
            available: available(),
        })?;
    build(bundled)
}

fn build(bundled: &BundledExemplar) -> Result<Exemplar> {
    let height = bundled.rows.len();
    let width = bundled.rows.first().map_or(0, |row| row.chars().count());

    let mut labels = Array2::zeros((height, width));
    for (row, line) in bundled.rows.iter().enumerate() {
        if line.chars().count() != width {
            return Err(invalid_parameter(
                bundled.name,
                &line.chars().count(),
                &format!("every row must be {width} characters wide"),
            ));
        }
        for (col, symbol) in line.chars().enumerate() {
            let label = bundled
                .legend
                .iter()
                .position(|&(key, _)| key == symbol)
                .ok_or_else(|| invalid_parameter(bundled.name, &symbol, &"not in legend"))?;
            if let Some(cell) = labels.get_mut((row, col)) {
                *cell = label;
            }
        }
    }

    let palette = bundled.legend.iter().map(|&(_, color)| color).collect();
    Exemplar::from_labels(labels, palette)
}
