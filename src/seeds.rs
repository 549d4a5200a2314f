use crate::{grid::dedup_seeds, Cell, Position};
use anyhow::{anyhow, Result};
use rand::{Rng, SeedableRng};

/// Well-known starting patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    /// Period-4 spaceship moving towards increasing `x` and `y`.
    Glider,
    /// Period-2 oscillator, starts horizontal.
    Blinker,
    /// 2x2 still life.
    Block,
}

impl Preset {
    const GLIDER: &'static [(u32, u32)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
    const BLINKER: &'static [(u32, u32)] = &[(0, 0), (1, 0), (2, 0)];
    const BLOCK: &'static [(u32, u32)] = &[(0, 0), (1, 0), (0, 1), (1, 1)];

    /// Alive seeds of the preset with its top-left corner at `offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if a shifted coordinate overflows `u32`.
    pub fn cells(self, offset: Position) -> Result<Vec<Cell>> {
        let shape = match self {
            Preset::Glider => Self::GLIDER,
            Preset::Blinker => Self::BLINKER,
            Preset::Block => Self::BLOCK,
        };
        shape
            .iter()
            .map(|&(x, y)| {
                offset
                    .offset(x as i64, y as i64)
                    .map(|p| Cell::alive(p.x, p.y))
                    .ok_or_else(|| anyhow!("{:?} does not fit at {:?}", self, offset))
            })
            .collect()
    }
}

/// The glider used by the default simulation: alive at (8, 12), (9, 13),
/// (10, 11), (10, 12) and (10, 13).
pub fn default_seeds() -> Vec<Cell> {
    Preset::Glider
        .cells(Position::new(8, 11))
        .expect("Glider fits at (8, 11)")
}

/// Parses alive seeds from RLE text, placing the top-left corner of the
/// pattern at `offset`.
///
/// The header is a comma-separated list of `key = value` entries: `x` and
/// `y` give the size of the pattern's box and are required, `rule` is
/// optional and must be B3/S23. Lines starting with `#` are comments. In the
/// body `b` is a dead cell, `o` is an alive one, `$` ends a row and `!` ends
/// the pattern; any of them may be prefixed with a run count.
///
/// # Errors
///
/// Returns an error if the header is missing or malformed, the rule is not
/// B3/S23, an unknown character is met or a cell lies outside of the
/// declared box.
pub fn parse_rle(text: &str, offset: Position) -> Result<Vec<Cell>> {
    let mut lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));
    let header = lines.next().ok_or_else(|| anyhow!("RLE text has no header"))?;
    let (width, height) = parse_rle_header(header)?;

    let mut cells = Vec::new();
    let (mut x, mut y, mut count) = (0u32, 0u32, 0u32);

    'outer: for line in lines {
        for c in line.chars() {
            match c {
                '0'..='9' => {
                    count = count
                        .checked_mul(10)
                        .and_then(|n| n.checked_add(c as u32 - '0' as u32))
                        .ok_or_else(|| anyhow!("Run count is too large"))?;
                }
                'b' => {
                    x = x.saturating_add(count.max(1));
                    count = 0;
                }
                'o' => {
                    let run = count.max(1);
                    for i in 0..run {
                        let cx = x.saturating_add(i);
                        if cx >= width || y >= height {
                            return Err(anyhow!(
                                "Seed ({}, {}) is outside of the {}x{} pattern box",
                                cx,
                                y,
                                width,
                                height
                            ));
                        }
                        let position = offset
                            .offset(cx as i64, y as i64)
                            .ok_or_else(|| anyhow!("Offset {:?} is too large", offset))?;
                        cells.push(Cell::alive(position.x, position.y));
                    }
                    x = x.saturating_add(run);
                    count = 0;
                }
                '$' => {
                    y = y.saturating_add(count.max(1));
                    x = 0;
                    count = 0;
                }
                '!' => break 'outer,
                ' ' | '\t' => continue,
                _ => return Err(anyhow!("Invalid RLE character: '{}'", c)),
            }
        }
    }

    Ok(cells)
}

/// Reads `x = <width>, y = <height>[, rule = B3/S23]` in any order.
fn parse_rle_header(line: &str) -> Result<(u32, u32)> {
    let (mut width, mut height) = (None, None);
    for entry in line.split(',') {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| anyhow!("Header entry `{}` is not `key = value`", entry.trim()))?;
        let value = value.trim();
        match key.trim() {
            "x" => width = Some(value.parse::<u32>()?),
            "y" => height = Some(value.parse::<u32>()?),
            "rule" if value.eq_ignore_ascii_case("B3/S23") => (),
            "rule" => return Err(anyhow!("Only B3/S23 rule is supported, got {}", value)),
            other => return Err(anyhow!("Unknown header key `{}`", other)),
        }
    }
    match (width, height) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(anyhow!("Header must give both `x` and `y`")),
    }
}

/// Fills a `width x height` area with alive seeds, each cell being alive
/// with probability `density`.
///
/// # Arguments
///
/// * `seed` - Optional seed for the random number generator.
///   If None, seeds from the OS.
///
/// # Errors
///
/// Returns an error if `density` is not within `[0, 1]`.
pub fn random(width: u32, height: u32, density: f64, seed: Option<u64>) -> Result<Vec<Cell>> {
    if !(0.0..=1.0).contains(&density) {
        return Err(anyhow!("Density {} is not within [0, 1]", density));
    }
    let mut rng = if let Some(x) = seed {
        rand_chacha::ChaCha8Rng::seed_from_u64(x)
    } else {
        rand_chacha::ChaCha8Rng::from_os_rng()
    };
    let mut cells = Vec::new();
    for x in 0..width {
        for y in 0..height {
            if rng.random_bool(density) {
                cells.push(Cell::alive(x, y));
            }
        }
    }
    Ok(cells)
}

/// Merges several seed lists; for a position given more than once the
/// latest state wins.
pub fn merge(lists: impl IntoIterator<Item = Vec<Cell>>) -> Vec<Cell> {
    dedup_seeds(lists.into_iter().flatten())
}

#[cfg(test)]
mod tests {
    use super::*;
    const SEED: u64 = 42;

    fn positions(cells: &[Cell]) -> Vec<(u32, u32)> {
        let mut result = cells
            .iter()
            .map(|c| (c.position.x, c.position.y))
            .collect::<Vec<_>>();
        result.sort();
        result
    }

    #[test]
    fn test_default_seeds() {
        assert_eq!(
            positions(&default_seeds()),
            vec![(8, 12), (9, 13), (10, 11), (10, 12), (10, 13)]
        );
    }

    #[test]
    fn test_rle_glider_positions() {
        let offset = Position::new(3, 4);
        let rle = parse_rle("#C glider\nx = 3, y = 3, rule = B3/S23\nbo$2bo$3o!", offset).unwrap();
        // RLE rows follow y, so `bo` is (1, 0)
        assert_eq!(positions(&rle), vec![(3, 6), (4, 4), (4, 6), (5, 5), (5, 6)]);
    }

    #[test]
    fn test_rle_matches_glider_preset() {
        let offset = Position::new(3, 4);
        let rle = parse_rle("x = 3, y = 3\n2bo$obo$b2o!", offset).unwrap();
        assert_eq!(
            positions(&rle),
            positions(&Preset::Glider.cells(offset).unwrap())
        );
    }

    #[test]
    fn test_rle_header_variants() {
        let origin = Position::new(0, 0);
        let cells = parse_rle("x = 3, y = 1\n3o!", origin).unwrap();
        assert_eq!(positions(&cells), vec![(0, 0), (1, 0), (2, 0)]);
        // order of entries does not matter, body may span lines
        let cells = parse_rle("y=2,x=2,rule=b3/s23\no$\nbo!", origin).unwrap();
        assert_eq!(positions(&cells), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_rle_errors() {
        let origin = Position::new(0, 0);
        assert!(parse_rle("", origin).is_err());
        assert!(parse_rle("# only a comment", origin).is_err());
        assert!(parse_rle("x = 3\no!", origin).is_err());
        assert!(parse_rle("x = 3, y = 3, z = 1\no!", origin).is_err());
        assert!(parse_rle("x = 3, y\no!", origin).is_err());
        assert!(parse_rle("x = 3, y = 3, rule = B36/S23\no!", origin).is_err());
        assert!(parse_rle("x = 2, y = 1\n3o!", origin).is_err());
        assert!(parse_rle("x = 2, y = 1\no$o!", origin).is_err());
        assert!(parse_rle("x = 2, y = 1\nz!", origin).is_err());
    }

    #[test]
    fn test_random_is_reproducible() {
        let a = random(16, 16, 0.5, Some(SEED)).unwrap();
        let b = random(16, 16, 0.5, Some(SEED)).unwrap();
        assert_eq!(a, b);
        assert!(a.iter().all(|c| c.position.x < 16 && c.position.y < 16));
    }

    #[test]
    fn test_random_density_bounds() {
        assert!(random(4, 4, 0.0, Some(SEED)).unwrap().is_empty());
        assert_eq!(random(4, 4, 1.0, Some(SEED)).unwrap().len(), 16);
        assert!(random(4, 4, 1.5, Some(SEED)).is_err());
        assert!(random(4, 4, f64::NAN, Some(SEED)).is_err());
    }

    #[test]
    fn test_merge_keeps_latest_state() {
        let merged = merge([vec![Cell::alive(1, 1)], vec![Cell::dead(1, 1), Cell::alive(0, 0)]]);
        assert_eq!(merged, vec![Cell::alive(0, 0), Cell::dead(1, 1)]);
    }
}
