use crate::{CellState, Grid, Position};
use std::io::{self, Write};

pub const HEADER: &str = "New generation:";
pub const ALIVE_GLYPH: &str = " @ ";
pub const DEAD_GLYPH: &str = " - ";

/// Writes a text view of `grid` to `out`.
///
/// The view covers `[0, width) x [0, height)`: one line per row `y`, one
/// 3-character glyph per column `x`, preceded by a header line. Positions
/// of the view that fall outside of the grid print nothing.
pub fn render_to<W: Write>(out: &mut W, grid: &Grid, width: u32, height: u32) -> io::Result<()> {
    writeln!(out, "{}", HEADER)?;
    for y in 0..height {
        for x in 0..width {
            match grid.get(Position::new(x, y)) {
                Some(CellState::Alive) => out.write_all(ALIVE_GLYPH.as_bytes())?,
                Some(CellState::Dead) => out.write_all(DEAD_GLYPH.as_bytes())?,
                None => (),
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Renders the whole grid into a string.
pub fn render(grid: &Grid) -> String {
    let mut buf = Vec::new();
    render_to(&mut buf, grid, grid.width(), grid.height())
        .expect("Writing into a Vec never fails");
    String::from_utf8(buf).expect("Glyphs are ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_render_layout() {
        let grid = Grid::new(3, 2, [Cell::alive(1, 0), Cell::alive(2, 1)]).unwrap();
        assert_eq!(
            render(&grid),
            "New generation:\n -  @  - \n -  -  @ \n"
        );
    }

    #[test]
    fn test_render_rows_follow_y() {
        // a vertical blinker must render as a column
        let grid = Grid::new(3, 3, [Cell::alive(1, 0), Cell::alive(1, 1), Cell::alive(1, 2)]).unwrap();
        let text = render(&grid);
        let rows = text.lines().skip(1).collect::<Vec<_>>();
        assert_eq!(rows, vec![" -  @  - "; 3]);
    }

    #[test]
    fn test_view_larger_than_grid_skips_absent_positions() {
        let grid = Grid::new(2, 1, [Cell::alive(0, 0)]).unwrap();
        let mut buf = Vec::new();
        render_to(&mut buf, &grid, 3, 2).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "New generation:\n @  - \n\n");
    }
}
