use crate::*;
use itertools::Itertools;

/// Clears the terminal and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Two panels per grid row: the values (terminals bracketed) on the left and
/// the greedy arrows (`■` on terminals) on the right.
///
/// `best` holds one entry per state; missing entries render as blank cells.
pub fn render_frame(grid: &GridWorld, values: &[Continous], best: &[Vec<Action>]) -> String {
    let size = grid.size() as usize;

    (0..size)
        .map(|row| {
            let states = (row * size)..((row + 1) * size);

            let value_cells = states
                .clone()
                .map(|s| value_cell(grid.is_terminal(s), values.get(s).copied().unwrap_or(0.)))
                .join("");
            let arrow_cells = states
                .map(|s| arrow_cell(grid.is_terminal(s), best.get(s).map_or(&[][..], Vec::as_slice)))
                .join("");

            format!("{value_cells} |{arrow_cells}").trim_end().to_string()
        })
        .join("\n")
}

fn value_cell(terminal: bool, v: Continous) -> String {
    if terminal {
        format!("[{:>6.2}]", v)
    } else {
        format!(" {:>6.2} ", v)
    }
}

fn arrow_cell(terminal: bool, actions: &[Action]) -> String {
    let glyphs: String = if terminal {
        "■".to_string()
    } else {
        actions.iter().map(Action::arrow).collect()
    };

    format!(" {:<4}", glyphs)
}
