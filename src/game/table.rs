//! Outcome Table
//!
//! Help grid listing every pairing. Rows are the user's move, columns the
//! computer's, and each cell is the result for the user.

use std::fmt;

use crate::core::rules::{Outcome, Rules};

/// Corner label of the grid.
pub const CORNER: &str = "v User\\PC >";

/// Narrowest outcome column (fits "Lose" / "Draw").
const MIN_CELL_WIDTH: usize = 4;

/// Pairwise outcome grid over a rule set.
#[derive(Clone, Copy, Debug)]
pub struct OutcomeTable<'a> {
    rules: &'a Rules,
}

impl<'a> OutcomeTable<'a> {
    /// Table for the given rules.
    pub fn new(rules: &'a Rules) -> Self {
        Self { rules }
    }

    /// Result for the row move against the column move.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Outcome {
        self.rules.compare_index(row, col)
    }

    /// Render the full grid, one line per row plus borders.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OutcomeTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let moves = self.rules.moves();
        let label_width = moves.widest().max(CORNER.chars().count());
        let widths: Vec<usize> = moves
            .iter()
            .map(|m| m.chars().count().max(MIN_CELL_WIDTH))
            .collect();

        let mut border = format!("+{}+", "-".repeat(label_width + 2));
        for w in &widths {
            border.push_str(&"-".repeat(w + 2));
            border.push('+');
        }

        writeln!(f, "{}", border)?;

        write!(f, "| {:<w$} |", CORNER, w = label_width)?;
        for (name, w) in moves.iter().zip(&widths) {
            write!(f, " {:<w$} |", name, w = *w)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", border)?;

        for (row, name) in moves.iter().enumerate() {
            write!(f, "| {:<w$} |", name, w = label_width)?;
            for (col, w) in widths.iter().enumerate() {
                write!(f, " {:<w$} |", self.cell(row, col), w = *w)?;
            }
            writeln!(f)?;
            writeln!(f, "{}", border)?;
        }

        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::moves::MoveSet;

    fn rules(names: &[&str]) -> Rules {
        Rules::new(MoveSet::new(names.iter().copied()).unwrap())
    }

    #[test]
    fn test_classic_grid() {
        let r = rules(&["Rock", "Paper", "Scissors"]);
        let expected = "\
+-------------+------+-------+----------+
| v User\\PC > | Rock | Paper | Scissors |
+-------------+------+-------+----------+
| Rock        | Draw | Win   | Lose     |
+-------------+------+-------+----------+
| Paper       | Lose | Draw  | Win      |
+-------------+------+-------+----------+
| Scissors    | Win  | Lose  | Draw     |
+-------------+------+-------+----------+
";
        assert_eq!(OutcomeTable::new(&r).render(), expected);
    }

    #[test]
    fn test_grid_is_square_and_consistent() {
        let r = rules(&["Rock", "Paper", "Scissors", "Lizard", "Spock"]);
        let table = OutcomeTable::new(&r);
        let text = table.render();

        // Header + 5 rows, each followed by a border, plus the top border
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1 + 2 * 6);

        let rows: Vec<Vec<&str>> = lines
            .iter()
            .filter(|l| l.starts_with('|'))
            .map(|l| l.trim_matches('|').split('|').map(str::trim).collect())
            .collect();

        assert_eq!(rows.len(), 6);
        for row in &rows {
            assert_eq!(row.len(), 6);
        }
        assert_eq!(&rows[0][1..], ["Rock", "Paper", "Scissors", "Lizard", "Spock"]);

        for i in 0..5 {
            assert_eq!(rows[i + 1][0], &r.moves()[i]);
            for j in 0..5 {
                assert_eq!(rows[i + 1][j + 1], table.cell(i, j).as_str());
                assert_eq!(table.cell(i, j), table.cell(j, i).reversed());
            }
            assert_eq!(rows[i + 1][i + 1], "Draw");
        }
    }

    #[test]
    fn test_display_matches_render() {
        let r = rules(&["Rock", "Paper", "Scissors"]);
        let table = OutcomeTable::new(&r);
        assert_eq!(format!("{}", table), table.render());
        assert!(table.render().ends_with("+\n"));
    }

    #[test]
    fn test_long_names_widen_columns() {
        let r = rules(&["a", "an-unusually-long-move", "c"]);
        let text = OutcomeTable::new(&r).render();

        let widths: Vec<usize> = text.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "ragged grid:\n{}", text);
    }
}
