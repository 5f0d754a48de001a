use mini_games_common::games::tictactoe::{BOARD_SIZE, Board, Cell};

/// Grid with 1-based row and column headers, as the player types coordinates.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("\n    1   2   3\n");
    for row in 0..BOARD_SIZE {
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|col| board.get(row, col).unwrap_or(Cell::Empty).symbol().to_string())
            .collect();
        out.push_str(&format!("{}   {}\n", row + 1, cells.join(" | ")));
        if row + 1 < BOARD_SIZE {
            out.push_str("   ---+---+---\n");
        }
    }
    out
}
