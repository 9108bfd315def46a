use std::cmp::Ordering;

use crate::board::{Board, Position, Token};
use crate::error::InvalidMove;

/// Drops a token at `(column, row)` and lets the nearest edge pull it in.
///
/// Each axis pulls towards its closer edge, or not at all when the token is
/// centred on that axis. If both axes pull, the closer edge wins and equal
/// distances cancel both pulls. The token then slides until the next cell is
/// off the board or occupied.
pub(super) fn put_token(
    board: &mut Board,
    color: Token,
    column: usize,
    row: usize,
) -> Result<Position, InvalidMove> {
    if !board.is_valid_cell(column, row) {
        return Err(InvalidMove::OutOfRange { column, row });
    }
    let pull = compute_pull(column, row, board.width(), board.height());
    let resting = slide(board, pull, column, row);
    log::trace!(
        "Gravity pulled ({}, {}) by {:?} to ({}, {})",
        column,
        row,
        pull,
        resting.column,
        resting.row
    );

    if !board.get_slot(resting.column, resting.row).is_empty() {
        return Err(InvalidMove::Occupied {
            column: resting.column,
            row: resting.row,
        });
    }
    Ok(board.place(color, resting.column, resting.row))
}

/// A unit step `(dx, dy)`; `dy = -1` is towards the top.
type Pull = (isize, isize);

/// Direction and distance to the closer edge of one axis, if one is closer.
fn axis_pull(towards_start: usize, towards_end: usize) -> Option<(isize, usize)> {
    match towards_start.cmp(&towards_end) {
        Ordering::Less => Some((-1, towards_start)),
        Ordering::Greater => Some((1, towards_end)),
        Ordering::Equal => None,
    }
}

fn compute_pull(column: usize, row: usize, width: usize, height: usize) -> Pull {
    let vertical = axis_pull(row, height - 1 - row);
    let horizontal = axis_pull(column, width - 1 - column);

    match (horizontal, vertical) {
        (Some((dx, horizontal_distance)), Some((dy, vertical_distance))) => {
            match horizontal_distance.cmp(&vertical_distance) {
                Ordering::Less => (dx, 0),
                Ordering::Greater => (0, dy),
                Ordering::Equal => (0, 0),
            }
        }
        (Some((dx, _)), None) => (dx, 0),
        (None, Some((dy, _))) => (0, dy),
        (None, None) => (0, 0),
    }
}

fn slide(board: &Board, (dx, dy): Pull, column: usize, row: usize) -> Position {
    let mut resting = Position::new(column, row);
    if (dx, dy) == (0, 0) {
        return resting;
    }
    while let (Some(next_column), Some(next_row)) = (
        resting.column.checked_add_signed(dx),
        resting.row.checked_add_signed(dy),
    ) {
        if !board.is_valid_cell(next_column, next_row)
            || !board.get_slot(next_column, next_row).is_empty()
        {
            break;
        }
        resting = Position::new(next_column, next_row);
    }
    resting
}

#[cfg(test)]
mod tests {
    use super::compute_pull;
    use crate::board::{Board, Position, Token};
    use crate::error::InvalidMove;
    use crate::strategy::MoveStrategy;

    fn empty(width: usize, height: usize) -> Board {
        Board::new(width, height, MoveStrategy::Gravity)
    }

    fn gravity_board(rows: &[&str]) -> Board {
        Board::from_rows(rows, rows[0].len(), rows.len(), MoveStrategy::Gravity).unwrap()
    }

    #[test]
    fn test_centre_stays_put() {
        let mut board = empty(5, 5);
        assert_eq!(board.put_token(Token::Red, 2, 2), Ok(Position::new(2, 2)));
        assert_eq!(board.tokens(), 1);
        assert_eq!(board.tokens_in_column(2), 1);
        assert_eq!(board, gravity_board(&["     ", "     ", "  R  ", "     ", "     "]));
    }

    #[test]
    fn test_single_edge_pulls_all_the_way() {
        let mut board = empty(5, 5);
        assert_eq!(board.put_token(Token::Red, 2, 1), Ok(Position::new(2, 0)));
        assert_eq!(board, gravity_board(&["  R  ", "     ", "     ", "     ", "     "]));
    }

    #[test]
    fn test_equal_distances_cancel() {
        let mut board = empty(5, 5);
        assert_eq!(compute_pull(1, 1, 5, 5), (0, 0));
        assert_eq!(board.put_token(Token::Red, 1, 1), Ok(Position::new(1, 1)));
        assert_eq!(board.tokens_in_column(1), 1);
    }

    #[test]
    fn test_occupied_drop_point_slides_on() {
        // The left edge pulls (2, 3); the cell itself is taken but (1, 3) is free
        let mut board = gravity_board(&[
            "       ", //
            "       ",
            "       ",
            "  Y    ",
            "       ",
            "       ",
            "       ",
        ]);
        assert_eq!(board.put_token(Token::Red, 2, 3), Ok(Position::new(0, 3)));
        assert_eq!(board.get_slot(2, 3), Token::Yellow);
        assert_eq!(board.tokens(), 2);
        assert_eq!(board.tokens_in_column(0), 1);
    }

    #[test]
    fn test_closer_axis_wins() {
        // 5 wide, 6 tall: the top is 2 away, the sides are tied
        let mut board = empty(5, 6);
        assert_eq!(board.put_token(Token::Red, 2, 2), Ok(Position::new(2, 0)));

        // 6 wide, 5 tall: the left is 2 away, top and bottom are tied
        let mut board = empty(6, 5);
        assert_eq!(board.put_token(Token::Red, 2, 2), Ok(Position::new(0, 2)));
        assert_eq!(board.tokens_in_column(0), 1);
        assert_eq!(board.tokens_in_column(2), 0);

        // Left is 1 away, bottom is 3 away
        assert_eq!(compute_pull(1, 5, 10, 10), (-1, 0));
        // Right is 4 away, bottom is 1 away
        assert_eq!(compute_pull(5, 8, 10, 10), (0, 1));
    }

    #[test]
    fn test_stops_before_obstruction() {
        let mut board = gravity_board(&["       ", "       ", "Y      ", "       ", "       "]);
        // Row 2 is the vertical middle, so only the left edge pulls
        assert_eq!(board.put_token(Token::Red, 2, 2), Ok(Position::new(1, 2)));
        assert_eq!(
            board.put_token(Token::Yellow, 1, 2),
            Err(InvalidMove::Occupied { column: 1, row: 2 })
        );
        assert_eq!(board.put_token(Token::Red, 2, 3), Ok(Position::new(2, 4)));
        assert_eq!(board.tokens(), 3);
    }

    #[test]
    fn test_occupied_resting_cell_rejected() {
        let mut board = empty(5, 5);
        board.put_token(Token::Red, 2, 2).unwrap();
        assert_eq!(
            board.put_token(Token::Yellow, 2, 2),
            Err(InvalidMove::Occupied { column: 2, row: 2 })
        );
        assert_eq!(board.tokens(), 1);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut board = empty(10, 10);
        assert_eq!(
            board.put_token(Token::Yellow, 10, 0),
            Err(InvalidMove::OutOfRange { column: 10, row: 0 })
        );
        assert_eq!(
            board.put_token(Token::Yellow, 0, 10),
            Err(InvalidMove::OutOfRange { column: 0, row: 10 })
        );
    }

    #[test]
    fn test_corner_stays_in_corner() {
        let mut board = empty(10, 10);
        assert_eq!(board.put_token(Token::Yellow, 0, 0), Ok(Position::new(0, 0)));
        assert_eq!(board.put_token(Token::Red, 9, 9), Ok(Position::new(9, 9)));
    }
}
