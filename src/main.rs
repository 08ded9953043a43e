use grand_chess::board::{Board, Color};

fn main() {
    let board = Board::new();
    println!("{board}");

    match board.legal_moves_at(11, 0) {
        Ok(moves) => println!("Moves for White pawn at (11, 0): {moves:?}"),
        Err(err) => eprintln!("{err}"),
    }
    match board.legal_moves_at(14, 10) {
        Ok(moves) => println!("Moves for White king at (14, 10): {moves:?}"),
        Err(err) => eprintln!("{err}"),
    }
    println!("Is White in check? {}", board.in_check(Color::White));
}
