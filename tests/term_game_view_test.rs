use term_2048::core::{Board, GameSnapshot};
use term_2048::engine::{EndReason, Phase};
use term_2048::term::{tile_color, FrameBuffer, GameView, Viewport};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn snap(rows: [[u32; 4]; 4], score: u32) -> GameSnapshot {
    GameSnapshot::new(Board::from_rows(rows), score, score, 0)
}

#[test]
fn welcome_screen_asks_to_play() {
    let fb = GameView::new().render(
        &GameSnapshot::default(),
        Phase::AwaitingStart,
        Viewport::new(80, 24),
    );
    let text = screen_text(&fb);
    assert!(text.contains("Welcome to 2048!"));
    assert!(text.contains("Do you want to play? (Y/N)"));
    assert!(!text.contains("+------+"));
}

#[test]
fn board_rows_are_boxed_and_right_aligned() {
    let s = snap([[2, 0, 0, 0], [0, 128, 0, 0], [0; 4], [0, 0, 0, 2048]], 1234);
    let fb = GameView::new().render(&s, Phase::Playing, Viewport::new(80, 24));
    let text = screen_text(&fb);

    assert!(text.contains("2048 - Console Version"));
    assert!(text.contains("Score: 1234 | Best: 1234 | Sum: 2178"));
    assert!(text.contains("+------+------+------+------+"));
    assert!(text.contains("|     2|     .|     .|     .|"));
    assert!(text.contains("|     .|   128|     .|     .|"));
    assert!(text.contains("|     .|     .|     .|  2048|"));
    assert!(text.contains("Controls:"));
    assert!(!text.contains("(Y/N)"));
}

#[test]
fn cells_widen_for_large_tiles() {
    let s = snap([[16384, 2, 0, 0], [0; 4], [0; 4], [0; 4]], 0);
    let fb = GameView::new().render(&s, Phase::Playing, Viewport::new(80, 24));
    let text = screen_text(&fb);
    assert!(text.contains("+-------+-------+-------+-------+"));
    assert!(text.contains("|  16384|      2|"));
}

#[test]
fn tiles_are_coloured_by_value() {
    let s = snap([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]], 0);
    let fb = GameView::new().render(&s, Phase::Playing, Viewport::new(80, 24));

    let mut found = Vec::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap();
            if cell.ch == '2' && cell.style.fg == tile_color(2) {
                found.push(2);
            }
            if cell.ch == '4' && cell.style.fg == tile_color(4) {
                assert!(cell.style.bold);
                found.push(4);
            }
        }
    }
    assert!(found.contains(&2));
    assert!(found.contains(&4));
}

#[test]
fn prompts_follow_phase() {
    let s = snap([[2, 4, 8, 16], [16, 8, 4, 2], [2, 4, 8, 16], [16, 8, 4, 2]], 96);
    let view = GameView::new();
    let vp = Viewport::new(80, 24);

    let game_over = Phase::AwaitingRestartConfirm { game_over: true };
    let over = screen_text(&view.render(&s, game_over, vp));
    assert!(over.contains("Game over! No more moves available."));
    assert!(over.contains("Play again? (Y/N)"));

    let quit = screen_text(&view.render(&s, Phase::AwaitingQuitConfirm, vp));
    assert!(quit.contains("Do you want to quit? (Y/N)"));

    let ended = screen_text(&view.render(&s, Phase::Ended(EndReason::Quit), vp));
    assert!(ended.contains("Thanks for playing!"));
}

#[test]
fn tiny_viewport_does_not_panic() {
    let s = snap([[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]], 0);
    let fb = GameView::new().render(&s, Phase::Playing, Viewport::new(10, 3));
    assert_eq!(fb.width(), 10);
    assert_eq!(fb.height(), 3);
}
