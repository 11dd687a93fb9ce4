//! Tests for game orchestration and match configuration.

use std::io::{self, Cursor, Write};
use strictly_minimax::{
    Game, HumanPlayer, Mark, MatchConfig, Orchestrator, Outcome, Player, PlayerError, PlayerKind,
    RandomPlayer, SmartPlayer,
};

#[test]
fn test_smart_never_loses_to_random() {
    let mut as_x = Orchestrator::new(
        Box::new(SmartPlayer::with_seed(Mark::X, 1)),
        Box::new(RandomPlayer::with_seed(Mark::O, 2)),
    )
    .unwrap();
    let tally = as_x.play_series(20, &mut io::sink()).unwrap();
    assert_eq!(tally.total(), 20);
    assert_eq!(tally.o_wins, 0);

    let mut as_o = Orchestrator::new(
        Box::new(RandomPlayer::with_seed(Mark::X, 3)),
        Box::new(SmartPlayer::with_seed(Mark::O, 4)),
    )
    .unwrap();
    let tally = as_o.play_series(20, &mut io::sink()).unwrap();
    assert_eq!(tally.x_wins, 0);
}

#[test]
fn test_transcript_reports_moves_and_result() {
    let mut orchestrator = Orchestrator::new(
        Box::new(RandomPlayer::with_seed(Mark::X, 5)),
        Box::new(SmartPlayer::with_seed(Mark::O, 6)),
    )
    .unwrap();
    let mut transcript = Vec::new();
    let record = orchestrator.run(&mut transcript).unwrap();
    let transcript = String::from_utf8(transcript).unwrap();

    assert!(transcript.starts_with("0|1|2\n"));
    assert!(transcript.contains(&format!("X makes a move to square {}", record.history()[0])));
    match record.outcome() {
        Outcome::Won(mark) => assert!(transcript.ends_with(&format!("{mark} wins!\n"))),
        Outcome::Draw => assert!(transcript.ends_with("It's a tie!\n")),
    }
    assert_eq!(record.game(), orchestrator.game());
}

#[test]
fn test_history_replays_to_final_state() {
    let mut orchestrator = Orchestrator::new(
        Box::new(RandomPlayer::with_seed(Mark::X, 8)),
        Box::new(RandomPlayer::with_seed(Mark::O, 9)),
    )
    .unwrap();
    let record = orchestrator.run(&mut io::sink()).unwrap();

    let mut game = Game::new();
    let mut mark = Mark::X;
    for &cell in record.history() {
        game.make_move(cell, mark).unwrap();
        mark = mark.opponent();
    }
    assert_eq!(&game, record.game());
}

#[test]
fn test_human_game_with_scripted_input() {
    // Cycling through every cell means each prompt eventually hits a free one.
    let script = "0\n1\n2\n3\n4\n5\n6\n7\n8\n".repeat(5);
    let human = HumanPlayer::new(Mark::X, Cursor::new(script.into_bytes()), io::sink());
    let mut orchestrator =
        Orchestrator::new(Box::new(human), Box::new(SmartPlayer::with_seed(Mark::O, 0)))
            .unwrap();

    let record = orchestrator.run(&mut io::sink()).unwrap();
    assert_eq!(record.history()[0], 0);
    assert_ne!(*record.outcome(), Outcome::Won(Mark::X));
}

/// Player that always claims the top-left cell.
struct Stubborn;

impl Player for Stubborn {
    fn mark(&self) -> Mark {
        Mark::O
    }

    fn name(&self) -> &str {
        "Stubborn"
    }

    fn get_move(&mut self, _game: &Game) -> Result<usize, PlayerError> {
        Ok(0)
    }
}

#[test]
fn test_illegal_move_is_an_error() {
    let human = HumanPlayer::new(Mark::X, Cursor::new(b"0\n".to_vec()), io::sink());
    let mut orchestrator = Orchestrator::new(Box::new(human), Box::new(Stubborn)).unwrap();
    let err = orchestrator.run(&mut io::sink()).unwrap_err();
    assert!(err.to_string().contains("Stubborn"));
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "x_player = \"smart\"\no_player = \"random\"\ngames = 3\nseed = 42").unwrap();

    let config = MatchConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.x_player(), PlayerKind::Smart);
    assert_eq!(*config.o_player(), PlayerKind::Random);

    let mut orchestrator = Orchestrator::new(
        config.x_player().build(Mark::X, config.x_seed()),
        config.o_player().build(Mark::O, config.o_seed()),
    )
    .unwrap();
    let tally = orchestrator.play_series(*config.games(), &mut io::sink()).unwrap();
    assert_eq!(tally.total(), 3);
    assert_eq!(tally.o_wins, 0);
}

#[test]
fn test_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = MatchConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
