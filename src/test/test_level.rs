mod test {
    use crate::core::{Direction, MapGrid, Position};
    use crate::error::{FormatError, LoadError, ParseError};
    use crate::level::{Level, Score};
    use crate::test::test_util::{GameTestState, temp_level};

    #[test]
    fn parse_format_round_trips() {
        let map = "WWWWW\nWP BW\nW  GW\nWWWWW";
        let (grid, player) = MapGrid::parse(map).expect("map must parse");

        assert_eq!(player, Position { x: 1, y: 1 });
        let formatted = grid.format().expect("template grid must format");
        assert_eq!(formatted, map);

        let (reparsed, _) = MapGrid::parse(&formatted).expect("formatted map must parse");
        assert_eq!(reparsed, grid);
    }

    #[test]
    fn ragged_rows_keep_their_length() {
        let map = "WWW\nWP\nWWWW";
        let (grid, _) = MapGrid::parse(map).expect("map must parse");

        let lengths: Vec<usize> = grid.rows().iter().map(|row| row.len()).collect();
        assert_eq!(lengths, vec![3, 2, 4]);
        assert_eq!(grid.format().expect("must format"), map);

        // A cell beyond a short row is out of bounds even though longer rows
        // reach that column.
        assert!(!grid.contains(Position { x: 2, y: 1 }));
        assert!(grid.contains(Position { x: 2, y: 2 }));
    }

    #[test]
    fn unknown_symbol_fails_parse() {
        let result = MapGrid::parse("WP\nWXW");
        assert_eq!(
            result.unwrap_err(),
            ParseError::UnknownSymbol {
                symbol: 'X',
                row: 1,
                column: 1,
            }
        );
    }

    #[test]
    fn map_without_player_fails_parse() {
        assert_eq!(
            MapGrid::parse("WW\nGW").unwrap_err(),
            ParseError::MissingPlayer
        );
    }

    #[test]
    fn map_with_two_players_fails_parse() {
        assert_eq!(
            MapGrid::parse("WPPW").unwrap_err(),
            ParseError::MultiplePlayers
        );
    }

    #[test]
    fn box_on_goal_is_unrepresentable() {
        let mut game = GameTestState::new("WPBG W");
        game.assert_move(Direction::Right);

        assert_eq!(
            game.grid.format().unwrap_err(),
            FormatError::Unrepresentable { x: 3, y: 0 }
        );
    }

    #[test]
    fn score_record_keeps_best_per_field() {
        let mut score = Score { time: 10, steps: 5 };

        score.record(8, 3);
        assert_eq!(score, Score { time: 8, steps: 3 });

        score.record(12, 7);
        assert_eq!(score, Score { time: 8, steps: 3 });
    }

    #[test]
    fn score_fields_improve_independently() {
        let mut score = Score { time: 10, steps: 5 };

        // A slower run with fewer steps still improves the step record.
        score.record(12, 3);
        assert_eq!(score, Score { time: 10, steps: 3 });
    }

    #[test]
    fn zero_score_is_uninitialized_sentinel() {
        let mut score = Score::default();

        score.record(100, 50);
        assert_eq!(score, Score { time: 100, steps: 50 });
    }

    #[test]
    fn level_loads_map_and_score() {
        let map = "WWWWW\nWP BW\nW  GW\nWWWWW";
        let (_file, level) = temp_level(map, Score { time: 30, steps: 12 });

        assert_eq!(level.score, Score { time: 30, steps: 12 });
        assert_eq!(level.player_start(), Position { x: 1, y: 1 });
        assert_eq!(level.grid.format().expect("must format"), map);
    }

    #[test]
    fn update_score_persists_to_source_file() {
        let map = "WWWWW\nWP BW\nW  GW\nWWWWW";
        let (_file, mut level) = temp_level(map, Score::default());

        level
            .update_score(45, 20)
            .expect("saving to a temp file must succeed");

        let reloaded = Level::load_from_file(&level.source).expect("level must reload");
        assert_eq!(reloaded.score, Score { time: 45, steps: 20 });
        assert_eq!(reloaded.grid.format().expect("must format"), map);
    }

    #[test]
    fn failed_save_leaves_memory_updated() {
        let (_file, mut level) = temp_level("WP BW", Score::default());
        // A directory is not writable as a file, so the save must fail.
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        level.source = dir.path().to_path_buf();

        let result = level.update_score(10, 4);

        assert!(result.is_err());
        assert_eq!(level.score, Score { time: 10, steps: 4 });
    }

    #[test]
    fn malformed_record_fails_load() {
        let file = tempfile::NamedTempFile::new().expect("failed to create temp file");
        std::fs::write(file.path(), "{\"map\": \"WP\"}").expect("failed to write");

        match Level::load_from_file(file.path()) {
            Err(LoadError::Json { .. }) => {}
            other => panic!("expected Json load error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn missing_file_fails_load() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("does_not_exist.json");

        match Level::load_from_file(&path) {
            Err(LoadError::Io { .. }) => {}
            other => panic!("expected Io load error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn invalid_map_in_record_fails_load() {
        let file = tempfile::NamedTempFile::new().expect("failed to create temp file");
        std::fs::write(
            file.path(),
            "{\"map\": \"WXW\", \"score\": {\"time\": 0, \"steps\": 0}}",
        )
        .expect("failed to write");

        match Level::load_from_file(file.path()) {
            Err(LoadError::Parse { .. }) => {}
            other => panic!("expected Parse load error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn load_directory_skips_unloadable_levels() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let good = "{\"map\": \"WP BGW\", \"score\": {\"time\": 0, \"steps\": 0}}";
        std::fs::write(dir.path().join("a_level.json"), good).expect("failed to write");
        std::fs::write(dir.path().join("b_broken.json"), "not json").expect("failed to write");
        std::fs::write(dir.path().join("c_level.json"), good).expect("failed to write");

        let levels = Level::load_directory(dir.path()).expect("directory must be readable");

        assert_eq!(levels.len(), 2);
        assert!(levels[0].source < levels[1].source);
    }
}
