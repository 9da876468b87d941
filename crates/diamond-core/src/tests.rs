#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::{GameData, GameSnapshot};
    use crate::types::{PitchLocation, SimTime};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Waiting,
            GamePhase::Pitching,
            GamePhase::Batting,
            GamePhase::Result,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_pitch_outcome_serde() {
        let variants = vec![
            PitchOutcome::Strike,
            PitchOutcome::Ball,
            PitchOutcome::Hit,
            PitchOutcome::Foul,
            PitchOutcome::HomeRun,
            PitchOutcome::Out,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: PitchOutcome = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_team_serde() {
        let variants = vec![Team::Away, Team::Home];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: Team = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Pitch,
            PlayerCommand::Swing,
            PlayerCommand::Take,
            PlayerCommand::Reset,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(*cmd, back);
        }
    }

    /// Verify GameEvent round-trips through serde.
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::PitchThrown,
            GameEvent::Strikeout,
            GameEvent::Walk { runs_forced: 1 },
            GameEvent::HomeRun { runs: 4 },
            GameEvent::BaseHit { bases: 2, runs: 1 },
            GameEvent::OutInPlay,
            GameEvent::SideRetired {
                inning: 3,
                is_top: false,
            },
            GameEvent::GameOver {
                home_score: 5,
                away_score: 2,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify GameSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        // Verify the default snapshot is reasonably small
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify the strike zone is open on all four edges.
    #[test]
    fn test_pitch_location_zone() {
        assert!(PitchLocation::new(50.0, 50.0).in_zone());
        assert!(PitchLocation::new(20.1, 79.9).in_zone());

        // Exactly on the boundary is a ball
        assert!(!PitchLocation::new(20.0, 50.0).in_zone());
        assert!(!PitchLocation::new(80.0, 50.0).in_zone());
        assert!(!PitchLocation::new(50.0, 20.0).in_zone());
        assert!(!PitchLocation::new(50.0, 80.0).in_zone());

        // Clearly outside
        assert!(!PitchLocation::new(5.0, 50.0).in_zone());
        assert!(!PitchLocation::new(95.0, 50.0).in_zone());
        assert!(!PitchLocation::new(50.0, 99.9).in_zone());
        assert!(!PitchLocation::new(0.0, 0.0).in_zone());
    }

    /// Verify a fresh scoreboard: top of the 1st, everything zeroed.
    #[test]
    fn test_game_data_defaults() {
        let data = GameData::default();
        assert_eq!(data.inning, 1);
        assert!(data.is_top);
        assert_eq!(data.strikes, 0);
        assert_eq!(data.balls, 0);
        assert_eq!(data.outs, 0);
        assert_eq!(data.home_score, 0);
        assert_eq!(data.away_score, 0);
        assert_eq!(data.bases, [false; 3]);
    }

    #[test]
    fn test_batting_team() {
        let mut data = GameData::default();
        assert_eq!(data.batting_team(), Team::Away);
        data.is_top = false;
        assert_eq!(data.batting_team(), Team::Home);
    }

    /// Verify runs credit the side at bat.
    #[test]
    fn test_add_runs() {
        let mut data = GameData::default();
        data.add_runs(2);
        assert_eq!(data.away_score, 2);
        assert_eq!(data.home_score, 0);

        data.is_top = false;
        data.add_runs(3);
        assert_eq!(data.away_score, 2);
        assert_eq!(data.home_score, 3);
    }

    #[test]
    fn test_runners_on() {
        let mut data = GameData::default();
        assert_eq!(data.runners_on(), 0);
        data.bases = [true, false, true];
        assert_eq!(data.runners_on(), 2);
        data.bases = [true; 3];
        assert_eq!(data.runners_on(), 3);
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..30 {
            time.advance();
        }
        assert_eq!(time.tick, 30);
        // 30 ticks at 30Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }
}
