use hotel_app::app_loop::{AppMode, AppState, Flow};
use hotel_core::{GameSession, HotelConfig, InputPayload, RunJournal, RunOutcome, replay_to_end};

fn session(seed: u64) -> GameSession {
    GameSession::initialize(HotelConfig::default(), seed)
}

fn code_of(session: &GameSession) -> String {
    session.passcode().digits().iter().map(|digit| char::from(b'0' + digit)).collect()
}

fn wrong_code_of(session: &GameSession) -> String {
    session.passcode().digits().iter().map(|digit| char::from(b'0' + (digit + 1) % 10)).collect()
}

#[test]
fn test_elevator_moves_from_lobby_to_hallway() {
    let mut session = session(12345);
    let mut app = AppState::new();
    assert_eq!(app.mode, AppMode::Lobby);

    assert_eq!(app.handle_line(&mut session, "floor 1"), Flow::Continue);
    assert_eq!(app.mode, AppMode::Hallway { floor: 1 });
    assert_eq!(session.current_floor(), 1);
    assert_eq!(app.accepted_inputs, vec![InputPayload::GoToFloor { floor: 1 }]);

    app.handle_line(&mut session, "down");
    assert_eq!(app.mode, AppMode::Lobby);
}

#[test]
fn test_out_of_range_floor_is_refused_and_not_recorded() {
    let mut session = session(12345);
    let mut app = AppState::new();

    app.handle_line(&mut session, "floor 99");
    assert_eq!(app.mode, AppMode::Lobby);
    assert!(app.accepted_inputs.is_empty());
    assert_eq!(app.output.len(), 1);
}

#[test]
fn test_rooms_cannot_be_entered_from_the_lobby() {
    let mut session = session(7);
    let mut app = AppState::new();

    app.handle_line(&mut session, "enter 0");
    assert_eq!(app.output, vec!["There are no rooms in the lobby.".to_string()]);
    assert!(app.accepted_inputs.is_empty());
}

#[test]
fn test_keypad_victory_records_the_attempt() {
    let mut session = session(2024);
    let mut app = AppState::new();
    let code = code_of(&session);

    app.handle_line(&mut session, "keypad");
    assert_eq!(app.mode, AppMode::Keypad);

    app.handle_line(&mut session, &code);
    assert!(app.accepted_inputs.is_empty());

    app.handle_line(&mut session, "submit");
    assert_eq!(app.mode, AppMode::Finished(RunOutcome::Victory));
    assert_eq!(app.accepted_inputs, vec![InputPayload::SubmitPasscode { attempt: code }]);
    assert_eq!(session.outcome(), Some(RunOutcome::Victory));
}

#[test]
fn test_finished_run_refuses_play_commands() {
    let mut session = session(2024);
    let mut app = AppState::new();
    let code = code_of(&session);
    app.handle_line(&mut session, "keypad");
    app.handle_line(&mut session, &code);
    app.handle_line(&mut session, "submit");

    app.handle_line(&mut session, "floor 1");
    assert!(app.accepted_inputs.is_empty());
    assert_eq!(session.current_floor(), 0);
    assert!(app.output[0].contains("WIN_ESCAPED"));
}

#[test]
fn test_restart_starts_a_fresh_run() {
    let mut session = session(99);
    let mut app = AppState::new();
    app.handle_line(&mut session, "floor 2");

    app.handle_line(&mut session, "restart");
    assert!(app.restarted);
    assert_eq!(app.mode, AppMode::Lobby);
    assert_eq!(session.current_floor(), 0);
    assert_eq!(session.outcome(), None);

    app.handle_line(&mut session, "look");
    assert!(!app.restarted);
}

#[test]
fn test_quit_works_from_the_keypad() {
    let mut session = session(5);
    let mut app = AppState::new();
    app.handle_line(&mut session, "keypad");
    assert_eq!(app.handle_line(&mut session, "quit"), Flow::Quit);
}

#[test]
fn test_recorded_inputs_replay_to_the_same_snapshot() {
    let config = HotelConfig::default();
    let mut session = GameSession::initialize(config.clone(), 31337);
    let mut journal = RunJournal::new(session.seed(), config.fingerprint());
    let mut app = AppState::new();

    let mut script = Vec::new();
    for floor in 1..config.max_floor() {
        script.push(format!("floor {floor}"));
        for index in 0..config.rooms_per_floor {
            script.push(format!("enter {index}"));
            script.push(format!("enter {index}"));
        }
    }
    script.push("floor 0".to_string());
    script.push("keypad".to_string());
    script.push(wrong_code_of(&session));
    script.push("submit".to_string());

    for line in &script {
        app.handle_line(&mut session, line);
        for payload in app.accepted_inputs.drain(..) {
            journal.append(payload);
        }
    }
    assert!(!journal.inputs.is_empty());

    let result = replay_to_end(&config, &journal).expect("journal replays");
    assert_eq!(result.final_snapshot_hash, session.snapshot_hash());
    assert_eq!(result.final_outcome, session.outcome());
    assert_eq!(result.candy_count, session.candy_count());
    assert_eq!(result.failure_count, session.failure_count());
}
