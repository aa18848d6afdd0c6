use hotel_core::{
    GameSession, HotelConfig, InputPayload, Keypad, KeypadKey, KeypadResponse, RunJournal,
    RunOutcome, replay_to_end,
};
use tempfile::tempdir;

/// Plays a short run through the keypad, journaling each accepted input.
fn play_to_victory(config: &HotelConfig, seed: u64) -> (GameSession, RunJournal) {
    let mut session = GameSession::initialize(config.clone(), seed);
    let mut journal = RunJournal::new(session.seed(), config.fingerprint());

    session.add_candy(2);
    journal.append(InputPayload::AddCandy { amount: 2 });

    session.go_to_floor(1, &mut ()).expect("floor 1 exists");
    journal.append(InputPayload::GoToFloor { floor: 1 });

    session.remove_candy(1);
    journal.append(InputPayload::RemoveCandy { amount: 1 });

    session.go_to_floor(0, &mut ()).expect("lobby exists");
    journal.append(InputPayload::GoToFloor { floor: 0 });

    let mut keypad = Keypad::new();
    let code = session.passcode().to_string();
    for digit in session.passcode().digits().to_vec() {
        keypad.press(KeypadKey::Digit(digit), &mut session);
    }
    assert_eq!(keypad.press(KeypadKey::Submit, &mut session), KeypadResponse::Accepted);
    journal.append(InputPayload::SubmitPasscode { attempt: code });

    (session, journal)
}

#[test]
fn test_journal_replay_reproduces_victory() {
    let config = HotelConfig::default();
    let (session, journal) = play_to_victory(&config, 8080);

    let replayed = replay_to_end(&config, &journal).expect("replay should succeed");

    assert_eq!(replayed.final_outcome, Some(RunOutcome::Victory));
    assert_eq!(replayed.final_snapshot_hash, session.snapshot_hash());
    assert_eq!(replayed.candy_count, 1);
    assert_eq!(replayed.final_floor, 0);
}

#[test]
fn test_journal_file_round_trip_replays_identically() {
    let config = HotelConfig::default();
    let (session, journal) = play_to_victory(&config, 31337);

    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("run.json");
    journal.save(&path).expect("save journal");
    let loaded = RunJournal::load(&path).expect("load journal");

    let replayed = replay_to_end(&config, &loaded).expect("replay should succeed");
    assert_eq!(replayed.final_snapshot_hash, session.snapshot_hash());
}
