use super::*;
use crate::types::DefeatCause;

const SEED: u64 = 777;

/// Drives a live session and journals every input the way a front end would.
fn play(config: &HotelConfig, inputs: &[InputPayload]) -> (GameSession, RunJournal) {
    let mut session = GameSession::initialize(config.clone(), SEED);
    let mut journal = RunJournal::new(session.seed(), config.fingerprint());
    for payload in inputs {
        apply_input(&mut session, payload).expect("scripted input is valid");
        journal.append(payload.clone());
    }
    (session, journal)
}

fn wrong_attempt(config: &HotelConfig) -> String {
    let session = GameSession::initialize(config.clone(), SEED);
    session.passcode().digits().iter().map(|digit| char::from(b'0' + (digit + 1) % 10)).collect()
}

#[test]
fn replay_reproduces_the_live_snapshot() {
    let config = HotelConfig::default();
    let wrong = wrong_attempt(&config);
    let (session, journal) = play(
        &config,
        &[
            InputPayload::AddCandy { amount: 3 },
            InputPayload::GoToFloor { floor: 1 },
            InputPayload::RemoveCandy { amount: 1 },
            InputPayload::GoToFloor { floor: 2 },
            InputPayload::SubmitPasscode { attempt: wrong },
        ],
    );

    let replayed = replay_to_end(&config, &journal).expect("replay succeeds");

    assert_eq!(replayed.final_snapshot_hash, session.snapshot_hash());
    assert_eq!(replayed.final_floor, 2);
    assert_eq!(replayed.candy_count, 2);
    assert_eq!(replayed.failure_count, 1);
    assert_eq!(replayed.final_outcome, None);
    assert_eq!(replayed.inputs_applied, 5);
}

#[test]
fn replay_reaches_the_same_outcome() {
    let config = HotelConfig::default();
    let (session, journal) = play(
        &config,
        &[InputPayload::RemoveCandy { amount: 1 }, InputPayload::RemoveCandy { amount: 1 }],
    );

    let replayed = replay_to_end(&config, &journal).expect("replay succeeds");
    assert_eq!(replayed.final_outcome, Some(RunOutcome::Defeat(DefeatCause::OutOfCandy)));
    assert_eq!(replayed.final_outcome, session.outcome());
}

#[test]
fn replay_survives_json_round_trip() {
    let config = HotelConfig::default();
    let (session, journal) = play(&config, &[InputPayload::GoToFloor { floor: 1 }]);
    let json = journal.to_json().expect("serialize");
    let restored = RunJournal::from_json(&json).expect("parse");

    let replayed = replay_to_end(&config, &restored).expect("replay succeeds");
    assert_eq!(replayed.final_snapshot_hash, session.snapshot_hash());
}

#[test]
fn replay_rejects_a_different_config() {
    let config = HotelConfig::default();
    let (_, journal) = play(&config, &[]);
    let other = HotelConfig { rooms_per_floor: 8, ..HotelConfig::default() };

    assert_eq!(
        replay_to_end(&other, &journal),
        Err(ReplayError::ConfigMismatch {
            recorded: config.fingerprint(),
            current: other.fingerprint()
        })
    );
}

#[test]
fn replay_rejects_out_of_order_inputs() {
    let config = HotelConfig::default();
    let (_, mut journal) = play(&config, &[InputPayload::AddCandy { amount: 1 }]);
    journal.inputs[0].seq = 4;

    assert_eq!(
        replay_to_end(&config, &journal),
        Err(ReplayError::SequenceGap { expected: 0, found: 4 })
    );
}

#[test]
fn replay_rejects_floors_outside_the_hotel() {
    let config = HotelConfig::default();
    let mut journal = RunJournal::new(SEED, config.fingerprint());
    journal.append(InputPayload::GoToFloor { floor: 9 });

    assert_eq!(
        replay_to_end(&config, &journal),
        Err(ReplayError::InvalidInput {
            seq: 0,
            source: SessionError::FloorOutOfRange { floor: 9, max_floor: 3 }
        })
    );
}

#[test]
fn replay_needs_a_resolved_seed() {
    let config = HotelConfig::default();
    let journal = RunJournal::new(0, config.fingerprint());
    assert_eq!(replay_to_end(&config, &journal), Err(ReplayError::MissingSeed));
}
