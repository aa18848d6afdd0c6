//! Line-oriented front end: turns typed commands into session calls and keeps
//! the presentation state (where the player stands, what each room still holds).

use std::mem;

use hotel_core::clue::room_label;
use hotel_core::{
    ContentSpawner, GameSession, InputPayload, InteractionType, Keypad, KeypadKey, KeypadResponse,
    RunOutcome, SceneNavigator, SessionEvent, SpawnRequest,
};
use tracing::debug;

use crate::outcome_code;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Lobby,
    Hallway {
        floor: u32,
    },
    Keypad,
    Finished(RunOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Look,
    Status,
    Enter(u32),
    Floor(u32),
    Up,
    Down,
    Keypad,
    Restart,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err("type a command, or 'help'".to_string());
        };
        let argument = words.next();

        let command = match verb.to_ascii_lowercase().as_str() {
            "help" | "?" => Self::Help,
            "look" | "l" => Self::Look,
            "status" | "s" => Self::Status,
            "enter" | "e" => Self::Enter(parse_number(argument, "enter <room>")?),
            "floor" | "f" => Self::Floor(parse_number(argument, "floor <number>")?),
            "up" => Self::Up,
            "down" => Self::Down,
            "keypad" | "k" => Self::Keypad,
            "restart" => Self::Restart,
            "quit" | "q" => Self::Quit,
            other => return Err(format!("unknown command '{other}'")),
        };
        Ok(command)
    }
}

fn parse_number(argument: Option<&str>, usage: &str) -> Result<u32, String> {
    argument
        .and_then(|raw| raw.parse::<u32>().ok())
        .ok_or_else(|| format!("usage: {usage}"))
}

/// One spawned interaction of a room on the current floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomContent {
    pub index: u32,
    pub interaction: InteractionType,
    pub amount: u32,
    pub used: bool,
}

struct ContentCollector;

impl ContentSpawner for ContentCollector {
    type Handle = RoomContent;

    fn spawn_content(&mut self, request: &SpawnRequest<'_>) -> Vec<RoomContent> {
        vec![RoomContent {
            index: request.index,
            interaction: request.interaction,
            amount: request.amount,
            used: false,
        }]
    }
}

struct ArrivalNotice<'a> {
    output: &'a mut Vec<String>,
}

impl SceneNavigator for ArrivalNotice<'_> {
    fn load_floor(&mut self, floor: u32) {
        let line = if floor == 0 {
            "The elevator doors open on the lobby.".to_string()
        } else {
            format!("The elevator doors open on floor {floor}.")
        };
        self.output.push(line);
    }
}

#[derive(Default)]
pub struct AppState {
    pub mode: AppMode,
    keypad: Keypad,
    floor_contents: Vec<RoomContent>,
    /// Text produced by the last `handle_line` call.
    pub output: Vec<String>,
    /// Inputs accepted during the last `handle_line` call, in order.
    /// Drained by the caller to append to the run journal.
    pub accepted_inputs: Vec<InputPayload>,
    /// Set when the last call started a new run; the caller starts a new journal.
    pub restarted: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_line(&mut self, session: &mut GameSession, line: &str) -> Flow {
        self.output.clear();
        self.accepted_inputs.clear();
        self.restarted = false;

        if self.mode == AppMode::Keypad {
            return self.handle_keypad_line(session, line.trim());
        }

        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(message) => {
                self.output.push(message);
                return Flow::Continue;
            }
        };
        debug!(target: "hotel::app", ?command, mode = ?self.mode, "app.command");

        match (self.mode, command) {
            (_, Command::Quit) => return Flow::Quit,
            (_, Command::Help) => self.output.extend(HELP.iter().map(|line| line.to_string())),
            (_, Command::Status) => self.describe_status(session),
            (_, Command::Restart) => self.restart(session),
            (AppMode::Finished(outcome), _) => {
                self.output.push(format!(
                    "The run is over ({}). Type 'restart' or 'quit'.",
                    outcome_code(&outcome)
                ));
            }
            (_, Command::Look) => self.look(session),
            (AppMode::Hallway { floor }, Command::Enter(index)) => {
                self.enter_room(session, floor, index);
            }
            (_, Command::Enter(_)) => self.output.push("There are no rooms in the lobby.".into()),
            (_, Command::Floor(floor)) => self.go_to_floor(session, floor),
            (_, Command::Up) => {
                let floor = session.current_floor() + 1;
                self.go_to_floor(session, floor);
            }
            (_, Command::Down) => match session.current_floor().checked_sub(1) {
                Some(floor) => self.go_to_floor(session, floor),
                None => self.output.push("The lobby is the lowest floor.".into()),
            },
            (AppMode::Lobby, Command::Keypad) => {
                self.mode = AppMode::Keypad;
                self.output.push(format!(
                    "The exit keypad reads [{}]. Type digits, 'del', 'clear', 'submit' or 'leave'.",
                    self.keypad.display(session.passcode().len())
                ));
            }
            (_, Command::Keypad) => self.output.push("The keypad is in the lobby.".into()),
        }
        Flow::Continue
    }

    fn restart(&mut self, session: &mut GameSession) {
        session.restart(0);
        *self = Self { output: mem::take(&mut self.output), ..Self::default() };
        self.restarted = true;
        self.output.push(format!("A new night begins (seed {}).", session.seed()));
    }

    fn describe_status(&mut self, session: &GameSession) {
        let place = match session.current_floor() {
            0 => "the lobby".to_string(),
            floor => format!("floor {floor}"),
        };
        self.output.push(format!(
            "You are on {place}. Candy: {}. Keypad attempts left: {}.",
            session.candy_count(),
            session.attempts_left()
        ));
    }

    fn look(&mut self, session: &GameSession) {
        match self.mode {
            AppMode::Hallway { floor } if session.layout().floor_numbers().contains(&floor) => {
                let labels: Vec<String> = session
                    .layout()
                    .floor_rooms(floor)
                    .iter()
                    .map(|room| format!("{} ({})", room.label(), room.index))
                    .collect();
                self.output.push(format!("Doors line the hallway: {}", labels.join(", ")));
            }
            AppMode::Hallway { .. } => self.output.push("The hallway has no doors.".into()),
            _ => self.output.push(
                "The lobby is quiet. An elevator waits, and a keypad glows by the exit.".into(),
            ),
        }
    }

    fn go_to_floor(&mut self, session: &mut GameSession, floor: u32) {
        let mut notice = ArrivalNotice { output: &mut self.output };
        match session.go_to_floor(floor, &mut notice) {
            Ok(true) => {
                self.accepted_inputs.push(InputPayload::GoToFloor { floor });
                self.arrive(session, floor);
            }
            Ok(false) => self.output.push("You are already there.".into()),
            Err(error) => self.output.push(error.to_string()),
        }
    }

    fn arrive(&mut self, session: &GameSession, floor: u32) {
        self.floor_contents = session.spawn_current_floor(&mut ContentCollector);
        self.mode = if floor == 0 { AppMode::Lobby } else { AppMode::Hallway { floor } };
    }

    fn enter_room(&mut self, session: &mut GameSession, floor: u32, index: u32) {
        if session.layout().try_room(floor, index).is_none() {
            self.output.push(format!("There is no room {index} on this floor."));
            return;
        }
        self.output.push(format!("You step into room {}.", room_label(floor, index)));

        let mut found_anything = false;
        for slot in 0..self.floor_contents.len() {
            let content = &self.floor_contents[slot];
            if content.index != index {
                continue;
            }
            let (interaction, amount, used) = (content.interaction, content.amount, content.used);
            found_anything = true;

            match interaction {
                InteractionType::TelevisionClue => {
                    let text = session.clue_text(floor, index);
                    self.output.push(format!("A television flickers: \"{text}\""));
                }
                InteractionType::TelevisionKey => self.output.push(
                    "A television shows the lobby keypad. Somewhere, the code is written down."
                        .into(),
                ),
                InteractionType::GoodMonster => {
                    self.output.push("A friendly monster waves and lets you be.".into());
                }
                _ if used => self.output.push("Nothing else here.".into()),
                InteractionType::Searchable | InteractionType::Pickup => {
                    self.floor_contents[slot].used = true;
                    let amount = amount as i32;
                    let count = session.add_candy(amount);
                    self.accepted_inputs.push(InputPayload::AddCandy { amount });
                    self.output.push(format!("You find {amount} candy. You now have {count}."));
                }
                InteractionType::ForcedMonster | InteractionType::MonsterTelevision => {
                    self.floor_contents[slot].used = true;
                    let amount = amount.max(1) as i32;
                    self.output.push(format!("A monster demands a treat and takes {amount} candy!"));
                    let outcome = session.remove_candy(amount);
                    self.accepted_inputs.push(InputPayload::RemoveCandy { amount });
                    if let Some(outcome) = outcome {
                        self.finish(session, outcome);
                        return;
                    }
                }
            }
        }

        if !found_anything {
            self.output.push("The room is empty.".into());
        }
    }

    fn handle_keypad_line(&mut self, session: &mut GameSession, line: &str) -> Flow {
        let length = session.passcode().len();
        let keys: Vec<KeypadKey> = match line.to_ascii_lowercase().as_str() {
            "quit" | "q" => return Flow::Quit,
            "leave" | "back" => {
                self.mode = AppMode::Lobby;
                self.output.push("You step away from the keypad.".into());
                return Flow::Continue;
            }
            "del" => vec![KeypadKey::Backspace],
            "clear" => vec![KeypadKey::Clear],
            "submit" | "" => vec![KeypadKey::Submit],
            digits if digits.bytes().all(|byte| byte.is_ascii_digit()) => {
                digits.bytes().map(|byte| KeypadKey::Digit(byte - b'0')).collect()
            }
            _ => {
                self.output
                    .push("The keypad only takes digits, 'del', 'clear', 'submit' or 'leave'.".into());
                return Flow::Continue;
            }
        };

        for key in keys {
            let attempt = (key == KeypadKey::Submit).then(|| self.keypad.entry().to_string());
            match self.keypad.press(key, session) {
                KeypadResponse::Updated => {}
                KeypadResponse::Incomplete => {
                    self.output.push(format!("The code has {length} digits."));
                }
                KeypadResponse::Accepted => {
                    self.record_attempt(attempt);
                    self.output.push("The door clicks open. You escape into the night!".into());
                    self.finish(session, RunOutcome::Victory);
                    return Flow::Continue;
                }
                KeypadResponse::Rejected { attempts_left } => {
                    self.record_attempt(attempt);
                    self.output.push(format!("Wrong code. {attempts_left} attempts left."));
                }
                KeypadResponse::Locked => {
                    self.record_attempt(attempt);
                    self.output.push("The keypad locks with a long, low buzz.".into());
                    if let Some(outcome) = session.outcome() {
                        self.finish(session, outcome);
                    }
                    return Flow::Continue;
                }
            }
        }
        self.output.push(format!("[{}]", self.keypad.display(length)));
        Flow::Continue
    }

    fn record_attempt(&mut self, attempt: Option<String>) {
        if let Some(attempt) = attempt {
            self.accepted_inputs.push(InputPayload::SubmitPasscode { attempt });
        }
    }

    fn finish(&mut self, session: &GameSession, outcome: RunOutcome) {
        self.mode = AppMode::Finished(outcome);
        if let Some(message) = session.event_log().iter().rev().find_map(|event| match event {
            SessionEvent::OutOfCandy { message, .. } => Some(message.clone()),
            _ => None,
        }) {
            self.output.push(message);
        }
        self.output.push(format!("Run over: {}.", outcome_code(&outcome)));
    }
}

const HELP: &[&str] = &[
    "look             describe where you are",
    "status           candy, floor and keypad attempts",
    "enter <room>     enter a room on this floor by index",
    "floor <n>, up, down   ride the elevator",
    "keypad           use the exit keypad (lobby only)",
    "restart          start a new night",
    "quit             leave the game",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_parse_with_aliases_and_arguments() {
        assert_eq!(Command::parse("look"), Ok(Command::Look));
        assert_eq!(Command::parse("  E 3 "), Ok(Command::Enter(3)));
        assert_eq!(Command::parse("floor 2"), Ok(Command::Floor(2)));
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
    }

    #[test]
    fn bad_commands_explain_themselves() {
        assert!(Command::parse("").is_err());
        assert_eq!(Command::parse("enter"), Err("usage: enter <room>".to_string()));
        assert_eq!(Command::parse("dance"), Err("unknown command 'dance'".to_string()));
    }
}
