use std::io::{BufRead, Write};
use std::str::FromStr;

use color_eyre::eyre::{eyre, Result};
use strum::IntoEnumIterator;
use uno_engine::{
    player::Player,
    strategy::StrategyKind,
    MAX_PLAYERS, MIN_PLAYERS,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerSetup {
    pub name: String,
    pub kind: StrategyKind,
}

impl PlayerSetup {
    pub fn defaults(count: usize) -> Vec<PlayerSetup> {
        (0..count)
            .map(|i| PlayerSetup {
                name: default_name(i),
                kind: StrategyKind::General,
            })
            .collect()
    }

    pub fn to_player(&self, id: u64) -> Player {
        Player::with_kind(id, Some(self.name.clone()), self.kind)
    }
}

fn default_name(index: usize) -> String {
    format!("Player {}", index + 1)
}

pub fn parse_player_count(value: &str) -> Result<usize, String> {
    let count = value
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("`{}` is not a number", value.trim()))?;
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        Ok(count)
    } else {
        Err(format!("pick between {MIN_PLAYERS} and {MAX_PLAYERS} players"))
    }
}

/// Line based questions on any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question} ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(eyre!("input closed while waiting for an answer"));
        }
        Ok(line.trim().to_string())
    }

    pub fn player_count(&mut self) -> Result<usize> {
        loop {
            let answer = self.ask(&format!(
                "Number of players ({MIN_PLAYERS}-{MAX_PLAYERS}):"
            ))?;
            match parse_player_count(&answer) {
                Ok(count) => return Ok(count),
                Err(message) => writeln!(self.output, "{message}")?,
            }
        }
    }

    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        loop {
            let answer = self.ask(&format!("{question} [y/N]"))?.to_lowercase();
            match answer.as_str() {
                "y" | "yes" => return Ok(true),
                "" | "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "answer y or n")?,
            }
        }
    }

    /// Asks for one player's name and type. Names already in `taken` are
    /// refused, since session wins are counted per name.
    pub fn player_setup(&mut self, index: usize, taken: &[PlayerSetup]) -> Result<PlayerSetup> {
        let name = loop {
            let answer =
                self.ask(&format!("Name of player {} [{}]:", index + 1, default_name(index)))?;
            let name = if answer.is_empty() {
                default_name(index)
            } else {
                answer
            };
            if taken.iter().any(|setup| setup.name == name) {
                writeln!(self.output, "`{name}` is already playing")?;
            } else {
                break name;
            }
        };

        let kinds = StrategyKind::iter()
            .map(|kind| kind.to_string())
            .collect::<Vec<_>>()
            .join("/");
        let kind = loop {
            let answer = self.ask(&format!("Type of {name} ({kinds}) [general]:"))?;
            if answer.is_empty() {
                break StrategyKind::General;
            }
            match StrategyKind::from_str(&answer) {
                Ok(kind) => break kind,
                Err(_) => writeln!(self.output, "unknown player type `{answer}`")?,
            }
        };

        Ok(PlayerSetup { name, kind })
    }

    pub fn player_setups(&mut self, count: usize) -> Result<Vec<PlayerSetup>> {
        let mut setups = Vec::with_capacity(count);
        for index in 0..count {
            let setup = self.player_setup(index, &setups)?;
            setups.push(setup);
        }
        Ok(setups)
    }
}
