//! Game session: the explicit state machine behind the board.
//!
//! `Idle --Enter--> Checking --resolve--> Idle | Finished`. The session never
//! waits itself: submitting returns a ticket, and the caller resolves it after
//! the presentational delay. Resolving a ticket that is no longer pending is a
//! no-op, which is how a dropped timer cancels a check.

pub mod board;
pub mod effects;
pub mod input;

use crate::config::GameConfig;
use crate::dictionary::{AnimalEntry, Dictionary};
use crate::error::GameError;
use crate::heat::{Heat, classify};
use crate::seed::{Clock, daily_index};

pub use board::{Advance, Board, Cell, CellId};
pub use effects::{Effect, present_heat};
pub use input::{Key, LAYOUT};

/// Identifies one pending check.
pub type Ticket = u64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub secret: AnimalEntry,
    pub finished: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Checking {
        ticket: Ticket,
        cell: CellId,
        word: String,
    },
    Finished,
}

/// How a check resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Ticket was not the pending one.
    Stale,
    NotFound,
    Miss { heat: Heat, advance: Advance },
    Win,
}

/// Effects to apply, plus a ticket to resolve later if a check started.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Step {
    pub effects: Vec<Effect>,
    pub schedule: Option<Ticket>,
    pub outcome: Option<Outcome>,
}

impl Step {
    fn effects(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            ..Self::default()
        }
    }

    fn resolved(outcome: Outcome, effects: Vec<Effect>) -> Self {
        Self {
            effects,
            schedule: None,
            outcome: Some(outcome),
        }
    }
}

pub struct GameSession {
    dictionary: Dictionary,
    config: GameConfig,
    state: GameState,
    board: Board,
    phase: Phase,
    next_ticket: Ticket,
}

impl GameSession {
    /// Start today's game.
    pub fn new(
        dictionary: Dictionary,
        config: GameConfig,
        clock: &impl Clock,
    ) -> Result<Self, GameError> {
        let index = daily_index(clock.today(), dictionary.len());
        Self::with_secret_index(dictionary, config, index)
    }

    /// Start a game whose secret is the entry at `index` in dictionary order.
    pub fn with_secret_index(
        dictionary: Dictionary,
        config: GameConfig,
        index: usize,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let secret = dictionary
            .get(index % dictionary.len().max(1))
            .cloned()
            .ok_or(GameError::EmptyDictionary)?;
        let board = Board::new(config.board_size);
        Ok(Self {
            dictionary,
            config,
            state: GameState {
                secret,
                finished: false,
            },
            board,
            phase: Phase::Idle,
            next_ticket: 1,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn secret(&self) -> &AnimalEntry {
        &self.state.secret
    }

    pub fn is_finished(&self) -> bool {
        self.state.finished
    }

    pub fn is_checking(&self) -> bool {
        matches!(self.phase, Phase::Checking { .. })
    }

    /// True when input would be dropped before reaching the current cell.
    pub fn is_busy(&self) -> bool {
        self.is_checking() || self.is_finished()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Secret word as revealed by the hint button.
    pub fn hint(&self) -> String {
        self.state.secret.word.to_uppercase()
    }

    /// Effects that bring a freshly built board in line with the session.
    pub fn initial_effects(&self) -> Vec<Effect> {
        vec![Effect::Activate {
            cell: self.board.current().id,
        }]
    }

    /// Route one logical key. Dropped while checking, after the win, or if the
    /// current cell is already submitted.
    pub fn handle_input(&mut self, key: Key) -> Step {
        if !matches!(self.phase, Phase::Idle) || self.state.finished {
            return Step::default();
        }
        let cell = self.board.current_mut();
        if cell.submitted {
            return Step::default();
        }
        let id = cell.id;
        let changed = match key {
            Key::Backspace => cell.backspace(),
            Key::Letter(c) if c.is_ascii_alphabetic() => {
                cell.push_letter(c.to_ascii_uppercase());
                true
            }
            Key::Letter(_) => false,
            Key::Space => cell.push_space(),
            Key::Enter => return self.submit(),
        };
        if !changed {
            return Step::default();
        }
        let text = self.board.current().text.clone();
        Step::effects(vec![Effect::SetText { cell: id, text }])
    }

    fn submit(&mut self) -> Step {
        let cell = self.board.current();
        let word = cell.text.trim().to_lowercase();
        if word.is_empty() {
            return Step::default();
        }
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        let id = cell.id;
        self.phase = Phase::Checking {
            ticket,
            cell: id,
            word,
        };
        Step {
            effects: vec![Effect::Checking { cell: id }],
            schedule: Some(ticket),
            outcome: None,
        }
    }

    /// Finish the check identified by `ticket`.
    pub fn resolve_check(&mut self, ticket: Ticket) -> Step {
        let pending = matches!(
            &self.phase,
            Phase::Checking { ticket: t, cell, .. }
                if *t == ticket && *cell == self.board.current().id
        );
        if !pending {
            return Step::resolved(Outcome::Stale, Vec::new());
        }
        let Phase::Checking { cell, word, .. } = std::mem::replace(&mut self.phase, Phase::Idle)
        else {
            return Step::resolved(Outcome::Stale, Vec::new());
        };

        let Some(entry) = self.dictionary.find(&word) else {
            return Step::resolved(
                Outcome::NotFound,
                vec![Effect::ClearChecking { cell }, Effect::NotFound],
            );
        };

        let secret = &self.state.secret;
        let win = word == secret.word;
        let heat = if win {
            Heat::Found
        } else {
            classify(
                entry.rank.abs_diff(secret.rank),
                self.dictionary.max_rank(),
                &self.config.thresholds,
            )
        };

        let current = self.board.current_mut();
        current.submitted = true;
        current.heat = Some(heat);

        let mut effects = vec![Effect::Submitted { cell }];
        effects.extend(present_heat(cell, heat));

        if win {
            self.state.finished = true;
            self.phase = Phase::Finished;
            effects.push(Effect::Won {
                word: self.state.secret.word.clone(),
            });
            return Step::resolved(Outcome::Win, effects);
        }

        let advance = self.board.advance();
        match advance {
            Advance::Next { current } => effects.push(Effect::Activate { cell: current }),
            Advance::Slid { evicted, appended } => {
                effects.push(Effect::SlideOut { cell: evicted });
                effects.push(Effect::Append { cell: appended });
                effects.push(Effect::Activate { cell: appended });
            }
        }
        Step::resolved(Outcome::Miss { heat, advance }, effects)
    }
}
