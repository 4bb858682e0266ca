use std::collections::BTreeSet;

use rand::{rngs::StdRng, seq::SliceRandom, RngCore, SeedableRng};

use crate::card::{Card, CardKind};
use crate::config::GameConfig;
use crate::constants::{DRAW_TWO_PENALTY, MAX_PLAYERS, MIN_PLAYERS, WILD_DRAW_FOUR_PENALTY};
use crate::deck::build_deck;
use crate::error::{Result, UnoError};
use crate::events::{EventSink, GameEvent, TracingSink};
use crate::pile::Piles;
use crate::player::Player;
use crate::stats::{GameStatistics, RoundSummary};
use crate::turn::{MoveOutcome, PlayMoveResult, Turn, TurnDirection};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    NotStarted,
    Dealing,
    AwaitingMove,
    RoundOver { winner_index: usize },
}

/// A whole game: the seats, both piles and the round/move state machine.
#[derive(Debug)]
pub struct Uno<R = StdRng, S = TracingSink> {
    config: GameConfig,
    players: Vec<Player>,
    piles: Piles,
    turn: Turn,
    round_start_index: Option<usize>,
    current_round: u32,
    current_move: u32,
    pending_action: bool,
    phase: RoundPhase,
    winner_index: Option<usize>,
    moves_per_round: Vec<u32>,
    rng: R,
    sink: S,
}

impl Uno<StdRng, TracingSink> {
    pub fn with_seed(players: Vec<Player>, config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(players, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Uno<R, TracingSink> {
    pub fn new(players: Vec<Player>, config: GameConfig, rng: R) -> Result<Self> {
        Self::with_sink(players, config, rng, TracingSink)
    }
}

impl<R: RngCore, S: EventSink> Uno<R, S> {
    pub fn with_sink(players: Vec<Player>, config: GameConfig, rng: R, sink: S) -> Result<Self> {
        if players.len() < MIN_PLAYERS {
            return Err(UnoError::NotEnoughPlayers);
        }
        if players.len() > MAX_PLAYERS {
            return Err(UnoError::TooManyPlayers);
        }

        let mut ids = BTreeSet::new();
        for player in &players {
            if !ids.insert(player.id) {
                return Err(UnoError::DuplicatePlayerId(player.id));
            }
        }
        config.validate(players.len())?;

        Ok(Uno {
            config,
            turn: Turn::new(players.len()),
            players,
            piles: Piles::new(build_deck()),
            round_start_index: None,
            current_round: 0,
            current_move: 0,
            pending_action: false,
            phase: RoundPhase::NotStarted,
            winner_index: None,
            moves_per_round: Vec::new(),
            rng,
            sink,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn top_card(&self) -> Result<&Card> {
        self.piles.top_card()
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn current_player_index(&self) -> usize {
        self.turn.current_index()
    }

    pub fn turn_direction(&self) -> TurnDirection {
        self.turn.direction()
    }

    pub fn round_start_index(&self) -> Option<usize> {
        self.round_start_index
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn current_move(&self) -> u32 {
        self.current_move
    }

    pub fn pending_action(&self) -> bool {
        self.pending_action
    }

    pub fn has_winner(&self) -> bool {
        self.winner_index.is_some()
    }

    pub fn winner(&self) -> Option<&Player> {
        self.winner_index.map(|index| &self.players[index])
    }

    /// Cards in both piles and every hand. Always the full deck.
    pub fn cards_in_game(&self) -> usize {
        self.piles.cards_count()
            + self
                .players
                .iter()
                .map(Player::cards_count)
                .sum::<usize>()
    }

    /// Shuffles, deals and turns over the first discard card. A failed deal
    /// puts every card back and leaves the game ready for another attempt.
    pub fn init_round(&mut self) -> Result<()> {
        if self.phase != RoundPhase::NotStarted {
            return Err(UnoError::RoundInProgress);
        }
        self.phase = RoundPhase::Dealing;

        let start_index = match self.round_start_index {
            None => 0,
            Some(index) => (index + 1) % self.players.len(),
        };

        self.piles.shuffle(&mut self.rng);
        let turned_over = match self.deal() {
            Ok(turned_over) => turned_over,
            Err(error) => {
                self.collect_cards();
                return Err(error);
            }
        };

        self.round_start_index = Some(start_index);
        self.turn.start_at(start_index);
        self.current_round += 1;
        self.current_move = 0;
        self.pending_action = false;

        self.sink.record(&GameEvent::RoundStarted {
            round: self.current_round,
            player_id: self.players[start_index].id,
        });
        self.sink.record(&GameEvent::FirstCardTurned {
            card: *self.piles.top_card()?,
            turned_over,
        });

        self.phase = RoundPhase::AwaitingMove;
        Ok(())
    }

    fn deal(&mut self) -> Result<usize> {
        for _ in 0..self.config.hand_size {
            for player in self.players.iter_mut() {
                let card = self.piles.deal_card()?;
                player.add_card(card);
            }
        }
        self.piles.flip_first_card()
    }

    /// Resolves the current player's move and passes the turn on, unless the
    /// move emptied their hand.
    pub fn play_move(&mut self) -> Result<PlayMoveResult> {
        if self.phase != RoundPhase::AwaitingMove {
            return Err(UnoError::RoundNotInProgress);
        }

        self.current_move += 1;
        let index = self.turn.current_index();
        let active_card = *self.piles.top_card()?;

        self.sink.record(&GameEvent::MoveStarted {
            round: self.current_round,
            move_number: self.current_move,
            player_id: self.players[index].id,
            active_card,
        });

        let outcome = match (self.pending_action, active_card.kind) {
            (true, CardKind::Skip) => {
                self.pending_action = false;
                self.sink.record(&GameEvent::TurnSkipped {
                    player_id: self.players[index].id,
                });
                MoveOutcome::Skipped
            }
            (true, CardKind::DrawTwo) => self.force_draw(index, DRAW_TWO_PENALTY)?,
            (true, CardKind::WildDrawFour) => self.force_draw(index, WILD_DRAW_FOUR_PENALTY)?,
            _ => self.play_card(index, &active_card)?,
        };

        let round_over = self.players[index].hand.is_empty();
        if round_over {
            self.pending_action = false;
            self.phase = RoundPhase::RoundOver {
                winner_index: index,
            };
        } else {
            self.turn.advance();
        }

        Ok(PlayMoveResult {
            outcome,
            round_over,
        })
    }

    fn force_draw(&mut self, index: usize, count: usize) -> Result<MoveOutcome> {
        let player = &mut self.players[index];
        self.piles.draw_into(&mut player.hand, count, &mut self.rng)?;
        self.pending_action = false;

        self.sink.record(&GameEvent::CardsDrawn {
            player_id: player.id,
            count,
        });
        Ok(MoveOutcome::ForcedDraw(count))
    }

    fn play_card(&mut self, index: usize, active_card: &Card) -> Result<MoveOutcome> {
        let player = &mut self.players[index];
        let player_id = player.id;

        let mut after_draw = false;
        let mut chosen = player.decide(active_card, &mut self.rng);
        if chosen.is_none() {
            self.piles.draw_into(&mut player.hand, 1, &mut self.rng)?;
            self.sink.record(&GameEvent::CardsDrawn {
                player_id,
                count: 1,
            });
            after_draw = true;
            chosen = player.decide(active_card, &mut self.rng);
        }

        let Some(card) = chosen else {
            self.pending_action = false;
            self.sink.record(&GameEvent::NoCardPlayed { player_id });
            return Ok(MoveOutcome::Passed);
        };

        if !card.is_legal_play_on(active_card) {
            return Err(UnoError::InvalidPlayerMove {
                player_id,
                card,
                active_card: *active_card,
            });
        }

        self.piles.discard(card);
        self.sink.record(&GameEvent::CardPlayed { player_id, card });

        if card.kind == CardKind::Reverse {
            self.turn.reverse();
            self.sink.record(&GameEvent::DirectionReversed {
                direction: self.turn.direction(),
            });
        }
        self.pending_action = matches!(
            card.kind,
            CardKind::Skip | CardKind::DrawTwo | CardKind::WildDrawFour
        );

        Ok(MoveOutcome::Played { card, after_draw })
    }

    /// Scores a finished round, checks for the game winner and gathers the
    /// cards for the next round.
    pub fn finish_round(&mut self) -> Result<RoundSummary> {
        let RoundPhase::RoundOver { winner_index } = self.phase else {
            return Err(UnoError::RoundNotInProgress);
        };

        let points = self.score_round(winner_index);
        self.moves_per_round.push(self.current_move);

        let winner = &self.players[winner_index];
        let winner_id = winner.id;
        let total_points = winner.points;
        self.sink.record(&GameEvent::RoundWon {
            round: self.current_round,
            player_id: winner_id,
            points,
            total_points,
        });

        if total_points >= self.config.points_to_win {
            self.winner_index = Some(winner_index);
            self.sink.record(&GameEvent::GameWon {
                player_id: winner_id,
                points: total_points,
            });
        }

        self.collect_cards();

        Ok(RoundSummary {
            round: self.current_round,
            moves: self.current_move,
            winner_id,
            points_awarded: points,
        })
    }

    /// Adds every hand's value to the winner. The winner's own hand is empty
    /// at this point, so it adds nothing.
    fn score_round(&mut self, winner_index: usize) -> u32 {
        let points = self.players.iter().map(Player::hand_points).sum::<u32>();
        self.players[winner_index].points += points;
        points
    }

    /// Moves every card back into the draw pile and empties all hands.
    pub fn collect_cards(&mut self) {
        let cards = self
            .players
            .iter_mut()
            .flat_map(Player::take_cards)
            .collect::<Vec<_>>();
        self.piles.collect(cards);
        self.phase = RoundPhase::NotStarted;

        self.sink.record(&GameEvent::CardsCollected {
            draw_pile: self.piles.draw_pile().len(),
        });
    }

    pub fn play_round(&mut self) -> Result<RoundSummary> {
        self.init_round()?;
        while !self.play_move()?.round_over {}
        self.finish_round()
    }

    /// Seats the players in random order and plays rounds until someone
    /// reaches the points needed to win.
    pub fn play_game(&mut self) -> Result<GameStatistics> {
        if self.current_round == 0 {
            self.players.shuffle(&mut self.rng);
            self.sink.record(&GameEvent::GameStarted {
                seating: self.players.iter().map(|player| player.id).collect(),
            });
        }

        let winner_index = loop {
            if let Some(index) = self.winner_index {
                break index;
            }
            self.play_round()?;
        };

        Ok(self.build_statistics(winner_index))
    }

    pub fn statistics(&self) -> Option<GameStatistics> {
        self.winner_index.map(|index| self.build_statistics(index))
    }

    fn build_statistics(&self, winner_index: usize) -> GameStatistics {
        let winner = &self.players[winner_index];
        GameStatistics {
            number_of_players: self.players.len(),
            number_of_rounds: self.current_round,
            moves_per_round: self.moves_per_round.clone(),
            player_names: self.players.iter().map(Player::display_name).collect(),
            player_scores: self.players.iter().map(Player::points).collect(),
            winner_name: winner.display_name(),
            winner_score: winner.points,
            winner_strategy: winner.strategy_kind(),
        }
    }
}
