use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::action::{Action, DrawOutcome, TurnTicket};
use crate::bot::Bot;
use crate::card::{Card, CardId, CardKind, Color, HAND_SIZE, MAX_RANK};
use crate::chooser::ColorChooser;
use crate::deck::Deck;
use crate::error::{GameError, InvalidAction};
use crate::event::{Event, EventKind, EventLog};
use crate::player::{DEFAULT_NAMES, PLAYER_COUNT, Player, PlayerNumber};
use crate::rules::{TurnEffect, can_play};
use crate::state::{GameState, GameStateView, GameStatus, OpponentView};

const DEFAULT_SEED: u64 = 0x5EED_0DD5_CA4D_0001;

/// Smallest injectable deck: seven cards for every seat plus the starter.
const MIN_DECK_SIZE: usize = HAND_SIZE * PLAYER_COUNT + 1;

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub seed: u64,
    pub names: [String; PLAYER_COUNT],
    pub human: Option<PlayerNumber>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            names: DEFAULT_NAMES.map(String::from),
            human: Some(1),
        }
    }
}

/// Builder that enables deterministic deck injection for testing.
#[derive(Default)]
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn with_names(mut self, names: [String; PLAYER_COUNT]) -> Self {
        self.config.names = names;
        self
    }

    /// Seat controlled by a person, or `None` for an all-scripted table.
    pub fn with_human(mut self, human: Option<PlayerNumber>) -> Self {
        self.config.human = human;
        self
    }

    /// Replace the shuffled deck with a fixed order. Cards are drawn from the end.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Builds the table; a wild starter card gets the red fallback color.
    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self, None)
    }

    /// Builds the table, asking `opening` for the color when the starter card is wild.
    pub fn build_with_chooser(self, opening: &mut dyn ColorChooser) -> Result<Game, GameError> {
        Game::from_builder(self, Some(opening))
    }
}

/// The rules engine. Owns the table state, the draw pile and the event log.
///
/// Not synchronized: hosts must serialize every call. Deferred scripted turns should be
/// started through [`Game::run_bot_turn`] with a [`TurnTicket`] captured at scheduling time.
pub struct Game {
    config: GameConfig,
    state: GameState,
    deck: Deck,
    events: EventLog,
    rng: StdRng,
}

impl Game {
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        GameBuilder { config, deck: None }.build()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_count(&self) -> usize {
        self.deck.len()
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Hands over every event logged since the last call.
    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.drain()
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn current_player(&self) -> PlayerNumber {
        self.state.current_player()
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.state.top_card()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn winner(&self) -> Option<PlayerNumber> {
        self.state.winner()
    }

    /// Deck plus hands plus discard pile. Constant for the lifetime of a game.
    pub fn card_total(&self) -> usize {
        self.deck.len() + self.state.cards_on_table()
    }

    /// Whether `card` may go on the current top card.
    pub fn can_play(&self, card: &Card) -> bool {
        match self.state.top_card() {
            Some(top) => can_play(card, top, self.state.chosen_wild_color),
            None => true,
        }
    }

    /// Binary encoding of the table (state and deck), for exact comparisons.
    pub fn snapshot(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serde::encode_to_vec(
            (&self.state, &self.deck),
            bincode::config::standard(),
        )?)
    }

    pub fn ticket(&self) -> TurnTicket {
        TurnTicket {
            generation: self.state.generation,
            turn: self.state.turn,
            player: self.state.current_player,
        }
    }

    pub fn state_view(&self, perspective: PlayerNumber) -> Result<GameStateView, GameError> {
        let me = self.state.player(perspective)?;
        let players = self
            .state
            .players
            .iter()
            .map(|player| OpponentView {
                number: player.number(),
                name: player.name().to_string(),
                hand_size: player.card_count(),
                is_current: player.number() == self.state.current_player,
            })
            .collect();

        Ok(GameStateView {
            status: self.state.status,
            self_player: perspective,
            current_player: self.state.current_player,
            clockwise: self.state.clockwise,
            deck_count: self.deck.len(),
            top_card: self.state.top_card().copied(),
            chosen_wild_color: self.state.chosen_wild_color,
            just_drawn: if perspective == self.state.current_player {
                self.state.just_drawn
            } else {
                None
            },
            players,
            hand: me.hand().to_vec(),
        })
    }

    pub fn legal_actions(&self, player: PlayerNumber) -> Result<Vec<Action>, GameError> {
        self.state.player(player)?;
        if self.state.is_game_over() {
            return Ok(Vec::new());
        }
        self.ensure_turn(player)?;
        let seat = self.state.player(player)?;
        let mut actions = Vec::new();

        if let Some(drawn) = self.state.just_drawn {
            if seat.find(drawn).is_some_and(|card| self.can_play(card)) {
                actions.push(Action::Play(drawn));
            }
            actions.push(Action::Pass);
            return Ok(actions);
        }

        actions.extend(
            seat.hand()
                .iter()
                .filter(|card| self.can_play(card))
                .map(|card| Action::Play(card.id())),
        );
        if self.deck.is_empty() {
            actions.push(Action::Pass);
        } else {
            actions.push(Action::Draw);
        }
        Ok(actions)
    }

    pub fn apply_action(
        &mut self,
        player: PlayerNumber,
        action: Action,
        chooser: Option<&mut dyn ColorChooser>,
    ) -> Result<(), GameError> {
        match action {
            Action::Play(card) => self.play(player, card, chooser),
            Action::Draw => self.draw(player).map(|_| ()),
            Action::Pass => self.pass(player),
        }
    }

    /// Plays a whole turn: the play transaction followed by the turn advance carrying
    /// the card's effect.
    pub fn play(
        &mut self,
        player: PlayerNumber,
        card: CardId,
        chooser: Option<&mut dyn ColorChooser>,
    ) -> Result<(), GameError> {
        self.ensure_turn(player)?;
        if let Some(drawn) = self.state.just_drawn {
            if drawn != card {
                return Err(InvalidAction::MustPlayDrawnCard(drawn).into());
            }
        }
        let kind = self
            .state
            .player(player)?
            .find(card)
            .map(Card::kind)
            .ok_or(InvalidAction::CardNotInHand(card))?;
        self.try_play_card(player, card, chooser)?;
        self.advance_turn(TurnEffect::of(kind));
        Ok(())
    }

    /// Validates and commits a play without touching turn order.
    ///
    /// On any error the table is unchanged. With no discard top yet the play is accepted
    /// unconditionally. A wild card asks `chooser` for its color, falling back to red.
    pub fn try_play_card(
        &mut self,
        player: PlayerNumber,
        card: CardId,
        chooser: Option<&mut dyn ColorChooser>,
    ) -> Result<(), GameError> {
        self.state.player(player)?;
        if self.state.is_game_over() {
            return Err(GameError::GameOver);
        }
        let held = *self
            .state
            .player(player)?
            .find(card)
            .ok_or(InvalidAction::CardNotInHand(card))?;
        if let Some(top) = self.state.top_card() {
            if !can_play(&held, top, self.state.chosen_wild_color) {
                log::debug!("p{player} rejected: {held} on {top}");
                return Err(InvalidAction::IllegalPlay { card: held, top: *top }.into());
            }
        }
        self.commit_play(player, held, chooser)
    }

    /// Moves play to the next seat, then applies `effect` to that seat.
    ///
    /// DrawTwo/DrawFour make the target draw and lose the turn, Skip only loses it. The
    /// direction used is whatever the last play left behind.
    pub fn advance_turn(&mut self, effect: TurnEffect) {
        if self.state.is_game_over() {
            return;
        }
        self.state.just_drawn = None;
        self.state.turn += 1;
        self.state.advance_seat();
        let target = self.state.current_player;
        match effect {
            TurnEffect::DrawTwo | TurnEffect::DrawFour => {
                let cards = self.deck.draw_many(effect.penalty());
                let seat = self.seat_mut(target);
                for card in &cards {
                    seat.add_card(*card);
                }
                self.events.push(target, EventKind::Drew { cards, skipped: true });
                self.state.advance_seat();
            }
            TurnEffect::Skip => {
                self.events.push(target, EventKind::Skipped);
                self.state.advance_seat();
            }
            TurnEffect::None => {}
        }
        log::debug!(
            "turn {} -> p{} ({})",
            self.state.turn,
            self.state.current_player,
            if self.state.clockwise { "cw" } else { "ccw" }
        );
    }

    /// Handles a draw request from the current player.
    ///
    /// A second request after drawing passes the turn. A drawn card that cannot be played
    /// ends the turn immediately; a playable one stays locked in as the only legal play.
    pub fn draw(&mut self, player: PlayerNumber) -> Result<DrawOutcome, GameError> {
        self.ensure_turn(player)?;
        if self.state.just_drawn.is_some() {
            self.state.just_drawn = None;
            self.advance_turn(TurnEffect::None);
            return Ok(DrawOutcome::Passed);
        }
        let Some(card) = self.deck.draw() else {
            log::debug!("p{player} tried to draw from an empty deck");
            return Ok(DrawOutcome::DeckEmpty);
        };
        self.seat_mut(player).add_card(card);
        self.state.just_drawn = Some(card.id());
        self.events.push(
            player,
            EventKind::Drew {
                cards: vec![card],
                skipped: false,
            },
        );
        let playable = self.can_play(&card);
        if !playable {
            self.state.just_drawn = None;
            self.advance_turn(TurnEffect::None);
        }
        Ok(DrawOutcome::Drew { card, playable })
    }

    /// Ends the turn without playing. Only allowed after drawing, or once the deck is empty.
    pub fn pass(&mut self, player: PlayerNumber) -> Result<(), GameError> {
        self.ensure_turn(player)?;
        if self.state.just_drawn.is_none() && !self.deck.is_empty() {
            return Err(InvalidAction::CannotPass.into());
        }
        self.state.just_drawn = None;
        self.advance_turn(TurnEffect::None);
        Ok(())
    }

    /// Scans seats 1 to 4 for an empty hand and ends the game on the first one found.
    pub fn check_for_winner(&mut self) -> Option<PlayerNumber> {
        if let Some(winner) = self.state.winner() {
            return Some(winner);
        }
        let winner = self
            .state
            .players
            .iter()
            .find(|player| player.has_won())
            .map(Player::number)?;
        self.state.status = GameStatus::Finished { winner };
        self.state.just_drawn = None;
        self.events.push(winner, EventKind::Won);
        log::info!("player {winner} won after {} turns", self.state.turn);
        Some(winner)
    }

    /// Lets `bot` act for the seat named in `ticket` until that seat's turn ends.
    ///
    /// Fails with [`GameError::StaleTurn`], touching nothing, when the game was reset or
    /// the turn moved on since the ticket was issued.
    pub fn run_bot_turn(&mut self, ticket: TurnTicket, bot: &mut dyn Bot) -> Result<(), GameError> {
        if ticket != self.ticket() {
            return Err(GameError::StaleTurn);
        }
        let player = ticket.player;
        while !self.state.is_game_over() && self.state.turn == ticket.turn {
            let view = self.state_view(player)?;
            let legal_actions = self.legal_actions(player)?;
            let action = bot.select_action(&view, &legal_actions);
            self.apply_action(player, action, Some(bot.color_chooser()))?;
        }
        Ok(())
    }

    /// Starts a fresh game at the same table. Any outstanding ticket becomes stale.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.reset_inner(None)
    }

    pub fn reset_with_chooser(&mut self, opening: &mut dyn ColorChooser) -> Result<(), GameError> {
        self.reset_inner(Some(opening))
    }

    fn reset_inner(&mut self, opening: Option<&mut dyn ColorChooser>) -> Result<(), GameError> {
        let generation = self.state.generation + 1;
        self.state = GameState::new(&self.config.names, self.config.human, generation);
        self.deck = Deck::shuffled(&mut self.rng);
        self.events.clear();
        log::info!("new game, generation {generation}");
        self.deal(opening)
    }

    fn from_builder(
        builder: GameBuilder,
        opening: Option<&mut dyn ColorChooser>,
    ) -> Result<Self, GameError> {
        let GameBuilder { config, deck } = builder;
        if let Some(human) = config.human {
            if !(1..=PLAYER_COUNT as PlayerNumber).contains(&human) {
                return Err(GameError::InvalidPlayer(human));
            }
        }
        let mut rng = StdRng::seed_from_u64(config.seed);
        let deck = match deck {
            Some(cards) => {
                if cards.len() < MIN_DECK_SIZE {
                    return Err(GameError::InvalidConfiguration(
                        "deck does not contain enough cards to deal",
                    ));
                }
                let ids: HashSet<CardId> = cards.iter().map(Card::id).collect();
                if ids.len() != cards.len() {
                    return Err(GameError::InvalidConfiguration("deck contains duplicate card ids"));
                }
                if cards
                    .iter()
                    .any(|card| card.rank().is_some_and(|rank| rank > MAX_RANK))
                {
                    return Err(GameError::InvalidConfiguration("deck contains a rank above 9"));
                }
                Deck::from_cards(cards)
            }
            None => Deck::shuffled(&mut rng),
        };

        let mut game = Game {
            state: GameState::new(&config.names, config.human, 0),
            config,
            deck,
            events: EventLog::new(),
            rng,
        };
        game.deal(opening)?;
        Ok(game)
    }

    /// Seven rounds of one card per seat, then one card face up to start the discard pile.
    fn deal(&mut self, opening: Option<&mut dyn ColorChooser>) -> Result<(), GameError> {
        for _ in 0..HAND_SIZE {
            for seat in self.state.players.iter_mut() {
                if let Some(card) = self.deck.draw() {
                    seat.add_card(card);
                }
            }
        }
        if let Some(starter) = self.deck.draw() {
            self.state.discard_pile.push(starter);
            if starter.is_wild() {
                self.negotiate_color(1, opening, true)?;
            }
            log::info!("dealt, starter {starter}, {} cards left", self.deck.len());
        }
        Ok(())
    }

    fn commit_play(
        &mut self,
        player: PlayerNumber,
        card: Card,
        chooser: Option<&mut dyn ColorChooser>,
    ) -> Result<(), GameError> {
        let remaining = {
            let seat = self.state.player_mut(player)?;
            seat.remove_card(card.id())
                .ok_or(InvalidAction::CardNotInHand(card.id()))?;
            seat.card_count()
        };
        self.state.discard_pile.push(card);
        self.state.just_drawn = None;
        self.events.push(player, EventKind::Played(card));
        if remaining == 1 {
            self.events.push(player, EventKind::UnDeclared);
        }

        if card.is_wild() {
            self.negotiate_color(player, chooser, false)?;
        } else {
            self.state.chosen_wild_color = None;
        }
        if card.kind() == CardKind::Reverse {
            self.state.clockwise = !self.state.clockwise;
        }
        if remaining == 0 {
            self.check_for_winner();
        }
        Ok(())
    }

    fn negotiate_color(
        &mut self,
        player: PlayerNumber,
        chooser: Option<&mut dyn ColorChooser>,
        opening: bool,
    ) -> Result<Color, GameError> {
        let hand = self.state.player(player)?.hand();
        let picked = match chooser {
            Some(chooser) => chooser.choose_color(hand),
            None => {
                log::warn!("no color chooser for player {player}, defaulting to red");
                None
            }
        };
        let color = picked.unwrap_or(Color::Red);
        self.state.chosen_wild_color = Some(color);
        self.events.push(player, EventKind::ColorChosen { color, opening });
        Ok(color)
    }

    fn ensure_turn(&self, player: PlayerNumber) -> Result<(), GameError> {
        self.state.player(player)?;
        if self.state.is_game_over() {
            return Err(GameError::GameOver);
        }
        if player != self.state.current_player {
            return Err(GameError::NotPlayersTurn {
                expected: self.state.current_player,
                actual: player,
            });
        }
        Ok(())
    }

    /// Callers only pass seats already validated or taken from the ring.
    fn seat_mut(&mut self, player: PlayerNumber) -> &mut Player {
        &mut self.state.players[usize::from(player) - 1]
    }
}
