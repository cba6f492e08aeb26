use rand::Rng;

use crate::config::{GameSettings, OpponentKind};
use crate::rng::SessionRng;
use crate::{log, log_debug};
use super::board::Board;
use super::bot_controller::{calculate_move, is_legal_move};
use super::types::{BotType, FirstPlayerMode, Outcome, Position, Symbol, WinningLine};
use super::win_detector::evaluate;

pub const HUMAN_PLAYER: usize = 0;
pub const OPPONENT_PLAYER: usize = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    SymbolSelect,
    Game,
    Result,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Controller {
    Human,
    Bot(BotType),
}

#[derive(Clone, Debug)]
pub struct Player {
    pub name: String,
    pub symbol: Option<Symbol>,
    pub controller: Controller,
    pub score: u32,
}

impl Player {
    fn new(name: &str, controller: Controller) -> Self {
        Self {
            name: name.to_string(),
            symbol: None,
            controller,
            score: 0,
        }
    }

    pub fn is_bot(&self) -> bool {
        matches!(self.controller, Controller::Bot(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// The input was ignored and nothing changed.
    Rejected,
    /// The move was played; carries the outcome after any bot replies.
    Applied(Outcome),
}

/// One local player against a human or bot opponent, across many rounds.
///
/// Flow: `SymbolSelect` -> `choose_symbol` -> `Game` -> finished round ->
/// `Result` -> `restart` -> `Game`. Bot turns are played synchronously inside
/// the call that hands them the move.
pub struct GameSession {
    players: [Player; 2],
    board: Board,
    turn: usize,
    view: View,
    outcome: Outcome,
    first_player_mode: FirstPlayerMode,
    rng: SessionRng,
}

impl GameSession {
    pub fn new(opponent: OpponentKind, first_player_mode: FirstPlayerMode, rng: SessionRng) -> Self {
        let opponent_player = match opponent.bot_type() {
            Some(bot_type) => Player::new("Computer", Controller::Bot(bot_type)),
            None => Player::new("Player 2", Controller::Human),
        };

        Self {
            players: [Player::new("Player", Controller::Human), opponent_player],
            board: Board::new(),
            turn: HUMAN_PLAYER,
            view: View::SymbolSelect,
            outcome: Outcome::Incomplete,
            first_player_mode,
            rng,
        }
    }

    pub fn from_settings(settings: &GameSettings, rng: SessionRng) -> Self {
        Self::new(settings.opponent, settings.first_player, rng)
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.outcome.winning_line()
    }

    pub fn winner(&self) -> Option<&Player> {
        let symbol = self.outcome.winner()?;
        self.players.iter().find(|player| player.symbol == Some(symbol))
    }

    pub fn move_number(&self) -> usize {
        self.board.move_count() + 1
    }

    pub fn has_human_opponent(&self) -> bool {
        !self.players[OPPONENT_PLAYER].is_bot()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn choose_symbol(&mut self, symbol: Symbol) -> Result<(), String> {
        if self.view != View::SymbolSelect {
            return Err("Symbols are already chosen".to_string());
        }

        self.players[HUMAN_PLAYER].symbol = Some(symbol);
        self.players[OPPONENT_PLAYER].symbol = Some(symbol.opponent());
        log!(
            "{} plays {}, {} plays {}",
            self.players[HUMAN_PLAYER].name,
            symbol,
            self.players[OPPONENT_PLAYER].name,
            symbol.opponent()
        );

        self.begin_round();
        Ok(())
    }

    pub fn restart(&mut self) -> Result<(), String> {
        if self.view != View::Result {
            return Err("Round is not finished".to_string());
        }
        self.begin_round();
        Ok(())
    }

    fn begin_round(&mut self) {
        self.board = Board::new();
        self.outcome = Outcome::Incomplete;
        self.turn = match self.first_player_mode {
            FirstPlayerMode::Random => self.rng.random_range(0..self.players.len()),
            FirstPlayerMode::Host => HUMAN_PLAYER,
        };
        self.view = View::Game;
        log!("Round started, {} moves first", self.current_player().name);

        self.play_bot_turns();
    }

    /// Human input. Anything but an empty cell on the current human's turn is ignored.
    pub fn play(&mut self, position: Position) -> MoveResult {
        if self.view != View::Game || self.current_player().is_bot() {
            return MoveResult::Rejected;
        }
        if !self.execute_turn(position) {
            return MoveResult::Rejected;
        }

        self.play_bot_turns();
        MoveResult::Applied(self.outcome)
    }

    fn play_bot_turns(&mut self) {
        while self.view == View::Game {
            let Controller::Bot(bot_type) = self.current_player().controller else {
                return;
            };
            let Some(symbol) = self.current_player().symbol else {
                return;
            };

            let chosen = match calculate_move(bot_type, &self.board, symbol, &mut self.rng) {
                Ok(chosen) => chosen,
                Err(e) => {
                    log!("Bot could not move: {}", e);
                    return;
                }
            };
            log_debug!(
                "{:?} bot as {} picks {} with score {} on {}",
                bot_type,
                symbol,
                chosen.position,
                chosen.score,
                self.board
            );

            if !self.execute_turn(chosen.position) {
                return;
            }
        }
    }

    /// Places the current player's symbol. Returns false, changing nothing,
    /// when the cell is off the board or taken.
    fn execute_turn(&mut self, position: Position) -> bool {
        let Some(symbol) = self.current_player().symbol else {
            return false;
        };
        if !is_legal_move(&self.board, position) {
            log_debug!("Ignoring move {} by {}", position, self.current_player().name);
            return false;
        }

        self.board.place(position, symbol);
        self.outcome = evaluate(&self.board, symbol);
        log_debug!("{} played {} at {}", self.current_player().name, symbol, position);

        match self.outcome {
            Outcome::Incomplete => {
                self.turn = (self.turn + 1) % self.players.len();
            }
            Outcome::Won(line) => {
                let winner = &mut self.players[self.turn];
                winner.score += 1;
                log!("{} won with {} on {}", winner.name, line.symbol, self.board);
                self.view = View::Result;
            }
            Outcome::Tie => {
                log!("Tie on {}", self.board);
                self.view = View::Result;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::{LogLevel, init_logger};

    fn create_session(opponent: OpponentKind, first_player_mode: FirstPlayerMode, seed: u64) -> GameSession {
        init_logger(Some("test".to_string()), LogLevel::Debug);
        GameSession::new(opponent, first_player_mode, SessionRng::new(seed))
    }

    /// Human side that always takes the first free cell.
    fn play_first_free_cell(session: &mut GameSession) -> MoveResult {
        let position = session.board().available_moves()[0];
        session.play(position)
    }

    #[test]
    fn test_new_session_waits_for_symbol() {
        let mut session = create_session(OpponentKind::MinimaxBot, FirstPlayerMode::Host, 1);
        assert_eq!(session.view(), View::SymbolSelect);
        assert_eq!(session.play(Position::new(0, 0)), MoveResult::Rejected);
        assert_eq!(session.board().move_count(), 0);
        assert!(session.restart().is_err());
    }

    #[test]
    fn test_choose_symbol_assigns_opposite_symbols() {
        let mut session = create_session(OpponentKind::MinimaxBot, FirstPlayerMode::Host, 1);
        session.choose_symbol(Symbol::O).unwrap();
        assert_eq!(session.players()[HUMAN_PLAYER].symbol, Some(Symbol::O));
        assert_eq!(session.players()[OPPONENT_PLAYER].symbol, Some(Symbol::X));
        assert_eq!(session.view(), View::Game);
        assert_eq!(session.current_player().name, "Player");
        assert!(session.choose_symbol(Symbol::X).is_err());
    }

    #[test]
    fn test_bot_replies_synchronously() {
        let mut session = create_session(OpponentKind::MinimaxBot, FirstPlayerMode::Host, 2);
        session.choose_symbol(Symbol::X).unwrap();

        let result = session.play(Position::new(0, 0));
        assert_eq!(result, MoveResult::Applied(Outcome::Incomplete));
        assert_eq!(session.board().move_count(), 2);
        assert_eq!(session.board().get(Position::new(1, 1)), Some(Symbol::O));
        assert_eq!(session.current_player().name, "Player");
        assert_eq!(session.move_number(), 3);
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut session = create_session(OpponentKind::Human, FirstPlayerMode::Host, 3);
        session.choose_symbol(Symbol::X).unwrap();
        assert!(matches!(session.play(Position::new(1, 1)), MoveResult::Applied(_)));

        let before = *session.board();
        assert_eq!(session.play(Position::new(1, 1)), MoveResult::Rejected);
        assert_eq!(session.play(Position::new(3, 0)), MoveResult::Rejected);
        assert_eq!(*session.board(), before);
        assert_eq!(session.current_player().name, "Player 2");
    }

    #[test]
    fn test_hot_seat_alternates_and_scores_winner() {
        let mut session = create_session(OpponentKind::Human, FirstPlayerMode::Host, 4);
        session.choose_symbol(Symbol::X).unwrap();

        let moves = [(0, 0), (1, 0), (0, 1), (1, 1)];
        for (row, column) in moves {
            assert!(matches!(session.play(Position::new(row, column)), MoveResult::Applied(Outcome::Incomplete)));
        }
        let result = session.play(Position::new(0, 2));

        let MoveResult::Applied(Outcome::Won(line)) = result else {
            panic!("expected a win, got {:?}", result);
        };
        assert_eq!(line.symbol, Symbol::X);
        assert!(line.contains(Position::new(0, 1)));
        assert_eq!(session.view(), View::Result);
        assert_eq!(session.winner().map(|p| p.name.as_str()), Some("Player"));
        assert_eq!(session.players()[HUMAN_PLAYER].score, 1);
        assert_eq!(session.players()[OPPONENT_PLAYER].score, 0);
        assert_eq!(session.play(Position::new(2, 2)), MoveResult::Rejected);
    }

    #[test]
    fn test_minimax_bot_never_loses_to_first_free_cell_player() {
        for seed in 0..4 {
            let mut session = create_session(OpponentKind::MinimaxBot, FirstPlayerMode::Random, seed);
            session.choose_symbol(Symbol::X).unwrap();
            while session.view() == View::Game {
                assert!(matches!(play_first_free_cell(&mut session), MoveResult::Applied(_)));
            }
            assert_eq!(session.players()[HUMAN_PLAYER].score, 0, "seed {}", seed);
        }
    }

    #[test]
    fn test_restart_keeps_scores_and_symbols() {
        let mut session = create_session(OpponentKind::MinimaxBot, FirstPlayerMode::Host, 5);
        session.choose_symbol(Symbol::O).unwrap();
        // The minimax bot wins against a player who fills cells in order.
        while session.view() == View::Game {
            play_first_free_cell(&mut session);
        }
        let computer_score = session.players()[OPPONENT_PLAYER].score;
        assert_eq!(computer_score, 1);

        session.restart().unwrap();
        assert_eq!(session.view(), View::Game);
        assert_eq!(session.board().move_count(), 0);
        assert_eq!(session.outcome(), Outcome::Incomplete);
        assert_eq!(session.players()[OPPONENT_PLAYER].score, computer_score);
        assert_eq!(session.players()[HUMAN_PLAYER].symbol, Some(Symbol::O));
    }

    #[test]
    fn test_bot_moves_first_when_it_starts() {
        let mut found_bot_start = false;
        for seed in 0..32 {
            let mut session = create_session(OpponentKind::RandomBot, FirstPlayerMode::Random, seed);
            session.choose_symbol(Symbol::X).unwrap();
            if session.board().move_count() == 1 {
                assert_eq!(session.board().count_of(Symbol::O), 1);
                assert_eq!(session.current_player().name, "Player");
                found_bot_start = true;
                break;
            }
        }
        assert!(found_bot_start);
    }

    #[test]
    fn test_from_settings_uses_opponent_kind() {
        let settings = GameSettings {
            opponent: OpponentKind::Human,
            first_player: FirstPlayerMode::Host,
        };
        let session = GameSession::from_settings(&settings, SessionRng::new(9));
        assert!(session.has_human_opponent());
        assert_eq!(session.seed(), 9);
    }
}
