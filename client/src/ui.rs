use eframe::egui;
use tictactoe_common::log;
use tictactoe_common::tictactoe::{GameSession, MoveResult, Outcome, Symbol, View};

use crate::board_view::BoardView;

pub struct TicTacToeApp {
    session: GameSession,
    board_view: BoardView,
}

impl TicTacToeApp {
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            board_view: BoardView::new(),
        }
    }

    fn render_symbol_select(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            let question = if self.session.has_human_opponent() {
                "Player,\nWhich symbol would you like to use?"
            } else {
                "Which symbol would you like to use?"
            };
            ui.heading(question);
            ui.add_space(20.0);

            ui.horizontal(|ui| {
                let button_width = 80.0;
                let spacing = ui.spacing().item_spacing.x;
                ui.add_space((ui.available_width() - button_width * 2.0 - spacing) / 2.0);

                for symbol in [Symbol::X, Symbol::O] {
                    let button = egui::Button::new(egui::RichText::new(symbol.to_string()).size(32.0))
                        .min_size(egui::vec2(button_width, 60.0));
                    if ui.add(button).clicked()
                        && let Err(e) = self.session.choose_symbol(symbol)
                    {
                        log!("Failed to choose symbol: {}", e);
                    }
                }
            });
        });
    }

    fn render_game(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(format!(
                "move: {}     turn: {}",
                self.session.move_number(),
                self.session.current_player().name
            ));
            ui.add_space(10.0);

            let clicked = self.board_view.show(ui, self.session.board(), None, true);
            if let Some(position) = clicked
                && self.session.play(position) == MoveResult::Rejected
            {
                log!("Ignored click on {}", position);
            }

            ui.add_space(10.0);
            self.render_score(ui);
        });
    }

    fn render_result(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            let result_text = match (self.session.outcome(), self.session.winner()) {
                (Outcome::Won(_), Some(winner)) => format!("{} Won", winner.name),
                _ => "Tie".to_string(),
            };
            ui.heading(format!("{}     Click to restart", result_text));
            ui.add_space(10.0);

            let winning_line = self.session.winning_line().copied();
            let board_clicked = self
                .board_view
                .show(ui, self.session.board(), winning_line.as_ref(), false)
                .is_some();

            ui.add_space(10.0);
            self.render_score(ui);
            ui.add_space(10.0);

            let button_clicked = ui.button("Play again").clicked();
            if (board_clicked || button_clicked)
                && let Err(e) = self.session.restart()
            {
                log!("Failed to restart: {}", e);
            }
        });
    }

    fn render_score(&self, ui: &mut egui::Ui) {
        let [player, opponent] = self.session.players();
        ui.label(
            egui::RichText::new(format!(
                "Score:  {} - {}    {} - {}",
                player.name, player.score, opponent.name, opponent.score
            ))
            .size(18.0),
        );
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| match self.session.view() {
            View::SymbolSelect => self.render_symbol_select(ui),
            View::Game => self.render_game(ui),
            View::Result => self.render_result(ui),
        });
    }
}
