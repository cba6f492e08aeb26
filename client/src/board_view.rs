use eframe::egui;
use tictactoe_common::tictactoe::{BOARD_SIZE, Board, Position, Symbol, WinningLine};

pub struct BoardView {
    hover: Option<Position>,
}

impl BoardView {
    const MIN_CELL_SIZE: f32 = 60.0;
    const MAX_CELL_SIZE: f32 = 140.0;
    const LINE_WIDTH: f32 = 2.0;
    const MARK_WIDTH: f32 = 5.0;

    const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(240, 240, 240);
    const HOVER: egui::Color32 = egui::Color32::from_rgba_premultiplied(50, 75, 128, 50);
    const WINNING_CELL: egui::Color32 = egui::Color32::from_rgb(255, 225, 120);
    const X_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);
    const O_COLOR: egui::Color32 = egui::Color32::from_rgb(50, 50, 220);

    pub fn new() -> Self {
        Self { hover: None }
    }

    fn cell_size(ui: &egui::Ui) -> f32 {
        let available = ui.available_width().min(ui.available_height() - 80.0);
        (available / BOARD_SIZE as f32).clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    /// Draws the board and returns the clicked cell. With `interactive` off the
    /// whole board still reports clicks as `Some` of the nearest cell so the
    /// result screen can use it as a restart target.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        winning_line: Option<&WinningLine>,
        interactive: bool,
    ) -> Option<Position> {
        let cell_size = Self::cell_size(ui);
        let side = cell_size * BOARD_SIZE as f32;

        let (rect, response) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());
        let painter = ui.painter();

        painter.rect_filled(rect, 0.0, Self::BACKGROUND);

        self.hover = response
            .hover_pos()
            .and_then(|pos| Self::cell_at(rect, cell_size, pos))
            .filter(|&position| interactive && board.is_empty_at(position));

        for row in 0..BOARD_SIZE {
            for column in 0..BOARD_SIZE {
                let position = Position::new(row, column);
                let cell_rect = Self::cell_rect(rect, cell_size, position);

                if winning_line.is_some_and(|line| line.contains(position)) {
                    painter.rect_filled(cell_rect, 0.0, Self::WINNING_CELL);
                } else if self.hover == Some(position) {
                    painter.rect_filled(cell_rect, 0.0, Self::HOVER);
                }

                match board.get(position) {
                    Some(Symbol::X) => Self::draw_x(painter, cell_rect),
                    Some(Symbol::O) => Self::draw_o(painter, cell_rect),
                    None => {}
                }
            }
        }

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * cell_size;
            let stroke = egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::BLACK);
            painter.line_segment(
                [egui::pos2(rect.left() + offset, rect.top()), egui::pos2(rect.left() + offset, rect.bottom())],
                stroke,
            );
            painter.line_segment(
                [egui::pos2(rect.left(), rect.top() + offset), egui::pos2(rect.right(), rect.top() + offset)],
                stroke,
            );
        }

        if !response.clicked() {
            return None;
        }
        response
            .interact_pointer_pos()
            .and_then(|pos| Self::cell_at(rect, cell_size, pos))
    }

    fn cell_at(rect: egui::Rect, cell_size: f32, pos: egui::Pos2) -> Option<Position> {
        if !rect.contains(pos) {
            return None;
        }
        let column = ((pos.x - rect.left()) / cell_size) as usize;
        let row = ((pos.y - rect.top()) / cell_size) as usize;
        Some(Position::new(row.min(BOARD_SIZE - 1), column.min(BOARD_SIZE - 1)))
    }

    fn cell_rect(rect: egui::Rect, cell_size: f32, position: Position) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                rect.left() + position.column as f32 * cell_size,
                rect.top() + position.row as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new(Self::MARK_WIDTH, Self::X_COLOR);

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let radius = (rect.width() / 2.0) - padding;
        painter.circle_stroke(rect.center(), radius, egui::Stroke::new(Self::MARK_WIDTH, Self::O_COLOR));
    }
}
