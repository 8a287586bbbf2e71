//! Main application for the Six Pawns GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;
use crate::Cell;

/// Main Six Pawns application
pub struct SixPawnsApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for SixPawnsApp {
    fn default() -> Self {
        Self {
            state: GameState::new(Cell::White),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }
}

impl SixPawnsApp {
    /// Create a new app; the human moves first by default
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (you move first)").clicked() {
                        self.state = GameState::new(Cell::White);
                        ui.close_menu();
                    }
                    if ui.button("New Game (AI moves first)").clicked() {
                        self.state = GameState::new(Cell::Black);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label("You: White · AI: Black");
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(winner) = self.state.winner {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, winner);
                }

                if let Some(msg) = &self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(
                RichText::new("SIX PAWNS")
                    .size(22.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(
                RichText::new("swap the halves to win")
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.state.current_turn == Cell::Black;
            let (pawn_char, color_name) = if is_black {
                ("●", "BLACK (AI)")
            } else {
                ("○", "WHITE (You)")
            };

            ui.horizontal(|ui| {
                ui.label(RichText::new(pawn_char).size(28.0).color(TEXT_PRIMARY));
                ui.add_space(8.0);

                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(color_name)
                            .size(16.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if self.state.is_ai_thinking() {
                        let secs = self
                            .state
                            .ai_thinking_elapsed()
                            .map_or(0.0, |d| d.as_secs_f32());
                        (format!("AI thinking… {secs:.1}s"), STATUS_THINKING)
                    } else if self.state.winner.is_some() {
                        ("Game over".to_string(), WIN_HIGHLIGHT)
                    } else if self.state.is_human_turn() {
                        match self.state.selected {
                            Some(index) => (format!("Pawn {index} selected"), STATUS_OK),
                            None => ("Select a pawn".to_string(), STATUS_OK),
                        }
                    } else {
                        ("AI to move".to_string(), STATUS_THINKING)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_count))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(result) = &self.state.last_ai_result {
                    ui.label(
                        RichText::new(format!("Score: {}", result.score))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.label(
                        RichText::new(format!("{} nodes in {}ms", result.nodes, result.time_ms))
                            .size(10.0)
                            .color(TEXT_MUTED),
                    );
                    if let Some(mv) = result.best_move {
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new(format!("→ {} to {}", mv.from, mv.to))
                                .size(12.0)
                                .strong()
                                .color(WIN_HIGHLIGHT),
                        );
                    }
                } else {
                    ui.label(
                        RichText::new("Waiting for AI...")
                            .size(10.0)
                            .color(TEXT_MUTED),
                    );
                }
            });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, winner: Cell) {
        let (name, symbol) = if winner == Cell::Black {
            ("BLACK (AI)", "●")
        } else {
            ("WHITE (You)", "○")
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(symbol).size(32.0).color(TEXT_PRIMARY));
                    ui.label(RichText::new(name).size(16.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new("WINS!").size(14.0).color(WIN_HIGHLIGHT));
                    ui.add_space(12.0);

                    if ui.button("New Game").clicked() {
                        self.state = GameState::new(Cell::White);
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.25);

                let clicked = self.board_view.show(
                    ui,
                    &self.state.board,
                    self.state.selected,
                    self.state.last_move,
                    self.state.is_human_turn() && !self.state.is_ai_thinking(),
                    self.state.winner.is_some(),
                );

                if let Some(index) = clicked {
                    self.state.handle_click(index);
                }
            });
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state = GameState::new(Cell::White);
            }
        });
    }
}

impl eframe::App for SixPawnsApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Check AI result
        self.state.check_ai_result();

        // Start AI thinking if needed
        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.winner.is_none() {
            self.state.start_ai_thinking();
        }

        // Render UI
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep polling the worker thread while the AI is thinking
        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
