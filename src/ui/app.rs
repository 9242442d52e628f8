//! Main application for the Runline GUI

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};
use log::info;

use super::board_view::BoardView;
use super::game_state::{GameOutcome, GameState};
use super::theme::*;
use crate::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Which part of the application owns the window
enum Screen {
    /// Asking for the board size
    Setup { input: String, error: Option<String> },
    Playing(GameState),
}

/// Main Runline application
pub struct RunlineApp {
    screen: Screen,
    board_view: BoardView,
    last_size: usize,
}

impl Default for RunlineApp {
    fn default() -> Self {
        Self {
            screen: Screen::Setup {
                input: String::new(),
                error: None,
            },
            board_view: BoardView::default(),
            last_size: MIN_BOARD_SIZE,
        }
    }
}

impl RunlineApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Back to the size dialog, prefilled with the previous size
    fn new_game(&mut self) {
        self.screen = Screen::Setup {
            input: self.last_size.to_string(),
            error: None,
        };
    }

    /// Validate the typed size and start a game with it
    fn start_game(&mut self, input: &str) -> Result<(), String> {
        let size: usize = input
            .trim()
            .parse()
            .map_err(|_| format!("Enter a whole number from {MIN_BOARD_SIZE} to {MAX_BOARD_SIZE}"))?;
        let state = GameState::new(size).map_err(|e| e.to_string())?;

        info!("New game on a {size}x{size} board");
        self.last_size = size;
        self.screen = Screen::Playing(state);
        Ok(())
    }

    fn render_setup(&mut self, ctx: &Context) {
        let mut submitted = None;
        let mut cancelled = false;

        if let Screen::Setup { input, error } = &mut self.screen {
            egui::Window::new("Board Size")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label("Enter board size:");
                    let response = ui.add(
                        egui::TextEdit::singleline(input)
                            .hint_text(format!("{MIN_BOARD_SIZE}-{MAX_BOARD_SIZE}"))
                            .desired_width(120.0),
                    );
                    response.request_focus();

                    if let Some(msg) = error.as_deref() {
                        ui.label(RichText::new(msg).color(STATUS_BUSY));
                    }

                    let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    ui.horizontal(|ui| {
                        if ui.button("OK").clicked() || enter {
                            submitted = Some(input.clone());
                        }
                        if ui.button("Cancel").clicked() {
                            cancelled = true;
                        }
                    });
                });
        }

        if cancelled {
            info!("Setup cancelled, closing");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        } else if let Some(text) = submitted {
            if let Err(msg) = self.start_game(&text) {
                if let Screen::Setup { error, .. } = &mut self.screen {
                    *error = Some(msg);
                }
            }
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        ui.close_menu();
                    }
                });

                if let Screen::Playing(state) = &self.screen {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let n = state.board.size();
                        ui.label(format!("{n}x{n} board"));
                    });
                }
            });
        });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render the side panel with turn, scores and AI info
    fn render_side_panel(ctx: &Context, state: &GameState) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.label(RichText::new("RUNLINE").size(22.0).strong().color(TEXT_PRIMARY));
                ui.add_space(10.0);

                Self::card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    let (text, color) = if state.is_game_over() {
                        ("Game Over", TEXT_SECONDARY)
                    } else if state.is_ai_thinking() {
                        ("AI thinking...", STATUS_BUSY)
                    } else if state.is_human_turn() {
                        ("Your turn (X)", STATUS_READY)
                    } else {
                        ("AI to move (O)", STATUS_BUSY)
                    };
                    ui.label(RichText::new(text).size(16.0).strong().color(color));
                    ui.label(
                        RichText::new(format!("Move #{}", state.move_history.len()))
                            .size(11.0)
                            .color(TEXT_MUTED),
                    );
                    if let Some(elapsed) = state.ai_thinking_elapsed() {
                        ui.label(
                            RichText::new(format!("{:.2}s", elapsed.as_secs_f32()))
                                .size(11.0)
                                .color(TEXT_SECONDARY),
                        );
                    }
                });
                ui.add_space(10.0);

                let scores = state.live_scores();
                Self::card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new("SCORES").size(10.0).color(TEXT_MUTED));
                    ui.label(RichText::new(format!("You: {}", scores.human)).size(14.0).color(HUMAN_MARK));
                    ui.label(RichText::new(format!("AI: {}", scores.ai)).size(14.0).color(AI_MARK));
                });
                ui.add_space(10.0);

                Self::card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new("AI SEARCH").size(10.0).color(TEXT_MUTED));
                    match &state.last_ai_result {
                        Some(result) => {
                            let mv = result.best_move.map_or_else(|| "none".to_string(), |p| p.label());
                            let score = result.score.map_or_else(|| "-".to_string(), |s| s.to_string());
                            let depth_hi = result.depths.end.saturating_sub(1);
                            for line in [
                                format!("Move: {mv}"),
                                format!("Score: {score}"),
                                format!("Depth: {}..={}", result.depths.start, depth_hi),
                                format!("Nodes: {}", result.stats.nodes),
                                format!("Cache hits: {}/{}", result.stats.cache_hits, result.stats.cache_probes),
                                format!("Time: {}ms", result.time_ms),
                            ] {
                                ui.label(RichText::new(line).size(11.0).color(TEXT_SECONDARY));
                            }
                        }
                        None => {
                            ui.label(RichText::new("No search yet").size(11.0).color(TEXT_MUTED));
                        }
                    }
                });

                if let Some(msg) = &state.message {
                    ui.add_space(10.0);
                    Frame::new()
                        .fill(MESSAGE_BG)
                        .corner_radius(CornerRadius::same(8))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            ui.label(RichText::new(msg).size(12.0).color(TEXT_PRIMARY));
                        });
                }
            });
    }

    /// Render the main board
    fn render_board(ctx: &Context, state: &mut GameState, board_view: &mut BoardView) {
        CentralPanel::default().show(ctx, |ui| {
            let clicked = board_view.show(
                ui,
                &state.board,
                state.last_move,
                state.is_human_turn() && !state.is_ai_thinking(),
            );

            if let Some(pos) = clicked {
                if let Err(err) = state.try_place_stone(pos) {
                    state.message = Some(err.to_string());
                }
            }
        });
    }

    /// Final scores with New Game and Quit; returns true for New Game
    fn render_game_over(ctx: &Context, outcome: &GameOutcome) -> bool {
        let mut new_game = false;
        egui::Window::new("Game Over")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(RichText::new("Final Scores").strong());
                ui.label(format!("You: {}", outcome.human));
                ui.label(format!("AI: {}", outcome.ai));
                ui.add_space(6.0);
                ui.label(RichText::new(outcome.verdict()).size(16.0).strong());
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if ui.button("New Game").clicked() {
                        new_game = true;
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        new_game
    }
}

impl eframe::App for RunlineApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.render_menu_bar(ctx);

        if matches!(self.screen, Screen::Setup { .. }) {
            CentralPanel::default().show(ctx, |_ui| {});
            self.render_setup(ctx);
            return;
        }

        let mut restart = false;
        if let Screen::Playing(state) = &mut self.screen {
            let now = Instant::now();
            state.update(now);

            Self::render_side_panel(ctx, state);
            Self::render_board(ctx, state, &mut self.board_view);

            if let Some(outcome) = state.outcome {
                restart = Self::render_game_over(ctx, &outcome);
            }

            // Keep frames coming while the AI turn is pending
            if let Some(wait) = state.ai_due_in(now) {
                ctx.request_repaint_after(wait);
            } else if state.is_ai_thinking() {
                ctx.request_repaint();
            }
        }

        if restart {
            self.new_game();
        }
    }
}
