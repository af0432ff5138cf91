//! App shell: owns the `ViewState`, reacts to backend events, and paints
//! whatever the presenter planned for this frame.

use std::collections::HashMap;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::TextureHandle;
use shared::domain::{Movie, MovieId};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{PosterImage, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::state::{LoadStatus, SortMode, ViewState};
use crate::ui::presenter::{self, RenderPlan};
use crate::ui::theme::Palette;

const CARD_WIDTH: f32 = 180.0;
const CARD_POSTER_SIZE: egui::Vec2 = egui::Vec2::new(164.0, 220.0);
const DETAIL_POSTER_SIZE: egui::Vec2 = egui::Vec2::new(320.0, 440.0);

/// Per-movie poster lifecycle, kept apart from `ViewState` so a broken
/// image can never alter query/sort/selection state.
enum PosterState {
    Loading,
    Ready {
        image: PosterImage,
        texture: Option<TextureHandle>,
    },
    Failed,
}

/// What this frame paints, cloned out of the borrowed render plan so the
/// painting code can freely mutate app state (selection, search draft).
enum FramePlan {
    Loading,
    Failed(String),
    Detail(Movie),
    EmptyResults,
    Grid(Vec<Movie>),
}

pub struct MovieGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: ViewState,
    posters: HashMap<MovieId, PosterState>,
    placeholder: Option<TextureHandle>,
    palette: Palette,
    status: String,
    search_draft: String,
    theme_applied: bool,
}

impl MovieGuiApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            state: ViewState::new(),
            posters: HashMap::new(),
            placeholder: None,
            palette: Palette::dark(),
            status: String::new(),
            search_draft: String::new(),
            theme_applied: false,
        };
        // The one catalog retrieval of the session.
        dispatch_backend_command(&app.cmd_tx, BackendCommand::FetchCatalog, &mut app.status);
        app
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::CatalogLoaded(movies) => {
                    self.posters.clear();
                    self.state.catalog_loaded(movies);
                }
                UiEvent::CatalogFailed(err) => {
                    tracing::error!(reason = err.reason(), "catalog fetch failed: {err}");
                    self.state.catalog_failed();
                }
                UiEvent::PosterLoaded { movie_id, image } => {
                    self.posters.insert(
                        movie_id,
                        PosterState::Ready {
                            image,
                            texture: None,
                        },
                    );
                }
                UiEvent::PosterFailed { movie_id, reason } => {
                    tracing::debug!(movie_id = movie_id.0, reason = %reason, "poster unavailable");
                    self.posters.insert(movie_id, PosterState::Failed);
                }
            }
        }
    }

    /// Texture for a movie's poster, requesting the download on first sight
    /// and falling back to the placeholder while loading, when the record
    /// has no URL, and again when a present URL fails to load.
    fn poster_texture(&mut self, ctx: &egui::Context, movie: &Movie) -> TextureHandle {
        if !self.posters.contains_key(&movie.id) {
            match &movie.image_url {
                Some(url) => {
                    dispatch_backend_command(
                        &self.cmd_tx,
                        BackendCommand::FetchPoster {
                            movie_id: movie.id,
                            url: url.clone(),
                        },
                        &mut self.status,
                    );
                    self.posters.insert(movie.id, PosterState::Loading);
                }
                None => {
                    self.posters.insert(movie.id, PosterState::Failed);
                }
            }
        }

        if let Some(PosterState::Ready { image, texture }) = self.posters.get_mut(&movie.id) {
            if texture.is_none() {
                let color_image = egui::ColorImage::from_rgba_unmultiplied(
                    [image.width, image.height],
                    &image.rgba,
                );
                *texture = Some(ctx.load_texture(
                    format!("poster_{}", movie.id.0),
                    color_image,
                    egui::TextureOptions::LINEAR,
                ));
            }
            if let Some(texture) = texture {
                return texture.clone();
            }
        }

        self.placeholder_texture(ctx)
    }

    fn placeholder_texture(&mut self, ctx: &egui::Context) -> TextureHandle {
        if let Some(texture) = &self.placeholder {
            return texture.clone();
        }
        let texture = ctx.load_texture(
            "poster_placeholder",
            placeholder_image(),
            egui::TextureOptions::LINEAR,
        );
        self.placeholder = Some(texture.clone());
        texture
    }

    fn open_external_link(&mut self, url: &str) {
        #[cfg(target_os = "windows")]
        let result = std::process::Command::new("cmd")
            .args(["/C", "start", "", url])
            .spawn();

        #[cfg(target_os = "macos")]
        let result = std::process::Command::new("open").arg(url).spawn();

        #[cfg(all(unix, not(target_os = "macos")))]
        let result = std::process::Command::new("xdg-open").arg(url).spawn();

        if let Err(err) = result {
            self.status = format!("Failed to open external link: {err}");
        }
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.search_draft)
                    .hint_text("Search movies...")
                    .desired_width(260.0),
            );
            if response.changed() {
                self.state.set_query(&self.search_draft);
            }

            egui::ComboBox::from_id_salt("sort_mode")
                .selected_text(self.state.sort_mode().label())
                .show_ui(ui, |ui| {
                    for mode in SortMode::ALL {
                        let active = self.state.sort_mode() == mode;
                        if ui.selectable_label(active, mode.label()).clicked() {
                            self.state.set_sort_mode(mode);
                        }
                    }
                });
        });
    }

    fn show_card(&mut self, ui: &mut egui::Ui, movie: &Movie) {
        let texture = self.poster_texture(ui.ctx(), movie);
        egui::Frame::new()
            .fill(self.palette.card_fill)
            .stroke(egui::Stroke::new(1.0, self.palette.card_stroke))
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.vertical(|ui| {
                    ui.add(egui::Image::new(&texture).fit_to_exact_size(CARD_POSTER_SIZE));
                    ui.add_space(6.0);
                    ui.strong(&movie.title);
                    ui.colored_label(
                        self.palette.rating_accent,
                        format!("⭐ {}", movie.rating_label()),
                    );
                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        if ui.button("View Details").clicked() {
                            self.state.select(movie.id);
                        }
                        // The outbound link is its own widget with its own
                        // hit area; activating it cannot select the card.
                        if let Some(imdb_url) = &movie.imdb_url {
                            if ui.button("IMDb").clicked() {
                                self.open_external_link(imdb_url);
                            }
                        }
                    });
                });
            });
    }

    fn show_grid(&mut self, ctx: &egui::Context, movies: &[Movie]) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Movie Database");
            ui.add_space(8.0);
            self.show_controls(ui);
            ui.add_space(12.0);

            egui::ScrollArea::vertical()
                .id_salt("movie_grid_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
                        for movie in movies {
                            self.show_card(ui, movie);
                        }
                    });
                });
        });
    }

    fn show_empty_results(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Movie Database");
            ui.add_space(8.0);
            self.show_controls(ui);
            ui.add_space(24.0);
            ui.colored_label(
                self.palette.muted_text,
                "No movies found matching your search.",
            );
        });
    }

    fn show_detail(&mut self, ctx: &egui::Context, movie: &Movie) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if ui.button("← Back to Movies").clicked() {
                self.state.clear_selection();
            }
            ui.add_space(12.0);

            egui::ScrollArea::vertical()
                .id_salt("movie_detail_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.horizontal_top(|ui| {
                        let texture = self.poster_texture(ui.ctx(), movie);
                        ui.add(egui::Image::new(&texture).fit_to_exact_size(DETAIL_POSTER_SIZE));
                        ui.add_space(16.0);
                        ui.vertical(|ui| {
                            ui.heading(&movie.title);
                            ui.colored_label(
                                self.palette.rating_accent,
                                format!("⭐ {}", movie.rating_label()),
                            );
                            ui.add_space(8.0);
                            if let Some(imdb_url) = &movie.imdb_url {
                                if ui.button("View on IMDb").clicked() {
                                    self.open_external_link(imdb_url);
                                }
                            }
                        });
                    });
                });
        });
    }

    fn show_loading(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.4);
                ui.spinner();
                ui.add_space(8.0);
                ui.colored_label(self.palette.muted_text, "Loading movies...");
            });
        });
    }

    fn show_failed(&self, ctx: &egui::Context, message: &str) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.4);
                ui.colored_label(self.palette.error_text, message);
            });
        });
    }

    fn any_poster_loading(&self) -> bool {
        self.posters
            .values()
            .any(|state| matches!(state, PosterState::Loading))
    }
}

impl eframe::App for MovieGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        if !self.theme_applied {
            self.palette.apply(ctx);
            self.theme_applied = true;
        }

        if !self.status.is_empty() {
            let palette = self.palette;
            let status = self.status.clone();
            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                ui.colored_label(palette.muted_text, status);
            });
        }

        let plan = match presenter::plan(&self.state) {
            RenderPlan::Loading => FramePlan::Loading,
            RenderPlan::Failed { message } => FramePlan::Failed(message.to_string()),
            RenderPlan::Detail { movie } => FramePlan::Detail(movie.clone()),
            RenderPlan::EmptyResults => FramePlan::EmptyResults,
            RenderPlan::Grid { movies } => {
                FramePlan::Grid(movies.into_iter().cloned().collect())
            }
        };

        match plan {
            FramePlan::Loading => self.show_loading(ctx),
            FramePlan::Failed(message) => self.show_failed(ctx, &message),
            FramePlan::Detail(movie) => self.show_detail(ctx, &movie),
            FramePlan::EmptyResults => self.show_empty_results(ctx),
            FramePlan::Grid(movies) => self.show_grid(ctx, &movies),
        }

        // Poll for backend events while anything is still in flight.
        if self.state.load_status() == &LoadStatus::Loading || self.any_poster_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

fn placeholder_image() -> egui::ColorImage {
    const WIDTH: usize = 300;
    const HEIGHT: usize = 400;
    const BORDER: usize = 6;
    let mut rgba = vec![0u8; WIDTH * HEIGHT * 4];
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let on_border =
                x < BORDER || x >= WIDTH - BORDER || y < BORDER || y >= HEIGHT - BORDER;
            let (r, g, b) = if on_border { (66, 70, 84) } else { (44, 47, 57) };
            let offset = (y * WIDTH + x) * 4;
            rgba[offset..offset + 4].copy_from_slice(&[r, g, b, 255]);
        }
    }
    egui::ColorImage::from_rgba_unmultiplied([WIDTH, HEIGHT], &rgba)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_matches_card_aspect_ratio() {
        let image = placeholder_image();
        assert_eq!(image.size, [300, 400]);
        assert_eq!(image.pixels.len(), 300 * 400);
    }
}
