use std::collections::HashMap;
use std::time::{Duration, Instant};

use egui::{Color32, ColorImage, Key, RichText, TextureHandle, TextureOptions};

use flagdash_core::catalog::FlagCatalog;
use flagdash_core::clock::format_duration;
use flagdash_core::session::{Feedback, Session, SessionEvent};

/// Desktop window state: the session plus everything needed to render it.
pub struct FlagdashApp {
    session: Session,
    catalog: FlagCatalog,
    /// Uploaded flag textures, keyed by country name.
    textures: HashMap<String, TextureHandle>,
    guess_input: String,
    /// Country whose flag is on screen; `None` once the game is over.
    shown_country: Option<String>,
    feedback: Feedback,
    score: u32,
    clock_text: String,
    game_over: bool,
}

impl FlagdashApp {
    pub fn new(catalog: FlagCatalog, mut session: Session) -> Self {
        let events = session.start_new_question(Instant::now());
        let mut app = Self {
            session,
            catalog,
            textures: HashMap::new(),
            guess_input: String::new(),
            shown_country: None,
            feedback: Feedback::Cleared,
            score: 0,
            clock_text: format_duration(Duration::ZERO),
            game_over: false,
        };
        app.apply_events(events);
        app
    }

    /// Fold the controller's display commands into the render state.
    fn apply_events(&mut self, events: Vec<SessionEvent>) {
        for event in events {
            match event {
                SessionEvent::ShowFlag { country } => {
                    self.shown_country = Some(country);
                },
                SessionEvent::ShowGameOver => {
                    self.shown_country = None;
                    self.game_over = true;
                },
                SessionEvent::Feedback { feedback } => self.feedback = feedback,
                SessionEvent::ScoreChanged { score } => self.score = score,
                SessionEvent::ClockUpdated { total } => {
                    self.clock_text = format_duration(total);
                },
            }
        }
    }

    /// Upload the country's flag pixels into an egui texture on first use.
    /// Returns `None` for unresolved flags, which render as a blank area.
    fn flag_texture(&mut self, ctx: &egui::Context, country: &str) -> Option<TextureHandle> {
        if let Some(texture) = self.textures.get(country) {
            return Some(texture.clone());
        }
        let image = self.catalog.image(country)?;
        let pixels = ColorImage::from_rgba_unmultiplied(
            [image.width as usize, image.height as usize],
            &image.rgba,
        );
        let texture = ctx.load_texture(country.to_string(), pixels, TextureOptions::LINEAR);
        self.textures.insert(country.to_string(), texture.clone());
        Some(texture)
    }

    fn submit(&mut self) {
        let raw = std::mem::take(&mut self.guess_input);
        let events = self.session.submit_guess(&raw, Instant::now());
        self.apply_events(events);
    }

    fn feedback_label(&self) -> Option<RichText> {
        match self.feedback {
            Feedback::Cleared => None,
            Feedback::Correct => Some(RichText::new("Correct!").color(Color32::GREEN)),
            Feedback::Incorrect => {
                Some(RichText::new("Incorrect, try again.").color(Color32::RED))
            },
        }
    }
}

impl eframe::App for FlagdashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Periodic clock refresh; stops rescheduling once the session is
        // terminal and tick() goes quiet.
        if let Some(event) = self.session.tick(Instant::now()) {
            self.apply_events(vec![event]);
            ctx.request_repaint_after(Duration::from_secs(1));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);

                if self.game_over {
                    ui.heading("Game Over!");
                } else if let Some(country) = self.shown_country.clone() {
                    match self.flag_texture(ctx, &country) {
                        Some(texture) => {
                            ui.image((texture.id(), texture.size_vec2()));
                        },
                        None => {
                            // Unresolved flag: same question, blank image area.
                            ui.add_space(120.0);
                        },
                    }
                }

                ui.add_space(12.0);
                let input = ui.add_enabled(
                    !self.game_over,
                    egui::TextEdit::singleline(&mut self.guess_input)
                        .hint_text("Country name")
                        .desired_width(260.0),
                );
                if input.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    self.submit();
                    input.request_focus();
                }

                ui.add_space(8.0);
                if let Some(text) = self.feedback_label() {
                    ui.label(text);
                }

                ui.add_space(8.0);
                ui.label(format!("Score: {}", self.score));
                ui.label(format!("Time: {}", self.clock_text));
            });
        });
    }
}
