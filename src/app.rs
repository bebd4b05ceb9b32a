use crate::controller::SlideshowController;
use crate::deck::Deck;
use crate::image_loading::{spawn_decode, LoaderMessage};
use crate::navigator::SidebarNav;
use crate::settings::Settings;

use eframe::egui::{self, TextureHandle};
use image::DynamicImage;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

pub struct VitrineApp {
    // Settings
    pub settings: Settings,

    // Deck and widget state
    pub deck: Option<Deck>,
    pub controller: SlideshowController,
    pub nav: SidebarNav,
    pub deck_error: Option<String>,
    deck_generation: u64,

    // Slide textures, keyed by slide index
    pub slide_textures: HashMap<usize, TextureHandle>,
    pub failed_loads: HashSet<usize>,
    pending_loads: HashSet<usize>,

    // Async loading
    loader_tx: Sender<LoaderMessage>,
    loader_rx: Receiver<LoaderMessage>,

    // Hover state of the slideshow region, written back by the view
    // each frame and applied to the controller on the next
    pub slideshow_hovered: bool,

    // Context for repaint requests from decode threads
    ctx: Option<egui::Context>,
}

impl VitrineApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = Settings::load();
        let (tx, rx) = channel();

        let mut app = Self {
            controller: SlideshowController::new(
                Vec::new(),
                settings.autoplay_interval,
                settings.typing_interval,
            ),
            nav: SidebarNav::new(settings.show_sidebar),
            settings,
            deck: None,
            deck_error: None,
            deck_generation: 0,
            slide_textures: HashMap::new(),
            failed_loads: HashSet::new(),
            pending_loads: HashSet::new(),
            loader_tx: tx,
            loader_rx: rx,
            slideshow_hovered: false,
            ctx: Some(cc.egui_ctx.clone()),
        };

        // Deck from the command line, otherwise the previous session's
        let args: Vec<String> = std::env::args().collect();
        if args.len() > 1 {
            app.open_deck(PathBuf::from(&args[1]));
        } else if app.settings.restore_session {
            if let Some(last) = app.settings.last_deck.clone() {
                app.open_deck(last);
            }
        }

        app
    }

    pub fn open_deck(&mut self, path: PathBuf) {
        match Deck::load(&path) {
            Ok(deck) => {
                log::info!("Loaded deck '{}' with {} slides", deck.title(), deck.slides.len());
                self.deck_generation += 1;
                self.controller = SlideshowController::new(
                    deck.captions(),
                    self.settings.autoplay_interval,
                    self.settings.typing_interval,
                );
                self.nav = SidebarNav::new(self.settings.show_sidebar);
                self.slide_textures.clear();
                self.pending_loads.clear();
                self.failed_loads.clear();
                self.deck_error = None;
                self.settings.last_deck = Some(path);
                self.deck = Some(deck);
            }
            Err(e) => {
                log::error!("{e}");
                self.deck_error = Some(e.to_string());
            }
        }
    }

    // File dialogs
    pub fn open_folder_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new().pick_folder() {
            self.open_deck(path);
        }
    }

    pub fn open_manifest_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Deck manifest", &["json"])
            .pick_file()
        {
            self.open_deck(path);
        }
    }

    /// Kicks off a background decode for `index` unless its texture is
    /// ready, a decode is already in flight, or a previous decode
    /// failed (failed slides are logged once and never retried).
    fn request_slide(&mut self, index: usize) {
        if self.slide_textures.contains_key(&index)
            || self.pending_loads.contains(&index)
            || self.failed_loads.contains(&index)
        {
            return;
        }

        let (path, ctx) = match (&self.deck, &self.ctx) {
            (Some(deck), Some(ctx)) => match deck.slides.get(index) {
                Some(slide) => (slide.image.clone(), ctx.clone()),
                None => return,
            },
            _ => return,
        };

        self.pending_loads.insert(index);
        spawn_decode(
            self.deck_generation,
            index,
            path,
            self.loader_tx.clone(),
            ctx,
        );
    }

    /// Lazy loading: the active slide plus its two neighbors.
    fn preload_around(&mut self, index: usize) {
        let count = self.controller.slide_count();
        if count == 0 {
            return;
        }

        self.request_slide(index);
        if count > 1 {
            self.request_slide((index + 1) % count);
            self.request_slide((index + count - 1) % count);
        }
    }

    fn insert_slide_texture(&mut self, index: usize, image: DynamicImage, ctx: &egui::Context) {
        let size = [image.width() as usize, image.height() as usize];
        let rgba = image.to_rgba8();
        let pixels = rgba.as_flat_samples();

        let texture = ctx.load_texture(
            format!("slide_{index}"),
            egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_slice()),
            egui::TextureOptions::LINEAR,
        );

        self.slide_textures.insert(index, texture);
    }

    fn process_loader_messages(&mut self, ctx: &egui::Context) {
        while let Ok(msg) = self.loader_rx.try_recv() {
            match msg {
                LoaderMessage::SlideLoaded {
                    generation,
                    index,
                    image,
                } => {
                    if generation != self.deck_generation {
                        continue;
                    }
                    self.pending_loads.remove(&index);
                    self.insert_slide_texture(index, image, ctx);
                }
                LoaderMessage::LoadError {
                    generation,
                    index,
                    message,
                } => {
                    if generation != self.deck_generation {
                        continue;
                    }
                    // One line per failure; navigation is unaffected
                    log::error!("{message}");
                    self.pending_loads.remove(&index);
                    self.failed_loads.insert(index);
                }
            }
        }
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            // Navigation
            if i.key_pressed(egui::Key::ArrowLeft) {
                self.controller.advance(-1);
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                self.controller.advance(1);
            }

            // Autoplay
            if i.key_pressed(egui::Key::Space) {
                self.controller.toggle_autoplay();
            }

            // Sidebar
            if i.key_pressed(egui::Key::S) && !i.modifiers.ctrl {
                self.nav.toggle();
                self.settings.show_sidebar = self.nav.is_open();
            }
        });
    }
}

impl eframe::App for VitrineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ctx = Some(ctx.clone());

        // Process async messages
        self.process_loader_messages(ctx);

        // Handle keyboard input
        self.handle_keyboard(ctx);

        // Keep the controller in sync with settings edited in the
        // toolbar and with last frame's hover state
        self.controller
            .set_intervals(self.settings.autoplay_interval, self.settings.typing_interval);
        self.controller.set_hovered(self.slideshow_hovered);

        // Advance timers
        let dt = ctx.input(|i| i.stable_dt);
        let controller_changed = self.controller.tick(dt);
        let ripple_playing = self.nav.tick(dt);

        if controller_changed
            || ripple_playing
            || self.controller.autoplay_running()
            || self.controller.is_typing()
        {
            ctx.request_repaint();
        }

        if self.deck.is_some() {
            self.preload_around(self.controller.active_index());
        }

        // Apply theme
        crate::ui::theme::apply_theme(ctx, &self.settings);

        // Render UI
        self.render_toolbar(ctx);
        self.render_sidebar(ctx);
        self.render_slideshow(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.settings.save();
    }
}
