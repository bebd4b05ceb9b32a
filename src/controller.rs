use crate::timing::Repeat;

/// Reveals a caption one character at a time. Starting a new caption
/// fully resets the previous run; two captions never interleave.
#[derive(Debug)]
pub struct Typewriter {
    full: String,
    shown: usize, // characters revealed so far
    timer: Repeat,
}

impl Typewriter {
    pub fn new(interval: f32) -> Self {
        Self {
            full: String::new(),
            shown: 0,
            timer: Repeat::new(interval),
        }
    }

    pub fn start(&mut self, text: String) {
        self.full = text;
        self.shown = 0;
        self.timer.restart();
    }

    pub fn set_interval(&mut self, interval: f32) {
        self.timer.set_period(interval);
    }

    pub fn tick(&mut self, dt: f32) -> bool {
        if self.shown >= self.full.chars().count() {
            self.timer.cancel();
            return false;
        }

        if self.timer.tick(dt) {
            self.shown += 1;
            true
        } else {
            false
        }
    }

    /// The revealed prefix of the caption.
    pub fn visible_text(&self) -> &str {
        let end = self
            .full
            .char_indices()
            .nth(self.shown)
            .map(|(i, _)| i)
            .unwrap_or(self.full.len());
        &self.full[..end]
    }

    pub fn is_typing(&self) -> bool {
        self.shown < self.full.chars().count()
    }
}

/// Slideshow state: the active index, the autoplay timer and the
/// caption typewriter. No rendering types anywhere in here; the UI
/// layer reads this state every frame and feeds input events in.
#[derive(Debug)]
pub struct SlideshowController {
    active: usize,
    count: usize,
    captions: Vec<String>,
    autoplay: Repeat,
    typist: Typewriter,
    hovered: bool,
}

impl SlideshowController {
    /// Selects the first slide and starts autoplay. An empty caption
    /// list yields an inert controller.
    pub fn new(captions: Vec<String>, autoplay_interval: f32, typing_interval: f32) -> Self {
        let count = captions.len();
        let mut controller = Self {
            active: 0,
            count,
            captions,
            autoplay: Repeat::new(autoplay_interval),
            typist: Typewriter::new(typing_interval),
            hovered: false,
        };
        controller.set_active_slide(0);
        if count > 0 {
            controller.autoplay.restart();
        }
        controller
    }

    /// Jumps straight to `index`. Out-of-range indices are ignored and
    /// leave the current slide untouched.
    pub fn set_active_slide(&mut self, index: usize) {
        if index >= self.count {
            return;
        }

        self.active = index;
        self.typist.start(self.captions[index].clone());
    }

    /// Steps by `delta` slides, wrapping in both directions, then
    /// grants autoplay a fresh full interval.
    pub fn advance(&mut self, delta: isize) {
        if self.count == 0 {
            return;
        }

        let target = (self.active as isize + delta).rem_euclid(self.count as isize) as usize;
        self.set_active_slide(target);
        self.restart_autoplay();
    }

    pub fn restart_autoplay(&mut self) {
        self.autoplay.restart();
    }

    pub fn toggle_autoplay(&mut self) {
        if self.autoplay.is_running() {
            self.autoplay.cancel();
        } else {
            self.autoplay.restart();
        }
    }

    /// Pointer entering the slideshow region cancels autoplay; leaving
    /// restarts it with a full interval ahead.
    pub fn set_hovered(&mut self, hovered: bool) {
        if hovered == self.hovered {
            return;
        }

        self.hovered = hovered;
        if hovered {
            self.autoplay.cancel();
        } else {
            self.autoplay.restart();
        }
    }

    pub fn set_intervals(&mut self, autoplay: f32, typing: f32) {
        self.autoplay.set_period(autoplay);
        self.typist.set_interval(typing);
    }

    /// Advances both timers. Returns true when the visible state
    /// changed (slide advanced or a caption character appeared).
    pub fn tick(&mut self, dt: f32) -> bool {
        let mut changed = false;

        if self.autoplay.tick(dt) {
            self.advance(1);
            changed = true;
        }
        if self.typist.tick(dt) {
            changed = true;
        }

        changed
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn slide_count(&self) -> usize {
        self.count
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.count > 0 && index == self.active
    }

    pub fn caption(&self) -> &str {
        self.typist.visible_text()
    }

    pub fn is_typing(&self) -> bool {
        self.typist.is_typing()
    }

    pub fn autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }
}
