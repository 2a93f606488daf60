use crate::audio::BackgroundMusic;
use crate::config::PageConfig;
use crate::constants::*;
use crate::model::{AmbientStream, ClickThrottle, ModalState, MusicState, NavMenu, RevealTracker};
use crate::timers::{Interval, Scheduler};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use web_sys as web;

/// Page markup hooks. Every one is optional; a missing hook disables only the
/// behavior that needs it.
pub struct PageElements {
    pub nav_toggle: Option<web::Element>,
    pub nav_links: Option<web::Element>,
    pub music_toggle: Option<web::Element>,
    pub music_label: Option<web::Element>,
    pub bg_hearts: Option<web::Element>,
    pub surprise_button: Option<web::Element>,
}

impl PageElements {
    pub fn lookup(document: &web::Document) -> Self {
        let find = |id: &'static str| {
            let el = document.get_element_by_id(id);
            if el.is_none() {
                log::debug!("[init] #{} not present", id);
            }
            el
        };
        Self {
            nav_toggle: find(NAV_TOGGLE_ID),
            nav_links: find(NAV_LINKS_ID),
            music_toggle: find(MUSIC_TOGGLE_ID),
            music_label: find(MUSIC_LABEL_ID),
            bg_hearts: find(BG_HEARTS_ID),
            surprise_button: find(SURPRISE_BUTTON_ID),
        }
    }
}

/// The injected surprise dialog and the parts handlers need.
pub struct ModalElements {
    pub root: web::Element,
    pub panel: Option<web::Element>,
    pub close: Option<web::Element>,
}

/// Everything the page behaviors share: DOM hooks, per-behavior state and
/// the timers owned on the page's behalf. Shared as `Rc<PageContext>`;
/// `RefCell` borrows never span an await point.
pub struct PageContext {
    pub window: web::Window,
    pub document: web::Document,
    pub config: PageConfig,
    pub elements: PageElements,
    pub modal_elements: RefCell<Option<ModalElements>>,

    pub nav: RefCell<NavMenu>,
    pub music: RefCell<MusicState>,
    pub audio: Option<BackgroundMusic>,
    pub reveal: RefCell<RevealTracker>,
    pub modal: RefCell<ModalState>,
    pub click_throttle: RefCell<ClickThrottle>,
    pub ambient: RefCell<AmbientStream>,
    pub ambient_interval: RefCell<Option<Interval>>,
    pub scheduler: Scheduler,
    pub rng: RefCell<StdRng>,
}

impl PageContext {
    pub fn new(window: web::Window, document: web::Document, config: PageConfig) -> Self {
        let elements = PageElements::lookup(&document);
        let audio = if config.has_music() {
            match BackgroundMusic::new(&config.music_src) {
                Ok(a) => Some(a),
                Err(e) => {
                    log::warn!("[music] audio element unavailable: {}", e);
                    None
                }
            }
        } else {
            None
        };
        let music = MusicState::new(audio.is_some());
        Self {
            scheduler: Scheduler::new(window.clone()),
            window,
            document,
            config,
            elements,
            modal_elements: RefCell::new(None),
            nav: RefCell::new(NavMenu::default()),
            music: RefCell::new(music),
            audio,
            reveal: RefCell::new(RevealTracker::default()),
            modal: RefCell::new(ModalState::default()),
            click_throttle: RefCell::new(ClickThrottle::default()),
            ambient: RefCell::new(AmbientStream::default()),
            ambient_interval: RefCell::new(None),
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    /// Close the mobile panel if it is open and sync the toggle's ARIA state.
    pub fn close_nav(&self) {
        let closed = self.nav.borrow_mut().close();
        if closed {
            self.sync_nav();
        }
    }

    pub fn sync_nav(&self) {
        let (Some(toggle), Some(links)) = (&self.elements.nav_toggle, &self.elements.nav_links)
        else {
            return;
        };
        let nav = *self.nav.borrow();
        if nav.is_open() {
            _ = links.class_list().add_1(CLASS_OPEN);
        } else {
            _ = links.class_list().remove_1(CLASS_OPEN);
        }
        _ = toggle.set_attribute("aria-expanded", nav.aria_expanded());
    }

    pub fn sync_music_ui(&self) {
        let Some(toggle) = &self.elements.music_toggle else {
            return;
        };
        let music = self.music.borrow();
        _ = toggle.set_attribute("aria-pressed", music.aria_pressed());
        if let Some(label) = &self.elements.music_label {
            label.set_text_content(Some(music.label()));
        }
    }

    /// Stop everything that would outlive the page: the ambient interval,
    /// pending node removals and playing audio.
    pub fn teardown(&self) {
        self.ambient.borrow_mut().stop();
        let interval = self.ambient_interval.borrow_mut().take();
        drop(interval);
        let cancelled = self.scheduler.cancel_all();
        if let Some(audio) = &self.audio {
            audio.pause();
        }
        self.music.borrow_mut().paused();
        log::info!("[lifecycle] teardown: cancelled {} pending removals", cancelled);
    }
}
