//! Page flow (landing -> gallery -> closing -> landing) and one-shot gallery
//! reveals.
//!
//! The physics core only cares about one thing here: whether the landing
//! page is visible. `PageFlow` reports that as pause/resume signals.

use serde::Serialize;

use crate::core::SimError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Landing,
    Gallery,
    Closing,
}

impl Page {
    pub fn name(self) -> &'static str {
        match self {
            Page::Landing => "landing",
            Page::Gallery => "gallery",
            Page::Closing => "closing",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "landing" => Some(Page::Landing),
            "gallery" => Some(Page::Gallery),
            "closing" => Some(Page::Closing),
            _ => None,
        }
    }

    /// Pages advance in a cycle; the closing page can start over.
    fn next(self) -> Option<Self> {
        match self {
            Page::Landing => Some(Page::Gallery),
            Page::Gallery => Some(Page::Closing),
            Page::Closing => Some(Page::Landing),
        }
    }
}

/// What the simulation should do after a page event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hide,
    Show,
    Unchanged,
}

pub struct PageFlow {
    active: Option<Page>,
    pending: Option<(Page, f64)>,
    delay_ms: f64,
}

impl PageFlow {
    pub fn new(delay_ms: f64) -> Self {
        Self { active: Some(Page::Landing), pending: None, delay_ms }
    }

    /// Applies to switches made from now on; a pending page keeps its due time.
    pub fn set_delay(&mut self, delay_ms: f64) {
        self.delay_ms = delay_ms;
    }

    /// Currently visible page; `None` during the gap between two pages.
    pub fn active(&self) -> Option<Page> {
        self.active
    }

    /// Deactivate `from` now and schedule `to` after the switch delay.
    pub fn switch(&mut self, from: Page, to: Page, now_ms: f64) -> Result<Visibility, SimError> {
        if self.active != Some(from) || from.next() != Some(to) {
            return Err(SimError::InvalidTransition { from: from.name(), to: to.name() });
        }
        self.active = None;
        self.pending = Some((to, now_ms + self.delay_ms));
        Ok(if from == Page::Landing { Visibility::Hide } else { Visibility::Unchanged })
    }

    /// Activate a scheduled page once its delay has elapsed.
    pub fn tick(&mut self, now_ms: f64) -> Visibility {
        match self.pending {
            Some((page, due)) if now_ms >= due => {
                self.pending = None;
                self.active = Some(page);
                if page == Page::Landing { Visibility::Show } else { Visibility::Unchanged }
            }
            _ => Visibility::Unchanged,
        }
    }
}

/// Gallery cards flip to `revealed` once and stay there.
pub struct RevealBoard {
    revealed: Vec<bool>,
}

impl RevealBoard {
    pub fn new(cards: usize) -> Self {
        Self { revealed: vec![false; cards] }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// Returns `true` only for the first reveal of an existing card.
    pub fn reveal(&mut self, card: usize) -> bool {
        match self.revealed.get_mut(card) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, card: usize) -> bool {
        self.revealed.get(card).copied().unwrap_or(false)
    }
}

/// Initial dash array/offset that hides a stroke of the given path length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeDash {
    pub dash_array: f32,
    pub dash_offset: f32,
}

pub fn stroke_dash(length: f32) -> StrokeDash {
    let len = if length.is_finite() { length.max(0.0) } else { 0.0 };
    StrokeDash { dash_array: len, dash_offset: len }
}
