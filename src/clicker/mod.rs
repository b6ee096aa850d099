/// Idle clicker — click for score, buy passive income and timed bonuses.

pub mod actions;
pub mod bonus;
pub mod config;
pub mod logic;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::error::ClickerError;
use crate::input::{ClickState, InputEvent};

use config::ShopConfig;
use state::ClickerState;

pub struct ClickerGame {
    pub state: ClickerState,
}

impl ClickerGame {
    pub fn new(shop: &ShopConfig) -> Result<Self, ClickerError> {
        Ok(Self {
            state: ClickerState::new(shop)?,
        })
    }

    /// Route a key press or tapped control. Returns true if the event was consumed.
    ///
    /// Purchases the player cannot afford are still consumed: they just do nothing.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(c) => self.handle_key(*c),
            InputEvent::Click(id) => self.handle_click(*id),
        }
    }

    fn handle_key(&mut self, key: char) -> bool {
        match key {
            'c' | ' ' => self.handle_click(actions::CLICK),
            'x' => self.handle_click(actions::CLICK_SECONDARY),
            'p' => self.handle_click(actions::BUY_CLICK_POWER),
            'b' => self.handle_click(actions::BUY_BONUS),
            '1'..='9' => {
                let index = (key as u8 - b'1') as u16;
                self.handle_click(actions::BUY_UPGRADE_BASE + index)
            }
            _ => false,
        }
    }

    fn handle_click(&mut self, id: u16) -> bool {
        match id {
            actions::CLICK => logic::click(&mut self.state),
            actions::CLICK_SECONDARY => logic::click_secondary(&mut self.state),
            actions::BUY_CLICK_POWER => {
                logic::buy_click_power(&mut self.state);
            }
            actions::BUY_BONUS => {
                logic::buy_bonus(&mut self.state);
            }
            id if id >= actions::BUY_UPGRADE_BASE => {
                let index = (id - actions::BUY_UPGRADE_BASE) as usize;
                if index >= self.state.upgrades.len() {
                    return false;
                }
                logic::buy_upgrade(&mut self.state, index);
            }
            _ => return false,
        }
        true
    }

    /// One display refresh: advance the frame and settle bonuses.
    pub fn frame(&mut self) {
        logic::tick(&mut self.state);
    }

    /// `periods` elapsed passive-income timer periods.
    pub fn periods(&mut self, periods: u32) {
        logic::pay_income(&mut self.state, periods);
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }
}
