mod clicker;
mod error;
mod input;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use clicker::actions::CLICK;
use clicker::config::ShopConfig;
use clicker::ClickerGame;
use input::{ClickState, InputEvent};
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect, Size};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::{Frame, Terminal};
use ratzilla::{DomBackend, WebRenderer};
use time::PeriodClock;

/// Query the grid container's bounding rect and convert pixel coordinates to a cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    cs.cell_at(
        mouse_x as f64 - rect.left(),
        mouse_y as f64 - rect.top(),
        rect.width(),
        rect.height(),
    )
}

/// Milliseconds from the page's monotonic clock, or wall-clock time without one.
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Browser console output. Native builds (tests included) stay silent.
#[cfg(target_arch = "wasm32")]
fn console_log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
fn console_warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn console_log(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
fn console_warn(_msg: &str) {}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let shop = ShopConfig::bundled().map_err(|e| {
        console_warn(&format!("idle-clicker: shop rejected: {e}"));
        io::Error::new(io::ErrorKind::InvalidData, e)
    })?;
    let game = ClickerGame::new(&shop).map_err(|e| {
        console_warn(&format!("idle-clicker: setup failed: {e}"));
        io::Error::new(io::ErrorKind::InvalidData, e)
    })?;
    console_log(&format!(
        "idle-clicker: {} upgrades, {} income period(s)/s",
        shop.upgrades.len(),
        shop.update_speed
    ));

    let game = Rc::new(RefCell::new(game));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let clock = Rc::new(RefCell::new(PeriodClock::new(shop.update_speed)));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let game = game.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let cs = click_state.borrow();
            let action = dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs)
                .and_then(|(col, row)| cs.hit_test(col, row));
            drop(cs);

            if let Some(id) = action {
                game.borrow_mut().handle_input(&InputEvent::Click(id));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let game = game.clone();
        move |key_event| {
            if let KeyCode::Char(c) = key_event.code {
                game.borrow_mut().handle_input(&InputEvent::Key(c.to_ascii_lowercase()));
            }
        }
    });

    // Each draw is one tick: advance the frame, pay elapsed income, then redraw.
    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let mut g = game.borrow_mut();
            g.frame();
            let periods = clock.borrow_mut().update(now_ms());
            g.periods(periods);
            drop(g);

            let g = game.borrow();
            let size = f.area();
            click_state
                .borrow_mut()
                .begin_frame(Size::new(size.width, size.height));

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(10),
                    Constraint::Length(3),
                ])
                .split(size);

            render_title(f, chunks[0]);
            g.render(f, chunks[1], &click_state);
            render_help(f, chunks[2], &click_state);
        }
    });

    Ok(())
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Idle Clicker",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(title, area);
}

fn render_help(f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let help = Paragraph::new(Line::from(Span::styled(
        "Tap here or press C to click",
        Style::default().fg(Color::DarkGray),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(help, area);

    // The whole help bar is a click button.
    click_state.borrow_mut().add_click_target(area, CLICK);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_output_is_silent_off_wasm() {
        // Reaching web_sys here would panic: wasm-bindgen imports are absent natively.
        console_log("idle-clicker: log");
        console_warn("idle-clicker: warn");
    }
}
