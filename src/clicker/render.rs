//! Clicker rendering: score, income, shop with prices, active bonuses, log.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::ClickableList;

use super::actions::{BUY_BONUS, BUY_CLICK_POWER, BUY_UPGRADE_BASE, CLICK, CLICK_SECONDARY};
use super::logic::{format_number, rate_text, score_text};
use super::state::{ClickerState, BONUS_COST, SECONDARY_CLICK_AMOUNT};

/// Upgrades beyond this index have no number key and are tap-only.
const MAX_KEYED_UPGRADES: usize = 9;

pub fn render(state: &ClickerState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let narrow = is_narrow_layout(area.width);

    let (main_area, log_area) = if narrow {
        (area, None)
    } else {
        let h_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);
        (h_chunks[0], Some(h_chunks[1]))
    };

    let bonus_height = (state.active_bonuses.len() as u16).clamp(1, 5) + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(bonus_height),
            Constraint::Min(5),
        ])
        .split(main_area);

    render_score(state, f, chunks[0], click_state);
    render_bonuses(state, f, chunks[1]);
    render_shop(state, f, chunks[2], click_state, narrow);

    if let Some(log_area) = log_area {
        render_log(state, f, log_area);
    }
}

fn render_score(state: &ClickerState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(
        score_text(state),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(vec![
        Span::styled("Income ", Style::default().fg(Color::DarkGray)),
        Span::styled(rate_text(state), Style::default().fg(Color::Green)),
        Span::styled("  Clicks ", Style::default().fg(Color::DarkGray)),
        Span::styled(format_number(state.total_clicks), Style::default().fg(Color::White)),
    ]));
    cl.push_clickable(
        Line::from(vec![
            Span::styled(" [C] ", key_style()),
            Span::styled(
                format!("Click +{}", format_number(state.click_power)),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        CLICK,
    );
    cl.push_clickable(
        Line::from(vec![
            Span::styled(" [X] ", key_style()),
            Span::styled(
                format!("Click +{}", SECONDARY_CLICK_AMOUNT),
                Style::default().fg(Color::White),
            ),
        ]),
        CLICK_SECONDARY,
    );

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1, 0);
    drop(cs);

    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Clicker "),
    );
    f.render_widget(widget, area);
}

fn render_bonuses(state: &ClickerState, f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = if state.active_bonuses.is_empty() {
        vec![Line::from(Span::styled(
            " (no active bonus)",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        state
            .active_bonuses
            .iter()
            .map(|b| {
                Line::from(vec![
                    Span::styled(
                        format!(" +{} ", format_number(b.value())),
                        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("x{} left, next in {}f", b.remaining(), b.frames_until_next(state.frame)),
                        Style::default().fg(Color::Gray),
                    ),
                ])
            })
            .collect()
    };

    let title = format!(
        " Bonuses ({}) +{} pending ",
        state.active_bonuses.len(),
        format_number(state.pending_bonus_score())
    );
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(title),
    );
    f.render_widget(widget, area);
}

fn render_shop(
    state: &ClickerState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
    narrow: bool,
) {
    let mut cl = ClickableList::new();

    let power_cost = state.click_power_cost();
    cl.push_clickable(
        shop_line(
            " [P] ",
            format!("Click power x2 ({} → {})", state.click_power, state.click_power.saturating_mul(2)),
            power_cost,
            state.score >= power_cost,
        ),
        BUY_CLICK_POWER,
    );

    let offer = &state.bonus_offer;
    cl.push_clickable(
        shop_line(
            " [B] ",
            format!("Bonus +{} x{} / {}f", offer.value(), offer.remaining(), offer.interval()),
            BONUS_COST,
            state.score >= BONUS_COST,
        ),
        BUY_BONUS,
    );

    for (i, upgrade) in state.upgrades.iter().enumerate() {
        let key = if i < MAX_KEYED_UPGRADES {
            format!(" [{}] ", i + 1)
        } else {
            "     ".to_string()
        };
        let cost = upgrade.cost();
        let label = if upgrade.purchased == 0 {
            format!("{} +{}/s", upgrade.name, format_number(upgrade.rate))
        } else {
            format!(
                "{} +{}/s (own {}, {}/s)",
                upgrade.name,
                format_number(upgrade.rate),
                upgrade.purchased,
                format_number(upgrade.total_rate())
            )
        };
        cl.push_clickable(
            shop_line(&key, label, cost, state.score >= cost),
            BUY_UPGRADE_BASE + i as u16,
        );
    }

    let inner_width = if narrow { area.width.saturating_sub(2) } else { 0 };
    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1, inner_width);
    drop(cs);

    let mut widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Shop (tap to buy) "),
    );
    if narrow {
        widget = widget.wrap(Wrap { trim: false });
    }
    f.render_widget(widget, area);
}

fn shop_line(key: &str, label: String, cost: u64, affordable: bool) -> Line<'static> {
    let (label_style, cost_style) = if affordable {
        (Style::default().fg(Color::White), Style::default().fg(Color::Green))
    } else {
        (Style::default().fg(Color::DarkGray), Style::default().fg(Color::Red))
    };
    Line::from(vec![
        Span::styled(key.to_string(), key_style()),
        Span::styled(label, label_style),
        Span::styled(format!("  {}", format_number(cost)), cost_style),
    ])
}

fn key_style() -> Style {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}

fn render_log(state: &ClickerState, f: &mut Frame, area: Rect) {
    let visible_height = area.height.saturating_sub(2) as usize;
    let start = state.log.len().saturating_sub(visible_height);

    let lines: Vec<Line> = state.log[start..]
        .iter()
        .map(|entry| {
            let style = if entry.is_important {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(entry.text.as_str(), style))
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title(" Log "),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
