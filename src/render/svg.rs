//! Static SVG card rendering.
//!
//! The card is plain markup: bricks with `<title>` tooltips, CSS-only hover,
//! no embedded script.

use crate::layout::Grid;
use crate::render::theme::Theme;

const WIDTH: u32 = 728;
const HEIGHT: u32 = 315;
const PADDING: u32 = 20;
const BRICK_SIZE: u32 = 10;
const BRICK_SPACING: u32 = 2;
const GRID_ORIGIN_X: u32 = PADDING + 15;
const GRID_ORIGIN_Y: u32 = 70;
const PADDLE_WIDTH: u32 = 60;
const PADDLE_HEIGHT: u32 = 8;

/// Render one breakout card for the given theme.
pub fn render_card(username: &str, grid: &Grid<'_>, theme: &Theme) -> String {
    let username = xml_escape(username);
    let center_x = WIDTH / 2;
    let area_width = WIDTH - 2 * PADDING;
    let area_height = HEIGHT - 75;
    let paddle_x = (WIDTH - PADDLE_WIDTH) / 2;
    let paddle_y = HEIGHT - 40;
    let ball_cx = paddle_x + PADDLE_WIDTH / 2;
    let ball_cy = paddle_y - 15;

    let mut svg = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{WIDTH}" height="{HEIGHT}" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}">
  <defs>
    <style>
      .title {{
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
        font-size: 16px;
        font-weight: 600;
        fill: {text};
      }}
      .subtitle {{
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
        font-size: 12px;
        fill: {text};
        opacity: 0.7;
      }}
      .brick {{
        stroke: {bg};
        stroke-width: 1;
        transition: opacity 0.2s ease;
      }}
      .brick:hover {{
        opacity: 0.8;
      }}
      .paddle {{
        fill: {paddle};
        rx: 4;
        filter: drop-shadow(0 2px 4px rgba(0,0,0,0.1));
      }}
      .ball {{
        fill: {ball};
        filter: drop-shadow(0 1px 2px rgba(0,0,0,0.2));
      }}
      .game-area {{
        stroke: {border};
        stroke-width: 2;
        fill: none;
        opacity: 0.3;
        rx: 8;
      }}
      .score {{
        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
        font-size: 11px;
        fill: {text};
        opacity: 0.6;
      }}
    </style>
  </defs>

  <rect width="100%" height="100%" fill="{bg}" rx="12"/>

  <!-- Title -->
  <text x="{center_x}" y="25" text-anchor="middle" class="title">GitHub Breakout - @{username}</text>
  <text x="{center_x}" y="45" text-anchor="middle" class="subtitle">One brick per day of contributions over the last year</text>

  <!-- Game Area Border -->
  <rect x="{PADDING}" y="55" width="{area_width}" height="{area_height}" class="game-area"/>

  <!-- Contribution Bricks -->"#,
        text = theme.text,
        bg = theme.bg,
        paddle = theme.paddle,
        ball = theme.ball,
        border = theme.border,
    );

    for (week, day, record) in grid.bricks() {
        let x = GRID_ORIGIN_X + week as u32 * (BRICK_SIZE + BRICK_SPACING);
        let y = GRID_ORIGIN_Y + day as u32 * (BRICK_SIZE + BRICK_SPACING);
        let color = theme.brick_color(record.level);
        svg.push_str(&format!(
            r#"
  <rect x="{x}" y="{y}" width="{BRICK_SIZE}" height="{BRICK_SIZE}" fill="{color}" class="brick">
    <title>{date}: {count} contributions</title>
  </rect>"#,
            date = record.date,
            count = record.count,
        ));
    }

    svg.push_str(&format!(
        r#"

  <!-- Paddle -->
  <rect x="{paddle_x}" y="{paddle_y}" width="{PADDLE_WIDTH}" height="{PADDLE_HEIGHT}" class="paddle"/>

  <!-- Ball -->
  <circle cx="{ball_cx}" cy="{ball_cy}" r="4" class="ball"/>

  <!-- Score Info -->
  <text x="{score_left}" y="{score_y}" class="score">{total} contributions</text>
  <text x="{score_right}" y="{score_y}" text-anchor="end" class="score">{active} active days</text>

  <!-- Instructions -->
  <text x="{center_x}" y="{footer_y}" text-anchor="middle" class="subtitle">Break the bricks with your contribution history</text>

</svg>"#,
        score_left = PADDING + 10,
        score_right = WIDTH - PADDING - 10,
        score_y = HEIGHT - 15,
        footer_y = HEIGHT - 5,
        total = grid.total_contributions(),
        active = grid.active_days(),
    ));

    svg
}

/// Escape text destined for SVG attribute or element content.
fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
