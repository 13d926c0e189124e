//! `Model` trait implementation for the review dashboard.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::DashboardApp;
use crate::tui::input::map_key_to_message_with_context;
use crate::tui::messages::AppMsg;

impl Model for DashboardApp {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Self::new(crate::tui::initial_state());
        if let Some(runner) = crate::tui::effect_runner() {
            model = model.with_runner(runner);
        }

        // Render immediately; the first load starts when `Initialized` is
        // handled.
        let cmd: Cmd =
            Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) });

        (model, Some(cmd))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let mapped = map_key_to_message_with_context(key_msg, self.input_context());
            return mapped.and_then(|app_msg| self.handle_message(&app_msg));
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_format_bar());
        output.push('\n');

        let body = self.render_body();
        let body_rows = body.lines().count();
        output.push_str(&body);
        let padding = self.body_height().saturating_sub(body_rows);
        output.push_str(&"\n".repeat(padding));

        output.push_str(&self.render_status_bar());
        self.normalise_viewport(&output)
    }
}

impl DashboardApp {
    /// Clamps every row to the terminal size.
    ///
    /// Rows stop one column short of the width to avoid autowrap and are
    /// padded with spaces to clear stale cells after a resize.
    fn normalise_viewport(&self, output: &str) -> String {
        let width = self.width.max(1) as usize;
        let safe_width = width.saturating_sub(1).max(1);
        let height = self.height.max(1) as usize;

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_or_truncate_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

fn pad_or_truncate_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut visible_width = 0_usize;

    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if char_width == 0 {
            continue;
        }
        if visible_width.saturating_add(char_width) > width {
            break;
        }
        output.push(ch);
        visible_width = visible_width.saturating_add(char_width);
    }

    if visible_width < width {
        output.push_str(&" ".repeat(width - visible_width));
    }
    output
}
