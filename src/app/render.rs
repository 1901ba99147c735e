use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::{App, Phase};

const PROMPT: &str = "Enter the date to read a fortune for (YYYYMMDD).";
const EDITING_HINT: &str = "(enter: read fortune, ctrl+c: quit)";
const WAITING: &str = "Reading your fortune... please wait.";
const DONE_HINT: &str = "(ctrl+c to quit, esc to enter another date)";
const FAILED_BANNER: &str = "✗ Failed to read the fortune.";
const FAILED_HINT: &str = "(esc to try another date, ctrl+c to quit)";

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let border_color = match self.phase {
            Phase::Editing => Color::Cyan,
            Phase::Fetching => Color::Yellow,
            Phase::Done => Color::Green,
            Phase::Failed => Color::Red,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Fortune ")
            .border_style(Style::default().fg(border_color));

        let content = Paragraph::new(self.view_text())
            .block(block)
            .wrap(Wrap { trim: false });

        frame.render_widget(content, frame.area());
    }

    /// Text for the current phase
    ///
    /// Pure function of the state; [`App::render`] only adds the frame.
    pub fn view_text(&self) -> Text<'static> {
        match self.phase {
            Phase::Editing => Text::from(vec![
                Line::from(PROMPT),
                self.input_line(),
                Line::default(),
                Line::styled(EDITING_HINT, Style::default().fg(Color::DarkGray)),
            ]),
            Phase::Fetching => Text::from(Line::from(vec![
                Span::styled(self.spinner.glyph(), Style::default().fg(Color::Yellow)),
                Span::raw(" "),
                Span::raw(WAITING),
            ])),
            Phase::Done => {
                let mut lines = vec![
                    Line::styled(
                        format!("Your fortune for {}", self.key()),
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Line::default(),
                ];
                let result = self.result_text.as_deref().unwrap_or_default();
                lines.extend(result.lines().map(|l| Line::from(l.to_string())));
                lines.push(Line::default());
                lines.push(Line::styled(DONE_HINT, Style::default().fg(Color::DarkGray)));
                Text::from(lines)
            }
            Phase::Failed => {
                let message = self
                    .last_error
                    .as_ref()
                    .map(|e| e.to_string())
                    .unwrap_or_default();
                Text::from(vec![
                    Line::styled(
                        FAILED_BANNER,
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                    Line::styled(message, Style::default().fg(Color::Red)),
                    Line::default(),
                    Line::styled(FAILED_HINT, Style::default().fg(Color::DarkGray)),
                ])
            }
        }
    }

    /// `> ` plus the buffer, with the cursor cell reversed
    fn input_line(&self) -> Line<'static> {
        let value: Vec<char> = self.input.value().chars().collect();
        let cursor = self.input.cursor().min(value.len());

        let before: String = value[..cursor].iter().collect();
        let at = value.get(cursor).map(|c| c.to_string()).unwrap_or_else(|| " ".to_string());
        let after: String = value.get(cursor + 1..).unwrap_or_default().iter().collect();

        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::raw(before),
            Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
            Span::raw(after),
        ])
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
