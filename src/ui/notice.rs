use crate::command::{Notice, NoticeResponse, Notifier};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    DefaultTerminal, Frame,
};

// Brandbook colors
const BRAND_DARK: Color = Color::Rgb(0x1F, 0x2F, 0x3C); // #1f2f3c
const BRAND_ORANGE: Color = Color::Rgb(0x9E, 0x68, 0x3C); // #9e683c
const BRAND_MUTED: Color = Color::Rgb(0x71, 0x65, 0x65); // #716565

const TITLE_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);

const FOOTER_HELP: &str = " Enter OK | Esc Cancel ";

/// Modal dialog state for the pre-export notice.
pub struct NoticeDialog<'a> {
    pub notice: &'a Notice,
    pub response: Option<NoticeResponse>,
}

impl<'a> NoticeDialog<'a> {
    #[must_use]
    pub fn new(notice: &'a Notice) -> Self {
        Self {
            notice,
            response: None,
        }
    }

    pub fn run(mut self, terminal: &mut DefaultTerminal) -> std::io::Result<NoticeResponse> {
        loop {
            terminal.draw(|frame| draw_notice(frame, self.notice))?;
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
            if let Some(response) = self.response {
                return Ok(response);
            }
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char('o' | 'y') => {
                self.response = Some(NoticeResponse::Acknowledged);
            }
            KeyCode::Esc | KeyCode::Char('q' | 'n') => {
                self.response = Some(NoticeResponse::Dismissed);
            }
            _ => {}
        }
    }
}

pub fn draw_notice(frame: &mut Frame, notice: &Notice) {
    let area = centered(frame.area(), 54, 7);

    let body = vec![
        Line::from(""),
        Line::from(Span::styled(
            notice.message.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(FOOTER_HELP, Style::default().fg(BRAND_MUTED))),
    ];

    let dialog = Paragraph::new(body)
        .centered()
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(format!(" ! {} ", notice.title), TITLE_STYLE))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BRAND_ORANGE)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Shows the notice as a full-screen terminal modal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotice;

impl Notifier for TerminalNotice {
    fn notify(&mut self, notice: &Notice) -> std::io::Result<NoticeResponse> {
        let mut terminal = ratatui::try_init()?;
        let result = NoticeDialog::new(notice).run(&mut terminal);
        ratatui::restore();
        result
    }
}

/// Prints the notice to stderr and proceeds without waiting.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotice;

impl Notifier for ConsoleNotice {
    fn notify(&mut self, notice: &Notice) -> std::io::Result<NoticeResponse> {
        eprintln!("{}: {}", notice.title, notice.message);
        Ok(NoticeResponse::Acknowledged)
    }
}
