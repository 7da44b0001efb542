use std::fs::File;
use std::io::{self, Write};

use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEventKind};
use crossterm::{cursor, execute, terminal};
use simplelog::{Config, LevelFilter, WriteLogger};

use pagedom::{Content, Element, FocusState, Key, Modifiers};
use teaser::{TeaserConfig, TeaserToggle};

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud \
exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in \
reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("teaser.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let mut page = page();
    let mut widget = TeaserToggle::new(&mut page, TeaserConfig::new("Read More", "Close"))?;
    let mut focus = FocusState::new();
    focus.focus_next(&page);

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut stdout, &mut page, &mut widget, &mut focus);

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(
    stdout: &mut io::Stdout,
    page: &mut Element,
    widget: &mut TeaserToggle,
    focus: &mut FocusState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        draw(stdout, page, focus)?;

        let CtEvent::Key(key_event) = event::read()? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Tab => {
                focus.focus_next(page);
            }
            KeyCode::BackTab => {
                focus.focus_prev(page);
            }
            code => {
                let event = focus.key_event(Key::from(code), Modifiers::from(key_event.modifiers));
                if widget.handle_event(page, &event)? {
                    log::info!("Toggled via {:?}", event.target());
                }
            }
        }
    }
}

fn page() -> Element {
    Element::box_()
        .id("page")
        .child(Element::text("teaser demo - Tab to move, Enter/Space to toggle, q to quit"))
        .child(section("intro", LOREM))
        .child(section("note", "Short notes are left alone."))
        .child(section("outro", &LOREM.repeat(2)))
}

fn section(id: &str, text: &str) -> Element {
    Element::box_().id(id).class("read-more").child(
        Element::box_()
            .class("read-more-teaser")
            .child(Element::text(text).id(format!("{id}-text"))),
    )
}

fn draw(stdout: &mut io::Stdout, page: &Element, focus: &FocusState) -> io::Result<()> {
    let (width, _) = terminal::size()?;
    execute!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    let mut lines = Vec::new();
    collect_lines(page, focus, usize::from(width.max(20)), &mut lines);
    for line in lines {
        write!(stdout, "{line}\r\n")?;
    }
    stdout.flush()
}

fn collect_lines(element: &Element, focus: &FocusState, width: usize, lines: &mut Vec<String>) {
    match &element.content {
        Content::None => {}
        Content::Text(text) if element.clickable => {
            let marker = if focus.focused() == Some(element.id.as_str()) {
                '>'
            } else {
                ' '
            };
            lines.push(format!("{marker} [ {text} ]"));
            lines.push(String::new());
        }
        Content::Text(text) => {
            let chars: Vec<char> = text.chars().collect();
            for chunk in chars.chunks(width) {
                lines.push(chunk.iter().collect());
            }
        }
        Content::Children(children) => {
            for child in children {
                collect_lines(child, focus, width, lines);
            }
        }
    }
}
