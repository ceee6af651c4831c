//! Interactive mode: one widget over the book list, drawn line by line.
//!
//! Rows registered as item elements move the menu viewport when the
//! dispatcher scrolls them into view.

use std::cell::Cell;
use std::ops::Range;
use std::rc::Rc;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use log::{debug, info};
use upop_core::prelude::*;

use crate::WidgetKind;
use crate::books::{Book, book_to_string, books, filter_books};
use crate::error::CliError;
use crate::terminal::{Line, LineStyle, TerminalGuard};

const CONTROL_ROW: u16 = 1;
const MENU_TOP: u16 = 3;
const MENU_HEIGHT: usize = 6;
const INPUT_WIDTH: u16 = 32;

pub fn run(kind: WidgetKind) -> Result<(), CliError> {
    let mut session = Session::new(kind);
    let mut terminal = TerminalGuard::new()?;

    info!("interactive {:?} session started", kind);

    loop {
        terminal.draw(&session.lines())?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Flow::Quit = session.key(key) {
                    break;
                }
            }
            Event::Mouse(mouse) => session.mouse(mouse),
            _ => {}
        }
    }

    info!("interactive session ended");
    Ok(())
}

enum Flow {
    Continue,
    Quit,
}

/// First visible menu row, shared with the row elements.
#[derive(Debug, Clone, Default)]
struct Viewport {
    offset: Rc<Cell<usize>>,
}

impl Viewport {
    fn offset(&self) -> usize {
        self.offset.get()
    }

    fn reset(&self) {
        self.offset.set(0);
    }

    fn visible(&self, len: usize) -> Range<usize> {
        let start = self.offset().min(len);
        start..(start + MENU_HEIGHT).min(len)
    }

    /// Item index under terminal row `row`, if it is a menu row.
    fn item_at(&self, row: u16) -> Option<usize> {
        let row = row.checked_sub(MENU_TOP)? as usize;
        (row < MENU_HEIGHT).then(|| self.offset() + row)
    }

    fn scroll_by(&self, delta: isize, len: usize) {
        let max = len.saturating_sub(MENU_HEIGHT);
        let offset = self.offset().saturating_add_signed(delta).min(max);
        self.offset.set(offset);
    }
}

struct RowElement {
    index: usize,
    viewport: Viewport,
}

impl ScrollIntoView for RowElement {
    fn scroll_into_view(&self) {
        let offset = self.viewport.offset();
        if self.index < offset {
            self.viewport.offset.set(self.index);
        } else if self.index >= offset + MENU_HEIGHT {
            self.viewport.offset.set(self.index + 1 - MENU_HEIGHT);
        }
    }
}

enum Widget {
    Select(Select<Book>),
    Combobox {
        combobox: Combobox<Book>,
        all: Vec<Book>,
    },
}

struct Session {
    widget: Widget,
    viewport: Viewport,
    pointer_in_menu: bool,
    status: String,
}

impl Session {
    fn new(kind: WidgetKind) -> Self {
        let widget = match kind {
            WidgetKind::Select => Widget::Select(Select::new(
                SelectOptions::new(books())
                    .id("select")
                    .on_selected_item_change(|state| {
                        info!("selected {:?}", state.selected_item.as_ref().map(|b| b.id));
                    }),
            )),
            WidgetKind::Combobox => Widget::Combobox {
                combobox: Combobox::new(
                    ComboboxOptions::new(books(), book_to_string)
                        .id("combobox")
                        .on_selected_item_change(|state| {
                            info!("selected {:?}", state.selected_item.as_ref().map(|b| b.id));
                        }),
                ),
                all: books(),
            },
        };

        let mut session = Self {
            widget,
            viewport: Viewport::default(),
            pointer_in_menu: false,
            status: String::new(),
        };
        session.capture_elements();
        session
    }

    // -------------------------------------------------------------------------
    // State access
    // -------------------------------------------------------------------------

    fn is_open(&self) -> bool {
        match &self.widget {
            Widget::Select(select) => select.state().is_open,
            Widget::Combobox { combobox, .. } => combobox.state().is_open,
        }
    }

    fn highlighted_index(&self) -> Option<usize> {
        match &self.widget {
            Widget::Select(select) => select.state().highlighted_index,
            Widget::Combobox { combobox, .. } => combobox.state().highlighted_index,
        }
    }

    fn selected_item(&self) -> Option<&Book> {
        match &self.widget {
            Widget::Select(select) => select.state().selected_item.as_ref(),
            Widget::Combobox { combobox, .. } => combobox.state().selected_item.as_ref(),
        }
    }

    fn items(&self) -> &[Book] {
        match &self.widget {
            Widget::Select(select) => select.items(),
            Widget::Combobox { combobox, .. } => combobox.items(),
        }
    }

    fn capture_elements(&mut self) {
        let items = self.items().to_vec();
        let viewport = self.viewport.clone();

        let elements = items.into_iter().enumerate().map(|(index, book)| {
            let element: Box<dyn ScrollIntoView> = Box::new(RowElement {
                index,
                viewport: viewport.clone(),
            });
            (book, element)
        });

        match &mut self.widget {
            Widget::Select(select) => {
                select.clear_elements();
                for (book, element) in elements {
                    select.capture_element(book, Some(element));
                }
            }
            Widget::Combobox { combobox, .. } => {
                combobox.clear_elements();
                for (book, element) in elements {
                    combobox.capture_element(book, Some(element));
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    fn dispatch(&mut self, action: Action<Book>) {
        let tag = action.tag();

        let changes = match &mut self.widget {
            Widget::Select(select) => select.dispatch_with_changes(action),
            Widget::Combobox { combobox, all } => {
                let changes = combobox.dispatch_with_changes(action);
                if changes.input_value {
                    let filtered = filter_books(&combobox.state().input_value, all);
                    combobox.set_items(filtered);
                }
                changes
            }
        };

        if changes.input_value {
            self.viewport.reset();
            self.capture_elements();
        }

        if changes.is_open && !self.is_open() {
            self.viewport.reset();
        }

        if !changes.is_empty() {
            debug!("{} changed {:?}", tag, changes);
        }
    }

    fn blur(&mut self) {
        match self.widget {
            Widget::Select(_) => self.dispatch(Action::toggle_button_blur()),
            Widget::Combobox { .. } => self.dispatch(Action::input_blur()),
        }
    }

    fn key(&mut self, key: KeyEvent) -> Flow {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Flow::Quit;
        }

        if key.code == KeyCode::Esc && !self.is_open() {
            return Flow::Quit;
        }

        if key.code == KeyCode::Tab {
            self.blur();
            return Flow::Continue;
        }

        match &self.widget {
            Widget::Select(_) => {
                self.dispatch(Action::toggle_button_key_down(key.code));
            }
            Widget::Combobox { combobox, .. } => {
                let mut text = combobox.state().input_value.clone();
                match key.code {
                    KeyCode::Char(c) => {
                        text.push(c);
                        self.dispatch(Action::input_value_changed(text));
                    }
                    KeyCode::Backspace => {
                        text.pop();
                        self.dispatch(Action::input_value_changed(text));
                    }
                    code => {
                        let prevent_default = PreventDefault::new();
                        self.dispatch(Action::input_key_down(code, prevent_default.clone()));

                        if code == KeyCode::Enter && !prevent_default.is_prevented() {
                            self.status = format!("submitted {:?}", text);
                        }
                    }
                }
            }
        }

        Flow::Continue
    }

    fn mouse(&mut self, mouse: MouseEvent) {
        let len = self.items().len();
        let item = self
            .viewport
            .item_at(mouse.row)
            .filter(|index| self.is_open() && *index < len);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = item {
                    self.dispatch(Action::item_click(index));
                } else if mouse.row == CONTROL_ROW {
                    let on_input = mouse.column < INPUT_WIDTH;
                    match self.widget {
                        Widget::Combobox { .. } if on_input => {
                            self.dispatch(Action::input_click())
                        }
                        _ => self.dispatch(Action::toggle_button_click()),
                    }
                } else {
                    self.blur();
                }
            }
            MouseEventKind::Moved => match item {
                Some(index) => {
                    self.pointer_in_menu = true;
                    if self.highlighted_index() != Some(index) {
                        self.dispatch(Action::item_mouse_move(index));
                    }
                }
                None if self.pointer_in_menu => {
                    self.pointer_in_menu = false;
                    self.dispatch(Action::menu_mouse_leave());
                }
                None => {}
            },
            MouseEventKind::ScrollDown if self.is_open() => self.viewport.scroll_by(1, len),
            MouseEventKind::ScrollUp if self.is_open() => self.viewport.scroll_by(-1, len),
            _ => {}
        }
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    fn lines(&self) -> Vec<Line> {
        let mut lines = Vec::new();

        let (label, control, attributes) = match &self.widget {
            Widget::Select(select) => (
                select.label_attributes(),
                format!(
                    "[ {:<28} v ]",
                    select
                        .state()
                        .selected_item
                        .as_ref()
                        .map_or("Pick a book", |book| book.title)
                ),
                select.toggle_button_attributes().to_attrs(),
            ),
            Widget::Combobox { combobox, .. } => (
                combobox.label_attributes(),
                format!("{:<30} [v]", format!("{}_", combobox.state().input_value)),
                combobox.input_attributes().to_attrs(),
            ),
        };

        lines.push(Line::new(
            format!("Favorite book ({})", describe(&label.to_attrs())),
            LineStyle::Bold,
        ));
        lines.push(Line::new(control, LineStyle::Reversed));
        lines.push(Line::new(
            describe(
                &attributes
                    .into_iter()
                    .filter(|(name, _)| {
                        *name == "aria-expanded" || *name == "aria-activedescendant"
                    })
                    .collect::<Vec<_>>(),
            ),
            LineStyle::Dim,
        ));

        lines.extend(self.menu_lines());

        lines.push(Line::plain(""));
        lines.push(Line::new(self.status.clone(), LineStyle::Dim));
        lines.push(Line::new(
            "up/down move, enter select, tab blur, esc close (quit when closed)",
            LineStyle::Dim,
        ));

        lines
    }

    fn menu_lines(&self) -> Vec<Line> {
        let items = self.items();
        let mut lines = Vec::with_capacity(MENU_HEIGHT);

        if self.is_open() {
            if items.is_empty() {
                lines.push(Line::new("  no matches", LineStyle::Dim));
            }

            for index in self.viewport.visible(items.len()) {
                let book = &items[index];
                let marker = if self.selected_item() == Some(book) { "*" } else { " " };
                let style = if self.highlighted_index() == Some(index) {
                    LineStyle::Reversed
                } else {
                    LineStyle::Plain
                };
                lines.push(Line::new(
                    format!(" {marker} {} by {}", book.title, book.author),
                    style,
                ));
            }
        }

        lines.resize_with(MENU_HEIGHT, || Line::plain(""));
        lines
    }
}

fn describe(attrs: &[(&'static str, String)]) -> String {
    attrs
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join(" ")
}
