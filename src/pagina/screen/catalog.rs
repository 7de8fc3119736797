// SPDX-License-Identifier: GPL-3.0-only

use iced::keyboard::key::Named;
use iced::keyboard::{self, Key};
use iced::widget::{
    Column, Row, Rule, button, column, container, horizontal_space, row, scrollable, text,
    text_input,
};
use iced::{Alignment, Element, Length, Subscription, event};
use tracing::{info, warn};

use pagina_core::config::ListSettings;
use pagina_core::models::entry::Entry;
use pagina_utils::pagination::*;
use pagina_utils::styling::{
    GLOBAL_BUTTON_HEIGHT, GLOBAL_SPACING, LIST_WIDTH, TEXT_SIZE, TITLE_TEXT_SIZE,
};

use crate::fl;

/// Paginated list of catalog entries
pub struct Catalog {
    pagination: PaginationStore,
    total_items_input: String,
    page_size_input: String,
    input_error: Option<InputError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogTextInputFields {
    TotalItems,
    PageSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputError {
    InvalidNumber(CatalogTextInputFields),
    InvalidPageSize,
}

#[derive(Debug, Clone)]
pub enum Hotkey {
    Left,
    Right,
    Home,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Asks the parent to go back
    Back,
    /// Hotkey (Subscription) pressed
    Hotkey(Hotkey),

    /// Callback when using the text inputs of the list settings
    TextInputUpdate(String, CatalogTextInputFields),
    /// Re-seeds the list (and its pagination) from the text inputs
    ApplyListInputs,

    /// Try to go to the first, previous or next page
    PaginationAction(PaginationAction),
}

pub enum Action {
    None,
    Back,
}

impl Catalog {
    pub fn new(settings: ListSettings) -> Self {
        let mut pagination = PaginationStore::new();
        pagination.subscribe(|state| {
            info!(
                page = state.display_page(),
                total_pages = state.total_pages,
                "catalog page changed"
            );
        });

        let mut catalog = Self {
            pagination,
            total_items_input: settings.total_items.to_string(),
            page_size_input: settings.page_size.to_string(),
            input_error: None,
        };

        if let Err(err) = catalog.pagination.reset(settings.list_context()) {
            warn!("Could not seed the catalog pagination: {err}");
            catalog.input_error = Some(InputError::InvalidPageSize);
        }

        catalog
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::Back => return Action::Back,
            Message::Hotkey(hotkey) => {
                let action = match hotkey {
                    Hotkey::Left => PaginationAction::Back,
                    Hotkey::Right => PaginationAction::Forward,
                    Hotkey::Home => PaginationAction::First,
                };
                return self.update(Message::PaginationAction(action));
            }
            Message::TextInputUpdate(value, field) => match field {
                CatalogTextInputFields::TotalItems => self.total_items_input = value,
                CatalogTextInputFields::PageSize => self.page_size_input = value,
            },
            Message::ApplyListInputs => match self.parse_list_inputs() {
                Ok(context) => {
                    self.input_error = match self.pagination.reset(context) {
                        Ok(()) => None,
                        Err(PaginationError::InvalidPageSize { .. }) => {
                            Some(InputError::InvalidPageSize)
                        }
                    };
                }
                Err(err) => self.input_error = Some(err),
            },
            Message::PaginationAction(action) => {
                self.pagination.apply(action);
            }
        }

        Action::None
    }

    pub fn view(&self) -> Element<'_, Message> {
        let pagination = self.pagination.pagination();

        let content = container(
            column![
                list_inputs(
                    &self.total_items_input,
                    &self.page_size_input,
                    self.input_error
                ),
                list_grid(self.visible_entries()),
                page_controls(pagination)
            ]
            .spacing(GLOBAL_SPACING)
            .width(LIST_WIDTH),
        )
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .padding(50.);

        column![list_header(), content]
            .spacing(GLOBAL_SPACING)
            .height(Length::Fill)
            .width(Length::Fill)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(handle_event)
    }

    /// Only the rows of the current page are ever built
    fn visible_entries(&self) -> Vec<Entry> {
        Entry::range(self.pagination.pagination().item_range())
    }

    fn parse_list_inputs(&self) -> Result<ListContext, InputError> {
        let total = parse_field(&self.total_items_input, CatalogTextInputFields::TotalItems)?;
        let per_page = parse_field(&self.page_size_input, CatalogTextInputFields::PageSize)?;

        Ok(ListContext {
            total,
            per_page,
            current_page: None,
        })
    }
}

fn parse_field(value: &str, field: CatalogTextInputFields) -> Result<usize, InputError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| InputError::InvalidNumber(field))
}

fn handle_event(
    event: event::Event,
    status: event::Status,
    _id: iced::window::Id,
) -> Option<Message> {
    // Keys typed into the text inputs are not navigation
    if matches!(status, event::Status::Captured) {
        return None;
    }

    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match key {
            Key::Named(Named::ArrowLeft) => Some(Message::Hotkey(Hotkey::Left)),
            Key::Named(Named::ArrowRight) => Some(Message::Hotkey(Hotkey::Right)),
            Key::Named(Named::Home) => Some(Message::Hotkey(Hotkey::Home)),
            _ => None,
        },
        _ => None,
    }
}

//
// VIEW COMPOSING
//

fn list_header<'a>() -> Element<'a, Message> {
    let back_button = button(text(fl!("back")).center())
        .on_press(Message::Back)
        .height(GLOBAL_BUTTON_HEIGHT);

    row![
        back_button,
        text(fl!("catalog")).size(TITLE_TEXT_SIZE)
    ]
    .align_y(Alignment::Center)
    .spacing(GLOBAL_SPACING)
    .padding(5.)
    .into()
}

fn list_inputs<'a>(
    total_items: &'a str,
    page_size: &'a str,
    input_error: Option<InputError>,
) -> Element<'a, Message> {
    let inputs_row = row![
        text(fl!("total-items")).size(TEXT_SIZE),
        text_input(&fl!("total-items"), total_items)
            .on_input(|value| Message::TextInputUpdate(value, CatalogTextInputFields::TotalItems))
            .on_submit(Message::ApplyListInputs)
            .size(TEXT_SIZE),
        text(fl!("items-per-page")).size(TEXT_SIZE),
        text_input(&fl!("items-per-page"), page_size)
            .on_input(|value| Message::TextInputUpdate(value, CatalogTextInputFields::PageSize))
            .on_submit(Message::ApplyListInputs)
            .size(TEXT_SIZE),
        button(text(fl!("apply")).center())
            .on_press(Message::ApplyListInputs)
            .height(GLOBAL_BUTTON_HEIGHT)
    ]
    .spacing(GLOBAL_SPACING)
    .align_y(Alignment::Center);

    let mut inputs = Column::new().push(inputs_row).spacing(GLOBAL_SPACING);
    if let Some(error) = input_error {
        let message = match error {
            InputError::InvalidNumber(CatalogTextInputFields::TotalItems) => {
                fl!("invalid-number", field = fl!("total-items"))
            }
            InputError::InvalidNumber(CatalogTextInputFields::PageSize) => {
                fl!("invalid-number", field = fl!("items-per-page"))
            }
            InputError::InvalidPageSize => fl!("invalid-page-size"),
        };
        inputs = inputs.push(text(message).size(TEXT_SIZE));
    }

    inputs.into()
}

fn list_grid<'a>(entries: Vec<Entry>) -> Element<'a, Message> {
    if entries.is_empty() {
        return container(text(fl!("no-entries")).size(TITLE_TEXT_SIZE))
            .width(Length::Fill)
            .align_x(Alignment::Center)
            .padding(50.)
            .into();
    }

    let title_row = Row::new()
        .push(text(fl!("id")).size(TITLE_TEXT_SIZE).width(200.))
        .push(text(fl!("name")).size(TITLE_TEXT_SIZE).width(600.))
        .width(Length::Shrink)
        .align_y(Alignment::Center);

    let mut grid = Column::new()
        .push(title_row)
        .spacing(GLOBAL_SPACING)
        .width(Length::Shrink);

    for entry in entries {
        let row = Row::new()
            .push(text(entry.id.to_string()).size(TEXT_SIZE).width(200.))
            .push(text(entry.name).size(TEXT_SIZE).width(600.))
            .align_y(Alignment::Center);

        // Limit Rule size to sum of all column widths
        grid = grid.push(row![Rule::horizontal(1.)].width(LIST_WIDTH));
        grid = grid.push(row);
    }

    scrollable(grid).height(Length::Fill).into()
}

fn page_controls<'a>(pagination: &Pagination) -> Element<'a, Message> {
    let nav_button = |label: String, action: PaginationAction, enabled: bool| {
        button(
            text(label)
                .center()
                .width(Length::Fill)
                .height(GLOBAL_BUTTON_HEIGHT),
        )
        .on_press_maybe(enabled.then_some(Message::PaginationAction(action)))
    };

    Column::new()
        .push(row![Rule::horizontal(1.)].width(LIST_WIDTH))
        .push(
            text(fl!(
                "page-of",
                current = pagination.display_page(),
                total = pagination.total_pages
            ))
            .align_x(Alignment::Center),
        )
        .push(
            Row::new()
                .width(LIST_WIDTH)
                .push(nav_button(
                    fl!("first"),
                    PaginationAction::First,
                    !pagination.is_first_page(),
                ))
                .push(nav_button(
                    fl!("previous"),
                    PaginationAction::Back,
                    pagination.previous_enabled,
                ))
                .push(horizontal_space())
                .push(nav_button(
                    fl!("next"),
                    PaginationAction::Forward,
                    pagination.next_enabled,
                ))
                .align_y(Alignment::Center)
                .spacing(GLOBAL_SPACING),
        )
        .spacing(GLOBAL_SPACING)
        .align_x(Alignment::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(total_items: usize, page_size: usize) -> Catalog {
        Catalog::new(ListSettings {
            total_items,
            page_size,
        })
    }

    #[test]
    fn hotkeys_navigate_pages() {
        let mut catalog = catalog(30, 10);

        catalog.update(Message::Hotkey(Hotkey::Right));
        catalog.update(Message::Hotkey(Hotkey::Right));
        assert_eq!(catalog.pagination.pagination().current_page, 2);

        catalog.update(Message::Hotkey(Hotkey::Left));
        assert_eq!(catalog.pagination.pagination().current_page, 1);

        catalog.update(Message::Hotkey(Hotkey::Home));
        assert_eq!(catalog.pagination.pagination().current_page, 0);
    }

    #[test]
    fn applying_inputs_reseeds_the_list() {
        let mut catalog = catalog(30, 10);
        catalog.update(Message::PaginationAction(PaginationAction::Forward));

        catalog.update(Message::TextInputUpdate(
            "7".to_string(),
            CatalogTextInputFields::TotalItems,
        ));
        catalog.update(Message::TextInputUpdate(
            "2".to_string(),
            CatalogTextInputFields::PageSize,
        ));
        catalog.update(Message::ApplyListInputs);

        let pagination = catalog.pagination.pagination();
        assert_eq!(pagination.current_page, 0);
        assert_eq!(pagination.total_pages, 4);
        assert_eq!(catalog.visible_entries().len(), 2);
        assert_eq!(catalog.input_error, None);
    }

    #[test]
    fn invalid_inputs_keep_the_current_list() {
        let mut catalog = catalog(30, 10);
        catalog.update(Message::PaginationAction(PaginationAction::Forward));

        catalog.update(Message::TextInputUpdate(
            "0".to_string(),
            CatalogTextInputFields::PageSize,
        ));
        catalog.update(Message::ApplyListInputs);
        assert_eq!(catalog.input_error, Some(InputError::InvalidPageSize));

        catalog.update(Message::TextInputUpdate(
            "ten".to_string(),
            CatalogTextInputFields::TotalItems,
        ));
        catalog.update(Message::ApplyListInputs);
        assert_eq!(
            catalog.input_error,
            Some(InputError::InvalidNumber(CatalogTextInputFields::TotalItems))
        );

        assert_eq!(catalog.pagination.pagination().current_page, 1);
        assert_eq!(catalog.pagination.pagination().total_items, 30);
        let ids: Vec<usize> = catalog.visible_entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, (11..=20).collect::<Vec<_>>());
    }

    #[test]
    fn huge_totals_only_build_one_page() {
        let mut catalog = catalog(30, 10);

        catalog.update(Message::TextInputUpdate(
            usize::MAX.to_string(),
            CatalogTextInputFields::TotalItems,
        ));
        catalog.update(Message::TextInputUpdate(
            "25".to_string(),
            CatalogTextInputFields::PageSize,
        ));
        catalog.update(Message::ApplyListInputs);
        assert_eq!(catalog.input_error, None);

        let entries = catalog.visible_entries();
        assert_eq!(entries.len(), 25);
        assert_eq!(entries[0].id, 1);

        catalog.update(Message::Hotkey(Hotkey::Right));
        let entries = catalog.visible_entries();
        assert_eq!(entries.len(), 25);
        assert_eq!(entries[0].id, 26);

        let huge = self::catalog(usize::MAX, 13);
        assert_eq!(huge.visible_entries().len(), 13);
    }

    #[test]
    fn back_is_forwarded_to_the_parent() {
        let mut catalog = catalog(30, 10);
        assert!(matches!(catalog.update(Message::Back), Action::Back));
    }
}
