// SPDX-License-Identifier: GPL-3.0-only

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length, Subscription, Task};
use pagina_core::config::ListSettings;
use tracing::info;

use crate::fl;
use crate::pagina::screen::{self, Screen, catalog};

pub struct Pagina {
    screen: Screen,
    settings: ListSettings,
}

#[derive(Debug, Clone)]
pub enum Message {
    Catalog(catalog::Message),

    OpenCatalog,
}

impl Pagina {
    pub fn new(settings: ListSettings) -> Self {
        info!(
            total_items = settings.total_items,
            page_size = settings.page_size,
            "starting pagina"
        );

        Self {
            screen: Screen::Welcome,
            settings,
        }
    }

    pub fn title(&self) -> String {
        fl!("app-title")
    }

    pub fn view(&self) -> Element<'_, Message> {
        match &self.screen {
            Screen::Welcome => self.welcome_view(),
            Screen::Catalog(catalog) => catalog.view().map(Message::Catalog),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Catalog(message) => {
                let Screen::Catalog(catalog) = &mut self.screen else {
                    return Task::none();
                };

                match catalog.update(message) {
                    catalog::Action::None => {}
                    catalog::Action::Back => {
                        self.screen = Screen::Welcome;
                    }
                }
            }
            Message::OpenCatalog => {
                self.screen = Screen::Catalog(screen::Catalog::new(self.settings));
            }
        }

        Task::none()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        match &self.screen {
            Screen::Welcome => Subscription::none(),
            Screen::Catalog(catalog) => catalog.subscription().map(Message::Catalog),
        }
    }

    pub fn theme(&self) -> iced::Theme {
        iced::Theme::GruvboxLight
    }

    fn welcome_view(&self) -> Element<'_, Message> {
        let buttons_row = row![
            button(text(fl!("catalog")).center())
                .width(100.)
                .height(100.)
                .on_press(Message::OpenCatalog)
        ]
        .spacing(5.)
        .height(Length::Shrink);

        let centered_buttons = container(buttons_row).center(Length::Fill);

        let app_text = text("dev.pagina dev-0.1.0")
            .align_x(Alignment::End)
            .width(Length::Fill);

        let content = column![centered_buttons, app_text]
            .width(Length::Fill)
            .height(Length::Fill);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
