use iced::widget::{column, container};
use iced::Element;

use crate::app::Message;
use crate::ui::{result_card, theme};

/// Number of placeholder cards shown while a search is in flight
pub const COUNT: usize = 10;

/// Build one inert placeholder card filling a grid cell.
pub fn view<'a>() -> Element<'a, Message> {
    let cover = container(column![])
        .width(iced::Fill)
        .height(result_card::COVER_HEIGHT)
        .style(theme::cover_loading);

    container(cover)
        .width(result_card::CARD_WIDTH)
        .padding(iced::Padding::new(10.0))
        .style(theme::skeleton)
        .into()
}
