use std::mem;

use iced::widget::{column, container, scrollable, text, Column, Row};
use iced::{Center, Element, Fill, Padding};

use crate::app::{Message, Search};
use crate::ui::{result_card, skeleton, theme};

/// Cards per grid row
const GRID_COLUMNS: usize = 5;

/// Notice shown when a well-formed response carries no recommendations
pub const EMPTY_NOTICE: &str = "No se encontraron resultados.";

/// Build the results region shown once a search has been initiated.
pub fn view<'a>(search: &'a Search) -> Element<'a, Message> {
    match search {
        Search::Landing => column![].into(),
        Search::Searching { .. } => {
            grid((0..skeleton::COUNT).map(|_| skeleton::view()).collect())
        }
        Search::Success { cards, .. } => grid(cards.iter().map(result_card::view).collect()),
        Search::Empty { .. } => container(text(EMPTY_NOTICE).size(16).style(theme::empty_notice))
            .width(Fill)
            .padding(Padding::new(24.0))
            .align_x(Center)
            .into(),
        // The status line already carries the message
        Search::Error { .. } => column![].into(),
    }
}

fn grid<'a>(cells: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    let mut rows: Vec<Element<'a, Message>> = Vec::new();
    let mut current: Vec<Element<'a, Message>> = Vec::new();

    for cell in cells {
        current.push(cell);
        if current.len() == GRID_COLUMNS {
            rows.push(Row::from_vec(mem::take(&mut current)).spacing(20).into());
        }
    }
    if !current.is_empty() {
        rows.push(Row::from_vec(current).spacing(20).into());
    }

    scrollable(Column::from_vec(rows).spacing(24).width(Fill).align_x(Center))
        .height(Fill)
        .into()
}
