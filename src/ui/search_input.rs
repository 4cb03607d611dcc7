use iced::widget::{button, row, text, text_input};
use iced::{Element, Fill, Padding};

use crate::app::Message;
use crate::ui::theme;

/// The search input ID for focus management
pub const SEARCH_INPUT_ID: &str = "librujula-search-input";

/// Build the search box: free-form query input plus submit button.
///
/// Enter submits as well; the blank-input guard lives in the update
/// handler, so the input itself stays unconditional. The button is the
/// only control gated here.
pub fn view(query: &str, loading: bool) -> Element<'_, Message> {
    let input = text_input("Títulos, autores, géneros...", query)
        .on_input(Message::QueryChanged)
        .on_submit(Message::SubmitSearch)
        .id(SEARCH_INPUT_ID)
        .padding(12)
        .size(18)
        .width(Fill)
        .style(theme::search_input);

    let label = if loading { "..." } else { "BUSCAR" };
    let can_submit = !loading && !query.trim().is_empty();
    let submit = button(text(label).size(16))
        .on_press_maybe(can_submit.then_some(Message::SubmitSearch))
        .padding(Padding::from([12, 20]))
        .style(theme::search_button);

    row![input, submit].spacing(8).into()
}
