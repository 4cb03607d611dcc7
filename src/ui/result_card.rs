use iced::widget::{column, container, image, text};
use iced::{Center, ContentFit, Element, Fill, Padding};

use crate::app::{Card, Cover, Message};
use crate::ui::theme;

/// Card cell width in the results grid
pub const CARD_WIDTH: f32 = 180.0;
/// Cover area height, roughly the 2:3 aspect of a book jacket
pub const COVER_HEIGHT: f32 = 250.0;

/// Percentage shown when the service has no rating for a book
const DEFAULT_MATCH: u8 = 85;

/// Build one recommendation card: cover (or fallback), title, author and
/// match percentage.
pub fn view<'a>(card: &'a Card) -> Element<'a, Message> {
    let cover: Element<'a, Message> = match &card.cover {
        Cover::Ready(handle) => image(handle.clone())
            .width(Fill)
            .height(COVER_HEIGHT)
            .content_fit(ContentFit::Cover)
            .into(),
        Cover::Loading => container(column![])
            .width(Fill)
            .height(COVER_HEIGHT)
            .style(theme::cover_loading)
            .into(),
        // No cover art, or the fetch failed: title over a plain surface
        Cover::None | Cover::Failed => container(
            text(&card.book.title)
                .size(16)
                .style(theme::fallback_title)
                .center(),
        )
        .width(Fill)
        .height(COVER_HEIGHT)
        .padding(Padding::new(12.0))
        .align_x(Center)
        .align_y(Center)
        .style(theme::cover_fallback)
        .into(),
    };

    let info = column![
        text(&card.book.title).size(15).style(theme::card_title),
        text(&card.book.author).size(13).style(theme::card_author),
        text(format!("{}% Match", match_percent(card.book.score)))
            .size(13)
            .style(theme::match_text),
    ]
    .spacing(4);

    container(column![cover, info].spacing(10))
        .width(CARD_WIDTH)
        .padding(Padding::new(10.0))
        .style(theme::card)
        .into()
}

/// Map a 0–5 relevance score onto the displayed match percentage.
fn match_percent(score: Option<f32>) -> u8 {
    match score {
        Some(score) => ((score / 5.0) * 100.0).round() as u8,
        None => DEFAULT_MATCH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_percent_from_score() {
        assert_eq!(match_percent(Some(4.5)), 90);
        assert_eq!(match_percent(Some(5.0)), 100);
        assert_eq!(match_percent(Some(2.5)), 50);
    }

    #[test]
    fn test_match_percent_rounds() {
        assert_eq!(match_percent(Some(3.3)), 66);
        assert_eq!(match_percent(Some(4.33)), 87);
    }

    #[test]
    fn test_match_percent_placeholder_without_score() {
        assert_eq!(match_percent(None), 85);
    }
}
