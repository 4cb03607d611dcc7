use iced::widget::{button, container, text, text_input};
use iced::{Border, Color, Theme};

/// Near-black backdrop for the whole window
pub const BACKGROUND: Color = Color {
    r: 0.07,
    g: 0.07,
    b: 0.09,
    a: 1.0,
};

/// Slightly lighter surface color for the search input and cards
const SURFACE: Color = Color {
    r: 0.13,
    g: 0.13,
    b: 0.16,
    a: 1.0,
};

/// Darker panel used for cover fallbacks and skeleton shimmer
const SURFACE_DIM: Color = Color {
    r: 0.10,
    g: 0.10,
    b: 0.13,
    a: 1.0,
};

/// Warm accent for the brand mark and the submit button
const ACCENT: Color = Color {
    r: 0.82,
    g: 0.22,
    b: 0.25,
    a: 1.0,
};

/// Match-percentage green
const MATCH: Color = Color {
    r: 0.27,
    g: 0.75,
    b: 0.35,
    a: 1.0,
};

/// Text color
const TEXT_PRIMARY: Color = Color {
    r: 0.92,
    g: 0.92,
    b: 0.93,
    a: 1.0,
};

const TEXT_SECONDARY: Color = Color {
    r: 0.58,
    g: 0.58,
    b: 0.62,
    a: 1.0,
};

/// Style for the container wrapping the entire window
pub fn main_container(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(BACKGROUND.into()),
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Style for the search text input
pub fn search_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let _ = theme;
    let focused = matches!(status, text_input::Status::Focused { .. });
    text_input::Style {
        background: SURFACE.into(),
        border: Border {
            color: if focused { ACCENT } else { Color::TRANSPARENT },
            width: if focused { 2.0 } else { 0.0 },
            radius: 8.0.into(),
        },
        icon: TEXT_SECONDARY,
        placeholder: TEXT_SECONDARY,
        value: TEXT_PRIMARY,
        selection: Color {
            r: ACCENT.r,
            g: ACCENT.g,
            b: ACCENT.b,
            a: 0.3,
        },
    }
}

/// Style for the submit button
pub fn search_button(theme: &Theme, status: button::Status) -> button::Style {
    let _ = theme;
    let background = match status {
        button::Status::Disabled => Color {
            a: 0.4,
            ..ACCENT
        },
        button::Status::Hovered | button::Status::Pressed => Color {
            r: ACCENT.r * 1.1,
            g: ACCENT.g * 1.1,
            b: ACCENT.b * 1.1,
            a: 1.0,
        },
        _ => ACCENT,
    };
    button::Style {
        background: Some(background.into()),
        text_color: TEXT_PRIMARY,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 8.0.into(),
        },
        ..button::Style::default()
    }
}

/// Style for the brand mark
pub fn brand_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ACCENT),
    }
}

/// Style for the landing subtitle
pub fn subtitle_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_SECONDARY),
    }
}

/// Style for the status line under the search box
pub fn status_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_SECONDARY),
    }
}

/// Style for the no-results notice
pub fn empty_notice(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_SECONDARY),
    }
}

/// Style for a recommendation card
pub fn card(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(SURFACE.into()),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 10.0.into(),
        },
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Style for the text fallback shown in place of missing cover art
pub fn cover_fallback(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(SURFACE_DIM.into()),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 6.0.into(),
        },
        text_color: Some(TEXT_SECONDARY),
        ..container::Style::default()
    }
}

/// Style for the cover area while its image is still being fetched
pub fn cover_loading(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(SURFACE_DIM.into()),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 6.0.into(),
        },
        ..container::Style::default()
    }
}

/// Style for an inert skeleton card
pub fn skeleton(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(
            Color {
                a: 0.5,
                ..SURFACE
            }
            .into(),
        ),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 10.0.into(),
        },
        ..container::Style::default()
    }
}

/// Style for card title text
pub fn card_title(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_PRIMARY),
    }
}

/// Style for card author text
pub fn card_author(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_SECONDARY),
    }
}

/// Style for the match-percentage text
pub fn match_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(MATCH),
    }
}

/// Style for the title shown inside a cover fallback
pub fn fallback_title(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_PRIMARY),
    }
}
