use iced::widget::{column, container, image, mouse_area, text};
use iced::{Center, Element, Fill, Padding, Task, Theme};

use crate::api::{self, ApiResponse, Recommendation};
use crate::config::Config;
use crate::ui::{results, search_input, theme};

/// Status line shown when the request never produced a usable response
pub const CONNECTION_ERROR: &str = "Error de conexión con el servidor.";

pub struct State {
    config: Config,
    client: reqwest::Client,
    query: String,
    search: Search,
    /// Request generation. Bumped at every dispatch and at reset, so a
    /// response is applied only if no newer search superseded it.
    seq: u64,
}

/// The search lifecycle. Each variant carries only the fields that are
/// meaningful in that state; results mode is everything except `Landing`.
#[derive(Debug, Clone)]
pub enum Search {
    Landing,
    /// Request in flight; `query` is the text it was dispatched with
    Searching { query: String },
    Success { status: String, cards: Vec<Card> },
    Empty { status: String },
    Error { message: String },
}

/// One rendered recommendation together with its cover view-state
#[derive(Debug, Clone)]
pub struct Card {
    pub book: Recommendation,
    pub cover: Cover,
}

/// Cover art lifecycle for a single card. `Failed` is one-way: a cover
/// that failed to fetch is never retried for this card instance.
#[derive(Debug, Clone)]
pub enum Cover {
    None,
    Loading,
    Ready(image::Handle),
    Failed,
}

impl Card {
    fn new(book: Recommendation) -> Self {
        let cover = if book.cover_url.is_some() {
            Cover::Loading
        } else {
            Cover::None
        };
        Self { book, cover }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    SubmitSearch,
    ResponseReceived {
        seq: u64,
        outcome: Result<ApiResponse, String>,
    },
    CoverLoaded { url: String, handle: image::Handle },
    CoverFailed { url: String },
    Reset,
}

impl State {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let state = Self {
            config,
            client: reqwest::Client::new(),
            query: String::new(),
            search: Search::Landing,
            seq: 0,
        };

        let focus = iced::widget::operation::focus(search_input::SEARCH_INPUT_ID);
        (state, focus)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;
                Task::none()
            }
            Message::SubmitSearch => self.submit_search(),
            Message::ResponseReceived { seq, outcome } => self.apply_response(seq, outcome),
            Message::CoverLoaded { url, handle } => {
                self.set_cover(&url, Cover::Ready(handle));
                Task::none()
            }
            Message::CoverFailed { url } => {
                self.set_cover(&url, Cover::Failed);
                Task::none()
            }
            Message::Reset => {
                // Invalidate any in-flight request before leaving results mode
                self.seq += 1;
                self.query.clear();
                self.search = Search::Landing;
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let landing = matches!(self.search, Search::Landing);

        let mut header = column![].spacing(16).align_x(Center).width(Fill);
        if landing {
            header = header.push(
                column![
                    text("LIBRÚJULA").size(56).style(theme::brand_text),
                    text("El Netflix Literario")
                        .size(18)
                        .style(theme::subtitle_text),
                ]
                .spacing(4)
                .align_x(Center),
            );
        } else {
            header = header.push(
                mouse_area(text("LIBRÚJULA").size(22).style(theme::brand_text))
                    .on_press(Message::Reset),
            );
        }

        header = header.push(
            container(search_input::view(&self.query, self.is_loading()))
                .width(Fill)
                .max_width(720),
        );

        if let Some(status) = self.status_line() {
            header = header.push(text(status).size(15).style(theme::status_text));
        }

        let content: Element<'_, Message> = if landing {
            container(header)
                .width(Fill)
                .height(Fill)
                .align_x(Center)
                .align_y(Center)
                .into()
        } else {
            column![header, results::view(&self.search)]
                .spacing(24)
                .into()
        };

        container(content)
            .width(Fill)
            .height(Fill)
            .padding(Padding::new(32.0))
            .style(theme::main_container)
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    // ---- Search lifecycle ----

    fn submit_search(&mut self) -> Task<Message> {
        if self.query.trim().is_empty() {
            return Task::none();
        }

        self.seq += 1;
        let seq = self.seq;
        let query = self.query.clone();
        self.search = Search::Searching {
            query: query.clone(),
        };

        let client = self.client.clone();
        let base_url = self.config.api.base_url.clone();
        Task::perform(api::search(client, base_url, query), move |outcome| {
            Message::ResponseReceived {
                seq,
                outcome: outcome.map_err(|e| e.to_string()),
            }
        })
    }

    fn apply_response(&mut self, seq: u64, outcome: Result<ApiResponse, String>) -> Task<Message> {
        if seq != self.seq {
            tracing::debug!("Discarding stale response (seq {} != {})", seq, self.seq);
            return Task::none();
        }

        let query = match &self.search {
            Search::Searching { query } => query.clone(),
            _ => return Task::none(),
        };

        let response = match outcome {
            Ok(response) => response,
            Err(cause) => {
                tracing::warn!("Recommendation request failed: {}", cause);
                self.search = Search::Error {
                    message: CONNECTION_ERROR.to_string(),
                };
                return Task::none();
            }
        };

        if let Some(error) = response.error {
            self.search = Search::Error { message: error };
            return Task::none();
        }

        let status = match response.basado_en {
            Some(seed) => format!("Porque leíste: \"{}\"", seed),
            None => format!("Resultados para: \"{}\"", query),
        };

        if response.recomendaciones.is_empty() {
            self.search = Search::Empty { status };
            return Task::none();
        }

        let cards: Vec<Card> = response
            .recomendaciones
            .into_iter()
            .map(|book| Card::new(book.into()))
            .collect();

        let covers: Vec<Task<Message>> = cards
            .iter()
            .filter_map(|card| card.book.cover_url.clone())
            .map(|url| self.fetch_cover(url))
            .collect();

        self.search = Search::Success { status, cards };
        Task::batch(covers)
    }

    fn fetch_cover(&self, url: String) -> Task<Message> {
        let client = self.client.clone();
        let fetch_url = url.clone();
        Task::perform(api::fetch_cover(client, fetch_url), move |result| {
            match result {
                Ok(bytes) => Message::CoverLoaded {
                    url: url.clone(),
                    handle: image::Handle::from_bytes(bytes),
                },
                Err(cause) => {
                    tracing::debug!("Cover fetch failed for {}: {}", url, cause);
                    Message::CoverFailed { url: url.clone() }
                }
            }
        })
    }

    /// Apply a cover outcome to every card still waiting on this URL.
    /// Keying by URL (item identity) keeps failure state attached to the
    /// right book even if a later response reorders the list.
    fn set_cover(&mut self, url: &str, cover: Cover) {
        if let Search::Success { cards, .. } = &mut self.search {
            for card in cards.iter_mut() {
                if card.book.cover_url.as_deref() == Some(url)
                    && matches!(card.cover, Cover::Loading)
                {
                    card.cover = cover.clone();
                }
            }
        }
    }

    // ---- Derived state ----

    fn is_loading(&self) -> bool {
        matches!(self.search, Search::Searching { .. })
    }

    fn status_line(&self) -> Option<&str> {
        match &self.search {
            Search::Success { status, .. } | Search::Empty { status } => Some(status),
            Search::Error { message } => Some(message),
            _ => None,
        }
    }
}
