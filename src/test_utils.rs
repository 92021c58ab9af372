#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use futures::FutureExt;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::{Frame, Terminal};
    use tokio::sync::Notify;

    use crate::api::{
        ApiError, ApiFuture, Article, Company, PipelineResponse, RecentSearch, SentimentApi,
        SentimentSummary, Suggestion,
    };
    use crate::app::App;
    use crate::config::{Config, SuggestConfig};
    use crate::suggest::SuggestController;
    use crate::worker::{Reply, ServiceHandle, ServiceRequest};

    pub const TEST_VIEWPORT: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 40,
    };

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Draw once on a `TestBackend` and return the buffer
    pub fn render_buffer<F>(width: u16, height: u16, draw: F) -> Buffer
    where
        F: FnOnce(&mut Frame),
    {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(draw).unwrap();
        terminal.backend().buffer().clone()
    }

    /// Buffer rows joined with newlines, styles dropped
    pub fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn suggestion(symbol: &str, company_name: &str) -> Suggestion {
        Suggestion::new(symbol, symbol, company_name)
    }

    pub fn recent_search(symbol: &str, company_name: &str) -> RecentSearch {
        RecentSearch {
            symbol: symbol.to_string(),
            company_name: company_name.to_string(),
            timestamp: "2025-01-05T10:00:00Z".to_string(),
        }
    }

    pub fn sample_pipeline(symbol: &str) -> PipelineResponse {
        PipelineResponse {
            company: Company {
                name: format!("{} Industries", symbol),
                symbol: Some(symbol.to_string()),
            },
            article_count: 2,
            sentiment_summary: SentimentSummary {
                sentiment_label: "Bullish".to_string(),
                overall_score: 3.4,
                bullish: 1,
                neutral: 1,
                bearish: 0,
                confidence: 0.873,
            },
            articles: vec![
                Article {
                    title: format!("{} hits record high", symbol),
                    url: "https://news.example/1".to_string(),
                    source: "Mint".to_string(),
                    published: "2025-01-05T10:00:00Z".to_string(),
                    sentiment: "bullish".to_string(),
                },
                Article {
                    title: "Markets end flat".to_string(),
                    url: "https://news.example/2".to_string(),
                    source: "ET".to_string(),
                    published: "2025-01-04T08:30:00Z".to_string(),
                    sentiment: "neutral".to_string(),
                },
            ],
        }
    }

    /// In-memory [`SentimentApi`] with scripted answers
    ///
    /// Lookups answer with one suggestion whose symbol is the upper-cased
    /// query. Lookups whose query starts with the gated prefix wait until
    /// the returned `Notify` is signalled.
    #[derive(Default)]
    pub struct ScriptedApi {
        gated_prefix: Option<String>,
        gate: Arc<Notify>,
        fail_lookups: bool,
        recent: Vec<RecentSearch>,
        fail_recent: bool,
    }

    impl ScriptedApi {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_gate(mut self, prefix: &str) -> (Self, Arc<Notify>) {
            self.gated_prefix = Some(prefix.to_string());
            let gate = Arc::clone(&self.gate);
            (self, gate)
        }

        pub fn failing_lookups(mut self) -> Self {
            self.fail_lookups = true;
            self
        }

        pub fn with_recent(mut self, recent: Vec<RecentSearch>) -> Self {
            self.recent = recent;
            self
        }

        pub fn failing_recent(mut self) -> Self {
            self.fail_recent = true;
            self
        }
    }

    impl SentimentApi for ScriptedApi {
        fn suggest(&self, query: &str) -> ApiFuture<Vec<Suggestion>> {
            let upper = query.to_uppercase();
            let gated = self
                .gated_prefix
                .as_deref()
                .is_some_and(|prefix| query.starts_with(prefix));
            let gate = Arc::clone(&self.gate);
            let fail = self.fail_lookups;

            async move {
                if gated {
                    gate.notified().await;
                }
                if fail {
                    return Err(ApiError::Network("scripted failure".to_string()));
                }
                Ok(vec![suggestion(&upper, &format!("{} Ltd", upper))])
            }
            .boxed()
        }

        fn recent(&self) -> ApiFuture<Vec<RecentSearch>> {
            let result = if self.fail_recent {
                Err(ApiError::Api {
                    code: 500,
                    message: "scripted failure".to_string(),
                })
            } else {
                Ok(self.recent.clone())
            };
            async move { result }.boxed()
        }

        fn analyze(&self, symbol: &str) -> ApiFuture<PipelineResponse> {
            let response = sample_pipeline(symbol);
            async move { Ok(response) }.boxed()
        }
    }

    /// Controller whose dropdown shows `suggestions` for `query`
    pub fn resolved_controller(query: &str, suggestions: Vec<Suggestion>) -> SuggestController {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let mut controller = SuggestController::new(&SuggestConfig::default());
        controller.attach(ServiceHandle::new(tx));

        let start = Instant::now();
        controller.set_query(query, start);
        assert!(controller.tick(start + Duration::from_millis(300)));

        let Ok(ServiceRequest::Suggest { request_id, .. }) = rx.try_recv() else {
            panic!("Expected a lookup request");
        };
        controller.apply_response(Reply {
            request_id,
            result: Ok(suggestions),
        });
        controller
    }

    /// App with no worker attached, for tests that drive state directly
    pub fn test_app() -> App {
        App::new(Config::default(), None, Instant::now(), TEST_VIEWPORT)
    }

    /// App wired to a test channel instead of a real worker
    pub fn test_app_with_channel() -> (App, tokio::sync::mpsc::UnboundedReceiver<ServiceRequest>) {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        let app = App::new(
            Config::default(),
            Some(ServiceHandle::new(tx)),
            Instant::now(),
            TEST_VIEWPORT,
        );
        (app, rx)
    }
}
