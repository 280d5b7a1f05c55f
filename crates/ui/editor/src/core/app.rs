use catalog::ApiClient;
use color_eyre::Result;

use crate::{
    components::{
        Component,
        popup::{PopupComponent, render_backdrop},
        product_form::ProductForm,
    },
    config::Config,
    core::{r#loop::AppLoop, state::FormState},
    tui::Frame,
};

pub struct EditorApp {
    pub config: Config,
    pub client: ApiClient,
    pub state: FormState,
    pub page: ProductForm,
    pub popup: Option<Box<dyn PopupComponent>>,
}

impl EditorApp {
    pub fn new(config: Config) -> Result<Self> {
        let client = ApiClient::new(config.api_config())?;
        let state = FormState::new(config.form.standard_change);
        Ok(Self {
            config,
            client,
            state,
            page: ProductForm::new(),
            popup: None,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        AppLoop::new(self)?.run().await
    }

    /// Page first, then the popup (over a backdrop when modal).
    pub fn render(&mut self, frame: &mut Frame<'_>) -> Result<()> {
        let area = frame.area();
        self.page.draw(frame, area, &self.state)?;
        if let Some(popup) = self.popup.as_mut() {
            if popup.is_modal() {
                render_backdrop(frame, area);
            }
            popup.draw(frame, area, &self.state)?;
        }
        Ok(())
    }
}

/// Fetch the category tree once; returns the number of top-level categories.
pub async fn health(config: &Config) -> Result<usize> {
    let client = ApiClient::new(config.api_config())?;
    let categories = client.categories().await?;
    Ok(categories.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, routing::get};
    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend};
    use serde_json::json;

    use crate::{
        components::popups::AlertPopup,
        config::{ApiSettings, AppConfig, FormSettings},
        core::state::StandardChangePolicy,
    };

    fn config(base_url: String) -> Config {
        Config {
            config: AppConfig::default(),
            api: ApiSettings {
                base_url,
                timeout_secs: 5,
            },
            form: FormSettings {
                standard_change: StandardChangePolicy::KeepSelections,
            },
            tick_rate: 4.0,
            frame_rate: 30.0,
        }
    }

    #[tokio::test]
    async fn health_counts_categories() {
        let router = Router::new().route(
            "/categories",
            get(|| async {
                Json(json!([
                    {"id": 1, "title": "Lighting", "subcategories": []},
                    {"id": 2, "title": "Heating", "subcategories": []}
                ]))
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        assert_eq!(health(&config(format!("http://{addr}"))).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn health_fails_without_a_server() {
        // port 9 (discard) is not listening on loopback
        assert!(health(&config("http://127.0.0.1:9".into())).await.is_err());
    }

    #[test]
    fn new_app_uses_the_configured_policy() {
        let app = EditorApp::new(config("http://localhost:3000".into())).unwrap();
        assert_eq!(app.state.policy, StandardChangePolicy::KeepSelections);
        assert!(app.popup.is_none());
    }

    #[test]
    fn popup_is_drawn_over_the_form() {
        let mut app = EditorApp::new(config("http://localhost:3000".into())).unwrap();
        app.popup = Some(Box::new(AlertPopup::new("Product submitted", "{}")));

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| app.render(f).unwrap()).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let screen: String = (0..30)
            .flat_map(|y| (0..80).map(move |x| (x, y)))
            .map(|(x, y)| buffer[(x, y)].symbol().to_string())
            .collect();

        assert!(screen.contains("New product"), "{screen}");
        assert!(screen.contains("Product submitted"), "{screen}");
    }
}
