use std::sync::Arc;

use iced::{window, Element, Size, Task, Theme};
use qa_client::ReqwestBackend;
use qa_core::{update, AppState, AppViewModel, Msg};
use qa_logging::{qa_info, qa_warn};

use super::config::{self, AppConfig};
use super::effects::EffectRunner;
use super::{logging, ui};

pub fn run_app() -> anyhow::Result<()> {
    let path = config::config_path();
    let loaded = AppConfig::read(&path);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        Ok(None) | Err(_) => AppConfig::default(),
    };

    logging::initialize(config.log.destination, config.log_level());
    match loaded {
        Ok(Some(_)) => qa_info!("Loaded config from {:?}", path),
        Ok(None) => qa_info!("No config at {:?}; using defaults", path),
        Err(err) => qa_warn!("{}. Using defaults.", err),
    }

    let client_config = config.client_config();
    qa_info!(
        "Backend base_url={} timeout={:?}",
        client_config.base_url,
        client_config.timeout
    );
    let backend = ReqwestBackend::new(client_config)?;
    let runner = EffectRunner::new(Arc::new(backend));

    iced::application(ui::constants::WINDOW_TITLE, QaApp::update, QaApp::view)
        .theme(QaApp::theme)
        .window(window::Settings {
            size: Size::new(config.window.width as f32, config.window.height as f32),
            position: window::Position::Centered,
            ..Default::default()
        })
        .run_with(move || QaApp::new(runner))
        .map_err(|err| anyhow::anyhow!("ui terminated: {err}"))
}

struct QaApp {
    state: AppState,
    view: AppViewModel,
    effects: EffectRunner,
}

impl QaApp {
    fn new(effects: EffectRunner) -> (Self, Task<Msg>) {
        let state = AppState::new();
        let view = state.view();
        (
            Self {
                state,
                view,
                effects,
            },
            Task::none(),
        )
    }

    fn update(&mut self, msg: Msg) -> Task<Msg> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.view = state.view();
        }
        self.state = state;
        self.effects.run(effects)
    }

    fn view(&self) -> Element<'_, Msg> {
        ui::render::render(&self.view)
    }

    fn theme(&self) -> Theme {
        Theme::TokyoNight
    }
}
