//! WASM application entry point.

use super::canvas2d::RadarRenderer;
use super::dom::DomSurface;
use super::events::{ClickHandler, EventBindings};
use super::fetch::fetch_text;
use super::logging::init_logging;
use super::session::Session;
use crate::AppError;
use sportscope_core::{Command, Dashboard, DashboardConfig};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{window, HtmlCanvasElement};

type SharedSession = Rc<RefCell<Session<DomSurface>>>;

/// Dashboard bound to the current page.
#[wasm_bindgen]
pub struct App {
    session: SharedSession,
    data_url: String,
    _bindings: EventBindings,
}

#[wasm_bindgen]
impl App {
    /// Attach to the page, optionally overriding defaults with a JSON config.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<App, JsValue> {
        console_error_panic_hook::set_once();

        let config = match config_json {
            Some(json) => DashboardConfig::from_json(&json).map_err(AppError::from)?,
            None => DashboardConfig::default(),
        };
        Self::with_config(config).map_err(Into::into)
    }

    /// Fetch the score sheet and render it.
    ///
    /// A failed fetch is logged and leaves an empty, usable dashboard; the
    /// returned promise resolves either way.
    pub fn start(&self) -> js_sys::Promise {
        let session = Rc::clone(&self.session);
        let url = self.data_url.clone();

        future_to_promise(async move {
            let loaded = fetch_text(&url).await;
            let result = session.borrow_mut().dispatch(|dashboard| match loaded {
                Ok(text) => dashboard.on_data_loaded(text),
                Err(err) => dashboard.on_load_failed(err.to_string()),
            });
            result.map(|_| JsValue::UNDEFINED)
        })
    }

    /// Handle a click on the header with the given `data-key`.
    #[wasm_bindgen(js_name = onHeaderClick)]
    pub fn on_header_click(&self, key: &str) -> Result<(), JsValue> {
        dispatch(&self.session, |dashboard| dashboard.on_header_key(key))
    }

    /// Handle a click on the row of the named record.
    #[wasm_bindgen(js_name = onRowClick)]
    pub fn on_row_click(&self, name: &str) -> Result<(), JsValue> {
        dispatch(&self.session, |dashboard| dashboard.on_row_click(name))
    }

    /// Replace the data with `text` instead of fetching it.
    #[wasm_bindgen(js_name = loadText)]
    pub fn load_text(&self, text: String) -> Result<(), JsValue> {
        dispatch(&self.session, |dashboard| dashboard.on_data_loaded(text))
    }

    /// Current projections as JSON.
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        let snapshot = self.session.borrow().dashboard().snapshot();
        serde_json::to_string(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Re-render everything from the current state.
    pub fn render(&self) -> Result<(), JsValue> {
        self.session.borrow_mut().render_all()
    }
}

impl App {
    /// Attach to the page with an already validated configuration.
    pub fn with_config(config: DashboardConfig) -> Result<Self, AppError> {
        let document = window()
            .ok_or_else(|| AppError::Dom("no window".to_string()))?
            .document()
            .ok_or_else(|| AppError::Dom("no document".to_string()))?;

        let ids = &config.elements;
        let canvas = document
            .get_element_by_id(&ids.radar_canvas)
            .ok_or_else(|| AppError::missing(&ids.radar_canvas))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| AppError::Dom(format!("'{}' is not a canvas", ids.radar_canvas)))?;
        let radar = RadarRenderer::new(canvas, config.chart.clone())?;
        let surface = DomSurface::new(document, ids, radar)?;

        let dashboard = Dashboard::new().with_scale(config.chart.range);
        let session = Rc::new(RefCell::new(Session::new(dashboard, surface)));
        let bindings = bind_events(&session).map_err(|e| AppError::Dom(format!("{e:?}")))?;
        info!(listeners = bindings.len(), url = %config.data_url, "dashboard attached");

        Ok(Self {
            session,
            data_url: config.data_url,
            _bindings: bindings,
        })
    }
}

fn dispatch(
    session: &SharedSession,
    operation: impl FnOnce(&mut Dashboard) -> Command,
) -> Result<(), JsValue> {
    session.borrow_mut().dispatch(operation).map(|_| ())
}

fn bind_events(session: &SharedSession) -> Result<EventBindings, JsValue> {
    let mut bindings = EventBindings::new();

    let shared = Rc::clone(session);
    let on_header: ClickHandler = Rc::new(move |key: &str| {
        if let Err(e) = dispatch(&shared, |dashboard| dashboard.on_header_key(key)) {
            error!(?e, key, "failed to render after header click");
        }
    });
    let shared = Rc::clone(session);
    let on_row: ClickHandler = Rc::new(move |name: &str| {
        if let Err(e) = dispatch(&shared, |dashboard| dashboard.on_row_click(name)) {
            error!(?e, name, "failed to render after row click");
        }
    });

    let state = session.borrow();
    for th in state.surface().header_elements() {
        bindings.bind_header(th, Rc::clone(&on_header))?;
    }
    bindings.bind_rows(state.surface().table_body(), on_row)?;
    Ok(bindings)
}

/// Install the panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    init_logging();
}
