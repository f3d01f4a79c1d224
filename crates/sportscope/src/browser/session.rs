//! Dispatch of controller commands to a rendering surface.
//!
//! [`Session`] pairs the [`Dashboard`] with something that can display its
//! projections. Event listeners call [`Session::dispatch`] with the
//! controller method to run; the session then re-renders whatever the
//! returned [`Command`] names.

use sportscope_core::{Command, Dashboard, DetailView, HeaderView, RadarChart, TableRowView};
use tracing::trace;

/// A place projections are rendered to.
pub trait Surface {
    /// Error raised by the underlying rendering API.
    type Error;

    /// Replace all table rows.
    fn render_table(&mut self, rows: &[TableRowView]) -> Result<(), Self::Error>;

    /// Update the sort indicators of the column headers.
    fn render_headers(&mut self, headers: &[HeaderView]) -> Result<(), Self::Error>;

    /// Show the detail panel and chart, or the empty state when nothing is selected.
    fn render_detail(
        &mut self,
        detail: Option<&DetailView>,
        chart: Option<&RadarChart>,
    ) -> Result<(), Self::Error>;
}

/// Dashboard state bound to a surface.
#[derive(Debug)]
pub struct Session<S> {
    dashboard: Dashboard,
    surface: S,
}

impl<S: Surface> Session<S> {
    pub const fn new(dashboard: Dashboard, surface: S) -> Self {
        Self { dashboard, surface }
    }

    pub const fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Run one controller operation and render the resulting command.
    pub fn dispatch(
        &mut self,
        operation: impl FnOnce(&mut Dashboard) -> Command,
    ) -> Result<Command, S::Error> {
        let command = operation(&mut self.dashboard);
        self.apply(&command)?;
        Ok(command)
    }

    /// Re-render everything.
    pub fn render_all(&mut self) -> Result<(), S::Error> {
        self.apply(&Command::render_all())
    }

    fn apply(&mut self, command: &Command) -> Result<(), S::Error> {
        trace!(?command, "applying render command");
        if command.renders_table() {
            self.surface.render_table(&self.dashboard.table())?;
            self.surface.render_headers(&self.dashboard.headers())?;
        }
        if command.renders_detail() {
            let detail = self.dashboard.detail();
            let chart = self.dashboard.chart();
            self.surface.render_detail(detail.as_ref(), chart.as_ref())?;
        }
        Ok(())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use sportscope_core::SortField;
    use test_log::test;

    const SHEET: &str = "Sport,Overall Score,Athletics Score\nChess,40%,10%\nBoxing,90%,95%\n";

    #[derive(Debug, Default)]
    struct RecordingSurface {
        tables: Vec<Vec<String>>,
        headers: usize,
        details: Vec<Option<String>>,
        fail: bool,
    }

    impl Surface for RecordingSurface {
        type Error = String;

        fn render_table(&mut self, rows: &[TableRowView]) -> Result<(), String> {
            if self.fail {
                return Err("detached".to_string());
            }
            self.tables
                .push(rows.iter().map(|r| r.display_name.clone()).collect());
            Ok(())
        }

        fn render_headers(&mut self, _headers: &[HeaderView]) -> Result<(), String> {
            self.headers += 1;
            Ok(())
        }

        fn render_detail(
            &mut self,
            detail: Option<&DetailView>,
            chart: Option<&RadarChart>,
        ) -> Result<(), String> {
            assert_eq!(detail.is_some(), chart.is_some());
            self.details.push(detail.map(|d| d.title.clone()));
            Ok(())
        }
    }

    fn session() -> Session<RecordingSurface> {
        Session::new(Dashboard::new(), RecordingSurface::default())
    }

    #[test]
    fn test_load_renders_everything() {
        let mut session = session();
        let cmd = session.dispatch(|d| d.on_data_loaded(SHEET)).unwrap();

        assert_eq!(cmd, Command::render_all());
        let surface = session.surface();
        assert_eq!(surface.tables, [vec!["Boxing".to_string(), "Chess".to_string()]]);
        assert_eq!(surface.headers, 1);
        assert_eq!(surface.details, [Some("Boxing".to_string())]);
    }

    #[test]
    fn test_header_click_renders_table_only() {
        let mut session = session();
        session.dispatch(|d| d.on_data_loaded(SHEET)).unwrap();
        session.dispatch(|d| d.on_header_click(SortField::Name)).unwrap();

        let surface = session.surface();
        assert_eq!(surface.tables.len(), 2);
        assert_eq!(surface.tables[1], ["Chess", "Boxing"]);
        assert_eq!(surface.headers, 2);
        assert_eq!(surface.details.len(), 1);
    }

    #[test]
    fn test_stale_row_renders_nothing() {
        let mut session = session();
        session.dispatch(|d| d.on_data_loaded(SHEET)).unwrap();
        let cmd = session.dispatch(|d| d.on_row_click("Curling")).unwrap();

        assert!(cmd.is_none());
        assert_eq!(session.surface().tables.len(), 1);
        assert_eq!(session.surface().details.len(), 1);
    }

    #[test]
    fn test_failed_load_shows_empty_state() {
        let mut session = session();
        session.dispatch(|d| d.on_load_failed("offline")).unwrap();

        assert_eq!(session.surface().tables, [Vec::<String>::new()]);
        assert_eq!(session.surface().details, [None]);
        assert!(session.dashboard().records().is_empty());
    }

    #[test]
    fn test_surface_error_propagates() {
        let mut session = session();
        session.surface.fail = true;
        let err = session.dispatch(|d| d.on_data_loaded(SHEET)).unwrap_err();

        assert_eq!(err, "detached");
        // State still advanced; the next successful render catches up.
        assert_eq!(session.dashboard().records().len(), 2);
        session.surface.fail = false;
        session.render_all().unwrap();
        assert_eq!(session.surface().details, [Some("Boxing".to_string())]);
    }
}
