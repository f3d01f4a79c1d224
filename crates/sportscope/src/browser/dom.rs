//! DOM surface: table rows, header indicators and the detail panel.

use super::canvas2d::RadarRenderer;
use super::markup::{
    detail_lines, opacity_css, row_cells, HEADER_KEY_ATTR, ROW_NAME_ATTR, SORT_INDICATOR_CLASS,
    SORT_LABEL_CLASS, STAT_ITEM_CLASS, STAT_LABEL_CLASS, STAT_VALUE_CLASS,
};
use super::session::Surface;
use crate::AppError;
use sportscope_core::{DetailView, ElementIds, HeaderView, RadarChart, TableRowView};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// Handles to every element the dashboard writes into.
pub struct DomSurface {
    document: Document,
    table_body: Element,
    /// Header cells with their sort keys, in page order.
    headers: Vec<(String, Element)>,
    detail_title: Element,
    detail_subtitle: Element,
    detail_meta: Element,
    radar_stats: Element,
    radar: RadarRenderer,
    selected_class: String,
}

impl DomSurface {
    /// Resolve all configured elements.
    pub fn new(document: Document, ids: &ElementIds, radar: RadarRenderer) -> Result<Self, AppError> {
        let by_id = |id: &str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| AppError::missing(id))
        };

        let table_body = by_id(&ids.table_body)?;
        let detail_title = by_id(&ids.detail_title)?;
        let detail_subtitle = by_id(&ids.detail_subtitle)?;
        let detail_meta = by_id(&ids.detail_meta)?;
        let radar_stats = by_id(&ids.radar_stats)?;
        let headers = header_cells(&document, &ids.header_selector)?;

        Ok(Self {
            document,
            table_body,
            headers,
            detail_title,
            detail_subtitle,
            detail_meta,
            radar_stats,
            radar,
            selected_class: ids.selected_row_class.clone(),
        })
    }

    pub fn table_body(&self) -> &Element {
        &self.table_body
    }

    pub fn header_elements(&self) -> impl Iterator<Item = &Element> {
        self.headers.iter().map(|(_, th)| th)
    }

    fn element(&self, tag: &str, class: Option<&str>, text: &str) -> Result<Element, JsValue> {
        let el = self.document.create_element(tag)?;
        if let Some(class) = class {
            el.set_class_name(class);
        }
        el.set_text_content(Some(text));
        Ok(el)
    }

    /// Find or create the `.sort-indicator` span of a header cell.
    fn indicator(&self, th: &Element) -> Result<Element, JsValue> {
        if let Some(existing) = th.query_selector(&format!(".{SORT_INDICATOR_CLASS}"))? {
            return Ok(existing);
        }

        let text = th.text_content().unwrap_or_default();
        th.set_text_content(None);
        let label = self.element("span", Some(SORT_LABEL_CLASS), "")?;
        label.append_child(&self.element("span", None, text.trim())?)?;
        let indicator = self.element("span", Some(SORT_INDICATOR_CLASS), "")?;
        label.append_child(&indicator)?;
        th.append_child(&label)?;
        Ok(indicator)
    }
}

impl Surface for DomSurface {
    type Error = JsValue;

    fn render_table(&mut self, rows: &[TableRowView]) -> Result<(), JsValue> {
        self.table_body.set_inner_html("");
        for row in rows {
            let tr = self.document.create_element("tr")?;
            tr.set_attribute(ROW_NAME_ATTR, &row.name)?;
            if row.is_selected {
                tr.class_list().add_1(&self.selected_class)?;
            }
            for text in row_cells(row) {
                tr.append_child(&self.element("td", None, &text)?)?;
            }
            self.table_body.append_child(&tr)?;
        }
        Ok(())
    }

    fn render_headers(&mut self, headers: &[HeaderView]) -> Result<(), JsValue> {
        for view in headers {
            let cells = self
                .headers
                .iter()
                .filter(|(key, _)| key.eq_ignore_ascii_case(&view.key));
            for (_, th) in cells {
                let indicator = self.indicator(th)?;
                indicator.set_text_content(Some(&view.glyph.to_string()));
                if let Some(el) = indicator.dyn_ref::<HtmlElement>() {
                    el.style().set_property("opacity", &opacity_css(view.opacity))?;
                }
            }
        }
        Ok(())
    }

    fn render_detail(
        &mut self,
        detail: Option<&DetailView>,
        chart: Option<&RadarChart>,
    ) -> Result<(), JsValue> {
        let [title, subtitle, meta] = detail_lines(detail);
        self.detail_title.set_text_content(Some(&title));
        self.detail_subtitle.set_text_content(Some(&subtitle));
        self.detail_meta.set_text_content(Some(&meta));

        self.radar_stats.set_inner_html("");
        for point in detail.iter().flat_map(|d| &d.metric_series) {
            let item = self.element("div", Some(STAT_ITEM_CLASS), "")?;
            item.append_child(&self.element("div", Some(STAT_LABEL_CLASS), &point.label)?)?;
            item.append_child(&self.element("div", Some(STAT_VALUE_CLASS), &point.text)?)?;
            self.radar_stats.append_child(&item)?;
        }

        self.radar.draw(chart)
    }
}

fn header_cells(document: &Document, selector: &str) -> Result<Vec<(String, Element)>, AppError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|_| AppError::Dom(format!("invalid header selector '{selector}'")))?;

    let mut cells = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(th) = nodes.get(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        if let Some(key) = th.get_attribute(HEADER_KEY_ATTR) {
            cells.push((key, th));
        }
    }
    Ok(cells)
}
