//! Generic searchable, paginated table widget.
//!
//! The widget paints a [`TableRender`] produced by the business-layer
//! [`DataTable`]: search box, header, one page of rows (or a placeholder row),
//! status line and page controls. Row clicks go through
//! [`DataTable::activate_row`].
//!
//! [`TableRender`]: leadloop_business::table::TableRender

mod cells;
mod footer;

use std::hash::Hash;

use egui::{Align, Id, Layout, Sense, TextEdit, Ui};
use egui_extras::{Column, TableBuilder};
use leadloop_business::table::{
    DataTable, Navigator, QueryState, Record, RowActivation, TableBody,
};

pub use footer::PageMove;

/// Hint shown in the empty search box.
pub const SEARCH_HINT: &str = "Search...";

const ROW_HEIGHT: f32 = 28.0;
const PLACEHOLDER_ROW_HEIGHT: f32 = 72.0;
const HEADER_HEIGHT: f32 = 24.0;
const SEARCH_WIDTH: f32 = 320.0;

/// A [`DataTable`] bound to one frame's data.
pub struct DataTableWidget<'a, T> {
    table: &'a DataTable<T>,
    data: &'a [T],
    loading: bool,
    id: Id,
}

impl<'a, T: Record> DataTableWidget<'a, T> {
    pub fn new(table: &'a DataTable<T>, data: &'a [T]) -> Self {
        Self {
            table,
            data,
            loading: false,
            id: Id::new("data_table"),
        }
    }

    /// Shows the loading placeholder instead of rows.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Needed when more than one table is visible at once.
    pub fn id_salt(mut self, salt: impl Hash) -> Self {
        self.id = Id::new(salt);
        self
    }

    /// Draws the table and applies this frame's search edits, page moves and row clicks.
    pub fn show(
        self,
        ui: &mut Ui,
        query: &mut QueryState,
        navigator: &mut dyn Navigator,
    ) -> Option<RowActivation> {
        let Self {
            table,
            data,
            loading,
            id,
        } = self;

        if table.is_searchable() {
            let mut search = query.search_query().to_owned();
            let response = ui.add(
                TextEdit::singleline(&mut search)
                    .id_salt(id.with("search"))
                    .hint_text(SEARCH_HINT)
                    .desired_width(SEARCH_WIDTH),
            );
            if response.changed() {
                query.edit_search(search);
            }
            ui.add_space(8.0);
        }

        let render = table.render(data, loading, query);
        let mut clicked = None;

        ui.push_id(id, |ui| {
            if render.navigable {
                // Selectable labels would swallow the row click.
                ui.style_mut().interaction.selectable_labels = false;
            }

            let columns = render.headers.len().max(1);
            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .cell_layout(Layout::left_to_right(Align::Center))
                .columns(Column::auto().at_least(40.0), columns - 1)
                .column(Column::remainder().at_least(60.0));
            if render.navigable {
                builder = builder.sense(Sense::click());
            }

            builder
                .header(HEADER_HEIGHT, |mut header| {
                    for label in &render.headers {
                        header.col(|ui| cells::render_header_cell(ui, label));
                    }
                })
                .body(|mut body| match &render.body {
                    TableBody::Rows(rows) => {
                        body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                            let rendered = &rows[row.index()];
                            for cell in &rendered.cells {
                                row.col(|ui| cells::render_cell(ui, cell));
                            }
                            if row.response().clicked() {
                                clicked = Some(rendered.record);
                            }
                        });
                    }
                    placeholder => {
                        let text = placeholder.placeholder().unwrap_or_default();
                        body.row(PLACEHOLDER_ROW_HEIGHT, |mut row| {
                            row.col(|ui| cells::render_placeholder_cell(ui, text));
                            for _ in 1..columns {
                                row.col(|_| {});
                            }
                        });
                    }
                });
        });

        ui.add_space(8.0);
        match footer::render_footer(ui, &render.status, &render.controls) {
            Some(PageMove::Previous) => query.previous_page(),
            Some(PageMove::Next) => query.next_page(render.controls.total_pages),
            None => {}
        }

        clicked.map(|record| table.activate_row(record, navigator))
    }
}

#[cfg(test)]
mod data_table_widget_test {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use leadloop_business::table::{ColumnDescriptor, DataTable, Navigator, QueryState};
    use serde_json::{Value, json};

    use super::DataTableWidget;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl Navigator for Recorder {
        fn navigate(&mut self, url: &str) {
            self.0.push(url.to_owned());
        }
    }

    struct TableState {
        table: DataTable<Value>,
        data: Vec<Value>,
        loading: bool,
        query: QueryState,
        navigator: Recorder,
    }

    fn people(count: usize) -> Vec<Value> {
        (0..count)
            .map(|i| json!({ "name": format!("Person {i:02}"), "city": "Guntur" }))
            .collect()
    }

    fn table_state(data: Vec<Value>) -> TableState {
        TableState {
            table: DataTable::builder()
                .columns(vec![
                    ColumnDescriptor::row_number("index", "S.NO"),
                    ColumnDescriptor::text("name", "Name"),
                    ColumnDescriptor::text("city", "City"),
                ])
                .searchable(true)
                .search_keys(["name"])
                .build(),
            data,
            loading: false,
            query: QueryState::new(),
            navigator: Recorder::default(),
        }
    }

    fn harness(state: TableState) -> Harness<'static, TableState> {
        Harness::new_ui_state(
            |ui, state: &mut TableState| {
                DataTableWidget::new(&state.table, &state.data)
                    .loading(state.loading)
                    .show(ui, &mut state.query, &mut state.navigator);
            },
            state,
        )
    }

    #[test]
    fn test_renders_headers_rows_and_status() {
        let mut harness = harness(table_state(people(3)));
        harness.step();

        assert!(harness.query_by_label("S.NO").is_some());
        assert!(harness.query_by_label("Name").is_some());
        assert!(harness.query_by_label("Person 02").is_some());
        assert!(harness.query_by_label_contains("Showing 1–3 of 3").is_some());
    }

    #[test]
    fn test_loading_shows_placeholder() {
        let mut state = table_state(people(3));
        state.loading = true;
        let mut harness = harness(state);
        harness.step();

        // Placeholder row and status line.
        assert_eq!(harness.query_all_by_label("Loading...").count(), 2);
        assert!(harness.query_by_label("Person 00").is_none());
    }

    #[test]
    fn test_no_results_placeholder() {
        let mut state = table_state(people(3));
        state.query.edit_search("nobody");
        let mut harness = harness(state);
        harness.step();

        assert!(harness.query_by_label("No results.").is_some());
        assert!(harness.query_by_label("No results").is_some());
    }

    #[test]
    fn test_next_and_previous_buttons_move_pages() {
        let mut harness = harness(table_state(people(23)));
        harness.step();
        assert!(harness.query_by_label("Person 00").is_some());

        harness.get_by_label("Next").click();
        harness.step();
        harness.step();
        assert_eq!(harness.state().query.page_index(), 1);
        assert!(harness.query_by_label("Person 10").is_some());
        assert!(harness.query_by_label_contains("Showing 11–20 of 23").is_some());

        harness.get_by_label("Next").click();
        harness.step();
        harness.step();
        assert_eq!(harness.state().query.page_index(), 2);

        // Next is disabled on the last page.
        harness.get_by_label("Next").click();
        harness.step();
        harness.step();
        assert_eq!(harness.state().query.page_index(), 2);

        harness.get_by_label("Previous").click();
        harness.step();
        harness.step();
        assert_eq!(harness.state().query.page_index(), 1);
    }

    #[test]
    fn test_previous_disabled_on_first_page() {
        let mut harness = harness(table_state(people(23)));
        harness.step();

        harness.get_by_label("Previous").click();
        harness.step();
        harness.step();

        assert_eq!(harness.state().query.page_index(), 0);
        assert!(harness.state().navigator.0.is_empty());
    }

    #[test]
    fn test_search_edit_resets_page_and_filters() {
        let mut harness = harness(table_state(people(23)));
        harness.step();
        harness.get_by_label("Next").click();
        harness.step();

        harness.state_mut().query.edit_search("person 2");
        harness.step();

        assert_eq!(harness.state().query.page_index(), 0);
        assert!(harness.query_by_label("Person 20").is_some());
        assert!(harness.query_by_label("Person 00").is_none());
        assert!(harness.query_by_label_contains("Showing 1–3 of 3").is_some());
    }
}
