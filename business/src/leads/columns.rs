use crate::table::{CellContent, ColumnDescriptor, DataTable};

use super::model::Lead;

pub const LEAD_SEARCH_KEYS: [&str; 6] = ["name", "email", "phone", "source", "campus", "program"];

fn or_dash(value: Option<&String>) -> CellContent {
    match value {
        Some(value) if !value.is_empty() => CellContent::text(value.as_str()),
        _ => CellContent::muted("-"),
    }
}

pub fn lead_columns() -> Vec<ColumnDescriptor<Lead>> {
    vec![
        ColumnDescriptor::row_number("sno", "S.NO"),
        ColumnDescriptor::text("name", "Name").sortable(true),
        ColumnDescriptor::text("email", "Email"),
        ColumnDescriptor::text("phone", "Phone"),
        ColumnDescriptor::text("source", "Source").sortable(true),
        ColumnDescriptor::custom("campus", "Campus", |lead: &Lead| {
            or_dash(lead.campus.as_ref())
        }),
        ColumnDescriptor::custom("program", "Program", |lead: &Lead| {
            or_dash(lead.program.as_ref())
        }),
        ColumnDescriptor::custom("status", "Status", |lead: &Lead| {
            CellContent::badge(lead.status.as_str(), lead.status.color())
        })
        .sortable(true),
        ColumnDescriptor::custom("interest_level", "Interest", |lead: &Lead| {
            CellContent::badge(lead.interest_level.as_str(), lead.interest_level.color())
        }),
        ColumnDescriptor::custom("conversion_probability", "Probability", |lead: &Lead| {
            CellContent::text(format!("{}%", lead.probability_percent()))
        })
        .sortable(true),
        ColumnDescriptor::custom("created_at", "Created", |lead: &Lead| {
            CellContent::text(lead.created_at.format("%d %b %Y").to_string())
        })
        .sortable(true),
    ]
}

/// The leads table: searchable, ten rows per page, rows not clickable.
pub fn lead_table() -> DataTable<Lead> {
    DataTable::builder()
        .columns(lead_columns())
        .searchable(true)
        .search_keys(LEAD_SEARCH_KEYS)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::test_leads;
    use crate::table::{QueryState, StatusLine};

    #[test]
    fn test_lead_table_searches_configured_keys() {
        let table = lead_table();
        let leads = test_leads();
        let mut query = QueryState::new();

        query.edit_search("MBA");
        let render = table.render(&leads, false, &mut query);
        let names: Vec<_> = render
            .body
            .rows()
            .iter()
            .map(|row| row.record.name.as_str())
            .collect();
        assert_eq!(names, vec!["Priya Sharma", "Vikram Singh"]);

        // Status is shown but not searchable.
        query.edit_search("converted");
        let render = table.render(&leads, false, &mut query);
        assert_eq!(render.status, StatusLine::NoResults);
    }

    #[test]
    fn test_lead_cells() {
        let table = lead_table();
        let mut leads = test_leads();
        leads[0].campus = None;
        let mut query = QueryState::new();

        let render = table.render(&leads, false, &mut query);
        let first = &render.body.rows()[0];

        assert_eq!(first.cells[0].as_str(), "1");
        assert_eq!(first.cells[5], CellContent::muted("-"));
        assert_eq!(first.cells[7].as_str(), "new");
        assert_eq!(first.cells[9].as_str(), "85%");
        assert_eq!(first.cells[10].as_str(), "08 Dec 2024");
        assert_eq!(render.body.rows()[1].cells[9].as_str(), "0%");
        assert!(!render.navigable);
    }
}
