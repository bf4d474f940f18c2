use crate::table::{CellContent, ColumnDescriptor, DataTable};

use super::model::{Applicant, application_url};

pub const APPLICANT_SEARCH_KEYS: [&str; 6] = [
    "name",
    "phone",
    "email",
    "campus",
    "program",
    "applicationStatus",
];

/// "jANE doe" -> "Jane doe".
fn sentence_case(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => lower,
    }
}

fn upper_or_na(text: &str) -> CellContent {
    if text.is_empty() {
        CellContent::muted("N/A")
    } else {
        CellContent::text(text.to_uppercase())
    }
}

pub fn applicant_columns() -> Vec<ColumnDescriptor<Applicant>> {
    vec![
        ColumnDescriptor::row_number("index", "S.NO"),
        ColumnDescriptor::custom("name", "Student Name", |a: &Applicant| {
            CellContent::text(sentence_case(&a.name))
        })
        .sortable(true),
        ColumnDescriptor::text("phone", "Phone Number").sortable(true),
        ColumnDescriptor::text("email", "Email").sortable(true),
        ColumnDescriptor::custom("program", "Program", |a: &Applicant| {
            upper_or_na(&a.program)
        }),
        ColumnDescriptor::custom("specialization", "Specialization", |a: &Applicant| {
            upper_or_na(&a.specialization)
        }),
        ColumnDescriptor::text("campus", "Campus").sortable(true),
        ColumnDescriptor::custom("applicationStatus", "Application Status", |a: &Applicant| {
            CellContent::badge(a.display_status(), a.status_color())
        })
        .sortable(true),
    ]
}

/// The applicants table. Rows open the applicant's application when one is known.
pub fn applicant_table() -> DataTable<Applicant> {
    DataTable::builder()
        .columns(applicant_columns())
        .searchable(true)
        .search_keys(APPLICANT_SEARCH_KEYS)
        .row_url(Box::new(application_url))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Navigator, QueryState, RowActivation};

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl Navigator for Recorder {
        fn navigate(&mut self, url: &str) {
            self.0.push(url.to_owned());
        }
    }

    fn applicants() -> Vec<Applicant> {
        vec![
            Applicant {
                name: "jANE doe".to_owned(),
                email: "jane@example.com".to_owned(),
                program: "b.tech".to_owned(),
                application_status: Some("approved".to_owned()),
                application_id: Some("STU-1".to_owned()),
                ..Applicant::default()
            },
            Applicant {
                name: "jon roe".to_owned(),
                email: "jon@example.com".to_owned(),
                application_status: Some("Unknown".to_owned()),
                ..Applicant::default()
            },
        ]
    }

    #[test]
    fn test_applicant_cells() {
        let table = applicant_table();
        let data = applicants();
        let mut query = QueryState::new();

        let render = table.render(&data, false, &mut query);
        let rows = render.body.rows();

        assert!(render.navigable);
        assert_eq!(rows[0].cells[1].as_str(), "Jane doe");
        assert_eq!(rows[0].cells[4].as_str(), "B.TECH");
        assert_eq!(rows[1].cells[4], CellContent::muted("N/A"));
        assert_eq!(rows[1].cells[7].as_str(), "Unknown");
    }

    #[test]
    fn test_search_matches_application_status() {
        let table = applicant_table();
        let data = applicants();
        let mut query = QueryState::new();

        query.edit_search("APPROVED");
        let render = table.render(&data, false, &mut query);

        assert_eq!(render.body.rows().len(), 1);
        assert_eq!(render.body.rows()[0].record.email, "jane@example.com");
    }

    #[test]
    fn test_row_activation_follows_application_url() {
        let table = applicant_table();
        let data = applicants();
        let mut navigator = Recorder::default();

        assert_eq!(
            table.activate_row(&data[0], &mut navigator),
            RowActivation::Navigated("/admin/application/view/STU-1".to_owned())
        );
        assert_eq!(
            table.activate_row(&data[1], &mut navigator),
            RowActivation::Suppressed
        );
        assert_eq!(navigator.0, vec!["/admin/application/view/STU-1"]);
    }
}
