//! Options for the jQuery tablesorter plugin.

use serde_json::{json, Map, Value};

pub const CREDIT_CARD_TABLE_ID: &str = "creditCardTable";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Tablesorter encodes ascending as 0 and descending as 1.
    fn code(self) -> u8 {
        match self {
            SortDirection::Asc => 0,
            SortDirection::Desc => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortableTableConfig {
    pub theme: String,
    pub header_template: String,
    pub widgets: Vec<String>,
    /// Even and odd row classes for the zebra widget.
    pub zebra: (String, String),
    /// Initial sort, column index and direction.
    pub sort_list: Vec<(usize, SortDirection)>,
    /// Columns whose headers do not sort.
    pub unsortable: Vec<usize>,
}

impl SortableTableConfig {
    /// Credit card list: sorted by card name, bonus categories not sortable.
    pub fn credit_cards() -> Self {
        Self {
            theme: "bootstrap".to_string(),
            header_template: "{content}".to_string(),
            widgets: vec!["zebra".to_string(), "columns".to_string()],
            zebra: ("even".to_string(), "odd".to_string()),
            sort_list: vec![(0, SortDirection::Asc)],
            unsortable: vec![5],
        }
    }

    /// Options object passed to `$(table).tablesorter(...)`.
    pub fn to_options(&self) -> Value {
        let headers: Map<String, Value> = self
            .unsortable
            .iter()
            .map(|column| (column.to_string(), json!({ "sorter": false })))
            .collect();
        let sort_list: Vec<[usize; 2]> = self
            .sort_list
            .iter()
            .map(|(column, direction)| [*column, direction.code() as usize])
            .collect();

        json!({
            "theme": self.theme,
            "headerTemplate": self.header_template,
            "widgets": self.widgets,
            "widgetOptions": {
                "zebra": [self.zebra.0, self.zebra.1]
            },
            "sortList": sort_list,
            "headers": headers
        })
    }
}
