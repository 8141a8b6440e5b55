use crate::models::sheet::StatusSheet;

/// A user's monthly workbook: the "Status" sheet the app manages, plus any
/// other sheet found in the file, kept in their original order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusWorkbook {
    pub status: StatusSheet,
    /// Sheets after the first one, written back untouched.
    pub others: Vec<StatusSheet>,
}

impl StatusWorkbook {
    pub fn new(status: StatusSheet) -> Self {
        Self {
            status,
            others: Vec::new(),
        }
    }

    pub fn sheets(&self) -> impl Iterator<Item = &StatusSheet> {
        std::iter::once(&self.status).chain(self.others.iter())
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets().map(StatusSheet::name).collect()
    }
}
