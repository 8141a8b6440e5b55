/// The three free-text values recorded for one day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyEntry {
    pub login: String,
    pub logout: String,
    pub task: String,
}

impl DailyEntry {
    pub fn new(login: impl Into<String>, logout: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            logout: logout.into(),
            task: task.into(),
        }
    }
}
