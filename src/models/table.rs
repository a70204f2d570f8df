use std::fmt;

/// The item tables exposed over HTTP. All three share the
/// `(id, name, quantity)` schema.
///
/// This enum is the only source of table names that reach SQL text, so a
/// request can never choose which table a statement touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemTable {
    Groceries,
    Monthlies,
    Electrical,
}

impl ItemTable {
    pub const ALL: [ItemTable; 3] = [
        ItemTable::Groceries,
        ItemTable::Monthlies,
        ItemTable::Electrical,
    ];

    /// Table name, also used as the route segment
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemTable::Groceries => "groceries",
            ItemTable::Monthlies => "monthlies",
            ItemTable::Electrical => "electrical",
        }
    }

    /// `/groceries`
    pub fn collection_path(&self) -> String {
        format!("/{}", self.as_str())
    }

    /// `/groceries/:id`
    pub fn member_path(&self) -> String {
        format!("/{}/:id", self.as_str())
    }
}

impl fmt::Display for ItemTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_names() {
        let names: Vec<&str> = ItemTable::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(names, vec!["groceries", "monthlies", "electrical"]);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(ItemTable::Monthlies.collection_path(), "/monthlies");
        assert_eq!(ItemTable::Electrical.member_path(), "/electrical/:id");
        assert_eq!(ItemTable::Groceries.to_string(), "groceries");
    }
}
