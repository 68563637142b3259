use serde::{Deserialize, Serialize};

/// A single database row: column name to value.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// A todo item.
///
/// `id` is `None` until the todo has been persisted. Values are never
/// mutated in place; the builder-style methods consume `self` and return a
/// new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(default)]
    pub id: Option<i64>,
    pub order: i64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// Creates a new, not yet persisted todo.
    pub fn new(order: i64, title: impl Into<String>) -> Self {
        Self {
            id: None,
            order,
            title: title.into(),
            completed: false,
        }
    }

    /// Sets the completed flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Sets a specific ID for this todo.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the same todo without an ID.
    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_is_unpersisted_and_open() {
        let todo = Todo::new(3, "Write docs");

        assert_eq!(todo.id, None);
        assert_eq!(todo.order, 3);
        assert_eq!(todo.title, "Write docs");
        assert!(!todo.completed);
    }

    #[test]
    fn test_builders_return_new_values() {
        let todo = Todo::new(1, "Ship").with_completed(true).with_id(7);

        assert_eq!(todo.id, Some(7));
        assert!(todo.completed);
        assert_eq!(todo.clone().without_id().id, None);
    }

    #[test]
    fn test_serializes_absent_id_as_null() {
        let value = serde_json::to_value(Todo::new(1, "a")).unwrap();

        assert_eq!(
            value,
            json!({"id": null, "order": 1, "title": "a", "completed": false})
        );
    }

    #[test]
    fn test_deserialize_defaults_id_and_completed() {
        let todo: Todo = serde_json::from_str(r#"{"order":2,"title":"b"}"#).unwrap();

        assert_eq!(todo, Todo::new(2, "b"));
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let todo: Todo =
            serde_json::from_str(r#"{"order":2,"title":"b","priority":"high"}"#).unwrap();

        assert_eq!(todo.title, "b");
    }
}
