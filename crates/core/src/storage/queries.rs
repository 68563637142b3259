//! SQL statements used by [`TodoModel`](super::TodoModel).
//!
//! Pure data, no I/O. Placeholders are positional (`?1`, `?2`, ...).

pub const SELECT_TODOS: &str = r#"
SELECT id, "order", title, completed
FROM todos
"#;

pub const SELECT_TODO_BY_ID: &str = r#"
SELECT id, "order", title, completed
FROM todos
WHERE id = ?1
"#;

pub const INSERT_TODO: &str = r#"
INSERT INTO todos ("order", title, completed)
VALUES (?1, ?2, ?3)
RETURNING id
"#;

pub const UPDATE_TODO: &str = r#"
UPDATE todos
SET "order" = ?1, title = ?2, completed = ?3
WHERE id = ?4
"#;

pub const DELETE_TODOS: &str = r#"
DELETE FROM todos
"#;

pub const DELETE_TODO: &str = r#"
DELETE FROM todos
WHERE id = ?1
"#;
