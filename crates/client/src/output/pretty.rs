//! Pretty output formatting.

use todolist_core::todo::ToDo;

/// Format a ToDo for display.
pub fn format_todo(todo: &ToDo) -> String {
    format!(
        "{}\n  ID: {}\n  Date: {}",
        todo.name(),
        todo.id(),
        todo.date()
    )
}

/// Format ToDos for display.
pub fn format_todos(todos: &[ToDo]) -> String {
    if todos.is_empty() {
        return "No todos found.".to_string();
    }
    let mut output = format!("TODOS ({})\n", todos.len());
    output.push_str(&"-".repeat(40));
    for todo in todos {
        output.push_str(&format!("\n{}", format_todo(todo)));
        output.push('\n');
    }
    output
}
