//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use roster_core::Student;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a note on stderr.
pub fn note(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

fn cell(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

/// Print students as a table, or as one JSON object per line.
pub fn students(rows: &[&Student], as_json: bool) -> Result<()> {
    if as_json {
        for student in rows {
            json(student)?;
        }
        return Ok(());
    }

    let id_width = rows
        .iter()
        .map(|s| s.id.map_or(1, |id| id.to_string().len()))
        .max()
        .unwrap_or(0)
        .max(2);
    let name_width = rows
        .iter()
        .map(|s| cell(&s.name).chars().count())
        .max()
        .unwrap_or(0)
        .max(4);
    let email_width = rows
        .iter()
        .map(|s| cell(&s.email).chars().count())
        .max()
        .unwrap_or(0)
        .max(5);

    println!(
        "{}",
        format!(
            "{:<id_width$}  {:<name_width$}  {:<email_width$}  {}",
            "ID", "NAME", "EMAIL", "GENDER"
        )
        .bold()
    );
    for student in rows {
        let id = student.id.map_or_else(|| "-".to_string(), |id| id.to_string());
        println!(
            "{}  {:<name_width$}  {:<email_width$}  {}",
            format!("{:<id_width$}", id).cyan(),
            cell(&student.name),
            cell(&student.email),
            cell(&student.gender)
        );
    }
    Ok(())
}

/// Print a single student as labeled fields, or as pretty JSON.
pub fn student(student: &Student, as_json: bool) -> Result<()> {
    if as_json {
        return json_pretty(student);
    }

    let id = student.id.map_or_else(|| "-".to_string(), |id| id.to_string());
    field("ID", &id);
    field("Name", cell(&student.name));
    field("Email", cell(&student.email));
    field("Gender", cell(&student.gender));
    Ok(())
}
