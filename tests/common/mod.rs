#![allow(dead_code)]

pub mod command;
pub mod file;

/// Lines of the audit log with their `[timestamp] ` prefix stripped
pub fn log_messages(root: &std::path::Path) -> Vec<String> {
    let content = std::fs::read_to_string(root.join("logs").join("fic.log"))
        .unwrap_or_else(|e| panic!("Failed to read audit log under {:?}: {}", root, e));

    content
        .lines()
        .map(|line| match line.split_once("] ") {
            Some((_, message)) => message.to_string(),
            None => line.to_string(),
        })
        .collect()
}
