//! Plain-text rendering of controller state for the terminal.

use crate::types::Repository;

pub fn rule() -> String {
    "=".repeat(60)
}

pub fn counter(count: usize) -> String {
    format!("{} results matched your search criteria.", count)
}

pub fn row(repo: &Repository) -> String {
    format!("  [{}] {}  ⭐ {}", repo.id, repo.name, repo.watchers_count)
}

/// The detail card for one repository.
pub fn card(repo: &Repository) -> String {
    let mut out = Vec::new();
    out.push(rule());
    out.push(format!("{}  ⭐ {}", repo.name, repo.watchers_count));
    out.push(rule());
    if let Some(desc) = repo.description.as_deref().filter(|d| !d.is_empty()) {
        out.push(desc.to_string());
    }
    out.push(format!("Avatar: {}", repo.owner.avatar_url));
    out.push(format!("GitHub: {}", repo.html_url));
    out.join("\n")
}
