use super::open_session;
use repofinder::display;
use repofinder::{Error, FinderConfig, Result, StdinPrompt};

pub fn list_repos(config: &FinderConfig) -> Result<()> {
    let session = open_session(config, &StdinPrompt)?;

    if session.results().is_empty() {
        println!("No repositories stored yet. Run `repofinder search <term>` first.");
        return Ok(());
    }

    println!("{}\n", display::counter(session.result_count()));
    for repo in session.results() {
        println!("{}", display::row(repo));
    }
    Ok(())
}

pub fn show_repo(config: &FinderConfig, id: u64) -> Result<()> {
    let mut session = open_session(config, &StdinPrompt)?;

    let repo = session.find(id).cloned().ok_or(Error::NotInResults(id))?;
    session.select_repository(&repo)?;
    if let Some(selected) = session.selected() {
        println!("{}", display::card(selected));
    }
    session.close_detail();
    Ok(())
}
