use super::open_session;
use repofinder::display;
use repofinder::{FinderConfig, Result, Status, StdinPrompt};

pub fn search_repos(config: &FinderConfig, term: &str) -> Result<()> {
    let mut session = open_session(config, &StdinPrompt)?;
    session.set_term(term);

    println!("Loading...");
    session.submit_search()?;

    match session.status() {
        Status::Ready => {
            println!("\n{}\n", display::counter(session.result_count()));
            for repo in session.results() {
                println!("{}", display::row(repo));
            }
            println!("\nUse `repofinder show <id>` for details.");
        }
        _ => {
            if let Some(message) = session.error_message() {
                eprintln!("{}", message);
            }
        }
    }
    Ok(())
}
