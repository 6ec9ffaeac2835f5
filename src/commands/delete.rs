use super::open_session;
use repofinder::{AssumeYes, ConfirmationPrompt, Error, FinderConfig, Result, StdinPrompt};

pub fn delete_repo(config: &FinderConfig, id: u64, yes: bool) -> Result<()> {
    let prompt: &dyn ConfirmationPrompt = if yes { &AssumeYes } else { &StdinPrompt };
    let mut session = open_session(config, prompt)?;

    let repo = session.find(id).cloned().ok_or(Error::NotInResults(id))?;
    if session.delete_repository(&repo)? {
        println!("✓ Removed {}", repo.name);
        println!("{} repositories left.", session.result_count());
    } else {
        println!("Kept {}.", repo.name);
    }
    Ok(())
}
