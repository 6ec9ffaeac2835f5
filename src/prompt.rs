use std::io::{self, BufRead, Write};

/// Yes/no confirmation asked before destructive actions.
pub trait ConfirmationPrompt {
    fn confirm(&self, message: &str) -> bool;
}

impl<P: ConfirmationPrompt + ?Sized> ConfirmationPrompt for &P {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

/// Asks on stdout and reads the answer from stdin.
pub struct StdinPrompt;

impl ConfirmationPrompt for StdinPrompt {
    fn confirm(&self, message: &str) -> bool {
        println!("{} (yes/no)", message);
        print!("> ");
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut response = String::new();
        match io::stdin().lock().read_line(&mut response) {
            Ok(_) => is_yes(&response),
            Err(e) => {
                tracing::warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}

/// Confirms everything, for `--yes`.
pub struct AssumeYes;

impl ConfirmationPrompt for AssumeYes {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

fn is_yes(response: &str) -> bool {
    let response = response.trim().to_lowercase();
    response == "yes" || response == "y"
}
