use dicebot::{Responder, Settings};
use std::io::{self, BufRead, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut responder = Responder::new(Settings::default());
    let stdin = io::stdin();
    print!("> ");
    io::stdout().flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            match responder.replies_for_command(&line) {
                Ok(replies) => {
                    for reply in replies {
                        println!("{}", reply.text);
                    }
                }
                Err(why) => eprintln!("Error: {}", why),
            }
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
