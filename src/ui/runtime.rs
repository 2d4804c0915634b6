//! Interactive shell loop: reads commands from stdin and redraws the
//! current page whenever the store publishes a new state.

use std::io;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::shutdown::ShutdownHandle;
use crate::ui::app::{App, Outcome};
use crate::ui::input::parse_command;

const PROMPT: &str = "> ";

pub async fn run(app: &mut App, shutdown: ShutdownHandle) -> io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut state = app.subscribe();
    state.borrow_and_update();

    write(&mut stdout, &app.render()).await?;

    loop {
        tokio::select! {
            _ = shutdown.wait() => break,

            changed = state.changed() => {
                if changed.is_err() {
                    break;
                }
                state.borrow_and_update();
                write(&mut stdout, &format!("\n{}", app.render())).await?;
            }

            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                if line.trim().is_empty() {
                    write(&mut stdout, "").await?;
                    continue;
                }

                match parse_command(&line) {
                    Ok(command) => match app.handle(command) {
                        Outcome::Render => write(&mut stdout, &app.render()).await?,
                        Outcome::Message(message) => {
                            write(&mut stdout, &format!("{}\n", message.trim_end())).await?
                        }
                        Outcome::Quit => break,
                    },
                    Err(err) => write(&mut stdout, &format!("{err}\n")).await?,
                }
            }
        }
    }

    shutdown.signal();
    Ok(())
}

/// Print `text` followed by the prompt.
async fn write(stdout: &mut tokio::io::Stdout, text: &str) -> io::Result<()> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.write_all(PROMPT.as_bytes()).await?;
    stdout.flush().await
}
