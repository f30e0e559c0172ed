//! Interactive chat session
//!
//! Owns the session's conversation log; one submission is fully processed
//! (routed, composed, appended) before the next prompt is shown.

use anyhow::Result;
use demanda_core::{Config, ConversationEntry, ConversationLog, Router};
use std::io::{BufRead, Write};

const HELP: &str = "Comandos: /historial muestra el historial, /borrar lo limpia, /salir termina.";

pub async fn run(config: &Config) -> Result<()> {
    let router = Router::from_config(config)?;
    let mut log = ConversationLog::new(config.history_limit);

    println!("Asesor de demanda. {}", HELP);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let question = line.trim();

        match question {
            "" => continue,
            "/salir" | "/exit" => break,
            "/borrar" => {
                log.clear();
                println!("Historial borrado.");
                continue;
            }
            "/historial" => {
                print_history(&log);
                continue;
            }
            _ => {}
        }

        let reply = router.route_and_respond(question).await;
        super::print_reply(&reply)?;

        log.append(ConversationEntry {
            question: question.to_string(),
            answer: reply.text,
            origin: reply.origin.to_string(),
        });
    }

    Ok(())
}

fn print_history(log: &ConversationLog) {
    if log.is_empty() {
        println!("Sin preguntas todavía.");
        return;
    }

    for entry in log.entries() {
        println!("Tú: {}", entry.question);
        println!("Asesor [{}]: {}\n", entry.origin, entry.answer);
    }
}
