use std::time::Duration;

use anyhow::Context;
use reqwest::blocking::Client;
use rustyline::{error::ReadlineError, DefaultEditor};

use notes_backend::modules::notes::types::*;

fn main() -> anyhow::Result<()> {
    let base = std::env::var("NOTES_SERVER_URL")
        .unwrap_or_else(|_| "http://localhost:50051".to_string());

    let client = Client::builder().timeout(Duration::from_secs(1)).build()?;

    // unreachable server is fatal here and nowhere else
    client
        .get(format!("{base}/"))
        .send()
        .with_context(|| format!("failed to connect to server at {base}"))?;

    let mut rl = DefaultEditor::new()?;

    loop {
        println!();
        println!("Available Commands:");
        println!("1. create - Create a new note");
        println!("2. get - Get a note by ID");
        println!("3. list - List all notes");
        println!("4. update - Update a note");
        println!("5. delete - Delete a note by ID");
        println!("6. exit - Exit the client");

        let line = match rl.readline("Enter command: ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        rl.add_history_entry(line.as_str()).ok();

        match line.trim() {
            "create" => create_note(&client, &base, &mut rl),
            "get" => get_note(&client, &base, &mut rl),
            "list" => list_notes(&client, &base),
            "update" => update_note(&client, &base, &mut rl),
            "delete" => delete_note(&client, &base, &mut rl),
            "exit" => {
                println!("Exiting...");
                break;
            }
            _ => println!("Invalid command, please try again."),
        }
    }

    Ok(())
}

fn create_note(client: &Client, base: &str, rl: &mut DefaultEditor) {
    let Ok(title) = rl.readline("Enter title: ") else { return };
    let Ok(content) = rl.readline("Enter content: ") else { return };

    let resp = client
        .post(format!("{base}/notes"))
        .json(&CreateNotePayload {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
        })
        .send();

    match resp {
        Ok(resp) if resp.status().is_success() => match resp.json::<CreateNoteResponse>() {
            Ok(body) => println!("Note created: {}", format_note(&body.note)),
            Err(err) => eprintln!("Failed to create note: {err}"),
        },
        Ok(resp) => eprintln!("Failed to create note: {}", read_error(resp)),
        Err(err) => eprintln!("Failed to create note: {err}"),
    }
}

fn get_note(client: &Client, base: &str, rl: &mut DefaultEditor) {
    let Ok(id) = rl.readline("Enter note ID: ") else { return };

    let resp = client.get(format!("{base}/notes/{}", id.trim())).send();

    match resp {
        Ok(resp) if resp.status().is_success() => match resp.json::<GetNoteResponse>() {
            Ok(body) => println!("Note: {}", format_note(&body.note)),
            Err(err) => eprintln!("Failed to get note: {err}"),
        },
        Ok(resp) => eprintln!("Failed to get note: {}", read_error(resp)),
        Err(err) => eprintln!("Failed to get note: {err}"),
    }
}

fn list_notes(client: &Client, base: &str) {
    let resp = client.get(format!("{base}/notes")).send();

    match resp {
        Ok(resp) if resp.status().is_success() => match resp.json::<ListNotesResponse>() {
            Ok(body) => {
                println!("Notes:");
                for note in &body.notes {
                    println!("- {}", format_note(note));
                }
            }
            Err(err) => eprintln!("Failed to list notes: {err}"),
        },
        Ok(resp) => eprintln!("Failed to list notes: {}", read_error(resp)),
        Err(err) => eprintln!("Failed to list notes: {err}"),
    }
}

fn update_note(client: &Client, base: &str, rl: &mut DefaultEditor) {
    let Ok(id) = rl.readline("Enter note ID: ") else { return };
    let Ok(title) = rl.readline("Enter new title: ") else { return };
    let Ok(content) = rl.readline("Enter new content: ") else { return };

    let resp = client
        .put(format!("{base}/notes/{}", id.trim()))
        .json(&UpdateNotePayload {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
        })
        .send();

    match resp {
        Ok(resp) if resp.status().is_success() => match resp.json::<UpdateNoteResponse>() {
            Ok(body) => println!("Note updated: {}", format_note(&body.note)),
            Err(err) => eprintln!("Failed to update note: {err}"),
        },
        Ok(resp) => eprintln!("Failed to update note: {}", read_error(resp)),
        Err(err) => eprintln!("Failed to update note: {err}"),
    }
}

fn delete_note(client: &Client, base: &str, rl: &mut DefaultEditor) {
    let Ok(id) = rl.readline("Enter note ID: ") else { return };

    let resp = client.delete(format!("{base}/notes/{}", id.trim())).send();

    match resp {
        // both outcomes carry a body; success=false rides along with the 404
        Ok(resp) => match resp.json::<DeleteNoteResponse>() {
            Ok(body) if body.success => println!("Note deleted successfully."),
            Ok(body) => eprintln!(
                "Failed to delete note: {}",
                body.error.unwrap_or_else(|| "unknown error".to_string())
            ),
            Err(err) => eprintln!("Failed to delete note: {err}"),
        },
        Err(err) => eprintln!("Failed to delete note: {err}"),
    }
}

fn format_note(note: &Note) -> String {
    format!("id: {} | title: {} | content: {}", note.id, note.title, note.content)
}

fn read_error(resp: reqwest::blocking::Response) -> String {
    let status = resp.status();
    match resp.text() {
        Ok(body) if !body.is_empty() => body,
        _ => status.to_string(),
    }
}
