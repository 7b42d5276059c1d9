//! File-store command execution.
//!
//! `update` is pure; chord commands that touch the file system are
//! re-parsed here after the state transition and executed against the
//! mutated model.

use std::path::PathBuf;

use tracing::warn;

use crate::app::{Message, Model};
use crate::command::{self, Command};
use crate::store;

/// Run the side effects, if any, of an already-applied message.
pub(super) fn handle_message_side_effects(model: &mut Model, msg: &Message) {
    let Message::CommitChord(chord) = msg else {
        return;
    };
    match command::parse(chord) {
        Command::Save => {
            save(model);
        }
        Command::SaveQuit => {
            // A failed save keeps the session alive so the message is seen.
            if save(model) {
                model.should_quit = true;
            }
        }
        Command::Create(name) => {
            create_file(model, &name);
        }
        Command::CreateSwitch(name) => {
            if create_file(model, &name) {
                model.switch_file(PathBuf::from(name), &[""]);
            }
        }
        Command::SaveSwitch(name) => {
            save(model);
            if name.is_empty() {
                return;
            }
            let path = PathBuf::from(&name);
            match store::read_lines(&path) {
                Ok(lines) => model.switch_file(path, &lines),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                    model.status_message =
                        Some("FILE NOT FOUND - USE :cswp TO CREATE NEW FILE".to_string());
                }
                Err(err) => {
                    warn!(path = %path.display(), %err, "switch target unreadable");
                    model.status_message = Some(format!("CANNOT OPEN {name}"));
                }
            }
        }
        Command::Quit
        | Command::EnterInsert
        | Command::JumpLine(_)
        | Command::Find(_)
        | Command::Unknown => {}
    }
}

fn save(model: &mut Model) -> bool {
    match store::write_buffer(&model.file_path, &model.buffer) {
        Ok(()) => {
            model.buffer.mark_clean();
            true
        }
        Err(err) => {
            warn!(path = %model.file_path.display(), %err, "save failed");
            model.status_message = Some(format!("SAVE FAILED: {err}"));
            false
        }
    }
}

fn create_file(model: &mut Model, name: &str) -> bool {
    if name.is_empty() {
        model.status_message = Some("NO FILE NAME".to_string());
        return false;
    }
    match store::create_empty(&PathBuf::from(name)) {
        Ok(()) => true,
        Err(err) => {
            warn!(%name, %err, "create failed");
            model.status_message = Some(format!("CANNOT CREATE {name}"));
            false
        }
    }
}
