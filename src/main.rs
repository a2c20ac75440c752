use std::path::PathBuf;

use anyhow::{Context, Result};
use note_store::seed::resolve_seed;
use note_store::{Note, NoteStore};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed_path = std::env::args().nth(1).map(PathBuf::from);
    let store = resolve_seed(seed_path.as_deref())?.into_store()?;

    run_demo(&store)
}

fn print_notes(store: &NoteStore) {
    for note in store.get_all() {
        println!("{note:?}");
    }
}

fn print_comments(store: &NoteStore, note_id: &str) {
    for comment in store.get_comments(note_id) {
        println!("{comment:?}");
    }
}

fn run_demo(store: &NoteStore) -> Result<()> {
    println!("All notes:");
    print_notes(store);

    let first = store
        .get_all()
        .into_iter()
        .next()
        .context("seed contains no notes")?;
    let note_id = first.note_id.clone();

    store.create_comment(&note_id, format!("Comment 1 on note {note_id}"))?;
    store.create_comment(&note_id, format!("Comment 2 on note {note_id}"))?;
    println!("\nComments on note {note_id}:");
    print_comments(store, &note_id);

    let edited = Note {
        title: format!("Updated {}", first.title),
        text: format!("Updated {}", first.text),
        ..first
    };
    store.edit(&note_id, edited)?;
    println!("\nUpdated note {note_id}:");
    println!("{:?}", store.get_by_id(&note_id)?);

    let comments = store.get_comments(&note_id);
    if let Some(comment) = comments.first() {
        store.delete_comment(comment.comment_id)?;
        println!("\nComments on note {note_id} after deleting the first one:");
        print_comments(store, &note_id);

        store.restore_comment(comment.comment_id)?;
        println!("\nComments on note {note_id} after restoring it:");
        print_comments(store, &note_id);
    }

    if let Some(last) = store.get_all().into_iter().skip(1).last() {
        store.delete(&last.note_id)?;
        println!("\nAll notes after deleting note {}:", last.note_id);
        print_notes(store);
    }

    Ok(())
}
