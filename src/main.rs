//! ResuForge - template-driven resume editor and document renderer
//!
//! CLI shell around the core library. It initializes:
//! - Logging infrastructure (daily-rotated file logs)
//! - Tokio runtime (auto-save scheduling, snapshot writer task)
//! - The resume store ([`ResumeStore`]), rehydrated from the snapshot
//! - Storage ([`StorageManager`]) with a change-driven snapshot writer
//!
//! # Execution Flow
//!
//! 1. Initialize logging -> logs/resuforge.<date>
//! 2. Create tokio runtime (2 worker threads)
//! 3. Load the persisted snapshot from ResuForge Data/ (corrupt or missing
//!    snapshots fall back to defaults with a warning)
//! 4. Spawn the snapshot writer subscribed to store changes
//! 5. Dispatch one command, then write a final snapshot
//!
//! # Commands
//!
//! - `templates` - list the template catalog
//! - `template <id>` - switch the active template
//! - `preview [out.html]` - render the printable document
//! - `export [dir]` - write the aggregate as a dated JSON file
//! - `import <file>` - replace the aggregate from a JSON file
//! - `clear --force` - reset all resume data

use anyhow::Result;
use camino::Utf8Path;
use resuforge::logging::{self, LogOptions};
use resuforge::metrics::Metrics;
use resuforge::models::ResumeState;
use resuforge::render::preview::render_document;
use resuforge::{APP_NAME, ResumeStore, Snapshot, StorageManager, TemplateCatalog, VERSION};
use std::time::Duration;

fn main() -> Result<()> {
    let _guard = logging::setup_logging(&LogOptions {
        debug: std::env::var("RESUFORGE_DEBUG").is_ok(),
        ..LogOptions::default()
    })?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    // Runtime for the auto-save timer and the snapshot writer
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(2)
        .thread_name("resuforge-worker")
        .build()?;
    let _rt = runtime.enter();

    let metrics = Metrics::new();
    let catalog = TemplateCatalog::builtin();
    let storage = StorageManager::new("ResuForge Data")?;

    // Rehydrate previous state; a snapshot that fails to parse is not
    // migration-safe, so fall back to defaults rather than dying.
    let state = match storage.load_snapshot() {
        Ok(Some(snapshot)) => snapshot.restore(),
        Ok(None) => ResumeState::default(),
        Err(err) => {
            tracing::warn!("Snapshot unreadable, starting fresh: {err:#}");
            eprintln!("Warning: saved data could not be read, starting fresh.");
            ResumeState::default()
        }
    };
    let store = ResumeStore::with_state(state);
    let writer = storage.spawn_snapshot_writer(&store);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("templates") => cmd_templates(&catalog, &store),
        Some("template") => cmd_template(&catalog, &store, args.get(1).map(String::as_str)),
        Some("preview") => cmd_preview(&catalog, &store, &metrics, args.get(1).map(String::as_str))?,
        Some("export") => cmd_export(&storage, &store, &metrics, args.get(1).map(String::as_str))?,
        Some("import") => cmd_import(&storage, &store, &metrics, args.get(1).map(String::as_str)),
        Some("clear") => cmd_clear(&store, args.get(1).map(String::as_str)),
        _ => usage(),
    }

    // The writer persists on every change already; one explicit final save
    // guarantees durability even if the process exits before it drains.
    storage.save_snapshot(&Snapshot::capture(&store.snapshot()))?;
    metrics.record_snapshot_written();

    writer.abort();
    metrics.log_summary();
    drop(_rt);
    runtime.shutdown_timeout(Duration::from_secs(5));

    Ok(())
}

fn usage() {
    println!("{APP_NAME} v{VERSION}");
    println!();
    println!("Usage: {APP_NAME} <command>");
    println!();
    println!("Commands:");
    println!("  templates           List available templates");
    println!("  template <id>       Switch the active template");
    println!("  preview [out.html]  Render the printable document");
    println!("  export [dir]        Export resume data as JSON");
    println!("  import <file>       Import resume data from JSON");
    println!("  clear --force       Delete all resume data");
}

fn cmd_templates(catalog: &TemplateCatalog, store: &ResumeStore) {
    let selected = store.read(|state| state.selected_template.clone());
    for template in catalog.all() {
        let marker = if template.id == selected { "*" } else { " " };
        println!(
            "{marker} {} ({}) - {}",
            template.name, template.id, template.description
        );
    }
}

fn cmd_template(catalog: &TemplateCatalog, store: &ResumeStore, id: Option<&str>) {
    let Some(id) = id else {
        eprintln!("Usage: {APP_NAME} template <id>");
        return;
    };
    match catalog.get(id) {
        Some(template) => {
            store.set_template(template.id);
            println!("Switched to template: {}", template.name);
        }
        None => {
            // Lookup miss is a degraded state, never a crash
            eprintln!("Template not found: {id}");
        }
    }
}

fn cmd_preview(
    catalog: &TemplateCatalog,
    store: &ResumeStore,
    metrics: &Metrics,
    out: Option<&str>,
) -> Result<()> {
    let (data, accent) = store.read(|state| (state.data.clone(), state.accent_color.clone()));
    let html = render_document(catalog, &data, &accent);
    metrics.record_document_rendered();

    let out = Utf8Path::new(out.unwrap_or("resume-preview.html"));
    std::fs::write(out, html)?;
    println!("Wrote printable preview to {out}");
    Ok(())
}

fn cmd_export(
    storage: &StorageManager,
    store: &ResumeStore,
    metrics: &Metrics,
    dir: Option<&str>,
) -> Result<()> {
    let data = store.export_data();
    let selected = store.read(|state| state.selected_template.clone());
    let path = storage.export_resume(&data, &selected, Utf8Path::new(dir.unwrap_or(".")))?;
    metrics.record_export();
    println!("Exported resume to {path}");
    Ok(())
}

fn cmd_import(
    storage: &StorageManager,
    store: &ResumeStore,
    metrics: &Metrics,
    path: Option<&str>,
) {
    let Some(path) = path else {
        eprintln!("Usage: {APP_NAME} import <file>");
        return;
    };
    match storage.import_resume(Utf8Path::new(path)) {
        Ok(data) => {
            store.import_data(data);
            metrics.record_import();
            println!("Imported resume from {path}");
        }
        Err(err) => {
            // The in-memory store is untouched on a failed import
            metrics.record_import_failure();
            eprintln!("{err}");
        }
    }
}

fn cmd_clear(store: &ResumeStore, flag: Option<&str>) {
    if flag != Some("--force") {
        eprintln!("This permanently deletes all resume data. Re-run with --force to confirm.");
        return;
    }
    store.clear_all();
    println!("All resume data cleared.");
}
