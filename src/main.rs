use clap::Parser;
use devblog::application::{
    create_post, edit_post, import_file, init::init, manage_config::ConfigService,
    ContentEditor, EditorController, ExportFormat, ExportService, ImportOutcome, PostEdits,
};
use devblog::cli::{format_buffer, format_post_list, Cli, Commands, ExportKind, PostArgs};
use devblog::domain::{render_preview, PostStatus};
use devblog::error::Result;
use devblog::infrastructure::{BlogRepository, EditorSession, FileSystemRepository};
use std::fs;
use std::io::IsTerminal;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr, filtered by DEVBLOG_LOG (default: warn).
/// Colours only when stderr is a terminal.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("DEVBLOG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn post_edits(args: PostArgs) -> Result<PostEdits> {
    let status = args.status.as_deref().map(PostStatus::from_str).transpose()?;

    let content = match (args.content, args.file) {
        (Some(content), _) => Some(content),
        (None, Some(path)) => Some(fs::read_to_string(path)?),
        (None, None) => None,
    };

    Ok(PostEdits {
        title: args.title,
        tags: args.tags,
        status,
        content,
    })
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => init(&path),
        Commands::New { post } => {
            let edits = post_edits(post)?;
            let repo = FileSystemRepository::discover()?;
            let mut controller = EditorController::new(repo.open_store()?)?;

            if let Some(id) = create_post(&mut controller, edits)? {
                println!("Created post {}", id);
            }
            Ok(())
        }
        Commands::Edit { id, post, editor } => {
            let edits = post_edits(post)?;
            let repo = FileSystemRepository::discover()?;
            let mut controller = EditorController::new(repo.open_store()?)?;

            let saved = if editor {
                let session = EditorSession::new(repo.load_config()?.get_editor());
                let scratch = repo.scratch_path(&format!("EDIT_{}.md", id));
                let content_editor = ContentEditor {
                    session: &session,
                    scratch: &scratch,
                };
                edit_post(&mut controller, id, edits, Some(content_editor))?
            } else {
                edit_post(&mut controller, id, edits, None)?
            };

            if let Some(id) = saved {
                println!("Saved post {}", id);
            }
            Ok(())
        }
        Commands::Show { id, html } => {
            let repo = FileSystemRepository::discover()?;
            let mut controller = EditorController::new(repo.open_store()?)?;
            controller.select(Some(id))?;

            if html {
                print!("{}", render_preview(&controller.buffer().content));
            } else {
                println!("{}", format_buffer(controller.buffer()));
            }
            Ok(())
        }
        Commands::List => {
            let repo = FileSystemRepository::discover()?;
            let controller = EditorController::new(repo.open_store()?)?;
            println!("{}", format_post_list(controller.posts()).trim_end());
            Ok(())
        }
        Commands::Delete { id } => {
            let repo = FileSystemRepository::discover()?;
            let mut controller = EditorController::new(repo.open_store()?)?;
            controller.select(Some(id))?;
            controller.delete()?;
            println!("Deleted post {}", id);
            Ok(())
        }
        Commands::Export { kind, output } => {
            let repo = FileSystemRepository::discover()?;
            let store = repo.open_store()?;
            let format = match kind {
                ExportKind::Json => ExportFormat::Json,
                ExportKind::Zip => ExportFormat::Archive,
            };

            let path = ExportService::new(&repo, &store).execute(format, output.as_deref())?;
            println!("Exported posts to {}", path.display());
            Ok(())
        }
        Commands::Import { file } => {
            let repo = FileSystemRepository::discover()?;
            let store = repo.open_store()?;

            let outcome = import_file(&store, &file)?;
            if outcome == ImportOutcome::NotAnArray {
                println!("Nothing imported: {} is not a JSON array", file.display());
            } else {
                println!("Imported {} posts", outcome.imported_count());
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("editor = {}", config.editor);
                println!("json_export = {}", config.json_export);
                println!("archive_export = {}", config.archive_export);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: devblog config [--list | <key> [<value>]]");
                println!("Valid keys: editor, json_export, archive_export");
                Ok(())
            }
        }
    }
}

