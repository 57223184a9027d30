use crate::cli::parser::{Commands, DocsAction};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::document::BabyDocument;
use crate::state::AppState;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Docs { action } = cmd {
        let pool = DbPool::open_ready(&cfg.database)?;
        let mut state = AppState::load(&pool)?;

        match action {
            None | Some(DocsAction::List) => print_list(&state),

            Some(DocsAction::Add {
                title,
                kind,
                number,
                notes,
            }) => {
                let doc = BabyDocument {
                    id: date::fresh_id(),
                    title: title.clone(),
                    kind: *kind,
                    number: number.clone(),
                    notes: notes.clone(),
                };

                state.documents.push(doc);
                state.save_documents(&pool)?;
                success(format!("Document '{}' added.", title));
            }

            Some(DocsAction::Del { id }) => {
                let before = state.documents.len();
                state.documents.retain(|d| d.id != *id);
                if state.documents.len() == before {
                    return Err(AppError::NoSuchDocument(id.clone()));
                }
                state.save_documents(&pool)?;
                success(format!("Document {} deleted.", id));
            }
        }
    }

    Ok(())
}

fn print_list(state: &AppState) {
    if state.documents.is_empty() {
        println!("No documents (see `babylog docs add`).");
        return;
    }

    let mut table = Table::new(vec!["kind", "title", "number", "id"]);
    for d in &state.documents {
        table.add_row(vec![
            d.kind.as_str().to_string(),
            d.title.clone(),
            d.number.clone().unwrap_or_else(|| "-".to_string()),
            d.id.clone(),
        ]);
    }

    println!("\n📁 Documents\n");
    print!("{}", table.render());
}
