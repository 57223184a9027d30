use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database (prod or test mode)
///  - all pending schema migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1. Prepare configuration files
    //
    Config::init_all(cli.db.clone(), cli.test)?;

    let db_path = if let Some(custom) = &cli.db {
        custom.clone()
    } else {
        Config::load().database
    };

    println!("⚙️  Initializing babylog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    //
    // 2. Open DB and run migrations
    //
    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    println!("✅ Database initialized at {}", &db_path);

    //
    // 3. Internal log (non-blocking)
    //
    if let Err(e) = log::ttlog(
        &conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 babylog initialization completed!");
    Ok(())
}
