use log::{error, warn};
use simple_di::demo::run_demo;
use simple_di::{AppConfig, CoreError};

fn run() -> Result<bool, CoreError> {
    let config = AppConfig::from_env()?;
    let outcomes = run_demo(&config)?;
    let all_ok = outcomes.iter().all(|o| o.matched);
    if config.json_output {
        let out = serde_json::to_string_pretty(&outcomes).map_err(|e| CoreError::Internal(e.to_string()))?;
        println!("{out}");
        return Ok(all_ok);
    }
    for o in &outcomes {
        let mark = if o.matched { "ok" } else { "MISMATCH" };
        println!("[{}] {:<16} {}", mark, o.id, o.html);
        if !o.matched {
            warn!("scenario {} did not render its expected text", o.id);
        }
    }
    Ok(all_ok)
}

fn main() {
    // Cargar variables de entorno desde .env si existe (antes de iniciar el logger)
    simple_di::config::init_dotenv();
    env_logger::init();

    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    }
}
