//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) una sola vez y expone `AppConfig`.
use std::env;
use std::str::FromStr;

use di_core::constants::DEFAULT_MAX_RENDER_DEPTH;
use di_adapters::ScenarioInput;
use once_cell::sync::Lazy;

use crate::errors::CoreError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenvy::dotenv(); // ignora error si no existe .env
});

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

/// Configuración de la demo (extensible para más secciones).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Límite de anidamiento del renderer (`DI_MAX_RENDER_DEPTH`).
    pub max_render_depth: usize,
    /// Nombre publicado como contexto (`DI_DEMO_NAME`).
    pub demo_name: String,
    /// Argumento de las acciones (`DI_DEMO_SURNAME`).
    pub demo_surname: String,
    /// Imprime los resultados como JSON (`DI_DEMO_JSON`).
    pub json_output: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let input = ScenarioInput::default();
        Self { max_render_depth: DEFAULT_MAX_RENDER_DEPTH, demo_name: input.name, demo_surname: input.surname, json_output: false }
    }
}

impl AppConfig {
    /// Lee la configuración del entorno; las variables ausentes toman su
    /// valor por defecto y las inválidas son un `CoreError::Config`.
    pub fn from_env() -> Result<Self, CoreError> {
        init_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
        where F: Fn(&str) -> Option<String>
    {
        let defaults = Self::default();
        let max_render_depth = parse_var(&lookup, "DI_MAX_RENDER_DEPTH")?.unwrap_or(defaults.max_render_depth);
        if max_render_depth == 0 {
            return Err(CoreError::Config("DI_MAX_RENDER_DEPTH must be greater than zero".into()));
        }
        let demo_name = lookup("DI_DEMO_NAME").unwrap_or(defaults.demo_name);
        let demo_surname = lookup("DI_DEMO_SURNAME").unwrap_or(defaults.demo_surname);
        let json_output = parse_var(&lookup, "DI_DEMO_JSON")?.unwrap_or(defaults.json_output);
        Ok(Self { max_render_depth, demo_name, demo_surname, json_output })
    }

    pub fn scenario_input(&self) -> ScenarioInput {
        ScenarioInput { name: self.demo_name.clone(), surname: self.demo_surname.clone() }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, CoreError>
    where F: Fn(&str) -> Option<String>,
          T: FromStr
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw.trim()
                        .parse()
                        .map(Some)
                        .map_err(|_| CoreError::Config(format!("{key} has an invalid value: {raw:?}"))),
    }
}
