use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ugvk_engine::{FieldMembership, KeyMap, TouchPoint, classify};
use ugvk_im::config::Settings;
use ugvk_im::{
    EngineConfig, FieldId, FieldMode, FieldSet, InputController, InputEvent, KeyCode, KeyEvent,
    KeyModifiers, KeyPhase, ScriptedSource, Session, TextField, TouchEvent, TouchPhase,
    WritingDirection,
};

/// ugvk input method tool: type keys, replay event scripts, inspect the layout.
#[derive(Parser, Debug)]
#[command(name = "ugvk")]
#[command(about = "ugvk input method tool")]
struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Type keys into an empty field and print the resulting text.
    ///
    /// Every character of KEYS is sent as a key-down followed by a key-press,
    /// the way a browser delivers a plain keystroke.
    Type {
        /// Keys to type, e.g. "uycur"
        keys: String,

        /// Name of the field being typed into
        #[arg(short, long, default_value = "field")]
        field: String,

        /// Settings file (defaults to the user config file)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Instrument every field not on the deny list (sets `attach_all`)
        #[arg(short, long)]
        all_fields: bool,
    },

    /// Replay a JSON event script and print every field's final state.
    ///
    /// The script holds initial `fields` (name, text, cursor, direction) and a
    /// list of `events`, each tagged with `type`: `text`, `key` or `touch`.
    Replay {
        /// Event script (JSON)
        script: PathBuf,

        /// Settings file (defaults to the user config file)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Instrument every field not on the deny list (sets `attach_all`)
        #[arg(short, long)]
        all_fields: bool,

        /// Print the field states as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the key map with the class of every output character
    Keymap,

    /// Print the effective settings as TOML
    Config {
        /// Settings file (defaults to the user config file)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("Failed to load settings from {:?}", path)),
        None => Settings::load(),
    }
}

/// Load settings, forcing `attach_all` on when `--all-fields` was given
fn load_field_settings(path: Option<&Path>, all_fields: bool) -> Result<Settings> {
    let mut settings = load_settings(path)?;
    if all_fields {
        settings.fields.attach_all = true;
    }
    Ok(settings)
}

/// Build a controller that follows the settings' field policy as configured
fn build_controller(settings: &Settings) -> Result<InputController> {
    let config = EngineConfig::from_settings(settings)?;
    if config.membership == FieldMembership::Disabled {
        warn!("No field lists configured, no field is instrumented (see --all-fields)");
    }
    Ok(InputController::with_config(config))
}

fn mode_indicator(mode: Option<FieldMode>) -> &'static str {
    mode.map(|mode| mode.indicator()).unwrap_or("--")
}

// --- type subcommand ---

fn run_type(keys: &str, field: &str, config: Option<&Path>, all_fields: bool) -> Result<()> {
    let settings = load_field_settings(config, all_fields)?;
    let mut session = Session::new(build_controller(&settings)?);
    let field = FieldId::from(field);

    let mut source = ScriptedSource::new();
    for ch in keys.chars() {
        source.push(KeyEvent::down(&field, ch));
        source.push(KeyEvent::press(&field, ch));
    }
    let handled = session.run(&mut source);
    debug!("Handled {} events", handled);

    let mode = session.controller().mode(&field);
    let buffer = session.fields_mut().entry(&field);
    println!("{}", buffer.text());
    eprintln!(
        "cursor: {}  mode: {}  direction: {}",
        buffer.cursor(),
        mode_indicator(mode),
        buffer.direction().as_str()
    );
    Ok(())
}

// --- replay subcommand ---

#[derive(Debug, Deserialize)]
struct Script {
    #[serde(default)]
    fields: Vec<ScriptField>,
    events: Vec<ScriptEvent>,
}

#[derive(Debug, Deserialize)]
struct ScriptField {
    name: String,
    #[serde(default)]
    text: String,
    /// Caret position (defaults to the end of `text`)
    cursor: Option<usize>,
    #[serde(default)]
    direction: WritingDirection,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ScriptEvent {
    /// Plain keystrokes: key-down then key-press for every character
    Text { field: String, keys: String },
    /// A single key event; `field` or `key` may be left out to model a
    /// malformed event. Modifiers are given as flags, as a host bitmask
    /// (`modifiers`, see [`KeyModifiers::from_modifier_state`]) or both.
    Key {
        field: Option<String>,
        key: Option<char>,
        #[serde(default)]
        phase: KeyPhase,
        #[serde(default)]
        modifiers: u32,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        meta: bool,
    },
    Touch {
        field: Option<String>,
        phase: TouchPhase,
        #[serde(default)]
        touches: Vec<TouchPoint>,
    },
}

impl ScriptEvent {
    fn into_events(self) -> Vec<InputEvent> {
        match self {
            Self::Text { field, keys } => keys
                .chars()
                .flat_map(|ch| {
                    [
                        InputEvent::Key(KeyEvent::down(field.as_str(), ch)),
                        InputEvent::Key(KeyEvent::press(field.as_str(), ch)),
                    ]
                })
                .collect(),
            Self::Key {
                field,
                key,
                phase,
                modifiers,
                shift,
                ctrl,
                meta,
            } => {
                let mut state = KeyModifiers::from_modifier_state(modifiers);
                state.shift_key |= shift;
                state.control_key |= ctrl;
                state.meta_key |= meta;
                vec![InputEvent::Key(KeyEvent {
                    field: field.map(FieldId::from),
                    code: key.map(KeyCode::from_char),
                    modifiers: state,
                    phase,
                })]
            }
            Self::Touch {
                field,
                phase,
                touches,
            } => vec![InputEvent::Touch(TouchEvent {
                field: field.map(FieldId::from),
                phase,
                touches,
            })],
        }
    }
}

impl Script {
    fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    fn into_parts(self) -> (FieldSet, ScriptedSource) {
        let mut fields = FieldSet::new();
        for field in self.fields {
            let mut buffer = TextField::with_text(field.text).with_direction(field.direction);
            if let Some(cursor) = field.cursor {
                buffer.set_selection(cursor, cursor);
            }
            fields.insert(field.name, buffer);
        }
        let events: Vec<InputEvent> = self
            .events
            .into_iter()
            .flat_map(ScriptEvent::into_events)
            .collect();
        (fields, ScriptedSource::from(events))
    }
}

#[derive(Debug, Serialize)]
struct FieldReport {
    name: String,
    text: String,
    cursor: usize,
    mode: Option<FieldMode>,
    direction: WritingDirection,
}

fn replay(script: Script, controller: InputController) -> Vec<FieldReport> {
    let (fields, mut source) = script.into_parts();
    let mut session = Session::with_fields(controller, fields);
    let handled = session.run(&mut source);
    debug!("Replayed {} events", handled);

    session
        .fields()
        .iter()
        .map(|(id, buffer)| FieldReport {
            name: id.to_string(),
            text: buffer.text().to_string(),
            cursor: buffer.cursor(),
            mode: session.controller().mode(id),
            direction: buffer.direction(),
        })
        .collect()
}

fn run_replay(path: &Path, config: Option<&Path>, all_fields: bool, json: bool) -> Result<()> {
    let settings = load_field_settings(config, all_fields)?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {:?}", path))?;
    let script = Script::parse(&content)
        .with_context(|| format!("Failed to parse script {:?}", path))?;

    let reports = replay(script, build_controller(&settings)?);
    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!(
                "{}\t[{}] {} @{}\t{}",
                report.name,
                mode_indicator(report.mode),
                report.direction.as_str(),
                report.cursor,
                report.text
            );
        }
    }
    Ok(())
}

// --- keymap / config subcommands ---

fn run_keymap() {
    for (key, out) in KeyMap::uyghur().entries() {
        println!("{}\t{}\tU+{:04X}\t{:?}", key, out, out as u32, classify(out));
    }
}

fn run_config(config: Option<&Path>) -> Result<()> {
    let settings = load_settings(config)?;
    if config.is_none()
        && let Some(file) = Settings::config_file()
    {
        eprintln!("# {}", file.display());
    }
    print!("{}", toml::to_string_pretty(&settings)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    ugvk_im::init_logging(if cli.verbose { "debug" } else { "warn" });

    match cli.command {
        Commands::Type {
            keys,
            field,
            config,
            all_fields,
        } => run_type(&keys, &field, config.as_deref(), all_fields),
        Commands::Replay {
            script,
            config,
            all_fields,
            json,
        } => run_replay(&script, config.as_deref(), all_fields, json),
        Commands::Keymap => {
            run_keymap();
            Ok(())
        }
        Commands::Config { config } => run_config(config.as_deref()),
    }
}
