use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_ribbon"))
}

fn temp_xdg_dirs(prefix: &str) -> (PathBuf, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time")
        .as_nanos();
    let base = std::env::temp_dir().join(format!(
        "ribbon_{}_{}_{}",
        prefix,
        std::process::id(),
        nanos
    ));
    let config = base.join("config");
    let data = base.join("data");
    std::fs::create_dir_all(&config).expect("create config dir");
    std::fs::create_dir_all(&data).expect("create data dir");
    (config, data)
}

fn apply_xdg_env(cmd: &mut Command, config: &Path, data: &Path) {
    cmd.env("XDG_CONFIG_HOME", config)
        .env("XDG_DATA_HOME", data)
        .env_remove("RIBBON_STORE")
        .env_remove("RIBBON_CONFIG")
        .env_remove("RIBBON_LOG")
        .env("NO_COLOR", "1");
}

struct Env {
    config: PathBuf,
    data: PathBuf,
}

impl Env {
    fn new(prefix: &str) -> Self {
        let (config, data) = temp_xdg_dirs(prefix);
        Self { config, data }
    }

    fn initialized(prefix: &str) -> Self {
        let env = Self::new(prefix);
        let output = env.run(&["init"]);
        assert!(
            output.status.success(),
            "init failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        env
    }

    fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(bin());
        cmd.args(args);
        apply_xdg_env(&mut cmd, &self.config, &self.data);
        cmd.output().expect("run ribbon")
    }

    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "`ribbon {}` failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("utf8 stdout")
    }

    fn run_json(&self, args: &[&str]) -> Value {
        serde_json::from_str(&self.run_ok(args)).expect("stdout should be JSON")
    }

    fn config_file(&self) -> PathBuf {
        self.config.join("ribbon-tracker").join("config.toml")
    }

    fn add_pokemon(&self, species: &str, origin: &str) -> String {
        let value = self.run_json(&["pokemon", "add", species, "--origin", origin, "--json"]);
        value["id"].as_str().expect("id").to_string()
    }
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_init_writes_config_and_store() {
    let env = Env::new("init");
    let stdout = env.run_ok(&["init"]);
    assert!(stdout.contains("status=ok"));

    let contents = std::fs::read_to_string(env.config_file()).expect("config written");
    let config: toml::Value = toml::from_str(&contents).expect("config is TOML");
    let store = config["storage"]["path"].as_str().expect("storage.path");
    assert!(store.ends_with("progress.db"));
    assert!(Path::new(store).exists());
}

#[test]
fn test_init_twice_requires_force() {
    let env = Env::initialized("init2");
    let output = env.run(&["init"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("--force"));

    env.run_ok(&["init", "--force"]);
}

#[test]
fn test_commands_without_init_exit_not_found() {
    let env = Env::new("noinit");
    let output = env.run(&["status", "pikachu"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("ribbon init"));
}

#[test]
fn test_catalog_listings() {
    let env = Env::new("catalog");

    let ribbons = env.run_json(&["ribbons", "--generation", "3", "--json"]);
    let ribbons = ribbons.as_array().expect("array");
    assert_eq!(ribbons.len(), 27);
    assert_eq!(ribbons[0]["id"], "champion-hoenn");

    let marks = env.run_json(&["ribbons", "--category", "mark", "--json"]);
    assert!(marks
        .as_array()
        .expect("array")
        .iter()
        .all(|ribbon| ribbon["type"] == "mark"));

    let shadow = env.run_json(&["items", "--shadow", "--json"]);
    assert!(shadow
        .as_array()
        .expect("array")
        .iter()
        .any(|item| item["id"] == "makuhita"));

    let plain = env.run_ok(&["games", "--generation", "3"]);
    assert!(plain.starts_with("ribbon games"));
    assert!(plain.contains("emerald"));

    let games = env.run_json(&["games", "--generation", "3", "--format", "json"]);
    assert!(games.as_array().expect("array").iter().any(|g| g["id"] == "emerald"));

    let output = env.run(&["games", "--format", "yaml"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_register_toggle_and_status() {
    let env = Env::initialized("toggle");
    let id = env.add_pokemon("makuhita", "colosseum");

    let toggled = env.run_json(&["toggle", &id, "national-ribbon", "--json"]);
    assert_eq!(toggled["obtained"], true);
    assert_eq!(toggled["eligibility"]["eligible"], true);

    let status = env.run_json(&["status", &id[..8], "--json"]);
    assert_eq!(status["key"], id.as_str());
    assert_eq!(status["generations"][0]["generation"], 3);
    assert_eq!(status["generations"][0]["obtained"], 1);

    let toggled = env.run_json(&["toggle", &id, "national-ribbon", "--json"]);
    assert_eq!(toggled["obtained"], false);
}

#[test]
fn test_toggle_refuses_ineligible_without_force() {
    let env = Env::initialized("force");

    let output = env.run(&["toggle", "pikachu", "national-ribbon"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("shadow"));

    let toggled = env.run_json(&["toggle", "pikachu", "national-ribbon", "--force", "--json"]);
    assert_eq!(toggled["obtained"], true);
    assert_eq!(toggled["eligibility"]["eligible"], false);
}

#[test]
fn test_unknown_ribbon_and_key_exit_not_found() {
    let env = Env::initialized("unknown");

    let output = env.run(&["toggle", "pikachu", "no-such-ribbon"]);
    assert_eq!(output.status.code(), Some(3));

    let output = env.run(&["status", "agumon"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_check_explains_verdict() {
    let env = Env::initialized("check");

    let verdict = env.run_json(&["check", "pikachu", "national-ribbon", "--json"]);
    assert_eq!(verdict["eligible"], false);
    assert!(verdict["reason"]
        .as_str()
        .expect("reason")
        .contains("shadow"));

    let id = env.add_pokemon("makuhita", "ruby");
    let verdict = env.run_json(&["check", &id, "national-ribbon", "--json"]);
    assert_eq!(verdict["eligible"], false);
    assert!(verdict["reason"]
        .as_str()
        .expect("reason")
        .contains("Colosseum/XD"));

    let verdict = env.run_json(&["check", "snivy", "champion-hoenn", "--json"]);
    assert_eq!(verdict["eligible"], false);
}

#[test]
fn test_export_import_round_trip() {
    let source = Env::initialized("export");
    let id = source.add_pokemon("eevee", "xd");
    source.run_ok(&["toggle", &id, "earth-ribbon"]);
    source.run_ok(&["toggle", "bulbasaur", "effort-ribbon"]);

    let file = source.data.join("backup.json");
    let path = file.to_string_lossy().to_string();
    let stdout = source.run_ok(&["export", "--output", &path]);
    assert!(stdout.contains("status=ok"));
    let exported = std::fs::read_to_string(&file).expect("export written");

    let target = Env::initialized("import");
    let summary = target.run_json(&["import", &path, "--yes", "--json"]);
    assert_eq!(summary["progressKeys"], 2);
    assert_eq!(summary["instances"], 1);
    assert_eq!(summary["legacy"], false);

    let listed = target.run_json(&["pokemon", "list", "--json"]);
    assert_eq!(listed[0]["id"], id.as_str());
    assert_eq!(listed[0]["ribbons"], 1);

    assert_eq!(target.run_ok(&["export"]), exported);
}

#[test]
fn test_invalid_import_changes_nothing() {
    let env = Env::initialized("badimport");
    env.run_ok(&["toggle", "pikachu", "champion-hoenn"]);
    let before = env.run_ok(&["export"]);

    let file = env.data.join("bad.json");
    std::fs::write(
        &file,
        r#"{"version":1,"progress":{"pikachu":["ok"],"eevee":[42]}}"#,
    )
    .expect("write import");
    let output = env.run(&["import", &file.to_string_lossy(), "--yes"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("eevee"));

    assert_eq!(env.run_ok(&["export"]), before);
}

#[test]
fn test_legacy_import() {
    let env = Env::initialized("legacy");
    let file = env.data.join("legacy.json");
    std::fs::write(&file, r#"{"pikachu": ["champion-hoenn"]}"#).expect("write import");

    let summary = env.run_json(&["import", &file.to_string_lossy(), "--yes", "--json"]);
    assert_eq!(summary["legacy"], true);
    assert!(summary["instances"].is_null());

    let obtained = env.run_json(&[
        "ribbons", "--for", "pikachu", "--status", "obtained", "--json",
    ]);
    let obtained = obtained.as_array().expect("array");
    assert_eq!(obtained.len(), 1);
    assert_eq!(obtained[0]["id"], "champion-hoenn");
    assert_eq!(obtained[0]["obtained"], true);
}

#[test]
fn test_import_requires_confirmation_without_tty() {
    let env = Env::initialized("confirm");
    let file = env.data.join("legacy.json");
    std::fs::write(&file, r#"{"pikachu": ["champion-hoenn"]}"#).expect("write import");

    let output = env.run(&["import", &file.to_string_lossy()]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("--yes"));
    assert!(stderr(&output).contains("Replace all recorded ribbons"));
}

#[test]
fn test_remove_cascades_progress() {
    let env = Env::initialized("remove");
    let id = env.add_pokemon("torchic", "emerald");
    env.run_ok(&["toggle", &id, "effort-ribbon"]);
    env.run_ok(&["pokemon", "use", &id]);

    let output = env.run(&["pokemon", "remove", &id]);
    assert_eq!(output.status.code(), Some(4));

    env.run_ok(&["pokemon", "remove", &id, "--yes"]);
    let listed = env.run_json(&["pokemon", "list", "--json"]);
    assert!(listed.as_array().expect("array").is_empty());

    let exported = env.run_json(&["export"]);
    assert!(exported["progress"]
        .as_object()
        .expect("progress")
        .is_empty());

    let contents = std::fs::read_to_string(env.config_file()).expect("config");
    assert!(!contents.contains(&id));
}

#[test]
fn test_pokemon_use_sets_default_key() {
    let env = Env::initialized("use");
    let id = env.add_pokemon("mudkip", "ruby");
    env.run_ok(&["pokemon", "use", &id[..8]]);

    let contents = std::fs::read_to_string(env.config_file()).expect("config");
    let config: toml::Value = toml::from_str(&contents).expect("config is TOML");
    assert_eq!(config["session"]["active"].as_str(), Some(id.as_str()));

    let status = env.run_json(&["status", "--json"]);
    assert_eq!(status["key"], id.as_str());

    env.run_ok(&["pokemon", "use", "--clear"]);
    let output = env.run(&["status"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_pokemon_edit() {
    let env = Env::initialized("edit");
    let id = env.add_pokemon("mudkip", "ruby");
    env.run_ok(&[
        "pokemon", "edit", &id, "--current", "sword", "--level", "50", "--home", "true",
    ]);

    let shown = env.run_json(&["pokemon", "show", &id, "--json"]);
    assert_eq!(shown["kind"], "instance");
    assert_eq!(shown["instance"]["currentGame"], "sword");
    assert_eq!(shown["instance"]["currentGeneration"], 8);
    assert_eq!(shown["instance"]["level"], 50);
    assert_eq!(shown["instance"]["isTransferredToHome"], true);
    assert_eq!(shown["instance"]["originGame"], "ruby");

    let output = env.run(&["pokemon", "edit", &id]);
    assert_eq!(output.status.code(), Some(4));

    let output = env.run(&["pokemon", "edit", &id, "--level", "101"]);
    assert_eq!(output.status.code(), Some(4));

    let shadow = env.add_pokemon("zubat", "ruby");
    let check = env.run_json(&["check", &shadow, "national-ribbon", "--json"]);
    assert_eq!(check["eligible"], false);

    env.run_ok(&["pokemon", "edit", &shadow, "--origin", "xd"]);
    let shown = env.run_json(&["pokemon", "show", &shadow, "--json"]);
    assert_eq!(shown["instance"]["originGame"], "xd");
    let check = env.run_json(&["check", &shadow, "national-ribbon", "--json"]);
    assert_eq!(check["eligible"], true);

    let output = env.run(&["pokemon", "edit", &shadow, "--origin", "no-such-game"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_reset_clears_ribbons() {
    let env = Env::initialized("reset");
    env.run_ok(&["toggle", "eevee", "effort-ribbon"]);
    env.run_ok(&["toggle", "eevee", "earth-ribbon"]);
    env.run_ok(&["reset", "eevee", "--yes"]);

    let status = env.run_json(&["status", "eevee", "--json"]);
    assert_eq!(status["total"]["obtained"], 0);
    let exported = env.run_json(&["export"]);
    assert_eq!(exported["progress"]["eevee"], serde_json::json!([]));
}

#[test]
fn test_roadmap_orders_level_capped_first() {
    let env = Env::initialized("roadmap");
    let roadmap = env.run_json(&["roadmap", "makuhita", "--json"]);
    let steps = roadmap["steps"].as_array().expect("steps");
    assert_eq!(steps[0]["phase"], 1);
    let phases: Vec<u64> = steps
        .iter()
        .map(|step| step["phase"].as_u64().expect("phase"))
        .collect();
    assert!(phases.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(roadmap["blocked"].as_u64().expect("blocked") == 0);

    let roadmap = env.run_json(&["roadmap", "pikachu", "--json"]);
    assert!(roadmap["blocked"].as_u64().expect("blocked") >= 1);
}

#[test]
fn test_setup_flow() {
    let env = Env::initialized("setup");
    env.run_ok(&["setup", "game", "emerald"]);
    env.run_ok(&["setup", "hardware", "3ds"]);
    env.run_ok(&["setup", "complete"]);

    let setup = env.run_json(&["setup", "show", "--json"]);
    assert_eq!(setup["ownedGames"], serde_json::json!(["emerald"]));
    assert_eq!(setup["ownedHardware"], serde_json::json!(["3ds"]));
    assert_eq!(setup["setupCompleted"], true);

    let owned = env.run_json(&["games", "--owned", "--json"]);
    assert_eq!(owned.as_array().expect("array").len(), 1);

    let output = env.run(&["setup", "hardware", "gamecube"]);
    assert_eq!(output.status.code(), Some(4));

    env.run_ok(&["setup", "reset", "--yes"]);
    let setup = env.run_json(&["setup", "show", "--json"]);
    assert_eq!(setup["ownedGames"], serde_json::json!([]));
    assert_eq!(setup["setupCompleted"], false);
}

#[test]
fn test_transfers() {
    let env = Env::new("transfers");
    let routes = env.run_json(&["transfers", "--from", "3", "--json"]);
    let ids: Vec<&str> = routes
        .as_array()
        .expect("array")
        .iter()
        .map(|route| route["id"].as_str().expect("id"))
        .collect();
    assert_eq!(ids, vec!["gen3-to-gen4", "frlg-switch-to-home"]);

    let active = env.run_json(&["transfers", "--active", "--json"]);
    assert!(active
        .as_array()
        .expect("array")
        .iter()
        .all(|route| route["isDeprecated"] == false));
}

#[test]
fn test_completions() {
    let env = Env::new("completions");
    let stdout = env.run_ok(&["completions", "bash"]);
    assert!(stdout.contains("ribbon"));
}
