use std::fs;

const RENDER_KEYS: &[&str] = &["line_terminator", "language_class_prefix"];

fn main() {
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    let Some(render) = table.get("render").and_then(toml::Value::as_table) else {
        panic!("default_config.toml: missing [render] table");
    };

    for (key, value) in render {
        if !RENDER_KEYS.contains(&key.as_str()) {
            panic!("default_config.toml: unknown key render.{}", key);
        }
        if !value.is_str() {
            panic!("default_config.toml: render.{} must be a string", key);
        }
    }
    for key in RENDER_KEYS {
        if !render.contains_key(*key) {
            panic!("default_config.toml: render.{} must be set", key);
        }
    }
}
