//! Template catalog
//!
//! Static set of starter layouts for new playgrounds. Each template maps
//! relative file paths to literal contents; the dependency list is
//! informational only and mirrors what the template's `Cargo.toml` declares.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::error::TemplateError;

/// A starter layout for a new playground
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Template identifier
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Crates the template depends on (advisory)
    pub dependencies: &'static [&'static str],
    /// Relative path -> initial content
    pub files: BTreeMap<&'static str, &'static str>,
}

const BASIC_CARGO: &str = r#"[package]
name = "playground"
version = "0.1.0"
edition = "2021"

[dependencies]
"#;

const BASIC_MAIN: &str = r#"fn main() {
    println!("Hello, rshed!");
}
"#;

const WEB_MAIN: &str = r#"use std::io::{Read, Write};
use std::net::TcpListener;

fn main() -> std::io::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:8080")?;
    println!("Server starting on :8080...");

    for stream in listener.incoming() {
        let mut stream = stream?;
        let mut buf = [0u8; 1024];
        let _ = stream.read(&mut buf)?;

        let body = "Hello, rshed!";
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        );
        stream.write_all(response.as_bytes())?;
    }

    Ok(())
}
"#;

const CLI_CARGO: &str = r#"[package]
name = "playground"
version = "0.1.0"
edition = "2021"

[dependencies]
clap = { version = "4", features = ["derive"] }
anyhow = "1"
"#;

const CLI_MAIN: &str = r#"use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    println!("Hello, {}!", args.name);
    Ok(())
}
"#;

const CLI_ARGS: &str = r#"use clap::Parser;

/// A brief description of your CLI application
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Who to greet
    #[arg(short, long, default_value = "rshed")]
    pub name: String,
}
"#;

const API_CARGO: &str = r#"[package]
name = "playground"
version = "0.1.0"
edition = "2021"

[dependencies]
axum = "0.8"
serde = { version = "1", features = ["derive"] }
tokio = { version = "1", features = ["full"] }
"#;

const API_MAIN: &str = r#"use axum::{routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct Response {
    message: String,
}

async fn root() -> Json<Response> {
    Json(Response {
        message: "Welcome to the API".to_string(),
    })
}

#[tokio::main]
async fn main() {
    let app = Router::new().route("/", get(root));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await.unwrap();
    println!("Server starting on :8080...");
    axum::serve(listener, app).await.unwrap();
}
"#;

const LIB_CARGO: &str = r#"[package]
name = "playground"
version = "0.1.0"
edition = "2021"

[dependencies]

[dev-dependencies]
proptest = "1"
"#;

const LIB_SRC: &str = r#"/// Add two numbers
pub fn add(a: u64, b: u64) -> u64 {
    a + b
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn it_adds() {
        assert_eq!(add(2, 2), 4);
    }

    proptest! {
        #[test]
        fn add_is_commutative(a in 0u64..1000, b in 0u64..1000) {
            prop_assert_eq!(add(a, b), add(b, a));
        }
    }
}
"#;

fn catalog() -> &'static BTreeMap<&'static str, Template> {
    static CATALOG: OnceLock<BTreeMap<&'static str, Template>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let templates = [
            Template {
                name: "basic",
                description: "A basic Rust program",
                dependencies: &[],
                files: BTreeMap::from([("Cargo.toml", BASIC_CARGO), ("src/main.rs", BASIC_MAIN)]),
            },
            Template {
                name: "web",
                description: "A minimal std-only web server",
                dependencies: &[],
                files: BTreeMap::from([("Cargo.toml", BASIC_CARGO), ("src/main.rs", WEB_MAIN)]),
            },
            Template {
                name: "cli",
                description: "A command-line application using clap",
                dependencies: &["clap", "anyhow"],
                files: BTreeMap::from([
                    ("Cargo.toml", CLI_CARGO),
                    ("src/main.rs", CLI_MAIN),
                    ("src/cli.rs", CLI_ARGS),
                ]),
            },
            Template {
                name: "api",
                description: "A JSON API using axum and tokio",
                dependencies: &["axum", "serde", "tokio"],
                files: BTreeMap::from([("Cargo.toml", API_CARGO), ("src/main.rs", API_MAIN)]),
            },
            Template {
                name: "lib",
                description: "A library crate with unit and property tests",
                dependencies: &["proptest"],
                files: BTreeMap::from([("Cargo.toml", LIB_CARGO), ("src/lib.rs", LIB_SRC)]),
            },
        ];
        templates.into_iter().map(|t| (t.name, t)).collect()
    })
}

/// Look up a template by identifier
pub fn get(name: &str) -> Result<&'static Template, TemplateError> {
    catalog().get(name).ok_or_else(|| TemplateError::NotFound {
        name: name.to_string(),
    })
}

/// All templates, keyed by identifier
pub fn list() -> &'static BTreeMap<&'static str, Template> {
    catalog()
}

/// Resolve `name`, falling back to the default template when it is unknown
///
/// The returned template's `name` tells the caller which one was used.
pub fn resolve_or_default(name: &str) -> Result<&'static Template, TemplateError> {
    get(name).or_else(|_| get(crate::config::defaults::DEFAULT_TEMPLATE))
}
