// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wasm_studio::chunk::FileBlob;
use wasm_studio::client::{
    BuildClient, BuildRequest, BuildResult, ImageRef, SourceBundle, SourceFile,
};
use wasm_studio::config::{load_and_validate_config, StudioConfig};
use wasm_studio::runtime::WasmRenderer;
use wasm_studio::staging::load_file;
use wasm_studio::traits::BuildConsole;

/// Console wired to stdout/stderr; previews land in a file.
struct TerminalConsole {
    preview_path: PathBuf,
}

impl BuildConsole for TerminalConsole {
    fn set_status(&mut self, status: &str) {
        eprintln!("[{}]", status);
    }

    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }

    fn show_preview(&mut self, document: Vec<u8>) {
        match std::fs::write(&self.preview_path, &document) {
            Ok(()) => eprintln!("Preview saved to {}", self.preview_path.display()),
            Err(e) => eprintln!("Failed to save preview: {}", e),
        }
    }

    fn show_notice(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

fn usage(program: &str) {
    eprintln!("Usage: {} <config.yaml> build <source files...>", program);
    eprintln!(
        "       {} <config.yaml> load <renderer.wasm> <data file>",
        program
    );
    eprintln!(
        "Example: {} studio.yaml build main.cpp CMakeLists.txt shell.html",
        program
    );
    eprintln!(
        "Example: {} studio.yaml load vtk_renderer.wasm cone.vtp",
        program
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        usage(&args[0]);
        std::process::exit(1);
    }

    let config = load_and_validate_config(&args[1])
        .with_context(|| format!("failed to load config {}", args[1]))?;

    match args[2].as_str() {
        "build" => run_build(&config, &args[3..]).await,
        "load" => {
            if args.len() < 5 {
                usage(&args[0]);
                std::process::exit(1);
            }
            run_load(&config, &args[3], &args[4]).await
        }
        other => {
            eprintln!("Unknown command: {}", other);
            usage(&args[0]);
            std::process::exit(1);
        }
    }
}

async fn run_build(config: &StudioConfig, paths: &[String]) -> anyhow::Result<()> {
    let mut files = Vec::new();
    for path in paths {
        let path = Path::new(path);
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("no usable file name in {}", path.display()))?;
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        files.push(SourceFile::new(name, content));
    }
    let sources = SourceBundle::new(files)?;

    let request = BuildRequest {
        config: config.config,
        image: ImageRef {
            repository: config.image.repository.clone(),
            tag: config.image.tag.clone(),
        },
        sources,
    };

    let client = BuildClient::new(config.server.as_str())?;
    let client = match config.timeout_seconds {
        Some(secs) => client.with_timeout(Duration::from_secs(secs))?,
        None => client,
    };

    let mut console = TerminalConsole {
        preview_path: PathBuf::from("preview.html"),
    };
    let result = client.submit(&request, &mut console).await?;

    match result {
        BuildResult::Succeeded { .. } => Ok(()),
        BuildResult::Failed { .. } => std::process::exit(1),
    }
}

async fn run_load(config: &StudioConfig, module_path: &str, data_path: &str) -> anyhow::Result<()> {
    let mut renderer = WasmRenderer::from_file(module_path, &config.wasm.fuel)?;

    let name = Path::new(data_path)
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("no usable file name in {}", data_path))?
        .to_string();
    let mut source = FileBlob::open(data_path).await?;

    load_file(&mut renderer, &name, &mut source, config.chunk_size).await?;
    println!("Loaded {} into the renderer", name);
    Ok(())
}
