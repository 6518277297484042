//! pressroom - Content pipeline for a publishing console
//!
//! A CLI front-end that drives the pressroom library over draft files on
//! disk: batch-publish a content directory, inspect a single draft, run
//! the publish gate, or print a slug.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(missing_docs))]
// Allow some pedantic lints that are too strict for this project
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use pressroom::content_model::{validate_for_publish, ContentSource};
use pressroom::derived_fields::DerivedFields;
use pressroom::pipeline;
use pressroom::site_config::SiteConfig;
use pressroom::slug::slugify;
use std::path::Path;

/// Main entry point for the pressroom CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            input,
            output,
            verbose,
        } => {
            handle_build_command(&input, &output, verbose)?;
        }

        Commands::Inspect { file } => {
            handle_inspect_command(&file)?;
        }

        Commands::Validate { input, verbose } => {
            handle_validate_command(&input, verbose)?;
        }

        Commands::Slug { title } => {
            println!("{}", slugify(&title));
        }
    }

    Ok(())
}

/// Handle the build command
fn handle_build_command(input: &Path, output: &Path, verbose: bool) -> Result<()> {
    // Initialize logging if verbose
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    println!("Building posts...");
    println!("Input: {}", input.display());
    println!("Output: {}", output.display());

    // Stage 1: Load site configuration
    println!("\n[Stage 1/3] Loading site configuration...");
    let config = SiteConfig::load_or_default(input)
        .with_context(|| format!("Failed to load site configuration from {}", input.display()))?;

    if let Some(ref title) = config.site_title {
        println!("✓ Site: {}", title);
    } else {
        println!("✓ No pressroom.toml found, using defaults");
    }

    // Stage 2: Publish all drafts
    println!("\n[Stage 2/3] Publishing drafts...");
    let records = pipeline::publish_directory(input, &config)
        .with_context(|| format!("Failed to publish drafts from {}", input.display()))?;

    println!("✓ Published {} drafts", records.len());
    if verbose {
        for record in &records {
            println!(
                "  {} - {} ({} words, {} min read)",
                record.slug, record.title, record.word_count, record.reading_time_minutes
            );
        }
    }

    // Stage 3: Write rendered posts and the record manifest
    println!("\n[Stage 3/3] Writing output...");
    std::fs::create_dir_all(output)
        .with_context(|| format!("Failed to create directory {}", output.display()))?;

    for record in &records {
        let path = output.join(format!("{}.md", record.slug));
        std::fs::write(&path, &record.content)
            .with_context(|| format!("Failed to write post {}", path.display()))?;
    }

    let manifest_path = output.join("records.json");
    let manifest = serde_json::to_string_pretty(&records)
        .context("Failed to serialize the record manifest")?;
    std::fs::write(&manifest_path, manifest)
        .with_context(|| format!("Failed to write manifest {}", manifest_path.display()))?;

    println!("✓ Successfully wrote: {}", manifest_path.display());
    println!("\n✓ Build completed successfully!");

    Ok(())
}

/// Handle the inspect command
fn handle_inspect_command(file: &Path) -> Result<()> {
    let draft = pipeline::load_draft(file)
        .with_context(|| format!("Failed to load draft {}", file.display()))?;

    let source = ContentSource::from_serialized(&draft.content);
    let derived = DerivedFields::compute(&source);

    println!("Title: {}", draft.title);
    println!("Slug: {}", slugify(&draft.title));
    if source.is_plain_text() {
        println!("Content: plain text (did not parse as a document tree)");
    } else {
        println!("Content: document tree");
    }
    println!("Words: {}", derived.word_count);
    println!("Reading time: {} min", derived.reading_time_minutes);
    println!("Excerpt: {}", derived.excerpt);
    if !draft.images.is_empty() {
        println!("Attached images: {}", draft.images.len());
    }

    match validate_for_publish(&draft.title, &source) {
        Ok(()) => println!("Publishable: yes"),
        Err(e) => println!("Publishable: no ({})", e),
    }

    Ok(())
}

/// Handle the validate command
fn handle_validate_command(input: &Path, verbose: bool) -> Result<()> {
    println!("Validating drafts...");
    println!("Input: {}", input.display());

    let paths = pipeline::discover_drafts(input);
    if paths.is_empty() {
        println!("No draft files found");
        return Ok(());
    }

    let mut failures = 0;
    for path in &paths {
        let draft = pipeline::load_draft(path)
            .with_context(|| format!("Failed to load draft {}", path.display()))?;
        let source = ContentSource::from_serialized(&draft.content);

        match validate_for_publish(&draft.title, &source) {
            Ok(()) => {
                if verbose {
                    println!("  ✓ {}", path.display());
                }
            }
            Err(e) => {
                println!("  ✗ {}: {}", path.display(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} drafts failed validation", failures, paths.len());
    }

    println!("✓ All {} drafts pass the publish gate", paths.len());
    Ok(())
}
