//! Command-line arguments and command dispatch.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use console::style;
use serde::Serialize;
use storefront_leptos::composer::sections;
use storefront_leptos::{ButtonConfig, Route, Site, navigation_map, render_path};

use crate::config::StorefrontConfig;
use crate::site::build_site;

#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Render the storefront landing pages to static HTML")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Config file (default: ./storefront.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write every page plus 404.html into a directory
    Build {
        /// Output directory
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,
    },
    /// Render one path to stdout
    Render {
        /// Request path, e.g. / or /about
        path: String,
    },
    /// List the navigation map
    Routes {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the class string a button resolves to
    Classes {
        /// primary, secondary, success, danger or outline
        #[arg(long, default_value = "primary")]
        variant: String,
        /// xs, sm, md, lg or xl
        #[arg(long, default_value = "md")]
        size: String,
        /// Use the breakpoint-aware size table
        #[arg(long)]
        responsive: bool,
        #[arg(long)]
        disabled: bool,
        #[arg(long)]
        full_width: bool,
        /// Extra classes appended last
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        class: String,
    },
}

#[derive(Debug, Serialize)]
struct RouteEntry {
    path: &'static str,
    key: &'static str,
    title: &'static str,
    file: &'static str,
    sections: &'static [&'static str],
}

/// Execute a parsed command, writing its output to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Command::Build { out: out_dir } => {
            let site = load_site(cli.config.as_deref())?;
            let written = build_site(&site, out_dir)?;
            writeln!(
                out,
                "{} wrote {} pages to {}",
                style("✓").green().bold(),
                written.len(),
                out_dir.display()
            )?;
        }
        Command::Render { path } => {
            let site = load_site(cli.config.as_deref())?;
            let Some(html) = render_path(path, &site) else {
                let known: Vec<_> = navigation_map().iter().map(|(p, _)| *p).collect();
                bail!("unknown path '{}' (known: {})", path, known.join(", "));
            };
            out.write_all(html.as_bytes())?;
        }
        Command::Routes { json } => {
            let entries: Vec<RouteEntry> = navigation_map()
                .into_iter()
                .map(|(path, route)| route_entry(path, route))
                .collect();
            if *json {
                let body = serde_json::to_string_pretty(&entries)?;
                writeln!(out, "{}", body)?;
            } else {
                for entry in entries {
                    writeln!(
                        out,
                        "{:<12} {:<22} {}",
                        entry.path,
                        entry.file,
                        entry.sections.join(", ")
                    )?;
                }
            }
        }
        Command::Classes {
            variant,
            size,
            responsive,
            disabled,
            full_width,
            class,
        } => {
            let classes = ButtonConfig::from_keys(variant, size)
                .responsive(*responsive)
                .disabled(*disabled)
                .full_width(*full_width)
                .class(class.as_str())
                .resolve();
            writeln!(out, "{}", classes)?;
        }
    }
    Ok(())
}

fn route_entry(path: &'static str, route: Route) -> RouteEntry {
    RouteEntry {
        path,
        key: route.key(),
        title: route.title(),
        file: route.output_file(),
        sections: sections(route),
    }
}

fn load_site(config: Option<&Path>) -> Result<Site> {
    let config = match config {
        Some(path) => StorefrontConfig::load_from_path(path)?,
        None => {
            let cwd = std::env::current_dir().context("failed to resolve working directory")?;
            StorefrontConfig::load(&cwd)
        }
    };
    Ok(config.into_site())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("storefront").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        run(&cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn classes_defaults_to_primary_medium() {
        let output = run_args(&["classes"]).expect("classes");
        assert_eq!(output.trim_end(), ButtonConfig::default().resolve());
    }

    #[test]
    fn classes_accepts_every_flag() {
        let output = run_args(&[
            "classes",
            "--variant",
            "danger",
            "--size",
            "xs",
            "--responsive",
            "--disabled",
            "--full-width",
            "--class",
            "-mt-1",
        ])
        .expect("classes");

        assert!(output.contains("bg-red-700"));
        assert!(output.contains("sm:px-3 sm:py-2 sm:text-sm"));
        assert!(output.contains("cursor-not-allowed"));
        assert!(output.trim_end().ends_with("w-full -mt-1"));
    }

    #[test]
    fn classes_with_unknown_variant_still_resolves() {
        let output = run_args(&["classes", "--variant", "ghost", "--size", "sm"]).expect("classes");
        assert!(output.contains("px-3 py-2 text-sm"));
        assert!(!output.contains("bg-blue-700"));
    }

    #[test]
    fn routes_table_lists_files_and_sections() {
        let output = run_args(&["routes"]).expect("routes");
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("/ "));
        assert!(lines[0].contains("hero, featured-products, responsive-demo"));
        assert!(lines[4].contains("contact/index.html"));
    }

    #[test]
    fn routes_json_is_machine_readable() {
        let output = run_args(&["routes", "--json"]).expect("routes");
        let value: serde_json::Value = serde_json::from_str(&output).expect("json");

        let routes = value.as_array().expect("array");
        assert_eq!(routes.len(), 5);
        assert_eq!(routes[1]["path"], "/products");
        assert_eq!(routes[1]["key"], "products");
        assert_eq!(routes[0]["sections"][0], "hero");
    }
}
