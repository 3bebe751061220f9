//! `art-studio`: inspect the template catalog and replay layout scenarios

use anyhow::{Context, Result};
use art_artifact::{ArtifactDescriptor, Origin};
use art_components::{ComponentCatalog, ComponentLoadError, FnComponent};
use art_layout::{
    init_tracing, ArtifactStudio, CenterEvent, LogFormat, OrchestratorConfig, OrchestratorStep,
};
use art_protocol::ArtifactLinkResolver;
use art_registry::{Category, TemplateRegistry};
use clap::{Arg, ArgAction, Command};
use serde_json::json;

fn cli() -> Command {
    Command::new("art-studio")
        .version(art_layout::VERSION)
        .about("Artifact orchestration core: templates, links and center layout")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Path to a TOML configuration file"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines on stderr"),
        )
        .subcommand(
            Command::new("templates")
                .about("List the bundled template catalog")
                .arg(
                    Arg::new("category")
                        .long("category")
                        .help("Only list templates of this category"),
                ),
        )
        .subcommand(
            Command::new("resolve")
                .about("Resolve an artifact link and print the descriptor")
                .arg(Arg::new("href").required(true).help("artifact:<templateId>[:<exampleName>]"))
                .arg(
                    Arg::new("origin")
                        .long("origin")
                        .default_value("lesson")
                        .help("Producer origin: lesson, chat or manual"),
                ),
        )
        .subcommand(
            Command::new("replay").about("Replay the canonical open/open/close scenario"),
        )
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli().get_matches();

    let config = match matches.get_one::<String>("config") {
        Some(path) => OrchestratorConfig::load(path)
            .with_context(|| format!("loading configuration from {path}"))?,
        None => OrchestratorConfig::default(),
    };
    let format = if matches.get_flag("log-json") {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    init_tracing(&config.log_filter, format);

    let registry = TemplateRegistry::with_builtins().context("loading bundled templates")?;

    match matches.subcommand() {
        Some(("templates", sub)) => {
            list_templates(&registry, sub.get_one::<String>("category").map(String::as_str))
        }
        Some(("resolve", sub)) => {
            let href = sub
                .get_one::<String>("href")
                .context("missing link argument")?;
            let origin = sub
                .get_one::<String>("origin")
                .map_or(Origin::Lesson, |label| Origin::from_label(label));
            let descriptor = ArtifactLinkResolver::new(registry)
                .resolve_with_origin(href, origin)
                .with_context(|| format!("resolving {href}"))?;
            println!("{}", serde_json::to_string_pretty(&descriptor)?);
            Ok(())
        }
        Some(("replay", _)) => replay(&config, registry).await,
        _ => {
            cli().print_help()?;
            Ok(())
        }
    }
}

fn list_templates(registry: &TemplateRegistry, category: Option<&str>) -> Result<()> {
    let mut grouped = registry.grouped();
    if let Some(label) = category {
        let wanted = Category::from(label);
        grouped.retain(|category, _| category == &wanted);
    }
    println!("{}", serde_json::to_string_pretty(&grouped)?);
    Ok(())
}

/// Placeholder widgets for every component-backed template
fn demo_components(registry: &TemplateRegistry) -> Result<ComponentCatalog> {
    let mut catalog = ComponentCatalog::builder();
    for template in registry.all().filter(|t| t.category.is_component_backed()) {
        let id = template.id.clone();
        catalog.register_fn(template.id.clone(), move || {
            let id = id.clone();
            async move {
                Ok::<_, ComponentLoadError>(FnComponent::shared(move |props| {
                    Ok(format!("<div data-component=\"{id}\" data-props='{props}'></div>"))
                }))
            }
        })?;
    }
    Ok(catalog.build())
}

fn print_steps(studio: &ArtifactStudio, label: &str, steps: &[OrchestratorStep]) -> Result<()> {
    let orchestrator = studio.orchestrator();
    let line = json!({
        "signal": label,
        "steps": steps,
        "layout": orchestrator.layout().state().snapshot(),
        "panels": orchestrator.panels().panels(),
    });
    println!("{}", serde_json::to_string(&line)?);
    Ok(())
}

async fn replay(config: &OrchestratorConfig, registry: TemplateRegistry) -> Result<()> {
    let components = demo_components(&registry)?;
    let mut studio = ArtifactStudio::new(config, registry, components)?;

    let steps = studio.send(CenterEvent::lesson_change("otto-cycle"));
    print_steps(&studio, "lessonChange", &steps)?;

    let (_, steps) = studio.follow("artifact:bar-chart:sales");
    print_steps(&studio, "artifact:bar-chart:sales", &steps)?;

    let steps = studio.send(CenterEvent::resize(55.0));
    print_steps(&studio, "resize", &steps)?;

    let chat = ArtifactDescriptor::code("Chat widget", "<button>Click</button>", Origin::Chat);
    let steps = studio.send(CenterEvent::open(chat));
    print_steps(&studio, "open(chat)", &steps)?;

    let steps = studio.send(CenterEvent::ShowLesson);
    print_steps(&studio, "showLesson", &steps)?;

    let (_, steps) = studio.follow("artifact:pv-diagram");
    print_steps(&studio, "artifact:pv-diagram", &steps)?;
    let stage = studio.orchestrator_mut().stage_mut();
    if let Some(id) = stage.boundary().map(|b| b.component_id().to_string()) {
        stage.resolver().resolve(&id)?.settled().await;
    }
    if let Some(view) = stage.view() {
        println!("{}", serde_json::to_string(&json!({ "stage": view }))?);
    }

    let steps = studio.send(CenterEvent::Close);
    print_steps(&studio, "close", &steps)?;
    Ok(())
}
