//! Render command handler: the full resolve + build + emit pass.

use tracing::warn;

use taxonav_core::{BrowsingContext, CategoryId, ResolvedSelection, WidgetInstance, build, resolve};
use taxonav_html::{RenderOptions, render_widget};

use crate::cli::{GlobalOpts, OutputFormat, RenderArgs};
use crate::error::CliError;
use crate::{config, output, taxonomy};

pub fn handle(args: &RenderArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let store = taxonomy::load_taxonomy(&args.taxonomy)?;
    let cfg = config::load_config(global.config.as_deref())?;

    // CLI flags override config values.
    let title = args.title.clone().unwrap_or(cfg.title);
    let base_url = args.base_url.clone().unwrap_or(cfg.base_url);
    let instance = WidgetInstance::new(cfg.id_base, args.number.unwrap_or(cfg.number));

    // An explicit 0 means "no category", same as omitting the flag.
    let active = args.active.filter(|id| *id != 0).map(CategoryId);
    let context = BrowsingContext::from(active);

    // A stale or mistyped id degrades to the no-selection rendering;
    // only integrity violations abort the render.
    let resolved = match resolve(&context, &store) {
        Ok(resolved) => resolved,
        Err(err) if err.is_not_found() => {
            warn!(%err, "active category not in taxonomy; rendering without a selection");
            ResolvedSelection::none()
        }
        Err(err) => return Err(err.into()),
    };

    let specs = build(&instance, &resolved, &store)?;

    let rendered = match &global.output {
        OutputFormat::Auto | OutputFormat::Html => {
            render_widget(&specs, &RenderOptions { title, base_url })
        }
        OutputFormat::Json | OutputFormat::JsonCompact | OutputFormat::Yaml => {
            output::render_value(&global.output, &specs)?
        }
        OutputFormat::Plain => specs
            .top
            .options
            .iter()
            .filter(|option| !option.is_placeholder())
            .map(|option| format!("{}\t{}", option.value, option.label))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Table => {
            return Err(CliError::Validation {
                field: "output".into(),
                reason: "render emits html, json, json-compact, yaml, or plain".into(),
            });
        }
    };

    println!("{rendered}");
    Ok(())
}
