//! Feed browsing command.

use anyhow::{bail, Result};
use serde::Serialize;
use shop_commerce::catalog::FeedEntry;
use shop_commerce::search::{FeedFilter, SortSpec};
use shop_feed::{Criteria, FeedView, InMemoryProvider, NoViewport, PaginationState, ShopConfig, ShopSession};
use shop_observability::{LogFormat, LogLevel, StructuredLogger};

use super::BrowseArgs;
use crate::context::Context;
use crate::output::{entry_badge, facet_value};

/// JSON shape of a browse run.
#[derive(Debug, Serialize)]
struct BrowseReport<'a> {
    criteria: &'a Criteria,
    pagination: PaginationState,
    entries: &'a [FeedEntry],
    error: Option<&'a str>,
}

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    if args.pages == 0 {
        bail!("--pages must be at least 1");
    }

    let config = effective_config(&ctx.config, &args);
    let criteria = criteria_from_args(&args);
    let provider = InMemoryProvider::seeded();

    let min_level = if ctx.output.is_verbose() {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    let logger = StructuredLogger::default()
        .with_route("/products")
        .with_min_level(min_level)
        .with_format(LogFormat::Human);
    let mut session = ShopSession::new(&config, NoViewport)
        .with_logger(logger)
        .with_criteria(criteria);

    let adverts = session.load_adverts(&provider).await;
    ctx.output.debug(&format!("advert pool: {} entries", adverts));

    let ticket = session.mount();
    let spinner = ctx.output.spinner("Loading page 1...");
    let first = session.run(&provider, ticket).await;
    spinner.finish_and_clear();

    if let Err(e) = first {
        report(ctx, &session, &session.view());
        bail!("{}", e);
    }

    for page in 2..=args.pages {
        let Some(ticket) = session.request_more() else {
            ctx.output.debug("no more pages");
            break;
        };

        let spinner = ctx.output.spinner(&format!("Loading page {}...", page));
        let result = session.run(&provider, ticket).await;
        spinner.finish_and_clear();

        if let Err(e) = result {
            ctx.output.warn(&e.to_string());
            break;
        }
    }

    report(ctx, &session, &session.view());
    Ok(())
}

/// Config with command line overrides applied.
fn effective_config(base: &ShopConfig, args: &BrowseArgs) -> ShopConfig {
    let mut config = base.clone();
    if let Some(size) = args.page_size {
        config.feed.page_size = size.max(1);
    }
    if args.no_adverts {
        config.adverts.enabled = false;
    }
    config
}

fn criteria_from_args(args: &BrowseArgs) -> Criteria {
    let mut criteria = Criteria::default();
    criteria.filter.brand = FeedFilter::facet_value(args.brand.as_deref());
    criteria.filter.color = FeedFilter::facet_value(args.color.as_deref());
    if let Some(sort) = &args.sort {
        criteria.sort = SortSpec::parse(sort);
    }
    criteria
}

fn report(ctx: &Context, session: &ShopSession, view: &FeedView) {
    let criteria = session.criteria();
    let pagination = session.loader().pagination();

    if ctx.output.is_json() {
        ctx.output.json(&BrowseReport {
            criteria,
            pagination,
            entries: &view.entries,
            error: view.error.as_deref(),
        });
        return;
    }

    ctx.output.header("Lure feed");
    ctx.output.kv("brand", &facet_value(criteria.filter.brand_str()));
    ctx.output.kv("color", &facet_value(criteria.filter.color_str()));
    ctx.output.kv("sort", &facet_value(&criteria.sort.to_string()));
    println!();

    let widths = [2, 4, 14, 44, 10];
    ctx.output.table_row(&["", "#", "ID", "NAME", "PRICE"], &widths);
    for (position, entry) in view.entries.iter().enumerate() {
        let index = (position + 1).to_string();
        let badge = entry_badge(entry.is_advert());
        match entry {
            FeedEntry::Product(p) => {
                let price = p.price_display();
                ctx.output
                    .table_row(&[&badge, &index, p.id.as_str(), &p.name, &price], &widths);
            }
            FeedEntry::Advert(a) => {
                ctx.output
                    .table_row(&[&badge, &index, a.id.as_str(), &a.title, ""], &widths);
            }
        }
    }

    println!();
    let products = session.loader().products().len();
    let adverts = view.entries.len() - products;
    ctx.output.kv("products", &products.to_string());
    ctx.output.kv("adverts", &adverts.to_string());
    ctx.output.kv("pages loaded", &pagination.pages_loaded.to_string());
    ctx.output.kv("more available", &view.has_more.to_string());

    if let Some(error) = &view.error {
        ctx.output.warn(error);
    } else if view.entries.is_empty() {
        ctx.output.info("No lures match these filters.");
    }
}
