use anyhow::bail;
use clap::Parser;

mod setup;

use business::domain::product::sort::SortStrategy;
use setup::dependency_injection::DependencyContainer;

/// Terminal front-end for the product catalog view-model.
///
/// Renders the same derived list a list screen would observe: fetch, then
/// search/sort/toggle through the view-model commands and print the
/// resulting projection.
#[derive(Parser)]
#[command(name = "catalog-cli", about = "Browse the demo product catalog")]
struct Args {
    /// Case-insensitive name filter
    #[arg(long, default_value = "")]
    query: String,

    /// Sort order: name, price-asc, price-desc, favorite
    #[arg(long, default_value = "name")]
    sort: String,

    /// Toggle the favorite flag of the first product whose name contains
    /// this string before rendering
    #[arg(long)]
    toggle: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Parse command line configuration
    let args = Args::parse();
    let sort_strategy: SortStrategy = args.sort.parse().map_err(anyhow::Error::msg)?;

    // 3. Wire dependencies
    let container = DependencyContainer::new(Vec::new());
    let mut view_model = container.view_model;

    // 4. Drive the view-model
    view_model.fetch_products().await;
    if let Some(message) = view_model.error_message() {
        bail!("{}", message);
    }

    if let Some(needle) = args.toggle {
        let needle = needle.to_lowercase();
        let target = view_model
            .products()
            .iter()
            .find(|p| p.name.to_lowercase().contains(&needle))
            .cloned();
        match target {
            Some(product) => view_model.toggle_favorite(&product).await,
            None => bail!("No product matches --toggle {:?}", needle),
        }
        if let Some(message) = view_model.error_message() {
            bail!("{}", message);
        }
    }

    view_model.change_sort_strategy(sort_strategy);
    view_model.set_search_query(args.query);

    // 5. Render the derived projection
    for product in view_model.filtered_products() {
        let marker = if product.is_favorite { "*" } else { " " };
        println!(
            "{} {:<22} {:<12} {:>10.2}",
            marker, product.name, product.category, product.price
        );
    }
    println!(
        "{} of {} products (sort: {}, query: {:?})",
        view_model.filtered_products().len(),
        view_model.products().len(),
        view_model.sort_strategy(),
        view_model.search_query(),
    );

    Ok(())
}
