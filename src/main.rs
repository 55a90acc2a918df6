use anyhow::Context;
use clap::Parser;
use shopping_cart::cart::helpers::format_item_summary;
use shopping_cart::cart::ShoppingCart;
use shopping_cart::cli::CliArgs;
use shopping_cart::logger;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);
    tracing::debug!("CLI args: {:?}", args);

    let config = args
        .resolve_config()
        .context("Failed to resolve configuration")?;
    let catalog = config
        .build_catalog()
        .context("Failed to build product catalog")?;

    if args.list_catalog {
        for product in catalog.products() {
            println!("{:<12} {:>8.2}", product.name, product.price);
        }
        return Ok(());
    }

    if catalog.is_empty() {
        tracing::warn!("Catalog has no products; every operation will be ignored");
    }

    let mut cart = ShoppingCart::new(Arc::new(catalog)).with_vat_rate(config.vat_rate);
    for op in args.operations_or_demo() {
        let event = op.apply(&mut cart);
        if !event.changed() {
            tracing::debug!("{:?} left the cart unchanged ({:?})", op, event);
        }
    }

    let summary = cart.summary();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Cart contents: {}", format_item_summary(&summary.items));
    for line in &summary.items {
        println!(
            "  {:<12} {:>4} x {:>8.2} = {:>8.2}",
            line.item, line.quantity, line.price_per_unit, line.total_price
        );
    }
    println!("Total price:    {:.2}", summary.total_price);
    println!("Total quantity: {}", summary.total_quantity);
    println!("VAT ({}):      {:.2}", config.vat_rate, summary.vat);

    Ok(())
}
