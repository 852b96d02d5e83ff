use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use wholesale_catalog::config::DEFAULT_SOURCE;
use wholesale_catalog::data::model::ProductRecord;
use wholesale_catalog::data::parser::write_records;

/// Write a sample wholesale catalog CSV.
#[derive(Debug, Parser)]
struct Args {
    /// Output file.
    #[arg(default_value = DEFAULT_SOURCE)]
    output: PathBuf,
}

#[allow(clippy::too_many_arguments)]
fn product(
    name: &str,
    category: &str,
    target_customer: &str,
    description: &str,
    code: &str,
    size: &str,
    stagionatura: &str,
    expiring_date: &str,
    price: &str,
) -> ProductRecord {
    ProductRecord {
        name: name.into(),
        category: category.into(),
        target_customer: target_customer.into(),
        description: description.into(),
        code: code.into(),
        size: size.into(),
        stagionatura: stagionatura.into(),
        expiring_date: expiring_date.into(),
        price: price.into(),
        ..Default::default()
    }
}

fn sample_products() -> Vec<ProductRecord> {
    vec![
        product(
            "Pecorino di Farindola",
            "Formaggi",
            "Restaurants, Specialty Cheese Shops",
            "Raw sheep milk cheese, rennet from pork, aged in olive oil",
            "FOR-001",
            "1.5 kg",
            "12 mesi",
            "2027-03-31",
            "32.00",
        ),
        product(
            "Caciocavallo Silano",
            "Formaggi",
            "Restaurants, Specialty Cheese Shops, Retail",
            "Stretched-curd cheese, \"pear\" shape",
            "FOR-002",
            "2 kg",
            "4 mesi",
            "2026-12-15",
            "24.50",
        ),
        product(
            "Ventricina Vastese",
            "Salumi",
            "Restaurants, Specialty Food Stores",
            "Coarse pork salume with sweet and hot pepper",
            "SAL-010",
            "800 g",
            "6 mesi",
            "2026-11-30",
            "21.90",
        ),
        product(
            "Arrosticini di Pecora",
            "Carne",
            "Restaurants, Specialty Butchers",
            "Skewers of mutton, 100 pieces",
            "CAR-003",
            "1 kg",
            "",
            "2026-10-30",
            "18.00",
        ),
        product(
            "Mozzarella di Bufala",
            "Latticini",
            "Restaurants, Pizzerias, Retail",
            "",
            "LAT-001",
            "250 g",
            "",
            "2026-10-25",
            "3.80",
        ),
        product(
            "Carnaroli Riserva",
            "Riso",
            "Restaurants, Specialty Food Stores, Catering",
            "Aged carnaroli for risotto",
            "RIS-004",
            "5 kg",
            "1 anno",
            "2028-01-01",
            "19.00",
        ),
        product(
            "Miele di Sulla",
            "Miele",
            "Specialty Food Stores, Retail",
            "Light, delicate honey from the Abruzzo hills",
            "MIE-002",
            "500 g",
            "",
            "2028-06-30",
            "9.50",
        ),
        product(
            "Olio Extravergine Intosso",
            "Olio",
            "Restaurants, Specialty Food Stores, Bakeries",
            "Single-cultivar extra virgin olive oil",
            "OLI-007",
            "5 l",
            "",
            "2027-09-30",
            "68.00",
        ),
        product(
            "Aceto di Vino Cotto",
            "Aceto",
            "Restaurants, Bars",
            "",
            "ACE-001",
            "250 ml",
            "3 anni",
            "",
            "11.20",
        ),
        product(
            "Genziana",
            "Spirits",
            "Restaurants, Bars",
            "Gentian root liqueur",
            "SPI-005",
            "700 ml",
            "",
            "",
            "",
        ),
    ]
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(dir) = args.output.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let products = sample_products();
    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    write_records(file, &products).context("writing sample catalog")?;

    log::info!("Wrote {} products to {}", products.len(), args.output.display());
    Ok(())
}
