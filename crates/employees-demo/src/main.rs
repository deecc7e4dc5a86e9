//! Employee directory demo: load a JSON feed, group it by department.
//!
//! Run with: cargo run --bin employees
//!
//! Environment overrides:
//! - EMPLOYEES_URL - endpoint serving a JSON array of employee objects
//! - EMPLOYEES_API_KEY - value sent as the x-api-key header
//!
//! When the endpoint is unreachable the demo renders a bundled sample
//! instead, so it works offline.

use std::env;

use anyhow::Result;
use trestle::{decode_items, Column, GridSpec, HttpSource, ItemSource, TextGrid};

const DEFAULT_URL: &str = "https://my.api.mockaroo.com/employees.json";
const DEFAULT_API_KEY: &str = "a53dac10";

const SAMPLE: &str = r#"[
  { "first_name": "Ann", "last_name": "Doyle", "email": "adoyle@example.com", "department": "Engineering" },
  { "first_name": "Bo", "last_name": "Lindqvist", "email": "blindqvist@example.com", "department": "Sales" },
  { "first_name": "Cy", "last_name": "Okafor", "email": "cokafor@example.com", "department": "Engineering" },
  { "first_name": "Dee", "last_name": "Marsh", "email": "dmarsh@example.com", "department": "Support" },
  { "first_name": "Ed", "last_name": "Umari", "email": "eumari@example.com", "department": "Sales" },
  { "first_name": "Flo", "last_name": "Reyes", "email": "freyes@example.com", "department": "Engineering" }
]"#;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let url = env::var("EMPLOYEES_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
    let api_key = env::var("EMPLOYEES_API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string());

    let source = HttpSource::new(url).api_key(api_key);
    let items = match source.fetch_items().await {
        Ok(items) => items,
        Err(err) => {
            eprintln!("Falling back to the bundled sample: {err}");
            decode_items(SAMPLE)?
        }
    };

    let spec = GridSpec::builder()
        .column(Column::new("first_name").header("First"))
        .column(Column::new("last_name").header("Last"))
        .column(Column::new("email").header("Email"))
        .group_by("department")
        .separator("  ")
        .build();

    println!("{}", TextGrid::new(spec).header().render(&items));
    Ok(())
}
