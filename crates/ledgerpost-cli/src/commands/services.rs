//! Services catalog command

use anyhow::{bail, Result};
use ledgerpost_core::ContentStore;

use super::{print_json, truncate};

pub fn cmd_services(store: &ContentStore, slug: Option<&str>, json: bool) -> Result<()> {
    if let Some(slug) = slug {
        let Some(service) = store.get_service(slug) else {
            bail!("Service not found: {}", slug);
        };

        if json {
            return print_json(&service);
        }

        println!();
        println!("{} {}", service.number, service.title);
        println!("   ─────────────────────────────────────────────────────────────");
        println!("   {}", service.description);
        if !service.features.is_empty() {
            println!();
            for feature in &service.features {
                println!("   • {}", feature);
            }
        }
        return Ok(());
    }

    let services = store.list_services();

    if json {
        return print_json(&services);
    }

    println!();
    println!("🧾 Services");
    println!("   ─────────────────────────────────────────────────────────────");

    for service in &services {
        println!(
            "   {} │ {:<24} │ {}",
            service.number,
            truncate(&service.title, 24),
            truncate(&service.description, 40)
        );
    }

    Ok(())
}
