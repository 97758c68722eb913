use tls_content_validator::infra::{config, logging};
use tls_content_validator::{storage, SectionRegistry};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Reads (all optional):\n\
           DATABASE_URL, DATABASE_MAX_CONNECTIONS, BIND_ADDR, RUST_LOG\n\
         Without DATABASE_URL the in-memory store is checked instead.\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_env();
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    // Force-read config (nice error messages if malformed)
    let max_connections = config::max_connections()?;
    println!("> Preflight:");
    println!(
        "  DATABASE_URL={}",
        if config::database_url().is_some() { "<set>" } else { "<unset, in-memory>" }
    );
    println!("  DATABASE_MAX_CONNECTIONS={}", max_connections);
    println!("  BIND_ADDR={}", config::bind_addr());

    // Schema table
    let registry = SectionRegistry::builtin()?;
    println!("  Section types ({}):", registry.len());
    for definition in registry.definitions() {
        println!(
            "    {:<14} max/page={} fields={} pages={}",
            definition.key,
            definition.max_per_page,
            definition.fields.len(),
            definition.allowed_pages.join(",")
        );
    }

    // Store connectivity
    let store = storage::open_from_env().await?;
    store.ping().await?;
    println!("  Store: reachable");

    println!("> Preflight OK");
    Ok(())
}
