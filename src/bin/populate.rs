//! Petstore populator.
//!
//! Logs in once against the auth service and fills the core service with
//! random pets. Useful to give the MCP tools something to list and search.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing_subscriber::{EnvFilter, fmt};

use petstore_mcp_server::core::config::{
    CredentialsConfig, DEFAULT_AUTH_URL, DEFAULT_CORE_URL, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use petstore_mcp_server::domains::petstore::{
    AuthClient, CoreClient, PetDraft, TokenProvider, http_client,
};

const PET_NAMES: &[&str] = &[
    "Bella", "Charlie", "Max", "Luna", "Rocky", "Milo", "Coco", "Buddy", "Lucy", "Daisy",
];

const BREEDS: &[&str] = &[
    "Labrador",
    "Poodle",
    "Bulldog",
    "Beagle",
    "Shiba Inu",
    "Pug",
    "German Shepherd",
    "Boxer",
    "Dachshund",
    "Mixed",
];

/// Populate the Petstore core service with dummy pets (uses the auth service for a token).
#[derive(Debug, Parser)]
#[command(name = "petstore-populate", version)]
struct Args {
    /// Number of pets to create.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Base URL of the auth service.
    #[arg(long, env = "AUTH_URL", default_value = DEFAULT_AUTH_URL)]
    auth_url: String,

    /// Base URL of the core service.
    #[arg(long, env = "CORE_URL", default_value = DEFAULT_CORE_URL)]
    core_url: String,

    /// Auth username.
    #[arg(long, env = "POPULATOR_USER", default_value = "admin")]
    user: String,

    /// Auth password.
    #[arg(long = "pass", env = "POPULATOR_PASS", default_value = "admin", hide_env_values = true)]
    password: String,
}

fn random_age<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random_range(1..=15)
}

/// Build the payload for the `seq`-th pet, e.g. `Luna-3`.
fn build_pet_draft<R: Rng + ?Sized>(seq: u32, rng: &mut R) -> PetDraft {
    let name = PET_NAMES.choose(rng).copied().unwrap_or("Pet");
    let breed = BREEDS.choose(rng).copied().unwrap_or("Mixed");
    PetDraft::new(format!("{}-{}", name, seq), breed, random_age(rng))
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let http = http_client(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))?;
    let credentials = CredentialsConfig {
        user: args.user.clone(),
        pass: args.password.clone(),
    };
    let auth = AuthClient::new(http.clone(), &args.auth_url, credentials);
    let core = CoreClient::new(http, &args.core_url);

    let token = match auth.fetch_token().await {
        Ok(token) => token,
        Err(e) => {
            println!("Error getting token: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut rng = rand::rng();
    let mut created = 0u32;

    for seq in 1..=args.count {
        let draft = build_pet_draft(seq, &mut rng);
        match core.create_lenient(&token, &draft).await {
            Ok(id) => {
                created += 1;
                println!(
                    "[{}/{}] created pet id={} ({})",
                    seq,
                    args.count,
                    id.as_deref().unwrap_or("?"),
                    draft.name
                );
            }
            Err(e) => println!("[{}/{}] failed: {}", seq, args.count, e),
        }
    }

    println!(
        "Finished: {}/{} pets created at {}",
        created,
        args.count,
        core.pets_url()
    );

    Ok(ExitCode::SUCCESS)
}
