use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use cosmos_signer::{PrivateKey, PrivateKeyBytes, Signer, SignerConfig, SigningInput};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cosmos-signer", version, about = "Sign Cosmos SDK transactions")]
struct Cli {
    /// Emit debug logs to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign a transaction and print the full signing output as JSON
    Sign(SignArgs),
    /// Sign a transaction and print only the signed legacy JSON document
    SignJson(SignArgs),
    /// Print the compressed public key for a private key
    Pubkey(KeyArgs),
}

#[derive(Args)]
struct KeyArgs {
    /// Hex-encoded secp256k1 private key
    #[arg(long, env = "COSMOS_SIGNER_KEY", hide_env_values = true)]
    key_hex: String,
}

#[derive(Args)]
struct SignArgs {
    /// Signing request JSON (reads stdin when omitted)
    #[arg(long)]
    input: Option<PathBuf>,

    #[command(flatten)]
    key: KeyArgs,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

fn read_request(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn load_input(args: &SignArgs) -> Result<SigningInput> {
    let request = read_request(args.input.as_ref())?;
    if request.trim().is_empty() {
        bail!("empty signing request");
    }
    let key = PrivateKeyBytes::from_hex(&args.key.key_hex)?;
    Ok(SigningInput::from_json(&request)?.with_private_key(key))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SignerConfig::from_env().with_debug_logging(cli.debug);
    config.apply();

    match cli.command {
        Command::Sign(args) => {
            let config = config.with_pretty_json(args.pretty);
            let output = Signer::sign(&load_input(&args)?)?;
            let rendered = if config.pretty_json {
                serde_json::to_string_pretty(&output)?
            } else {
                serde_json::to_string(&output)?
            };
            println!("{}", rendered);
        }
        Command::SignJson(args) => {
            let output = Signer::sign(&load_input(&args)?)?;
            println!("{}", output.json);
        }
        Command::Pubkey(args) => {
            let bytes = PrivateKeyBytes::from_hex(&args.key_hex)?;
            let key = PrivateKey::from_bytes(bytes.as_bytes())?;
            println!("{}", hex::encode(key.public_key()));
        }
    }

    Ok(())
}
