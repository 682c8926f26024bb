use clap::{Parser, Subcommand};

use chaosauth_lib::traits::CredentialStore;
use chaosauth_lib::{init_logging, AuthPaths, AuthState};

/// Record access/secret keys, sign payloads and verify signatures.
#[derive(Parser, Debug)]
#[command(name = "chaosauth")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Store an access/secret key pair in the cert file.
    RecordKey {
        #[arg(long)]
        access_key: String,

        /// Prefer an environment variable over a literal to keep it out of shell history.
        #[arg(long)]
        secret_key: String,
    },

    /// Print the signature of a payload.
    Sign {
        payload: String,
    },

    /// Verify a signature; exits with status 1 on mismatch.
    Auth {
        signature: String,
        payload: String,
    },

    /// Store the application identity.
    RecordApp {
        #[arg(long)]
        instance: String,

        #[arg(long)]
        group: String,

        /// Append instead of replacing the file.
        #[arg(long, default_value = "false")]
        append: bool,
    },

    /// Print the stored application identity.
    ReadApp {
        #[arg(long, default_value = "false")]
        json: bool,
    },
}

fn run(command: Commands) -> Result<bool, Box<dyn std::error::Error>> {
    let paths = AuthPaths::resolve()?;
    let state = AuthState::new_production(&paths);

    if !matches!(command, Commands::RecordKey { .. }) {
        if let Err(e) = state.credentials.restore_from_file() {
            tracing::debug!(error = %e, "No credential restored from cert file");
        }
    }

    match command {
        Commands::RecordKey { access_key, secret_key } => {
            state.credentials.record_secret_key(&access_key, &secret_key)?;
            println!("Recorded access key {}", state.credentials.access_key());
        }
        Commands::Sign { payload } => {
            println!("{}", state.signer.sign(&payload));
        }
        Commands::Auth { signature, payload } => {
            let ok = state.signer.auth(&signature, &payload);
            println!("{}", if ok { "ok" } else { "mismatch" });
            return Ok(ok);
        }
        Commands::RecordApp { instance, group, append } => {
            state.app_identity.record_application_to_file(&instance, &group, !append)?;
        }
        Commands::ReadApp { json } => {
            let identity = state.app_identity.read_app_info_from_file()?;
            if json {
                println!("{}", serde_json::to_string(&identity)?);
            } else {
                println!("appInstance={}\nappGroup={}", identity.app_instance, identity.app_group);
            }
        }
    }
    Ok(true)
}

fn main() {
    let _guard = init_logging();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
