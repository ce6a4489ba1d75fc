use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use infradash::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use infradash::inventory;
use infradash::models::{AppState, Ec2Instance};
use infradash::routes::build_app;

#[derive(Parser)]
#[command(
    name = "infradash",
    version,
    about = "Infrastructure dashboard inventory tool",
    long_about = r#"Infradash — inspect and serve a mock EC2 inventory file.

The inventory lives in a JSON file (MockData/mock_ec2.json by default, or set
MOCK_DATA_PATH). Running with no subcommand decodes the file and pretty-prints
it to stdout.

Examples:
  1) Pretty-print the inventory:
      infradash
  2) Table view:
      infradash list
  3) Serve it to the dashboard frontend:
      infradash serve --host 127.0.0.1 --port 5000
"#,
    after_help = "Use `infradash <subcommand> --help` for subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Pretty-print the inventory as indented JSON
    #[command(about = "Pretty-print the inventory", long_about = "Decode the mock data file and re-serialize it to stdout as 2-space indented JSON. This is also the default when no subcommand is given.")]
    Print {
        /// Path to the mock data file (overrides MOCK_DATA_PATH)
        #[arg(long)]
        data_file: Option<PathBuf>,
    },
    /// List the inventory as a table
    #[command(about = "List instances", long_about = "Render the decoded inventory as a terminal table (ID, name, type, state, addresses).")]
    List {
        /// Path to the mock data file (overrides MOCK_DATA_PATH)
        #[arg(long)]
        data_file: Option<PathBuf>,
    },
    /// Show a single instance by its InstanceId
    #[command(about = "Show one instance", long_about = "Look up a record by its InstanceId and pretty-print it. Exits non-zero when the id is unknown.")]
    Show {
        instance_id: String,
        /// Path to the mock data file (overrides MOCK_DATA_PATH)
        #[arg(long)]
        data_file: Option<PathBuf>,
    },
    /// Start the HTTP API server for the dashboard frontend
    #[command(about = "Serve the inventory over HTTP", long_about = "Expose GET /api/metrics and GET /api/metrics/:instance_id, CORS-restricted to FRONTEND_ORIGIN.")]
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to the mock data file (overrides MOCK_DATA_PATH)
        #[arg(long)]
        data_file: Option<PathBuf>,
    },
}

fn resolve_data_file(data_file: Option<PathBuf>) -> PathBuf {
    data_file.unwrap_or_else(|| PathBuf::from(config::get_data_file()))
}

/// Fail-fast load for the CLI commands: any read or parse failure is fatal
/// before a single byte of output is produced.
fn load_or_exit(path: &Path) -> Vec<Ec2Instance> {
    match inventory::load_instances(path) {
        Ok(instances) => instances,
        Err(e) => {
            tracing::error!(%e, "Failed to load mock inventory");
            eprintln!("{}", yansi::Paint::new(e.to_string()).red());
            process::exit(1);
        }
    }
}

fn render_or_exit<T: serde::Serialize>(value: &T) -> String {
    match inventory::render_pretty(value) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{}", yansi::Paint::new(e.to_string()).red());
            process::exit(1);
        }
    }
}

fn print_instance_table(instances: &[Ec2Instance]) {
    if instances.is_empty() {
        println!("(empty list)");
        return;
    }
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w - 4);
    }
    table.set_header(vec!["ID", "Name", "Type", "State", "Private IP", "Public IP"]);
    for i in instances {
        table.add_row(vec![
            &i.instance_id,
            &i.name,
            &i.instance_type,
            &i.state,
            &i.private_ip,
            &i.public_ip,
        ]);
    }
    println!("\n{table}\n");
}

async fn start_server(state: AppState, host: &str, port: u16) {
    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::new("Invalid host/port format").red(), e);
            process::exit(1);
        }
    };
    let app = build_app(state);
    tracing::info!(%addr, "Starting infradash API server");
    println!(
        "{} {}",
        yansi::Paint::new("API server running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Stop any process using this port, or pick a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    // No subcommand means the plain decode-and-pretty-print cycle
    let command = cli.command.unwrap_or(Commands::Print { data_file: None });

    match command {
        Commands::Print { data_file } => {
            config::load_env_file(None);
            let path = resolve_data_file(data_file);
            let instances = load_or_exit(&path);
            println!("{}", render_or_exit(&instances));
        }
        Commands::List { data_file } => {
            config::load_env_file(None);
            let path = resolve_data_file(data_file);
            let instances = load_or_exit(&path);
            print_instance_table(&instances);
        }
        Commands::Show { instance_id, data_file } => {
            config::load_env_file(None);
            let path = resolve_data_file(data_file);
            let instances = load_or_exit(&path);
            match inventory::find_instance(&instances, &instance_id) {
                Some(instance) => println!("{}", render_or_exit(instance)),
                None => {
                    eprintln!(
                        "{} '{}' {}",
                        yansi::Paint::new("Instance").red(),
                        instance_id,
                        yansi::Paint::new("not found").red()
                    );
                    process::exit(1);
                }
            }
        }
        Commands::Serve { host, port, env_file, data_file } => {
            config::load_env_file(env_file.as_deref());
            let path = resolve_data_file(data_file);
            // The server keeps going on a bad data file and serves an empty
            // inventory; fail-fast is a CLI contract only.
            let instances = match inventory::load_instances(&path) {
                Ok(instances) => instances,
                Err(e) => {
                    tracing::error!(%e, "Failed to load mock inventory; serving an empty list");
                    eprintln!("{}", yansi::Paint::new(e.to_string()).yellow());
                    Vec::new()
                }
            };
            let state = AppState::new(instances, config::get_frontend_origin());
            start_server(state, &host, port).await;
        }
    }
}
