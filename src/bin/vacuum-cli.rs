use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vacuum-cli")]
#[command(about = "Send commands to a running vacuum-mock", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the server answers at all
    Ping,
    /// Start cleaning
    Start,
    /// Pause cleaning
    Pause,
    /// Send the vacuum back to its dock
    Return,
    /// Query the cleaning status
    Status,
}

impl Commands {
    fn path(&self) -> &'static str {
        match self {
            Commands::Ping => "/",
            Commands::Start => "/api/vacuum/start",
            Commands::Pause => "/api/vacuum/pause",
            Commands::Return => "/api/vacuum/return",
            Commands::Status => "/api/vacuum/status",
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let url = format!("{}{}", cli.url.trim_end_matches('/'), cli.command.path());
    let res = client.get(url).send().await?;

    let status = res.status();
    let text = res.text().await?;
    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        eprint!("{}", text);
        std::process::exit(1);
    }

    print!("{}", text);
    Ok(())
}
