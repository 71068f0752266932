use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "konsultasi",
    version,
    about = "Asisten kesehatan wanita AI dengan antarmuka chat terminal"
)]
pub struct Cli {
    /// Path to the secrets file holding GEMINI_API_KEY
    #[arg(long)]
    pub secrets: Option<String>,
}
