use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mobie2text",
    about = "Transcribe YouTube videos to Japanese text over a simple HTTP API",
    version,
    long_about = "A small web service: POST a YouTube URL to /api/transcribe and get the \
spoken audio back as Japanese text. Audio is fetched with yt-dlp and transcribed with \
the OpenAI Whisper API."
)]
pub struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Scratch directory for downloaded audio files
    #[arg(long, value_name = "DIR", default_value = "/tmp/mobie2text")]
    pub temp_dir: PathBuf,

    /// Path to the yt-dlp executable
    #[arg(long, value_name = "PATH", default_value = "yt-dlp")]
    pub yt_dlp: String,

    /// Base URL of the OpenAI-compatible transcription API
    #[arg(long, value_name = "URL", default_value = "https://api.openai.com/v1")]
    pub api_base: String,

    /// Environment variable to read the API key from
    #[arg(long, value_name = "VAR", default_value = "OPENAI_API_KEY")]
    pub api_key_env: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
