/// Check if the current environment has the required external tools
pub async fn check_dependencies() -> Vec<String> {
    let mut missing = Vec::new();

    // Check for yt-dlp
    if !check_command_available("yt-dlp").await {
        missing.push("yt-dlp - required for YouTube audio extraction".to_string());
    }

    // Check for ffmpeg (yt-dlp needs it to transcode to mp3)
    if !check_command_available("ffmpeg").await {
        missing.push("ffmpeg - required by yt-dlp for mp3 conversion".to_string());
    }

    missing
}

/// Check if a command is available in PATH
async fn check_command_available(command: &str) -> bool {
    use tokio::process::Command;

    Command::new(command)
        .arg("--version")
        .output()
        .await
        .map(|output| output.status.success())
        .unwrap_or(false)
}
