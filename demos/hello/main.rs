use std::fs::OpenOptions;
use std::io::Write;

use voice_adapter::{ModelPrecision, VoiceAdapter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let adapter = VoiceAdapter::init(ModelPrecision::Fp32)?;
    let synthesis = adapter
        .synthesize("Good evening, and welcome to the stream.", "af_heart")
        .await?;
    println!("estimated {:.2}s of audio", synthesis.audio_length);

    OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open("test.mp3")?
        .write_all(&synthesis.audio)?;
    Ok(())
}
