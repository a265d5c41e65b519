//! Status command implementation

use anyhow::Result;
use spendwise_core::{Config, Engine, LocalArtifactStore};

pub fn cmd_status(config: &Config) -> Result<()> {
    println!();
    println!("📊 Spendwise Status");
    println!("   ─────────────────────────────────────────────────────────────");

    match &config.source {
        Some(path) => println!("   Config: {}", path.display()),
        None => println!("   Config: (built-in defaults)"),
    }
    println!("   Model: {}", config.model.path.display());
    println!("   Server: http://{}", config.bind_address());

    // Report on the saved artifact only; never seed from `status`
    let store = LocalArtifactStore::new(&config.model.path);
    match Engine::bootstrap(Box::new(store), false) {
        Ok(engine) => match engine.model_info() {
            Some(info) => {
                println!();
                println!("   🧠 Classifier: trained ({})", engine.origin());
                println!("      Rows: {}", info.documents);
                println!("      Vocabulary: {} terms", info.vocabulary_size);
                println!("      Accuracy: {:.1}%", info.accuracy * 100.0);
                println!(
                    "      Trained: {}",
                    info.trained_at.format("%Y-%m-%d %H:%M:%S UTC")
                );
                println!(
                    "      Fingerprint: {}",
                    info.fingerprint.get(..12).unwrap_or(info.fingerprint.as_str())
                );
            }
            None => {
                println!();
                println!("   ⚠️  Classifier: no usable artifact");
                if config.model.seed_on_missing {
                    println!("      The seed corpus will be used on next start");
                }
            }
        },
        Err(e) => {
            println!();
            println!("   ❌ Error reading classifier: {}", e);
        }
    }

    println!();
    Ok(())
}
