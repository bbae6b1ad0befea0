//! Live Gemini API tests.
//!
//! These consume real tokens and require `GEMINI_API_KEY` (or
//! `GOOGLE_API_KEY`) in the environment or a `.env` file.
//! Run with: `cargo test -p lumina_models --features api`

use lumina_core::{ImageSize, ImageState, Language, ModelTier};
use lumina_interface::{Assistant, ImageRequest, LuminaDriver, OutlineRequest};
use lumina_models::GeminiDriver;
use tokio_stream::StreamExt;

fn live_driver() -> GeminiDriver {
    dotenvy::dotenv().ok();
    GeminiDriver::from_env().expect("GEMINI_API_KEY must be set for API tests")
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn outline_synthesis_returns_items() -> Result<(), Box<dyn std::error::Error>> {
    let driver = live_driver();

    let request = OutlineRequest::builder()
        .topic("Urban rooftop farming")
        .slide_count(3usize)
        .language(Language::English)
        .build()?;

    let outline = driver.synthesize_outline(&request).await?;

    assert_eq!(outline.len(), 3);
    assert!(outline[0].id.starts_with("slide-"));
    assert!(!outline[0].title.is_empty());
    println!("Outline: {outline:?}");

    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn image_synthesis_yields_a_data_uri() -> Result<(), Box<dyn std::error::Error>> {
    let driver = live_driver();

    let request = ImageRequest::builder()
        .prompt("A minimalist lighthouse at dawn")
        .size(ImageSize::Size1K)
        .tier(ModelTier::Efficient)
        .build()?;

    let state = driver.synthesize_image(&request).await?;

    match state {
        ImageState::Ready(uri) => assert!(uri.starts_with("data:image/png;base64,")),
        other => panic!("expected a ready image, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn brainstorm_streams_text_fragments() -> Result<(), Box<dyn std::error::Error>> {
    let driver = live_driver();

    let mut stream = driver.stream_brainstorm("community solar programs").await?;
    let mut collected = String::new();
    while let Some(fragment) = stream.next().await {
        collected.push_str(&fragment?);
    }

    assert!(!collected.is_empty());
    println!("Brainstorm: {collected}");

    Ok(())
}
