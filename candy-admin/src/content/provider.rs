//! Content generation providers

use std::sync::Mutex;

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use shared::models::ContentType;
use shared::{AppError, ErrorCode};

use crate::error::AdminResult;

/// Produces marketing text for a prompt and channel
#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn generate(&self, prompt: &str, content_type: ContentType) -> AdminResult<String>;
}

const SOCIAL: &[&str] = &[
    "🍫 SUMMER SWEETNESS SPECIAL 🍫\n\nBeat the heat with our NEW chocolate collection! For a limited time, enjoy 20% OFF on all chocolate bars and assortments. Perfect for beach days, picnics, or just treating yourself at home.\n\n#SummerTreats #ChocolateLovers",
    "Introducing our NEW Wild Berry Gummy Bears! 🍓🫐\n\nMade with real fruit juice and zero artificial colors. These delicious treats pack a burst of summer flavor in every bite! Available now in-store and online.\n\nTag someone who needs these in their life!",
];

const WHATSAPP: &[&str] = &[
    "🎉 Special Offer Alert! 🎉\n\nHi there! We've just launched our summer collection of handcrafted chocolates. Get 20% off on all orders above $30 this weekend only! Reply 'YES' to get your discount code.",
    "🍬 New Arrival: Wild Berry Gummy Bears! 🫐\n\nBe the first to try our latest creation. Limited stock available. Order now and get a free sample of our bestselling chocolate bar!",
];

const EMAIL: &[&str] = &[
    "Subject: Sweeten Your Summer with Our New Collection! 🍫\n\nDear Candy Lover,\n\nWe're excited to introduce our Summer 2025 Collection, featuring handcrafted chocolates and artisanal candies perfect for the season.\n\nHighlights:\n- NEW: Wild Berry Chocolate Truffles\n- Limited Edition: Summer Fruit Gummy Bears\n- Classic Favorites: Now in Summer Packaging\n\nOrder now and enjoy 20% off your first purchase!\n\nSweet regards,\nYour Candy Team",
];

/// Stand-in generator picking a canned text for the channel
///
/// The prompt is ignored; only the content type selects the pool.
pub struct SampleContentProvider {
    rng: Mutex<StdRng>,
}

impl Default for SampleContentProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleContentProvider {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic sequence, for tests and demos
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn pool(content_type: ContentType) -> &'static [&'static str] {
        match content_type {
            ContentType::Social => SOCIAL,
            ContentType::Whatsapp => WHATSAPP,
            ContentType::Email => EMAIL,
        }
    }
}

#[async_trait]
impl ContentProvider for SampleContentProvider {
    async fn generate(&self, prompt: &str, content_type: ContentType) -> AdminResult<String> {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let text = Self::pool(content_type)
            .choose(&mut *rng)
            .ok_or_else(|| AppError::with_message(ErrorCode::ContentNotGenerated, "Empty sample pool"))?;
        tracing::debug!(content_type = %content_type, prompt_len = prompt.len(), "Sample content picked");
        Ok((*text).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_email_draws_only_from_email_pool() {
        let provider = SampleContentProvider::with_seed(7);
        for _ in 0..20 {
            let text = provider.generate("summer", ContentType::Email).await.unwrap();
            assert!(EMAIL.contains(&text.as_str()));
        }
    }

    #[tokio::test]
    async fn test_every_sample_eventually_drawn() {
        let provider = SampleContentProvider::with_seed(42);
        for content_type in ContentType::ALL {
            let pool = SampleContentProvider::pool(content_type);
            let mut seen = HashSet::new();
            for _ in 0..200 {
                let text = provider.generate("x", content_type).await.unwrap();
                assert!(pool.contains(&text.as_str()), "{content_type} drew outside its pool");
                seen.insert(text);
            }
            assert_eq!(seen.len(), pool.len(), "{content_type} pool not covered");
        }
    }

    #[test]
    fn test_pool_sizes() {
        assert_eq!(SampleContentProvider::pool(ContentType::Social).len(), 2);
        assert_eq!(SampleContentProvider::pool(ContentType::Whatsapp).len(), 2);
        assert_eq!(SampleContentProvider::pool(ContentType::Email).len(), 1);
    }
}
