use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_ipsum_core::random::pool::{random_element, random_sample_unique};
use rs_ipsum_core::random::template::{bothify, lexify, numerify};
use rs_ipsum_core::random::{random_int, random_number};
use rs_ipsum_core::{randomize_nb_elements, Pool, Theme, ThemeRegistry, Variance};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Any `rand::Rng` can drive the generation: `rand::rng()` for fresh output,
    // a seeded `StdRng` to get the same text on every run
    let mut rng = StdRng::seed_from_u64(42);

    // The cake theme is bundled with the library
    let cake = Theme::cake();
    println!("Word: {}", cake.word(&mut rng)?);
    println!("Words: {:?}", cake.words(&mut rng, 5)?);

    // Around 6 words (+/-40%, at least 1), or exactly 6 with `variable = false`
    println!("Sentence: {}", cake.sentence(&mut rng, 6, true)?);
    println!("Exact sentence: {}", cake.sentence(&mut rng, 6, false)?);
    println!("Paragraph: {}", cake.paragraph(&mut rng, 3, true)?);

    // Below 25 chars the text is made of words, below 100 of sentences,
    // otherwise of paragraphs separated by a newline
    for max_chars in [20, 80, 300] {
        println!("Text ({max_chars}):\n{}", cake.text(&mut rng, max_chars)?);
    }

    // Texts smaller than 5 characters are refused
    match cake.text(&mut rng, 3) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Expected error: {e}"),
    }

    // Custom themes: another vocabulary, connector, punctuation and variance
    let shouting = Theme::new("shouting", ["hey", "ho", "let's", "go"])?
        .with_connector(", ")
        .with_punctuation("!")
        .with_variance(Variance::new(100, 200)?);
    println!("Custom: {}", shouting.sentence(&mut rng, 3, true)?);

    // Themes can be loaded from a folder of word-per-line `.txt` files
    match ThemeRegistry::load("./data") {
        Ok(registry) => println!("Themes in ./data: {}", registry.names().join(", ")),
        Err(e) => println!("No theme folder: {e}"),
    }

    // Generic primitives
    println!("Int in [10, 20]: {}", random_int(&mut rng, 10, 20)?);
    println!("4-digit number: {}", random_number(&mut rng, Some(4), true)?);
    println!("Near 10: {}", randomize_nb_elements(&mut rng, 10, false, false));
    println!("Weighted: {}", random_element(&mut rng, Pool::Weighted(&[("common", 0.8), ("rare", 0.2)]))?);
    println!("Unique: {:?}", random_sample_unique(&mut rng, Pool::Uniform(&["a", "b", "c", "d"]), Some(2))?);
    println!("Numerify: {}", numerify(&mut rng, "Order #%##-!@"));
    println!("Lexify: {}", lexify(&mut rng, "????"));
    println!("Bothify: {}", bothify(&mut rng, "## ??"));

    Ok(())
}
