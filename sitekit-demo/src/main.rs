mod markup;

use std::error::Error;
use std::fs::File;
use std::time::{Duration, Instant};

use simplelog::{Config, LevelFilter, WriteLogger};
use sitekit::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    let log_file = File::create("sitekit-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    run_home()?;
    run_property()?;
    Ok(())
}

fn run_home() -> Result<(), Box<dyn Error>> {
    log::info!("home page session");
    let mut page = home_page(markup::home())?;
    page.ready();

    if let Some(cards) = page.behavior_ref::<CollapsibleController>() {
        println!(
            "reference cards: {} collapsed, group height {:?}",
            cards.blocks().len(),
            cards.group_height()
        );
    }

    page.click("nav-toggle");
    let outcome = page.click("link-contact");
    println!("menu link handled by {:?}", outcome.handled_by);

    // Simulated 60 Hz frames
    let mut now = Instant::now();
    while page.viewport().is_animating() {
        now += Duration::from_millis(16);
        page.tick(now);
    }
    println!("scrolled to {}px", page.viewport().scroll_y());

    page.submit("contact-form");
    if let Some(result) = page
        .behavior_ref::<ContactForm>()
        .and_then(|form| form.last_result())
    {
        for error in result.errors() {
            println!("  {}: {}", error.field_name, error.message);
        }
    }

    page.set_value("contact-name", "Jana Nováková");
    page.set_value("contact-email", "jana@example.cz");
    page.set_value("contact-message", "Dobrý den, mám zájem o prohlídku.");
    page.submit("contact-form");
    for alert in page.take_alerts() {
        println!("alert: {alert}");
    }
    Ok(())
}

fn run_property() -> Result<(), Box<dyn Error>> {
    log::info!("property page session");
    let mut page = property_page(markup::property())?;
    page.ready();

    page.click("gallery-item-1");
    page.click("lightbox-prev");
    page.key(Key::Right);
    page.key(Key::Right);
    let shown = page
        .behavior_ref::<Lightbox>()
        .and_then(|lightbox| lightbox.images().get(lightbox.index()));
    if let Some(image) = shown {
        println!("lightbox shows {} ({})", image.src, image.alt);
    }
    page.key(Key::Escape);

    page.click("description-toggle");
    if let Some(toggle) = page.element("description-toggle") {
        println!("description toggle: {}", toggle.text_content());
    }

    page.scroll_by(1200);
    if let Some(reveal) = page.behavior_ref::<RevealObserver>() {
        println!("{} elements still hidden", reveal.observed().len());
    }
    Ok(())
}
