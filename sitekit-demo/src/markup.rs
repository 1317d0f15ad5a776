//! Markup for the two demo pages.

use sitedom::{Edges, Element, Size};

const LOREM: &str = "Zajišťujeme kompletní servis při prodeji i pronájmu nemovitostí. \
Od prvního odhadu ceny přes přípravu dokumentace až po předání klíčů se \
postaráme o každý krok a klient má po celou dobu přehled o stavu obchodu.";

fn nav() -> Element {
    Element::new("header")
        .id("header")
        .height(Size::Px(80))
        .child(Element::button("☰").id("nav-toggle").class("nav-toggle"))
        .child(
            Element::new("ul")
                .id("nav-menu")
                .class("nav-menu")
                .child(menu_link("#sluzby", "Služby", "link-services"))
                .child(menu_link("#reference", "Reference", "link-references"))
                .child(menu_link("#kontakt", "Kontakt", "link-contact")),
        )
}

fn menu_link(href: &str, label: &str, id: &str) -> Element {
    Element::new("li").child(Element::link(href, label).id(id))
}

fn reference_card(n: usize, paragraphs: usize) -> Element {
    let text = Element::div()
        .id(format!("reference-text-{n}"))
        .class("reference-text")
        .children((0..paragraphs).map(|_| Element::text(LOREM)));
    Element::div()
        .id(format!("reference-card-{n}"))
        .class("reference-card")
        .padding(Edges::all(16))
        .child(
            Element::div()
                .class("reference-content")
                .child(Element::text(format!("Reference {n}")).class("reference-title"))
                .child(text),
        )
}

/// Home page: header, services, references, contact form.
pub fn home() -> Element {
    Element::body()
        .id("home")
        .child(nav())
        .child(
            Element::section()
                .id("sluzby")
                .child(Element::text("Naše služby").class("section-header"))
                .children((1..=3).map(|n| {
                    Element::div()
                        .class("service-card")
                        .height(Size::Px(240))
                        .child(Element::text(format!("Služba {n}")))
                })),
        )
        .child(
            Element::section()
                .id("reference")
                .child(reference_card(1, 3))
                .child(reference_card(2, 1))
                .child(reference_card(3, 5)),
        )
        .child(
            Element::section()
                .id("kontakt")
                .class("content-section")
                .child(
                    Element::form()
                        .id("contact-form")
                        .class("contact-form")
                        .child(Element::input("name").id("contact-name"))
                        .child(Element::input("email").id("contact-email"))
                        .child(Element::textarea("message").id("contact-message"))
                        .child(Element::button("Odeslat").id("contact-send")),
                ),
        )
}

/// Property detail page: gallery with lightbox and a long description.
pub fn property() -> Element {
    let gallery = Element::div().class("gallery").children((1..=8).map(|n| {
        Element::div()
            .id(format!("gallery-item-{n}"))
            .class("gallery-item")
            .height(Size::Px(180))
            .child(Element::img(
                format!("/img/byt-{n}.jpg"),
                format!("Fotografie bytu {n}"),
            ))
    }));

    Element::body()
        .id("property")
        .child(nav())
        .child(gallery)
        .child(
            Element::section()
                .class("content-section")
                .child(
                    Element::div()
                        .id("property-description")
                        .class("property-description-text")
                        .children((0..6).map(|_| Element::text(LOREM))),
                )
                .child(
                    Element::button("Zobrazit více")
                        .id("description-toggle")
                        .class("property-description-toggle"),
                ),
        )
        .child(
            Element::div()
                .id("lightbox")
                .child(Element::img("", "").id("lightbox-image"))
                .child(Element::button("×").class("lightbox-close"))
                .child(Element::button("‹").id("lightbox-prev").class("lightbox-prev"))
                .child(Element::button("›").id("lightbox-next").class("lightbox-next")),
        )
}
