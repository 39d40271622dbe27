use log::error;
use yew::prelude::*;

use crate::components::countdown::Countdown;
use crate::components::newsletter::NewsletterForm;
use crate::components::partners::PartnersTrack;
use crate::reveal::RevealAnimator;

struct Card {
    title: &'static str,
    body: &'static str,
    image: &'static str,
}

const STORIES: &[Card] = &[
    Card {
        title: "Built in Milton Keynes",
        body: "From a single garage to a championship-winning factory, every car starts on the same shop floor.",
        image: "/assets/stories/factory.jpg",
    },
    Card {
        title: "Pit Stop Records",
        body: "Sub-two-second stops are the product of thousands of rehearsals between race weekends.",
        image: "/assets/stories/pitstop.jpg",
    },
    Card {
        title: "The Next Generation",
        body: "Our junior programme brings karting talent all the way to the grid.",
        image: "/assets/stories/juniors.jpg",
    },
];

const TEAM: &[Card] = &[
    Card {
        title: "Driver #1",
        body: "Four-time world champion and the benchmark of the modern grid.",
        image: "/assets/team/driver-1.jpg",
    },
    Card {
        title: "Driver #22",
        body: "Fearless on the brakes and quick from the very first lap.",
        image: "/assets/team/driver-22.jpg",
    },
];

const PRODUCTS: &[Card] = &[
    Card {
        title: "Team Cap",
        body: "€45",
        image: "/assets/shop/cap.jpg",
    },
    Card {
        title: "Team Polo",
        body: "€80",
        image: "/assets/shop/polo.jpg",
    },
    Card {
        title: "Softshell Jacket",
        body: "€150",
        image: "/assets/shop/jacket.jpg",
    },
];

fn card(class: &'static str, item: &Card) -> Html {
    html! {
        <article class={class}>
            <img src={item.image} alt={item.title} loading="lazy" />
            <div class="card-content">
                <h3>{item.title}</h3>
                <p>{item.body}</p>
            </div>
        </article>
    }
}

fn section_header(eyebrow: &'static str, title: &'static str) -> Html {
    html! {
        <div class="section-header">
            <span class="section-eyebrow">{eyebrow}</span>
            <h2 class="section-title">{title}</h2>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Sections are all rendered by this component, so they exist by the
    // time the effect runs.
    {
        use_effect_with_deps(
            move |_| {
                let animator = match RevealAnimator::attach() {
                    Ok(animator) => Some(animator),
                    Err(err) => {
                        error!("Scroll animations disabled: {}", err);
                        None
                    }
                };
                move || drop(animator)
            },
            (),
        );
    }

    html! {
        <>
            <section id="hero" class="hero">
                <div class="hero-overlay"></div>
                <div class="hero-content">
                    <h1 class="hero-title">{"Gives You Wings"}</h1>
                    <p class="hero-subtitle">{"Season 2026 starts in Melbourne."}</p>
                    <a href="#race" class="btn btn-primary">{"Next Race"}</a>
                </div>
            </section>

            <section id="race" class="race-section">
                {section_header("Round 1", "Australian Grand Prix")}
                <Countdown />
            </section>

            <section id="story" class="story-section">
                {section_header("Our Story", "Racing Since 2005")}
                <div class="story-grid">
                    { for STORIES.iter().map(|story| card("story-card", story)) }
                </div>
            </section>

            <section id="team" class="team-section">
                {section_header("The Team", "Meet the Drivers")}
                <div class="team-grid">
                    { for TEAM.iter().map(|member| card("team-card", member)) }
                </div>
            </section>

            <section id="shop" class="shop-section">
                {section_header("Official Store", "Wear the Colours")}
                <div class="product-grid">
                    { for PRODUCTS.iter().map(|product| card("product-card", product)) }
                </div>
            </section>

            <section id="newsletter" class="newsletter-section">
                {section_header("The Paddock", "Join the Inner Circle")}
                <p class="newsletter-copy">
                    {"Race previews, behind-the-scenes stories and store drops, straight to your inbox."}
                </p>
                <NewsletterForm />
            </section>

            <section id="partners" class="partners-section">
                <h2 class="partners-title">{"Partners"}</h2>
                <PartnersTrack />
            </section>

            <footer class="footer">
                <p>{"A front-end demonstration built for educational purposes. Not affiliated with any racing team."}</p>
                <a href="#hero" class="footer-top-link">{"Back to top"}</a>
            </footer>
        </>
    }
}
