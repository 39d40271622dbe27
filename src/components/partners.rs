use log::debug;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Partner {
    pub name: &'static str,
    pub logo: &'static str,
}

pub const PARTNERS: &[Partner] = &[
    Partner { name: "Oracle", logo: "/assets/partners/oracle.svg" },
    Partner { name: "Ford", logo: "/assets/partners/ford.svg" },
    Partner { name: "Mobil 1", logo: "/assets/partners/mobil1.svg" },
    Partner { name: "TAG Heuer", logo: "/assets/partners/tag-heuer.svg" },
    Partner { name: "Pirelli", logo: "/assets/partners/pirelli.svg" },
    Partner { name: "Puma", logo: "/assets/partners/puma.svg" },
];

/// The items followed by a copy of themselves, so a CSS animation that
/// slides the track by half its width loops without a visible seam.
pub fn looped<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().chain(items.iter()).cloned().collect()
}

#[derive(Properties, PartialEq)]
pub struct PartnersTrackProps {
    #[prop_or(PARTNERS.to_vec())]
    pub partners: Vec<Partner>,
}

#[function_component(PartnersTrack)]
pub fn partners_track(props: &PartnersTrackProps) -> Html {
    // Doubled once on mount; later renders reuse the same track.
    let track = {
        let partners = props.partners.clone();
        use_state(move || {
            debug!("Duplicating {} partner logos", partners.len());
            looped(&partners)
        })
    };

    html! {
        <div class="partners-slider">
            <div class="partners-track">
                { for track.iter().map(|partner| html! {
                    <div class="partner-logo">
                        <img src={partner.logo} alt={partner.name} loading="lazy" />
                    </div>
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looped_doubles_in_order() {
        let track = looped(&["a", "b", "c"]);
        assert_eq!(track, vec!["a", "b", "c", "a", "b", "c"]);
    }

    #[test]
    fn test_looped_partner_track() {
        let track = looped(PARTNERS);
        assert_eq!(track.len(), PARTNERS.len() * 2);
        assert_eq!(&track[..PARTNERS.len()], PARTNERS);
        assert_eq!(&track[PARTNERS.len()..], PARTNERS);
    }

    #[test]
    fn test_looped_empty_track() {
        assert!(looped::<Partner>(&[]).is_empty());
    }

    #[test]
    fn test_looping_twice_doubles_again() {
        let once = looped(&[1, 2]);
        assert_eq!(looped(&once).len(), 8);
    }
}
