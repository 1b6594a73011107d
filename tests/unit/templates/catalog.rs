use super::*;

#[test]
fn ids_are_the_fixed_enumeration() {
    let card: Vec<_> = CardTemplate::ALL.iter().map(|t| t.id()).collect();
    assert_eq!(card, ["classic", "modern", "elegant"]);

    let flyer: Vec<_> = FlyerTemplate::ALL.iter().map(|t| t.id()).collect();
    assert_eq!(flyer, ["divine", "hope", "fire"]);
}

#[test]
fn lookups_roundtrip_every_id() {
    for t in CardTemplate::ALL {
        assert_eq!(CardTemplate::from_id(t.id()), Some(t));
    }
    for t in FlyerTemplate::ALL {
        assert_eq!(FlyerTemplate::resolve(t.id()), t);
    }
}

#[test]
fn unknown_ids() {
    assert_eq!(CardTemplate::from_id("CLASSIC"), None);
    assert_eq!(FlyerTemplate::resolve("galaxy"), FlyerTemplate::Divine);
    assert_eq!(FlyerTemplate::resolve(""), FlyerTemplate::Divine);
}

#[test]
fn carousel_wraps_both_ways() {
    assert_eq!(step_card_template("classic", true), "modern");
    assert_eq!(step_card_template("elegant", true), "classic");
    assert_eq!(step_card_template("classic", false), "elegant");
    assert_eq!(step_flyer_template("fire", true), "divine");
    assert_eq!(step_flyer_template("divine", false), "fire");
}

#[test]
fn carousel_from_unknown_id() {
    assert_eq!(step_card_template("nope", true), "classic");
    assert_eq!(step_card_template("nope", false), "elegant");
}

#[test]
fn names_and_previews_are_present() {
    assert_eq!(CardTemplate::Classic.name(), "Vintage");
    assert_eq!(CardTemplate::Modern.preview(), "🌹");
    for t in FlyerTemplate::ALL {
        assert!(!t.name().is_empty());
        assert!(!t.preview().is_empty());
    }
}
